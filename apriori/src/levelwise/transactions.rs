use super::itemset::{ItemId, Itemset};
use ndarray::ArrayView2;
use std::collections::{BTreeSet, HashMap, HashSet};

/// One observed set of items, e.g. a single receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    items: HashSet<ItemId>,
}

impl Transaction {
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// True iff every item of `itemset` appears in this transaction.
    pub fn contains_all(&self, itemset: &Itemset) -> bool {
        itemset.items().iter().all(|item| self.items.contains(item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }
}

/// Read-only collection of transactions with interned item tokens.
///
/// Tokens are assigned dense [`ItemId`]s in first-seen order. The store is
/// built once and never mutated while mining.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    labels: Vec<String>,
    index: HashMap<String, ItemId>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction given as item tokens. Repeated tokens collapse.
    pub fn push<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: HashSet<ItemId> = tokens
            .into_iter()
            .map(|token| self.intern(token.as_ref()))
            .collect();
        self.transactions.push(Transaction { items });
    }

    /// Builds a store from a binary transaction matrix: rows are transactions
    /// and a non-zero cell at column `j` means item `j` is present. Item ids
    /// equal column indices and labels are the indices rendered as text.
    pub fn from_matrix(matrix: ArrayView2<i32>) -> Self {
        let num_items = matrix.ncols();
        let mut store = Self::new();
        for column in 0..num_items {
            store.intern(&column.to_string());
        }

        store.transactions = matrix
            .rows()
            .into_iter()
            .map(|row| {
                Transaction::new(
                    row.iter()
                        .enumerate()
                        .filter(|&(_, &cell)| cell != 0)
                        .map(|(item, _)| item),
                )
            })
            .collect();
        store
    }

    fn intern(&mut self, token: &str) -> ItemId {
        if let Some(&id) = self.index.get(token) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(token.to_owned());
        self.index.insert(token.to_owned(), id);
        id
    }

    pub fn contains_all(&self, transaction: &Transaction, itemset: &Itemset) -> bool {
        transaction.contains_all(itemset)
    }

    /// Number of transactions; the support denominator.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Distinct items occurring in at least one transaction, ascending.
    pub fn distinct_items(&self) -> Vec<ItemId> {
        let items: BTreeSet<ItemId> = self.transactions.iter().flat_map(|t| t.items()).collect();
        items.into_iter().collect()
    }

    pub fn label(&self, item: ItemId) -> Option<&str> {
        self.labels.get(item).map(String::as_str)
    }

    pub fn id_of(&self, token: &str) -> Option<ItemId> {
        self.index.get(token).copied()
    }

    /// Resolves `tokens` to an itemset; `None` if any token is unknown.
    pub fn itemset_of<S: AsRef<str>>(&self, tokens: &[S]) -> Option<Itemset> {
        tokens
            .iter()
            .map(|token| self.id_of(token.as_ref()))
            .collect::<Option<Vec<_>>>()
            .map(Itemset::new)
    }

    /// Item labels of `itemset`, sorted lexicographically.
    pub fn labels_of(&self, itemset: &Itemset) -> Vec<String> {
        let mut labels: Vec<String> = itemset
            .items()
            .iter()
            .filter_map(|&item| self.label(item))
            .map(str::to_owned)
            .collect();
        labels.sort();
        labels
    }
}

impl<'a> IntoIterator for &'a TransactionStore {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> FromIterator<T> for TransactionStore
where
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store = Self::new();
        for tokens in iter {
            store.push(tokens);
        }
        store
    }
}
