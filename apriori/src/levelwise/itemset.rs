/// Dense index of an item token inside one [`TransactionStore`](super::TransactionStore).
pub type ItemId = usize;

/// Immutable set of items, kept sorted and deduplicated so that equality and
/// hashing are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset {
    items: Box<[ItemId]>,
}

impl Itemset {
    pub fn new(mut items: Vec<ItemId>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self {
            items: items.into_boxed_slice(),
        }
    }

    pub fn singleton(item: ItemId) -> Self {
        Self {
            items: Box::new([item]),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// Returns the only item of `other` missing from `self`, or `None` when
    /// `other \ self` is empty or holds more than one item.
    pub fn single_difference(&self, other: &Itemset) -> Option<ItemId> {
        let mut missing = None;
        for &item in other.items() {
            if self.contains(item) {
                continue;
            }
            if missing.is_some() {
                return None;
            }
            missing = Some(item);
        }
        missing
    }

    /// Copy of `self` with `item` inserted at its sorted position.
    pub fn with_item(&self, item: ItemId) -> Itemset {
        match self.items.binary_search(&item) {
            Ok(_) => self.clone(),
            Err(pos) => {
                let mut items = Vec::with_capacity(self.items.len() + 1);
                items.extend_from_slice(&self.items[..pos]);
                items.push(item);
                items.extend_from_slice(&self.items[pos..]);
                Self {
                    items: items.into_boxed_slice(),
                }
            }
        }
    }

    /// True when both itemsets have the same length and agree on every item
    /// but the last.
    pub fn shares_prefix(&self, other: &Itemset) -> bool {
        let n = self.items.len();
        n == other.items.len() && n > 0 && self.items[..n - 1] == other.items[..n - 1]
    }

    pub fn last(&self) -> Option<ItemId> {
        self.items.last().copied()
    }

    /// All subsets obtained by removing exactly one item.
    pub fn immediate_subsets(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.items.len()).map(move |skip| {
            let items: Vec<ItemId> = self
                .items
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != skip)
                .map(|(_, &item)| item)
                .collect();
            Self {
                items: items.into_boxed_slice(),
            }
        })
    }
}

impl From<Vec<ItemId>> for Itemset {
    fn from(items: Vec<ItemId>) -> Self {
        Self::new(items)
    }
}

impl<const N: usize> From<[ItemId; N]> for Itemset {
    fn from(items: [ItemId; N]) -> Self {
        Self::new(items.to_vec())
    }
}
