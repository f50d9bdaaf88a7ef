use std::num::NonZeroUsize;

/// Support threshold used when the caller does not provide one.
pub const DEFAULT_MIN_SUPPORT: f64 = 0.8;

/// How the next candidate generation is built from the current survivors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinStrategy {
    /// Every ordered pair `(a, b)` whose difference `b \ a` is a single item
    /// yields `a ∪ (b \ a)`. No subset pruning.
    #[default]
    Pairwise,
    /// Classical join on a shared `k - 1` prefix followed by pruning of
    /// candidates with an infrequent `k`-subset. Produces the same final
    /// result as `Pairwise` with fewer candidates to count.
    Prefix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinerConfig {
    pub join: JoinStrategy,
    /// Count support and join on the rayon thread pool.
    pub parallel: bool,
    /// Stop after the round that produced itemsets of this size.
    pub max_itemset_size: Option<NonZeroUsize>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            join: JoinStrategy::Pairwise,
            parallel: true,
            max_itemset_size: None,
        }
    }
}

impl MinerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_join(mut self, join: JoinStrategy) -> Self {
        self.join = join;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_itemset_size(mut self, size: NonZeroUsize) -> Self {
        self.max_itemset_size = Some(size);
        self
    }

    pub(crate) fn reached_max_size(&self, itemset_size: usize) -> bool {
        self.max_itemset_size
            .is_some_and(|max| itemset_size >= max.get())
    }
}
