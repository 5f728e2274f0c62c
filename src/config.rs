use crate::error::{Error, Result};

const SNAP_EPSILON: f64 = 1e-9;

/// Minimum support as a percentage of the transaction count, in `(0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinSupport(f64);

impl MinSupport {
    pub fn new(percent: f64) -> Result<Self> {
        // NaN fails both comparisons
        if percent > 0.0 && percent <= 100.0 {
            Ok(Self(percent))
        } else {
            Err(Error::InvalidMinSupport(percent))
        }
    }

    /// Support given as a fraction in `(0, 1]`, as the numpy binding takes it.
    pub fn from_fraction(fraction: f64) -> Result<Self> {
        Self::new(fraction * 100.0)
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Absolute threshold `ceil(percent / 100 * num_transactions)`.
    ///
    /// Products within rounding noise of an integer snap to it first, so that
    /// a percent of `7.000000000000001` (from `0.07 * 100`) on 100
    /// transactions yields 7 rather than 8.
    pub fn to_count(&self, num_transactions: usize) -> usize {
        let exact = self.0 * num_transactions as f64 / 100.0;
        let nearest = exact.round();
        let snapped = if (exact - nearest).abs() <= SNAP_EPSILON * nearest.max(1.0) {
            nearest
        } else {
            exact
        };
        snapped.ceil() as usize
    }
}

/// Parameters of one mining run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiningConfig {
    /// Absolute support threshold; itemsets below it are discarded.
    pub min_count: usize,
    /// Enumerate subsets directly when a tree degenerates to a single path.
    pub single_path_shortcut: bool,
    /// Upper bound on FP-tree nodes alive at once across the recursion.
    pub max_tree_nodes: Option<usize>,
}

impl MiningConfig {
    pub fn new(min_count: usize) -> Self {
        Self {
            min_count,
            single_path_shortcut: true,
            max_tree_nodes: None,
        }
    }

    pub fn with_single_path_shortcut(mut self, enabled: bool) -> Self {
        self.single_path_shortcut = enabled;
        self
    }

    pub fn with_max_tree_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_tree_nodes = max_nodes;
        self
    }
}
