pub mod combinations;
pub mod growth;
pub mod memory;
pub mod utils;

use std::fmt::Debug;
use std::hash::Hash;

pub use growth::{
    build_conditional_fp_tree, build_fp_tree, count_items, fp_growth, fp_growth_algorithm,
    frequent_items, FPNode, FPTree, ItemCounts, ItemOrder, PrefixPath,
};
pub use memory::{MemoryBudget, MemoryGuard};
pub use utils::{FrequentItemsets, FrequentLevel};

/// An item label the miner can work with.
///
/// `Ord` provides the tie-break between equally frequent items, which keeps
/// tree shapes reproducible across runs.
pub trait Item: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Item for T {}
