pub mod builder;
pub mod counting;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_fp_tree, build_fp_tree};
pub use counting::{count_items, frequent_items, ItemCounts, ItemOrder};
pub use mining::{fp_growth, fp_growth_algorithm};
pub use tree::{FPNode, FPTree, PrefixPath};
