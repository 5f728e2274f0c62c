use super::counting::{frequent_items, ItemOrder};
use super::tree::{FPTree, PrefixPath};
use crate::fp::Item;
use log::debug;

/// Builds the top-level tree, every transaction weighing 1.
pub fn build_fp_tree<I: Item>(transactions: &[Vec<I>], min_count: usize) -> (FPTree<I>, ItemOrder<I>) {
    build_weighted(
        || transactions.iter().map(|tx| (tx.as_slice(), 1usize)),
        min_count,
    )
}

/// Builds the conditional tree of one conditional pattern base.
pub fn build_conditional_fp_tree<I: Item>(
    prefix_paths: &[PrefixPath<I>],
    min_count: usize,
) -> (FPTree<I>, ItemOrder<I>) {
    build_weighted(
        || prefix_paths.iter().map(|(path, count)| (path.as_slice(), *count)),
        min_count,
    )
}

/// Two passes over the weighted transactions: count and order the frequent
/// items, then insert every projected transaction.
fn build_weighted<'a, I, F, T>(transactions: F, min_count: usize) -> (FPTree<I>, ItemOrder<I>)
where
    I: Item + 'a,
    F: Fn() -> T,
    T: Iterator<Item = (&'a [I], usize)>,
{
    let counts = frequent_items(transactions(), min_count);
    let order = ItemOrder::from_counts(&counts);
    let mut fp_tree = FPTree::new();

    if order.is_empty() {
        return (fp_tree, order);
    }

    for (transaction, weight) in transactions() {
        let projected = order.project(transaction);
        if projected.is_empty() || weight == 0 {
            continue;
        }
        fp_tree.insert_transaction(&projected, weight);
    }

    debug!(
        "built FP-tree: {} frequent items, {} nodes",
        order.len(),
        fp_tree.node_count()
    );

    (fp_tree, order)
}
