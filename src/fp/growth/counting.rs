use crate::fp::Item;
use std::collections::{HashMap, HashSet};

pub type ItemCounts<I> = HashMap<I, usize>;

/// Weighted presence count per item.
///
/// An item contributes the transaction's weight once, however often it
/// repeats inside that transaction.
pub fn count_items<'a, I, T>(transactions: T) -> ItemCounts<I>
where
    I: Item + 'a,
    T: IntoIterator<Item = (&'a [I], usize)>,
{
    let mut counts: ItemCounts<I> = HashMap::new();
    let mut seen: HashSet<&'a I> = HashSet::new();

    for (transaction, weight) in transactions {
        seen.clear();
        for item in transaction {
            if seen.insert(item) {
                *counts.entry(item.clone()).or_insert(0) += weight;
            }
        }
    }

    counts
}

/// Counts of the items reaching `min_count`.
pub fn frequent_items<'a, I, T>(transactions: T, min_count: usize) -> ItemCounts<I>
where
    I: Item + 'a,
    T: IntoIterator<Item = (&'a [I], usize)>,
{
    let mut counts = count_items(transactions);
    counts.retain(|_, count| *count >= min_count);
    counts
}

/// Total order over surviving items: descending support, ties broken by
/// ascending item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOrder<I: Item> {
    ranked: Vec<(I, usize)>,
    ranks: HashMap<I, usize>,
}

impl<I: Item> ItemOrder<I> {
    pub fn from_counts(counts: &ItemCounts<I>) -> Self {
        let mut ranked: Vec<(I, usize)> = counts
            .iter()
            .map(|(item, &count)| (item.clone(), count))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let ranks = ranked
            .iter()
            .enumerate()
            .map(|(rank, (item, _))| (item.clone(), rank))
            .collect();

        Self { ranked, ranks }
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Position of `item`, 0 being the most frequent.
    pub fn rank(&self, item: &I) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    pub fn support(&self, item: &I) -> Option<usize> {
        self.rank(item).map(|rank| self.ranked[rank].1)
    }

    /// Items from most to least frequent.
    pub fn items(&self) -> impl DoubleEndedIterator<Item = &I> + ExactSizeIterator {
        self.ranked.iter().map(|(item, _)| item)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&I, usize)> + ExactSizeIterator {
        self.ranked.iter().map(|(item, count)| (item, *count))
    }

    /// Keeps the surviving items of `transaction`, once each, in rank order.
    pub fn project(&self, transaction: &[I]) -> Vec<I> {
        let mut ranks: Vec<usize> = transaction
            .iter()
            .filter_map(|item| self.rank(item))
            .collect();
        ranks.sort_unstable();
        ranks.dedup();

        ranks
            .into_iter()
            .map(|rank| self.ranked[rank].0.clone())
            .collect()
    }
}
