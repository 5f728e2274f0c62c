use crate::error::{Error, Result};
use crate::fp::Item;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Frequent itemsets of one size, kept sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentLevel<I> {
    pub itemset_size: usize,
    supports: BTreeMap<Vec<I>, usize>,
}

/// Every frequent itemset found by a mining run, grouped by size.
///
/// `levels()[k]` holds the itemsets of size `k + 1`. Itemsets are stored with
/// their items in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentItemsets<I> {
    levels: Vec<FrequentLevel<I>>,
}

impl<I: Item> FrequentLevel<I> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            itemset_size,
            supports: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn support(&self, itemset: &[I]) -> Option<usize> {
        self.supports.get(itemset).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[I], usize)> {
        self.supports
            .iter()
            .map(|(itemset, &support)| (itemset.as_slice(), support))
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[I]> {
        self.supports.keys().map(Vec::as_slice)
    }

    fn add_itemset(&mut self, itemset: Vec<I>, support: usize) -> Result<()> {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        match self.supports.entry(itemset) {
            Entry::Vacant(slot) => {
                slot.insert(support);
                Ok(())
            }
            Entry::Occupied(slot) => Err(Error::DuplicateItemset {
                itemset: format!("{:?}", slot.key()),
            }),
        }
    }
}

impl<I: Item> Default for FrequentItemsets<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FrequentItemsets<I> {
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    /// Adds `itemset` with its support.
    ///
    /// A set that was already recorded is an error rather than being merged.
    pub fn record(&mut self, mut itemset: Vec<I>, support: usize) -> Result<()> {
        if itemset.is_empty() {
            return Err(Error::EmptyItemset);
        }
        itemset.sort_unstable();

        let size = itemset.len();
        while self.levels.len() < size {
            self.levels.push(FrequentLevel::new(self.levels.len() + 1));
        }
        self.levels[size - 1].add_itemset(itemset, support)
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(FrequentLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(FrequentLevel::is_empty)
    }

    /// Support of `itemset`, in any item order.
    pub fn support(&self, itemset: &[I]) -> Option<usize> {
        let level = self.levels.get(itemset.len().checked_sub(1)?)?;
        let mut key = itemset.to_vec();
        key.sort_unstable();
        level.support(&key)
    }

    pub fn levels(&self) -> &[FrequentLevel<I>] {
        &self.levels
    }

    pub fn max_itemset_size(&self) -> usize {
        self.levels
            .iter()
            .rev()
            .find(|level| !level.is_empty())
            .map_or(0, |level| level.itemset_size)
    }

    /// All itemsets by ascending size, lexicographically within a size.
    pub fn iter(&self) -> impl Iterator<Item = (&[I], usize)> {
        self.levels.iter().flat_map(|level| level.iter())
    }

    pub fn into_map(self) -> BTreeMap<Vec<I>, usize> {
        self.levels
            .into_iter()
            .flat_map(|level| level.supports)
            .collect()
    }
}
