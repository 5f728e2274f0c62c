use crate::error::{Error, Result};
use std::cell::Cell;

/// Budget on the number of FP-tree nodes alive at the same time.
///
/// Every tree on the current recursion path holds a [`MemoryGuard`] for its
/// nodes; the guard is released when the tree goes out of scope.
///
/// A tree is reserved once it has been built, so the budget bounds how many
/// nodes stay alive across the recursion; a single tree may still be
/// allocated in full before the reservation for it fails.
#[derive(Debug)]
pub struct MemoryBudget {
    max_nodes: usize,
    live_nodes: Cell<usize>,
    peak_nodes: Cell<usize>,
}

impl MemoryBudget {
    pub fn new(max_nodes: usize) -> Self {
        Self {
            max_nodes,
            live_nodes: Cell::new(0),
            peak_nodes: Cell::new(0),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(usize::MAX)
    }

    pub fn reserve(&self, nodes: usize) -> Result<MemoryGuard<'_>> {
        let live = self.live_nodes.get();
        let available = self.max_nodes.saturating_sub(live);
        if nodes > available {
            return Err(Error::BudgetExceeded {
                requested: nodes,
                available,
            });
        }

        let live = live + nodes;
        self.live_nodes.set(live);
        self.peak_nodes.set(self.peak_nodes.get().max(live));
        Ok(MemoryGuard { budget: self, nodes })
    }

    pub fn live_nodes(&self) -> usize {
        self.live_nodes.get()
    }

    /// Highest number of simultaneously reserved nodes so far.
    pub fn peak_nodes(&self) -> usize {
        self.peak_nodes.get()
    }

    pub fn available(&self) -> usize {
        self.max_nodes.saturating_sub(self.live_nodes())
    }

    fn release(&self, nodes: usize) {
        self.live_nodes.set(self.live_nodes.get().saturating_sub(nodes));
    }
}

pub struct MemoryGuard<'a> {
    budget: &'a MemoryBudget,
    nodes: usize,
}

impl Drop for MemoryGuard<'_> {
    fn drop(&mut self) {
        self.budget.release(self.nodes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let budget = MemoryBudget::new(10);
        {
            let _outer = budget.reserve(4).unwrap();
            let _inner = budget.reserve(6).unwrap();
            assert_eq!(budget.live_nodes(), 10);
            assert_eq!(budget.available(), 0);
        }
        assert_eq!(budget.live_nodes(), 0);
        assert_eq!(budget.peak_nodes(), 10);
    }

    #[test]
    fn test_reserve_over_budget_fails() {
        let budget = MemoryBudget::new(5);
        let _guard = budget.reserve(3).unwrap();
        match budget.reserve(3) {
            Err(Error::BudgetExceeded {
                requested,
                available,
            }) => {
                assert_eq!(requested, 3);
                assert_eq!(available, 2);
            }
            other => panic!("expected budget error, got {:?}", other.map(|_| ())),
        }
        // failed reservation leaves the count untouched
        assert_eq!(budget.live_nodes(), 3);
    }

    #[test]
    fn test_unlimited_budget() {
        let budget = MemoryBudget::unlimited();
        let _guard = budget.reserve(usize::MAX / 2).unwrap();
        assert!(budget.reserve(1000).is_ok());
    }
}
