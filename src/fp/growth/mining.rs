use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::counting::ItemOrder;
use super::tree::FPTree;
use crate::config::{MinSupport, MiningConfig};
use crate::error::Result;
use crate::fp::combinations::generate_all_combinations;
use crate::fp::memory::MemoryBudget;
use crate::fp::utils::FrequentItemsets;
use crate::fp::Item;
use log::{info, trace};

/// Mines every itemset with support of at least `min_support` percent.
pub fn fp_growth_algorithm<I: Item>(
    transactions: &[Vec<I>],
    min_support: MinSupport,
) -> Result<FrequentItemsets<I>> {
    let config = MiningConfig::new(min_support.to_count(transactions.len()));
    fp_growth(transactions, &config)
}

/// Mines every itemset reaching `config.min_count`.
///
/// An empty input, or one where no item is frequent, yields an empty result.
/// Exceeding the node budget aborts the run without a partial result.
pub fn fp_growth<I: Item>(
    transactions: &[Vec<I>],
    config: &MiningConfig,
) -> Result<FrequentItemsets<I>> {
    let budget = config
        .max_tree_nodes
        .map_or_else(MemoryBudget::unlimited, MemoryBudget::new);
    let mut result = FrequentItemsets::new();

    let (fp_tree, order) = build_fp_tree(transactions, config.min_count);
    if !order.is_empty() {
        let _guard = budget.reserve(fp_tree.node_count())?;
        let miner = Miner { config, budget: &budget };
        miner.fp_growth_recursive(&fp_tree, &order, &[], &mut result)?;
    }

    info!(
        "mined {} frequent itemsets from {} transactions (min count {}, peak {} tree nodes)",
        result.len(),
        transactions.len(),
        config.min_count,
        budget.peak_nodes()
    );
    Ok(result)
}

struct Miner<'a> {
    config: &'a MiningConfig,
    budget: &'a MemoryBudget,
}

impl Miner<'_> {
    fn fp_growth_recursive<I: Item>(
        &self,
        fp_tree: &FPTree<I>,
        order: &ItemOrder<I>,
        alpha: &[I],
        result: &mut FrequentItemsets<I>,
    ) -> Result<()> {
        if fp_tree.is_empty() {
            return Ok(());
        }

        if self.config.single_path_shortcut && fp_tree.has_single_path() {
            let path = fp_tree.get_single_path();
            trace!("single path of length {} under {:?}", path.len(), alpha);
            return generate_all_combinations(&path, alpha, result);
        }

        // least frequent first
        for item in order.items().rev() {
            let support = fp_tree.item_support(item);
            debug_assert!(support >= self.config.min_count);

            let mut new_pattern = alpha.to_vec();
            new_pattern.push(item.clone());
            result.record(new_pattern.clone(), support)?;

            let prefix_paths = fp_tree.get_prefix_paths(item);
            if prefix_paths.is_empty() {
                continue;
            }

            let (cond_tree, cond_order) = build_conditional_fp_tree(&prefix_paths, self.config.min_count);
            if cond_order.is_empty() {
                continue;
            }

            trace!(
                "conditional tree for {:?}: {} items, {} nodes",
                new_pattern,
                cond_order.len(),
                cond_tree.node_count()
            );
            let _guard = self.budget.reserve(cond_tree.node_count())?;
            self.fp_growth_recursive(&cond_tree, &cond_order, &new_pattern, result)?;
        }

        Ok(())
    }
}
