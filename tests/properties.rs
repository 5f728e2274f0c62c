use fpminer::{fp_growth, MiningConfig};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

const UNIVERSE: u8 = 7;

/// Support of every non-empty subset of the item universe, by direct counting.
fn brute_force(transactions: &[Vec<u8>], min_count: usize) -> BTreeMap<Vec<u8>, usize> {
    let sets: Vec<BTreeSet<u8>> = transactions
        .iter()
        .map(|tx| tx.iter().copied().collect())
        .collect();

    let mut expected = BTreeMap::new();
    for mask in 1u32..(1 << UNIVERSE) {
        let itemset: Vec<u8> = (0..UNIVERSE).filter(|i| mask & (1 << i) != 0).collect();
        let support = sets
            .iter()
            .filter(|tx| itemset.iter().all(|item| tx.contains(item)))
            .count();
        if support > 0 && support >= min_count {
            expected.insert(itemset, support);
        }
    }
    expected
}

fn transactions_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0..UNIVERSE, 0..6), 0..14)
}

proptest! {
    #[test]
    fn matches_brute_force(transactions in transactions_strategy(), min_count in 1usize..5) {
        let frequent = fp_growth(&transactions, &MiningConfig::new(min_count)).unwrap();
        prop_assert_eq!(frequent.into_map(), brute_force(&transactions, min_count));
    }

    #[test]
    fn single_path_shortcut_is_transparent(transactions in transactions_strategy(), min_count in 1usize..4) {
        let fast = fp_growth(&transactions, &MiningConfig::new(min_count)).unwrap();
        let slow = fp_growth(
            &transactions,
            &MiningConfig::new(min_count).with_single_path_shortcut(false),
        )
        .unwrap();
        prop_assert_eq!(fast, slow);
    }

    #[test]
    fn support_is_monotone(transactions in transactions_strategy(), min_count in 1usize..4) {
        let frequent = fp_growth(&transactions, &MiningConfig::new(min_count)).unwrap();
        for (itemset, support) in frequent.iter() {
            prop_assert!(support >= min_count);
            // every subset one item smaller is frequent and at least as supported
            for skip in 0..itemset.len() {
                let subset: Vec<u8> = itemset
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &item)| item)
                    .collect();
                if subset.is_empty() {
                    continue;
                }
                let subset_support = frequent.support(&subset);
                prop_assert!(subset_support.is_some());
                prop_assert!(subset_support.unwrap_or(0) >= support);
            }
        }
    }

    #[test]
    fn singletons_match_raw_frequency(transactions in transactions_strategy(), min_count in 1usize..4) {
        let frequent = fp_growth(&transactions, &MiningConfig::new(min_count)).unwrap();
        for item in 0..UNIVERSE {
            let raw = transactions.iter().filter(|tx| tx.contains(&item)).count();
            let expected = (raw > 0 && raw >= min_count).then_some(raw);
            prop_assert_eq!(frequent.support(&[item]), expected);
        }
    }

    #[test]
    fn mining_is_deterministic(transactions in transactions_strategy(), min_count in 1usize..4) {
        let config = MiningConfig::new(min_count);
        let first = fp_growth(&transactions, &config).unwrap();
        let second = fp_growth(&transactions, &config).unwrap();
        prop_assert_eq!(first.iter().collect::<Vec<_>>(), second.iter().collect::<Vec<_>>());
    }
}
