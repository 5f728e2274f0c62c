//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into an FP-tree and mined by recursively
//! building one conditional tree per frequent item, without generating
//! candidate itemsets.
//!
//! ```
//! use fpminer::{fp_growth, MiningConfig};
//!
//! let transactions = vec![
//!     vec!["a", "b", "c"],
//!     vec!["a", "b"],
//!     vec!["a", "c"],
//!     vec!["a"],
//!     vec!["b", "c"],
//! ];
//! let frequent = fp_growth(&transactions, &MiningConfig::new(2)).unwrap();
//!
//! assert_eq!(frequent.support(&["a"]), Some(4));
//! assert_eq!(frequent.support(&["c", "b"]), Some(2));
//! assert_eq!(frequent.support(&["a", "b", "c"]), None);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod fp;
pub mod output;

#[cfg(feature = "python")]
mod python;

pub use config::{MinSupport, MiningConfig};
pub use dataset::{Dataset, Label};
pub use error::{Error, Result};
pub use fp::{fp_growth, fp_growth_algorithm, FrequentItemsets, FrequentLevel, Item};
