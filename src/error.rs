//! Error type shared by the miner, the dataset reader and the result writer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Minimum support outside of `(0, 100]` percent.
    #[error("minimum support must lie in (0, 100] percent, got {0}")]
    InvalidMinSupport(f64),

    #[error("failed to read dataset {}: {source}", .path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write results to {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The same itemset reached the result collector twice. Indicates a
    /// broken decomposition, never a property of the input data.
    #[error("itemset {itemset} was emitted more than once")]
    DuplicateItemset { itemset: String },

    #[error("empty itemset cannot be recorded")]
    EmptyItemset,

    /// Live FP-tree nodes would exceed the configured node budget.
    #[error("FP-tree node budget exceeded: requested {requested} nodes, {available} available")]
    BudgetExceeded { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
