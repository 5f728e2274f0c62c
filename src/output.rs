//! Result file rendering.
//!
//! ```text
//! |FPs| = 3
//! a : 4
//! b : 3
//! a, b : 2
//! ```

use crate::error::{Error, Result};
use crate::fp::{FrequentItemsets, Item};
use std::fmt::{Display, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

pub const RESULT_FILE_PREFIX: &str = "MiningResult_";

/// `MiningResult_<stem>.txt` for the dataset at `dataset_path`.
pub fn result_file_name(dataset_path: &Path) -> String {
    let stem = dataset_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}{}.txt", RESULT_FILE_PREFIX, stem)
}

pub fn format_itemset<I: Display>(itemset: &[I], support: usize) -> String {
    let mut line = String::new();
    for (i, item) in itemset.iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        let _ = write!(line, "{}", item);
    }
    let _ = write!(line, " : {}", support);
    line
}

/// Header line followed by one line per itemset, smallest itemsets first.
pub fn render_results<I: Item + Display>(frequent: &FrequentItemsets<I>) -> String {
    let mut out = format!("|FPs| = {}\n", frequent.len());
    for (itemset, support) in frequent.iter() {
        out.push_str(&format_itemset(itemset, support));
        out.push('\n');
    }
    out
}

/// Writes the rendered results into `output_dir` and returns the file path.
pub fn write_results<I: Item + Display>(
    output_dir: &Path,
    dataset_path: &Path,
    frequent: &FrequentItemsets<I>,
) -> Result<PathBuf> {
    let path = output_dir.join(result_file_name(dataset_path));
    fs::write(&path, render_results(frequent)).map_err(|source| Error::Output {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
