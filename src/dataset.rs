//! Transaction datasets.
//!
//! A dataset file holds one transaction per line, either as
//! `tid count item1 item2 ...` or as bare `item1 item2 ...`. A lone integer on
//! the first non-blank line is a record count and is skipped.

use crate::error::{Error, Result};
use log::{debug, warn};
use ndarray::ArrayView2;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Item label read from a dataset line.
///
/// A line whose items all parse as integers yields `Int` labels, any other
/// line yields `Text` labels. Integers order numerically and before text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Int(i64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(value) => write!(f, "{}", value),
            Label::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_owned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    name: String,
    transactions: Vec<Vec<Label>>,
    skipped_lines: usize,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let file = File::open(path).map_err(|source| Error::Dataset {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::parse(name, BufReader::new(file)).map_err(|source| Error::Dataset {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            "loaded {} transactions from {} ({} lines skipped)",
            dataset.len(),
            path.display(),
            dataset.skipped_lines
        );
        Ok(dataset)
    }

    pub fn parse<R: BufRead>(name: impl Into<String>, reader: R) -> io::Result<Self> {
        let mut dataset = Dataset {
            name: name.into(),
            ..Dataset::default()
        };
        let mut seen_content = false;

        for (line_no, raw) in reader.split(b'\n').enumerate() {
            let raw = raw?;
            let line = match std::str::from_utf8(&raw) {
                Ok(line) => line.trim(),
                Err(err) => {
                    warn!("skipping line {}: {}", line_no + 1, err);
                    dataset.skipped_lines += 1;
                    seen_content = true;
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }

            let first_content = !seen_content;
            seen_content = true;
            if first_content && is_record_count(line) {
                continue;
            }

            if let Some(transaction) = parse_line(line) {
                dataset.transactions.push(transaction);
            }
        }

        Ok(dataset)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transactions(&self) -> &[Vec<Label>] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Lines dropped because they could not be decoded.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn into_transactions(self) -> Vec<Vec<Label>> {
        self.transactions
    }
}

/// Items of one non-blank line, duplicates removed, first occurrence kept.
pub fn parse_line(line: &str) -> Option<Vec<Label>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let items = if fields.len() >= 3 && is_integer(fields[1]) {
        &fields[2..]
    } else {
        &fields[..]
    };

    let mut labels: Vec<Label> = match items
        .iter()
        .map(|field| field.parse::<i64>())
        .collect::<std::result::Result<Vec<_>, _>>()
    {
        Ok(values) => values.into_iter().map(Label::Int).collect(),
        Err(_) => items.iter().map(|&field| Label::from(field)).collect(),
    };

    let mut seen = HashSet::new();
    labels.retain(|label| seen.insert(label.clone()));

    (!labels.is_empty()).then_some(labels)
}

fn is_integer(field: &str) -> bool {
    let digits = field.trim_start_matches(['+', '-']);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_record_count(line: &str) -> bool {
    let mut fields = line.split_whitespace();
    matches!((fields.next(), fields.next()), (Some(field), None) if field.parse::<u64>().is_ok())
}

/// Row-per-transaction 0/1 matrix to transactions of column indices.
pub fn transactions_from_dense(matrix: ArrayView2<i32>) -> Vec<Vec<usize>> {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, &value)| value != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}
