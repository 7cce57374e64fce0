//! One-hot encoding demo
//!
//! Generates a shuffled sequence of category labels and encodes it as a 0/1
//! table with one column per category, printed like a dataframe head.

use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PhonebookError, PhonebookResult};

/// Column separator used when rendering
const COLUMN_GAP: usize = 2;

/// Reject label sets that cannot form distinct columns
pub fn check_labels(labels: &[String]) -> PhonebookResult<()> {
    if labels.is_empty() {
        return Err(PhonebookError::InvalidLabels(
            "at least one label is required".to_string(),
        ));
    }
    if let Some(blank) = labels.iter().find(|label| label.trim().is_empty()) {
        return Err(PhonebookError::InvalidLabels(format!(
            "empty label '{}'",
            blank
        )));
    }

    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(PhonebookError::InvalidLabels(format!(
                "duplicate label '{}'",
                label
            )));
        }
    }
    Ok(())
}

/// `count` copies of every label, shuffled with `rng`
pub fn generate_labels<R: Rng + ?Sized>(labels: &[String], count: usize, rng: &mut R) -> Vec<String> {
    let mut sequence: Vec<String> = labels
        .iter()
        .flat_map(|label| std::iter::repeat(label.clone()).take(count))
        .collect();
    sequence.shuffle(rng);
    sequence
}

/// A one-hot encoded table
///
/// Row `i` has a 1 in the column of the category of value `i` and 0
/// elsewhere. Values outside the category list encode as all zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneHotTable {
    columns: Vec<String>,
    rows: Vec<Vec<u8>>,
}

impl OneHotTable {
    /// Encode `values` against `categories`, one column per category in order
    pub fn encode(values: &[String], categories: &[String]) -> Self {
        let rows = values
            .iter()
            .map(|value| {
                categories
                    .iter()
                    .map(|category| u8::from(category == value))
                    .collect()
            })
            .collect();

        OneHotTable {
            columns: categories.to_vec(),
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of ones in each column
    pub fn column_sums(&self) -> Vec<usize> {
        (0..self.columns.len())
            .map(|col| self.rows.iter().filter(|row| row[col] == 1).count())
            .collect()
    }

    /// The first `n` rows (all of them if there are fewer)
    pub fn head(&self, n: usize) -> Self {
        OneHotTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

/// Right-aligned rendering with a 0-based index column:
///
/// ```text
///    robot  human
/// 0      0      1
/// 1      1      0
/// ```
impl fmt::Display for OneHotTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|name| name.chars().count().max(1))
            .collect();

        write!(f, "{:width$}", "", width = index_width)?;
        for (name, width) in self.columns.iter().zip(&widths) {
            write!(f, "{:gap$}{:>width$}", "", name, gap = COLUMN_GAP, width = width)?;
        }

        for (i, row) in self.rows.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:<width$}", i, width = index_width)?;
            for (cell, width) in row.iter().zip(&widths) {
                write!(f, "{:gap$}{:>width$}", "", cell, gap = COLUMN_GAP, width = width)?;
            }
        }
        Ok(())
    }
}
