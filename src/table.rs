//! Named columnar batches of typed values

use serde::{Deserialize, Serialize};

use crate::error::{Result, TuningError};
use crate::value::Value;

/// A batch of configurations as equal-length named columns.
///
/// This is the canonical table shape: one column of [`Value`]s per
/// hyperparameter name, every column the same length (the batch size).
/// It is accepted as a `transform` input and produced by
/// `inverse_transform` and `sample`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from named columns.
    ///
    /// Fails if the number of names and columns differ, or if the columns
    /// are not all the same length.
    pub fn new(names: Vec<String>, columns: Vec<Vec<Value>>) -> Result<Self> {
        if names.len() != columns.len() {
            return Err(TuningError::Shape(format!(
                "{} column names for {} columns",
                names.len(),
                columns.len()
            )));
        }

        if let Some(first) = columns.first() {
            let n_rows = first.len();
            for (name, column) in names.iter().zip(&columns) {
                if column.len() != n_rows {
                    return Err(TuningError::Shape(format!(
                        "column {name} has {} rows, expected {n_rows}",
                        column.len()
                    )));
                }
            }
        }

        Ok(Self { names, columns })
    }

    /// Create a table from positional rows, mapped to `names` order.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut columns = vec![Vec::with_capacity(rows.len()); names.len()];
        for row in rows {
            if row.len() != names.len() {
                return Err(TuningError::Shape(format!(
                    "row has {} values, expected {}",
                    row.len(),
                    names.len()
                )));
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        Ok(Self { names, columns })
    }

    /// Column names, in column order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows (the batch size)
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        let idx = self.names.iter().position(|n| n == name)?;
        Some(&self.columns[idx])
    }

    /// Get row `i` as values in column order
    pub fn row(&self, i: usize) -> Option<Vec<Value>> {
        if i >= self.n_rows() {
            return None;
        }
        Some(self.columns.iter().map(|c| c[i].clone()).collect())
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
        (0..self.n_rows()).map(|i| self.columns.iter().map(|c| c[i].clone()).collect())
    }
}
