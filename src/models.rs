//! Input data model: summary tables produced by an upstream extraction step.
//!
//! Both shapes are validated at construction so that rendering never starts
//! on malformed input. Cells of a [`SummaryTable`] may be missing (`None`):
//! absence of a measurement at that bin for that dataset.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ChartError, Result};

/// One value per dataset name; input for the read-count bar chart.
///
/// Deserialization funnels through [`NamedVector::new`], so a decoded
/// vector upholds the same invariants as a constructed one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawNamedVector")]
pub struct NamedVector {
    names: Vec<String>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawNamedVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<RawNamedVector> for NamedVector {
    type Error = ChartError;

    fn try_from(raw: RawNamedVector) -> Result<Self> {
        Self::new(raw.names, raw.values)
    }
}

impl NamedVector {
    /// Build a named vector, checking that names are present and aligned
    /// with the values.
    pub fn new(names: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if names.is_empty() {
            return Err(ChartError::InvalidInput(
                "named vector must contain at least one dataset".into(),
            ));
        }
        if names.len() != values.len() {
            return Err(ChartError::InvalidInput(format!(
                "named vector has {} names but {} values",
                names.len(),
                values.len()
            )));
        }
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(ChartError::InvalidInput(
                "dataset names must be non-empty".into(),
            ));
        }
        Ok(Self { names, values })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    pub fn value(&self, i: usize) -> f64 {
        self.values[i]
    }

    /// Dataset indices sorted ascending by value (ties keep input order).
    pub fn ascending_order(&self) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..self.values.len()).collect();
        idx.sort_by(|&a, &b| {
            self.values[a]
                .partial_cmp(&self.values[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        idx
    }
}

/// A 2-D numeric table: rows are datasets, columns are ordered bins or
/// positions. Column order defines x-axis order and is preserved as given.
///
/// Deserialization funnels through [`SummaryTable::new`], so a decoded
/// table is rectangular with unique non-empty row names like any other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawSummaryTable")]
pub struct SummaryTable {
    row_names: Vec<String>,
    col_labels: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

#[derive(Deserialize)]
struct RawSummaryTable {
    row_names: Vec<String>,
    col_labels: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl TryFrom<RawSummaryTable> for SummaryTable {
    type Error = ChartError;

    fn try_from(raw: RawSummaryTable) -> Result<Self> {
        Self::new(raw.row_names, raw.col_labels, raw.values)
    }
}

impl SummaryTable {
    /// Build a summary table, checking shape and name/label metadata:
    /// rectangular rows, at least one row and column, non-empty column
    /// labels, and non-empty unique row names.
    pub fn new(
        row_names: Vec<String>,
        col_labels: Vec<String>,
        values: Vec<Vec<Option<f64>>>,
    ) -> Result<Self> {
        if row_names.is_empty() {
            return Err(ChartError::InvalidInput(
                "summary table must contain at least one dataset row".into(),
            ));
        }
        if col_labels.is_empty() {
            return Err(ChartError::InvalidInput(
                "summary table must contain at least one bin column".into(),
            ));
        }
        if values.len() != row_names.len() {
            return Err(ChartError::InvalidInput(format!(
                "summary table has {} row names but {} value rows",
                row_names.len(),
                values.len()
            )));
        }
        for (i, row) in values.iter().enumerate() {
            if row.len() != col_labels.len() {
                return Err(ChartError::InvalidInput(format!(
                    "row {} ({:?}) has {} cells, expected {}",
                    i,
                    row_names[i],
                    row.len(),
                    col_labels.len()
                )));
            }
        }
        if row_names.iter().any(|n| n.trim().is_empty()) {
            return Err(ChartError::InvalidInput(
                "dataset row names must be non-empty".into(),
            ));
        }
        if col_labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ChartError::InvalidInput(
                "bin column labels must be non-empty".into(),
            ));
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(row_names.len());
        for name in &row_names {
            if !seen.insert(name.as_str()) {
                return Err(ChartError::InvalidInput(format!(
                    "duplicate dataset row name {name:?}"
                )));
            }
        }
        Ok(Self {
            row_names,
            col_labels,
            values,
        })
    }

    pub fn nrows(&self) -> usize {
        self.row_names.len()
    }

    pub fn ncols(&self) -> usize {
        self.col_labels.len()
    }

    pub fn row_name(&self, r: usize) -> &str {
        &self.row_names[r]
    }

    pub fn col_label(&self, c: usize) -> &str {
        &self.col_labels[c]
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Cell value at (row, column); `None` marks a missing measurement.
    pub fn value(&self, r: usize, c: usize) -> Option<f64> {
        self.values[r][c]
    }

    /// Iterate the present values of one row as `(column, value)` pairs
    /// restricted to an inclusive column range.
    pub fn present_in_row(
        &self,
        r: usize,
        lo: usize,
        hi: usize,
    ) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values[r][lo..=hi]
            .iter()
            .copied()
            .enumerate()
            .filter_map(move |(off, v)| v.map(|v| (lo + off, v)))
    }
}
