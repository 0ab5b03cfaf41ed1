//! Axis-range inference from partially-missing tables, and bin-label
//! parsing for x-coordinate derivation.

use crate::error::{ChartError, Result};
use crate::models::SummaryTable;

/// Inclusive range of columns that carry at least one non-missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub lowest: usize,
    pub highest: usize,
}

/// Scan columns left-to-right and right-to-left for the first/last column
/// holding any non-missing value across all rows.
///
/// Returns [`ChartError::EmptyData`] when every cell of the table is
/// missing.
pub fn valid_column_span(table: &SummaryTable) -> Result<ColumnSpan> {
    let has_value =
        |c: usize| (0..table.nrows()).any(|r| table.value(r, c).is_some());

    let lowest = (0..table.ncols()).find(|&c| has_value(c));
    let Some(lowest) = lowest else {
        return Err(ChartError::EmptyData);
    };
    // A value exists, so the reverse scan cannot exhaust.
    let highest = (0..table.ncols()).rev().find(|&c| has_value(c)).unwrap_or(lowest);
    Ok(ColumnSpan { lowest, highest })
}

/// Min and max of all non-missing values within an inclusive column range.
///
/// Callers establish via [`valid_column_span`] that at least one value
/// exists in the range, so the fold always tightens; an untouched fold
/// would return `(inf, -inf)`.
pub fn value_range(table: &SummaryTable, lo: usize, hi: usize) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for r in 0..table.nrows() {
        for (_, v) in table.present_in_row(r, lo, hi) {
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min, max)
}

/// Parse the numeric starting boundary of a bin label: the leading token of
/// a hyphen-delimited range, e.g. `"10-14"` → `10.0`, `"151"` → `151.0`.
pub fn bin_start(label: &str) -> Result<f64> {
    let token = label.split('-').next().unwrap_or(label).trim();
    token.parse::<f64>().map_err(|_| {
        ChartError::InvalidInput(format!(
            "bin label {label:?} has no leading numeric boundary"
        ))
    })
}

/// Derive one x-coordinate per column from its bin label, enforcing that
/// coordinates never decrease along the column order.
pub fn bin_starts(table: &SummaryTable) -> Result<Vec<f64>> {
    let mut xs = Vec::with_capacity(table.ncols());
    for label in table.col_labels() {
        xs.push(bin_start(label)?);
    }
    for w in xs.windows(2) {
        if w[1] < w[0] {
            return Err(ChartError::InvalidInput(format!(
                "bin boundaries decrease along column order ({} after {})",
                w[1], w[0]
            )));
        }
    }
    Ok(xs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&str], cols: &[&str], cells: &[&[Option<f64>]]) -> SummaryTable {
        SummaryTable::new(
            rows.iter().map(|s| s.to_string()).collect(),
            cols.iter().map(|s| s.to_string()).collect(),
            cells.iter().map(|r| r.to_vec()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn span_skips_all_missing_edges() {
        let t = table(
            &["a", "b"],
            &["1", "2", "3", "4"],
            &[
                &[None, Some(1.0), None, None],
                &[None, None, Some(2.0), None],
            ],
        );
        let span = valid_column_span(&t).unwrap();
        assert_eq!(span, ColumnSpan { lowest: 1, highest: 2 });
    }

    #[test]
    fn all_missing_is_empty_data() {
        let t = table(&["a"], &["1", "2"], &[&[None, None]]);
        assert!(matches!(valid_column_span(&t), Err(ChartError::EmptyData)));
    }

    #[test]
    fn value_range_bounds_every_present_value() {
        let t = table(
            &["a", "b"],
            &["1", "2", "3"],
            &[
                &[Some(5.0), Some(-1.0), None],
                &[None, Some(9.5), Some(3.0)],
            ],
        );
        let (min, max) = value_range(&t, 0, 2);
        assert_eq!((min, max), (-1.0, 9.5));
        // Restricting the column range restricts the bounds.
        let (min, max) = value_range(&t, 2, 2);
        assert_eq!((min, max), (3.0, 3.0));
    }

    #[test]
    fn bin_labels_parse_to_starting_boundaries() {
        assert_eq!(bin_start("0-4").unwrap(), 0.0);
        assert_eq!(bin_start("10-14").unwrap(), 10.0);
        assert_eq!(bin_start("151").unwrap(), 151.0);
        assert!(bin_start("n/a").is_err());
    }

    #[test]
    fn bin_starts_follow_column_order() {
        let t = table(
            &["a"],
            &["0-4", "5-9", "10-14"],
            &[&[Some(1.0), Some(2.0), Some(3.0)]],
        );
        assert_eq!(bin_starts(&t).unwrap(), vec![0.0, 5.0, 10.0]);

        let bad = table(
            &["a"],
            &["5-9", "0-4"],
            &[&[Some(1.0), Some(2.0)]],
        );
        assert!(matches!(bin_starts(&bad), Err(ChartError::InvalidInput(_))));
    }
}
