//! Error taxonomy for chart rendering.
//!
//! Every failure is raised synchronously, before or during the single render
//! pass; a malformed input aborts the whole call without producing a partial
//! page sequence.

use thiserror::Error;

/// Errors produced while validating inputs or rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The input is not the required vector/matrix shape or lacks required
    /// name/label metadata.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No column of the summary table holds a single non-missing value, so
    /// there is nothing to draw.
    #[error("no plottable data: every cell of the table is missing")]
    EmptyData,

    /// The inferred minimum value is non-finite. This usually means the
    /// caller passed log-transformed data; surfaced with guidance rather
    /// than silently coerced.
    #[error(
        "inferred minimum value is {0}; the table may contain log-scaled \
         values — pass explicit y_min/y_max overrides for log-scale data"
    )]
    ScaleMismatch(f64),

    /// A drawing call on the plotters backend failed.
    #[error("drawing backend error: {0}")]
    Backend(String),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, ChartError>;

impl ChartError {
    /// Wrap a plotters backend error. Plotters error types are generic over
    /// the backend, so they are captured via their debug rendering.
    pub(crate) fn backend<E: std::fmt::Debug>(e: E) -> Self {
        ChartError::Backend(format!("{e:?}"))
    }
}
