//! readqc-charts
//!
//! Render diagnostic charts from already-summarized sequencing-read QC
//! tables: read counts, per-base quality-score distributions, adapter/N
//! content percentages, and read-length distributions.
//!
//! Parsing report archives, file discovery, and statistics happen upstream;
//! this crate only turns in-memory tables into readable multi-series
//! charts, paginating large dataset collections across several frames.
//!
//! ### Features
//! - Axis-range inference that tolerates missing (NA) cells
//! - Pagination of many datasets across frames with shared axis limits
//! - Deterministic per-page color/marker styling (25-symbol palette)
//! - Page-scoped legends anchored anywhere in the frame
//! - SVG or PNG output, chosen by file extension
//!
//! ### Example
//! ```no_run
//! use readqc_charts::{MultiSeriesConfig, SummaryTable, viz};
//!
//! let table = SummaryTable::new(
//!     vec!["sample_1".into(), "sample_2".into()],
//!     vec!["2".into(), "3".into(), "4".into()],
//!     vec![
//!         vec![Some(10.0), Some(250.0), Some(40.0)],
//!         vec![None, Some(180.0), Some(90.0)],
//!     ],
//! )?;
//! let cfg = MultiSeriesConfig {
//!     title: "Per-score read counts".into(),
//!     legend: Some(viz::LegendAnchor { x: 0.8, y: 0.1 }),
//!     ..Default::default()
//! };
//! viz::quality_chart(&table, &cfg, "quality.svg", 1000, 600)?;
//! # Ok::<(), readqc_charts::ChartError>(())
//! ```

pub mod error;
pub mod models;
pub mod viz;

pub use error::{ChartError, Result};
pub use models::{NamedVector, SummaryTable};
pub use viz::{LegendAnchor, MultiSeriesConfig, ReadCountConfig};
