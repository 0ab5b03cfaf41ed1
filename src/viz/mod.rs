//! Chart rendering: multi-series paginated QC charts to **SVG** or **PNG**.
//!
//! - One shared algorithm behind the four chart types: infer axis ranges
//!   from partially-missing tables, split datasets into pages, draw one
//!   point-and-line series per dataset with deterministic color/marker
//!   assignment, and compose a page-scoped legend.
//! - Output format chosen by file extension (`.svg` renders through the
//!   SVG backend, everything else through the bitmap backend).
//! - Page 1 renders to the caller's path; page `k > 1` renders to
//!   `<stem>_page<k>.<ext>`.

pub mod legend;
pub mod paginate;
pub mod range;
pub mod style;
pub mod text;

pub use legend::{LegendAnchor, LegendEntry};
pub use style::{MARKER_PALETTE, MarkerShape};

use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::SegmentValue;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::error::{ChartError, Result};
use crate::models::{NamedVector, SummaryTable};

use legend::draw_legend;
use paginate::pages;
use range::{ColumnSpan, bin_starts, valid_column_span, value_range};
use style::{marker_for, marker_glyph, series_color};
use text::estimate_text_width_px;

/// Configuration for the single-series read-count bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadCountConfig {
    /// Chart title; empty string draws no caption.
    pub title: String,
    /// Selects y-axis label wording only; values are drawn as given.
    pub percentage: bool,
    /// Character-expansion factor for the rotated bar labels.
    pub label_scale: f64,
}

impl Default for ReadCountConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            percentage: false,
            label_scale: 1.0,
        }
    }
}

/// Configuration shared by the quality/content/length matrix charts.
///
/// All fields are enumerated with defaults; there is no hidden global
/// state and nothing persists beyond a single rendering call.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSeriesConfig {
    /// Pagination threshold: at most this many dataset rows per chart page.
    pub max_datasets_per_plot: usize,
    /// Explicit y-axis minimum; defaults to the inferred value.
    pub y_min: Option<f64>,
    /// Explicit y-axis maximum; defaults to the inferred value.
    pub y_max: Option<f64>,
    /// Chart title; empty string draws no caption.
    pub title: String,
    /// x-axis label; `None` uses the chart type's default.
    pub x_label: Option<String>,
    /// y-axis label; `None` uses the chart type's default.
    pub y_label: Option<String>,
    /// Legend anchor; `None` omits the legend entirely.
    pub legend: Option<LegendAnchor>,
    /// Scale factor for legend text.
    pub legend_scale: f64,
    /// Mirror a numeric axis on the right of the frame as a reading aid.
    pub add_secondary_axis: bool,
    /// Selects y-axis label wording only; values are drawn as given.
    pub percentage: bool,
}

impl Default for MultiSeriesConfig {
    fn default() -> Self {
        Self {
            max_datasets_per_plot: 25,
            y_min: None,
            y_max: None,
            title: String::new(),
            x_label: None,
            y_label: None,
            legend: None,
            legend_scale: 1.0,
            add_secondary_axis: true,
            percentage: false,
        }
    }
}

/// Resolved per-chart-type parameters for the shared matrix renderer.
struct SeriesChartParams {
    x_label: String,
    y_label: String,
    /// Quality charts use column positions as x and show the column labels
    /// as tick text; content/length charts use parsed bin boundaries.
    x_from_bin_labels: bool,
    /// Length charts fail fast on a non-finite inferred minimum, which
    /// signals log-scaled input.
    check_log_scale: bool,
}

/// Render a per-quality-score matrix (dataset x quality score) as paginated
/// line charts. Column order is the ascending score order; x coordinates
/// are column positions with the score labels as tick text.
pub fn quality_chart<P: AsRef<Path>>(
    table: &SummaryTable,
    cfg: &MultiSeriesConfig,
    out: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let params = SeriesChartParams {
        x_label: cfg.x_label.clone().unwrap_or_else(|| "Quality score".into()),
        y_label: cfg.y_label.clone().unwrap_or_else(|| {
            if cfg.percentage {
                "Percent of reads".into()
            } else {
                "Number of reads".into()
            }
        }),
        x_from_bin_labels: false,
        check_log_scale: false,
    };
    render_series_chart(table, cfg, &params, out.as_ref(), width, height)
}

/// Render a base-content matrix (dataset x position bin, values in percent)
/// as paginated line charts. Column labels are hyphen-delimited ranges
/// whose starting boundary becomes the x coordinate.
pub fn content_chart<P: AsRef<Path>>(
    table: &SummaryTable,
    cfg: &MultiSeriesConfig,
    out: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let params = SeriesChartParams {
        x_label: cfg
            .x_label
            .clone()
            .unwrap_or_else(|| "Position in read (bp)".into()),
        y_label: cfg.y_label.clone().unwrap_or_else(|| "Percent".into()),
        x_from_bin_labels: true,
        check_log_scale: false,
    };
    render_series_chart(table, cfg, &params, out.as_ref(), width, height)
}

/// Render a read-length distribution matrix (dataset x length bin) as
/// paginated line charts. Fails with [`ChartError::ScaleMismatch`] when the
/// inferred minimum is non-finite and no explicit y range was given.
pub fn length_chart<P: AsRef<Path>>(
    table: &SummaryTable,
    cfg: &MultiSeriesConfig,
    out: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let params = SeriesChartParams {
        x_label: cfg
            .x_label
            .clone()
            .unwrap_or_else(|| "Read length (bp)".into()),
        y_label: cfg
            .y_label
            .clone()
            .unwrap_or_else(|| "Number of reads".into()),
        x_from_bin_labels: true,
        check_log_scale: true,
    };
    render_series_chart(table, cfg, &params, out.as_ref(), width, height)
}

/// Render a read-count vector as a single bar chart, bars sorted ascending
/// by value with rotated dataset-name labels. One series only: no
/// pagination, no legend, no per-series styling.
pub fn read_count_chart<P: AsRef<Path>>(
    counts: &NamedVector,
    cfg: &ReadCountConfig,
    out: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if !(cfg.label_scale.is_finite() && cfg.label_scale > 0.0) {
        return Err(ChartError::InvalidInput(format!(
            "label_scale must be a positive finite number, got {}",
            cfg.label_scale
        )));
    }
    let order = counts.ascending_order();
    let max = order
        .iter()
        .map(|&i| counts.value(i))
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return Err(ChartError::ScaleMismatch(max));
    }
    let y_top = if max > 0.0 { max * 1.05 } else { 1.0 };

    let out = out.as_ref();
    let path_string = out.to_string_lossy().into_owned();
    if is_svg(out) {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_read_count_page(root, counts, &order, cfg, y_top)
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_read_count_page(root, counts, &order, cfg, y_top)
    }
}

/// Shared matrix-chart pipeline: validate, infer ranges, paginate, render
/// one frame per page. All errors surface before the first file is created.
fn render_series_chart(
    table: &SummaryTable,
    cfg: &MultiSeriesConfig,
    params: &SeriesChartParams,
    out: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    if cfg.max_datasets_per_plot == 0 {
        return Err(ChartError::InvalidInput(
            "max_datasets_per_plot must be at least 1".into(),
        ));
    }
    if !(cfg.legend_scale.is_finite() && cfg.legend_scale > 0.0) {
        return Err(ChartError::InvalidInput(format!(
            "legend_scale must be a positive finite number, got {}",
            cfg.legend_scale
        )));
    }

    let span = valid_column_span(table)?;
    let xs: Vec<f64> = if params.x_from_bin_labels {
        bin_starts(table)?
    } else {
        (0..table.ncols()).map(|c| c as f64).collect()
    };

    // Columns outside the span hold no values, so this range also bounds
    // the whole table.
    let (y_lo_raw, y_hi_raw) = value_range(table, span.lowest, span.highest);
    if params.check_log_scale && cfg.y_min.is_none() && !y_lo_raw.is_finite() {
        return Err(ChartError::ScaleMismatch(y_lo_raw));
    }

    let mut y0 = cfg.y_min.unwrap_or(y_lo_raw);
    let mut y1 = cfg.y_max.unwrap_or(y_hi_raw);
    if !(y0.is_finite() && y1.is_finite()) {
        return Err(ChartError::ScaleMismatch(if y0.is_finite() { y1 } else { y0 }));
    }
    if (y1 - y0).abs() < f64::EPSILON {
        y0 -= 1.0;
        y1 += 1.0;
    }
    let mut x0 = xs[span.lowest];
    let mut x1 = xs[span.highest];
    if (x1 - x0).abs() < f64::EPSILON {
        x0 -= 1.0;
        x1 += 1.0;
    }

    let page_list = pages(table.nrows(), cfg.max_datasets_per_plot);
    let total = page_list.len();
    for (k, page) in page_list.into_iter().enumerate() {
        let path = page_path(out, k, total);
        let path_string = path.to_string_lossy().into_owned();
        if is_svg(&path) {
            let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
            draw_series_page(root, table, page, &xs, span, (x0, x1), (y0, y1), cfg, params)?;
        } else {
            let root =
                BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
            draw_series_page(root, table, page, &xs, span, (x0, x1), (y0, y1), cfg, params)?;
        }
    }
    Ok(())
}

/// Draw one page frame: mesh, optional mirrored axis, the page's series,
/// and the page-scoped legend.
#[allow(clippy::too_many_arguments)]
fn draw_series_page<DB>(
    root: DrawingArea<DB, Shift>,
    table: &SummaryTable,
    rows: Range<usize>,
    xs: &[f64],
    span: ColumnSpan,
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
    cfg: &MultiSeriesConfig,
    params: &SeriesChartParams,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(ChartError::backend)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(16u32)
        .set_label_area_size(LabelAreaPosition::Left, 64)
        .set_label_area_size(LabelAreaPosition::Bottom, 48);
    if !cfg.title.is_empty() {
        builder.caption(&cfg.title, ("sans-serif", 20));
    }
    if cfg.add_secondary_axis {
        builder.set_label_area_size(LabelAreaPosition::Right, 48);
    }

    let chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(ChartError::backend)?;

    if cfg.add_secondary_axis {
        let mut chart = chart.set_secondary_coord(x0..x1, y0..y1);
        draw_page_body(&mut chart, table, rows.clone(), xs, span, params)?;
        // Mirrored numeric axis, no description text.
        chart
            .configure_secondary_axes()
            .draw()
            .map_err(ChartError::backend)?;
    } else {
        let mut chart = chart;
        draw_page_body(&mut chart, table, rows.clone(), xs, span, params)?;
    }

    if let Some(anchor) = cfg.legend {
        let entries: Vec<LegendEntry> = rows
            .clone()
            .enumerate()
            .map(|(j, r)| LegendEntry {
                label: table.row_name(r).to_string(),
                color: series_color(j),
                marker: marker_for(j),
            })
            .collect();
        draw_legend(&root, &entries, anchor, cfg.legend_scale)?;
    }

    root.present().map_err(ChartError::backend)
}

/// Mesh plus the page's series on the primary coordinate system.
fn draw_page_body<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    table: &SummaryTable,
    rows: Range<usize>,
    xs: &[f64],
    span: ColumnSpan,
    params: &SeriesChartParams,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let x_fmt = |x: &f64| -> String {
        if params.x_from_bin_labels {
            format_tick(*x)
        } else {
            // x is a column position; show that column's label when the
            // tick lands on one.
            let c = x.round();
            if (x - c).abs() < 1e-6 && c >= 0.0 && (c as usize) < table.ncols() {
                table.col_label(c as usize).to_string()
            } else {
                String::new()
            }
        }
    };
    let y_fmt = |v: &f64| format_tick(*v);

    chart
        .configure_mesh()
        .x_desc(params.x_label.clone())
        .y_desc(params.y_label.clone())
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .label_style(("sans-serif", 12))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(ChartError::backend)?;

    for (j, r) in rows.enumerate() {
        let color = series_color(j);
        let marker = marker_for(j);
        let line_style = ShapeStyle {
            color,
            filled: false,
            stroke_width: 2,
        };

        // Runs of adjacent present columns; a missing cell ends the run so
        // gaps are never bridged.
        let mut run: Vec<(f64, f64)> = Vec::new();
        let mut prev_col: Option<usize> = None;
        for (c, v) in table.present_in_row(r, span.lowest, span.highest) {
            if let Some(p) = prev_col
                && c != p + 1
            {
                draw_run(chart, &run, line_style)?;
                run.clear();
            }
            run.push((xs[c], v));
            prev_col = Some(c);
        }
        draw_run(chart, &run, line_style)?;

        let plot_area = chart.plotting_area();
        for (c, v) in table.present_in_row(r, span.lowest, span.highest) {
            for prim in marker_glyph::<DB, (f64, f64)>(marker, (xs[c], v), 4, color) {
                plot_area.draw(&prim).map_err(ChartError::backend)?;
            }
        }
    }
    Ok(())
}

/// Connect one run of consecutive present points.
fn draw_run<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    run: &[(f64, f64)],
    style: ShapeStyle,
) -> Result<()>
where
    DB: DrawingBackend,
{
    if run.len() >= 2 {
        chart
            .draw_series(LineSeries::new(run.iter().copied(), style))
            .map_err(ChartError::backend)?;
    }
    Ok(())
}

fn draw_read_count_page<DB>(
    root: DrawingArea<DB, Shift>,
    counts: &NamedVector,
    order: &[usize],
    cfg: &ReadCountConfig,
    y_top: f64,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(ChartError::backend)?;

    let n = counts.len();
    let font_px = ((12.0 * cfg.label_scale).round() as u32).max(6);
    // The rotated labels hang below the axis; size the bottom area to the
    // longest name.
    let label_area = order
        .iter()
        .map(|&i| estimate_text_width_px(counts.name(i), font_px))
        .max()
        .unwrap_or(40)
        .saturating_add(16)
        .clamp(40, 220);

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(16u32)
        .set_label_area_size(LabelAreaPosition::Left, 72)
        .set_label_area_size(LabelAreaPosition::Bottom, label_area);
    if !cfg.title.is_empty() {
        builder.caption(&cfg.title, ("sans-serif", 20));
    }
    let mut chart = builder
        .build_cartesian_2d((0..n).into_segmented(), 0f64..y_top)
        .map_err(ChartError::backend)?;

    let x_fmt = |v: &SegmentValue<usize>| -> String {
        match v {
            SegmentValue::CenterOf(i) if *i < n => counts.name(order[*i]).to_string(),
            _ => String::new(),
        }
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.max(2))
        .x_label_formatter(&x_fmt)
        .y_desc(if cfg.percentage {
            "Percent of reads"
        } else {
            "Number of reads"
        })
        .label_style(("sans-serif", 12))
        .x_label_style(
            ("sans-serif", font_px)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(ChartError::backend)?;

    let bar_color = series_color(0);
    chart
        .draw_series(order.iter().enumerate().map(|(i, &idx)| {
            let v = counts.value(idx);
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0f64.min(v)),
                    (SegmentValue::Exact(i + 1), 0.0f64.max(v)),
                ],
                bar_color.filled(),
            )
        }))
        .map_err(ChartError::backend)?;

    root.present().map_err(ChartError::backend)
}

/// Backend dispatch: `.svg` renders through the SVG backend, everything
/// else through the bitmap backend.
fn is_svg(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("svg")
}

/// Output path for page `page_idx` (0-based) of `total` pages.
fn page_path(base: &Path, page_idx: usize, total: usize) -> PathBuf {
    if total <= 1 || page_idx == 0 {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("chart");
    let name = match base.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{stem}_page{}.{ext}", page_idx + 1),
        None => format!("{stem}_page{}", page_idx + 1),
    };
    base.with_file_name(name)
}

fn format_tick(v: f64) -> String {
    let a = v.abs();
    let prec = if a >= 100.0 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    format!("{:.*}", prec, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_paths_suffix_only_later_pages() {
        let base = Path::new("/tmp/qc.svg");
        assert_eq!(page_path(base, 0, 1), PathBuf::from("/tmp/qc.svg"));
        assert_eq!(page_path(base, 0, 3), PathBuf::from("/tmp/qc.svg"));
        assert_eq!(page_path(base, 1, 3), PathBuf::from("/tmp/qc_page2.svg"));
        assert_eq!(page_path(base, 2, 3), PathBuf::from("/tmp/qc_page3.svg"));
    }
}
