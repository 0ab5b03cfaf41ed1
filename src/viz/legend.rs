//! Legend composition: an anchored panel listing the datasets of the
//! current page with the exact color/marker assignment the series plotter
//! used for that page.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::RGBAColor;

use crate::error::{ChartError, Result};

use super::style::{MarkerShape, marker_glyph};
use super::text::{estimate_text_width_px, truncate_to_width};

/// Legend placement as fractions of the chart frame, `(0, 0)` = top-left,
/// `(1, 1)` = bottom-right. The anchor marks the legend's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendAnchor {
    pub x: f64,
    pub y: f64,
}

/// One legend row, mirroring a plotted series.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: RGBAColor,
    pub marker: MarkerShape,
}

/// Draw a legend panel for the current page onto the frame's root area.
///
/// Entries must be exactly the visible series of that page, in page order;
/// callers never pass rows from other pages.
pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    entries: &[LegendEntry],
    anchor: LegendAnchor,
    scale: f64,
) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let font_px = ((12.0 * scale).round() as u32).max(6);
    let line_h = (font_px + 6) as i32;
    let marker_half = ((font_px / 3) as i32).max(3);
    let pad: i32 = 6;
    let marker_col = marker_half * 2 + pad;

    let (area_w, area_h) = area.dim_in_pixel();
    let (area_w, area_h) = (area_w as i32, area_h as i32);

    // Cap label width so an extreme dataset name cannot swallow the frame.
    let label_cap_px = ((area_w as f64) * 0.45).max(80.0) as u32;
    let labels: Vec<String> = entries
        .iter()
        .map(|e| truncate_to_width(&e.label, font_px, label_cap_px))
        .collect();

    let text_w = labels
        .iter()
        .map(|l| estimate_text_width_px(l, font_px))
        .max()
        .unwrap_or(0) as i32;
    let box_w = pad + marker_col + pad + text_w + pad;
    let box_h = pad + line_h * entries.len() as i32 + pad;

    // Anchor the top-left corner, then clamp the panel into the frame.
    let x0 = ((anchor.x * area_w as f64) as i32).clamp(0, (area_w - box_w).max(0));
    let y0 = ((anchor.y * area_h as f64) as i32).clamp(0, (area_h - box_h).max(0));
    let x1 = (x0 + box_w).min(area_w);
    let y1 = (y0 + box_h).min(area_h);

    area.draw(&Rectangle::new(
        [(x0, y0), (x1, y1)],
        WHITE.mix(0.85).filled(),
    ))
    .map_err(ChartError::backend)?;
    area.draw(&Rectangle::new(
        [(x0, y0), (x1, y1)],
        BLACK.stroke_width(1),
    ))
    .map_err(ChartError::backend)?;

    for (i, (entry, label)) in entries.iter().zip(&labels).enumerate() {
        let row_center = y0 + pad + line_h * i as i32 + line_h / 2;
        let marker_center = (x0 + pad + marker_half, row_center);
        for prim in marker_glyph::<DB, (i32, i32)>(
            entry.marker,
            marker_center,
            marker_half,
            entry.color,
        ) {
            area.draw(&prim).map_err(ChartError::backend)?;
        }
        area.draw(&Text::new(
            label.clone(),
            (x0 + pad + marker_col + pad, row_center - (font_px as i32) / 2),
            ("sans-serif", font_px).into_font(),
        ))
        .map_err(ChartError::backend)?;
    }
    Ok(())
}
