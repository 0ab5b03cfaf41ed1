//! Series styling: deterministic color assignment and a fixed palette of
//! 25 distinct marker symbols.
//!
//! Style is a pure function of a row's 1-based position within its page:
//! position `j` gets color `j` and marker `palette[(j - 1) mod 25]`. On a
//! page with more than 25 rows the marker symbols repeat while the colors
//! keep differing; rows beyond 25 are therefore distinguished by color
//! alone. That reuse is a documented limitation, not disambiguated further.

use plotters::element::{
    Circle, Cross, DynElement, EmptyElement, IntoDynElement, PathElement, Polygon, Rectangle,
};
use plotters::prelude::*;
use plotters::style::{RGBAColor, ShapeStyle};

/// Marker symbols, ordered as the fixed 25-entry palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    OpenSquare,
    OpenCircle,
    TriangleUp,
    Plus,
    Cross,
    OpenDiamond,
    TriangleDown,
    SquareCross,
    Star,
    DiamondPlus,
    CirclePlus,
    Hourglass,
    SquarePlus,
    CircleCross,
    SquareTriangle,
    FilledSquare,
    FilledCircle,
    FilledTriangle,
    FilledDiamond,
    LargeFilledCircle,
    Bullet,
    RingedCircle,
    RingedSquare,
    RingedDiamond,
    RingedTriangle,
}

/// The fixed marker palette. Exactly 25 distinct symbols; series index into
/// it with explicit modular arithmetic, never implicit recycling.
pub const MARKER_PALETTE: [MarkerShape; 25] = [
    MarkerShape::OpenSquare,
    MarkerShape::OpenCircle,
    MarkerShape::TriangleUp,
    MarkerShape::Plus,
    MarkerShape::Cross,
    MarkerShape::OpenDiamond,
    MarkerShape::TriangleDown,
    MarkerShape::SquareCross,
    MarkerShape::Star,
    MarkerShape::DiamondPlus,
    MarkerShape::CirclePlus,
    MarkerShape::Hourglass,
    MarkerShape::SquarePlus,
    MarkerShape::CircleCross,
    MarkerShape::SquareTriangle,
    MarkerShape::FilledSquare,
    MarkerShape::FilledCircle,
    MarkerShape::FilledTriangle,
    MarkerShape::FilledDiamond,
    MarkerShape::LargeFilledCircle,
    MarkerShape::Bullet,
    MarkerShape::RingedCircle,
    MarkerShape::RingedSquare,
    MarkerShape::RingedDiamond,
    MarkerShape::RingedTriangle,
];

/// Marker for a row at 0-based position `pos` within its page.
#[inline]
pub fn marker_for(pos: usize) -> MarkerShape {
    MARKER_PALETTE[pos % MARKER_PALETTE.len()]
}

/// Color for a row at 0-based position `pos` within its page.
///
/// Hues are spaced by the golden angle so consecutive series contrast
/// strongly and no two positions within one marker cycle share a color.
pub fn series_color(pos: usize) -> RGBAColor {
    let hue = (pos as f64 * 137.508) % 360.0;
    let (r, g, b) = hsl_to_rgb8(hue, 0.65, 0.42);
    RGBColor(r, g, b).to_rgba()
}

// HSL -> RGB conversion (linear; sufficient for chart colors).
fn hsl_to_rgb8(h_deg: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = (h_deg % 360.0) / 360.0;
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);
    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn triangle_up(s: i32) -> Vec<(i32, i32)> {
    vec![(-s, s), (s, s), (0, -s), (-s, s)]
}

fn triangle_down(s: i32) -> Vec<(i32, i32)> {
    vec![(-s, -s), (s, -s), (0, s), (-s, -s)]
}

fn diamond(s: i32) -> Vec<(i32, i32)> {
    vec![(0, -s), (s, 0), (0, s), (-s, 0), (0, -s)]
}

/// Build the drawable primitives of `shape`, each anchored at `at` in the
/// target coordinate system with pixel-offset geometry of half-extent
/// `size`. Composite symbols (plus inside a circle, ringed fills, ...)
/// come back as several overlaid primitives.
///
/// Works both for data-coordinate anchors (series points drawn on the
/// chart's plotting area) and pixel anchors (legend swatches drawn on a
/// raw area).
pub fn marker_glyph<'b, DB, Coord>(
    shape: MarkerShape,
    at: Coord,
    size: i32,
    color: RGBAColor,
) -> Vec<DynElement<'b, DB, Coord>>
where
    DB: DrawingBackend + 'b,
    Coord: Clone + 'b,
{
    let s = size.max(1);
    let stroke = ShapeStyle {
        color,
        filled: false,
        stroke_width: 1,
    };
    let fill = color.filled();

    let square = move |at: Coord, s: i32, style: ShapeStyle| {
        (EmptyElement::at(at) + Rectangle::new([(-s, -s), (s, s)], style)).into_dyn()
    };
    let circle = move |at: Coord, s: i32, style: ShapeStyle| {
        (EmptyElement::at(at) + Circle::new((0, 0), s, style)).into_dyn()
    };
    let path = move |at: Coord, pts: Vec<(i32, i32)>, style: ShapeStyle| {
        (EmptyElement::at(at) + PathElement::new(pts, style)).into_dyn()
    };
    let polygon = move |at: Coord, pts: Vec<(i32, i32)>, style: ShapeStyle| {
        (EmptyElement::at(at) + Polygon::new(pts, style)).into_dyn()
    };
    let cross = move |at: Coord, s: i32, style: ShapeStyle| {
        (EmptyElement::at(at) + Cross::new((0, 0), s, style)).into_dyn()
    };
    let h_bar = move |at: Coord, s: i32, style: ShapeStyle| {
        (EmptyElement::at(at) + PathElement::new(vec![(-s, 0), (s, 0)], style)).into_dyn()
    };
    let v_bar = move |at: Coord, s: i32, style: ShapeStyle| {
        (EmptyElement::at(at) + PathElement::new(vec![(0, -s), (0, s)], style)).into_dyn()
    };

    match shape {
        MarkerShape::OpenSquare => vec![square(at, s, stroke)],
        MarkerShape::OpenCircle => vec![circle(at, s, stroke)],
        MarkerShape::TriangleUp => vec![path(at, triangle_up(s), stroke)],
        MarkerShape::Plus => vec![h_bar(at.clone(), s, stroke), v_bar(at, s, stroke)],
        MarkerShape::Cross => vec![cross(at, s, stroke)],
        MarkerShape::OpenDiamond => vec![path(at, diamond(s), stroke)],
        MarkerShape::TriangleDown => vec![path(at, triangle_down(s), stroke)],
        MarkerShape::SquareCross => vec![square(at.clone(), s, stroke), cross(at, s, stroke)],
        MarkerShape::Star => vec![
            h_bar(at.clone(), s, stroke),
            v_bar(at.clone(), s, stroke),
            cross(at, s, stroke),
        ],
        MarkerShape::DiamondPlus => vec![
            path(at.clone(), diamond(s), stroke),
            h_bar(at.clone(), s, stroke),
            v_bar(at, s, stroke),
        ],
        MarkerShape::CirclePlus => vec![
            circle(at.clone(), s, stroke),
            h_bar(at.clone(), s, stroke),
            v_bar(at, s, stroke),
        ],
        MarkerShape::Hourglass => vec![
            path(at.clone(), triangle_up(s), stroke),
            path(at, triangle_down(s), stroke),
        ],
        MarkerShape::SquarePlus => vec![
            square(at.clone(), s, stroke),
            h_bar(at.clone(), s, stroke),
            v_bar(at, s, stroke),
        ],
        MarkerShape::CircleCross => vec![circle(at.clone(), s, stroke), cross(at, s, stroke)],
        MarkerShape::SquareTriangle => vec![
            square(at.clone(), s, stroke),
            path(at, triangle_up(s), stroke),
        ],
        MarkerShape::FilledSquare => vec![square(at, s, fill)],
        MarkerShape::FilledCircle => vec![circle(at, s, fill)],
        MarkerShape::FilledTriangle => vec![polygon(at, triangle_up(s), fill)],
        MarkerShape::FilledDiamond => vec![polygon(at, diamond(s), fill)],
        MarkerShape::LargeFilledCircle => vec![circle(at, s + 2, fill)],
        MarkerShape::Bullet => vec![circle(at, (s / 2).max(1), fill)],
        MarkerShape::RingedCircle => vec![
            circle(at.clone(), (s - 1).max(1), fill),
            circle(at, s, stroke),
        ],
        MarkerShape::RingedSquare => vec![
            square(at.clone(), (s - 1).max(1), fill),
            square(at, s, stroke),
        ],
        MarkerShape::RingedDiamond => vec![
            polygon(at.clone(), diamond((s - 1).max(1)), fill),
            path(at, diamond(s), stroke),
        ],
        MarkerShape::RingedTriangle => vec![
            polygon(at.clone(), triangle_up((s - 1).max(1)), fill),
            path(at, triangle_up(s), stroke),
        ],
    }
}
