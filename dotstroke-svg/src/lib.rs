//! SVG preview renderer for `dotstroke` stroke sequences.
//!
//! Converts a slice of [`Rectangle`]s into an SVG [`Document`] using the
//! `svg` crate.
//!
//! Key design points:
//! - Rectangles use a bottom-left origin with Y pointing **up**; SVG has Y
//!   pointing **down**. Each rectangle is flipped at render time against the
//!   matrix height, so no global transform is needed.
//! - Elements are emitted in stroke order, so a viewer that animates or
//!   plots the document in order reproduces the extraction order.
//! - [`Style::Centerlines`] draws each run as a single line through its
//!   cell centres, which is what a pen plotter would follow.

use dotstroke_core::Rectangle;
use svg::Document;
use svg::node::element::{Group, Line, Path, Rectangle as SvgRect};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// How each stroke is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Filled `<rect>` covering the stroke's cells (default).
    #[default]
    Cells,
    /// `<line>` through the centres of the stroke's first and last cells.
    Centerlines,
}

/// Options controlling SVG output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Side length of one dot in user units. Default: 10.0.
    pub cell_size: f64,
    /// Extra margin around the grid (in user units). Default: 0.0.
    pub margin: f64,
    /// Number of decimal places for coordinates. Default: 4.
    pub precision: usize,
    /// Fill (or stroke) colour of the strokes. Default: `"black"`.
    pub color: String,
    /// Draw faint cell grid lines underneath. Default: false.
    pub grid: bool,
    pub style: Style,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            margin: 0.0,
            precision: 4,
            color: "black".to_owned(),
            grid: false,
            style: Style::Cells,
        }
    }
}

/// Render strokes for a `columns × rows` dot matrix.
#[must_use]
pub fn render(rects: &[Rectangle], columns: usize, rows: usize, opts: &RenderOptions) -> Document {
    let mut content = Group::new().set("id", "strokes");
    for (i, rect) in rects.iter().enumerate() {
        let order = i.to_string();
        content = match opts.style {
            Style::Cells => content.add(render_cells(rect, rows, opts).set("data-order", order)),
            Style::Centerlines => {
                content.add(render_centerline(rect, rows, opts).set("data-order", order))
            }
        };
    }

    let mut doc = build_document(columns, rows, opts);
    if opts.grid {
        doc = doc.add(render_grid(columns, rows, opts));
    }
    doc.add(content)
}

/// Render strokes to an SVG string.
#[must_use]
pub fn render_to_string(
    rects: &[Rectangle],
    columns: usize,
    rows: usize,
    opts: &RenderOptions,
) -> String {
    render(rects, columns, rows, opts).to_string()
}

// ---------------------------------------------------------------------------
// Element rendering
// ---------------------------------------------------------------------------

/// Top edge of `rect` in SVG coordinates (cells, Y down).
const fn svg_top(rect: &Rectangle, rows: usize) -> usize {
    rows.saturating_sub(rect.y + rect.height)
}

fn render_cells(rect: &Rectangle, rows: usize, opts: &RenderOptions) -> SvgRect {
    let s = opts.cell_size;
    SvgRect::new()
        .set("x", fmt_scalar(rect.x as f64 * s, opts.precision))
        .set("y", fmt_scalar(svg_top(rect, rows) as f64 * s, opts.precision))
        .set("width", fmt_scalar(rect.width as f64 * s, opts.precision))
        .set("height", fmt_scalar(rect.height as f64 * s, opts.precision))
        .set("fill", opts.color.as_str())
}

fn render_centerline(rect: &Rectangle, rows: usize, opts: &RenderOptions) -> Line {
    let s = opts.cell_size;
    let half = s / 2.0;
    let left = rect.x as f64 * s + half;
    let top = svg_top(rect, rows) as f64 * s + half;
    let right = left + rect.width.saturating_sub(1) as f64 * s;
    let bottom = top + rect.height.saturating_sub(1) as f64 * s;
    Line::new()
        .set("x1", fmt_scalar(left, opts.precision))
        .set("y1", fmt_scalar(top, opts.precision))
        .set("x2", fmt_scalar(right, opts.precision))
        .set("y2", fmt_scalar(bottom, opts.precision))
        .set("stroke", opts.color.as_str())
        .set("stroke-width", fmt_scalar(s * 0.8, opts.precision))
        .set("stroke-linecap", "round")
}

fn render_grid(columns: usize, rows: usize, opts: &RenderOptions) -> Path {
    let s = opts.cell_size;
    let p = opts.precision;
    let w = columns as f64 * s;
    let h = rows as f64 * s;
    let mut d = String::new();
    for j in 0..=columns {
        let x = fmt_scalar(j as f64 * s, p);
        d.push_str(&format!("M{x} 0V{} ", fmt_scalar(h, p)));
    }
    for i in 0..=rows {
        let y = fmt_scalar(i as f64 * s, p);
        d.push_str(&format!("M0 {y}H{} ", fmt_scalar(w, p)));
    }
    Path::new()
        .set("d", d.trim_end())
        .set("fill", "none")
        .set("stroke", "#dddddd")
        .set("stroke-width", fmt_scalar(s / 20.0, p))
}

// ---------------------------------------------------------------------------
// Document assembly
// ---------------------------------------------------------------------------

fn build_document(columns: usize, rows: usize, opts: &RenderOptions) -> Document {
    let m = opts.margin;
    let vb_w = 2.0f64.mul_add(m, columns as f64 * opts.cell_size);
    let vb_h = 2.0f64.mul_add(m, rows as f64 * opts.cell_size);

    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                fmt_scalar(-m, opts.precision),
                fmt_scalar(-m, opts.precision),
                fmt_scalar(vb_w, opts.precision),
                fmt_scalar(vb_h, opts.precision),
            ),
        )
        .set("width", fmt_scalar(vb_w, opts.precision))
        .set("height", fmt_scalar(vb_h, opts.precision))
}

fn fmt_scalar(v: f64, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    // Strip trailing zeros after the decimal point.
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_owned()
        } else {
            trimmed.to_owned()
        }
    } else {
        s
    }
}
