//! Glyph rasterization onto fixed-size canvases.
//!
//! `fontdue` produces 8-bit coverage; coverage is written as grey
//! (`255 - coverage`) on white, so the sampler's threshold decides which
//! edge pixels count as ink.

use dotstroke_core::{Glyph, PixelImage};
use image::Rgb;
use tracing::{debug, warn};

use crate::data::Coverage;
use crate::error::FontError;
use crate::provider::FontProvider;

/// Default font size (and canvas height) in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 256;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Renders single glyphs onto fixed-size canvases.
#[derive(Debug, Clone)]
pub struct GlyphRasterizer<P> {
    provider: P,
    font_size: u32,
}

impl<P: FontProvider> GlyphRasterizer<P> {
    #[must_use]
    pub const fn new(provider: P, font_size: u32) -> Self {
        Self {
            provider,
            font_size,
        }
    }

    /// Render `glyph` dark on white.
    ///
    /// The canvas is `size × size` for fullwidth glyphs and
    /// `size / 2 × size` otherwise. The glyph origin sits on the left edge
    /// with the font's ascender touching the top edge. Characters missing
    /// from the font render as its `.notdef` glyph.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::NoFontFor`] if the provider has no font for the
    /// character.
    pub fn rasterize(&self, glyph: Glyph) -> Result<PixelImage, FontError> {
        let font = self
            .provider
            .font_for(glyph.ch)
            .ok_or(FontError::NoFontFor(glyph.ch))?;

        let mut image = PixelImage::from_pixel(
            glyph.width.canvas_width(self.font_size),
            self.font_size,
            BACKGROUND,
        );

        let glyph_id = font.glyph_id(glyph.ch).unwrap_or_else(|| {
            warn!(ch = ?glyph.ch, "character not in font, drawing .notdef");
            0
        });
        let coverage = font.coverage(glyph_id, self.font_size as f32);
        if coverage.is_empty() {
            debug!(ch = ?glyph.ch, "glyph has no ink");
            return Ok(image);
        }

        let size = f64::from(self.font_size);
        let baseline = (f64::from(font.ascender()) * font.scale(size)).round() as i64;
        let top = baseline - i64::from(coverage.ymin) - coverage.height as i64;
        draw_coverage(&coverage, &mut image, i64::from(coverage.xmin), top);

        debug!(
            ch = ?glyph.ch,
            width = image.width(),
            height = image.height(),
            baseline,
            "rasterized glyph"
        );
        Ok(image)
    }
}

/// Darken `image` by `coverage` with its top-left corner at `(left, top)`.
///
/// Pixels outside the canvas are clipped. Overlapping ink keeps the darker
/// value.
pub fn draw_coverage(coverage: &Coverage, image: &mut PixelImage, left: i64, top: i64) {
    if coverage.width == 0 {
        return;
    }
    let (w, h) = (i64::from(image.width()), i64::from(image.height()));
    for (row, line) in coverage.alpha.chunks(coverage.width).enumerate() {
        let y = top + row as i64;
        if !(0..h).contains(&y) {
            continue;
        }
        for (col, &alpha) in line.iter().enumerate() {
            let x = left + col as i64;
            if alpha == 0 || !(0..w).contains(&x) {
                continue;
            }
            let px = image.get_pixel_mut(x as u32, y as u32);
            let v = px.0[0].min(255 - alpha);
            *px = Rgb([v, v, v]);
        }
    }
}
