//! Parsed font data: `ttf-parser` for metrics, `fontdue` for coverage.

use std::sync::Arc;

use fontdue::FontSettings;

use crate::error::FontError;

/// An OpenType/TrueType font held in memory.
///
/// Global metrics come from `ttf-parser` at load time; glyph lookup and
/// anti-aliased rasterization go through `fontdue`.
#[derive(Clone)]
pub struct FontData {
    font: Arc<fontdue::Font>,
    /// Font units per em (design coordinate space).
    units_per_em: u16,
    /// Global ascender in design units (positive).
    ascender: i16,
}

/// 8-bit coverage of one glyph, positioned against its origin.
///
/// `alpha` is row-major, top row first, `width × height` bytes. The bitmap's
/// bottom-left corner sits at `(xmin, ymin)` pixels from the origin, Y up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub xmin: i32,
    pub ymin: i32,
    pub width: usize,
    pub height: usize,
    pub alpha: Vec<u8>,
}

impl Coverage {
    /// Whether the glyph leaves no ink (a space, or an empty outline).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.alpha.iter().all(|&a| a == 0)
    }
}

impl FontData {
    /// Parse font data.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::ParseError`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(bytes, 0).map_err(|e| FontError::ParseError(e.to_string()))?;
        let units_per_em = face.units_per_em();
        let ascender = face.ascender();
        let font = fontdue::Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| FontError::ParseError(e.to_owned()))?;
        Ok(Self {
            font: Arc::new(font),
            units_per_em,
            ascender,
        })
    }

    /// Parse font data read from a file.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::ParseError`] if the data is not a valid font.
    pub fn from_vec(bytes: Vec<u8>) -> Result<Self, FontError> {
        Self::from_bytes(&bytes)
    }

    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Global ascender in design units.
    #[must_use]
    pub const fn ascender(&self) -> i16 {
        self.ascender
    }

    /// Scale factor from design units to pixels at the given font size.
    #[must_use]
    pub fn scale(&self, font_size: f64) -> f64 {
        font_size / f64::from(self.units_per_em)
    }

    /// Whether a character has a glyph in this font.
    #[must_use]
    pub fn has_glyph(&self, ch: char) -> bool {
        self.glyph_id(ch).is_some()
    }

    /// Map a character to its glyph ID. Returns `None` if not in the cmap.
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        match self.font.lookup_glyph_index(ch) {
            0 => None,
            id => Some(id),
        }
    }

    /// Rasterize a glyph at `font_size` pixels per em.
    #[must_use]
    pub fn coverage(&self, glyph_id: u16, font_size: f32) -> Coverage {
        let (metrics, alpha) = self.font.rasterize_indexed(glyph_id, font_size);
        Coverage {
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            width: metrics.width,
            height: metrics.height,
            alpha,
        }
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("units_per_em", &self.units_per_em)
            .field("ascender", &self.ascender)
            .finish()
    }
}
