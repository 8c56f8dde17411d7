//! Characters and their East-Asian width classification.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// Canvas aspect class of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphWidth {
    /// Square canvas; the dot matrix has as many columns as rows.
    Full,
    /// Half-width canvas; the dot matrix has half as many columns as rows.
    Half,
}

impl GlyphWidth {
    /// Classify a character by its East-Asian width property.
    ///
    /// Fullwidth, Wide and Ambiguous characters are [`GlyphWidth::Full`];
    /// Neutral, Narrow and Halfwidth characters are [`GlyphWidth::Half`].
    /// Ambiguous counts as wide, which is what `width_cjk` reports.
    #[must_use]
    pub fn of(ch: char) -> Self {
        if ch.width_cjk() == Some(2) {
            Self::Full
        } else {
            Self::Half
        }
    }

    /// Number of dot-matrix columns for a grid with `rows` rows.
    #[must_use]
    pub const fn columns(self, rows: usize) -> usize {
        match self {
            Self::Full => rows,
            Self::Half => rows / 2,
        }
    }

    /// Canvas width in pixels for a glyph rendered at `size`.
    #[must_use]
    pub const fn canvas_width(self, size: u32) -> u32 {
        match self {
            Self::Full => size,
            Self::Half => size / 2,
        }
    }
}

/// A single character together with its width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Glyph {
    pub ch: char,
    pub width: GlyphWidth,
}

impl Glyph {
    /// Create a glyph, classifying its width from the character.
    #[must_use]
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            width: GlyphWidth::of(ch),
        }
    }

    #[must_use]
    pub const fn is_fullwidth(&self) -> bool {
        matches!(self.width, GlyphWidth::Full)
    }
}

impl From<char> for Glyph {
    fn from(ch: char) -> Self {
        Self::new(ch)
    }
}
