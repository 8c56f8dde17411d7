//! Font provider trait.

use crate::data::FontData;

/// Supplies the font used to render a character.
///
/// Implementations may read fonts from a directory, embedded data, or any
/// other source. The rasterizer only ever asks for one character at a time.
pub trait FontProvider {
    /// The font to render `ch` with. Returns `None` if no font is available.
    fn font_for(&self, ch: char) -> Option<&FontData>;
}

/// A provider that always hands out the same font.
#[derive(Debug, Clone)]
pub struct SingleFontProvider {
    font: FontData,
}

impl SingleFontProvider {
    #[must_use]
    pub const fn new(font: FontData) -> Self {
        Self { font }
    }
}

impl FontProvider for SingleFontProvider {
    fn font_for(&self, _ch: char) -> Option<&FontData> {
        Some(&self.font)
    }
}

impl<P: FontProvider + ?Sized> FontProvider for &P {
    fn font_for(&self, ch: char) -> Option<&FontData> {
        (**self).font_for(ch)
    }
}
