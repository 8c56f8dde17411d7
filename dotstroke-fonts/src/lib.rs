//! Font discovery and glyph rasterization for `dotstroke`.
//!
//! Reads font metrics with `ttf-parser` and rasterizes glyphs with `fontdue`
//! into grey-on-white [`PixelImage`](dotstroke_core::PixelImage)s ready for
//! dot sampling. Fonts are supplied through the [`FontProvider`] trait so the
//! rasterizer can be driven by a font directory, a single in-memory font, or
//! anything else.

pub mod data;
pub mod directory;
pub mod error;
pub mod provider;
pub mod raster;

#[cfg(test)]
mod test_font;

pub use data::{Coverage, FontData};
pub use directory::DirectoryFontProvider;
pub use error::FontError;
pub use provider::{FontProvider, SingleFontProvider};
pub use raster::{DEFAULT_FONT_SIZE, GlyphRasterizer};
