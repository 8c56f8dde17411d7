//! Font discovery and parsing errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when locating, loading, or parsing fonts.
#[derive(Debug, Error)]
pub enum FontError {
    /// The configured font directory does not exist.
    #[error("font directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The font directory contains no usable `.ttf`/`.otf` file.
    #[error("no font files found in {}", .0.display())]
    NoFontFiles(PathBuf),

    /// A file or directory could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The provider has no font to render this character with.
    #[error("no font available for {0:?}")]
    NoFontFor(char),

    /// The font data could not be parsed.
    #[error("font parse error: {0}")]
    ParseError(String),
}

impl FontError {
    /// Whether the error means no font resource is available at all.
    #[must_use]
    pub const fn is_resource_not_found(&self) -> bool {
        matches!(self, Self::DirectoryNotFound(_) | Self::NoFontFiles(_))
    }
}
