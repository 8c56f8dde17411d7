//! Centre-point sampling of a glyph image into a [`DotMatrix`].
//!
//! The image is divided into square cells of `canvas_size / resolution`
//! pixels. Each cell reads the single pixel at its centre; the cell is ink
//! when that pixel's red channel is below the threshold.

use image::RgbImage;
use tracing::debug;

use crate::error::DotError;
use crate::glyph::GlyphWidth;
use crate::matrix::DotMatrix;

/// Default glyph rendering size in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 256;

/// Default number of dot rows.
pub const DEFAULT_RESOLUTION: usize = 16;

/// Default red-channel threshold; darker pixels are ink.
pub const DEFAULT_THRESHOLD: u8 = 120;

/// Sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Pixel size the glyph was rendered at (the canvas height).
    pub canvas_size: u32,
    /// Number of dot rows (`n_dot`).
    pub resolution: usize,
    /// Red-channel values strictly below this are ink.
    pub threshold: u8,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            resolution: DEFAULT_RESOLUTION,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SamplerConfig {
    /// Config with the default canvas size and threshold.
    #[must_use]
    pub fn with_resolution(resolution: usize) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }

    /// Check that the config yields a non-empty matrix for `width` and
    /// return its column count.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::InvalidArgument`] if the resolution or canvas
    /// size is zero, or the halfwidth column count truncates to zero.
    pub fn validate(&self, width: GlyphWidth) -> Result<usize, DotError> {
        if self.resolution == 0 {
            return Err(DotError::invalid("resolution must be positive"));
        }
        if self.canvas_size == 0 {
            return Err(DotError::invalid("canvas size must be positive"));
        }
        let columns = width.columns(self.resolution);
        if columns == 0 {
            return Err(DotError::invalid(format!(
                "resolution {} leaves no columns for a halfwidth glyph",
                self.resolution
            )));
        }
        Ok(columns)
    }

    /// Side length of one cell in pixels.
    #[must_use]
    pub fn dot_size(&self) -> f64 {
        f64::from(self.canvas_size) / self.resolution as f64
    }
}

/// Samples glyph images into dot matrices.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotSampler {
    config: SamplerConfig,
}

impl DotSampler {
    #[must_use]
    pub const fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Sample `image` into a `resolution × columns` matrix, where `columns`
    /// is `resolution` for fullwidth glyphs and `resolution / 2` otherwise.
    ///
    /// Sample points falling outside the image are clamped to its last
    /// row or column.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::InvalidArgument`] if the resolution or canvas
    /// size is zero, the halfwidth column count truncates to zero, or the
    /// image has no pixels.
    pub fn sample(&self, image: &RgbImage, width: GlyphWidth) -> Result<DotMatrix, DotError> {
        let columns = self.config.validate(width)?;
        if image.width() == 0 || image.height() == 0 {
            return Err(DotError::invalid("glyph image is empty"));
        }

        let dot = self.config.dot_size();
        let max_x = image.width() - 1;
        let max_y = image.height() - 1;
        let centre = |k: usize, max: u32| -> u32 {
            let c = (k as f64 * dot + dot / 2.0).floor();
            // Float-to-int `as` saturates, so the clamp covers huge values too.
            (c as u32).min(max)
        };

        let threshold = self.config.threshold;
        let matrix = DotMatrix::from_fn(self.config.resolution, columns, |i, j| {
            let px = image.get_pixel(centre(j, max_x), centre(i, max_y));
            px.0[0] < threshold
        })?;
        debug!(
            rows = matrix.rows(),
            columns = matrix.columns(),
            ink = matrix.count_ones(),
            "sampled glyph image"
        );
        Ok(matrix)
    }

    /// Convenience for callers holding a plain fullwidth flag.
    ///
    /// # Errors
    ///
    /// See [`DotSampler::sample`].
    pub fn sample_flag(&self, image: &RgbImage, fullwidth: bool) -> Result<DotMatrix, DotError> {
        let width = if fullwidth {
            GlyphWidth::Full
        } else {
            GlyphWidth::Half
        };
        self.sample(image, width)
    }
}
