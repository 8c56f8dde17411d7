//! Glyph dot-matrix sampling and stroke decomposition.
//!
//! The pipeline has two steps:
//! - [`DotSampler`] reads one pixel per cell of a rasterized glyph image and
//!   produces a boolean [`DotMatrix`];
//! - [`decompose`] greedily splits the matrix into horizontal and vertical
//!   1-cell-wide [`Rectangle`]s that cover every ink cell exactly once.
//!
//! This crate does no I/O. Font loading and rasterization live in
//! `dotstroke-fonts`.

pub mod decompose;
pub mod error;
pub mod glyph;
pub mod matrix;
pub mod rect;
pub mod sample;

pub use decompose::{Decomposition, decompose};
pub use error::DotError;
pub use glyph::{Glyph, GlyphWidth};
pub use matrix::DotMatrix;
pub use rect::Rectangle;
pub use sample::{
    DEFAULT_CANVAS_SIZE, DEFAULT_RESOLUTION, DEFAULT_THRESHOLD, DotSampler, SamplerConfig,
};

/// A rasterized glyph: white background, dark ink with grey edges.
pub type PixelImage = image::RgbImage;
