//! Stroke rectangles in bottom-left-origin grid coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 1-cell-wide horizontal or vertical run of dots.
///
/// `y` grows upward: the bottom row of a matrix with `n` rows has `y = 0`
/// and the top row has `y = n - 1`. Exactly one of `width`/`height` is 1,
/// or both are for a single dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rectangle {
    #[must_use]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of dots covered.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether this is a vertical stroke (a single dot counts as vertical).
    #[must_use]
    pub const fn is_vertical(&self) -> bool {
        self.width == 1
    }

    /// Covered cells as `(row, column)` matrix coordinates (top-left origin)
    /// for a matrix with `rows` rows, top row first. Cells above the top of
    /// the matrix are skipped.
    pub fn cells(&self, rows: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.y..self.y + self.height)
            .rev()
            .filter_map(move |from_bottom| rows.checked_sub(from_bottom + 1))
            .flat_map(move |i| (self.x..self.x + self.width).map(move |j| (i, j)))
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}
