//! Greedy longest-run decomposition of a dot matrix into strokes.
//!
//! Each step rescans a private working copy of the matrix for maximal
//! horizontal and vertical runs, takes the longest one, emits it as a
//! [`Rectangle`], and clears its cells. Ties are broken deterministically:
//!
//! - within an axis, the first run in scan order wins (row-major for
//!   horizontal runs, column-major for vertical runs);
//! - across axes, the vertical run wins when its length is at least the
//!   horizontal one.
//!
//! Every step clears at least one cell, so the number of steps is bounded by
//! the number of ink cells. The result is a partition of the ink cells, not
//! necessarily a minimum one.

use tracing::{debug, trace};

use crate::matrix::DotMatrix;
use crate::rect::Rectangle;

/// Direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A maximal run of ink cells in matrix coordinates (row 0 at the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub axis: Axis,
    /// Row of the first cell.
    pub row: usize,
    /// Column of the first cell.
    pub column: usize,
    pub len: usize,
}

impl Run {
    /// Convert to a bottom-left-origin rectangle for a matrix with `rows` rows.
    #[must_use]
    pub const fn to_rectangle(&self, rows: usize) -> Rectangle {
        match self.axis {
            Axis::Horizontal => Rectangle::new(self.column, rows - self.row - 1, self.len, 1),
            Axis::Vertical => Rectangle::new(self.column, rows - self.row - self.len, 1, self.len),
        }
    }

    fn clear(&self, matrix: &mut DotMatrix) {
        for k in 0..self.len {
            match self.axis {
                Axis::Horizontal => matrix.set(self.row, self.column + k, false),
                Axis::Vertical => matrix.set(self.row + k, self.column, false),
            }
        }
    }
}

/// Call `f` for every maximal horizontal run, row by row, left to right.
fn scan_rows(matrix: &DotMatrix, mut f: impl FnMut(Run)) {
    for i in 0..matrix.rows() {
        let mut start = None;
        for (j, &cell) in matrix.row(i).iter().enumerate() {
            match (cell, start) {
                (true, None) => start = Some(j),
                (false, Some(s)) => {
                    f(Run {
                        axis: Axis::Horizontal,
                        row: i,
                        column: s,
                        len: j - s,
                    });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            f(Run {
                axis: Axis::Horizontal,
                row: i,
                column: s,
                len: matrix.columns() - s,
            });
        }
    }
}

/// Call `f` for every maximal vertical run, column by column, top to bottom.
fn scan_columns(matrix: &DotMatrix, mut f: impl FnMut(Run)) {
    for j in 0..matrix.columns() {
        let mut start = None;
        for i in 0..matrix.rows() {
            match (matrix.get(i, j), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    f(Run {
                        axis: Axis::Vertical,
                        row: s,
                        column: j,
                        len: i - s,
                    });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            f(Run {
                axis: Axis::Vertical,
                row: s,
                column: j,
                len: matrix.rows() - s,
            });
        }
    }
}

/// All maximal horizontal runs in row-major order.
#[must_use]
pub fn horizontal_runs(matrix: &DotMatrix) -> Vec<Run> {
    let mut runs = Vec::new();
    scan_rows(matrix, |r| runs.push(r));
    runs
}

/// All maximal vertical runs in column-major order.
#[must_use]
pub fn vertical_runs(matrix: &DotMatrix) -> Vec<Run> {
    let mut runs = Vec::new();
    scan_columns(matrix, |r| runs.push(r));
    runs
}

/// Keeps the first of several equally long runs.
fn keep_longest(best: &mut Option<Run>, run: Run) {
    if best.is_none_or(|b| run.len > b.len) {
        *best = Some(run);
    }
}

/// Pick the run to extract next, or `None` when the matrix is blank.
fn next_run(matrix: &DotMatrix) -> Option<Run> {
    let mut horizontal = None;
    let mut vertical = None;
    scan_rows(matrix, |r| keep_longest(&mut horizontal, r));
    scan_columns(matrix, |r| keep_longest(&mut vertical, r));

    match (horizontal, vertical) {
        (Some(h), Some(v)) if h.len > v.len => Some(h),
        (h, None) => h,
        (_, v) => v,
    }
}

/// Lazy decomposition: yields rectangles in extraction order.
///
/// Owns its working copy; the matrix it was built from is never touched.
#[derive(Debug, Clone)]
pub struct Decomposition {
    work: DotMatrix,
}

impl Decomposition {
    #[must_use]
    pub fn new(matrix: &DotMatrix) -> Self {
        Self {
            work: matrix.clone(),
        }
    }

    /// Cells not yet covered by an emitted rectangle.
    #[must_use]
    pub const fn remaining(&self) -> &DotMatrix {
        &self.work
    }
}

impl Iterator for Decomposition {
    type Item = Rectangle;

    fn next(&mut self) -> Option<Rectangle> {
        let run = next_run(&self.work)?;
        run.clear(&mut self.work);
        let rect = run.to_rectangle(self.work.rows());
        trace!(?run, %rect, "extracted run");
        Some(rect)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let ink = self.work.count_ones();
        (usize::from(ink > 0), Some(ink))
    }
}

/// Decompose `matrix` into disjoint strokes covering exactly its ink cells.
#[must_use]
pub fn decompose(matrix: &DotMatrix) -> Vec<Rectangle> {
    let rects: Vec<Rectangle> = Decomposition::new(matrix).collect();
    debug!(
        rows = matrix.rows(),
        columns = matrix.columns(),
        ink = matrix.count_ones(),
        strokes = rects.len(),
        "decomposed dot matrix"
    );
    rects
}
