//! Fixed-resolution boolean dot matrix.
//!
//! A [`DotMatrix`] is a dense row-major grid of "ink" flags. Row 0 is the
//! top row, matching image coordinates; conversion to the bottom-left origin
//! used by [`Rectangle`](crate::rect::Rectangle) happens in the decomposer.

use std::fmt;

use crate::error::DotError;

/// A `rows × columns` grid of booleans stored in one contiguous buffer.
///
/// Rectangular by construction: every row has exactly `columns` cells.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DotMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl DotMatrix {
    /// An all-false matrix.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::InvalidArgument`] if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, DotError> {
        Self::from_fn(rows, columns, |_, _| false)
    }

    /// Build a matrix by evaluating `f(row, column)` for every cell.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::InvalidArgument`] if either dimension is zero.
    pub fn from_fn(
        rows: usize,
        columns: usize,
        mut f: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, DotError> {
        if rows == 0 || columns == 0 {
            return Err(DotError::invalid(format!(
                "dot matrix must be non-empty, got {rows}x{columns}"
            )));
        }
        let mut cells = Vec::with_capacity(rows * columns);
        for i in 0..rows {
            for j in 0..columns {
                cells.push(f(i, j));
            }
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Build a matrix from nested rows, top row first.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::InvalidArgument`] if there are no rows, the first
    /// row is empty, or the rows differ in length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, DotError> {
        let Some(first) = rows.first() else {
            return Err(DotError::invalid("dot matrix has no rows"));
        };
        let columns = first.as_ref().len();
        if columns == 0 {
            return Err(DotError::invalid("dot matrix has no columns"));
        }
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(DotError::invalid(format!(
                    "row {i} has {} cells, expected {columns}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    /// Number of rows (the resolution `n_dot`).
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Cell value; out-of-range coordinates read as `false`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns && self.cells[row * self.columns + column]
    }

    /// Set a cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, column: usize, value: bool) {
        if row < self.rows && column < self.columns {
            self.cells[row * self.columns + column] = value;
        }
    }

    /// One row as a slice, top row first. Out-of-range rows are empty.
    #[must_use]
    pub fn row(&self, row: usize) -> &[bool] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Number of true cells.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Coordinates `(row, column)` of every true cell, row-major.
    pub fn ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(k, _)| (k / columns, k % columns))
    }
}

impl fmt::Debug for DotMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DotMatrix {}x{}", self.rows, self.columns)?;
        fmt::Display::fmt(self, f)
    }
}

/// Renders `#` for ink and `.` for background, one line per row.
impl fmt::Display for DotMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for &cell in self.row(i) {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_layout() {
        let m = DotMatrix::from_rows(&[[true, false, true], [false, true, false]]).expect("matrix");
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert!(m.get(0, 0));
        assert!(!m.get(0, 1));
        assert!(m.get(1, 1));
        assert_eq!(m.row(1), &[false, true, false]);
        assert_eq!(m.count_ones(), 3);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows: Vec<Vec<bool>> = vec![vec![true, true], vec![true]];
        let err = DotMatrix::from_rows(&rows).expect_err("ragged");
        assert!(matches!(err, DotError::InvalidArgument(_)));
    }

    #[test]
    fn empty_shapes_are_rejected() {
        let none: [[bool; 2]; 0] = [];
        assert!(DotMatrix::from_rows(&none).is_err());
        let empty_row: [[bool; 0]; 1] = [[]];
        assert!(DotMatrix::from_rows(&empty_row).is_err());
        assert!(DotMatrix::new(0, 4).is_err());
        assert!(DotMatrix::new(4, 0).is_err());
    }

    #[test]
    fn out_of_range_reads_false_and_writes_nothing() {
        let mut m = DotMatrix::new(2, 2).expect("matrix");
        m.set(5, 5, true);
        assert!(m.is_blank());
        assert!(!m.get(5, 5));
        assert!(m.row(2).is_empty());
        assert!(m.row(usize::MAX).is_empty());
    }

    #[test]
    fn ones_are_row_major() {
        let m = DotMatrix::from_rows(&[[false, true], [true, true]]).expect("matrix");
        let ones: Vec<_> = m.ones().collect();
        assert_eq!(ones, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn display_draws_ascii() {
        let m = DotMatrix::from_rows(&[[true, false], [false, true]]).expect("matrix");
        assert_eq!(m.to_string(), "#.\n.#\n");
    }
}
