//! Shape module - fixed-capacity occupancy matrices
//!
//! A shape is an `R x C` grid of occupied/empty cells with `R, C <= 4`.
//! Storage is a 4x4 array so shapes are `Copy`: handing a catalog shape to a
//! piece copies it, and rotating produces a new value.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::RulesError;

/// Largest row or column count a shape can have
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupancy matrix of a piece.
///
/// Cells outside `rows x cols` are always unoccupied, so derived equality
/// compares shapes element for element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from a 0/1 matrix known at compile time.
    ///
    /// Any non-zero entry counts as occupied.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in const contexts) if the matrix is empty or
    /// larger than 4x4.
    pub const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R > 0 && C > 0, "shape must have at least one row and column");
        assert!(
            R <= MAX_SHAPE_SIZE && C <= MAX_SHAPE_SIZE,
            "shape larger than 4x4"
        );

        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                bits[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            bits,
        }
    }

    /// Build a shape from runtime rows of 0/1 values
    pub fn try_from_rows<T: AsRef<[u8]>>(rows: &[T]) -> Result<Self, RulesError> {
        if rows.is_empty() || rows.len() > MAX_SHAPE_SIZE {
            return Err(RulesError::InvalidShape("row count must be 1..=4"));
        }
        let cols = rows[0].as_ref().len();
        if cols == 0 || cols > MAX_SHAPE_SIZE {
            return Err(RulesError::InvalidShape("column count must be 1..=4"));
        }

        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(RulesError::InvalidShape("rows differ in length"));
            }
            for (c, &v) in row.iter().enumerate() {
                bits[r][c] = match v {
                    0 => false,
                    1 => true,
                    _ => return Err(RulesError::InvalidShape("cells must be 0 or 1")),
                };
            }
        }

        Ok(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether cell `(r, c)` is occupied; false outside the shape
    pub fn is_occupied(&self, r: usize, c: usize) -> bool {
        r < self.rows() && c < self.cols() && self.bits[r][c]
    }

    /// Occupied cells as `(row, col)`, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows())
            .flat_map(move |r| (0..self.cols()).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.bits[r][c])
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    /// The 90° clockwise rotation.
    ///
    /// For an `R x C` input the result is `C x R` with
    /// `out[c][R - 1 - r] = in[r][c]`.
    pub fn rotated_cw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for r in 0..rows {
            for c in 0..cols {
                bits[c][rows - 1 - r] = self.bits[r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Nested 0/1 form
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| u8::from(self.bits[r][c])).collect())
            .collect()
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_matrix().serialize(serializer)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                f.write_str(if self.bits[r][c] { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_transposes_dimensions() {
        let bar = Shape::from_matrix([[1, 1, 1]]);
        let rotated = bar.rotated_cw();
        assert_eq!((rotated.rows(), rotated.cols()), (3, 1));
        assert_eq!(rotated.to_matrix(), vec![vec![1], vec![1], vec![1]]);
    }

    #[test]
    fn rotation_follows_index_formula() {
        let l = Shape::from_matrix([[1, 0], [1, 0], [1, 1]]);
        let rotated = l.rotated_cw();
        assert_eq!(rotated.to_matrix(), vec![vec![1, 1, 1], vec![1, 0, 0]]);
        for r in 0..l.rows() {
            for c in 0..l.cols() {
                assert_eq!(rotated.is_occupied(c, l.rows() - 1 - r), l.is_occupied(r, c));
            }
        }
    }

    #[test]
    fn four_rotations_are_identity() {
        let s = Shape::from_matrix([[0, 1, 1], [1, 1, 0], [0, 0, 0]]);
        let back = s.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, s);
    }

    #[test]
    fn try_from_rows_validates() {
        assert!(Shape::try_from_rows::<Vec<u8>>(&[]).is_err());
        assert!(Shape::try_from_rows(&[vec![1, 1], vec![1]]).is_err());
        assert!(Shape::try_from_rows(&[vec![2]]).is_err());
        assert!(Shape::try_from_rows(&[vec![1; 5]]).is_err());

        let shape = Shape::try_from_rows(&[[1u8, 1], [1, 1]]).unwrap();
        assert_eq!(shape, Shape::from_matrix([[1, 1], [1, 1]]));
    }

    #[test]
    fn display_draws_cells() {
        let t = Shape::from_matrix([[0, 1, 0], [1, 1, 1]]);
        assert_eq!(t.to_string(), ".#.\n###\n");
    }
}
