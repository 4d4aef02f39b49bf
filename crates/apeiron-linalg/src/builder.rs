//! Staged construction of matrices and vectors.
//!
//! Builders hold a preallocated slot table plus declared dimensions and
//! are mutable only until `build()`; the frozen value is only handed out
//! once every slot is populated, so no partially-defined matrix or vector
//! is ever observable. Builders follow a single-writer discipline and are
//! not meant to be shared while staging.

use apeiron_rings::{NumericError, Result, Ring};

use crate::matrix::Matrix;
use crate::vector::Vector;

/// Staging area for a [`Matrix`].
#[derive(Debug, Clone)]
pub struct MatrixBuilder<R> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<R>>,
}

impl<R: Ring> MatrixBuilder<R> {
    /// Starts a builder for a `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(NumericError::argument(format!(
                "matrix dimensions must be positive, got {rows}x{cols}"
            )));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Assigns one cell, 1-based.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either index is outside its declared bounds.
    pub fn put(&mut self, row: usize, col: usize, value: R) -> Result<&mut Self> {
        if row == 0 || row > self.rows || col == 0 || col > self.cols {
            return Err(NumericError::argument(format!(
                "index ({row}, {col}) outside [1, {}] x [1, {}]",
                self.rows, self.cols
            )));
        }
        self.cells[(row - 1) * self.cols + (col - 1)] = Some(value);
        Ok(self)
    }

    /// Assigns every cell to the same value, overwriting prior puts.
    pub fn fill(&mut self, value: &R) -> &mut Self {
        for cell in &mut self.cells {
            *cell = Some(value.clone());
        }
        self
    }

    /// Assigns only the cells not yet populated.
    pub fn fill_missing(&mut self, value: &R) -> &mut Self {
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(value.clone());
            }
        }
        self
    }

    /// Freezes the builder into an immutable matrix.
    ///
    /// # Errors
    ///
    /// `InvalidState` naming the first unassigned cell, if any.
    pub fn build(self) -> Result<Matrix<R>> {
        if let Some(gap) = self.cells.iter().position(Option::is_none) {
            return Err(NumericError::state(format!(
                "cell ({}, {}) was never assigned",
                gap / self.cols + 1,
                gap % self.cols + 1
            )));
        }
        let data = self.cells.into_iter().flatten().collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// Staging area for a [`Vector`].
#[derive(Debug, Clone)]
pub struct VectorBuilder<R> {
    slots: Vec<Option<R>>,
}

impl<R: Ring> VectorBuilder<R> {
    /// Starts a builder for a vector of the given length.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `len` is zero.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(NumericError::argument("vector length must be positive"));
        }
        Ok(Self {
            slots: vec![None; len],
        })
    }

    /// Assigns one slot, 1-based.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the index is outside `[1, len]`.
    pub fn put(&mut self, index: usize, value: R) -> Result<&mut Self> {
        if index == 0 || index > self.slots.len() {
            return Err(NumericError::argument(format!(
                "index {index} outside [1, {}]",
                self.slots.len()
            )));
        }
        self.slots[index - 1] = Some(value);
        Ok(self)
    }

    /// Assigns every slot to the same value, overwriting prior puts.
    pub fn fill(&mut self, value: &R) -> &mut Self {
        for slot in &mut self.slots {
            *slot = Some(value.clone());
        }
        self
    }

    /// Assigns only the slots not yet populated.
    pub fn fill_missing(&mut self, value: &R) -> &mut Self {
        for slot in &mut self.slots {
            if slot.is_none() {
                *slot = Some(value.clone());
            }
        }
        self
    }

    /// Freezes the builder into an immutable vector.
    ///
    /// # Errors
    ///
    /// `InvalidState` naming the first unassigned slot, if any.
    pub fn build(self) -> Result<Vector<R>> {
        if let Some(gap) = self.slots.iter().position(Option::is_none) {
            return Err(NumericError::state(format!(
                "slot {} was never assigned",
                gap + 1
            )));
        }
        let data = self.slots.into_iter().flatten().collect();
        Ok(Vector { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apeiron_rings::Integer;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(MatrixBuilder::<Integer>::new(0, 2).is_err());
        assert!(MatrixBuilder::<Integer>::new(2, 0).is_err());
        assert!(VectorBuilder::<Integer>::new(0).is_err());
    }

    #[test]
    fn build_requires_full_population() {
        let mut b = MatrixBuilder::new(2, 2).unwrap();
        b.put(1, 1, Integer::new(1)).unwrap();
        b.put(2, 2, Integer::new(4)).unwrap();
        let err = b.build().unwrap_err();
        assert!(matches!(err, NumericError::InvalidState(_)));
        assert!(err.to_string().contains("(1, 2)"));
    }

    #[test]
    fn put_fill_missing_then_build() {
        let mut b = MatrixBuilder::new(2, 3).unwrap();
        b.put(1, 1, Integer::new(9)).unwrap();
        b.fill_missing(&Integer::new(0));
        let m = b.build().unwrap();
        assert_eq!(m[(1, 1)], Integer::new(9));
        assert_eq!(m[(1, 2)], Integer::new(0));
        assert_eq!(m[(2, 3)], Integer::new(0));
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut b = MatrixBuilder::new(2, 2).unwrap();
        b.put(1, 1, Integer::new(9)).unwrap();
        b.fill(&Integer::new(7));
        let m = b.build().unwrap();
        for i in 1..=2 {
            for j in 1..=2 {
                assert_eq!(m[(i, j)], Integer::new(7));
            }
        }
    }

    #[test]
    fn out_of_bounds_put_is_rejected() {
        let mut b = MatrixBuilder::<Integer>::new(2, 2).unwrap();
        assert!(b.put(0, 1, Integer::new(1)).is_err());
        assert!(b.put(3, 1, Integer::new(1)).is_err());
        assert!(b.put(1, 3, Integer::new(1)).is_err());

        let mut v = VectorBuilder::<Integer>::new(2).unwrap();
        assert!(v.put(0, Integer::new(1)).is_err());
        assert!(v.put(3, Integer::new(1)).is_err());
    }

    #[test]
    fn vector_staging() {
        let mut b = VectorBuilder::new(3).unwrap();
        b.put(2, Integer::new(5)).unwrap();
        b.fill_missing(&Integer::new(1));
        let v = b.build().unwrap();
        assert_eq!(v[1], Integer::new(1));
        assert_eq!(v[2], Integer::new(5));
        assert_eq!(v[3], Integer::new(1));

        let empty = VectorBuilder::<Integer>::new(2).unwrap().build();
        assert!(matches!(empty, Err(NumericError::InvalidState(_))));
    }
}
