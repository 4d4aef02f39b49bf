//! Immutable matrices over an element ring.
//!
//! Matrices are rectangular, row-major, and publicly indexed 1-based:
//! `[1, row_size] × [1, column_size]`. Every cell is populated before a
//! matrix exists; nothing partially built is observable. Derived
//! quantities (determinant, norms) are recomputed on each call.

use std::ops::Index;

use apeiron_rings::{sqrt_decimal, Decimal, Magnitude, NumericError, PrecisionContext, Result, Ring};

use crate::vector::Vector;

/// Immutable rectangular matrix over a ring `R`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<R> {
    /// Entries in row-major order.
    pub(crate) data: Vec<R>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<R: Ring> Matrix<R> {
    /// Creates a matrix from complete rows.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `rows` is empty or ragged.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(NumericError::argument("matrix requires at least one cell"));
        }
        let cols = rows[0].len();
        if rows.iter().any(|r| r.len() != cols) {
            return Err(NumericError::argument("matrix rows must have equal length"));
        }
        let num_rows = rows.len();
        let data: Vec<R> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: num_rows,
            cols,
        })
    }

    /// Creates the n×n identity matrix.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `n` is zero.
    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(NumericError::argument("matrix size must be positive"));
        }
        let mut data = vec![R::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = R::one();
        }
        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn row_size(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn column_size(&self) -> usize {
        self.cols
    }

    /// Returns the element at the given 1-based position.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either index is outside its declared bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<&R> {
        if row == 0 || row > self.rows || col == 0 || col > self.cols {
            return Err(NumericError::argument(format!(
                "index ({row}, {col}) outside [1, {}] x [1, {}]",
                self.rows, self.cols
            )));
        }
        Ok(self.at(row - 1, col - 1))
    }

    /// 0-based internal access.
    pub(crate) fn at(&self, row: usize, col: usize) -> &R {
        &self.data[row * self.cols + col]
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on dimension mismatch.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on dimension mismatch.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix product `self · other`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `column_size(self) != row_size(other)`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(NumericError::argument(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = R::zero();
                for k in 0..self.cols {
                    sum = sum + self.at(i, k).clone() * other.at(k, j).clone();
                }
                data.push(sum);
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-vector product `self · v`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `column_size(self) != v.len()`.
    pub fn multiply_vector(&self, v: &Vector<R>) -> Result<Vector<R>> {
        if self.cols != v.len() {
            return Err(NumericError::argument(format!(
                "cannot multiply {}x{} by vector of length {}",
                self.rows,
                self.cols,
                v.len()
            )));
        }
        let data = (0..self.rows)
            .map(|i| {
                let mut sum = R::zero();
                for k in 0..self.cols {
                    sum = sum + self.at(i, k).clone() * v.at(k).clone();
                }
                sum
            })
            .collect();
        Vector::from_elements(data)
    }

    /// Scales every entry by a ring element.
    #[must_use]
    pub fn scalar_multiply(&self, scalar: &R) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|v| v.clone() * scalar.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.at(i, j).clone());
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Deletes the given 1-based row and column and reindexes the rest
    /// contiguously from 1.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either index is outside `[1, size]` for its
    /// axis, or if the matrix has no smaller submatrix.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        if row == 0 || row > self.rows || col == 0 || col > self.cols {
            return Err(NumericError::argument(format!(
                "minor index ({row}, {col}) outside [1, {}] x [1, {}]",
                self.rows, self.cols
            )));
        }
        if self.rows == 1 || self.cols == 1 {
            return Err(NumericError::argument(
                "minor of a single row or column is empty",
            ));
        }
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row - 1 {
                continue;
            }
            for j in 0..self.cols {
                if j == col - 1 {
                    continue;
                }
                data.push(self.at(i, j).clone());
            }
        }
        Ok(Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        })
    }

    // ── structural predicates, each one O(rows·cols) pass ──

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Square with only zeros below the main diagonal.
    #[must_use]
    pub fn is_upper_triangular(&self) -> bool {
        self.is_square()
            && (0..self.rows)
                .all(|i| (0..i).all(|j| self.at(i, j).is_zero()))
    }

    /// Square with only zeros above the main diagonal.
    #[must_use]
    pub fn is_lower_triangular(&self) -> bool {
        self.is_square()
            && (0..self.rows)
                .all(|i| (i + 1..self.cols).all(|j| self.at(i, j).is_zero()))
    }

    /// Upper- or lower-triangular.
    #[must_use]
    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    /// Square with zeros everywhere off the main diagonal.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        self.is_square()
            && (0..self.rows)
                .all(|i| (0..self.cols).all(|j| i == j || self.at(i, j).is_zero()))
    }

    /// Diagonal with every diagonal entry the multiplicative identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| {
                (0..self.cols).all(|j| {
                    if i == j {
                        self.at(i, j).is_one()
                    } else {
                        self.at(i, j).is_zero()
                    }
                })
            })
    }

    /// `M[i,j] = M[j,i]` for all positions.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows)
                .all(|i| (i + 1..self.cols).all(|j| self.at(i, j) == self.at(j, i)))
    }

    /// `M[i,j] = −M[j,i]` for all positions, forcing a zero diagonal.
    #[must_use]
    pub fn is_skew_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| self.at(i, i).is_zero())
            && (0..self.rows).all(|i| {
                (i + 1..self.cols).all(|j| *self.at(i, j) == -self.at(j, i).clone())
            })
    }

    /// Unimodularity check: square with determinant exactly `+1` or `−1`.
    ///
    /// This is deliberately narrower than "determinant nonzero"; the
    /// narrow semantic is inherited behavior and kept as-is. Non-square
    /// matrices are simply not invertible.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        match self.determinant() {
            Ok(det) => det.is_one() || (-det).is_one(),
            Err(_) => false,
        }
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(NumericError::argument(format!(
                "shape mismatch: {}x{} vs {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        Ok(())
    }
}

impl<R: Magnitude> Matrix<R> {
    /// Largest absolute value of any entry.
    ///
    /// # Errors
    ///
    /// Propagates magnitude failures.
    pub fn max_norm(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        let mut max = Decimal::zero();
        for entry in &self.data {
            let m = entry.magnitude(ctx)?;
            if m > max {
                max = m;
            }
        }
        Ok(max)
    }

    /// Maximum over rows of the row's absolute-value sum.
    ///
    /// # Errors
    ///
    /// Propagates magnitude failures.
    pub fn row_sum_norm(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        let mut max = Decimal::zero();
        for i in 0..self.rows {
            let mut sum = Decimal::zero();
            for j in 0..self.cols {
                sum = sum + self.at(i, j).magnitude(ctx)?;
            }
            if sum > max {
                max = sum;
            }
        }
        Ok(max)
    }

    /// Maximum over columns of the column's absolute-value sum.
    ///
    /// # Errors
    ///
    /// Propagates magnitude failures.
    pub fn column_sum_norm(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        let mut max = Decimal::zero();
        for j in 0..self.cols {
            let mut sum = Decimal::zero();
            for i in 0..self.rows {
                sum = sum + self.at(i, j).magnitude(ctx)?;
            }
            if sum > max {
                max = sum;
            }
        }
        Ok(max)
    }

    /// Sum of squared entry magnitudes; exact, no rounding involved.
    #[must_use]
    pub fn frobenius_norm_squared(&self) -> Decimal {
        self.data
            .iter()
            .fold(Decimal::zero(), |acc, e| acc + e.magnitude_squared())
    }

    /// Square root of [`Self::frobenius_norm_squared`].
    ///
    /// # Errors
    ///
    /// Propagates square-root failures.
    pub fn frobenius_norm(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        sqrt_decimal(&self.frobenius_norm_squared(), ctx)
    }
}

/// 1-based indexing; panics when out of bounds. Use [`Matrix::get`] for
/// checked access.
impl<R: Ring> Index<(usize, usize)> for Matrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row >= 1 && row <= self.rows && col >= 1 && col <= self.cols,
            "index ({row}, {col}) outside [1, {}] x [1, {}]",
            self.rows,
            self.cols
        );
        self.at(row - 1, col - 1)
    }
}
