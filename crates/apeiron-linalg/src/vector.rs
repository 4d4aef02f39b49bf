//! Immutable vectors over an element ring.
//!
//! Vectors are 1-based indexed sequences with the same population
//! invariant as matrices: every slot is filled before the value exists.

use std::ops::Index;

use apeiron_rings::{sqrt_decimal, Decimal, Magnitude, NumericError, PrecisionContext, Result, Ring};

/// Immutable 1-based indexed sequence over a ring `R`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector<R> {
    pub(crate) data: Vec<R>,
}

impl<R: Ring> Vector<R> {
    /// Creates a vector from its elements.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `elements` is empty.
    pub fn from_elements(elements: Vec<R>) -> Result<Self> {
        if elements.is_empty() {
            return Err(NumericError::argument("vector requires at least one element"));
        }
        Ok(Self { data: elements })
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: empty vectors cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at the given 1-based index.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the index is outside `[1, len]`.
    pub fn get(&self, index: usize) -> Result<&R> {
        if index == 0 || index > self.data.len() {
            return Err(NumericError::argument(format!(
                "index {index} outside [1, {}]",
                self.data.len()
            )));
        }
        Ok(&self.data[index - 1])
    }

    /// 0-based internal access.
    pub(crate) fn at(&self, index: usize) -> &R {
        &self.data[index]
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on length mismatch.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_length(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        })
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on length mismatch.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_length(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
        })
    }

    /// Scales every element by a ring element.
    #[must_use]
    pub fn scalar_multiply(&self, scalar: &R) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|v| v.clone() * scalar.clone())
                .collect(),
        }
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on length mismatch.
    pub fn dot(&self, other: &Self) -> Result<R> {
        self.check_same_length(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }

    fn check_same_length(&self, other: &Self) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(NumericError::argument(format!(
                "length mismatch: {} vs {}",
                self.data.len(),
                other.data.len()
            )));
        }
        Ok(())
    }
}

impl<R: Magnitude> Vector<R> {
    /// Largest absolute value of any element.
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

    /// Sum of the elements' absolute values.
    ///
    /// # Errors
    ///
    /// Propagates magnitude failures.
    pub fn sum_norm(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        let mut sum = Decimal::zero();
        for entry in &self.data {
            sum = sum + entry.magnitude(ctx)?;
        }
        Ok(sum)
    }

    /// Sum of squared element magnitudes; exact, no rounding involved.
    #[must_use]
    pub fn euclidean_norm_squared(&self) -> Decimal {
        self.data
            .iter()
            .fold(Decimal::zero(), |acc, e| acc + e.magnitude_squared())
    }

    /// Square root of [`Self::euclidean_norm_squared`].
    ///
    /// # Errors
    ///
    /// Propagates square-root failures.
    pub fn euclidean_norm(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        sqrt_decimal(&self.euclidean_norm_squared(), ctx)
    }
}

/// 1-based indexing; panics when out of bounds. Use [`Vector::get`] for
/// checked access.
impl<R: Ring> Index<usize> for Vector<R> {
    type Output = R;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index >= 1 && index <= self.data.len(),
            "index {index} outside [1, {}]",
            self.data.len()
        );
        &self.data[index - 1]
    }
}
