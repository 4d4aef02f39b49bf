//! Algebraic structure traits.
//!
//! This module defines the capability traits that matrix, vector, and
//! complex-number code is generic over. Concrete element types implement
//! these directly; there is no inheritance hierarchy between the element
//! domains.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use crate::context::PrecisionContext;
use crate::decimal::Decimal;
use crate::error::Result;

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A commutative ring where multiplication is commutative.
///
/// Every element domain in this kernel is commutative; the parallel
/// determinant reduction requires this bound to reorder its sum freely.
pub trait CommutativeRing: Ring {}

/// Elements with a decimal-valued magnitude.
///
/// This is the seam the matrix and vector norms are generic over. The
/// squared magnitude is always exact (a sum of products, no division);
/// the magnitude itself may require a square root and therefore a
/// [`PrecisionContext`].
pub trait Magnitude: Ring {
    /// The squared absolute value, computed exactly.
    fn magnitude_squared(&self) -> Decimal;

    /// The absolute value as a decimal approximation.
    ///
    /// # Errors
    ///
    /// Propagates square-root failures for element domains whose magnitude
    /// is irrational (the complex kernels).
    fn magnitude(&self, ctx: &PrecisionContext) -> Result<Decimal>;
}
