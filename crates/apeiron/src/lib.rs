//! # Apeiron
//!
//! An arbitrary-precision numeric kernel.
//!
//! Apeiron provides the numerically delicate core of a computer-algebra
//! stack: iterative square roots with configurable convergence, complex
//! arithmetic over exact and decimal coefficients with polar-form
//! conversion, and matrix/vector algebra generic over the element ring.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: exact big integers and rounding-controlled
//!   decimals
//! - **Configurable Convergence**: digit-count or epsilon termination for
//!   Newton-Raphson square roots
//! - **Four Element Domains**: integer, decimal, exact complex, decimal
//!   complex — one generic matrix kernel over all of them
//! - **Permutation Determinants**: Sarrus and Leibniz expansion with an
//!   opt-in parallel variant
//!
//! ## Quick Start
//!
//! ```rust
//! use apeiron::prelude::*;
//!
//! let ctx = PrecisionContext::with_digits(12, Rounding::HalfEven)?;
//! let z = GaussianInt::from_i64(3, 4);
//! assert_eq!(z.abs(&ctx)?, Decimal::from_i64(5));
//! # Ok::<(), apeiron::rings::NumericError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use apeiron_complex as complex;
pub use apeiron_linalg as linalg;
pub use apeiron_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use apeiron_complex::{
        DecimalComplex, GaussianInt, PolarForm, SeriesProvider, TranscendentalProvider,
    };
    pub use apeiron_linalg::{Matrix, MatrixBuilder, Vector, VectorBuilder};
    pub use apeiron_rings::{
        sqrt_decimal, sqrt_integer, Decimal, Integer, Magnitude, NumericError, PrecisionContext,
        Result, Ring, Rounding,
    };
}
