//! # apeiron-complex
//!
//! Complex-number arithmetic over exact and approximate coefficients.
//!
//! Two parallel kernels share one algebraic contract:
//! - [`GaussianInt`] — exact integer coefficients; arithmetic is closed
//!   and rounding-free except for `abs` and `argument`, whose values are
//!   generally irrational
//! - [`DecimalComplex`] — decimal coefficients; rounding applies at
//!   division, magnitude, argument, and polar conversion
//!
//! Angles and magnitudes go through a pluggable
//! [`TranscendentalProvider`]; the default [`SeriesProvider`] evaluates
//! Maclaurin series with argument reduction and Machin's formula for π.
//! Polar conversion is approximate in both directions whenever the radius
//! or angle is irrational.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod decimal_complex;
pub mod gaussian;
pub mod polar;
pub mod transcendental;

#[cfg(test)]
mod proptests;

pub use decimal_complex::DecimalComplex;
pub use gaussian::GaussianInt;
pub use polar::PolarForm;
pub use transcendental::{SeriesProvider, TranscendentalProvider};
