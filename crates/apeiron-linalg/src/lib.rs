//! # apeiron-linalg
//!
//! Matrix and vector algebra generic over an element ring.
//!
//! This crate provides:
//! - Immutable `Matrix<R>` / `Vector<R>` values with 1-based indexing
//! - Staged construction through `MatrixBuilder` / `VectorBuilder`
//! - Determinants by structural fast path, Rule of Sarrus, or Leibniz
//!   permutation expansion (with an opt-in rayon-parallel variant)
//! - Structural predicates (triangular, diagonal, identity, symmetric, ...)
//! - Max / row-sum / column-sum / Frobenius norms
//!
//! ## Algorithm Selection
//!
//! The determinant picks the cheapest applicable route: triangular
//! matrices multiply their diagonal, sizes up to 3 use closed forms, and
//! everything larger pays the factorial cost of the Leibniz expansion —
//! there is deliberately no elimination fallback, so callers must bound
//! the input size.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod determinant;
pub mod matrix;
pub mod vector;

pub use builder::{MatrixBuilder, VectorBuilder};
pub use matrix::Matrix;
pub use vector::Vector;

#[cfg(test)]
mod proptests;
