//! Failure signals shared by every kernel operation.

use thiserror::Error;

/// Errors raised by kernel operations.
///
/// Failures are synchronous and fail-fast: no operation retries, returns a
/// partial result, or coerces invalid input. Recovery policy belongs to the
/// caller.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NumericError {
    /// A required input is missing, out of declared bounds, or not
    /// invertible (zero divisor, non-positive precision, epsilon outside
    /// `(0, 1)`, index outside `[1, size]`, dimension mismatch).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation was invoked on a value that structurally cannot
    /// support it (determinant of a non-square matrix, argument of the
    /// zero complex number, `build()` with unfilled cells).
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result alias used across the kernel crates.
pub type Result<T> = std::result::Result<T, NumericError>;

impl NumericError {
    /// Builds an `InvalidArgument` from anything displayable.
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Builds an `InvalidState` from anything displayable.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
