//! Precision and convergence configuration.
//!
//! A [`PrecisionContext`] is the kernel's entire configuration surface.
//! It carries exactly one of two mutually exclusive policies:
//!
//! - a **precision policy** (significant digit count plus rounding mode),
//!   used wherever a result must be rounded — division, magnitudes,
//!   transcendental evaluation;
//! - an **epsilon policy** (convergence threshold in `(0, 1)`), used to
//!   terminate iterative approximation.
//!
//! Contexts are immutable values, created per call site and discarded.

use bigdecimal::RoundingMode;

use crate::decimal::{Decimal, GUARD_DIGITS};
use crate::error::{NumericError, Result};
use crate::traits::Ring;

/// Rounding policy applied when a result must be shortened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Round to nearest; ties go away from zero.
    HalfUp,
    /// Round to nearest; ties go to the even digit.
    HalfEven,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward zero.
    Truncate,
}

impl Rounding {
    /// The equivalent `bigdecimal` mode.
    pub(crate) fn mode(self) -> RoundingMode {
        match self {
            Rounding::HalfUp => RoundingMode::HalfUp,
            Rounding::HalfEven => RoundingMode::HalfEven,
            Rounding::Floor => RoundingMode::Floor,
            Rounding::Ceiling => RoundingMode::Ceiling,
            Rounding::Truncate => RoundingMode::Down,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Policy {
    Digits { digits: u64, rounding: Rounding },
    Epsilon { epsilon: Decimal },
}

/// Immutable precision/convergence settings for approximate operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrecisionContext {
    policy: Policy,
}

impl PrecisionContext {
    /// Creates a precision-policy context.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `digits` is zero.
    pub fn with_digits(digits: u64, rounding: Rounding) -> Result<Self> {
        if digits == 0 {
            return Err(NumericError::argument("precision must be positive"));
        }
        Ok(Self {
            policy: Policy::Digits { digits, rounding },
        })
    }

    /// Creates an epsilon-policy context.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `epsilon` lies strictly between 0 and 1.
    pub fn with_epsilon(epsilon: Decimal) -> Result<Self> {
        if epsilon.signum() <= 0 || epsilon >= Decimal::one() {
            return Err(NumericError::argument(format!(
                "epsilon must lie in (0, 1), got {epsilon}"
            )));
        }
        Ok(Self {
            policy: Policy::Epsilon { epsilon },
        })
    }

    /// The configured significant-digit count.
    ///
    /// For the epsilon policy this is the derived working digit count.
    #[must_use]
    pub fn digits(&self) -> u64 {
        match &self.policy {
            Policy::Digits { digits, .. } => *digits,
            Policy::Epsilon { .. } => self.working_digits(),
        }
    }

    /// The configured rounding mode (half-even under the epsilon policy).
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        match &self.policy {
            Policy::Digits { rounding, .. } => *rounding,
            Policy::Epsilon { .. } => Rounding::HalfEven,
        }
    }

    /// The convergence threshold, when this is an epsilon-policy context.
    #[must_use]
    pub fn epsilon(&self) -> Option<&Decimal> {
        match &self.policy {
            Policy::Digits { .. } => None,
            Policy::Epsilon { epsilon } => Some(epsilon),
        }
    }

    /// Significant digits that internal computations run at.
    ///
    /// Under the epsilon policy this is derived from the threshold's
    /// fractional digit count, so that iteration differences below the
    /// threshold remain resolvable.
    #[must_use]
    pub fn working_digits(&self) -> u64 {
        match &self.policy {
            Policy::Digits { digits, .. } => *digits,
            Policy::Epsilon { epsilon } => {
                let (_, scale) = epsilon.as_inner().as_bigint_and_exponent();
                #[allow(clippy::cast_sign_loss)]
                let fractional = scale.max(1) as u64;
                fractional + GUARD_DIGITS
            }
        }
    }

    /// Applies this context's rounding policy to a value.
    ///
    /// The precision policy rounds to its digit count with its mode; the
    /// epsilon policy rounds at the derived working digit count.
    #[must_use]
    pub fn round(&self, value: &Decimal) -> Decimal {
        value.round_digits(self.working_digits(), self.rounding())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_digits_is_rejected() {
        let err = PrecisionContext::with_digits(0, Rounding::HalfUp).unwrap_err();
        assert!(matches!(err, NumericError::InvalidArgument(_)));
    }

    #[test]
    fn epsilon_bounds_are_open() {
        assert!(PrecisionContext::with_epsilon(Decimal::zero()).is_err());
        assert!(PrecisionContext::with_epsilon(Decimal::one()).is_err());
        assert!(PrecisionContext::with_epsilon(Decimal::from_i64(-1)).is_err());
        assert!(PrecisionContext::with_epsilon(Decimal::parse("0.5").unwrap()).is_ok());
        assert!(PrecisionContext::with_epsilon(Decimal::parse("1e-10").unwrap()).is_ok());
    }

    #[test]
    fn epsilon_derives_working_digits() {
        let ctx = PrecisionContext::with_epsilon(Decimal::parse("1e-10").unwrap()).unwrap();
        assert_eq!(ctx.working_digits(), 12);
        assert_eq!(ctx.epsilon(), Some(&Decimal::parse("1e-10").unwrap()));
    }

    #[test]
    fn round_applies_digit_count_and_mode() {
        let ctx = PrecisionContext::with_digits(3, Rounding::Truncate).unwrap();
        let value = Decimal::parse("2.7182818").unwrap();
        assert_eq!(ctx.round(&value), Decimal::parse("2.71").unwrap());

        let ctx = PrecisionContext::with_digits(3, Rounding::HalfUp).unwrap();
        assert_eq!(ctx.round(&value), Decimal::parse("2.72").unwrap());
    }
}
