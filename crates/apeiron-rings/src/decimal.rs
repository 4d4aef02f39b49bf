//! Arbitrary precision decimals.
//!
//! This module wraps `bigdecimal::BigDecimal` with the operation set the
//! kernel needs. Addition, subtraction and multiplication are exact;
//! division is the single rounding site and always goes through a
//! [`PrecisionContext`]. Equality is numeric-value equality, so `1.0` and
//! `1.00` compare equal.

use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, ParseBigDecimalError};
use std::fmt;
use std::num::NonZeroU64;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::context::{PrecisionContext, Rounding};
use crate::error::{NumericError, Result};
use crate::traits::{CommutativeRing, Magnitude, Ring};

/// Extra significant digits carried through intermediate divisions so that
/// a single final rounding cannot be perturbed by truncation noise.
pub(crate) const GUARD_DIGITS: u64 = 2;

/// An arbitrary precision decimal number.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Decimal(BigDecimal);

impl Decimal {
    /// Creates a decimal from an i64.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }

    /// Parses a decimal from its text form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid decimal.
    pub fn parse(s: &str) -> std::result::Result<Self, ParseBigDecimalError> {
        BigDecimal::from_str(s).map(Self)
    }

    /// Returns `10^exp` exactly.
    #[must_use]
    pub fn pow10(exp: i64) -> Self {
        Self(BigDecimal::new(BigInt::from(1), -exp))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.0.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Returns true if this decimal is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// Halves the value exactly (multiplication by 0.5 never rounds).
    #[must_use]
    pub fn half(&self) -> Self {
        Self(&self.0 * BigDecimal::new(BigInt::from(5), 1))
    }

    /// Returns the number of significant digits.
    #[must_use]
    pub fn digits(&self) -> u64 {
        self.0.digits()
    }

    /// Rounds toward negative infinity to an integer value.
    #[must_use]
    pub fn floor(&self) -> Self {
        Self(self.0.with_scale_round(0, bigdecimal::RoundingMode::Floor))
    }

    /// Applies the context's rounding policy to this value.
    #[must_use]
    pub fn rounded(&self, ctx: &PrecisionContext) -> Self {
        ctx.round(self)
    }

    /// Divides by `divisor`, rounding the quotient per the context.
    ///
    /// This is the only arithmetic operation on decimals that rounds.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `divisor` is zero.
    pub fn divide(&self, divisor: &Decimal, ctx: &PrecisionContext) -> Result<Decimal> {
        self.div_digits(divisor, ctx.working_digits(), ctx.rounding())
    }

    /// Division to an explicit significant-digit count and rounding mode.
    ///
    /// The dividend is shifted far enough that the truncated integer
    /// quotient carries at least `digits + GUARD_DIGITS` significant
    /// digits; a single rounding with the requested mode then produces the
    /// result. Ties are decided exactly: a quotient that ties at the
    /// rounding boundary necessarily terminates within the shifted window.
    pub(crate) fn div_digits(
        &self,
        divisor: &Decimal,
        digits: u64,
        rounding: Rounding,
    ) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(NumericError::argument("division by zero"));
        }
        if self.is_zero() {
            return Ok(Self(BigDecimal::from(0)));
        }

        let (n1, e1) = self.0.as_bigint_and_exponent();
        let (n2, e2) = divisor.0.as_bigint_and_exponent();

        let d1 = decimal_digit_count(&n1);
        let d2 = decimal_digit_count(&n2);
        let digits = digits.max(1);
        #[allow(clippy::cast_possible_wrap)]
        let shift = ((digits + GUARD_DIGITS) as i64 + d2 - d1).max(0);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = n1 * BigInt::from(10).pow(shift as u32);
        let quotient = scaled / n2;
        let raw = BigDecimal::new(quotient, e1 - e2 + shift);

        let precision = NonZeroU64::new(digits).expect("digit count is at least one");
        Ok(Self(raw.with_precision_round(precision, rounding.mode())))
    }

    /// Digits left of the decimal point (zero for values below one).
    pub(crate) fn integer_digit_count(&self) -> u64 {
        let (n, scale) = self.0.as_bigint_and_exponent();
        let int_digits = decimal_digit_count(&n) - scale;
        #[allow(clippy::cast_sign_loss)]
        {
            int_digits.max(0) as u64
        }
    }

    /// Rounds to a significant-digit count with an explicit mode.
    pub(crate) fn round_digits(&self, digits: u64, rounding: Rounding) -> Decimal {
        let Some(precision) = NonZeroU64::new(digits) else {
            return self.clone();
        };
        Self(self.0.with_precision_round(precision, rounding.mode()))
    }

    /// Returns the inner `bigdecimal::BigDecimal`.
    #[must_use]
    pub fn into_inner(self) -> BigDecimal {
        self.0
    }

    /// Returns a reference to the inner `bigdecimal::BigDecimal`.
    #[must_use]
    pub fn as_inner(&self) -> &BigDecimal {
        &self.0
    }
}

/// Number of decimal digits in the magnitude of `n`.
fn decimal_digit_count(n: &BigInt) -> i64 {
    let s = n.to_string();
    #[allow(clippy::cast_possible_wrap)]
    let len = s.trim_start_matches('-').len() as i64;
    len
}

impl Ring for Decimal {
    fn zero() -> Self {
        Self(BigDecimal::from(0))
    }

    fn one() -> Self {
        Self(BigDecimal::from(1))
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(&self.0)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(&self.0.normalized())
    }
}

impl CommutativeRing for Decimal {}

impl Magnitude for Decimal {
    fn magnitude_squared(&self) -> Decimal {
        self.clone() * self.clone()
    }

    fn magnitude(&self, _ctx: &PrecisionContext) -> Result<Decimal> {
        Ok(self.abs())
    }
}

impl num_traits::Zero for Decimal {
    fn zero() -> Self {
        Self(BigDecimal::from(0))
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(&self.0)
    }
}

impl num_traits::One for Decimal {
    fn one() -> Self {
        Self(BigDecimal::from(1))
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(&self.0.normalized())
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Decimal {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Arithmetic operations (exact, never rounding)
impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 + &rhs.0)
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 - &rhs.0)
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 * &rhs.0)
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Decimal(-&self.0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<BigDecimal> for Decimal {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}
