//! Complex numbers with arbitrary-precision decimal coefficients.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use apeiron_linalg::Matrix;
use apeiron_rings::{
    sqrt_decimal, CommutativeRing, Decimal, Magnitude, NumericError, PrecisionContext, Result,
    Ring,
};

use crate::polar::{argument_of, PolarForm};
use crate::transcendental::TranscendentalProvider;

/// A complex number `real + imaginary·i` over decimals.
///
/// Addition, subtraction, multiplication, negation, and conjugation are
/// exact; rounding enters only at `divide`, `invert`, `abs`, `argument`,
/// and polar conversion. Equality is numeric-value equality of both
/// coefficients, so representation differences like trailing zeros are
/// invisible.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DecimalComplex {
    real: Decimal,
    imaginary: Decimal,
}

impl DecimalComplex {
    /// Creates a complex number from its coefficients.
    #[must_use]
    pub fn new(real: Decimal, imaginary: Decimal) -> Self {
        Self { real, imaginary }
    }

    /// Creates a complex number from machine integers.
    #[must_use]
    pub fn from_i64(real: i64, imaginary: i64) -> Self {
        Self::new(Decimal::from_i64(real), Decimal::from_i64(imaginary))
    }

    /// The imaginary unit `i`.
    #[must_use]
    pub fn i() -> Self {
        Self::from_i64(0, 1)
    }

    /// The real coefficient.
    #[must_use]
    pub fn real(&self) -> &Decimal {
        &self.real
    }

    /// The imaginary coefficient.
    #[must_use]
    pub fn imaginary(&self) -> &Decimal {
        &self.imaginary
    }

    /// The complex conjugate `real − imaginary·i`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.real.clone(), -self.imaginary.clone())
    }

    /// `real² + imaginary²`, exact.
    #[must_use]
    pub fn abs_squared(&self) -> Decimal {
        &self.real * &self.real + &self.imaginary * &self.imaginary
    }

    /// Raises to a non-negative power by repeated multiplication.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `exponent` is negative.
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        let exponent = u32::try_from(exponent)
            .map_err(|_| NumericError::argument(format!("exponent must be non-negative, got {exponent}")))?;
        Ok(Ring::pow(self, exponent))
    }

    /// Divides, rounding both coefficients at the final division step.
    ///
    /// Computes `self · conjugate(divisor) / |divisor|²`; the products
    /// are exact and only the closing division rounds per the context.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `divisor` is zero.
    pub fn divide(&self, divisor: &Self, ctx: &PrecisionContext) -> Result<Self> {
        if Ring::is_zero(divisor) {
            return Err(NumericError::argument("division by zero complex number"));
        }
        let numerator = self.clone() * divisor.conjugate();
        let denominator = divisor.abs_squared();
        Ok(Self::new(
            numerator.real.divide(&denominator, ctx)?,
            numerator.imaginary.divide(&denominator, ctx)?,
        ))
    }

    /// The multiplicative inverse `1 / self`.
    ///
    /// # Errors
    ///
    /// `InvalidState` if `self` is zero.
    pub fn invert(&self, ctx: &PrecisionContext) -> Result<Self> {
        if Ring::is_zero(self) {
            return Err(NumericError::state("zero has no inverse"));
        }
        Self::one().divide(self, ctx)
    }

    /// The modulus `√(real² + imaginary²)`.
    ///
    /// # Errors
    ///
    /// Propagates square-root failures.
    pub fn abs(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        sqrt_decimal(&self.abs_squared(), ctx)
    }

    /// The angle θ with `self = r·(cos θ + i·sin θ)`, in `(−π, π]`.
    ///
    /// # Errors
    ///
    /// `InvalidState` if `self` is zero (the angle is undefined).
    pub fn argument<P: TranscendentalProvider>(
        &self,
        ctx: &PrecisionContext,
        provider: &P,
    ) -> Result<Decimal> {
        argument_of(&self.real, &self.imaginary, ctx, provider)
    }

    /// The polar form `(radial, angular)` of this value.
    ///
    /// # Errors
    ///
    /// `InvalidState` if `self` is zero.
    pub fn polar_form<P: TranscendentalProvider>(
        &self,
        ctx: &PrecisionContext,
        provider: &P,
    ) -> Result<PolarForm> {
        let angular = self.argument(ctx, provider)?;
        PolarForm::new(self.abs(ctx)?, angular)
    }

    /// Embeds `a + bi` as the 2×2 matrix `[[a, −b], [b, a]]`.
    #[must_use]
    pub fn matrix(&self) -> Matrix<Decimal> {
        Matrix::from_rows(vec![
            vec![self.real.clone(), -self.imaginary.clone()],
            vec![self.imaginary.clone(), self.real.clone()],
        ])
        .expect("2x2 embedding rows are well-formed")
    }
}

impl Ring for DecimalComplex {
    fn zero() -> Self {
        Self::from_i64(0, 0)
    }

    fn one() -> Self {
        Self::from_i64(1, 0)
    }

    fn is_zero(&self) -> bool {
        Ring::is_zero(&self.real) && Ring::is_zero(&self.imaginary)
    }

    fn is_one(&self) -> bool {
        Ring::is_one(&self.real) && Ring::is_zero(&self.imaginary)
    }
}

impl CommutativeRing for DecimalComplex {}

impl Magnitude for DecimalComplex {
    fn magnitude_squared(&self) -> Decimal {
        self.abs_squared()
    }

    fn magnitude(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        self.abs(ctx)
    }
}

impl Add for DecimalComplex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl Sub for DecimalComplex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl Mul for DecimalComplex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        // (a + bi)(c + di) = (ac − bd) + (ad + bc)i
        let real = &self.real * &rhs.real - &self.imaginary * &rhs.imaginary;
        let imaginary = &self.real * &rhs.imaginary + &self.imaginary * &rhs.real;
        Self::new(real, imaginary)
    }
}

impl Neg for DecimalComplex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imaginary)
    }
}

impl fmt::Debug for DecimalComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalComplex({self})")
    }
}

impl fmt::Display for DecimalComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imaginary.is_negative() {
            write!(f, "{} - {}i", self.real, self.imaginary.abs())
        } else {
            write!(f, "{} + {}i", self.real, self.imaginary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcendental::SeriesProvider;
    use apeiron_rings::Rounding;

    fn ctx(digits: u64) -> PrecisionContext {
        PrecisionContext::with_digits(digits, Rounding::HalfEven).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    #[test]
    fn equality_ignores_trailing_zeros() {
        let a = DecimalComplex::new(dec("1.50"), dec("-2.0"));
        let b = DecimalComplex::new(dec("1.5"), dec("-2"));
        assert_eq!(a, b);
    }

    #[test]
    fn multiplication_is_exact() {
        let a = DecimalComplex::new(dec("0.1"), dec("0.2"));
        let b = DecimalComplex::new(dec("0.3"), dec("-0.4"));
        // (0.1 + 0.2i)(0.3 − 0.4i) = 0.11 + 0.02i
        assert_eq!(
            a * b,
            DecimalComplex::new(dec("0.11"), dec("0.02"))
        );
    }

    #[test]
    fn division_rounds_at_the_last_step() {
        let c = ctx(8);
        let a = DecimalComplex::from_i64(1, 0);
        let b = DecimalComplex::from_i64(3, 0);
        let q = a.divide(&b, &c).unwrap();
        assert_eq!(q, DecimalComplex::new(dec("0.33333333"), dec("0")));

        assert!(matches!(
            a.divide(&DecimalComplex::zero(), &c),
            Err(NumericError::InvalidArgument(_))
        ));
    }

    #[test]
    fn divide_then_multiply_recovers() {
        let c = ctx(25);
        let a = DecimalComplex::new(dec("2.5"), dec("-1.25"));
        let b = DecimalComplex::new(dec("0.75"), dec("3"));
        let q = a.divide(&b, &c).unwrap();
        let back = q * b;
        let err_re = (&back.real - &a.real).abs();
        let err_im = (&back.imaginary - &a.imaginary).abs();
        assert!(err_re < Decimal::pow10(-20), "{back}");
        assert!(err_im < Decimal::pow10(-20), "{back}");
    }

    #[test]
    fn invert_of_zero_is_invalid_state() {
        assert!(matches!(
            DecimalComplex::zero().invert(&ctx(10)),
            Err(NumericError::InvalidState(_))
        ));
        // i⁻¹ = −i
        let inv = DecimalComplex::i().invert(&ctx(10)).unwrap();
        assert_eq!(inv, -DecimalComplex::i());
    }

    #[test]
    fn abs_of_decimal_three_four() {
        let z = DecimalComplex::new(dec("0.3"), dec("0.4"));
        assert_eq!(z.abs(&ctx(10)).unwrap(), dec("0.5"));
    }

    #[test]
    fn argument_covers_the_axes() {
        let c = ctx(15);
        let provider = SeriesProvider;
        let half_pi = provider.pi(&c).unwrap().half();

        let up = DecimalComplex::from_i64(0, 3);
        assert_eq!(up.argument(&c, &provider).unwrap(), half_pi);

        let down = DecimalComplex::from_i64(0, -3);
        assert_eq!(down.argument(&c, &provider).unwrap(), -half_pi);

        let left = DecimalComplex::from_i64(-2, 0);
        let pi = provider.pi(&c).unwrap();
        let theta = left.argument(&c, &provider).unwrap();
        assert!((&theta - &pi).abs() < Decimal::pow10(-12), "{theta}");
    }

    #[test]
    fn branch_cut_stays_in_range() {
        let c = ctx(15);
        let provider = SeriesProvider;
        let pi = provider.pi(&c).unwrap();

        // third quadrant: θ = atan(im/re) − π ∈ (−π, −π/2)
        let z = DecimalComplex::from_i64(-1, -1);
        let theta = z.argument(&c, &provider).unwrap();
        assert!(theta > -pi.clone() && theta < -pi.half());

        // second quadrant: θ ∈ (π/2, π)
        let z = DecimalComplex::from_i64(-1, 1);
        let theta = z.argument(&c, &provider).unwrap();
        assert!(theta > pi.half() && theta < pi);
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        let z = DecimalComplex::new(dec("0.5"), dec("1.5"));
        let cubed = z.pow(3).unwrap();
        assert_eq!(cubed, z.clone() * z.clone() * z.clone());
        assert!(matches!(z.pow(-2), Err(NumericError::InvalidArgument(_))));
    }

    #[test]
    fn matrix_embedding_is_multiplicative() {
        let a = DecimalComplex::new(dec("1.5"), dec("-0.5"));
        let b = DecimalComplex::new(dec("2"), dec("0.25"));
        let product = a.clone() * b.clone();
        assert_eq!(a.matrix().multiply(&b.matrix()).unwrap(), product.matrix());
    }
}
