//! Complex numbers with exact integer coefficients.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use apeiron_linalg::Matrix;
use apeiron_rings::{
    sqrt_integer, CommutativeRing, Decimal, Integer, Magnitude, NumericError, PrecisionContext,
    Result, Ring,
};

use crate::polar::{argument_of, PolarForm};
use crate::transcendental::TranscendentalProvider;

/// A Gaussian integer `real + imaginary·i`.
///
/// Arithmetic is closed in the ring and rounding-free; only `abs` and
/// `argument` leave it, because their values are generally irrational.
/// Equality is exact structural equality of both coefficients.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct GaussianInt {
    real: Integer,
    imaginary: Integer,
}

impl GaussianInt {
    /// Creates a complex number from its coefficients.
    #[must_use]
    pub fn new(real: Integer, imaginary: Integer) -> Self {
        Self { real, imaginary }
    }

    /// Creates a complex number from machine integers.
    #[must_use]
    pub fn from_i64(real: i64, imaginary: i64) -> Self {
        Self::new(Integer::new(real), Integer::new(imaginary))
    }

    /// The imaginary unit `i`.
    #[must_use]
    pub fn i() -> Self {
        Self::from_i64(0, 1)
    }

    /// The real coefficient.
    #[must_use]
    pub fn real(&self) -> &Integer {
        &self.real
    }

    /// The imaginary coefficient.
    #[must_use]
    pub fn imaginary(&self) -> &Integer {
        &self.imaginary
    }

    /// The complex conjugate `real − imaginary·i`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.real.clone(), -self.imaginary.clone())
    }

    /// `real² + imaginary²`, exact.
    #[must_use]
    pub fn abs_squared(&self) -> Integer {
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

    /// Divides within the ring.
    ///
    /// Computes `self · conjugate(divisor)` and divides both coefficients
    /// by `|divisor|²` with truncating integer quotients, which keeps the
    /// result a Gaussian integer. The quotient is exact precisely when the
    /// divisor divides evenly.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `divisor` is zero.
    pub fn divide(&self, divisor: &Self) -> Result<Self> {
        if Ring::is_zero(divisor) {
            return Err(NumericError::argument("division by zero complex number"));
        }
        let numerator = self.clone() * divisor.conjugate();
        let denominator = divisor.abs_squared();
        Ok(Self::new(
            &numerator.real / &denominator,
            &numerator.imaginary / &denominator,
        ))
    }

    /// The multiplicative inverse `1 / self` within the ring.
    ///
    /// Only the units `±1` and `±i` have a true inverse here; everything
    /// else truncates.
    ///
    /// # Errors
    ///
    /// `InvalidState` if `self` is zero.
    pub fn invert(&self) -> Result<Self> {
        if Ring::is_zero(self) {
            return Err(NumericError::state("zero has no inverse"));
        }
        Self::one().divide(self)
    }

    /// The modulus `√(real² + imaginary²)`.
    ///
    /// Always a decimal approximation, even on this exact kernel: the
    /// value is generally irrational.
    ///
    /// # Errors
    ///
    /// Propagates square-root failures.
    pub fn abs(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        sqrt_integer(&self.abs_squared(), ctx)
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
        argument_of(
            &self.real.to_decimal(),
            &self.imaginary.to_decimal(),
            ctx,
            provider,
        )
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
    ///
    /// Complex multiplication corresponds to matrix multiplication under
    /// this embedding.
    #[must_use]
    pub fn matrix(&self) -> Matrix<Integer> {
        Matrix::from_rows(vec![
            vec![self.real.clone(), -self.imaginary.clone()],
            vec![self.imaginary.clone(), self.real.clone()],
        ])
        .expect("2x2 embedding rows are well-formed")
    }
}

impl Ring for GaussianInt {
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

impl CommutativeRing for GaussianInt {}

impl Magnitude for GaussianInt {
    fn magnitude_squared(&self) -> Decimal {
        self.abs_squared().to_decimal()
    }

    fn magnitude(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        self.abs(ctx)
    }
}

impl Add for GaussianInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl Sub for GaussianInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl Mul for GaussianInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        // (a + bi)(c + di) = (ac − bd) + (ad + bc)i
        let real = &self.real * &rhs.real - &self.imaginary * &rhs.imaginary;
        let imaginary = &self.real * &rhs.imaginary + &self.imaginary * &rhs.real;
        Self::new(real, imaginary)
    }
}

impl Neg for GaussianInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imaginary)
    }
}

impl fmt::Debug for GaussianInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GaussianInt({self})")
    }
}

impl fmt::Display for GaussianInt {
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

    #[test]
    fn arithmetic_identities() {
        let z = GaussianInt::from_i64(3, -2);
        assert_eq!(z.clone() + GaussianInt::zero(), z);
        assert_eq!(z.clone() * GaussianInt::one(), z);
        assert!(Ring::is_zero(&(z.clone() + (-z))));
    }

    #[test]
    fn i_squared_is_minus_one() {
        let i = GaussianInt::i();
        assert_eq!(i.clone() * i, -GaussianInt::one());
    }

    #[test]
    fn conjugation_is_involutive() {
        let z = GaussianInt::from_i64(5, 7);
        assert_eq!(z.conjugate().conjugate(), z);
        assert_eq!(
            z.clone() * z.conjugate(),
            GaussianInt::new(z.abs_squared(), Integer::new(0))
        );
    }

    #[test]
    fn pow_rejects_negative_exponents() {
        let z = GaussianInt::from_i64(1, 1);
        assert!(matches!(z.pow(-1), Err(NumericError::InvalidArgument(_))));
        assert_eq!(z.pow(0).unwrap(), GaussianInt::one());
        // (1+i)² = 2i
        assert_eq!(z.pow(2).unwrap(), GaussianInt::from_i64(0, 2));
    }

    #[test]
    fn exact_division_and_truncation() {
        // (3+4i)(2-i) = 10+5i, so (10+5i)/(2-i) is exact
        let product = GaussianInt::from_i64(10, 5);
        let divisor = GaussianInt::from_i64(2, -1);
        assert_eq!(product.divide(&divisor).unwrap(), GaussianInt::from_i64(3, 4));

        // 5/2 truncates componentwise
        let q = GaussianInt::from_i64(5, 0)
            .divide(&GaussianInt::from_i64(2, 0))
            .unwrap();
        assert_eq!(q, GaussianInt::from_i64(2, 0));

        assert!(matches!(
            product.divide(&GaussianInt::zero()),
            Err(NumericError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unit_inverses_are_exact() {
        assert_eq!(GaussianInt::i().invert().unwrap(), -GaussianInt::i());
        assert_eq!(
            (-GaussianInt::one()).invert().unwrap(),
            -GaussianInt::one()
        );
        assert!(matches!(
            GaussianInt::zero().invert(),
            Err(NumericError::InvalidState(_))
        ));
    }

    #[test]
    fn three_four_five_modulus() {
        let z = GaussianInt::from_i64(3, 4);
        assert_eq!(z.abs(&ctx(10)).unwrap(), Decimal::from_i64(5));
    }

    #[test]
    fn argument_of_three_plus_four_i() {
        let z = GaussianInt::from_i64(3, 4);
        let theta = z.argument(&ctx(16), &SeriesProvider).unwrap();
        // atan(4/3) = 0.92729521800161...
        let reference = Decimal::parse("0.9272952180016122").unwrap();
        assert!((&theta - &reference).abs() < Decimal::pow10(-13), "{theta}");
    }

    #[test]
    fn argument_of_zero_is_invalid_state() {
        assert!(matches!(
            GaussianInt::zero().argument(&ctx(10), &SeriesProvider),
            Err(NumericError::InvalidState(_))
        ));
        assert!(matches!(
            GaussianInt::zero().polar_form(&ctx(10), &SeriesProvider),
            Err(NumericError::InvalidState(_))
        ));
    }

    #[test]
    fn matrix_embedding_is_multiplicative() {
        let a = GaussianInt::from_i64(2, 3);
        let b = GaussianInt::from_i64(-1, 4);
        let product = a.clone() * b.clone();
        assert_eq!(
            a.matrix().multiply(&b.matrix()).unwrap(),
            product.matrix()
        );
        // determinant of the embedding is the squared modulus
        assert_eq!(a.matrix().determinant().unwrap(), a.abs_squared());
    }
}
