//! Polar form of complex numbers.

use std::fmt;

use apeiron_rings::{Decimal, NumericError, PrecisionContext, Result, Ring, Rounding};

use crate::decimal_complex::DecimalComplex;
use crate::transcendental::TranscendentalProvider;

/// A complex value as magnitude and angle:
/// `radial · (cos angular + i · sin angular)` with `radial ≥ 0` and
/// `angular ∈ (−π, π]`.
///
/// Conversion to and from rectangular coordinates is approximate in both
/// directions whenever the radius or angle is irrational.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PolarForm {
    radial: Decimal,
    angular: Decimal,
}

impl PolarForm {
    /// Creates a polar form.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `radial` is negative.
    pub fn new(radial: Decimal, angular: Decimal) -> Result<Self> {
        if radial.is_negative() {
            return Err(NumericError::argument(format!(
                "radial component must be non-negative, got {radial}"
            )));
        }
        Ok(Self { radial, angular })
    }

    /// The magnitude component.
    #[must_use]
    pub fn radial(&self) -> &Decimal {
        &self.radial
    }

    /// The angle component.
    #[must_use]
    pub fn angular(&self) -> &Decimal {
        &self.angular
    }

    /// Converts back to rectangular coordinates:
    /// `(radial·cos angular, radial·sin angular)`.
    ///
    /// The trigonometric values are generally irrational, so the round
    /// trip through [`DecimalComplex::polar_form`] recovers the original
    /// value only within the context's tolerance.
    ///
    /// # Errors
    ///
    /// Propagates transcendental evaluation failures.
    pub fn to_complex<P: TranscendentalProvider>(
        &self,
        ctx: &PrecisionContext,
        provider: &P,
    ) -> Result<DecimalComplex> {
        let cos = provider.cos(&self.angular, ctx)?;
        let sin = provider.sin(&self.angular, ctx)?;
        Ok(DecimalComplex::new(
            ctx.round(&(&self.radial * &cos)),
            ctx.round(&(&self.radial * &sin)),
        ))
    }
}

impl fmt::Display for PolarForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * (cos {} + i sin {})", self.radial, self.angular, self.angular)
    }
}

/// Angle of the point `(real, imaginary)` in `(−π, π]`.
///
/// Branch handling:
/// - `real > 0`: `atan(imaginary / real)`
/// - `real < 0`: the same arctangent shifted by `+π` (upper half plane,
///   including the negative real axis) or `−π` (lower half plane)
/// - `real = 0`: `±π/2` by the sign of `imaginary`
///
/// # Errors
///
/// `InvalidState` when both coordinates are zero.
pub(crate) fn argument_of<P: TranscendentalProvider>(
    real: &Decimal,
    imaginary: &Decimal,
    ctx: &PrecisionContext,
    provider: &P,
) -> Result<Decimal> {
    if real.is_zero() && imaginary.is_zero() {
        return Err(NumericError::state("argument of zero is undefined"));
    }

    if real.is_zero() {
        let half_pi = provider.pi(ctx)?.half();
        return Ok(if imaginary.is_negative() {
            -half_pi
        } else {
            half_pi
        });
    }

    // Widened context: the ratio feeds the arctangent and must not lose
    // digits before the final rounding.
    let ratio_ctx = PrecisionContext::with_digits(ctx.working_digits() + 4, Rounding::HalfEven)?;
    let ratio = imaginary.divide(real, &ratio_ctx)?;
    let theta = provider.atan(&ratio, ctx)?;

    if real.signum() > 0 {
        return Ok(theta);
    }
    let pi = provider.pi(ctx)?;
    let shifted = if imaginary.is_negative() {
        theta - pi
    } else {
        theta + pi
    };
    Ok(ctx.round(&shifted))
}
