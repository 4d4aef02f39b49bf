//! Newton-Raphson square roots.
//!
//! Both entry points approximate `√value` for `value ≥ 0` with the
//! iteration `x_{n+1} = (x_n + value / x_n) / 2`. The seed is chosen so
//! that `x₀ ≥ √value`, which makes the iteration monotonically decreasing
//! toward the root; termination is governed by the context's policy:
//!
//! - **epsilon**: stop when `|x_n − x_{n+1}|` drops below the threshold;
//! - **precision**: stop once the configured digit count is stable under
//!   the configured rounding mode across one iteration.

use crate::context::{PrecisionContext, Rounding};
use crate::decimal::{Decimal, GUARD_DIGITS};
use crate::error::{NumericError, Result};
use crate::integer::Integer;
use crate::traits::Ring;

/// Approximates the square root of a decimal value.
///
/// # Errors
///
/// `InvalidArgument` if `value` is negative.
pub fn sqrt_decimal(value: &Decimal, ctx: &PrecisionContext) -> Result<Decimal> {
    if value.is_negative() {
        return Err(NumericError::argument(format!(
            "square root of negative value {value}"
        )));
    }
    if value.is_zero() {
        return Ok(Decimal::zero());
    }
    if value.is_one() {
        return Ok(Decimal::one());
    }

    newton(value, decimal_seed(value), ctx)
}

/// Approximates the square root of an exact integer.
///
/// The result is always a decimal approximation: integer square roots are
/// generally irrational.
///
/// # Errors
///
/// `InvalidArgument` if `value` is negative.
pub fn sqrt_integer(value: &Integer, ctx: &PrecisionContext) -> Result<Decimal> {
    if value.is_negative() {
        return Err(NumericError::argument(format!(
            "square root of negative value {value}"
        )));
    }
    if Ring::is_zero(value) {
        return Ok(Decimal::zero());
    }
    if Ring::is_one(value) {
        return Ok(Decimal::one());
    }

    // 2^⌈bits/2⌉ ≥ √value, since value < 2^bits.
    let bits = value.bit_len();
    #[allow(clippy::cast_possible_truncation)]
    let seed = Integer::new(2).pow(bits.div_ceil(2) as u32).to_decimal();
    newton(&value.to_decimal(), seed, ctx)
}

/// A power of ten at least as large as the root: `value < 10^d` implies
/// `√value < 10^⌈d/2⌉`. Values below one use 1, which bounds their root.
fn decimal_seed(value: &Decimal) -> Decimal {
    let int_digits = value.integer_digit_count();
    if int_digits == 0 {
        return Decimal::one();
    }
    #[allow(clippy::cast_possible_wrap)]
    Decimal::pow10(int_digits.div_ceil(2) as i64)
}

fn newton(value: &Decimal, seed: Decimal, ctx: &PrecisionContext) -> Result<Decimal> {
    // Significant digits for intermediate divisions: the context's working
    // count plus guard digits, widened by the root's integer-digit estimate
    // so that the epsilon policy keeps its absolute resolution.
    let root_digits = value.integer_digit_count().div_ceil(2);
    let work = ctx.working_digits() + GUARD_DIGITS + root_digits;

    let mut before_last: Option<Decimal> = None;
    let mut x = seed;
    loop {
        let quotient = value.div_digits(&x, work, Rounding::HalfEven)?;
        let next = (&x + &quotient).half();

        let converged = match ctx.epsilon() {
            Some(eps) => (&x - &next).abs() < *eps,
            None => ctx.round(&x) == ctx.round(&next),
        };
        // At working precision the iterates can settle into a two-cycle one
        // ulp apart; treat revisiting the iterate before last as converged.
        if converged || before_last.as_ref() == Some(&next) {
            return Ok(match ctx.epsilon() {
                Some(_) => next,
                None => ctx.round(&next),
            });
        }

        before_last = Some(std::mem::replace(&mut x, next));
    }
}
