//! High-precision transcendental functions.
//!
//! The complex kernels never evaluate `atan`, `sin`, `cos`, or π
//! themselves; they go through the [`TranscendentalProvider`] capability
//! so that callers can substitute their own evaluation strategy. The
//! default [`SeriesProvider`] implements:
//!
//! - `atan` via the Maclaurin series after halving reduction
//!   `atan(x) = 2·atan(x / (1 + √(1 + x²)))`, with the reflection
//!   `atan(x) = π/2 − atan(1/x)` for `|x| > 1`
//! - π via Machin's formula `π = 16·atan(1/5) − 4·atan(1/239)`
//! - `sin`/`cos` via Maclaurin series after reduction modulo 2π
//!
//! Every internal step runs at the context's working digit count plus
//! guard digits; the context rounds the final value exactly once.

use apeiron_rings::{sqrt_decimal, Decimal, PrecisionContext, Result, Ring, Rounding};

/// Guard digits carried by series evaluation beyond the caller's request.
const SERIES_GUARD: u64 = 5;

/// Arbitrary-precision transcendental evaluation, injected into the
/// complex kernels.
pub trait TranscendentalProvider {
    /// Approximates `√x`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for negative input.
    fn sqrt(&self, x: &Decimal, ctx: &PrecisionContext) -> Result<Decimal>;

    /// Approximates `atan(x)`.
    ///
    /// # Errors
    ///
    /// Propagates division failures from the underlying arithmetic.
    fn atan(&self, x: &Decimal, ctx: &PrecisionContext) -> Result<Decimal>;

    /// Approximates `sin(x)`.
    ///
    /// # Errors
    ///
    /// Propagates division failures from the underlying arithmetic.
    fn sin(&self, x: &Decimal, ctx: &PrecisionContext) -> Result<Decimal>;

    /// Approximates `cos(x)`.
    ///
    /// # Errors
    ///
    /// Propagates division failures from the underlying arithmetic.
    fn cos(&self, x: &Decimal, ctx: &PrecisionContext) -> Result<Decimal>;

    /// Approximates π.
    ///
    /// # Errors
    ///
    /// Propagates division failures from the underlying arithmetic.
    fn pi(&self, ctx: &PrecisionContext) -> Result<Decimal>;
}

/// Maclaurin-series provider; the default evaluation strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeriesProvider;

impl TranscendentalProvider for SeriesProvider {
    fn sqrt(&self, x: &Decimal, ctx: &PrecisionContext) -> Result<Decimal> {
        sqrt_decimal(x, ctx)
    }

    fn atan(&self, x: &Decimal, ctx: &PrecisionContext) -> Result<Decimal> {
        let value = atan_at(x, ctx.working_digits() + SERIES_GUARD)?;
        Ok(ctx.round(&value))
    }

    fn sin(&self, x: &Decimal, ctx: &PrecisionContext) -> Result<Decimal> {
        let work = ctx.working_digits() + SERIES_GUARD;
        let reduced = reduce_mod_two_pi(x, work)?;
        let value = sin_series(&reduced, work)?;
        Ok(ctx.round(&value))
    }

    fn cos(&self, x: &Decimal, ctx: &PrecisionContext) -> Result<Decimal> {
        let work = ctx.working_digits() + SERIES_GUARD;
        let reduced = reduce_mod_two_pi(x, work)?;
        let value = cos_series(&reduced, work)?;
        Ok(ctx.round(&value))
    }

    fn pi(&self, ctx: &PrecisionContext) -> Result<Decimal> {
        let value = pi_at(ctx.working_digits() + SERIES_GUARD)?;
        Ok(ctx.round(&value))
    }
}

/// A half-even context for internal arithmetic at `digits` precision.
fn work_ctx(digits: u64) -> PrecisionContext {
    PrecisionContext::with_digits(digits.max(1), Rounding::HalfEven)
        .expect("working digit count is positive")
}

/// Smallest magnitude the series bothers distinguishing at `digits`.
fn tolerance(digits: u64) -> Decimal {
    #[allow(clippy::cast_possible_wrap)]
    Decimal::pow10(-(digits as i64))
}

fn atan_at(x: &Decimal, work: u64) -> Result<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    if x.is_negative() {
        return Ok(-atan_at(&x.abs(), work)?);
    }

    let wctx = work_ctx(work);
    if *x > Decimal::one() {
        // atan(x) = π/2 − atan(1/x)
        let inverse = Decimal::one().divide(x, &wctx)?;
        return Ok(pi_at(work)?.half() - atan_at(&inverse, work)?);
    }

    // Halve the argument until the series converges quickly:
    // atan(x) = 2·atan(x / (1 + √(1 + x²)))
    let half = Decimal::parse("0.5").expect("constant parses");
    let mut x = x.clone();
    let mut doublings = 0u32;
    while x > half {
        let squared = (&x * &x).rounded(&wctx);
        let root = sqrt_decimal(&(Decimal::one() + squared), &wctx)?;
        x = x.divide(&(Decimal::one() + root), &wctx)?;
        doublings += 1;
    }

    let tol = tolerance(work);
    let squared = (&x * &x).rounded(&wctx);
    let mut sum = x.clone();
    let mut power = x;
    let mut k = 1i64;
    loop {
        power = (&power * &squared).rounded(&wctx);
        let term = power.divide(&Decimal::from_i64(2 * k + 1), &wctx)?;
        if term < tol {
            break;
        }
        sum = if k % 2 == 1 { sum - term } else { sum + term };
        sum = sum.rounded(&wctx);
        k += 1;
    }

    Ok(sum * Decimal::from_i64(1i64 << doublings))
}

/// `atan(1/n)` for a positive machine integer, used by Machin's formula.
fn atan_inverse_int(n: i64, work: u64) -> Result<Decimal> {
    let wctx = work_ctx(work);
    let tol = tolerance(work);
    let n_squared = Decimal::from_i64(n * n);

    let mut power = Decimal::one().divide(&Decimal::from_i64(n), &wctx)?;
    let mut sum = power.clone();
    let mut k = 1i64;
    loop {
        power = power.divide(&n_squared, &wctx)?;
        let term = power.divide(&Decimal::from_i64(2 * k + 1), &wctx)?;
        if term < tol {
            break;
        }
        sum = if k % 2 == 1 { sum - term } else { sum + term };
        k += 1;
    }
    Ok(sum)
}

/// π at `work` significant digits, by Machin's formula.
fn pi_at(work: u64) -> Result<Decimal> {
    let wctx = work_ctx(work + 2);
    let a = atan_inverse_int(5, work + 2)?;
    let b = atan_inverse_int(239, work + 2)?;
    Ok((Decimal::from_i64(16) * a - Decimal::from_i64(4) * b).rounded(&wctx))
}

/// Reduces an angle into `[0, 2π)` before series evaluation.
fn reduce_mod_two_pi(x: &Decimal, work: u64) -> Result<Decimal> {
    // Digits of the angle left of the point widen the working precision,
    // since the subtraction below cancels them.
    let (_, scale) = x.as_inner().as_bigint_and_exponent();
    #[allow(clippy::cast_possible_wrap)]
    let int_digits = (x.digits() as i64 - scale).max(0);
    #[allow(clippy::cast_sign_loss)]
    let wide = work + int_digits as u64;

    let wctx = work_ctx(wide);
    let two_pi = pi_at(wide)? * Decimal::from_i64(2);
    if x.abs() < two_pi {
        return Ok(x.clone());
    }
    let turns = x.divide(&two_pi, &wctx)?.floor();
    Ok((x - &(turns * two_pi)).rounded(&wctx))
}

fn sin_series(x: &Decimal, work: u64) -> Result<Decimal> {
    let wctx = work_ctx(work);
    let tol = tolerance(work);
    let squared = (x * x).rounded(&wctx);

    let mut term = x.clone();
    let mut sum = x.clone();
    let mut j = 0i64;
    loop {
        // s_{j+1} = −s_j · x² / ((2j+2)(2j+3))
        let divisor = Decimal::from_i64((2 * j + 2) * (2 * j + 3));
        term = (-(&term * &squared)).divide(&divisor, &wctx)?;
        if term.abs() < tol {
            break;
        }
        sum = (sum + term.clone()).rounded(&wctx);
        j += 1;
    }
    Ok(sum)
}

fn cos_series(x: &Decimal, work: u64) -> Result<Decimal> {
    let wctx = work_ctx(work);
    let tol = tolerance(work);
    let squared = (x * x).rounded(&wctx);

    let mut term = Decimal::one();
    let mut sum = Decimal::one();
    let mut j = 0i64;
    loop {
        // c_{j+1} = −c_j · x² / ((2j+1)(2j+2))
        let divisor = Decimal::from_i64((2 * j + 1) * (2 * j + 2));
        term = (-(&term * &squared)).divide(&divisor, &wctx)?;
        if term.abs() < tol {
            break;
        }
        sum = (sum + term.clone()).rounded(&wctx);
        j += 1;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(digits: u64) -> PrecisionContext {
        PrecisionContext::with_digits(digits, Rounding::HalfEven).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    fn close(a: &Decimal, b: &Decimal, tol: &str) -> bool {
        (a - b).abs() < dec(tol)
    }

    #[test]
    fn pi_matches_reference_digits() {
        let p = SeriesProvider.pi(&ctx(25)).unwrap();
        assert!(close(&p, &dec("3.141592653589793238462643"), "1e-23"), "{p}");
    }

    #[test]
    fn atan_of_one_is_quarter_pi() {
        let provider = SeriesProvider;
        let c = ctx(20);
        let quarter_pi = provider.pi(&c).unwrap() * dec("0.25");
        let a = provider.atan(&Decimal::one(), &c).unwrap();
        assert!(close(&a, &quarter_pi, "1e-18"), "{a}");
    }

    #[test]
    fn atan_is_odd() {
        let provider = SeriesProvider;
        let c = ctx(15);
        let x = dec("0.7342");
        let plus = provider.atan(&x, &c).unwrap();
        let minus = provider.atan(&(-x), &c).unwrap();
        assert_eq!(plus, -minus);
    }

    #[test]
    fn atan_four_thirds() {
        // atan(4/3) = 0.92729521800161...
        let provider = SeriesProvider;
        let c = ctx(16);
        let ratio = dec("4").divide(&dec("3"), &c).unwrap();
        let a = provider.atan(&ratio, &c).unwrap();
        assert!(close(&a, &dec("0.9272952180016122"), "1e-13"), "{a}");
    }

    #[test]
    fn atan_above_one_reflects() {
        // atan(2) = 1.10714871779409...
        let a = SeriesProvider.atan(&dec("2"), &ctx(16)).unwrap();
        assert!(close(&a, &dec("1.1071487177940904"), "1e-13"), "{a}");
    }

    #[test]
    fn sine_at_zero_and_half_pi() {
        let provider = SeriesProvider;
        let c = ctx(20);
        assert!(provider.sin(&Decimal::zero(), &c).unwrap().is_zero());
        let half_pi = provider.pi(&c).unwrap().half();
        let s = provider.sin(&half_pi, &c).unwrap();
        assert!(close(&s, &Decimal::one(), "1e-18"), "{s}");
    }

    #[test]
    fn cosine_at_zero_and_pi() {
        let provider = SeriesProvider;
        let c = ctx(20);
        assert!(provider.cos(&Decimal::zero(), &c).unwrap().is_one());
        let pi = provider.pi(&c).unwrap();
        let value = provider.cos(&pi, &c).unwrap();
        assert!(close(&value, &dec("-1"), "1e-18"), "{value}");
    }

    #[test]
    fn reduction_handles_large_angles() {
        let provider = SeriesProvider;
        let c = ctx(16);
        // sin(100) = -0.50636564110975...
        let s = provider.sin(&dec("100"), &c).unwrap();
        assert!(close(&s, &dec("-0.5063656411097588"), "1e-12"), "{s}");
    }

    #[test]
    fn pythagorean_identity() {
        let provider = SeriesProvider;
        let c = ctx(18);
        let x = dec("1.234567");
        let s = provider.sin(&x, &c).unwrap();
        let co = provider.cos(&x, &c).unwrap();
        let sum = &(&s * &s) + &(&co * &co);
        assert!(close(&sum, &Decimal::one(), "1e-15"), "{sum}");
    }
}
