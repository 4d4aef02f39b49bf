//! Property-based tests for the complex kernels.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use apeiron_rings::{Decimal, PrecisionContext, Ring, Rounding};

    use crate::decimal_complex::DecimalComplex;
    use crate::gaussian::GaussianInt;

    fn coeff() -> impl Strategy<Value = i64> {
        -500i64..500i64
    }

    fn gaussian() -> impl Strategy<Value = GaussianInt> {
        (coeff(), coeff()).prop_map(|(re, im)| GaussianInt::from_i64(re, im))
    }

    fn decimal_complex() -> impl Strategy<Value = DecimalComplex> {
        (coeff(), coeff(), 0u32..3u32).prop_map(|(re, im, scale)| {
            let factor = Decimal::pow10(-i64::from(scale));
            DecimalComplex::new(
                Decimal::from_i64(re) * factor.clone(),
                Decimal::from_i64(im) * factor,
            )
        })
    }

    proptest! {
        #[test]
        fn gaussian_add_commutative(a in gaussian(), b in gaussian()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn gaussian_mul_commutative(a in gaussian(), b in gaussian()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn gaussian_mul_associative(a in gaussian(), b in gaussian(), c in gaussian()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn gaussian_identities(a in gaussian()) {
            prop_assert_eq!(a.clone() + GaussianInt::zero(), a.clone());
            prop_assert_eq!(a.clone() * GaussianInt::one(), a);
        }

        #[test]
        fn conjugate_involution(a in gaussian()) {
            prop_assert_eq!(a.conjugate().conjugate(), a);
        }

        #[test]
        fn conjugate_times_self_is_norm(a in gaussian()) {
            let product = a.clone() * a.conjugate();
            prop_assert!(Ring::is_zero(product.imaginary()));
            prop_assert_eq!(product.real(), &a.abs_squared());
        }

        #[test]
        fn magnitude_is_non_negative(a in gaussian()) {
            let ctx = PrecisionContext::with_digits(12, Rounding::HalfEven).unwrap();
            let m = a.abs(&ctx).unwrap();
            prop_assert!(!m.is_negative());
            prop_assert_eq!(m.is_zero(), Ring::is_zero(&a));
        }

        #[test]
        fn decimal_mul_commutative(a in decimal_complex(), b in decimal_complex()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn decimal_divide_multiplies_back(a in decimal_complex(), b in decimal_complex()) {
            prop_assume!(!Ring::is_zero(&b));
            let ctx = PrecisionContext::with_digits(30, Rounding::HalfEven).unwrap();
            let q = a.divide(&b, &ctx).unwrap();
            let back = q * b;
            let err = (back.real() - a.real()).abs() + (back.imaginary() - a.imaginary()).abs();
            prop_assert!(err < Decimal::pow10(-18), "{} vs {}", back, a);
        }

        #[test]
        fn embedding_preserves_products(a in gaussian(), b in gaussian()) {
            let product = a.clone() * b.clone();
            prop_assert_eq!(
                a.matrix().multiply(&b.matrix()).unwrap(),
                product.matrix()
            );
        }
    }
}
