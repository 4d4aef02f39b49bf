//! Property-based tests for determinants and matrix structure.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use apeiron_rings::Integer;

    use crate::matrix::Matrix;

    fn entry() -> impl Strategy<Value = i64> {
        -6i64..6i64
    }

    fn square(n: usize) -> impl Strategy<Value = Matrix<Integer>> {
        proptest::collection::vec(entry(), n * n).prop_map(move |cells| {
            let rows = cells
                .chunks(n)
                .map(|row| row.iter().copied().map(Integer::new).collect())
                .collect();
            Matrix::from_rows(rows).unwrap()
        })
    }

    proptest! {
        #[test]
        fn determinant_of_transpose(m in square(4)) {
            prop_assert_eq!(
                m.transpose().determinant().unwrap(),
                m.determinant().unwrap()
            );
        }

        #[test]
        fn determinant_multiplicative(a in square(3), b in square(3)) {
            let ab = a.multiply(&b).unwrap();
            prop_assert_eq!(
                ab.determinant().unwrap(),
                a.determinant().unwrap() * b.determinant().unwrap()
            );
        }

        #[test]
        fn parallel_agrees_with_sequential(m in square(4)) {
            prop_assert_eq!(
                m.determinant_parallel().unwrap(),
                m.determinant().unwrap()
            );
        }

        #[test]
        fn scalar_scaling_raises_to_size(m in square(3), c in -4i64..5i64) {
            let c = Integer::new(c);
            let scaled = m.scalar_multiply(&c);
            prop_assert_eq!(
                scaled.determinant().unwrap(),
                c.pow(3) * m.determinant().unwrap()
            );
        }

        #[test]
        fn add_then_subtract_roundtrips(a in square(3), b in square(3)) {
            let sum = a.add(&b).unwrap();
            prop_assert_eq!(sum.subtract(&b).unwrap(), a);
        }

        #[test]
        fn symmetric_sum_of_transpose(m in square(3)) {
            let sym = m.add(&m.transpose()).unwrap();
            prop_assert!(sym.is_symmetric());
            let skew = m.subtract(&m.transpose()).unwrap();
            prop_assert!(skew.is_skew_symmetric());
        }
    }
}
