//! Property-based tests for exact integer arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{binomial, Integer};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    proptest! {
        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                &a * &(&b + &c),
                &(&a * &b) + &(&a * &c)
            );
        }

        #[test]
        fn integer_neg_inverse(a in small_int()) {
            let a = Integer::new(a);
            prop_assert_eq!((&a + &(-&a)).signum(), 0);
        }

        #[test]
        fn binomial_pascal_rule(n in 1u32..60, k in 1u32..60) {
            prop_assume!(k <= n);
            prop_assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
        }

        #[test]
        fn binomial_row_sum_is_power_of_two(n in 0u32..40) {
            let sum = (0..=n).fold(Integer::new(0), |acc, k| acc + binomial(n, k));
            prop_assert_eq!(sum, Integer::new(2).pow(n));
        }
    }
}
