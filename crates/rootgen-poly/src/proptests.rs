//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rootgen_integers::Integer;

    use crate::{Monomial, SparsePoly};

    const NUM_VARS: usize = 3;

    fn small_term() -> impl Strategy<Value = (Monomial, Integer)> {
        (proptest::collection::vec(0u32..4, NUM_VARS), -20i64..20i64)
            .prop_map(|(exps, c)| (Monomial::from_exponents(&exps), Integer::new(c)))
    }

    fn small_poly() -> impl Strategy<Value = SparsePoly> {
        proptest::collection::vec(small_term(), 0..6)
            .prop_map(|terms| SparsePoly::new(terms, NUM_VARS))
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn poly_pow_matches_repeated_mul(a in small_poly(), n in 0u32..4) {
            let mut expected = SparsePoly::one(NUM_VARS);
            for _ in 0..n {
                expected = expected.mul(&a);
            }
            prop_assert_eq!(a.pow(n), expected);
        }

        #[test]
        fn terms_are_strictly_descending(a in small_poly()) {
            for pair in a.terms().windows(2) {
                prop_assert!(pair[0].0 > pair[1].0);
            }
        }

        #[test]
        fn coefficient_split_round_trip(a in small_poly(), var in 0usize..NUM_VARS) {
            let coeffs = a.coefficients_in(var);
            for c in &coeffs {
                prop_assert_eq!(c.degree_in(var).unwrap_or(0), 0);
            }

            let x = SparsePoly::var(var, NUM_VARS);
            let mut power = SparsePoly::one(NUM_VARS);
            let mut rebuilt = SparsePoly::zero(NUM_VARS);
            for c in &coeffs {
                rebuilt = rebuilt.add(&c.mul(&power));
                power = power.mul(&x);
            }
            prop_assert_eq!(rebuilt, a);
        }
    }
}
