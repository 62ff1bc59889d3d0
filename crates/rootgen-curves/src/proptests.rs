//! Property-based tests for curve formulas.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rootgen_core::{substitute, ExprArena};
    use rootgen_integers::Integer;
    use rootgen_poly::{expand, VarMap};

    use crate::{bernstein, control_point_symbols, free_variable, Axis, CurveFormula};

    proptest! {
        #[test]
        fn bernstein_sums_to_one_at_integer_points(degree in 1u32..10, at in -50i64..50) {
            let mut arena = ExprArena::new();
            let t = free_variable(&mut arena);
            let terms: Vec<_> = (0..=degree).map(|i| bernstein(&mut arena, degree, i, t)).collect();
            let sum = arena.add(terms);

            let point = arena.int(at);
            let value = substitute(&mut arena, sum, t, point).unwrap();
            let poly = expand(&arena, value, &VarMap::default()).unwrap();
            prop_assert_eq!(poly.as_constant(), Some(Integer::new(1)));
        }

        #[test]
        fn rational_endpoints_are_weighted_control_points(degree in 2usize..6) {
            let mut arena = ExprArena::new();
            let t = free_variable(&mut arena);
            let points = control_point_symbols(&mut arena, degree + 1);
            let formula = CurveFormula::rational_bezier(&mut arena, t, &points);
            let zero = arena.int(0);
            let one = arena.int(1);

            for (at, p) in [(zero, points[0]), (one, points[degree])] {
                let den = substitute(&mut arena, formula.denominator().unwrap(), t, at).unwrap();
                let num = substitute(&mut arena, formula.numerator(Axis::Y), t, at).unwrap();
                let expected_num = arena.mul([p.y, p.w]);

                let vars = VarMap::for_exprs(&arena, &[den, num, expected_num, p.w]);
                let poly = |e| expand(&arena, e, &vars).unwrap();
                prop_assert_eq!(poly(den), poly(p.w));
                prop_assert_eq!(poly(num), poly(expected_num));
            }
        }

        #[test]
        fn symbol_tables_are_prefix_stable(n in 0usize..20, m in 0usize..20) {
            let mut arena = ExprArena::new();
            let a = control_point_symbols(&mut arena, n);
            let b = control_point_symbols(&mut arena, m);
            let common = n.min(m);
            prop_assert_eq!(&a[..common], &b[..common]);
        }
    }
}
