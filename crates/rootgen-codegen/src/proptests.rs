//! Property-based tests for extraction, cleanup and emission.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rootgen_core::ExprArena;

    use crate::{extract_coefficients, remove_pow, SolverCallEmitter};

    fn identifier() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,3}"
    }

    fn rendered_term() -> impl Strategy<Value = String> {
        prop_oneof![
            identifier().prop_map(|id| format!("pow({id}, 2)")),
            identifier().prop_map(|id| format!("pow({id}, 3)")),
            identifier(),
            (1i64..100).prop_map(|n| n.to_string()),
        ]
    }

    fn rendered_text() -> impl Strategy<Value = String> {
        let op = prop::sample::select(vec![" + ", " - ", "*", "/"]);
        proptest::collection::vec((rendered_term(), op), 1..6).prop_map(|parts| {
            let mut text = String::new();
            for (i, (term, op)) in parts.into_iter().enumerate() {
                if i > 0 {
                    text.push_str(op);
                }
                text.push_str(&term);
            }
            text
        })
    }

    proptest! {
        #[test]
        fn remove_pow_is_idempotent(text in rendered_text()) {
            let once = remove_pow(&text).unwrap();
            prop_assert_eq!(remove_pow(&once).unwrap(), once.clone());
            prop_assert!(!once.contains(", 2)"));
        }

        #[test]
        fn remove_pow_keeps_text_without_squares(text in "[a-z0-9 +*/-]{0,40}") {
            prop_assert_eq!(remove_pow(&text).unwrap(), text);
        }

        #[test]
        fn emitted_lines_follow_arity(coeffs in proptest::collection::vec(identifier(), 1..12)) {
            let degree = u32::try_from(coeffs.len() - 1).unwrap();
            let lines = SolverCallEmitter::default().emit(&coeffs, degree).unwrap();

            prop_assert_eq!(lines.len(), coeffs.len() + 3);
            let header = format!("PolynomialRootFinder<Scalar, {degree}>::find_real_roots_in_interval({{");
            prop_assert_eq!(&lines[0], &header);
            for (line, coeff) in lines[1..=coeffs.len()].iter().zip(&coeffs) {
                prop_assert!(line.starts_with("    "));
                prop_assert_eq!(line.trim().trim_end_matches(','), coeff.as_str());
            }
        }

        #[test]
        fn extraction_recovers_integer_coefficients(
            coeffs in proptest::collection::vec(-30i64..30, 1..8)
                .prop_filter("leading coefficient must be nonzero", |c| c[0] != 0)
        ) {
            let mut arena = ExprArena::new();
            let t = arena.symbol("t");
            let degree = u32::try_from(coeffs.len() - 1).unwrap();

            // sum_k coeffs[k] * t^(degree - k)
            let terms: Vec<_> = coeffs
                .iter()
                .zip((0..=degree).rev())
                .map(|(&c, power)| {
                    let c = arena.int(c);
                    let tp = arena.powi(t, power);
                    arena.mul([c, tp])
                })
                .collect();
            let expr = arena.add(terms);

            let extracted = extract_coefficients(&mut arena, expr, t, degree).unwrap();
            let values: Vec<_> = extracted
                .iter()
                .map(|h| arena.get(h).as_integer().and_then(|n| n.to_i64()))
                .collect();
            let expected: Vec<_> = coeffs.iter().map(|&c| Some(c)).collect();
            prop_assert_eq!(values, expected);
        }
    }
}
