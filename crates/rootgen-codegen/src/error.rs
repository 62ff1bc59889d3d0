//! Error types for code generation.

use rootgen_core::ExprError;
use rootgen_curves::{Condition, CurveError, CurveFamily};
use rootgen_poly::PolyError;
use thiserror::Error;

/// Errors raised while generating a solver call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodegenError {
    /// The condition is not a polynomial in `t`, e.g. it still contains a
    /// denominator or a symbolic exponent.
    #[error(transparent)]
    NotPolynomial(#[from] PolyError),

    /// The condition's degree in `t` differs from the requested degree.
    ///
    /// Raised for the zero polynomial too; coefficients are never padded
    /// or truncated.
    #[error("expected a polynomial of degree {expected} in t, found {}", describe_degree(.actual))]
    DegreeMismatch {
        /// Requested degree.
        expected: u32,
        /// Actual degree, `None` for the zero polynomial.
        actual: Option<u32>,
    },

    /// Rendered coefficient text is not well formed.
    #[error("malformed rendered text `{text}`: {reason}")]
    MalformedRenderedText {
        /// The offending text.
        text: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The coefficient count does not match the degree.
    #[error("a degree {degree} solver call takes {expected} coefficients, got {actual}")]
    ArityMismatch {
        /// Polynomial degree.
        degree: u32,
        /// Required number of coefficients, `degree + 1`.
        expected: usize,
        /// Number of coefficients supplied.
        actual: usize,
    },

    /// Curve lookup or construction failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// An expression transformation failed.
    #[error(transparent)]
    Expr(#[from] ExprError),

    /// A generation request failed; names the request.
    #[error("cannot generate {condition} for {family} degree {degree}")]
    Generation {
        /// Requested family.
        family: CurveFamily,
        /// Requested curve degree.
        degree: u32,
        /// Requested condition.
        condition: Condition,
        /// Underlying failure.
        #[source]
        source: Box<CodegenError>,
    },
}

#[allow(clippy::ref_option)]
fn describe_degree(actual: &Option<u32>) -> String {
    match actual {
        Some(d) => format!("degree {d}"),
        None => "the zero polynomial".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_mismatch_message() {
        let err = CodegenError::DegreeMismatch {
            expected: 4,
            actual: Some(3),
        };
        assert_eq!(err.to_string(), "expected a polynomial of degree 4 in t, found degree 3");

        let err = CodegenError::DegreeMismatch {
            expected: 2,
            actual: None,
        };
        assert_eq!(
            err.to_string(),
            "expected a polynomial of degree 2 in t, found the zero polynomial"
        );
    }

    #[test]
    fn test_generation_keeps_source() {
        let err = CodegenError::Generation {
            family: CurveFamily::Bezier,
            degree: 3,
            condition: Condition::MatchTangent,
            source: Box::new(CodegenError::ArityMismatch {
                degree: 2,
                expected: 3,
                actual: 1,
            }),
        };
        assert_eq!(err.to_string(), "cannot generate match-tangent for Bezier degree 3");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("a degree 2 solver call takes 3 coefficients, got 1")
        );
    }
}
