//! Error types for curve construction.

use rootgen_core::ExprError;
use thiserror::Error;

use crate::family::CurveFamily;

/// Errors raised while looking up or building curves.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    /// The registry has no descriptor for this degree.
    ///
    /// Supported degrees are `min..max`; the registry never clamps.
    #[error("{family} curves of degree {degree} are not supported (supported: {min}..{max})")]
    UnsupportedDegree {
        /// Requested family.
        family: CurveFamily,
        /// Requested degree.
        degree: u32,
        /// Smallest supported degree.
        min: u32,
        /// Exclusive upper bound on supported degrees.
        max: u32,
    },

    /// A formula was built with the wrong number of control points.
    #[error("a degree {degree} curve needs {expected} control points, got {actual}")]
    SymbolCountMismatch {
        /// Curve degree.
        degree: u32,
        /// Required number of control points (`degree + 1`).
        expected: usize,
        /// Number supplied.
        actual: usize,
    },

    /// A family name did not parse.
    #[error("unknown curve family `{0}`")]
    UnknownFamily(String),

    /// An axis name did not parse.
    #[error("unknown axis `{0}`")]
    UnknownAxis(String),

    /// A condition name did not parse.
    #[error("unknown curve condition `{0}`")]
    UnknownCondition(String),

    /// Differentiating the curve formula failed.
    #[error(transparent)]
    Expr(#[from] ExprError),
}
