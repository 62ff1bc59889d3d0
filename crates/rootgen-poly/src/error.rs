//! Errors raised by the polynomial layer.

use thiserror::Error;

/// Errors that can occur while converting expressions to polynomials.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PolyError {
    /// The expression is not a polynomial in its symbols.
    #[error("not a polynomial: {0}")]
    NotPolynomial(String),

    /// A symbol is missing from the variable map.
    #[error("symbol `{0}` is not part of the variable map")]
    UnknownSymbol(String),
}
