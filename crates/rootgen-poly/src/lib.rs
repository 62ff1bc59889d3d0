//! # rootgen-poly
//!
//! Exact polynomial arithmetic for the rootgen code generator.
//!
//! This crate provides:
//! - Sparse multivariate polynomials over Z in any number of variables
//! - Exact expansion of arena expressions into polynomials, and back
//! - Coefficient extraction with respect to a single variable

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod error;
pub mod monomial;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use convert::{expand, to_expr, VarMap};
pub use error::PolyError;
pub use monomial::Monomial;
pub use sparse::SparsePoly;
