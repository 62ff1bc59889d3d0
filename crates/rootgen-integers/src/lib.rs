//! # rootgen-integers
//!
//! Exact integer arithmetic for the rootgen code generator.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact binomial coefficients (`binomial`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binomial;
pub mod integer;

#[cfg(test)]
mod proptests;

pub use binomial::binomial;
pub use integer::Integer;
