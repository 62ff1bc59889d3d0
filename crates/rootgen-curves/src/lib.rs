//! # rootgen-curves
//!
//! Parametric curve families for the rootgen code generator.
//!
//! This crate provides:
//! - Control-point symbol tables (`cx{i}`, `cy{i}`, `w{i}`)
//! - Exact Bernstein bases and curve formulas
//! - A registry of supported (family, degree) pairs
//! - Named algebraic conditions over a curve, as polynomials in `t`
//!
//! ## Example
//!
//! ```rust,ignore
//! use rootgen_core::ExprArena;
//! use rootgen_curves::{control_point_symbols, free_variable, CurveFamily, CurveRegistry};
//!
//! let registry = CurveRegistry::default();
//! let cubic = registry.get(CurveFamily::Bezier, 3)?;
//!
//! let mut arena = ExprArena::new();
//! let t = free_variable(&mut arena);
//! let syms = control_point_symbols(&mut arena, cubic.arity());
//! let formula = cubic.build_formula(&mut arena, t, &syms)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod condition;
pub mod error;
pub mod family;
pub mod formula;
pub mod registry;
pub mod symbols;

#[cfg(test)]
mod proptests;

pub use condition::Condition;
pub use error::CurveError;
pub use family::CurveFamily;
pub use formula::{bernstein, Axis, CurveFormula};
pub use registry::{CurveDescriptor, CurveRegistry, MIN_DEGREE};
pub use symbols::{control_point_symbols, free_variable, ControlPointSymbols, FREE_VARIABLE};
