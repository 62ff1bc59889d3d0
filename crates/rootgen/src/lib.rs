//! # rootgen
//!
//! Generates call sites for a polynomial root finder from conditions on
//! Bezier and rational Bezier curves.
//!
//! The generator builds the exact curve formula for a (family, degree)
//! pair, turns a named condition into a polynomial in the curve parameter
//! `t`, extracts its coefficients highest power first, renders them as C++
//! and wraps them in a `find_real_roots_in_interval` call.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rootgen::prelude::*;
//!
//! let generator = Generator::default();
//! let site = generator.generate(CurveFamily::Bezier, 3, Condition::MatchTangent)?;
//! println!("{}", site.text());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use rootgen_codegen as codegen;
pub use rootgen_core as core;
pub use rootgen_curves as curves;
pub use rootgen_integers as integers;
pub use rootgen_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rootgen_codegen::{
        extract_coefficients, remove_pow, CallSite, CodegenError, EmitterConfig, Generator,
        GeneratorConfig, SolverCallEmitter,
    };
    pub use rootgen_core::{ccode, ExprArena, ExprHandle, ExprNode};
    pub use rootgen_curves::{
        control_point_symbols, free_variable, Axis, Condition, CurveFamily, CurveRegistry,
    };
    pub use rootgen_integers::{binomial, Integer};
}
