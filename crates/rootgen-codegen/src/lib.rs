//! # rootgen-codegen
//!
//! Turns curve conditions into root-finder call sites.
//!
//! This crate provides:
//! - Exact coefficient extraction, highest power first
//! - Cleanup of rendered coefficient text
//! - Emission of `find_real_roots_in_interval` call sites
//! - A generator tying the pipeline together, with parallel batch mode
//!
//! ## Pipeline
//!
//! ```text
//! symbols -> curve formula -> condition -> coefficients -> C text -> cleanup -> call site
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clean;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod generator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_utils;

pub use clean::remove_pow;
pub use config::{EmitterConfig, GeneratorConfig};
pub use emit::{indent, SolverCallEmitter};
pub use error::CodegenError;
pub use extract::{extract_coefficients, CoefficientList};
pub use generator::{CallSite, Generator};
