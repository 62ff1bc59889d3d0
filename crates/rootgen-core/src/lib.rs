//! # rootgen-core
//!
//! Core expression engine for the rootgen code generator.
//!
//! This crate provides:
//! - Arena-allocated expression storage with hash-consing
//! - Type-safe expression handles
//! - Substitution and symbolic differentiation
//! - A C/C++ expression printer
//!
//! ## Design Principles
//!
//! - **Exactness**: integer literals are arbitrary precision
//! - **Hash-Consing**: every structurally unique expression is stored once
//! - **Immutability**: transformations return new handles

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod expr;
pub mod handle;
pub mod printer;
pub mod transform;

pub use arena::ExprArena;
pub use expr::{Args, ExprNode, SymbolId};
pub use handle::ExprHandle;
pub use printer::{ccode, CPrinter};
pub use transform::{derivative, free_symbols, substitute, ExprError};
