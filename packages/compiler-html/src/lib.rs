//! # Quotedeck HTML Compiler
//!
//! Serializes evaluated testimonial blocks into their saved HTML markup.
//!
//! ## Pipeline
//!
//! ```text
//! stored record ──normalize──▶ evaluator ──VDOM──▶ markup string
//! ```
//!
//! The compact form (the default) is canonical: compiling the same record
//! twice yields byte-identical markup, so stored content can be validated
//! against a fresh render. Pretty printing is available for inspection and
//! golden files.

mod compiler;


pub use compiler::{
    compile_block, compile_named, compile_value, compile_vdom, CompileError, CompileOptions,
};
