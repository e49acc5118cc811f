//! Syntax tree for the TypeScript subset accepted by the prism transpiler.
//!
//! The tree-sitter CST is converted into the plain owned types in
//! [`ast`] as soon as parsing finishes; everything downstream of this
//! crate works on those types and never sees a tree-sitter node.

pub mod ast;
pub mod parser;

pub use ast::*;
pub use parser::{ParseError, TypeScriptParser, parse_program};
