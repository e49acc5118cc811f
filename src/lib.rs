//! prism: write shader logic in a TypeScript subset, emit GLSL.
//!
//! The library surface is a single pure text-in/text-out transform;
//! see [`compile`].

pub use prism_ast as ast;
pub use prism_glsl::{CompileError, PRELUDE, Result, ShaderType, compile};
