//! GLSL lowering for the prism transpiler.
//!
//! The pipeline is a pure read-and-project over the syntax tree:
//! resolve type annotations against the closed catalog, unwrap
//! storage-qualifier generics, and render expressions and statements
//! as flat text fragments joined by newlines. No state outlives a
//! single [`compile`] call.

pub mod codegen;
pub mod errors;
pub mod expr;
pub mod resolve;
pub mod types;

pub use codegen::lower_statement;
pub use errors::{CompileError, Result};
pub use expr::lower_expr;
pub use resolve::{resolve, type_arguments};
pub use types::{PRELUDE, ShaderType};

/// Transpile TypeScript-subset source text to GLSL source text.
///
/// The synthetic type-alias prelude is prepended before parsing so the
/// grammar accepts the shader type names. Recognized top-level
/// constructs each contribute one fragment; everything else is
/// silently dropped. Fails fast on the first error with no partial
/// output.
pub fn compile(source: &str) -> Result<String> {
    let input = format!("{PRELUDE}\n{source}");
    let program = prism_ast::parse_program(&input)?;

    let mut fragments = Vec::new();
    for (statement, _) in &program.statements {
        lower_statement(statement, &mut fragments)?;
    }

    Ok(fragments.join("\n"))
}
