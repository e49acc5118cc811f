//! Rendering statements and declarations as GLSL fragments.

use prism_ast::Statement;

use crate::errors::{CompileError, Result};
use crate::expr::lower_expr;
use crate::resolve::{resolve, type_arguments};
use crate::types::ShaderType;

/// Lower one statement, appending zero or more fragments.
///
/// A function declaration contributes a single composite fragment; its
/// body statements are lowered line by line into that block.
/// Unrecognized statement kinds contribute nothing.
pub fn lower_statement(statement: &Statement, fragments: &mut Vec<String>) -> Result<()> {
    match statement {
        Statement::Function(function) => {
            // Fails before any body statement is processed.
            let return_type = resolve(function.return_type.as_ref())?;

            let parameters = function
                .parameters
                .iter()
                .map(|parameter| {
                    let ty = match &parameter.ty {
                        Some(annotation) => resolve(Some(annotation))?,
                        None => ShaderType::Void,
                    };
                    Ok(format!("{ty} {}", parameter.name))
                })
                .collect::<Result<Vec<_>>>()?
                .join(", ");

            let mut block = vec![format!(
                "{return_type} {}({parameters}) {{",
                function.name
            )];
            for (body_statement, _) in &function.body {
                lower_statement(body_statement, &mut block)?;
            }
            block.push("}".to_string());

            fragments.push(block.join("\n"));
        }
        Statement::Return(expr) => {
            fragments.push(format!("return {};", lower_expr(expr.as_ref())));
        }
        Statement::Variable(declaration) => {
            let mut lines = Vec::new();
            for declarator in &declaration.declarators {
                let qualifier = resolve(declarator.ty.as_ref())?;
                let arguments = type_arguments(declarator.ty.as_ref());
                let element = match arguments.as_slice() {
                    [] => return Err(CompileError::MissingTypeParameter),
                    [element] => element,
                    _ => return Err(CompileError::TooManyTypeParameters),
                };
                lines.push(format!("{qualifier} {element} {};", declarator.name));
            }
            fragments.push(lines.join("\n"));
        }
        Statement::Other(_) => {}
    }
    Ok(())
}
