//! Rendering expression nodes as GLSL text.

use prism_ast::{Expr, Spanned};

/// Lower an expression to target text. Total over the variant; an
/// absent expression lowers to empty text.
///
/// Binary lowering trusts the caller's source nesting and does not
/// re-insert parentheses, so deeply nested expressions can re-associate
/// in the emitted text. Unrecognized kinds render their kind tag as a
/// placeholder, which is not valid GLSL.
pub fn lower_expr(expr: Option<&Spanned<Expr>>) -> String {
    let Some((expr, _)) = expr else {
        return String::new();
    };
    match expr {
        Expr::Identifier(name) => name.clone(),
        Expr::Call(call) => {
            // Member and computed callees have no simple name to emit.
            let callee = match &call.callee.0 {
                Expr::Identifier(name) => name.as_str(),
                _ => "",
            };
            let arguments = call
                .arguments
                .iter()
                .map(|argument| lower_expr(Some(argument)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{callee}({arguments})")
        }
        Expr::Binary(binary) => format!(
            "{} {} {}",
            lower_expr(Some(&binary.left)),
            binary.operator,
            lower_expr(Some(&binary.right))
        ),
        Expr::Literal(raw) => raw.clone(),
        Expr::Other(kind) => kind.clone(),
    }
}
