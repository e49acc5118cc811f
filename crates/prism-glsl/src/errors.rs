//! Error types for GLSL lowering.

use derive_more::{Display, Error};

pub type Result<T> = std::result::Result<T, CompileError>;

/// Errors that can abort a `compile` call.
///
/// The first error raised during the top-level walk aborts the whole
/// call; there is no partial output.
#[derive(Debug, Display, Error)]
pub enum CompileError {
    /// The source text could not be parsed at all.
    #[display("Parse error: {_0}")]
    Parse(#[error(source)] prism_ast::ParseError),

    /// A required type annotation is absent.
    #[display("Missing type annotation")]
    MissingType,

    /// An annotation node kind has no mapping to a shader type.
    #[display("Unsupported type annotation: {kind}")]
    UnsupportedAnnotation {
        #[error(not(source))]
        kind: String,
    },

    /// A qualifier-wrapped declaration has no generic argument.
    #[display("Missing a type parameter")]
    MissingTypeParameter,

    /// A qualifier-wrapped declaration has more than one generic argument.
    #[display("Too many type parameters")]
    TooManyTypeParameters,
}

impl From<prism_ast::ParseError> for CompileError {
    fn from(error: prism_ast::ParseError) -> Self {
        CompileError::Parse(error)
    }
}
