use serde::{Deserialize, Serialize};

/// Byte range of a node in the parsed source (prelude included).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

pub type Spanned<T> = (T, Span);

pub type Identifier = String;

/// Ordered top-level statements of one compilation unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Program {
    pub statements: Vec<Spanned<Statement>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Statement {
    Function(FunctionDeclaration),
    Return(Option<Spanned<Expr>>),
    Variable(VariableDeclaration),
    /// Any statement kind the transpiler does not recognize, carrying
    /// the node's kind tag. Contributes no output.
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionDeclaration {
    pub name: Identifier,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeAnnotation>,
    pub body: Vec<Spanned<Statement>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: Identifier,
    pub ty: Option<TypeAnnotation>,
}

/// One `let`/`var` statement; may bind several declarators.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariableDeclaration {
    pub declarators: Vec<Declarator>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declarator {
    pub name: Identifier,
    pub ty: Option<TypeAnnotation>,
}

/// A type annotation as written in source, before any resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeAnnotation {
    /// A named type, possibly with generic arguments: `float`,
    /// `Uniform<float>`.
    Reference {
        name: Identifier,
        arguments: Vec<TypeAnnotation>,
    },
    /// The `boolean` keyword.
    Boolean,
    /// The `void` keyword.
    Void,
    /// Any annotation kind with no mapping, carrying the kind tag.
    Other(String),
}

impl TypeAnnotation {
    pub fn reference(name: impl Into<Identifier>) -> Self {
        TypeAnnotation::Reference {
            name: name.into(),
            arguments: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Identifier(Identifier),
    Call(CallExpression),
    Binary(BinaryExpression),
    /// Raw source text of a literal, preserved verbatim.
    Literal(String),
    /// Any expression kind with no mapping, carrying the kind tag.
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallExpression {
    pub callee: Box<Spanned<Expr>>,
    pub arguments: Vec<Spanned<Expr>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryExpression {
    pub left: Box<Spanned<Expr>>,
    /// Operator token text, passed through verbatim when lowering.
    pub operator: String,
    pub right: Box<Spanned<Expr>>,
}
