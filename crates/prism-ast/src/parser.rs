use crate::ast::*;
use tree_sitter::{Node, Parser};

/// Errors raised while turning source text into a [`Program`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseError {
    #[display("Failed to load TypeScript grammar: {_0}")]
    Grammar(tree_sitter::LanguageError),

    #[from(ignore)]
    #[display("Failed to parse source")]
    Parse,

    #[display("Invalid UTF-8 in source: {_0}")]
    Utf8(std::str::Utf8Error),

    #[from(ignore)]
    #[display("Malformed syntax node: {_0}")]
    MalformedNode(#[error(not(source))] String),
}

pub struct TypeScriptParser {
    parser: Parser,
}

impl TypeScriptParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())?;
        Ok(TypeScriptParser { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<Program, ParseError> {
        let tree = self.parser.parse(source, None).ok_or(ParseError::Parse)?;

        let root_node = tree.root_node();
        let mut statements = Vec::new();
        let mut cursor = root_node.walk();

        for child in root_node.named_children(&mut cursor) {
            if child.kind() == "comment" {
                continue;
            }
            statements.push(self.node_to_statement(child, source)?);
        }

        Ok(Program { statements })
    }

    fn node_to_statement(
        &self,
        node: Node,
        source: &str,
    ) -> Result<Spanned<Statement>, ParseError> {
        let span = Span::new(node.start_byte(), node.end_byte());
        match node.kind() {
            "function_declaration" => {
                let function = self.parse_function_declaration(node, source)?;
                Ok((Statement::Function(function), span))
            }
            "ambient_declaration" => {
                // `declare let x: T;` wraps the real declaration.
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    if child.kind() != "comment" {
                        return self.node_to_statement(child, source);
                    }
                }
                Err(ParseError::MalformedNode(
                    "Empty ambient declaration".to_string(),
                ))
            }
            "lexical_declaration" | "variable_declaration" => {
                let declaration = self.parse_variable_declaration(node, source)?;
                Ok((Statement::Variable(declaration), span))
            }
            "return_statement" => {
                let mut cursor = node.walk();
                let expr = node
                    .named_children(&mut cursor)
                    .find(|child| child.kind() != "comment")
                    .map(|child| self.node_to_expr_with_span(child, source))
                    .transpose()?;
                Ok((Statement::Return(expr), span))
            }
            other => Ok((Statement::Other(other.to_string()), span)),
        }
    }

    fn parse_function_declaration(
        &self,
        node: Node,
        source: &str,
    ) -> Result<FunctionDeclaration, ParseError> {
        let name = node
            .child_by_field_name("name")
            .ok_or_else(|| ParseError::MalformedNode("Missing function name".to_string()))?
            .utf8_text(source.as_bytes())?
            .to_string();

        let parameters = match node.child_by_field_name("parameters") {
            Some(params_node) => self.parse_parameter_list(params_node, source)?,
            None => Vec::new(),
        };

        let return_type = node
            .child_by_field_name("return_type")
            .map(|annotation| self.parse_type_annotation(annotation, source))
            .transpose()?;

        let body_node = node
            .child_by_field_name("body")
            .ok_or_else(|| ParseError::MalformedNode("Missing function body".to_string()))?;
        let mut body = Vec::new();
        let mut cursor = body_node.walk();
        for child in body_node.named_children(&mut cursor) {
            if child.kind() == "comment" {
                continue;
            }
            body.push(self.node_to_statement(child, source)?);
        }

        let span = Span::new(node.start_byte(), node.end_byte());

        Ok(FunctionDeclaration {
            name,
            parameters,
            return_type,
            body,
            span,
        })
    }

    fn parse_parameter_list(
        &self,
        node: Node,
        source: &str,
    ) -> Result<Vec<Parameter>, ParseError> {
        let mut cursor = node.walk();
        let mut parameters = Vec::new();

        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "required_parameter" | "optional_parameter" => {
                    parameters.push(self.parse_parameter(child, source)?);
                }
                _ => {}
            }
        }

        Ok(parameters)
    }

    fn parse_parameter(&self, node: Node, source: &str) -> Result<Parameter, ParseError> {
        let name = node
            .child_by_field_name("pattern")
            .ok_or_else(|| ParseError::MalformedNode("Missing parameter name".to_string()))?
            .utf8_text(source.as_bytes())?
            .to_string();

        let ty = node
            .child_by_field_name("type")
            .map(|annotation| self.parse_type_annotation(annotation, source))
            .transpose()?;

        Ok(Parameter { name, ty })
    }

    fn parse_variable_declaration(
        &self,
        node: Node,
        source: &str,
    ) -> Result<VariableDeclaration, ParseError> {
        let mut cursor = node.walk();
        let mut declarators = Vec::new();

        for child in node.named_children(&mut cursor) {
            if child.kind() == "variable_declarator" {
                declarators.push(self.parse_declarator(child, source)?);
            }
        }

        let span = Span::new(node.start_byte(), node.end_byte());

        Ok(VariableDeclaration { declarators, span })
    }

    fn parse_declarator(&self, node: Node, source: &str) -> Result<Declarator, ParseError> {
        let name = node
            .child_by_field_name("name")
            .ok_or_else(|| ParseError::MalformedNode("Missing declarator name".to_string()))?
            .utf8_text(source.as_bytes())?
            .to_string();

        let ty = node
            .child_by_field_name("type")
            .map(|annotation| self.parse_type_annotation(annotation, source))
            .transpose()?;

        Ok(Declarator { name, ty })
    }

    /// Parse a `type_annotation` node (`: T`) into its inner type.
    fn parse_type_annotation(
        &self,
        node: Node,
        source: &str,
    ) -> Result<TypeAnnotation, ParseError> {
        let mut cursor = node.walk();
        if let Some(child) = node.named_children(&mut cursor).next() {
            return self.parse_type(child, source);
        }
        Err(ParseError::MalformedNode(
            "Empty type annotation".to_string(),
        ))
    }

    fn parse_type(&self, node: Node, source: &str) -> Result<TypeAnnotation, ParseError> {
        match node.kind() {
            "type_identifier" => {
                let name = node.utf8_text(source.as_bytes())?.to_string();
                Ok(TypeAnnotation::Reference {
                    name,
                    arguments: Vec::new(),
                })
            }
            "generic_type" => {
                let name = node
                    .child_by_field_name("name")
                    .ok_or_else(|| {
                        ParseError::MalformedNode("Missing generic type name".to_string())
                    })?
                    .utf8_text(source.as_bytes())?
                    .to_string();

                let mut arguments = Vec::new();
                if let Some(args_node) = node.child_by_field_name("type_arguments") {
                    let mut cursor = args_node.walk();
                    for child in args_node.named_children(&mut cursor) {
                        if child.kind() == "comment" {
                            continue;
                        }
                        arguments.push(self.parse_type(child, source)?);
                    }
                }

                Ok(TypeAnnotation::Reference { name, arguments })
            }
            "predefined_type" => match node.utf8_text(source.as_bytes())? {
                "boolean" => Ok(TypeAnnotation::Boolean),
                "void" => Ok(TypeAnnotation::Void),
                _ => Ok(TypeAnnotation::Other(node.kind().to_string())),
            },
            other => Ok(TypeAnnotation::Other(other.to_string())),
        }
    }

    fn node_to_expr_with_span(
        &self,
        node: Node,
        source: &str,
    ) -> Result<Spanned<Expr>, ParseError> {
        let span = Span::new(node.start_byte(), node.end_byte());
        let expr = self.node_to_expr(node, source)?;
        Ok((expr, span))
    }

    fn node_to_expr(&self, node: Node, source: &str) -> Result<Expr, ParseError> {
        match node.kind() {
            "identifier" => {
                let text = node.utf8_text(source.as_bytes())?;
                Ok(Expr::Identifier(text.to_string()))
            }
            "call_expression" => {
                let callee_node = node.child_by_field_name("function").ok_or_else(|| {
                    ParseError::MalformedNode("Missing call callee".to_string())
                })?;
                let callee = Box::new(self.node_to_expr_with_span(callee_node, source)?);

                let mut arguments = Vec::new();
                if let Some(args_node) = node.child_by_field_name("arguments") {
                    let mut cursor = args_node.walk();
                    for child in args_node.named_children(&mut cursor) {
                        if child.kind() == "comment" {
                            continue;
                        }
                        arguments.push(self.node_to_expr_with_span(child, source)?);
                    }
                }

                Ok(Expr::Call(CallExpression { callee, arguments }))
            }
            "binary_expression" => {
                let left_node = node.child_by_field_name("left").ok_or_else(|| {
                    ParseError::MalformedNode("Missing left operand".to_string())
                })?;
                let operator_node = node.child_by_field_name("operator").ok_or_else(|| {
                    ParseError::MalformedNode("Missing binary operator".to_string())
                })?;
                let right_node = node.child_by_field_name("right").ok_or_else(|| {
                    ParseError::MalformedNode("Missing right operand".to_string())
                })?;

                Ok(Expr::Binary(BinaryExpression {
                    left: Box::new(self.node_to_expr_with_span(left_node, source)?),
                    operator: operator_node.utf8_text(source.as_bytes())?.to_string(),
                    right: Box::new(self.node_to_expr_with_span(right_node, source)?),
                }))
            }
            "number" | "string" | "true" | "false" => {
                let text = node.utf8_text(source.as_bytes())?;
                Ok(Expr::Literal(text.to_string()))
            }
            other => Ok(Expr::Other(other.to_string())),
        }
    }
}

/// Parse one compilation unit with a fresh parser instance.
///
/// Each call is independent; nothing is cached across calls.
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    TypeScriptParser::new()?.parse(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_function() {
        let program = parse_program(
            r#"
function test(x: float, y: float): float { return x + y; }
"#,
        )
        .unwrap();

        assert_eq!(program.statements.len(), 1);
        let Statement::Function(func) = &program.statements[0].0 else {
            panic!("Expected function")
        };
        assert_eq!(func.name, "test");
        assert_eq!(func.parameters.len(), 2);
        assert_eq!(func.parameters[0].name, "x");
        assert_eq!(
            func.parameters[0].ty,
            Some(TypeAnnotation::reference("float"))
        );
        assert_eq!(
            func.return_type,
            Some(TypeAnnotation::reference("float"))
        );
        assert_eq!(func.body.len(), 1);
    }

    #[test]
    fn test_function_without_annotations() {
        let program = parse_program("function f(a, b) { return; }").unwrap();

        let Statement::Function(func) = &program.statements[0].0 else {
            panic!("Expected function")
        };
        assert_eq!(func.parameters.len(), 2);
        assert_eq!(func.parameters[0].ty, None);
        assert_eq!(func.return_type, None);
        assert_eq!(func.body[0].0, Statement::Return(None));
    }

    #[test]
    fn test_void_and_boolean_keywords() {
        let program = parse_program("function f(flag: boolean): void { return; }").unwrap();

        let Statement::Function(func) = &program.statements[0].0 else {
            panic!("Expected function")
        };
        assert_eq!(func.parameters[0].ty, Some(TypeAnnotation::Boolean));
        assert_eq!(func.return_type, Some(TypeAnnotation::Void));
    }

    #[test]
    fn test_ambient_generic_declaration() {
        let program = parse_program("declare let time: Uniform<float>;").unwrap();

        assert_eq!(program.statements.len(), 1);
        let Statement::Variable(decl) = &program.statements[0].0 else {
            panic!("Expected variable declaration")
        };
        assert_eq!(decl.declarators.len(), 1);
        assert_eq!(decl.declarators[0].name, "time");
        assert_eq!(
            decl.declarators[0].ty,
            Some(TypeAnnotation::Reference {
                name: "Uniform".to_string(),
                arguments: vec![TypeAnnotation::reference("float")],
            })
        );
    }

    #[test]
    fn test_multiple_declarators() {
        let program = parse_program("let a: Uniform<float>, b: Attribute<vec3>;").unwrap();

        let Statement::Variable(decl) = &program.statements[0].0 else {
            panic!("Expected variable declaration")
        };
        assert_eq!(decl.declarators.len(), 2);
        assert_eq!(decl.declarators[0].name, "a");
        assert_eq!(decl.declarators[1].name, "b");
    }

    #[test]
    fn test_binary_expression_nesting() {
        let program = parse_program("function f(): float { return x + y / time; }").unwrap();

        let Statement::Function(func) = &program.statements[0].0 else {
            panic!("Expected function")
        };
        let Statement::Return(Some((Expr::Binary(add), _))) = &func.body[0].0 else {
            panic!("Expected return with binary expression")
        };
        assert_eq!(add.operator, "+");
        assert_eq!(add.left.0, Expr::Identifier("x".to_string()));
        let Expr::Binary(div) = &add.right.0 else {
            panic!("Expected nested division")
        };
        assert_eq!(div.operator, "/");
    }

    #[test]
    fn test_call_expression() {
        let program = parse_program("function f(): float { return mix(a, b, 0.5); }").unwrap();

        let Statement::Function(func) = &program.statements[0].0 else {
            panic!("Expected function")
        };
        let Statement::Return(Some((Expr::Call(call), _))) = &func.body[0].0 else {
            panic!("Expected return with call expression")
        };
        assert_eq!(call.callee.0, Expr::Identifier("mix".to_string()));
        assert_eq!(call.arguments.len(), 3);
        assert_eq!(call.arguments[2].0, Expr::Literal("0.5".to_string()));
    }

    #[test]
    fn test_unrecognized_statement_kinds() {
        let program = parse_program("type float = number;\nif (x) { }").unwrap();

        assert_eq!(program.statements.len(), 2);
        assert_eq!(
            program.statements[0].0,
            Statement::Other("type_alias_declaration".to_string())
        );
        assert_eq!(
            program.statements[1].0,
            Statement::Other("if_statement".to_string())
        );
    }

    #[test]
    fn test_union_type_annotation() {
        let program = parse_program("declare let x: float | int;").unwrap();

        let Statement::Variable(decl) = &program.statements[0].0 else {
            panic!("Expected variable declaration")
        };
        assert_eq!(
            decl.declarators[0].ty,
            Some(TypeAnnotation::Other("union_type".to_string()))
        );
    }
}
