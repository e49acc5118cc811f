//! Mapping source type annotations onto the shader type catalog.

use prism_ast::TypeAnnotation;

use crate::errors::{CompileError, Result};
use crate::types::ShaderType;

/// Resolve a type annotation to exactly one catalog entry.
///
/// An unrecognized type-reference name resolves to `void` rather than
/// failing; the fallback is pinned by tests as compatibility behavior.
pub fn resolve(annotation: Option<&TypeAnnotation>) -> Result<ShaderType> {
    match annotation {
        None => Err(CompileError::MissingType),
        Some(TypeAnnotation::Reference { name, .. }) => {
            Ok(ShaderType::from_name(name).unwrap_or(ShaderType::Void))
        }
        Some(TypeAnnotation::Boolean) => Ok(ShaderType::Bool),
        Some(TypeAnnotation::Void) => Ok(ShaderType::Void),
        Some(TypeAnnotation::Other(kind)) => Err(CompileError::UnsupportedAnnotation {
            kind: kind.clone(),
        }),
    }
}

/// Names of the generic arguments of a type-reference annotation, in
/// source order.
///
/// Only arguments that are themselves simple type-references are kept,
/// and their names pass through as raw text: `Uniform<float>` yields
/// `["float"]` without a second trip through [`resolve`].
pub fn type_arguments(annotation: Option<&TypeAnnotation>) -> Vec<&str> {
    match annotation {
        Some(TypeAnnotation::Reference { arguments, .. }) => arguments
            .iter()
            .filter_map(|argument| match argument {
                TypeAnnotation::Reference { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_resolve_to_their_entry() {
        let annotation = TypeAnnotation::reference("vec3");
        assert_eq!(resolve(Some(&annotation)).unwrap(), ShaderType::Vec3);

        let annotation = TypeAnnotation::reference("sampler2D");
        assert_eq!(resolve(Some(&annotation)).unwrap(), ShaderType::Sampler2d);
    }

    #[test]
    fn test_unknown_reference_falls_back_to_void() {
        // Regression guard for the documented fallback, not an endorsement.
        let annotation = TypeAnnotation::reference("Texture2D");
        assert_eq!(resolve(Some(&annotation)).unwrap(), ShaderType::Void);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            resolve(Some(&TypeAnnotation::Boolean)).unwrap(),
            ShaderType::Bool
        );
        assert_eq!(
            resolve(Some(&TypeAnnotation::Void)).unwrap(),
            ShaderType::Void
        );
    }

    #[test]
    fn test_absent_annotation_is_an_error() {
        assert!(matches!(resolve(None), Err(CompileError::MissingType)));
    }

    #[test]
    fn test_unsupported_annotation_carries_the_kind_tag() {
        let annotation = TypeAnnotation::Other("union_type".to_string());
        let Err(CompileError::UnsupportedAnnotation { kind }) = resolve(Some(&annotation)) else {
            panic!("Expected UnsupportedAnnotation")
        };
        assert_eq!(kind, "union_type");
    }

    #[test]
    fn test_type_arguments_pass_through_unresolved() {
        let annotation = TypeAnnotation::Reference {
            name: "Uniform".to_string(),
            arguments: vec![TypeAnnotation::reference("NotInCatalog")],
        };
        assert_eq!(type_arguments(Some(&annotation)), vec!["NotInCatalog"]);
    }

    #[test]
    fn test_type_arguments_keep_source_order_and_skip_non_references() {
        let annotation = TypeAnnotation::Reference {
            name: "Uniform".to_string(),
            arguments: vec![
                TypeAnnotation::reference("float"),
                TypeAnnotation::Void,
                TypeAnnotation::reference("vec2"),
            ],
        };
        assert_eq!(type_arguments(Some(&annotation)), vec!["float", "vec2"]);
    }

    #[test]
    fn test_type_arguments_of_non_generic_annotations() {
        assert!(type_arguments(None).is_empty());
        assert!(type_arguments(Some(&TypeAnnotation::Boolean)).is_empty());
        assert!(type_arguments(Some(&TypeAnnotation::reference("float"))).is_empty());
    }
}
