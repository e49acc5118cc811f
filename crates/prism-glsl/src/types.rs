//! The closed catalog of GLSL target types and the synthetic prelude.

use derive_more::Display;

/// Type aliases prepended to every compilation unit so the TypeScript
/// parser accepts the shader type names without a real type checker.
///
/// `void` and `boolean` are native keywords and need no alias. The
/// alias statements themselves fall outside the recognized statement
/// kinds and contribute no output.
pub const PRELUDE: &str = "\
type float = number;
type int = number;
type vec2 = number;
type vec3 = number;
type vec4 = number;
type matrix4 = number;
type sampler2D = number;
type samplerCube = number;
type sampler2DArray = number;
type sampler2DShadow = number;
type Uniform<X> = X;
type Attribute<X> = X;
";

/// One entry of the target type catalog.
///
/// `Uniform` and `Attribute` are storage-qualifier pseudo-types: they
/// never name a value's element type, only the qualifier emitted in
/// front of it.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum ShaderType {
    #[display("float")]
    Float,
    #[display("vec2")]
    Vec2,
    #[display("vec3")]
    Vec3,
    #[display("vec4")]
    Vec4,
    #[display("int")]
    Int,
    #[display("matrix4")]
    Matrix4,
    #[display("sampler2D")]
    Sampler2d,
    #[display("samplerCube")]
    SamplerCube,
    #[display("sampler2DArray")]
    Sampler2dArray,
    #[display("sampler2DShadow")]
    Sampler2dShadow,
    #[display("void")]
    Void,
    #[display("bool")]
    Bool,
    #[display("attribute")]
    Attribute,
    #[display("uniform")]
    Uniform,
}

impl ShaderType {
    /// Look up a catalog entry by its source-level name, case-sensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "float" => Some(ShaderType::Float),
            "vec2" => Some(ShaderType::Vec2),
            "vec3" => Some(ShaderType::Vec3),
            "vec4" => Some(ShaderType::Vec4),
            "int" => Some(ShaderType::Int),
            "matrix4" => Some(ShaderType::Matrix4),
            "sampler2D" => Some(ShaderType::Sampler2d),
            "samplerCube" => Some(ShaderType::SamplerCube),
            "sampler2DArray" => Some(ShaderType::Sampler2dArray),
            "sampler2DShadow" => Some(ShaderType::Sampler2dShadow),
            "void" => Some(ShaderType::Void),
            "bool" => Some(ShaderType::Bool),
            "Attribute" => Some(ShaderType::Attribute),
            "Uniform" => Some(ShaderType::Uniform),
            _ => None,
        }
    }
}
