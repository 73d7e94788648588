//! Method signature syntax tree

/// Name of the synthetic type every `list(...)` return resolves to
pub const LIST_RETURN_TYPE: &str = "array";

/// A `typeName $name` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub type_name: String,
    pub name: String,
}

/// Return part of a method signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnSpec {
    /// A single type name, e.g. `TestResponse`
    Type(String),

    /// `list(Response1 $response1, Response2 $response2)`
    List(Vec<NamedType>),
}

impl ReturnSpec {
    /// The type name the return resolves against
    pub fn type_name(&self) -> &str {
        match self {
            ReturnSpec::Type(name) => name,
            ReturnSpec::List(_) => LIST_RETURN_TYPE,
        }
    }
}

/// A parsed, unresolved method signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub return_spec: ReturnSpec,
    pub name: String,
    pub parameters: Vec<NamedType>,
}
