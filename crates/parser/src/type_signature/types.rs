//! Type signature syntax tree

/// A `typeName name;` line inside a struct body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructMember {
    pub type_name: String,
    pub name: String,
}

/// One parsed type signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSignature {
    /// Complex type with ordered members
    Struct {
        name: String,
        members: Vec<StructMember>,
    },

    /// `list listType {int}`
    List {
        name: String,
        member_types: Vec<String>,
    },

    /// `union unionType {int,string}`
    Union {
        name: String,
        member_types: Vec<String>,
    },

    /// `Foo ArrayOfFoo[]`, `string Matrix[,]`, `int FixedInts[2]`
    ///
    /// `dimensions` keeps the bracket suffix as written.
    Array {
        name: String,
        item_type: String,
        dimensions: String,
    },

    /// `string simpleType`
    Simple { name: String, base_type: String },
}

impl TypeSignature {
    pub fn name(&self) -> &str {
        match self {
            TypeSignature::Struct { name, .. }
            | TypeSignature::List { name, .. }
            | TypeSignature::Union { name, .. }
            | TypeSignature::Array { name, .. }
            | TypeSignature::Simple { name, .. } => name,
        }
    }
}
