//! Structured metadata model
//!
//! These are the typed counterparts of the terse signature strings a native
//! SOAP client exposes through service introspection.

use crate::collection::Named;
use serde::{Deserialize, Serialize};

/// An XSD type reference
///
/// `base_type` is only set for simple types that were resolved against the
/// XSD type catalog. Complex and unresolved types carry just their name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XsdType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    /// Member types of list, union and array simple types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_types: Vec<String>,
}

impl XsdType {
    /// Create an unresolved type reference
    ///
    /// # Examples
    /// ```
    /// use extsoap_engine_common::XsdType;
    ///
    /// let ty = XsdType::create("simpleType").with_base_type("string");
    /// assert_eq!(ty.name, "simpleType");
    /// assert_eq!(ty.effective_type(), "string");
    /// ```
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: None,
            member_types: Vec::new(),
        }
    }

    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    pub fn with_member_types<I, S>(mut self, member_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.member_types = member_types.into_iter().map(Into::into).collect();
        self
    }

    /// The scalar base type when known, the type name otherwise
    pub fn effective_type(&self) -> &str {
        self.base_type.as_deref().unwrap_or(&self.name)
    }
}

/// A positional method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub xsd_type: XsdType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, xsd_type: XsdType) -> Self {
        Self {
            name: name.into(),
            xsd_type,
        }
    }
}

/// A service operation
///
/// Parameter order is significant: arguments bind positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: XsdType,
}

impl Method {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, return_type: XsdType) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_type,
        }
    }
}

impl Named for Method {
    const KIND: &'static str = "method";

    fn name(&self) -> &str {
        &self.name
    }
}

/// A member of a complex type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub xsd_type: XsdType,
}

impl Property {
    pub fn new(name: impl Into<String>, xsd_type: XsdType) -> Self {
        Self {
            name: name.into(),
            xsd_type,
        }
    }
}

/// A complex type with its ordered properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub xsd_type: XsdType,
    pub properties: Vec<Property>,
}

impl Type {
    pub fn new(xsd_type: XsdType, properties: Vec<Property>) -> Self {
        Self {
            xsd_type,
            properties,
        }
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

impl Named for Type {
    const KIND: &'static str = "type";

    fn name(&self) -> &str {
        &self.xsd_type.name
    }
}
