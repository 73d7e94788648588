//! Builds the XSD type catalog used to resolve bare type names

use crate::type_signature::{TypeSignature, TypeSignatureParser};
use extsoap_engine_common::{NativeSoapClient, Result, XsdType, XsdTypeCollection};

/// Base type recorded for list and array simple types
pub const ARRAY_BASE_TYPE: &str = "array";

/// Base type recorded for union simple types
pub const UNION_BASE_TYPE: &str = "anyType";

/// Derives catalog entries from simple, list, union and array type signatures
pub struct XsdTypesParser;

impl XsdTypesParser {
    /// Catalog from the derived type signatures, overridden by the explicit definitions
    pub fn parse<C: NativeSoapClient + ?Sized>(client: &C) -> Result<XsdTypeCollection> {
        let mut catalog = Self::parse_signatures(client.exposed_type_signatures())?;
        catalog.extend(client.exposed_xsd_type_definitions());
        Ok(catalog)
    }

    pub fn parse_signatures<I, S>(signatures: I) -> Result<XsdTypeCollection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = XsdTypeCollection::new();
        for signature in signatures {
            let parsed = TypeSignatureParser::parse(signature.as_ref())?;
            if let Some(xsd_type) = Self::to_xsd_type(parsed) {
                catalog.insert(xsd_type);
            }
        }
        Ok(catalog)
    }

    /// Structs are complex types and have no catalog entry
    fn to_xsd_type(signature: TypeSignature) -> Option<XsdType> {
        match signature {
            TypeSignature::Struct { .. } => None,
            TypeSignature::Simple { name, base_type } => {
                Some(XsdType::create(name).with_base_type(base_type))
            }
            TypeSignature::List { name, member_types } => Some(
                XsdType::create(name)
                    .with_base_type(ARRAY_BASE_TYPE)
                    .with_member_types(member_types),
            ),
            TypeSignature::Union { name, member_types } => Some(
                XsdType::create(name)
                    .with_base_type(UNION_BASE_TYPE)
                    .with_member_types(member_types),
            ),
            TypeSignature::Array {
                name, item_type, ..
            } => Some(
                XsdType::create(name)
                    .with_base_type(ARRAY_BASE_TYPE)
                    .with_member_types([item_type]),
            ),
        }
    }
}
