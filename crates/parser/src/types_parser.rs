//! Builds the complex type collection from native type signatures

use crate::type_signature::{TypeSignature, TypeSignatureParser};
use extsoap_engine_common::{
    NativeSoapClient, Property, Result, Type, TypeCollection, XsdType, XsdTypeCollection,
};

/// Turns `struct` signatures into [`Type`]s; simple types are left to the XSD catalog
pub struct TypesParser<'a> {
    xsd_types: &'a XsdTypeCollection,
}

impl<'a> TypesParser<'a> {
    pub fn new(xsd_types: &'a XsdTypeCollection) -> Self {
        Self { xsd_types }
    }

    pub fn parse<C: NativeSoapClient + ?Sized>(&self, client: &C) -> Result<TypeCollection> {
        self.parse_signatures(client.exposed_type_signatures())
    }

    pub fn parse_signatures<I, S>(&self, signatures: I) -> Result<TypeCollection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types = TypeCollection::new();
        for signature in signatures {
            match TypeSignatureParser::parse(signature.as_ref())? {
                TypeSignature::Struct { name, members } => {
                    let properties = members
                        .into_iter()
                        .map(|member| {
                            Property::new(member.name, self.xsd_types.resolve(&member.type_name))
                        })
                        .collect();
                    types.add(Type::new(XsdType::create(name), properties))?;
                }
                other => tracing::debug!("Type {} is not a struct, skipping", other.name()),
            }
        }
        Ok(types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extsoap_engine_common::EngineError;

    #[test]
    fn test_parse_structs_and_skip_simple_types() {
        let catalog: XsdTypeCollection =
            [XsdType::create("simpleType").with_base_type("string")].into_iter().collect();
        let types = TypesParser::new(&catalog)
            .parse_signatures([
                "struct Test1 {\n simpleType prop1;\n Test2 prop2;\n}",
                "string simpleType",
                "struct Test2 {\n}",
            ])
            .unwrap();

        assert_eq!(types.len(), 2);
        let test1 = types.fetch_by_name("Test1").unwrap();
        assert_eq!(
            test1.properties,
            vec![
                Property::new("prop1", XsdType::create("simpleType").with_base_type("string")),
                Property::new("prop2", XsdType::create("Test2")),
            ]
        );
        assert!(types.fetch_by_name("Test2").unwrap().properties.is_empty());
    }

    #[test]
    fn test_duplicate_struct_rejected() {
        let catalog = XsdTypeCollection::new();
        let result = TypesParser::new(&catalog)
            .parse_signatures(["struct Same {\n}", "struct Same {\n int a;\n}"]);
        assert!(matches!(result, Err(EngineError::DuplicateName { kind: "type", .. })));
    }
}
