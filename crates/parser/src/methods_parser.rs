//! Builds the method collection from native method signatures

use crate::signature::SignatureParser;
use extsoap_engine_common::{MethodCollection, NativeSoapClient, Result, XsdTypeCollection};

/// Parses every exposed method signature against an XSD type catalog
pub struct MethodsParser<'a> {
    xsd_types: &'a XsdTypeCollection,
}

impl<'a> MethodsParser<'a> {
    pub fn new(xsd_types: &'a XsdTypeCollection) -> Self {
        Self { xsd_types }
    }

    pub fn parse<C: NativeSoapClient + ?Sized>(&self, client: &C) -> Result<MethodCollection> {
        self.parse_signatures(client.exposed_method_signatures())
    }

    /// All-or-nothing: the first malformed signature or duplicate name aborts
    pub fn parse_signatures<I, S>(&self, signatures: I) -> Result<MethodCollection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods = MethodCollection::new();
        for signature in signatures {
            methods.add(SignatureParser::parse(signature.as_ref(), self.xsd_types)?)?;
        }
        Ok(methods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extsoap_engine_common::EngineError;

    #[test]
    fn test_parse_signatures() {
        let catalog = XsdTypeCollection::new();
        let methods = MethodsParser::new(&catalog)
            .parse_signatures(["TestResponse First()", "TestResponse Second(int $a)"])
            .unwrap();
        assert_eq!(methods.names().collect::<Vec<_>>(), vec!["First", "Second"]);
    }

    #[test]
    fn test_one_bad_signature_fails_everything() {
        let catalog = XsdTypeCollection::new();
        let result = MethodsParser::new(&catalog)
            .parse_signatures(["TestResponse First()", "broken signature("]);
        assert!(matches!(result, Err(EngineError::MalformedSignature { .. })));
    }

    #[test]
    fn test_duplicate_method_names_rejected() {
        let catalog = XsdTypeCollection::new();
        let result = MethodsParser::new(&catalog)
            .parse_signatures(["TestResponse Same()", "OtherResponse Same(int $a)"]);
        assert_eq!(
            result,
            Err(EngineError::DuplicateName {
                kind: "method",
                name: "Same".to_string(),
            })
        );
    }
}
