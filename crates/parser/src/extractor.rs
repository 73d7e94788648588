//! Metadata extraction over a native SOAP client

use crate::methods_parser::MethodsParser;
use crate::types_parser::TypesParser;
use crate::xsd_types_parser::XsdTypesParser;
use extsoap_engine_common::{
    MethodCollection, NativeSoapClient, Result, TypeCollection, XsdTypeCollection,
};

/// Runs the signature parsers over everything a client exposes
///
/// [`extract_xsd_types`](Self::extract_xsd_types) must run first: its
/// catalog is what the other two resolve type names against. Without it
/// every type comes back unresolved.
pub struct MetadataExtractor;

impl MetadataExtractor {
    pub fn extract_xsd_types<C: NativeSoapClient + ?Sized>(
        client: &C,
    ) -> Result<XsdTypeCollection> {
        let catalog = XsdTypesParser::parse(client)?;
        tracing::debug!("Extracted {} XSD types", catalog.len());
        Ok(catalog)
    }

    pub fn extract_methods<C: NativeSoapClient + ?Sized>(
        client: &C,
        catalog: &XsdTypeCollection,
    ) -> Result<MethodCollection> {
        let methods = MethodsParser::new(catalog).parse(client)?;
        tracing::debug!("Extracted {} methods", methods.len());
        Ok(methods)
    }

    pub fn extract_types<C: NativeSoapClient + ?Sized>(
        client: &C,
        catalog: &XsdTypeCollection,
    ) -> Result<TypeCollection> {
        let types = TypesParser::new(catalog).parse(client)?;
        tracing::debug!("Extracted {} types", types.len());
        Ok(types)
    }
}
