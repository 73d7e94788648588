//! Memoized service metadata

use extsoap_engine_common::{
    MethodCollection, NativeSoapClient, Result, TypeCollection, XsdTypeCollection,
};
use extsoap_engine_parser::MetadataExtractor;
use std::cell::OnceCell;

/// Metadata of the service behind one native client
///
/// Every collection is extracted on first access and reused afterwards. A
/// failed extraction is not cached, so the next access tries again.
pub struct ExtSoapMetadata<'a, C: ?Sized> {
    client: &'a C,
    xsd_types: OnceCell<XsdTypeCollection>,
    methods: OnceCell<MethodCollection>,
    types: OnceCell<TypeCollection>,
}

impl<'a, C: NativeSoapClient + ?Sized> ExtSoapMetadata<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            xsd_types: OnceCell::new(),
            methods: OnceCell::new(),
            types: OnceCell::new(),
        }
    }

    pub fn xsd_types(&self) -> Result<&XsdTypeCollection> {
        get_or_try_init(&self.xsd_types, || {
            MetadataExtractor::extract_xsd_types(self.client)
        })
    }

    pub fn methods(&self) -> Result<&MethodCollection> {
        if let Some(methods) = self.methods.get() {
            return Ok(methods);
        }
        let catalog = self.xsd_types()?;
        get_or_try_init(&self.methods, || {
            MetadataExtractor::extract_methods(self.client, catalog)
        })
    }

    pub fn types(&self) -> Result<&TypeCollection> {
        if let Some(types) = self.types.get() {
            return Ok(types);
        }
        let catalog = self.xsd_types()?;
        get_or_try_init(&self.types, || {
            MetadataExtractor::extract_types(self.client, catalog)
        })
    }
}

fn get_or_try_init<T>(cell: &OnceCell<T>, init: impl FnOnce() -> Result<T>) -> Result<&T> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = init()?;
    Ok(cell.get_or_init(|| value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use extsoap_engine_common::{EngineError, SoapRequest, XsdType};
    use std::cell::Cell;

    struct CountingClient {
        method_listings: Cell<usize>,
        type_listings: Cell<usize>,
        methods: Vec<&'static str>,
    }

    impl CountingClient {
        fn new(methods: Vec<&'static str>) -> Self {
            Self {
                method_listings: Cell::new(0),
                type_listings: Cell::new(0),
                methods,
            }
        }
    }

    impl NativeSoapClient for CountingClient {
        fn send_raw(&self, _request: &SoapRequest) -> anyhow::Result<Option<String>> {
            Ok(None)
        }

        fn exposed_method_signatures(&self) -> Vec<String> {
            self.method_listings.set(self.method_listings.get() + 1);
            self.methods.iter().map(|m| m.to_string()).collect()
        }

        fn exposed_type_signatures(&self) -> Vec<String> {
            self.type_listings.set(self.type_listings.get() + 1);
            vec![
                "string simpleType".to_string(),
                "struct Test1 {\n simpleType prop1;\n}".to_string(),
            ]
        }
    }

    #[test]
    fn test_collections_are_memoized() {
        let client = CountingClient::new(vec!["simpleType Echo(simpleType $value)"]);
        let metadata = ExtSoapMetadata::new(&client);

        for _ in 0..3 {
            assert_eq!(metadata.methods().unwrap().len(), 1);
            assert_eq!(metadata.types().unwrap().len(), 1);
            assert_eq!(metadata.xsd_types().unwrap().len(), 1);
        }

        assert_eq!(client.method_listings.get(), 1);
        // One listing for the catalog and one for the struct types
        assert_eq!(client.type_listings.get(), 2);
    }

    #[test]
    fn test_methods_resolve_against_catalog() {
        let client = CountingClient::new(vec!["simpleType Echo(simpleType $value)"]);
        let metadata = ExtSoapMetadata::new(&client);

        let echo = metadata.methods().unwrap().fetch_by_name("Echo").unwrap();
        assert_eq!(
            echo.return_type,
            XsdType::create("simpleType").with_base_type("string")
        );
    }

    #[test]
    fn test_failed_extraction_is_retried() {
        let client = CountingClient::new(vec!["Broken("]);
        let metadata = ExtSoapMetadata::new(&client);

        assert!(matches!(
            metadata.methods(),
            Err(EngineError::MalformedSignature { .. })
        ));
        assert!(metadata.methods().is_err());
        assert_eq!(client.method_listings.get(), 2);
    }
}
