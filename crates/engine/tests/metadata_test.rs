//! Integration test for the memoized metadata facade

use extsoap_engine::common::{Method, Parameter, XsdType};
use extsoap_engine::{ExtSoapMetadata, NativeSoapClient, SoapRequest};
use mockall::mock;

mock! {
    pub Client {}

    impl NativeSoapClient for Client {
        fn send_raw(&self, request: &SoapRequest) -> anyhow::Result<Option<String>>;
        fn exposed_method_signatures(&self) -> Vec<String>;
        fn exposed_type_signatures(&self) -> Vec<String>;
        fn exposed_xsd_type_definitions(&self) -> Vec<XsdType>;
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn client() -> MockClient {
    let mut client = MockClient::new();
    client
        .expect_exposed_method_signatures()
        .times(1)
        .return_const(strings(&[
            "TestResponse Test0Param()",
            "list(Response1 $response1, Response2 $response2) TestReturnList()",
            "simpleType TestSimpleType(simpleType $parameter1)",
        ]));
    client
        .expect_exposed_type_signatures()
        .times(2)
        .return_const(strings(&[
            "string simpleType",
            "struct TestResponse {\n simpleType value;\n}",
        ]));
    client
        .expect_exposed_xsd_type_definitions()
        .times(1)
        .return_const(Vec::<XsdType>::new());
    client
}

#[test]
fn test_methods_are_extracted_once() {
    let client = client();
    let metadata = ExtSoapMetadata::new(&client);

    let first = metadata.methods().unwrap();
    let second = metadata.methods().unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(
        first.names().collect::<Vec<_>>(),
        vec!["Test0Param", "TestReturnList", "TestSimpleType"]
    );
    metadata.types().unwrap();
    metadata.types().unwrap();
}

#[test]
fn test_extracted_methods() {
    let client = client();
    let metadata = ExtSoapMetadata::new(&client);
    let methods = metadata.methods().unwrap();
    metadata.types().unwrap();

    assert_eq!(
        methods.fetch_by_name("Test0Param").unwrap(),
        &Method::new("Test0Param", vec![], XsdType::create("TestResponse"))
    );
    assert_eq!(
        methods.fetch_by_name("TestReturnList").unwrap(),
        &Method::new("TestReturnList", vec![], XsdType::create("array"))
    );

    let simple = XsdType::create("simpleType").with_base_type("string");
    assert_eq!(
        methods.fetch_by_name("TestSimpleType").unwrap(),
        &Method::new(
            "TestSimpleType",
            vec![Parameter::new("parameter1", simple.clone())],
            simple
        )
    );
}

#[test]
fn test_extracted_types() {
    let client = client();
    let metadata = ExtSoapMetadata::new(&client);
    let types = metadata.types().unwrap();
    metadata.methods().unwrap();

    let response = types.fetch_by_name("TestResponse").unwrap();
    assert_eq!(response.properties.len(), 1);
    assert_eq!(
        response.property("value").unwrap().xsd_type,
        XsdType::create("simpleType").with_base_type("string")
    );
    assert!(types.fetch_by_name("simpleType").is_err());
}
