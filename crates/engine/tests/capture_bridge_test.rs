//! Integration test for the request capture bridge

use anyhow::anyhow;
use extsoap_engine::{
    BridgeState, CaptureBridge, EngineError, LastRequestInfo, NativeSoapClient, SoapRequest,
    SoapResponse, SoapVersion, Transport,
};
use mockall::mock;
use mockall::predicate::function;

mock! {
    pub Client {}

    impl NativeSoapClient for Client {
        fn send_raw(&self, request: &SoapRequest) -> anyhow::Result<Option<String>>;
        fn exposed_method_signatures(&self) -> Vec<String>;
        fn exposed_type_signatures(&self) -> Vec<String>;
        fn last_request_headers(&self) -> String;
        fn last_response_headers(&self) -> String;
    }
}

fn request(payload: &str) -> SoapRequest {
    SoapRequest::new(
        payload,
        "http://localhost/weather",
        "urn:GetForecast",
        SoapVersion::Soap12,
        false,
    )
}

#[test]
fn test_collect_before_capture_fails() {
    let bridge = CaptureBridge::new(MockClient::new());
    assert_eq!(bridge.collect_request(), Err(EngineError::NoRequestCaptured));
}

#[test]
fn test_capture_never_touches_the_wire() {
    let mut client = MockClient::new();
    client.expect_send_raw().never();
    let bridge = CaptureBridge::new(client);

    let wire_result = bridge.on_outbound_call(request("<GetForecast/>"));

    assert_eq!(wire_result, "");
    assert_eq!(bridge.state(), BridgeState::Captured);

    let captured = bridge.collect_request().unwrap();
    assert_eq!(captured.payload(), "<GetForecast/>");
    assert_eq!(captured.location(), "http://localhost/weather");
    assert_eq!(captured.action(), "urn:GetForecast");
    assert_eq!(captured.version(), SoapVersion::Soap12);
    assert!(!captured.is_one_way());
}

#[test]
fn test_registered_response_is_replayed() {
    let bridge = CaptureBridge::new(MockClient::new());
    bridge.on_outbound_call(request("<GetForecast/>"));
    bridge.register_response(SoapResponse::new("<Forecast>sunny</Forecast>"));

    assert_eq!(
        bridge.on_outbound_call(request("<GetForecast/>")),
        "<Forecast>sunny</Forecast>"
    );
}

#[test]
fn test_reset_prevents_stale_responses() {
    let bridge = CaptureBridge::new(MockClient::new());
    bridge.on_outbound_call(request("<GetForecast/>"));
    bridge.register_response(SoapResponse::new("<Forecast>sunny</Forecast>"));

    bridge.reset();

    assert_eq!(bridge.state(), BridgeState::Idle);
    assert_eq!(bridge.collect_request(), Err(EngineError::NoRequestCaptured));
    assert_eq!(bridge.on_outbound_call(request("<GetAlerts/>")), "");
}

#[test]
fn test_execute_actual_call_sends_over_native_client() {
    let mut client = MockClient::new();
    client
        .expect_send_raw()
        .with(function(|r: &SoapRequest| r.payload() == "<GetForecast/>"))
        .times(1)
        .returning(|_| Ok(Some("<Forecast>rain</Forecast>".to_string())));
    let bridge = CaptureBridge::new(client);

    let response = bridge.execute_actual_call(&request("<GetForecast/>")).unwrap();

    assert_eq!(response, "<Forecast>rain</Forecast>");
    // Executing leaves the capture state alone
    assert_eq!(bridge.state(), BridgeState::Idle);
}

#[test]
fn test_execute_actual_call_coerces_missing_response() {
    let mut client = MockClient::new();
    client.expect_send_raw().times(1).returning(|_| Ok(None));
    let bridge = CaptureBridge::new(client);

    let one_way = SoapRequest::new(
        "<Notify/>",
        "http://localhost/weather",
        "urn:Notify",
        SoapVersion::Soap11,
        true,
    );

    assert_eq!(bridge.execute_actual_call(&one_way).unwrap(), "");
}

#[test]
fn test_execute_actual_call_normalizes_transport_errors() {
    let mut client = MockClient::new();
    client
        .expect_send_raw()
        .times(1)
        .returning(|_| Err(anyhow!("Could not connect to host")));
    let bridge = CaptureBridge::new(client);

    assert_eq!(
        bridge.execute_actual_call(&request("<GetForecast/>")),
        Err(EngineError::InternalSoap(
            "Could not connect to host".to_string()
        ))
    );
    assert_eq!(bridge.last_request(), "<GetForecast/>");
}

#[test]
fn test_last_request_info() {
    let mut client = MockClient::new();
    client
        .expect_send_raw()
        .returning(|_| Ok(Some("<Forecast>rain</Forecast>".to_string())));
    client
        .expect_last_request_headers()
        .return_const("POST /weather HTTP/1.1".to_string());
    client
        .expect_last_response_headers()
        .return_const("HTTP/1.1 200 OK".to_string());
    let bridge = CaptureBridge::new(client);

    bridge.execute_actual_call(&request("<GetForecast/>")).unwrap();

    assert_eq!(
        bridge.last_request_info(),
        LastRequestInfo::new(
            "POST /weather HTTP/1.1",
            "<GetForecast/>",
            "HTTP/1.1 200 OK",
            "<Forecast>rain</Forecast>",
        )
    );
}

#[test]
fn test_transport_wraps_response() {
    let mut client = MockClient::new();
    client
        .expect_send_raw()
        .times(1)
        .returning(|_| Ok(Some("<Forecast>fog</Forecast>".to_string())));
    let bridge = CaptureBridge::new(client);

    let response = bridge.request(&request("<GetForecast/>")).unwrap();
    assert_eq!(response, SoapResponse::new("<Forecast>fog</Forecast>"));
}

#[test]
fn test_full_call_cycle() {
    let mut client = MockClient::new();
    client
        .expect_send_raw()
        .times(1)
        .returning(|r| Ok(Some(format!("<Response>{}</Response>", r.payload()))));
    let bridge = CaptureBridge::new(client);

    let mut wire_results = Vec::new();
    let decoded = bridge
        .process_call(|bridge| {
            let wire_result = bridge.on_outbound_call(request("<GetForecast/>"));
            wire_results.push(wire_result.clone());
            wire_result.len()
        })
        .unwrap();

    assert_eq!(
        wire_results,
        vec![
            String::new(),
            "<Response><GetForecast/></Response>".to_string()
        ]
    );
    assert_eq!(decoded, "<Response><GetForecast/></Response>".len());
    assert_eq!(bridge.state(), BridgeState::Idle);
}
