//! Request capture bridge
//!
//! A native SOAP client builds envelopes and decodes responses in a single
//! call path. The bridge splits that path in two: the first pass captures the
//! outbound envelope instead of sending it, and after the real call has been
//! executed elsewhere, a second pass replays the registered response so the
//! client can decode it.
//!
//! State lives in the bridge instance and is only cleared by [`CaptureBridge::reset`].

use crate::error_handling::ExtSoapErrorHandler;
use extsoap_engine_common::{
    EngineError, LastRequestInfo, NativeSoapClient, Result, SoapRequest, SoapResponse,
};
use std::cell::RefCell;

/// Where the bridge is in the capture/replay cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// Nothing captured
    Idle,
    /// A request was captured and no response is registered yet
    Captured,
    /// A response is registered and will be replayed
    Fulfilled,
}

#[derive(Debug, Default)]
struct Slots {
    stored_request: Option<SoapRequest>,
    stored_response: Option<SoapResponse>,
    last_request: String,
    last_response: String,
}

/// Wraps a native client and intercepts its outbound calls
///
/// Not safe for concurrent calls: one instance serves one call at a time.
#[derive(Debug)]
pub struct CaptureBridge<C> {
    client: C,
    slots: RefCell<Slots>,
}

impl<C: NativeSoapClient> CaptureBridge<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            slots: RefCell::new(Slots::default()),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_inner(self) -> C {
        self.client
    }

    pub fn state(&self) -> BridgeState {
        let slots = self.slots.borrow();
        match (&slots.stored_request, &slots.stored_response) {
            (_, Some(_)) => BridgeState::Fulfilled,
            (Some(_), None) => BridgeState::Captured,
            (None, None) => BridgeState::Idle,
        }
    }

    /// Hook the native client calls instead of sending
    ///
    /// Stores the request and answers with the registered response payload,
    /// or with an empty string while no response is registered.
    pub fn on_outbound_call(&self, request: SoapRequest) -> String {
        let mut slots = self.slots.borrow_mut();
        tracing::debug!(
            "Captured {} request for action \"{}\" to {}",
            request.version(),
            request.action(),
            request.location()
        );
        slots.stored_request = Some(request);

        slots
            .stored_response
            .as_ref()
            .map(|response| response.payload().to_string())
            .unwrap_or_default()
    }

    /// The request captured by the last outbound call
    pub fn collect_request(&self) -> Result<SoapRequest> {
        self.slots
            .borrow()
            .stored_request
            .clone()
            .ok_or(EngineError::NoRequestCaptured)
    }

    /// Store the response the next outbound call will be answered with
    pub fn register_response(&self, response: SoapResponse) {
        self.slots.borrow_mut().stored_response = Some(response);
    }

    /// Drop the captured request and the registered response
    pub fn reset(&self) {
        let mut slots = self.slots.borrow_mut();
        slots.stored_request = None;
        slots.stored_response = None;
    }

    /// Send the request over the native transport and return the raw response
    ///
    /// Transport failures surface as [`EngineError::InternalSoap`]; a missing
    /// response becomes an empty string.
    pub fn execute_actual_call(&self, request: &SoapRequest) -> Result<String> {
        self.slots.borrow_mut().last_request = request.payload().to_string();

        let response = ExtSoapErrorHandler::handle_internal_errors(self.client.send_raw(request))
            .inspect_err(|e| {
                tracing::debug!("Native call to {} failed: {}", request.location(), e)
            })?;
        let response = ExtSoapErrorHandler::handle_null_response(response);

        self.slots.borrow_mut().last_response = response.clone();
        Ok(response)
    }

    /// Drive one call through capture, execution and replay
    ///
    /// `native_call` stands for the native client's own call path. It is run
    /// twice: once to capture the envelope and once to decode the replayed
    /// response. The value of the second run is returned.
    pub fn process_call<T>(&self, mut native_call: impl FnMut(&Self) -> T) -> Result<T> {
        self.reset();
        native_call(self);

        let response = match self
            .collect_request()
            .and_then(|request| self.execute_actual_call(&request))
        {
            Ok(response) => response,
            Err(e) => {
                self.reset();
                return Err(e);
            }
        };
        self.register_response(SoapResponse::new(response));

        let decoded = native_call(self);
        self.reset();
        Ok(decoded)
    }

    pub fn last_request(&self) -> String {
        self.slots.borrow().last_request.clone()
    }

    pub fn last_response(&self) -> String {
        self.slots.borrow().last_response.clone()
    }

    pub fn last_request_info(&self) -> LastRequestInfo {
        let slots = self.slots.borrow();
        LastRequestInfo::new(
            self.client.last_request_headers(),
            slots.last_request.as_str(),
            self.client.last_response_headers(),
            slots.last_response.as_str(),
        )
    }
}
