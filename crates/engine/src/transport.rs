//! Transport executor seam

use crate::bridge::CaptureBridge;
use extsoap_engine_common::{NativeSoapClient, Result, SoapRequest, SoapResponse};

/// Executes a prepared SOAP request and returns the raw response
pub trait Transport {
    fn request(&self, request: &SoapRequest) -> Result<SoapResponse>;
}

impl<C: NativeSoapClient> Transport for CaptureBridge<C> {
    fn request(&self, request: &SoapRequest) -> Result<SoapResponse> {
        self.execute_actual_call(request).map(SoapResponse::new)
    }
}
