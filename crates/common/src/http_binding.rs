//! SOAP request/response values exchanged with the transport

use crate::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// SOAP protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoapVersion {
    #[serde(rename = "1.1")]
    Soap11,
    #[serde(rename = "1.2")]
    Soap12,
}

impl SoapVersion {
    /// Numeric form used by native SOAP clients (1 for SOAP 1.1, 2 for SOAP 1.2)
    pub fn as_u8(self) -> u8 {
        match self {
            SoapVersion::Soap11 => 1,
            SoapVersion::Soap12 => 2,
        }
    }
}

impl TryFrom<u8> for SoapVersion {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(SoapVersion::Soap11),
            2 => Ok(SoapVersion::Soap12),
            other => Err(EngineError::UnexpectedConfiguration {
                key: "soap_version",
                expected: "1 or 2",
                actual: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SoapVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoapVersion::Soap11 => write!(f, "SOAP 1.1"),
            SoapVersion::Soap12 => write!(f, "SOAP 1.2"),
        }
    }
}

/// An outbound SOAP envelope together with its routing information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapRequest {
    payload: String,
    location: String,
    action: String,
    version: SoapVersion,
    one_way: bool,
}

impl SoapRequest {
    pub fn new(
        payload: impl Into<String>,
        location: impl Into<String>,
        action: impl Into<String>,
        version: SoapVersion,
        one_way: bool,
    ) -> Self {
        Self {
            payload: payload.into(),
            location: location.into(),
            action: action.into(),
            version,
            one_way,
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn version(&self) -> SoapVersion {
        self.version
    }

    pub fn is_one_way(&self) -> bool {
        self.one_way
    }
}

/// A raw SOAP response envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapResponse {
    payload: String,
}

impl SoapResponse {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn into_payload(self) -> String {
        self.payload
    }
}

/// Wire-level trace of the last executed call, for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastRequestInfo {
    pub request_headers: String,
    pub request: String,
    pub response_headers: String,
    pub response: String,
}

impl LastRequestInfo {
    pub fn new(
        request_headers: impl Into<String>,
        request: impl Into<String>,
        response_headers: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            request_headers: request_headers.into(),
            request: request.into(),
            response_headers: response_headers.into(),
            response: response.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soap_version_from_u8() {
        assert_eq!(SoapVersion::try_from(1), Ok(SoapVersion::Soap11));
        assert_eq!(SoapVersion::try_from(2), Ok(SoapVersion::Soap12));
        assert!(matches!(
            SoapVersion::try_from(3),
            Err(EngineError::UnexpectedConfiguration {
                key: "soap_version",
                ..
            })
        ));
        assert_eq!(SoapVersion::Soap12.as_u8(), 2);
    }

    #[test]
    fn test_request_accessors() {
        let request = SoapRequest::new(
            "<Envelope/>",
            "http://example.com/service",
            "urn:Ping",
            SoapVersion::Soap11,
            true,
        );
        assert_eq!(request.payload(), "<Envelope/>");
        assert_eq!(request.location(), "http://example.com/service");
        assert_eq!(request.action(), "urn:Ping");
        assert_eq!(request.version(), SoapVersion::Soap11);
        assert!(request.is_one_way());
    }

    #[test]
    fn test_empty_last_request_info() {
        let info = LastRequestInfo::empty();
        assert!(info.request.is_empty());
        assert!(info.response_headers.is_empty());
    }
}
