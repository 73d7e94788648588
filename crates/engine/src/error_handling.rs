//! Normalization of native transport failures

use extsoap_engine_common::{EngineError, Result};

/// Maps whatever the native client reports into engine errors
pub struct ExtSoapErrorHandler;

impl ExtSoapErrorHandler {
    /// Flatten a transport failure, including its cause chain, into
    /// [`EngineError::InternalSoap`]
    pub fn handle_internal_errors<T>(result: anyhow::Result<T>) -> Result<T> {
        result.map_err(|e| EngineError::InternalSoap(format!("{:#}", e)))
    }

    /// A transport that produced nothing yields an empty payload
    pub fn handle_null_response(response: Option<String>) -> String {
        response.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn test_success_passes_through() {
        let result = ExtSoapErrorHandler::handle_internal_errors(Ok::<_, anyhow::Error>(3));
        assert_eq!(result, Ok(3));
    }

    #[test]
    fn test_failure_keeps_cause_chain() {
        let failure: anyhow::Result<()> = Err(anyhow!("connection reset"));
        let failure = failure.context("Could not connect to host");

        assert_eq!(
            ExtSoapErrorHandler::handle_internal_errors(failure),
            Err(EngineError::InternalSoap(
                "Could not connect to host: connection reset".to_string()
            ))
        );
    }

    #[test]
    fn test_null_response_is_empty() {
        assert_eq!(ExtSoapErrorHandler::handle_null_response(None), "");
        assert_eq!(
            ExtSoapErrorHandler::handle_null_response(Some("<env/>".to_string())),
            "<env/>"
        );
    }
}
