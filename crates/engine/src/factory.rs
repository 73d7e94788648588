//! Construction of a bridge around a freshly connected native client

use crate::bridge::CaptureBridge;
use anyhow::Context;
use extsoap_engine_common::NativeSoapClient;
use extsoap_engine_wsdl::WsdlProvider;
use std::path::Path;

/// Resolves the WSDL before the native client exists
pub struct ExtSoapEngineFactory;

impl ExtSoapEngineFactory {
    /// Resolve `wsdl` through `provider` and connect a native client to the local copy
    ///
    /// `connect` receives the local WSDL path; the client it returns is wrapped
    /// in an idle [`CaptureBridge`].
    pub fn from_provider<C, F>(
        provider: &dyn WsdlProvider,
        wsdl: &str,
        connect: F,
    ) -> anyhow::Result<CaptureBridge<C>>
    where
        C: NativeSoapClient,
        F: FnOnce(&Path) -> anyhow::Result<C>,
    {
        let path = provider
            .provide(wsdl)
            .with_context(|| format!("Failed to resolve WSDL {}", wsdl))?;
        tracing::debug!("Resolved WSDL {} to {}", wsdl, path.display());

        let client = connect(&path)
            .with_context(|| format!("Failed to connect native client to {}", path.display()))?;
        Ok(CaptureBridge::new(client))
    }
}
