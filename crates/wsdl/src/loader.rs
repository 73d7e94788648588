//! Raw WSDL fetching

use crate::{Result, WsdlError};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Fetches the raw WSDL document behind a location
pub trait WsdlLoader: Send + Sync {
    fn load(&self, location: &str) -> Result<String>;
}

/// Loads WSDL documents from HTTP(S) URLs, `file://` URLs and plain paths
#[derive(Debug, Clone, Default)]
pub struct StreamWsdlLoader {
    timeout: Option<Duration>,
}

impl StreamWsdlLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the duration of HTTP fetches
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn load_http(&self, location: &str, url: Url) -> Result<String> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| load_error(location, e))?;

        tracing::debug!("Fetching WSDL over HTTP from {}", url);
        client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| load_error(location, e))
    }

    fn load_file(&self, location: &str, path: &Path) -> Result<String> {
        tracing::debug!("Reading WSDL from {}", path.display());
        fs::read_to_string(path).map_err(|e| load_error(location, e))
    }
}

impl WsdlLoader for StreamWsdlLoader {
    fn load(&self, location: &str) -> Result<String> {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.load_http(location, url),
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| load_error(location, "not a valid file URL"))?;
                self.load_file(location, &path)
            }
            // Relative paths, or drive letters that parse as a scheme
            _ => self.load_file(location, Path::new(location)),
        }
    }
}

fn load_error(location: &str, reason: impl ToString) -> WsdlError {
    WsdlError::Load {
        location: location.to_string(),
        reason: reason.to_string(),
    }
}
