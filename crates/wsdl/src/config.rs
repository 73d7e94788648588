//! Serializable WSDL cache settings

use crate::cache_provider::WsdlCacheProvider;
use crate::loader::WsdlLoader;
use crate::{Result, WsdlError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for a [`WsdlCacheProvider`]
///
/// ```json
/// { "cache_dir": "/var/cache/wsdl", "force_download": false }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WsdlCacheConfig {
    /// Directory holding cached files; the system temp directory when unset
    pub cache_dir: Option<PathBuf>,
    /// Always re-download, refreshing any cached copy
    pub force_download: bool,
}

impl WsdlCacheConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| WsdlError::Configuration(e.to_string()))
    }

    pub fn build(&self, loader: impl WsdlLoader + 'static) -> WsdlCacheProvider {
        let mut provider = WsdlCacheProvider::new(loader);
        if let Some(cache_dir) = &self.cache_dir {
            provider = provider.with_cache_dir(cache_dir);
        }
        if self.force_download {
            provider = provider.force_download();
        }
        provider
    }
}
