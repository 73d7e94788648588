//! WSDL location resolution for the ExtSoap engine
//!
//! Turns a possibly remote WSDL location into a local file path before any
//! transport is constructed.
//!
//! # Examples
//!
//! ```no_run
//! use extsoap_engine_wsdl::{StreamWsdlLoader, WsdlCacheProvider, WsdlProvider};
//!
//! let provider =
//!     WsdlCacheProvider::new(StreamWsdlLoader::new()).with_cache_dir("/var/cache/wsdl");
//! let path = provider.provide("https://example.com/service?wsdl").expect("resolve failed");
//!
//! // Refresh a stale copy without changing where it lives
//! let refreshed = provider.force_download().provide("https://example.com/service?wsdl");
//! ```

mod cache_provider;
mod config;
mod loader;
mod local_provider;
mod naming;
mod temporary_provider;

pub use cache_provider::WsdlCacheProvider;
pub use config::WsdlCacheConfig;
pub use loader::{StreamWsdlLoader, WsdlLoader};
pub use local_provider::LocalWsdlProvider;
pub use naming::{Md5Strategy, NamingStrategy};
pub use temporary_provider::TemporaryWsdlProvider;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or caching a WSDL
#[derive(Debug, Error)]
pub enum WsdlError {
    #[error("Could not load WSDL from location \"{location}\": {reason}")]
    Load { location: String, reason: String },

    #[error("Cache I/O failure on \"{}\": {reason}", .path.display())]
    CacheIo {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("File \"{}\" is already locked", .path.display())]
    LockContention { path: PathBuf },

    #[error("WSDL file \"{}\" does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid WSDL cache configuration: {0}")]
    Configuration(String),
}

impl WsdlError {
    /// Another writer holds the cache file; retrying later may succeed
    pub fn is_lock_contention(&self) -> bool {
        matches!(self, WsdlError::LockContention { .. })
    }

    pub(crate) fn cache_io(path: &Path, reason: &str, source: io::Error) -> Self {
        WsdlError::CacheIo {
            path: path.to_path_buf(),
            reason: reason.to_string(),
            source: Some(source),
        }
    }

    pub(crate) fn cache_state(path: &Path, reason: &str) -> Self {
        WsdlError::CacheIo {
            path: path.to_path_buf(),
            reason: reason.to_string(),
            source: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WsdlError>;

/// Turns a WSDL location into a path on the local filesystem
pub trait WsdlProvider {
    fn provide(&self, location: &str) -> Result<PathBuf>;
}
