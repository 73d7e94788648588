//! Single-use WSDL files in a temporary directory

use crate::loader::WsdlLoader;
use crate::{Result, WsdlError, WsdlProvider};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Writes every loaded WSDL to a fresh, uniquely named temporary file
///
/// Nothing is reused between calls and the files are left for the caller
/// to remove.
#[derive(Clone)]
pub struct TemporaryWsdlProvider {
    loader: Arc<dyn WsdlLoader>,
    dir: PathBuf,
}

impl TemporaryWsdlProvider {
    pub fn new(loader: impl WsdlLoader + 'static) -> Self {
        Self {
            loader: Arc::new(loader),
            dir: std::env::temp_dir(),
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }
}

impl WsdlProvider for TemporaryWsdlProvider {
    fn provide(&self, location: &str) -> Result<PathBuf> {
        let content = self.loader.load(location)?;

        let mut file = tempfile::Builder::new()
            .prefix("extsoapwsdl")
            .suffix(".wsdl")
            .tempfile_in(&self.dir)
            .map_err(|e| WsdlError::cache_io(&self.dir, "could not create temporary file", e))?;

        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| WsdlError::cache_io(file.path(), "could not write file", e))?;

        let (_, path) = file.keep().map_err(|e| {
            WsdlError::cache_io(&self.dir, "could not keep temporary file", e.error)
        })?;

        tracing::debug!("Wrote WSDL {} to {}", location, path.display());
        Ok(path)
    }
}
