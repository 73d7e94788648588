//! WSDL files that already live on the local filesystem

use crate::{Result, WsdlError, WsdlProvider};
use std::path::{Path, PathBuf};

/// Passes local file locations through untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalWsdlProvider;

impl WsdlProvider for LocalWsdlProvider {
    fn provide(&self, location: &str) -> Result<PathBuf> {
        let path = Path::new(location);
        if !path.is_file() {
            return Err(WsdlError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(path.to_path_buf())
    }
}
