//! Cache file naming

use md5::{Digest, Md5};

/// Maps a WSDL location to a deterministic cache file name
pub trait NamingStrategy: Send + Sync {
    fn name(&self, location: &str) -> String;
}

/// `<hex md5 of the location>.wsdl`
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Strategy;

impl NamingStrategy for Md5Strategy {
    fn name(&self, location: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(location.as_bytes());
        format!("{}.wsdl", hex::encode(hasher.finalize()))
    }
}
