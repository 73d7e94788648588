//! Permanent on-disk WSDL cache
//!
//! Cached files live at `cache_dir / naming(location)`. Writers take an
//! exclusive, non-blocking OS lock on the cache file for the whole write, so
//! processes sharing a cache directory never interleave writes into the same
//! file. A writer that finds the file locked fails with
//! [`WsdlError::LockContention`] instead of waiting.

use crate::loader::WsdlLoader;
use crate::naming::{Md5Strategy, NamingStrategy};
use crate::{Result, WsdlError, WsdlProvider};
use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolves WSDL locations to permanently cached local files
#[derive(Clone)]
pub struct WsdlCacheProvider {
    loader: Arc<dyn WsdlLoader>,
    naming: Arc<dyn NamingStrategy>,
    cache_dir: PathBuf,
    download_forced: bool,
}

impl WsdlCacheProvider {
    /// Provider caching into the system temp directory with [`Md5Strategy`] names
    pub fn new(loader: impl WsdlLoader + 'static) -> Self {
        Self::with_shared_loader(Arc::new(loader))
    }

    pub fn with_shared_loader(loader: Arc<dyn WsdlLoader>) -> Self {
        Self {
            loader,
            naming: Arc::new(Md5Strategy),
            cache_dir: std::env::temp_dir(),
            download_forced: false,
        }
    }

    pub fn with_naming_strategy(mut self, naming: impl NamingStrategy + 'static) -> Self {
        self.naming = Arc::new(naming);
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    /// Copy of this provider that always downloads, even when a cached file exists
    ///
    /// The copy keeps the naming strategy and cache directory, so it refreshes
    /// the very file the original provider serves.
    pub fn force_download(&self) -> Self {
        Self {
            download_forced: true,
            ..self.clone()
        }
    }

    pub fn is_download_forced(&self) -> bool {
        self.download_forced
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Where the cached copy of `location` lives
    pub fn cache_path(&self, location: &str) -> PathBuf {
        self.cache_dir.join(self.naming.name(location))
    }

    pub fn resolve(&self, location: &str) -> Result<PathBuf> {
        let file = self.cache_path(location);

        // Stat fresh on every call; std keeps no stat cache to invalidate
        let metadata = match fs::metadata(&file) {
            Ok(metadata) => Some(metadata),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(WsdlError::cache_io(&file, "could not inspect file", e)),
        };

        if let Some(metadata) = &metadata {
            // An empty file is what an in-flight or crashed writer leaves behind
            if !self.download_forced && metadata.is_file() && metadata.len() > 0 {
                tracing::debug!("Serving cached WSDL {} for {}", file.display(), location);
                return Ok(file);
            }

            if !metadata.is_file() {
                return Err(WsdlError::cache_state(&file, "path does not point to a file"));
            }

            if metadata.permissions().readonly() {
                return Err(WsdlError::cache_state(&file, "file is not writable"));
            }
        }

        self.download(&file, location)?;
        Ok(file)
    }

    /// Fetch and write `location` into `file` under an exclusive lock
    fn download(&self, file: &Path, location: &str) -> Result<()> {
        // Truncation waits until the lock is held and the content is in hand
        let mut handle = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(file)
            .map_err(|e| WsdlError::cache_io(file, "could not open file for writing", e))?;

        match handle.try_lock() {
            Ok(()) => {}
            Err(TryLockError::WouldBlock) => {
                tracing::debug!("Cache file {} is locked by another writer", file.display());
                return Err(WsdlError::LockContention {
                    path: file.to_path_buf(),
                });
            }
            Err(TryLockError::Error(e)) => {
                return Err(WsdlError::cache_io(
                    file,
                    "could not acquire exclusive lock",
                    e,
                ))
            }
        }

        // A writer that failed may have unlinked the file between our open and lock
        if !still_linked(&handle, file) {
            tracing::debug!("Cache file {} was replaced while locking", file.display());
            return Err(WsdlError::LockContention {
                path: file.to_path_buf(),
            });
        }

        tracing::debug!("Downloading WSDL {} into {}", location, file.display());
        let content = match self.loader.load(location) {
            Ok(content) => content,
            Err(e) => {
                discard_if_empty(&handle, file);
                return Err(e);
            }
        };

        if let Err(e) = store(&mut handle, content.as_bytes()) {
            discard_if_empty(&handle, file);
            return Err(WsdlError::cache_io(file, "could not write file", e));
        }

        // Closing the handle releases the lock
        drop(handle);
        tracing::debug!("Cached WSDL {} ({} bytes)", file.display(), content.len());
        Ok(())
    }
}

/// What the cache writes through; [`File`] in production
trait CacheFile: Write {
    fn set_len(&self, size: u64) -> io::Result<()>;
    fn sync_all(&self) -> io::Result<()>;
}

impl CacheFile for File {
    fn set_len(&self, size: u64) -> io::Result<()> {
        File::set_len(self, size)
    }

    fn sync_all(&self) -> io::Result<()> {
        File::sync_all(self)
    }
}

/// Replace the file content, leaving it empty if the write does not complete
fn store<F: CacheFile>(handle: &mut F, content: &[u8]) -> io::Result<()> {
    let result = write_content(handle, content);
    if result.is_err() {
        if let Err(e) = handle.set_len(0) {
            tracing::warn!("Could not truncate partially written cache file: {}", e);
        }
    }
    result
}

fn write_content<F: CacheFile>(handle: &mut F, content: &[u8]) -> io::Result<()> {
    handle.set_len(0)?;
    handle.write_all(content)?;
    handle.sync_all()
}

/// The locked handle still refers to what `file` names on disk
#[cfg(unix)]
fn still_linked(handle: &File, file: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (handle.metadata(), fs::metadata(file)) {
        (Ok(locked), Ok(named)) => locked.dev() == named.dev() && locked.ino() == named.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn still_linked(_handle: &File, file: &Path) -> bool {
    file.is_file()
}

/// Remove a cache file that never received content, while still holding its lock
fn discard_if_empty(handle: &File, file: &Path) {
    let is_empty = handle.metadata().map(|m| m.len() == 0).unwrap_or(false);
    if !is_empty {
        return;
    }
    if let Err(e) = fs::remove_file(file) {
        tracing::warn!("Could not remove abandoned cache file {}: {}", file.display(), e);
    }
}

impl WsdlProvider for WsdlCacheProvider {
    fn provide(&self, location: &str) -> Result<PathBuf> {
        self.resolve(location)
    }
}

impl std::fmt::Debug for WsdlCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WsdlCacheProvider")
            .field("cache_dir", &self.cache_dir)
            .field("download_forced", &self.download_forced)
            .finish_non_exhaustive()
    }
}
