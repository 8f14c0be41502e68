//! ResourceProvider trait for abstracting asset loading.
//!
//! Template assets (images, vector art, font files, barcode symbol
//! libraries) are looked up through this trait so the compiler is not
//! tied to filesystem access.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for asset loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A source of template assets, keyed by logical path.
///
/// Implementations cover the local filesystem, pre-populated memory
/// (tests, embedded deployments) and decorators such as URL-prefix
/// stripping.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Loads an asset by its logical path.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Returns `true` if the asset exists and can be loaded.
    fn exists(&self, path: &str) -> bool;

    /// A human-readable name for this provider, for logging.
    fn name(&self) -> &'static str;
}

/// An in-memory provider. Assets are registered up front; works in any
/// environment, including tests and WASM.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: std::sync::RwLock<std::collections::HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an asset under the given logical path.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is
    /// poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path = path.into();
        let mut resources = self.resources.write().map_err(|_| ResourceError::LoadFailed {
            path: path.clone(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources.insert(path, Arc::new(data));
        Ok(())
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self.resources.read().map_err(|_| ResourceError::LoadFailed {
            path: path.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_load() {
        let provider = InMemoryResourceProvider::new();
        provider.add("logo.svg", b"<svg/>".to_vec()).unwrap();

        assert_eq!(&*provider.load("logo.svg").unwrap(), b"<svg/>");
        assert!(provider.exists("logo.svg"));
    }

    #[test]
    fn missing_asset_is_not_found() {
        let provider = InMemoryResourceProvider::new();
        assert!(matches!(
            provider.load("ghost.png"),
            Err(ResourceError::NotFound(_))
        ));
        assert!(!provider.exists("ghost.png"));
    }

    #[test]
    fn later_add_overwrites() {
        let provider = InMemoryResourceProvider::new();
        provider.add("a.bin", b"old".to_vec()).unwrap();
        provider.add("a.bin", b"new".to_vec()).unwrap();
        assert_eq!(&*provider.load("a.bin").unwrap(), b"new");
    }
}
