//! URL-prefix stripping decorator.
//!
//! Templates produced by web frameworks reference assets by their
//! public URL (`/media/...`, `/static/...`). This decorator strips the
//! first matching configured prefix once and delegates the remainder
//! to an inner provider rooted at the actual asset directory.

use sheaf_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::sync::Arc;

#[derive(Debug)]
pub struct PrefixStripProvider {
    inner: Arc<dyn ResourceProvider>,
    prefixes: Vec<String>,
}

impl PrefixStripProvider {
    pub fn new(inner: Arc<dyn ResourceProvider>) -> Self {
        Self {
            inner,
            prefixes: Vec::new(),
        }
    }

    /// Adds a prefix to strip, e.g. `/media/` or `/static/`. Prefixes
    /// are tried in the order they were added; only the first match is
    /// stripped.
    pub fn strip(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    fn rewrite<'a>(&self, path: &'a str) -> &'a str {
        for prefix in &self.prefixes {
            if let Some(stripped) = path.strip_prefix(prefix.as_str()) {
                return stripped;
            }
        }
        path
    }
}

impl ResourceProvider for PrefixStripProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        self.inner.load(self.rewrite(path))
    }

    fn exists(&self, path: &str) -> bool {
        self.inner.exists(self.rewrite(path))
    }

    fn name(&self) -> &'static str {
        "PrefixStripProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheaf_traits::InMemoryResourceProvider;

    fn backing() -> Arc<InMemoryResourceProvider> {
        let inner = InMemoryResourceProvider::new();
        inner.add("img/logo.png", b"png".to_vec()).unwrap();
        Arc::new(inner)
    }

    #[test]
    fn strips_first_matching_prefix() {
        let provider = PrefixStripProvider::new(backing())
            .strip("/static/")
            .strip("/media/");

        assert!(provider.exists("/static/img/logo.png"));
        assert!(provider.exists("/media/img/logo.png"));
        assert_eq!(&*provider.load("/static/img/logo.png").unwrap(), b"png");
    }

    #[test]
    fn unprefixed_paths_pass_through() {
        let provider = PrefixStripProvider::new(backing()).strip("/static/");
        assert!(provider.exists("img/logo.png"));
        assert!(!provider.exists("/other/img/logo.png"));
    }

    #[test]
    fn prefix_is_stripped_once() {
        let inner = InMemoryResourceProvider::new();
        inner.add("/static/nested.png", b"x".to_vec()).unwrap();
        let provider = PrefixStripProvider::new(Arc::new(inner)).strip("/static/");

        // "/static//static/nested.png" -> "/static/nested.png"
        assert!(provider.exists("/static//static/nested.png"));
    }
}
