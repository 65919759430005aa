use std::fmt;
use std::sync::Arc;

/// Opaque, cheaply clonable identifier naming a loadable asset — typically a
/// path or URI. Compared by value, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetHandle(Arc<str>);

impl AssetHandle {
    #[must_use]
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    #[inline]
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetHandle {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

impl From<String> for AssetHandle {
    fn from(uri: String) -> Self {
        Self::new(uri)
    }
}

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
