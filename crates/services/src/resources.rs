use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Lookup of bundled, named resources.
///
/// Absence is an ordinary outcome: a missing or unreadable resource yields
/// `None`, never an error.
pub trait ResourceProvider {
    fn load_bytes(&self, name: &str) -> Option<Vec<u8>>;
}

/// Resources read from a directory on disk, one file per name.
#[derive(Debug, Clone)]
pub struct BundleDirectory {
    root: PathBuf,
}

impl BundleDirectory {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Only bare file names resolve; anything that could leave the bundle does not.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Some(self.root.join(file)),
            _ => None,
        }
    }
}

impl ResourceProvider for BundleDirectory {
    fn load_bytes(&self, name: &str) -> Option<Vec<u8>> {
        let Some(path) = self.resolve(name) else {
            tracing::warn!(name, "rejected resource name outside bundle");
            return None;
        };

        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "resource not found");
                None
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read resource");
                None
            }
        }
    }
}

/// Resources compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    entries: HashMap<String, &'static [u8]>,
}

impl EmbeddedResources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, bytes: &'static [u8]) -> Self {
        self.entries.insert(name.into(), bytes);
        self
    }
}

impl ResourceProvider for EmbeddedResources {
    fn load_bytes(&self, name: &str) -> Option<Vec<u8>> {
        self.entries.get(name).map(|bytes| bytes.to_vec())
    }
}
