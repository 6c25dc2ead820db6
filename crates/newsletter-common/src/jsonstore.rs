/// File-backed JSON document store with asymmetric failure semantics.
///
/// Reads degrade gracefully — a missing, unreadable, or corrupt document
/// reads as `None` with a warning log, and callers fall through to an empty
/// state. Writes return `Result` and propagate failures: silently dropping a
/// write would lose durable state the caller depends on.
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::CommonError;

/// A directory of JSON documents, one file per key.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the document for `name`. `name` must already be a safe
    /// file stem; this store does not sanitize it.
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Read and deserialize a document. Returns `None` if the file is absent,
    /// unreadable, or does not deserialize as `T`.
    pub fn read<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.document_path(name);
        if !path.exists() {
            return None;
        }
        let text = std::fs::read_to_string(&path)
            .inspect_err(|e| warn!(error = %e, path = %path.display(), "store read failed"))
            .ok()?;
        serde_json::from_str(&text)
            .inspect_err(|e| warn!(error = %e, path = %path.display(), "store deserialization failed"))
            .ok()
    }

    /// Serialize and write a document, creating the store directory if
    /// needed. Write failures propagate to the caller.
    pub fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), CommonError> {
        std::fs::create_dir_all(&self.root).map_err(|e| CommonError::StoreIo {
            path: self.root.display().to_string(),
            source: e,
        })?;
        let path = self.document_path(name);
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, json).map_err(|e| CommonError::StoreIo {
            path: path.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let value: Option<Vec<String>> = store.read("absent");
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nested"));
        let urls = vec!["https://a.com/".to_string(), "https://b.com/".to_string()];
        store.write("seen_news", &urls).unwrap();
        let loaded: Vec<String> = store.read("seen_news").unwrap();
        assert_eq!(loaded, urls);
    }

    #[test]
    fn test_read_corrupt_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        std::fs::write(store.document_path("seen_news"), "not json {").unwrap();
        let value: Option<Vec<String>> = store.read("seen_news");
        assert!(value.is_none());
    }

    #[test]
    fn test_read_wrong_shape_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        std::fs::write(store.document_path("seen_news"), r#"{"urls": []}"#).unwrap();
        let value: Option<Vec<String>> = store.read("seen_news");
        assert!(value.is_none());
    }
}
