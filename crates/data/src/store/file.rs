use super::KeyValueStore;
use crate::error::StoreError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores each key as `<dir>/<key>.json`.
///
/// Keys are restricted to ASCII alphanumerics, `-` and `_` so they always map
/// to a single file inside the directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory of the store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        // Write then rename so readers never observe a partial file.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value.as_bytes()).await?;
        tokio::fs::rename(&tmp, &path).await?;

        debug!(key = key, path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("events").await.unwrap(), None);
        store.set("events", "[1]".to_owned()).await.unwrap();
        assert_eq!(store.get("events").await.unwrap().as_deref(), Some("[1]"));
        assert!(dir.path().join("nested/events.json").exists());

        store.set("events", "[2]".to_owned()).await.unwrap();
        assert_eq!(store.get("events").await.unwrap().as_deref(), Some("[2]"));

        assert!(store.remove("events").await.unwrap());
        assert!(!store.remove("events").await.unwrap());
    }

    #[tokio::test]
    async fn test_rejects_unsafe_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        for key in ["", "../events", "a/b", "a\\b", "tickets.0x1", "événements"] {
            assert!(
                matches!(store.get(key).await, Err(StoreError::InvalidKey(_))),
                "{key}"
            );
            assert!(matches!(
                store.set(key, String::new()).await,
                Err(StoreError::InvalidKey(_))
            ));
        }
    }
}
