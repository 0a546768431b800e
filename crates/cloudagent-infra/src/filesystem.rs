//! Filesystem adapters for the chat client.
//!
//! Implements the `TranscriptStorage` trait from `cloudagent-core` with one
//! JSON file per storage key, and resolves the client's data directory.

use std::path::PathBuf;

use cloudagent_core::storage::TranscriptStorage;
use cloudagent_types::error::PersistenceError;

/// File-backed storage: key `k` lives in `{dir}/k.json`.
///
/// All operations go through `tokio::fs` for async I/O.
pub struct FileTranscriptStorage {
    dir: PathBuf,
}

impl FileTranscriptStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Compute the file path for a storage key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(PersistenceError::Write(format!("invalid storage key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl TranscriptStorage for FileTranscriptStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::Read(format!("{}: {err}", path.display()))),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::Write(format!("{}: {e}", parent.display())))?;
        }
        tokio::fs::write(&path, value)
            .await
            .map_err(|e| PersistenceError::Write(format!("{}: {e}", path.display())))
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `CLOUDAGENT_DATA_DIR` environment variable
/// 2. `~/.cloudagent` under the home directory
/// 3. `.cloudagent` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CLOUDAGENT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".cloudagent");
    }

    PathBuf::from(".cloudagent")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudagent_core::storage::TRANSCRIPT_KEY;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_missing_key_returns_none() {
        let dir = tempdir().unwrap();
        let storage = FileTranscriptStorage::new(dir.path());
        assert_eq!(storage.read(TRANSCRIPT_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let storage = FileTranscriptStorage::new(dir.path());

        storage
            .write(TRANSCRIPT_KEY, r#"[{"sender":"bot","text":"hi"}]"#)
            .await
            .unwrap();
        let content = storage.read(TRANSCRIPT_KEY).await.unwrap();
        assert_eq!(content.as_deref(), Some(r#"[{"sender":"bot","text":"hi"}]"#));
        assert!(dir.path().join("cloud_agent_messages.json").exists());
    }

    #[tokio::test]
    async fn test_write_replaces_previous_value() {
        let dir = tempdir().unwrap();
        let storage = FileTranscriptStorage::new(dir.path());

        storage.write(TRANSCRIPT_KEY, "[1]").await.unwrap();
        storage.write(TRANSCRIPT_KEY, "[2]").await.unwrap();
        assert_eq!(storage.read(TRANSCRIPT_KEY).await.unwrap().as_deref(), Some("[2]"));
    }

    #[tokio::test]
    async fn test_write_creates_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let storage = FileTranscriptStorage::new(&nested);

        storage.write(TRANSCRIPT_KEY, "[]").await.unwrap();
        assert!(nested.join("cloud_agent_messages.json").exists());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let storage = FileTranscriptStorage::new(dir.path());

        assert!(storage.write("../escape", "x").await.is_err());
        assert!(storage.read("a/b").await.is_err());
        assert!(storage.write("", "x").await.is_err());
    }

    #[tokio::test]
    async fn test_unreadable_record_is_read_error() {
        let dir = tempdir().unwrap();
        let storage = FileTranscriptStorage::new(dir.path());
        // A directory where the file should be makes the read fail.
        std::fs::create_dir_all(dir.path().join("cloud_agent_messages.json")).unwrap();

        let err = storage.read(TRANSCRIPT_KEY).await.unwrap_err();
        assert!(matches!(err, PersistenceError::Read(_)));
    }
}
