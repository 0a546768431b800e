//! Durable key-value storage for the transcript.
//!
//! Mirrors a browser-style storage slot: one string value per key. The
//! session serializes the transcript itself; storage only moves strings.

use cloudagent_types::error::PersistenceError;

/// Storage key holding the serialized transcript.
pub const TRANSCRIPT_KEY: &str = "cloud_agent_messages";

/// Trait for durable string storage keyed by name.
///
/// Implementations live in `cloudagent-infra` (e.g., `FileTranscriptStorage`).
pub trait TranscriptStorage: Send + Sync {
    /// Read the value stored under `key`. Returns `None` if nothing is stored.
    fn read(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, PersistenceError>> + Send;

    /// Replace the value stored under `key`.
    fn write(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), PersistenceError>> + Send;
}
