//! Client configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.cloudagent/` in
//! production) and deserializes it into [`ClientConfig`]. Falls back to
//! sensible defaults when the file is missing or malformed.

use std::path::Path;
use std::time::Duration;

use cloudagent_types::config::ClientConfig;

/// Shortest request timeout accepted from configuration.
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ClientConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_client_config(data_dir: &Path) -> ClientConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
    }
}

/// Resolve the bounded wait for one command exchange.
///
/// A floor of one second is enforced so a zero in `config.toml` cannot turn
/// every command into an immediate timeout.
pub fn resolve_request_timeout(config: &ClientConfig) -> Duration {
    Duration::from_secs(config.request_timeout_secs.max(MIN_REQUEST_TIMEOUT_SECS))
}
