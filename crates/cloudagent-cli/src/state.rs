//! Application state shared by every command.
//!
//! AppState holds the resolved configuration and data directory, and knows
//! how to open a session pinned to the concrete infra implementations.

use std::path::PathBuf;

use cloudagent_core::prompt::{Confirmer, Notifier};
use cloudagent_core::session::SessionStore;
use cloudagent_infra::config::load_client_config;
use cloudagent_infra::filesystem::{resolve_data_dir, FileTranscriptStorage};
use cloudagent_infra::gateway::HttpCommandGateway;
use cloudagent_types::config::ClientConfig;
use tracing::{debug, warn};

/// Session store pinned to the HTTP gateway and file storage.
pub type ConcreteSessionStore<N, C> = SessionStore<HttpCommandGateway, FileTranscriptStorage, N, C>;

/// Resolved configuration for this process.
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,
    pub data_dir: PathBuf,
    /// Account requested on the command line, if any.
    pub account: Option<String>,
}

impl AppState {
    /// Resolve the data directory and load `config.toml`, applying CLI overrides.
    pub async fn init(base_url: Option<String>, account: Option<String>) -> Self {
        Self::with_data_dir(resolve_data_dir(), base_url, account).await
    }

    /// Like [`AppState::init`] with an explicit data directory.
    ///
    /// An unusable directory only costs persistence: the session still opens
    /// and the transcript lives in memory.
    pub async fn with_data_dir(
        data_dir: PathBuf,
        base_url: Option<String>,
        account: Option<String>,
    ) -> Self {
        if let Err(e) = tokio::fs::create_dir_all(&data_dir).await {
            warn!(
                data_dir = %data_dir.display(),
                error = %e,
                "Data directory unavailable, chat history will not be saved"
            );
        }

        let mut config = load_client_config(&data_dir).await;
        if let Some(base_url) = base_url {
            config.base_url = base_url;
        }

        debug!(
            data_dir = %data_dir.display(),
            base_url = %config.base_url,
            accounts = config.accounts.len(),
            "Configuration loaded"
        );

        Self {
            config,
            data_dir,
            account,
        }
    }

    /// Restore the chat session with the given front-end collaborators.
    pub async fn open_session<N: Notifier, C: Confirmer>(
        &self,
        notifier: N,
        confirmer: C,
    ) -> anyhow::Result<ConcreteSessionStore<N, C>> {
        let gateway = HttpCommandGateway::from_config(&self.config)?;
        let storage = FileTranscriptStorage::new(&self.data_dir);
        let store = SessionStore::restore(gateway, storage, notifier, confirmer, &self.config).await;

        if let Some(account) = &self.account {
            store.select_scope(account)?;
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudagent_core::prompt::AlwaysConfirm;
    use cloudagent_core::session::store::GREETING;
    use cloudagent_types::message::Message;

    use crate::prompt::TerminalNotifier;

    #[tokio::test]
    async fn test_data_dir_under_regular_file_still_opens_session() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "plain file").unwrap();

        let state = AppState::with_data_dir(blocker.join("cloudagent"), None, None).await;
        assert_eq!(state.config.base_url, "http://localhost:8080");

        let store = state
            .open_session(TerminalNotifier, AlwaysConfirm)
            .await
            .unwrap();
        assert_eq!(store.messages(), vec![Message::bot(GREETING)]);
    }

    #[tokio::test]
    async fn test_overrides_applied() {
        let tmp = tempfile::tempdir().unwrap();
        let state = AppState::with_data_dir(
            tmp.path().to_path_buf(),
            Some("http://agent.local:9000".to_string()),
            Some("default".to_string()),
        )
        .await;
        assert_eq!(state.config.base_url, "http://agent.local:9000");

        let store = state
            .open_session(TerminalNotifier, AlwaysConfirm)
            .await
            .unwrap();
        assert_eq!(store.scope(), "default");
    }

    #[tokio::test]
    async fn test_unknown_account_fails_to_open() {
        let tmp = tempfile::tempdir().unwrap();
        let state =
            AppState::with_data_dir(tmp.path().to_path_buf(), None, Some("999".to_string())).await;
        assert!(state.open_session(TerminalNotifier, AlwaysConfirm).await.is_err());
    }
}
