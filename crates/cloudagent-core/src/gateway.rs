//! CommandGateway trait definition.
//!
//! One outbound request/response exchange with the remote agent. The HTTP
//! implementation lives in `cloudagent-infra` (`HttpCommandGateway`).

use cloudagent_types::error::GatewayError;

/// Sends one operator command to the agent backend.
///
/// Implementations make a single attempt (no retries) and classify every
/// failure into a [`GatewayError`]. On success the decoded response body is
/// returned unmodified; shaping it for display is the session's job.
pub trait CommandGateway: Send + Sync {
    fn execute(
        &self,
        command: &str,
        scope: Option<&str>,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, GatewayError>> + Send;
}
