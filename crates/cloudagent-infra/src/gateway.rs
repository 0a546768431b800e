//! HttpCommandGateway -- concrete [`CommandGateway`] over HTTP.
//!
//! Sends `POST {base_url}/api/execute` with a JSON body of
//! `{"command": ..., "account_id": ...}` and classifies the outcome:
//!
//! | Outcome                              | Result                          |
//! |--------------------------------------|---------------------------------|
//! | 2xx                                  | decoded body (JSON or string)   |
//! | non-2xx                              | `Backend { status, detail }`    |
//! | wait exceeded                        | `Timeout { after_secs }`        |
//! | refused / unreachable / reset        | `NoResponse`                    |
//! | request could not be built           | `RequestSetup { message }`      |
//!
//! One attempt per call. Retrying is left to the operator.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{Instrument, debug, info_span, warn};

use cloudagent_core::gateway::CommandGateway;
use cloudagent_types::command::ExecuteRequest;
use cloudagent_types::config::ClientConfig;
use cloudagent_types::error::{GatewayError, UNKNOWN_BACKEND_DETAIL};

use crate::config::resolve_request_timeout;

/// Command gateway talking to the agent backend over HTTP.
pub struct HttpCommandGateway {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpCommandGateway {
    /// Path of the execution endpoint, relative to the base URL.
    const EXECUTE_PATH: &'static str = "/api/execute";

    /// Create a gateway for `base_url` with the given bounded wait.
    ///
    /// The URL itself is not validated here; a malformed URL surfaces as
    /// [`GatewayError::RequestSetup`] on the first `execute`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::RequestSetup {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Create a gateway from the client configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, GatewayError> {
        Self::new(config.base_url.clone(), resolve_request_timeout(config))
    }

    /// Full URL of the execution endpoint.
    fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), Self::EXECUTE_PATH)
    }

    /// Map a transport-level failure onto the gateway taxonomy.
    fn classify(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout {
                after_secs: self.timeout.as_secs(),
            }
        } else if err.is_builder() {
            GatewayError::RequestSetup {
                message: err.to_string(),
            }
        } else {
            debug!(error = %err, "No response from backend");
            GatewayError::no_response()
        }
    }

    async fn send(&self, body: &ExecuteRequest) -> Result<Value, GatewayError> {
        let response = self
            .client
            .post(self.url())
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            // The status line arrived, so this is still the backend's answer.
            Err(e) if !status.is_success() => {
                warn!(status = status.as_u16(), error = %e, "Backend error body unreadable");
                return Err(GatewayError::Backend {
                    status: status.as_u16(),
                    detail: UNKNOWN_BACKEND_DETAIL.to_string(),
                });
            }
            Err(e) => return Err(self.classify(e)),
        };

        if !status.is_success() {
            let detail = extract_detail(&bytes);
            warn!(status = status.as_u16(), detail = %detail, "Backend rejected command");
            return Err(GatewayError::Backend {
                status: status.as_u16(),
                detail,
            });
        }

        debug!(status = status.as_u16(), bytes = bytes.len(), "Backend answered");
        Ok(decode_body(&bytes))
    }
}

impl CommandGateway for HttpCommandGateway {
    async fn execute(&self, command: &str, scope: Option<&str>) -> Result<Value, GatewayError> {
        let body = ExecuteRequest::new(command, scope);

        let span = info_span!(
            "gateway.execute",
            http.request.method = "POST",
            url.full = %self.url(),
            account_id = ?scope,
            command.len = command.len(),
        );

        self.send(&body).instrument(span).await
    }
}

/// Pick a human-readable reason out of an error response body.
///
/// Prefers `detail`, then `message`. Non-string values (e.g. validation
/// error lists) are rendered as compact JSON.
fn extract_detail(body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return UNKNOWN_BACKEND_DETAIL.to_string();
    };

    ["detail", "message"]
        .iter()
        .filter_map(|field| value.get(*field))
        .find(|v| !v.is_null())
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| UNKNOWN_BACKEND_DETAIL.to_string())
}

/// Decode a success body: JSON when it parses, otherwise the raw text.
fn decode_body(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
