//! Shared domain types for the cloud agent chat client.
//!
//! This crate contains the types passed between the session controller, the
//! command gateway, and the CLI: transcript messages, command payloads and
//! results, client configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod command;
pub mod config;
pub mod error;
pub mod message;
