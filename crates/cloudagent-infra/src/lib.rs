//! Infrastructure layer for the cloud agent chat client.
//!
//! Contains implementations of the port traits defined in `cloudagent-core`:
//! the reqwest-backed command gateway, file-backed transcript storage, and
//! the `config.toml` loader.

pub mod config;
pub mod filesystem;
pub mod gateway;
