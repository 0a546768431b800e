//! Business logic and port trait definitions for the cloud agent chat client.
//!
//! This crate defines the "ports" (gateway, storage, notification and
//! confirmation traits) that the infrastructure and CLI layers implement,
//! plus the session controller that drives a chat transcript through them.
//! It depends only on `cloudagent-types` -- never on `cloudagent-infra` or
//! any HTTP/filesystem crate.

pub mod gateway;
pub mod prompt;
pub mod session;
pub mod storage;
