//! Observability setup for the cloud agent chat client.
//!
//! Structured logging through `tracing`, with optional OpenTelemetry span
//! export for local debugging of slow backend commands.

pub mod tracing_setup;
