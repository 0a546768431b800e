//! Interactive terminal chat with the cloud agent.
//!
//! Renders the transcript, reads commands without blocking on in-flight
//! requests, and routes confirmation prompts through the same input line.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod collaborators;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
