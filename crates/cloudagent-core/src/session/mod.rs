//! Chat session controller.
//!
//! `SessionStore` owns the transcript, the pending flag, the draft input and
//! the selected account scope. Every mutation of the transcript ends with an
//! explicit persist step.

pub mod normalize;
pub mod store;

pub use normalize::normalize_result;
pub use store::{SessionStore, SubmitOutcome};
