//! User-facing collaborator traits: transient notifications and yes/no
//! confirmation. The CLI provides terminal implementations; tests use doubles.

/// Shows a transient, one-shot message to the operator. No acknowledgment.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Asks the operator a yes/no question and waits for the answer.
///
/// Async so an interactive front-end can route the question through its
/// own input loop instead of blocking the runtime.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &str) -> impl std::future::Future<Output = bool> + Send;
}

/// Confirmer that always answers yes (e.g. `clear --force`).
pub struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
