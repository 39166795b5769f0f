use async_trait::async_trait;

/// Sink for user-facing notifications.
///
/// The implementation decides how a message is displayed (toast, banner,
/// ...); the core only emits the two registration outcomes.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn registration_succeeded(&self, message: &str) -> anyhow::Result<()>;
    async fn registration_failed(&self, message: &str) -> anyhow::Result<()>;
}
