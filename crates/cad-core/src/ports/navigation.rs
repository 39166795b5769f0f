use async_trait::async_trait;
use serde::Serialize;

/// Screens the core may request a transition to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Destination {
    Login,
}

/// Sink for navigation requests; the core asks for the transition but never
/// performs it.
#[async_trait]
pub trait NavigationPort: Send + Sync {
    async fn navigate_to(&self, destination: Destination) -> anyhow::Result<()>;
}
