//! Holds the base URL of the backend the relay forwards to.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Shared, in-memory backend endpoint. Clones observe the same value.
///
/// Every write replaces the whole value; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    endpoint: Arc<RwLock<Option<String>>>,
}

impl EndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(url: Option<String>) -> Self {
        Self {
            endpoint: Arc::new(RwLock::new(url)),
        }
    }

    pub async fn set_endpoint(&self, url: impl Into<String>) {
        let url = url.into();
        info!("Backend endpoint registered: {}", url);
        *self.endpoint.write().await = Some(url);
    }

    pub async fn clear(&self) {
        info!("Backend endpoint cleared");
        *self.endpoint.write().await = None;
    }

    /// Current endpoint. An empty string counts as unset.
    pub async fn endpoint(&self) -> Option<String> {
        self.endpoint
            .read()
            .await
            .as_ref()
            .filter(|url| !url.is_empty())
            .cloned()
    }
}
