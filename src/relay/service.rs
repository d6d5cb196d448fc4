use super::{
    client::{BackendTransport, HttpTransport},
    types::RelayResponse,
};
use crate::{archive::VideoArchive, registry::EndpointRegistry, Error, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

const GENERATE_PATH: &str = "/api/generate";
const TEST_PATH: &str = "/api/test";

/// Forwards caller requests to whichever backend is currently registered.
pub struct Relay {
    registry: EndpointRegistry,
    transport: Arc<dyn BackendTransport>,
    archive: Option<VideoArchive>,
}

impl Relay {
    pub fn new(registry: EndpointRegistry) -> Self {
        Self::with_transport(registry, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(registry: EndpointRegistry, transport: Arc<dyn BackendTransport>) -> Self {
        Self {
            registry,
            transport,
            archive: None,
        }
    }

    pub fn with_archive(mut self, archive: VideoArchive) -> Self {
        self.archive = Some(archive);
        self
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Forwards `body` unchanged to `<endpoint>/api/generate`.
    ///
    /// Backend error statuses come back as `Ok` with the backend's status
    /// and body; only a missing endpoint or a failed exchange is an `Err`.
    pub async fn generate(&self, body: Value) -> Result<RelayResponse> {
        let endpoint = self.registry.endpoint().await.ok_or(Error::NotConnected)?;
        let url = format!("{}{}", endpoint, GENERATE_PATH);

        info!("Forwarding generation request to {}", url);

        let reply = self.transport.post_json(&url, &body).await?;
        let response = RelayResponse::from(reply);

        if !response.is_success() {
            warn!("Backend rejected generation request with status {}", response.status);
            return Ok(response);
        }

        if let Some(archive) = &self.archive {
            if let Err(e) = archive.store(&response.body).await {
                warn!("Failed to archive generated video: {}", e);
            }
        }

        Ok(response)
    }

    /// Probes `<endpoint>/api/test` and mirrors whatever it returns.
    pub async fn test_connection(&self) -> Result<RelayResponse> {
        let endpoint = self.registry.endpoint().await.ok_or(Error::NotConnected)?;
        let url = format!("{}{}", endpoint, TEST_PATH);

        info!("Testing backend connection at {}", url);

        let reply = self.transport.get_json(&url).await?;
        Ok(RelayResponse::from(reply))
    }
}
