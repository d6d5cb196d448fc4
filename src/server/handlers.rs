use super::types::{ErrorResponse, SetEndpointRequest, SetEndpointResponse};
use crate::{relay::{Relay, RelayResponse}, Error, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

pub async fn set_endpoint(
    State(state): State<AppState>,
    Json(request): Json<SetEndpointRequest>,
) -> Json<SetEndpointResponse> {
    let registry = state.relay.registry();

    match &request.url {
        Some(url) => registry.set_endpoint(url.clone()).await,
        None => registry.clear().await,
    }

    // Echo what this request stored, not whatever the registry holds now.
    Json(SetEndpointResponse {
        ok: true,
        url: request.url,
    })
}

pub async fn generate(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    info!("Received generation request");
    mirror(state.relay.generate(body).await)
}

pub async fn test_backend(State(state): State<AppState>) -> Response {
    info!("Received backend test request");
    mirror(state.relay.test_connection().await)
}

fn mirror(result: Result<RelayResponse>) -> Response {
    match result {
        Ok(response) => (response.status, Json(response.body)).into_response(),
        Err(Error::NotConnected) => {
            warn!("Request rejected: no backend endpoint registered");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::not_connected()),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to relay request: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::forwarding(e)),
            )
                .into_response()
        }
    }
}
