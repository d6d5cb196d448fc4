use serde::{Deserialize, Serialize};

pub const NOT_CONNECTED_ERROR: &str = "Backend not connected.";
pub const NOT_CONNECTED_HINT: &str =
    "Make sure the backend notebook is running and has registered its URL with this relay.";

#[derive(Debug, Deserialize)]
pub struct SetEndpointRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SetEndpointResponse {
    pub ok: bool,
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorResponse {
    pub fn not_connected() -> Self {
        Self {
            error: NOT_CONNECTED_ERROR.to_string(),
            hint: Some(NOT_CONNECTED_HINT.to_string()),
        }
    }

    pub fn forwarding(message: impl std::fmt::Display) -> Self {
        Self {
            error: format!("Relay forwarding error: {}", message),
            hint: None,
        }
    }
}
