use axum::http::StatusCode;
use serde_json::Value;

/// Status and JSON body as received from the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: StatusCode,
    pub body: Value,
}

/// What the relay hands back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RelayResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<BackendReply> for RelayResponse {
    fn from(reply: BackendReply) -> Self {
        // Non-2xx statuses are mirrored; any 2xx collapses to 200.
        let status = if reply.status.is_success() {
            StatusCode::OK
        } else {
            reply.status
        };

        Self {
            status,
            body: reply.body,
        }
    }
}
