use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use video_relay::{
    Error, Result,
    relay::{BackendReply, BackendTransport},
};

/// A single outbound call seen by the mock transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Mock backend transport that records calls and replays a fixed reply.
#[derive(Debug, Clone)]
pub struct MockTransport {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub reply: BackendReply,
    pub error: Option<String>,
}

impl MockTransport {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: BackendReply { status, body },
            error: None,
        }
    }

    pub fn failing(error: &str) -> Self {
        let mut transport = Self::new(StatusCode::OK, Value::Null);
        transport.error = Some(error.to_string());
        transport
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, call: RecordedCall) -> Result<BackendReply> {
        self.calls.lock().unwrap().push(call);

        if let Some(ref error) = self.error {
            return Err(Error::relay(error.clone()));
        }

        Ok(self.reply.clone())
    }
}

#[async_trait]
impl BackendTransport for MockTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<BackendReply> {
        self.respond(RecordedCall {
            method: "POST",
            url: url.to_string(),
            body: Some(body.clone()),
        })
    }

    async fn get_json(&self, url: &str) -> Result<BackendReply> {
        self.respond(RecordedCall {
            method: "GET",
            url: url.to_string(),
            body: None,
        })
    }
}
