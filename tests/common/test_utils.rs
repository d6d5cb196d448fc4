use axum::Router;
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;
use video_relay::{
    Result,
    config::Config,
    registry::EndpointRegistry,
    relay::Relay,
    server::{self, handlers::AppState},
};

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 8080;
    config.server.logs.level = "debug".to_string();
    config
}

/// Build the full router around a relay that talks to real HTTP backends
pub fn create_test_app(registry: EndpointRegistry) -> Router {
    let state = AppState {
        relay: Arc::new(Relay::new(registry)),
    };
    server::router(state, &create_test_config()).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Typical body the browser form sends
pub fn sample_generation_request() -> Value {
    json!({
        "image": "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==",
        "prompt": "a calm lake at sunrise",
        "num_frames": 14
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  body_limit_mb: 10
  logs:
    level: "debug"

cors:
  allowed_origin: "https://ui.example.com"

backend:
  url: "https://abc123.ngrok-free.app"

archive:
  video_dir: "/tmp/relay-videos"
"#;

/// Partial configuration relying on defaults
pub const MINIMAL_CONFIG_YAML: &str = r#"
server:
  port: 4000
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
