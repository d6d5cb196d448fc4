pub mod handlers;
pub mod types;

use crate::{
    archive::VideoArchive, config::Config, registry::EndpointRegistry, relay::Relay, Error, Result,
};
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    let registry = EndpointRegistry::with_endpoint(config.backend.url.clone());
    if let Some(url) = registry.endpoint().await {
        info!("Starting with preconfigured backend endpoint: {}", url);
    }

    let mut relay = Relay::new(registry);
    if let Some(dir) = &config.archive.video_dir {
        info!("Archiving generated videos to {}", dir);
        relay = relay.with_archive(VideoArchive::new(dir));
    }

    let app_state = handlers::AppState {
        relay: Arc::new(relay),
    };

    let app = router(app_state, &config)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting relay server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: handlers::AppState, config: &Config) -> Result<Router> {
    let router = Router::new()
        .route("/api/setcolab", post(handlers::set_endpoint))
        .route("/api/generate", post(handlers::generate))
        .route("/api/test", get(handlers::test_backend))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes()))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.cors.allowed_origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .map_err(|_| Error::config(format!("Invalid CORS origin: '{}'", origin)))?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}
