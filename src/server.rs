//! Axum router and server setup.
//! Used by: main.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("server error: {0}")]
    Serve(String),
}

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn run(addr: &str) -> Result<(), ServerError> {
    let router = build_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))
}
