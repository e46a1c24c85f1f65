//! Deploycheck: a minimal HTTP service for validating automated deployment pipelines.
//! Used by: binary entrypoint.

pub mod handlers;
pub mod server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    tracing::info!("starting deploycheck on {}", addr);

    server::run(&addr).await?;
    Ok(())
}
