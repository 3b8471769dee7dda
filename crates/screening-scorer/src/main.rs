use std::env;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let addr = env::var("SCREENING_SCORER_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre::eyre!("failed to bind {addr}: {e}"))?;
    tracing::info!(addr = %listener.local_addr()?, "scoring service listening");

    axum::serve(listener, screening_scorer::router())
        .await
        .map_err(|e| eyre::eyre!(e))
}
