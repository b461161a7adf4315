use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use gemini_relay::config::Config;
use gemini_relay::routes;
use gemini_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Strict startup: no credential, no server.
    let config = Config::from_env()?;
    let port = config.port;
    let state = Arc::new(AppState::new(config)?);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("gemini-relay listening on http://localhost:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
