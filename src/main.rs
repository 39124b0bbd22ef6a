use std::net::SocketAddr;

use color_eyre::eyre::Result;
use tokio::net::TcpListener;

use api_key_header::{config::AppConfig, preflight, rate_limited, router, state::AppState};

/// Entry point for the API key service.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables cannot be loaded
/// - The rate limiter cannot be configured
/// - The listener cannot bind or the server fails
#[tokio::main]
pub async fn main() -> Result<()> {
    preflight::setup_tracing();
    preflight::init_error_formatter()?;

    tracing::info!("Setting up application configuration from environment variables.");
    let config = AppConfig::new_from_env()?;

    tracing::info!(
        rps = config.rate_limit_rps,
        burst = config.rate_limit_burst,
        "Configuration set. Configuring router and rate-limiter..."
    );
    let state = AppState::new(&config);
    let app = rate_limited(router(state), &config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
