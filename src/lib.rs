//! Extraction of `ApiKey <token>` credentials from HTTP `Authorization` headers,
//! plus a small axum service that guards its routes with it.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod preflight;
pub mod state;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::StatusCode, routing::get};
use color_eyre::eyre::{Result, eyre};
use tower::ServiceBuilder;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::timeout::TimeoutLayer;

pub use auth::{AuthError, HeaderSource, get_api_key};

use config::AppConfig;
use handlers::{healthz, whoami};
use state::AppState;

/// Builds the application routes with the request timeout applied.
#[must_use]
pub fn router(state: AppState) -> Router {
    let timeout = timeout_layer(&state.config);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/whoami", get(whoami))
        .with_state(state)
        .layer(timeout)
}

fn timeout_layer(config: &AppConfig) -> TimeoutLayer {
    TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(config.request_timeout_secs),
    )
}

/// Interval after which one request of the quota is replenished for a rate of `rps`.
///
/// Returns `None` for a rate of zero.
#[must_use]
pub fn replenish_interval_ns(rps: u64) -> Option<u64> {
    if rps == 0 {
        return None;
    }
    Some((1_000_000_000 / rps).max(1))
}

/// Wraps `app` in a per-peer-IP rate limiter.
///
/// The limiter keys on `ConnectInfo<SocketAddr>`, so the result must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if the rate is zero or the settings are rejected by the governor.
pub fn rate_limited(app: Router, config: &AppConfig) -> Result<Router> {
    let replenish_ns = replenish_interval_ns(config.rate_limit_rps)
        .ok_or_else(|| eyre!("rate_limit_rps must be greater than zero"))?;
    let governor = GovernorConfigBuilder::default()
        .per_nanosecond(replenish_ns)
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or_else(|| eyre!("Failed to build governor config"))?;

    Ok(app.layer(ServiceBuilder::new().layer(GovernorLayer::new(Arc::new(governor)))))
}
