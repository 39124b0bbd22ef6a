pub mod server;

use api_key_header::{config::AppConfig, router, state::AppState};
use axum::Router;

pub const TEST_KEY: &str = "test_secret_key_12345";

pub fn test_config(port: u16) -> AppConfig {
    AppConfig {
        server_port: port,
        request_timeout_secs: 5,
        rate_limit_rps: 200,
        rate_limit_burst: 400,
    }
}

pub fn create_test_app() -> Router {
    router(AppState::new(&test_config(0)))
}
