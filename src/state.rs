use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        AppState {
            config: config.clone(),
        }
    }
}
