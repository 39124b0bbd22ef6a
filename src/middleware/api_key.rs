use axum::http::HeaderMap;

use crate::auth::get_api_key;
use crate::error::AppError;

/// A key pulled out of a well-formed `Authorization: ApiKey <key>` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form of the key that is safe to show back to a client or write to logs.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.0.chars().count() > 8 {
            let prefix: String = self.0.chars().take(4).collect();
            format!("{prefix}...")
        } else {
            "***".to_string()
        }
    }
}

// keep the raw key out of debug output
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

pub fn require_api_key(headers: &HeaderMap) -> Result<ApiKey, AppError> {
    match get_api_key(headers) {
        Ok(key) => {
            let key = ApiKey(key.to_string());
            tracing::debug!(key = %key.masked(), "api key extracted");
            Ok(key)
        }
        Err(e) => {
            tracing::warn!(reason = %e, "rejecting request");
            Err(e.into())
        }
    }
}
