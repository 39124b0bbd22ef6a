use axum::{Json, http::HeaderMap, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::auth::API_KEY_SCHEME;
use crate::middleware::require_api_key;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WhoAmI {
    pub scheme: String,
    pub key: String,
}

pub async fn whoami(headers: HeaderMap) -> impl IntoResponse {
    let key = match require_api_key(&headers) {
        Ok(key) => key,
        Err(e) => return e.into_response(),
    };

    Json(WhoAmI {
        scheme: API_KEY_SCHEME.to_string(),
        key: key.masked(),
    })
    .into_response()
}
