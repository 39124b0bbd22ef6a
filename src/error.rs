use axum::{
    http::{StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};

use crate::auth::{API_KEY_SCHEME, AuthError};

#[derive(Debug)]
pub enum AppError {
    Unauthorized(AuthError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Unauthorized(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized(err) => (
                StatusCode::UNAUTHORIZED,
                [(WWW_AUTHENTICATE, API_KEY_SCHEME)],
                err.to_string(),
            )
                .into_response(),
        }
    }
}
