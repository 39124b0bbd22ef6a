//! Extraction of `ApiKey <token>` credentials from an `Authorization` header.

use std::collections::HashMap;
use std::hash::BuildHasher;

use axum::http::HeaderMap;

pub const AUTHORIZATION: &str = "Authorization";
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no authorization header included")]
    MissingHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Read access to the first value of a named header.
pub trait HeaderSource {
    fn first_value(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> HeaderSource for HashMap<String, Vec<String>, S> {
    fn first_value(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Values are read as visible ASCII only. A value carrying any other byte, including
/// UTF-8 text such as `ApiKey clé`, is returned as an empty string so the header still
/// counts as present and classifies as malformed.
impl HeaderSource for HeaderMap {
    fn first_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.to_str().unwrap_or_default())
    }
}

/// Returns the key carried by an `Authorization: ApiKey <key>` header.
///
/// Only the first value of the header is considered. The returned key is never
/// empty and never starts with a space.
///
/// # Errors
///
/// Returns [`AuthError::MissingHeader`] when there is no `Authorization` value and
/// [`AuthError::MalformedHeader`] when the value is not of the form `ApiKey <key>`.
pub fn get_api_key<H>(headers: &H) -> Result<&str, AuthError>
where
    H: HeaderSource + ?Sized,
{
    let value = headers
        .first_value(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?;

    let Some((scheme, key)) = value.split_once(' ') else {
        return Err(AuthError::MalformedHeader);
    };

    if scheme != API_KEY_SCHEME || key.is_empty() || key.starts_with(' ') {
        return Err(AuthError::MalformedHeader);
    }

    Ok(key)
}
