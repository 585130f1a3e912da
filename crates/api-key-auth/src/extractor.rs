use crate::{ApiKey, AuthError, HeaderSet};

/// Header carrying the credentials.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Scheme token expected in front of the key. Compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod extractor_tests;

/// Extract the API key from an `Authorization: ApiKey <token>` header.
///
/// Only the first `Authorization` value is considered. A missing or empty
/// header yields [`AuthError::NoAuthHeader`]; anything else that is not
/// `ApiKey` followed by whitespace and a token yields
/// [`AuthError::MalformedHeader`].
pub fn extract_api_key<H>(headers: &H) -> Result<ApiKey, AuthError>
where
    H: HeaderSet + ?Sized,
{
    let result = match headers.first_value(AUTHORIZATION_HEADER) {
        None | Some(b"") => Err(AuthError::NoAuthHeader),
        Some(raw) => std::str::from_utf8(raw)
            .map_err(|_| AuthError::MalformedHeader)
            .and_then(parse_authorization),
    };

    match &result {
        Ok(key) => tracing::trace!(
            key = %key.masked(),
            fingerprint = %key.fingerprint(),
            "extracted api key"
        ),
        Err(err) => tracing::debug!("Rejected authorization header: {}", err),
    }

    result
}

/// Parse an `Authorization` field value of the form `ApiKey <token>`.
///
/// Whitespace around the value and between scheme and token is ignored.
/// Whitespace inside the token is kept.
pub fn parse_authorization(value: &str) -> Result<ApiKey, AuthError> {
    let value = value.trim();
    let (scheme, rest) = value.split_once(char::is_whitespace).unwrap_or((value, ""));

    if scheme != API_KEY_SCHEME {
        return Err(AuthError::MalformedHeader);
    }

    ApiKey::new(rest.trim_start()).ok_or(AuthError::MalformedHeader)
}
