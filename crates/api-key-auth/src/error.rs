use http::StatusCode;
use thiserror::Error;

/// Ways an `Authorization` header can fail to yield an API key.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header, or an empty one.
    #[error("no authorization header included")]
    NoAuthHeader,

    /// Header present but not of the form `ApiKey <token>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl AuthError {
    /// Default HTTP status for this rejection.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::NoAuthHeader => StatusCode::UNAUTHORIZED,
            AuthError::MalformedHeader => StatusCode::BAD_REQUEST,
        }
    }

    /// Stable machine-readable code for response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::NoAuthHeader => "NO_AUTH_HEADER",
            AuthError::MalformedHeader => "MALFORMED_AUTH_HEADER",
        }
    }
}
