//! axum glue: `ApiKey` as an extractor, `AuthError` as a response, and a
//! middleware that stores the key in request extensions.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{extract_api_key, ApiKey, AuthError};

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }
        extract_api_key(&parts.headers)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({
                "success": false,
                "error": self.to_string(),
                "code": self.code(),
            })),
        )
            .into_response()
    }
}

/// Reject requests without a well-formed `Authorization: ApiKey <token>`
/// header. Use with `axum::middleware::from_fn`.
///
/// The extracted key is inserted into request extensions; whether it is a
/// *valid* key is left to downstream handlers.
pub async fn require_api_key(mut request: Request, next: Next) -> Result<Response, AuthError> {
    let key = extract_api_key(request.headers())?;
    request.extensions_mut().insert(key);
    Ok(next.run(request).await)
}
