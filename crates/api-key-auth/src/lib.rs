//! Extraction of API keys from `Authorization: ApiKey <token>` headers.
//!
//! The core is [`extract_api_key`], a pure function over any [`HeaderSet`].
//! With the `axum` feature, [`ApiKey`] doubles as a request extractor and
//! [`AuthError`] renders as a JSON error response.

#[cfg(feature = "axum")]
pub mod axum_support;
pub mod error;
pub mod extractor;
pub mod headers;
pub mod key;

pub use error::*;
pub use extractor::*;
pub use headers::*;
pub use key::*;
