//! Typed JSON extractor with flat error responses.
//!
//! Axum's built-in `Json` rejection produces plain-text bodies. The
//! endpoints here promise `{error: <message>}` with status 400 for any
//! malformed or schema-violating body, so handlers take [`ApiJson`]
//! instead, which converts the rejection into a
//! [`BoardError::InvalidRequest`] before the service layer is reached.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::BoardError;

/// JSON request body validated against its schema.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BoardError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(BoardError::InvalidRequest(rejection.body_text())),
        }
    }
}
