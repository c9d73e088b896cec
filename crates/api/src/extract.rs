//! Crate-local extractors.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor that rejects with 400 instead of axum's default 422.
///
/// The API contract maps missing fields and malformed bodies to
/// Bad-Request, so handlers take `Json<T>` from this module rather than
/// `axum::Json`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
