use axum::extract::FromRequest;

use super::errors::AppError;

/// Extractor JSON cuyos rechazos salen como `AppError::BadRequest`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
