use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections render through [`AppError`], so a
/// malformed body answers 400 `{ "error": ... }` like every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
