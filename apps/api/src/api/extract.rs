use axum::extract::{FromRequest, FromRequestParts};

use crate::api::errors::ApiError;

/// JSON body extractor whose rejections render as `{"error": ...}`
///
/// Usage:
/// ```rust,ignore
/// async fn create(ApiJson(input): ApiJson<NewTeam>) -> Result<Json<Team>, ApiError> {
///     // ...
/// }
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections render as `{"error": ...}`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
