//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::base_url_from_headers;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "custom_code": "my-link"  // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_code": "abc123",
///   "short_url": "http://localhost:8000/abc123",
///   "original_url": "https://example.com/page",
///   "created_at": "2025-01-15T10:30:00Z",
///   "clicks": 0
/// }
/// ```
///
/// The short URL host is taken from the request's `Host` header, falling
/// back to the configured listen address.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL or custom code is malformed.
/// Returns 409 Conflict if the custom code is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(payload.url, payload.custom_code)
        .await?;

    let base_url = base_url_from_headers(&headers).unwrap_or_else(|| state.base_url.clone());
    let short_url = state.link_service.get_short_url(&base_url, &link.code);

    Ok(Json(ShortenResponse::from_link(link, short_url)))
}
