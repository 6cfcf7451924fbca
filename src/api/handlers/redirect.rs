//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Looks up the code, bumps its click counter as one atomic store
/// operation, and responds with `302 Found` pointing at the original URL.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.visit_link(&code).await?;

    debug!(code = %link.code, clicks = link.clicks, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, link.original_url)],
    ))
}
