//! Handler for link info endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::url_info::LinkInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves the stored record for a short code without redirecting.
///
/// # Endpoint
///
/// `GET /api/url/{code}`
///
/// The click counter is not touched; only redirects count as clicks.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn url_info_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    Ok(Json(link.into()))
}
