//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler, url_info_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`     - Create a shortened URL
/// - `GET  /stats`       - Aggregated service statistics
/// - `GET  /url/{code}`  - Stored record for a short code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_handler))
        .route("/url/{code}", get(url_info_handler))
}
