//! DTOs for link shortening endpoint.

use crate::domain::entities::Link;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom short code (validated for length and characters).
    #[validate(length(min = 1, max = 20))]
    #[validate(regex(path = "*CUSTOM_CODE_REGEX"))]
    pub custom_code: Option<String>,
}

/// Response containing the created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl ShortenResponse {
    /// Builds a response from a stored link and its computed short URL.
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            short_code: link.code,
            short_url,
            original_url: link.original_url,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}
