//! DTOs for link info endpoint.

use crate::domain::entities::Link;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stored link record as returned by the info endpoint.
#[derive(Debug, Serialize)]
pub struct LinkInfoResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl From<Link> for LinkInfoResponse {
    fn from(link: Link) -> Self {
        Self {
            short_code: link.code,
            original_url: link.original_url,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}
