//! DTOs for service statistics endpoint.

use crate::application::services::ServiceStats;
use serde::Serialize;

/// Aggregated statistics across all shortened links.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_urls: u64,
    pub total_clicks: u64,
}

impl From<ServiceStats> for StatsResponse {
    fn from(stats: ServiceStats) -> Self {
        Self {
            total_urls: stats.total_urls,
            total_clicks: stats.total_clicks,
        }
    }
}
