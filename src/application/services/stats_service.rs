//! Service-wide usage statistics.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Aggregated statistics across all shortened links.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceStats {
    pub total_urls: u64,
    pub total_clicks: u64,
}

/// Service for computing usage statistics.
///
/// Aggregates link counts and click totals from a single store snapshot,
/// so the reported numbers are mutually consistent.
pub struct StatsService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves aggregated statistics for all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_service_stats(&self) -> Result<ServiceStats, AppError> {
        let links = self.repository.all().await?;

        let total_urls = links.len() as u64;
        let total_clicks = links.iter().map(|link| link.clicks).sum();

        Ok(ServiceStats {
            total_urls,
            total_clicks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;
    use serde_json::json;

    fn link_with_clicks(code: &str, clicks: u64) -> Link {
        Link::new(
            code.to_string(),
            format!("https://example.com/{code}"),
            Utc::now(),
            clicks,
        )
    }

    #[tokio::test]
    async fn test_get_service_stats_empty_store() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_all().times(1).returning(|| Ok(vec![]));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.get_service_stats().await;

        assert!(result.is_ok());
        let stats = result.unwrap();
        assert_eq!(stats.total_urls, 0);
        assert_eq!(stats.total_clicks, 0);
    }

    #[tokio::test]
    async fn test_get_service_stats_counts_links_and_clicks() {
        let mut mock_repo = MockLinkRepository::new();

        let links = vec![
            link_with_clicks("abc123", 10),
            link_with_clicks("xyz789", 5),
            link_with_clicks("fresh1", 0),
        ];
        mock_repo
            .expect_all()
            .times(1)
            .returning(move || Ok(links.clone()));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.get_service_stats().await;

        assert!(result.is_ok());
        let stats = result.unwrap();
        assert_eq!(stats.total_urls, 3);
        assert_eq!(stats.total_clicks, 15);
    }

    #[tokio::test]
    async fn test_get_service_stats_propagates_store_errors() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_all()
            .times(1)
            .returning(|| Err(AppError::internal("Link store lock poisoned", json!({}))));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.get_service_stats().await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
