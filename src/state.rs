//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::persistence::MemoryLinkRepository;

/// Shared state available to all request handlers.
///
/// Holds the service layer wired to the in-memory link store. Cloning is
/// cheap; the services are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<MemoryLinkRepository>>,

    /// Fallback base URL for generated short links when the request
    /// carries no usable Host header.
    pub base_url: String,
}

impl AppState {
    /// Wires the service layer around a single shared repository.
    pub fn new(repository: Arc<MemoryLinkRepository>, base_url: String) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            stats_service: Arc::new(StatsService::new(repository)),
            base_url,
        }
    }
}
