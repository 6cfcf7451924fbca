#![allow(dead_code)]

use std::sync::Arc;

use shortr::domain::entities::NewLink;
use shortr::domain::repositories::LinkRepository;
use shortr::infrastructure::persistence::MemoryLinkRepository;
use shortr::state::AppState;

/// Fallback base URL used when a request carries no Host header.
pub const TEST_BASE_URL: &str = "http://localhost:8000";

/// Builds an application state backed by a fresh in-memory store.
///
/// Returns the repository alongside the state so tests can seed links
/// directly and inspect stored records after requests.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repository.clone(), TEST_BASE_URL.to_string());
    (state, repository)
}

pub async fn create_test_link(repository: &MemoryLinkRepository, code: &str, url: &str) {
    repository
        .insert(NewLink {
            code: code.to_string(),
            original_url: url.to_string(),
        })
        .await
        .unwrap();
}
