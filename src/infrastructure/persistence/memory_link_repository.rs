//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// In-memory repository for link storage and retrieval.
///
/// Backed by a `HashMap` behind a single store-wide `RwLock`. Reads take a
/// shared lock; inserts and click updates take an exclusive lock, so the
/// existence check and the write happen as one atomic step.
///
/// All links are lost when the process exits.
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a poisoned store lock to an internal error instead of panicking.
fn lock_poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::internal("Link store lock poisoned", json!({}))
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().map_err(lock_poisoned)?;

        if links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Short code already in use",
                json!({ "code": new_link.code }),
            ));
        }

        let link = Link::new(new_link.code.clone(), new_link.original_url, Utc::now(), 0);
        links.insert(new_link.code, link.clone());

        Ok(link)
    }

    async fn get(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.read().map_err(lock_poisoned)?;

        Ok(links.get(code).cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.links.write().map_err(lock_poisoned)?;

        Ok(links.get_mut(code).map(|link| {
            link.clicks += 1;
            link.clone()
        }))
    }

    async fn all(&self) -> Result<Vec<Link>, AppError> {
        let links = self.links.read().map_err(lock_poisoned)?;

        Ok(links.values().cloned().collect())
    }
}
