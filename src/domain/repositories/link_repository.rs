//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The store is the single owner of all link records; callers always receive
/// clones. Each mutating operation executes as one atomic step, so
/// check-then-insert and read-increment-write cannot interleave.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// Stamps `created_at` with the current time and starts the click counter
    /// at zero. The existence check and the insert happen under one lock
    /// acquisition.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn get(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter for a code.
    ///
    /// Returns the updated record, or `Ok(None)` if no link matches `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns a snapshot of all live records.
    ///
    /// Used for statistics aggregation. The snapshot is taken under a single
    /// read lock, so it is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn all(&self) -> Result<Vec<Link>, AppError>;
}
