//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Service for creating and retrieving shortened links.
///
/// Handles URL normalization, code generation/validation, and collision
/// retry to ensure consistent and collision-free short URLs.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The original URL to shorten
    /// - `custom_code` - Optional custom short code (validated if provided)
    ///
    /// # Code Generation
    ///
    /// - If `custom_code` is provided, validates and uses it (or returns a
    ///   conflict error if it is already taken)
    /// - Otherwise, generates a random 6-character code
    /// - Retries up to 10 times on collision before failing
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is invalid.
    /// Returns [`AppError::Conflict`] if the custom code is already taken.
    /// Returns [`AppError::Exhausted`] if no free code is found after 10 attempts.
    pub async fn create_short_link(
        &self,
        original_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let normalized_url = normalize_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            let new_link = NewLink {
                code: custom,
                original_url: normalized_url,
            };

            return self.repository.insert(new_link).await;
        }

        self.insert_with_generated_code(normalized_url).await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .get(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Records a visit to a short link and returns the updated link.
    ///
    /// The click counter is bumped by the store as one atomic operation, so
    /// concurrent visits never lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn visit_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .increment_clicks(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Constructs the full short URL from a base URL and code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Inserts a link under a freshly generated code with collision retry.
    ///
    /// Attempts up to 10 times before failing. Each attempt goes through the
    /// store's atomic insert, so concurrent requests cannot race a
    /// check-then-insert gap.
    async fn insert_with_generated_code(&self, original_url: String) -> Result<Link, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                original_url: original_url.clone(),
            };

            match self.repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::exhausted(
            "Failed to generate unique code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}
