//! # Shortr
//!
//! A fast and minimal URL shortener service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory link store
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML landing page with the shortening form
//!
//! ## Features
//!
//! - Random 6-character short codes with collision retry
//! - Optional custom short codes
//! - Click counting on redirect
//! - Aggregate usage statistics
//! - Single-page web UI
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: pick a bind address (default 0.0.0.0:8000)
//! export LISTEN="127.0.0.1:8000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! Links live in process memory and are lost on restart.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ServiceStats, StatsService};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
