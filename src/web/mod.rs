//! Web layer for the browser-based UI.
//!
//! Serves the single-page shortening form. Uses Askama templates for
//! server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Web route configuration

pub mod handlers;
pub mod routes;
