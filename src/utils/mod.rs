//! Utility functions for code generation, URL processing, and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_normalizer`] - URL normalization and sanitization
//! - [`base_url`] - Base URL derivation from HTTP headers

pub mod base_url;
pub mod code_generator;
pub mod url_normalizer;
