//! HTTP middleware for request processing.
//!
//! Provides observability middleware for the HTTP layer.

pub mod tracing;
