//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewLink`] carries the caller-supplied fields, while the store assigns
//! `created_at` and the initial click count on insert.

pub mod link;

pub use link::{Link, NewLink};
