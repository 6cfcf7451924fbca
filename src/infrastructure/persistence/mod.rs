//! In-memory repository implementations.
//!
//! Concrete implementations of domain repository traits backed by process
//! memory. Swapping in a persistent backend only requires another
//! [`crate::domain::repositories::LinkRepository`] implementation.
//!
//! # Repositories
//!
//! - [`MemoryLinkRepository`] - Link storage and retrieval

pub mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
