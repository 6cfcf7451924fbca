//! HTML template rendering handlers for the web UI.

mod index;

pub use index::index_handler;
