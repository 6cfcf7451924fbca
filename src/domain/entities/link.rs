//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Represents the mapping between a short code and the original URL it
/// redirects to. `code` is the unique key under which the link is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        clicks: u64,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new link.
///
/// `created_at` and `clicks` are assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            0,
        );

        assert_eq!(link.code, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert_eq!(link.clicks, 0);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            code: "xyz789".to_string(),
            original_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.code, "xyz789");
        assert_eq!(new_link.original_url, "https://rust-lang.org");
    }
}
