//! Base URL derivation from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Derives the service base URL from HTTP request headers.
///
/// Reads the `Host` header and prefixes it with `http://`, handling:
/// - Hostnames with ports (e.g., `example.com:3000`)
/// - Plain hostnames (e.g., `example.com`)
/// - IPv4 and IPv6 addresses
///
/// Port numbers are kept so that generated short URLs stay reachable
/// behind non-standard ports.
///
/// Returns `None` if the `Host` header is missing or contains invalid
/// UTF-8, letting the caller fall back to a configured address.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// let base_url = base_url_from_headers(&headers).unwrap();
/// assert_eq!(base_url, "http://example.com:8080");
/// ```
pub fn base_url_from_headers(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?;

    Some(format!("http://{host}"))
}
