//! Short code generation and validation utilities.
//!
//! Provides random code generation and validation for custom
//! user-provided codes.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Length of generated short codes.
const CODE_LENGTH: usize = 6;

/// Characters allowed in generated short codes.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Maximum length of user-provided custom codes.
const MAX_CUSTOM_CODE_LENGTH: usize = 20;

/// Reserved codes that cannot be used as short links.
///
/// These codes are reserved for system endpoints to prevent routing conflicts.
const RESERVED_CODES: &[&str] = &["api", "health"];

/// Generates a random short code.
///
/// Produces a 6-character code drawn uniformly from letters and digits,
/// giving 62^6 (~57 billion) possible codes.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-20 characters
/// - Allowed characters: letters, digits, hyphens, underscores
/// - Cannot be a reserved system code
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any validation rule is violated.
///
/// # Examples
///
/// ```ignore
/// // Valid codes
/// assert!(validate_custom_code("my-link-2024").is_ok());
/// assert!(validate_custom_code("promo2025").is_ok());
///
/// // Invalid codes
/// assert!(validate_custom_code("").is_err());          // Empty
/// assert!(validate_custom_code("my code").is_err());   // Space
/// assert!(validate_custom_code("api").is_err());       // Reserved
/// ```
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    // Length is counted in characters, not bytes.
    let length = code.chars().count();
    if length == 0 || length > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 1-20 characters",
            json!({ "provided_length": length }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code.to_ascii_lowercase().as_str()) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
