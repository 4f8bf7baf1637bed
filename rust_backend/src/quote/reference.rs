//! Deterministic quote references.
//!
//! References derive from the quote content itself, so re-issuing the same
//! quote produces the same identifier and duplicates are easy to spot.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Displayed reference prefix.
pub const REFERENCE_PREFIX: &str = "PGQ";

/// Hex digits kept from the content hash for display.
const REFERENCE_DIGITS: usize = 12;

/// Compute the reference for a quote's canonical content.
///
/// SHA-256 over the serialized content, hex-encoded, truncated to twelve
/// uppercase digits under a `PGQ-` prefix.
pub fn quote_reference<T: Serialize>(content: &T) -> String {
    let canonical = serde_json::to_string(content).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!(
        "{}-{}",
        REFERENCE_PREFIX,
        digest[..REFERENCE_DIGITS].to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_content_yields_identical_references() {
        let a = quote_reference(&("Room 1", 2, 1297.5));
        let b = quote_reference(&("Room 1", 2, 1297.5));
        assert_eq!(a, b);
    }

    #[test]
    fn different_content_yields_different_references() {
        let a = quote_reference(&("Room 1", 2, 1297.5));
        let b = quote_reference(&("Room 1", 2, 1297.51));
        assert_ne!(a, b);
    }

    #[test]
    fn reference_has_the_display_shape() {
        let reference = quote_reference(&"content");
        assert!(reference.starts_with("PGQ-"));
        assert_eq!(reference.len(), 4 + REFERENCE_DIGITS);
        assert!(reference[4..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
