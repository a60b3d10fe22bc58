//! Redirect and visitor identifier generation.
//!
//! Provides cryptographically secure random identifiers for redirect entries
//! and visitor cookies, plus the [`IdGenerator`] seam the store and identity
//! service use so tests can substitute deterministic sequences.

use base64::Engine as _;

/// Length of random bytes before base64 encoding a redirect id.
const ID_LENGTH_BYTES: usize = 9;

/// Length of random bytes before base64 encoding a visitor id.
const VISITOR_ID_LENGTH_BYTES: usize = 16;

/// Source of fresh identifiers.
///
/// The store asks its generator for candidates when a create request carries
/// no explicit id; the identity service asks its generator for visitor ids
/// when minting a cookie. Production uses [`RandomIdGenerator`] and
/// [`RandomVisitorIdGenerator`]; tests inject deterministic implementations
/// to exercise collision retries and assert on minted values.
pub trait IdGenerator: Send + Sync {
    /// Returns a candidate identifier.
    fn generate(&self) -> String;
}

/// Default redirect-id generator backed by the system RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        generate_id()
    }
}

/// Default visitor-id generator backed by the system RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomVisitorIdGenerator;

impl IdGenerator for RandomVisitorIdGenerator {
    fn generate(&self) -> String {
        generate_visitor_id()
    }
}

/// Generates a cryptographically secure random redirect identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character identifier.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Generates a random visitor identifier for the signed session cookie.
///
/// Visitor ids carry twice the entropy of redirect ids (128 bits), producing
/// a 22-character identifier.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_visitor_id() -> String {
    let mut buffer = [0u8; VISITOR_ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_not_empty() {
        let id = generate_id();
        assert!(!id.is_empty());
    }

    #[test]
    fn test_generate_id_has_correct_length() {
        let id = generate_id();
        assert_eq!(id.len(), 12);
    }

    #[test]
    fn test_generate_id_url_safe_characters() {
        let id = generate_id();
        assert!(id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_generate_id_produces_unique_ids() {
        let mut ids = HashSet::new();

        for _ in 0..1000 {
            let id = generate_id();
            ids.insert(id);
        }

        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generate_id_no_padding() {
        let id = generate_id();
        assert!(!id.contains('='));
    }

    #[test]
    fn test_random_generator_uses_id_format() {
        let generator = RandomIdGenerator;
        let id = generator.generate();

        assert_eq!(id.len(), 12);
        assert!(!id.contains('='));
    }

    #[test]
    fn test_random_visitor_generator_uses_visitor_format() {
        let generator = RandomVisitorIdGenerator;
        let id = generator.generate();

        assert_eq!(id.len(), 22);
        assert!(!id.contains('='));
    }

    #[test]
    fn test_generate_visitor_id_has_correct_length() {
        let id = generate_visitor_id();
        assert_eq!(id.len(), 22);
    }

    #[test]
    fn test_generate_visitor_id_url_safe_characters() {
        let id = generate_visitor_id();
        assert!(id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_generate_visitor_id_produces_unique_ids() {
        let mut ids = HashSet::new();

        for _ in 0..1000 {
            ids.insert(generate_visitor_id());
        }

        assert_eq!(ids.len(), 1000);
    }
}
