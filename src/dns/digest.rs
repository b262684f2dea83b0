//! Illustrative DoH payload digest.

use sha2::{Digest, Sha256};

/// SHA-256 of the raw domain bytes as 64 lowercase hex characters.
///
/// One-way and deterministic. It stands in for an encrypted query; nothing
/// here is a real DoH transport.
pub fn payload_digest(domain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        // sha256("abc")
        assert_eq!(
            payload_digest("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_shape() {
        let digest = payload_digest("google.com");
        assert_eq!(digest.len(), 64);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_digest_is_pure_and_input_sensitive() {
        assert_eq!(payload_digest("google.com"), payload_digest("google.com"));
        assert_ne!(payload_digest("google.com"), payload_digest("github.com"));
        assert_ne!(payload_digest("google.com"), payload_digest("Google.com"));
    }
}
