//! Error handling.
//!
//! This module provides the error types used around the simulator:
//! - Initialization failures (logger setup)
//! - Input validation failures, raised before the engine is invoked

mod types;

// Re-export public API
pub use types::{InitializationError, SimulationError};

/// Checks that a domain was supplied before a walk is started.
///
/// Only the empty string is rejected. The engine accepts any other input
/// verbatim, so whitespace and casing are preserved.
///
/// # Errors
///
/// Returns `SimulationError::MissingInput` if `domain` is empty.
pub fn validate_domain_input(domain: &str) -> Result<&str, SimulationError> {
    if domain.is_empty() {
        return Err(SimulationError::MissingInput);
    }
    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain_input_rejects_empty() {
        assert_eq!(
            validate_domain_input(""),
            Err(SimulationError::MissingInput)
        );
    }

    #[test]
    fn test_validate_domain_input_accepts_any_non_empty() {
        assert_eq!(validate_domain_input("google.com"), Ok("google.com"));
        // No hostname syntax checking
        assert_eq!(validate_domain_input("not a domain"), Ok("not a domain"));
        assert_eq!(validate_domain_input(" "), Ok(" "));
    }

    #[test]
    fn test_missing_input_message() {
        assert_eq!(
            SimulationError::MissingInput.to_string(),
            "Please enter a domain name"
        );
    }
}
