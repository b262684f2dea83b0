//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Caller-level failures around a resolution walk.
///
/// The walk itself cannot fail. An unknown domain resolves to the
/// `"Unknown"` sentinel instead of producing an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The caller supplied an empty domain.
    #[error("Please enter a domain name")]
    MissingInput,
}
