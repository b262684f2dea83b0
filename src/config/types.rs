//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::constants::{PROTOCOL_DNS, PROTOCOL_DOH};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How resolution results are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Narration, packet log table and latency chart
    Plain,
    /// One JSON object per resolution (JSON Lines)
    Json,
    /// One CSV row per stage event
    Csv,
}

/// Query mode selected by the user.
///
/// `EncryptedDoh` only changes the protocol label and replaces the domain in
/// query annotations with a one-way digest. Nothing is actually encrypted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum QueryMode {
    /// Normal DNS
    #[value(name = "normal")]
    Normal,
    /// DNS over HTTPS (encrypted)
    #[value(name = "doh")]
    EncryptedDoh,
}

impl QueryMode {
    /// Protocol label shown in every stage event.
    pub fn protocol(&self) -> &'static str {
        match self {
            QueryMode::Normal => PROTOCOL_DNS,
            QueryMode::EncryptedDoh => PROTOCOL_DOH,
        }
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self, QueryMode::EncryptedDoh)
    }
}

/// Simulator configuration.
///
/// Parsed from the command line by the binary, or built programmatically:
///
/// ```no_run
/// use dns_query_simulator::{Config, QueryMode};
///
/// let config = Config {
///     domains: vec!["google.com".to_string(), "google.com".to_string()],
///     mode: QueryMode::EncryptedDoh,
///     seed: Some(7),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns_query_simulator",
    about = "Narrates the stages of a DNS lookup with synthetic latencies."
)]
pub struct Config {
    /// Domains to resolve, in order (reads one per line from stdin if omitted)
    pub domains: Vec<String>,

    /// Query mode: normal|doh
    #[arg(long, value_enum, default_value_t = QueryMode::Normal)]
    pub mode: QueryMode,

    /// Output format: plain|json|csv
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pause after each narrated stage, in milliseconds (plain output only)
    #[arg(long, default_value_t = 0)]
    pub step_delay_ms: u64,

    /// Also cache domains that resolved to "Unknown"
    #[arg(long)]
    pub cache_unknown: bool,

    /// Seed for reproducible latencies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            mode: QueryMode::Normal,
            format: OutputFormat::Plain,
            output: None,
            step_delay_ms: 0,
            cache_unknown: false,
            seed: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
