//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_query_simulator` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All simulation logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_query_simulator::initialization::init_logger_with;
use dns_query_simulator::{run_session, Config, SimulationError};

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG may come from a .env file; a missing file is fine
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_session(config).await {
        Ok(report) => {
            eprintln!(
                "✅ Resolved {} quer{} ({} cache hit{}, {} miss{}, {} unknown) - {} ms simulated latency in {:.1}s",
                report.queries,
                if report.queries == 1 { "y" } else { "ies" },
                report.cache_hits,
                if report.cache_hits == 1 { "" } else { "s" },
                report.cache_misses,
                if report.cache_misses == 1 { "" } else { "es" },
                report.unknown,
                report.total_latency_ms,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            if let Some(SimulationError::MissingInput) = e.downcast_ref::<SimulationError>() {
                eprintln!("⚠ {e}");
            } else {
                eprintln!("dns_query_simulator error: {:#}", e);
            }
            process::exit(1);
        }
    }
}
