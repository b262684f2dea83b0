//! Tests for command-line parsing.

use clap::Parser;
use dns_query_simulator::{Config, LogFormat, LogLevel, OutputFormat, QueryMode};
use std::path::PathBuf;

#[test]
fn test_cli_defaults() {
    let config = Config::try_parse_from(["dns_query_simulator"]).expect("Should parse no args");
    assert!(config.domains.is_empty());
    assert_eq!(config.mode, QueryMode::Normal);
    assert_eq!(config.format, OutputFormat::Plain);
    assert_eq!(config.step_delay_ms, 0);
    assert!(!config.cache_unknown);
    assert!(config.seed.is_none());
    assert!(config.output.is_none());
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::from(LogLevel::Info)
    );
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_cli_all_options() {
    let args = [
        "dns_query_simulator",
        "google.com",
        "github.com",
        "google.com",
        "--mode",
        "doh",
        "--format",
        "csv",
        "--output",
        "walk.csv",
        "--step-delay-ms",
        "250",
        "--cache-unknown",
        "--seed",
        "42",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ];
    let config = Config::try_parse_from(args).expect("Should parse all options");

    assert_eq!(config.domains, vec!["google.com", "github.com", "google.com"]);
    assert_eq!(config.mode, QueryMode::EncryptedDoh);
    assert_eq!(config.format, OutputFormat::Csv);
    assert_eq!(config.output, Some(PathBuf::from("walk.csv")));
    assert_eq!(config.step_delay_ms, 250);
    assert!(config.cache_unknown);
    assert_eq!(config.seed, Some(42));
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_cli_json_format() {
    let config = Config::try_parse_from(["dns_query_simulator", "--format", "json", "a.com"])
        .expect("Should parse json format");
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_cli_rejects_unknown_mode() {
    let result = Config::try_parse_from(["dns_query_simulator", "--mode", "dot", "a.com"]);
    assert!(result.is_err(), "Unknown mode should be rejected");
}

#[test]
fn test_cli_rejects_negative_delay() {
    let result = Config::try_parse_from(["dns_query_simulator", "--step-delay-ms", "-1"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_accepts_empty_domain_argument() {
    // Rejected later by input validation, not by the parser
    let config = Config::try_parse_from(["dns_query_simulator", ""]).expect("Should parse");
    assert_eq!(config.domains, vec![String::new()]);
}
