//! CSV export.
//!
//! One row per stage event, flattened with the domain and resolved IP so
//! rows from a whole session can be loaded into a spreadsheet.

use anyhow::{Context, Result};
use csv::Writer;
use serde::Serialize;
use std::io::Write;

use crate::dns::ResolutionResult;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    domain: &'a str,
    time: String,
    source: &'a str,
    destination: &'a str,
    protocol: &'a str,
    info: &'a str,
    stage: &'static str,
    latency_ms: Option<u32>,
    ip: &'a str,
}

/// Appends one row per stage event of `result`.
///
/// The header is written by the `csv` writer before the first row.
pub fn write_csv<W: Write>(writer: &mut Writer<W>, result: &ResolutionResult) -> Result<()> {
    for event in &result.stage_events {
        writer
            .serialize(CsvRow {
                domain: &result.domain,
                time: event.time(),
                source: &event.source,
                destination: &event.destination,
                protocol: &event.protocol,
                info: &event.info,
                stage: event.stage.as_str(),
                latency_ms: event.latency_ms,
                ip: &result.ip,
            })
            .context("Failed to write CSV row")?;
    }
    Ok(())
}
