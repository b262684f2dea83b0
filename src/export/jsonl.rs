//! JSONL export.
//!
//! One complete JSON object per resolution, one per line. Convenient for
//! piping to `jq`.

use anyhow::{Context, Result};
use std::io::Write;

use crate::dns::ResolutionResult;

/// Writes `result` as a single JSON line.
pub fn write_jsonl<W: Write>(writer: &mut W, result: &ResolutionResult) -> Result<()> {
    serde_json::to_writer(&mut *writer, result).context("Failed to serialize resolution")?;
    writeln!(writer).context("Failed to write JSONL record")?;
    Ok(())
}
