//! Rendering of resolution results.
//!
//! This module turns `ResolutionResult`s into output:
//! - Plain text (narration, packet log table, latency chart)
//! - JSONL (one object per resolution)
//! - CSV (one row per stage event)

mod csv;
mod jsonl;
mod pipe;
mod plain;

use anyhow::{Context, Result};
use std::io::Write;

use crate::config::OutputFormat;
use crate::dns::{ResolutionResult, Stage};

pub use self::csv::write_csv;
pub use jsonl::write_jsonl;
pub use pipe::open_output;
pub use plain::{narrated_stages, write_flow_header, write_report, write_step};

/// Destination of rendered output.
pub type Sink = Box<dyn Write + Send>;

enum Target {
    Plain(Sink),
    Jsonl(Sink),
    Csv(::csv::Writer<Sink>),
}

/// Streams results of a session to one output in the chosen format.
///
/// Narration calls (`begin`, `step`) only produce output in plain format.
pub struct Exporter {
    target: Target,
}

impl Exporter {
    pub fn new(format: OutputFormat, sink: Sink) -> Self {
        let target = match format {
            OutputFormat::Plain => Target::Plain(sink),
            OutputFormat::Json => Target::Jsonl(sink),
            OutputFormat::Csv => Target::Csv(::csv::Writer::from_writer(sink)),
        };
        Self { target }
    }

    /// True if the output narrates stages (and is worth pacing).
    pub fn narrates(&self) -> bool {
        matches!(self.target, Target::Plain(_))
    }

    pub fn begin(&mut self, result: &ResolutionResult) -> Result<()> {
        if let Target::Plain(writer) = &mut self.target {
            write_flow_header(writer, result)?;
            writer.flush()?;
        }
        Ok(())
    }

    pub fn step(&mut self, result: &ResolutionResult, stage: Stage) -> Result<()> {
        if let Target::Plain(writer) = &mut self.target {
            write_step(writer, result, stage)?;
            writer.flush()?;
        }
        Ok(())
    }

    pub fn finish_result(&mut self, result: &ResolutionResult) -> Result<()> {
        match &mut self.target {
            Target::Plain(writer) => write_report(writer, result),
            Target::Jsonl(writer) => write_jsonl(writer, result),
            Target::Csv(writer) => write_csv(writer, result),
        }
    }

    /// Flushes buffered output.
    pub fn close(self) -> Result<()> {
        match self.target {
            Target::Plain(mut writer) | Target::Jsonl(mut writer) => {
                writer.flush().context("Failed to flush output")
            }
            Target::Csv(mut writer) => writer.flush().context("Failed to flush CSV output"),
        }
    }
}
