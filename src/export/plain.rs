//! Human-readable rendering of a resolution walk.
//!
//! Produces the packet-flow narration, the resolution result, a
//! Wireshark-style packet log table and a latency chart.

use anyhow::Result;
use std::io::Write;

use crate::config::LATENCY_CHART_WIDTH;
use crate::dns::{ResolutionResult, Stage, StageEvent};

const LOG_HEADERS: [&str; 5] = ["Time", "Source", "Destination", "Protocol", "Info"];

/// Heading printed before the narrated stages of one walk.
pub fn write_flow_header<W: Write>(writer: &mut W, result: &ResolutionResult) -> Result<()> {
    writeln!(writer, "📦 Packet Flow: {}", result.domain)?;
    Ok(())
}

/// Stages to narrate for a walk.
///
/// A cache hit records a single event, but the client still receives a
/// response, so the narration closes with the response hop at 100%.
pub fn narrated_stages(result: &ResolutionResult) -> Vec<Stage> {
    let mut stages = result.stages();
    if result.cache_hit && stages.last() != Some(&Stage::Response) {
        stages.push(Stage::Response);
    }
    stages
}

/// One narrated stage with the progress reached.
pub fn write_step<W: Write>(writer: &mut W, result: &ResolutionResult, stage: Stage) -> Result<()> {
    writeln!(
        writer,
        "[{:>3}%] {}",
        stage.progress_percent(),
        stage.narration(&result.domain)
    )?;
    Ok(())
}

/// Result, DoH payload, packet log table and latency analysis.
pub fn write_report<W: Write>(writer: &mut W, result: &ResolutionResult) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "✅ DNS Resolution Result")?;
    writeln!(writer, "Resolved IP Address: {}", result.ip)?;
    if result.cache_hit {
        writeln!(writer, "Served from local cache")?;
    }

    if let Some(payload) = &result.encrypted_payload {
        writeln!(writer, "🔐 Query was encrypted using DNS over HTTPS (DoH)")?;
        writeln!(writer, "Encrypted Payload (SHA-256):")?;
        writeln!(writer, "{payload}")?;
    }

    writeln!(writer)?;
    writeln!(writer, "🧪 Wireshark-Style Packet Logs")?;
    write_packet_log(writer, &result.stage_events)?;

    writeln!(writer)?;
    writeln!(writer, "📊 Latency Analysis")?;
    write_latency_chart(writer, result)?;
    writeln!(writer)?;
    Ok(())
}

fn write_packet_log<W: Write>(writer: &mut W, events: &[StageEvent]) -> Result<()> {
    let rows: Vec<[String; 5]> = events
        .iter()
        .map(|e| {
            [
                e.time(),
                e.source.clone(),
                e.destination.clone(),
                e.protocol.clone(),
                e.info.clone(),
            ]
        })
        .collect();

    let mut widths = LOG_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(writer, &LOG_HEADERS.map(String::from), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(writer, "{}", rule.join("-+-"))?;
    for row in &rows {
        write_row(writer, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, cells: &[String; 5], widths: &[usize; 5]) -> Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    writeln!(writer, "{}", padded.join(" | ").trim_end())?;
    Ok(())
}

/// One bar per timed stage, scaled to the slowest stage.
fn write_latency_chart<W: Write>(writer: &mut W, result: &ResolutionResult) -> Result<()> {
    let timed: Vec<(&str, u32)> = result
        .stage_events
        .iter()
        .filter_map(|e| e.latency_ms.map(|ms| (e.stage.as_str(), ms)))
        .collect();
    let label_width = timed
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("Total".len());
    let slowest = timed.iter().map(|(_, ms)| *ms).max().unwrap_or(0);

    for (name, ms) in &timed {
        let bar = "█".repeat(bar_length(*ms, slowest));
        writeln!(
            writer,
            "{name:<label_width$} | {bar:<chart$} {ms:>3} ms",
            chart = LATENCY_CHART_WIDTH
        )?;
    }
    writeln!(
        writer,
        "{:<label_width$} | {:<chart$} {:>3} ms",
        "Total",
        "",
        result.total_latency_ms(),
        chart = LATENCY_CHART_WIDTH
    )?;
    Ok(())
}

fn bar_length(ms: u32, slowest: u32) -> usize {
    if slowest == 0 {
        return 0;
    }
    let scaled = u64::from(ms) * LATENCY_CHART_WIDTH as u64 / u64::from(slowest);
    // at least one block for any non-zero latency
    (scaled as usize).max(usize::from(ms > 0))
}
