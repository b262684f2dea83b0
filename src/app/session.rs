//! Session driver: feeds domains to the engine and paces the output.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::statistics::{print_stage_statistics, SessionReport};
use crate::config::Config;
use crate::dns::{
    DomainRecords, LatencySource, RandomLatency, ResolutionResult, SessionCache, WalkEngine,
};
use crate::error_handling::validate_domain_input;
use crate::export::{narrated_stages, open_output, Exporter};

/// Runs a session, reading domains from stdin when none are configured.
pub async fn run_session(config: Config) -> Result<SessionReport> {
    let stdin = BufReader::new(tokio::io::stdin());
    run_session_with_input(config, stdin).await
}

/// Runs a session over `config.domains`, or over the lines of `input` when
/// no domains are configured.
///
/// Configured domains are used verbatim and all must be non-empty; nothing
/// is resolved otherwise. Input lines are trimmed and blank lines skipped.
///
/// # Errors
///
/// Returns an error if a configured domain is empty, if the output cannot be
/// opened or written, or if reading `input` fails.
pub async fn run_session_with_input<R>(config: Config, input: R) -> Result<SessionReport>
where
    R: AsyncBufRead + Unpin,
{
    for domain in &config.domains {
        validate_domain_input(domain)?;
    }

    let start = Instant::now();
    let sink = open_output(config.output.as_deref())?;
    let mut exporter = Exporter::new(config.format, sink);
    let latency = match config.seed {
        Some(seed) => RandomLatency::seeded(seed),
        None => RandomLatency::from_entropy(),
    };
    let mut engine = WalkEngine::with_parts(
        DomainRecords::default(),
        Arc::new(SessionCache::new()),
        latency,
    )
    .cache_unknown(config.cache_unknown);
    let delay = Duration::from_millis(config.step_delay_ms);
    let mut report = SessionReport::default();

    if config.domains.is_empty() {
        debug!("No domains given, reading from input");
        let mut lines = input.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read domain from input")?
        {
            let domain = line.trim();
            if domain.is_empty() {
                continue;
            }
            simulate(&mut engine, &mut exporter, &config, domain, delay, &mut report).await?;
        }
    } else {
        for domain in &config.domains {
            simulate(&mut engine, &mut exporter, &config, domain, delay, &mut report).await?;
        }
    }

    exporter.close()?;
    report.cached_entries = engine.cache().snapshot();
    report.cached_domains = report.cached_entries.len();
    report.elapsed_seconds = start.elapsed().as_secs_f64();

    if report.queries == 0 {
        warn!("No domains were resolved");
    }
    print_stage_statistics(&report);
    Ok(report)
}

async fn simulate<L: LatencySource>(
    engine: &mut WalkEngine<L>,
    exporter: &mut Exporter,
    config: &Config,
    domain: &str,
    delay: Duration,
    report: &mut SessionReport,
) -> Result<()> {
    let result = engine.resolve(domain, config.mode);
    info!(
        "{} -> {} ({}, {} stage{}, {} ms)",
        result.domain,
        result.ip,
        if result.cache_hit { "cache hit" } else { "cache miss" },
        result.stage_events.len(),
        if result.stage_events.len() == 1 { "" } else { "s" },
        result.total_latency_ms()
    );
    present(exporter, &result, delay).await?;
    report.record(&result);
    Ok(())
}

/// Replays a finished walk stage by stage, pausing between narrated stages.
async fn present(
    exporter: &mut Exporter,
    result: &ResolutionResult,
    delay: Duration,
) -> Result<()> {
    exporter.begin(result)?;
    let pace = exporter.narrates() && !delay.is_zero();
    for stage in narrated_stages(result) {
        exporter.step(result, stage)?;
        if pace {
            tokio::time::sleep(delay).await;
        }
    }
    exporter.finish_result(result)
}
