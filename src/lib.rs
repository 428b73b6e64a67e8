pub mod channels;
pub mod dedup;
pub mod ipv6;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use channels::Catalog;

/// File locations for one filtering run.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total_channels: usize,
    pub ipv6_channels: usize,
    pub unique_channels: usize,
    pub categories: usize,
}

/// How a run ended. Only `Written` produces an output file; the other two
/// are the recoverable early returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Input missing, or it held no parsable channels.
    NoChannels,
    /// Channels parsed, but none matched the IPv6 heuristic.
    NoIpv6Channels,
    /// Output written.
    Written(RunSummary),
}

/// Runs the whole pipeline: read, keep IPv6 channels, dedup, write.
pub fn run(paths: &RunPaths) -> Result<RunOutcome> {
    info!("Reading channel list from {}...", paths.input.display());
    let catalog = channels::read_channel_list(&paths.input)?;
    if catalog.is_empty() {
        warn!("No channels found in {}", paths.input.display());
        return Ok(RunOutcome::NoChannels);
    }
    info!(
        "Found {} total channels across {} categories",
        catalog.channel_count(),
        catalog.category_count()
    );

    let ipv6 = ipv6::filter_ipv6_channels(&catalog);
    if ipv6.is_empty() {
        warn!("No IPv6 channels found");
        return Ok(RunOutcome::NoIpv6Channels);
    }
    info!("Found {} IPv6 channels", ipv6.channel_count());

    let deduped = dedup::dedup_channels(&ipv6);
    info!(
        "After deduplication: {} unique IPv6 channels",
        deduped.channel_count()
    );

    info!("Saving IPv6 channels to {}...", paths.output.display());
    output::write_channel_list(&paths.output, &deduped)?;

    log_category_summary(&deduped);

    Ok(RunOutcome::Written(RunSummary {
        total_channels: catalog.channel_count(),
        ipv6_channels: ipv6.channel_count(),
        unique_channels: deduped.channel_count(),
        categories: deduped.category_count(),
    }))
}

fn log_category_summary(catalog: &Catalog) {
    info!("IPv6 channels by category:");
    for (category, channels) in catalog.iter() {
        if !channels.is_empty() {
            info!("  {}: {} channels", category, channels.len());
        }
    }
}
