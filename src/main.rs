use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordnorm::{
    normalize_line, write_report, write_stats, BatchReader, LengthPolicy, NormalizedLine,
    OutputFormat, ReaderConfig, RunStats, DEFAULT_MAX_CHARS,
};

#[derive(Parser, Debug)]
#[command(name = "wordnorm")]
#[command(about = "Normalize a batch of short lines and report case and space changes")]
#[command(version)]
struct Args {
    /// Batch file: a line count followed by the lines (stdin when omitted)
    input: Option<PathBuf>,

    /// Longest line kept, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_CHARS)]
    max_chars: usize,

    /// Handling of lines longer than --max-chars
    #[arg(long, value_enum, default_value_t = LengthPolicy::Truncate)]
    length_policy: LengthPolicy,

    /// Output rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Log filter, e.g. "info" or "wordnorm=debug"
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: stdout carries the report, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_new(&args.log_level).context("Invalid --log-level filter")?)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    if args.max_chars == 0 {
        anyhow::bail!("--max-chars must be at least 1");
    }

    let run_start = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let reader = BatchReader::new(ReaderConfig {
        max_chars: args.max_chars,
        length_policy: args.length_policy,
        ..Default::default()
    });

    let (inputs, read_stats) = match &args.input {
        Some(path) => reader
            .read_path(path)
            .await
            .with_context(|| format!("Failed to read batch from {}", path.display()))?,
        None => reader.read_stdin().await.context("Failed to read batch from stdin")?,
    };

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(inputs.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} lines")
                .context("Invalid progress template")?,
        );
        bar
    };

    let started = Instant::now();
    let lines: Vec<NormalizedLine> = inputs
        .iter()
        .map(|input| {
            let line = normalize_line(&input.bytes);
            progress.inc(1);
            line
        })
        .collect();
    progress.finish_and_clear();
    let processing_time_ms = started.elapsed().as_millis() as u64;

    info!(lines = lines.len(), processing_time_ms, "Normalization complete");

    write_report(tokio::io::stdout(), args.format, &inputs, &lines)
        .await
        .context("Failed to write report")?;

    if let Some(stats_path) = &args.stats_out {
        let stats = RunStats {
            run_start,
            read_time_ms: read_stats.duration_ms,
            processing_time_ms,
            ..RunStats::from_batch(&inputs, &lines)
        };
        write_stats(stats_path, &stats).await?;
        info!("Run stats written to {}", stats_path.display());
    }

    Ok(())
}
