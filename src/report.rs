use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

use crate::normalizer::{ChangeRecord, NormalizedLine};
use crate::reader::InputLine;

/// Rendering used for the normalized batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text followed by the three counter lines and a blank line
    #[default]
    Text,
    /// One JSON array of line reports
    Json,
}

/// Render one line as text: the normalized bytes, three counter lines, a blank line
pub fn render_text(line: &NormalizedLine) -> Vec<u8> {
    let changes = &line.changes;
    let mut out = Vec::with_capacity(line.text.len() + 64);

    out.extend_from_slice(&line.text);
    out.push(b'\n');
    out.extend_from_slice(
        format!(
            "lowercase: {} -> {}\nuppercase: {} -> {}\nspaces: {} -> {}\n\n",
            changes.lower_before,
            changes.lower_after,
            changes.upper_before,
            changes.upper_after,
            changes.spaces_before,
            changes.spaces_after,
        )
        .as_bytes(),
    );
    out
}

/// JSON view of one processed line
#[derive(Serialize, Debug)]
pub struct LineReport<'a> {
    pub index: usize,
    pub text: Cow<'a, str>,
    pub truncated: bool,
    pub changes: ChangeRecord,
}

impl<'a> LineReport<'a> {
    pub fn new(input: &InputLine, line: &'a NormalizedLine) -> Self {
        Self {
            index: input.number,
            text: line.text_lossy(),
            truncated: input.truncated,
            changes: line.changes,
        }
    }
}

pub fn render_json(inputs: &[InputLine], lines: &[NormalizedLine]) -> serde_json::Result<String> {
    let reports: Vec<LineReport<'_>> = inputs
        .iter()
        .zip(lines)
        .map(|(input, line)| LineReport::new(input, line))
        .collect();
    serde_json::to_string_pretty(&reports)
}

/// Write the whole batch in the chosen format
pub async fn write_report<W>(
    writer: W,
    format: OutputFormat,
    inputs: &[InputLine],
    lines: &[NormalizedLine],
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut writer = BufWriter::new(writer);

    match format {
        OutputFormat::Text => {
            for line in lines {
                writer.write_all(&render_text(line)).await?;
            }
        }
        OutputFormat::Json => {
            let json = render_json(inputs, lines)?;
            writer.write_all(json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
    }

    writer.flush().await?;
    Ok(())
}

/// Whole-run statistics written with `--stats-out`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    /// Unix timestamp (seconds) when the run started
    pub run_start: u64,
    pub lines_processed: usize,
    pub lines_truncated: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
    /// Change counters summed over every line
    pub totals: ChangeRecord,
    pub read_time_ms: u64,
    pub processing_time_ms: u64,
}

impl RunStats {
    pub fn from_batch(inputs: &[InputLine], lines: &[NormalizedLine]) -> Self {
        let mut totals = ChangeRecord::default();
        for line in lines {
            totals.accumulate(&line.changes);
        }

        Self {
            lines_processed: lines.len(),
            lines_truncated: inputs.iter().filter(|input| input.truncated).count(),
            bytes_in: inputs.iter().map(|input| input.bytes.len()).sum(),
            bytes_out: lines.iter().map(|line| line.text.len()).sum(),
            totals,
            ..Default::default()
        }
    }
}

/// Write run statistics as pretty JSON
pub async fn write_stats(path: &Path, stats: &RunStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write stats to {}", path.display()))?;
    Ok(())
}
