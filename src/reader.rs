use std::path::Path;
use std::time::Instant;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::error::{InputError, InputResult};

/// Significant bytes kept per line by default
pub const DEFAULT_MAX_CHARS: usize = 50;

// WHY: the declared count is untrusted, so the line table grows on demand past this
const MAX_PREALLOCATED_LINES: usize = 1024;

/// Longest count line kept while parsing; anything longer is not a valid count
const MAX_COUNT_LINE: usize = 64;

/// What to do with a line longer than the configured limit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Keep the first `max_chars` bytes and drop the rest of the line
    #[default]
    Truncate,
    /// Fail the batch
    Reject,
}

/// Configuration for batch input reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Longest line accepted, in bytes, excluding the newline
    pub max_chars: usize,
    /// Handling of lines over `max_chars`
    pub length_policy: LengthPolicy,
    /// Buffer size for async reading
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            length_policy: LengthPolicy::Truncate,
            buffer_size: 8192,
        }
    }
}

/// One input line as handed to the normalizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    /// 1-based position among the declared lines
    pub number: usize,
    pub bytes: Vec<u8>,
    pub truncated: bool,
}

/// Statistics for one batch read
#[derive(Debug, Clone, Default)]
pub struct ReadStats {
    pub lines_declared: usize,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub lines_truncated: u64,
    pub duration_ms: u64,
}

/// Reads a line count followed by that many lines
pub struct BatchReader {
    config: ReaderConfig,
}

impl BatchReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a batch from a file
    pub async fn read_path<P: AsRef<Path>>(&self, path: P) -> InputResult<(Vec<InputLine>, ReadStats)> {
        let path = path.as_ref();
        debug!("Opening batch input: {}", path.display());

        let file = File::open(path).await.map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.read_batch(BufReader::with_capacity(self.config.buffer_size, file)).await
    }

    /// Read a batch from standard input
    pub async fn read_stdin(&self) -> InputResult<(Vec<InputLine>, ReadStats)> {
        debug!("Reading batch input from stdin");
        let stdin = tokio::io::stdin();
        self.read_batch(BufReader::with_capacity(self.config.buffer_size, stdin)).await
    }

    /// Read the count line and then every declared line
    ///
    /// Lines are raw bytes; only the trailing `\n` is removed. Running out of
    /// input before the declared count is reached fails the whole batch.
    pub async fn read_batch<R>(&self, mut reader: R) -> InputResult<(Vec<InputLine>, ReadStats)>
    where
        R: AsyncBufRead + Unpin,
    {
        let start_time = Instant::now();
        let mut stats = ReadStats::default();
        let mut raw = Vec::new();

        let count = read_line_bounded(&mut reader, MAX_COUNT_LINE, &mut raw).await?;
        if count.consumed == 0 {
            return Err(InputError::MissingCount);
        }
        stats.bytes_read += count.consumed as u64;

        if count.full_len > MAX_COUNT_LINE {
            return Err(InputError::InvalidCount {
                raw: String::from_utf8_lossy(&raw).into_owned(),
            });
        }
        let expected = parse_count(&raw)?;
        stats.lines_declared = expected;
        debug!(expected, "Parsed line count");

        let mut lines = Vec::with_capacity(expected.min(MAX_PREALLOCATED_LINES));

        for number in 1..=expected {
            let mut bytes = Vec::new();
            let read = read_line_bounded(&mut reader, self.config.max_chars, &mut bytes).await?;
            if read.consumed == 0 {
                warn!(line = number, expected, "Input ended early");
                return Err(InputError::UnexpectedEof { line: number, expected });
            }
            stats.bytes_read += read.consumed as u64;
            stats.lines_read += 1;

            let truncated = self.enforce_length(number, read.full_len)?;
            if truncated {
                stats.lines_truncated += 1;
            }

            lines.push(InputLine {
                number,
                bytes,
                truncated,
            });
        }

        stats.duration_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Read {} lines, {} bytes ({} truncated) in {}ms",
            stats.lines_read, stats.bytes_read, stats.lines_truncated, stats.duration_ms
        );

        Ok((lines, stats))
    }

    /// Decide whether a line of `full_len` bytes was cut short or must be rejected
    fn enforce_length(&self, number: usize, full_len: usize) -> InputResult<bool> {
        let max = self.config.max_chars;
        if full_len <= max {
            return Ok(false);
        }

        match self.config.length_policy {
            LengthPolicy::Truncate => {
                warn!(line = number, len = full_len, max, "Truncating long line");
                Ok(true)
            }
            LengthPolicy::Reject => Err(InputError::LineTooLong {
                line: number,
                len: full_len,
                max,
            }),
        }
    }
}

/// Result of one bounded line read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoundedRead {
    /// Bytes taken from the reader, newline included; zero means end of input
    consumed: usize,
    /// Length of the whole physical line without its newline
    full_len: usize,
}

/// Read one line into `line`, keeping at most `limit` bytes
///
/// The rest of an over-long line is consumed and dropped chunk by chunk, so
/// memory stays bounded by `limit` plus the reader's buffer.
async fn read_line_bounded<R>(reader: &mut R, limit: usize, line: &mut Vec<u8>) -> std::io::Result<BoundedRead>
where
    R: AsyncBufRead + Unpin,
{
    line.clear();
    let mut read = BoundedRead { consumed: 0, full_len: 0 };

    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            break;
        }

        let newline = available.iter().position(|&byte| byte == b'\n');
        let chunk_len = newline.unwrap_or(available.len());
        let room = limit.saturating_sub(line.len());
        line.extend_from_slice(&available[..chunk_len.min(room)]);

        let used = chunk_len + usize::from(newline.is_some());
        reader.consume(used);
        read.consumed += used;
        read.full_len += chunk_len;

        if newline.is_some() {
            break;
        }
    }

    Ok(read)
}

/// Parse the declared line count; surrounding whitespace is ignored
pub fn parse_count(raw: &[u8]) -> InputResult<usize> {
    let invalid = || InputError::InvalidCount {
        raw: String::from_utf8_lossy(raw).trim_end().to_string(),
    };

    std::str::from_utf8(raw)
        .map_err(|_| invalid())?
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid())
}
