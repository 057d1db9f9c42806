pub mod error;
pub mod normalizer;
pub mod reader;
pub mod report;

// Re-export main types for convenient access
pub use normalizer::{
    normalize_batch, normalize_line, normalize_str,
    ChangeRecord, LineBuffer, NormalizedLine, WordSpan
};

pub use error::{InputError, InputResult};

pub use reader::{BatchReader, InputLine, LengthPolicy, ReadStats, ReaderConfig, DEFAULT_MAX_CHARS};

pub use report::{render_json, render_text, write_report, write_stats, OutputFormat, RunStats};
