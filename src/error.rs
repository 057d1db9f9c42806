use std::path::PathBuf;

pub type InputResult<T> = Result<T, InputError>;

/// Failures while acquiring a batch of lines
///
/// Each of these aborts the whole batch; normalization itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Input is empty: expected a line count")]
    MissingCount,

    #[error("Invalid line count: {raw:?}")]
    InvalidCount { raw: String },

    #[error("Unexpected end of input at line {line}: {expected} lines were declared")]
    UnexpectedEof { line: usize, expected: usize },

    #[error("Line {line} is {len} bytes long, the limit is {max}")]
    LineTooLong { line: usize, len: usize, max: usize },

    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
