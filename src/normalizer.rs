// WHY: one mutable buffer and one change record per line; no state survives between lines

pub mod ascii;
pub mod buffer;
pub mod case;
pub mod changes;
pub mod collapse;
pub mod dedup;
pub mod segment;
pub mod trim;

use std::borrow::Cow;

pub use buffer::LineBuffer;
pub use changes::ChangeRecord;
pub use segment::{WordScanner, WordSpan};

/// A fully normalized line together with its change statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine {
    pub text: Vec<u8>,
    pub changes: ChangeRecord,
}

impl NormalizedLine {
    /// Text as UTF-8, replacing invalid sequences
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

/// Normalize one line of raw bytes
///
/// Stages run in a fixed order: leading trim, trailing trim, space collapse,
/// then a single word scan that re-cases each word and collapses its
/// adjacent duplicates. Total over every input.
pub fn normalize_line(input: &[u8]) -> NormalizedLine {
    let mut buffer = LineBuffer::new(input);
    let mut changes = ChangeRecord::default();

    trim::trim_start(&mut buffer, &mut changes);
    trim::trim_end(&mut buffer, &mut changes);
    collapse::collapse_spaces(&mut buffer, &mut changes);

    let mut scanner = WordScanner::new();
    while let Some(span) = scanner.next_span(buffer.as_bytes()) {
        case::normalize_word(&mut buffer, span, &mut changes);
        let removed = dedup::collapse_duplicates(&mut buffer, span, &mut changes);
        scanner.advance(span, removed, buffer.len());
    }

    NormalizedLine {
        text: buffer.into_bytes(),
        changes,
    }
}

pub fn normalize_str(input: &str) -> NormalizedLine {
    normalize_line(input.as_bytes())
}

/// Normalize every line in order
pub fn normalize_batch<I, L>(lines: I) -> Vec<NormalizedLine>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    lines
        .into_iter()
        .map(|line| normalize_line(line.as_ref()))
        .collect()
}
