use std::ops::Range;

/// Half-open byte range of one space-delimited word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
}

impl WordSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Left-to-right word scan over a buffer that may shrink between words
///
/// After each word the caller reports how many bytes it deleted inside that
/// word, so the cursor follows the buffer's current layout instead of the
/// layout it had when the word was found. The last word is always yielded,
/// even when it is empty.
#[derive(Debug, Default)]
pub struct WordScanner {
    start: usize,
    finished: bool,
}

impl WordScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The word starting at the cursor, or `None` once the scan has ended
    pub fn next_span(&self, bytes: &[u8]) -> Option<WordSpan> {
        if self.finished {
            return None;
        }

        let start = self.start.min(bytes.len());
        let end = bytes[start..]
            .iter()
            .position(|&byte| byte == b' ')
            .map_or(bytes.len(), |offset| start + offset);

        Some(WordSpan { start, end })
    }

    /// Move past `span`, which lost `removed` bytes while it was processed
    pub fn advance(&mut self, span: WordSpan, removed: usize, buffer_len: usize) {
        let boundary = span.end.saturating_sub(removed);

        if boundary >= buffer_len {
            self.finished = true;
        } else {
            self.start = boundary + 1;
        }
    }
}
