use super::buffer::LineBuffer;
use super::changes::ChangeRecord;
use super::segment::WordSpan;

/// True when two neighbouring bytes of the word are identical
pub fn has_adjacent_duplicates(word: &[u8]) -> bool {
    word.windows(2).any(|pair| pair[0] == pair[1])
}

/// Collapse every run of identical adjacent bytes in the word to one byte
///
/// Deleted bytes shift the whole remaining buffer left, so words after
/// `span` move too. Each deleted letter retracts the "after" count the case
/// pass gave it. Returns how many bytes were removed.
pub fn collapse_duplicates(
    buffer: &mut LineBuffer,
    span: WordSpan,
    changes: &mut ChangeRecord,
) -> usize {
    if !has_adjacent_duplicates(&buffer.as_bytes()[span.range()]) {
        return 0;
    }

    let mut removed = 0;
    let mut end = span.end;
    let mut next = span.start + 1;

    while next < end {
        if buffer[next] == buffer[next - 1] {
            let byte = buffer.remove_at(next);
            changes.retract_after(byte);
            removed += 1;
            end -= 1;
        } else {
            next += 1;
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dedup_whole(input: &str, changes: &mut ChangeRecord) -> (String, usize) {
        let mut buffer = LineBuffer::from(input);
        let span = WordSpan { start: 0, end: buffer.len() };
        let removed = collapse_duplicates(&mut buffer, span, changes);
        (String::from_utf8(buffer.into_bytes()).unwrap(), removed)
    }

    #[test]
    fn test_detects_adjacent_duplicates() {
        assert!(has_adjacent_duplicates(b"AABC"));
        assert!(has_adjacent_duplicates(b"ab!!"));
        assert!(!has_adjacent_duplicates(b"ABAB"));
        assert!(!has_adjacent_duplicates(b"Aa"));
        assert!(!has_adjacent_duplicates(b"x"));
        assert!(!has_adjacent_duplicates(b""));
    }

    #[test]
    fn test_runs_collapse_fully() {
        let mut changes = ChangeRecord { upper_after: 4, ..Default::default() };
        let (word, removed) = dedup_whole("AAAB", &mut changes);
        assert_eq!(word, "AB");
        assert_eq!(removed, 2);
        assert_eq!(changes.upper_after, 2);
    }

    #[test]
    fn test_retracts_matching_case_counter() {
        let mut changes = ChangeRecord { upper_after: 1, lower_after: 4, ..Default::default() };
        let (word, removed) = dedup_whole("Helloo", &mut changes);
        assert_eq!(word, "Helo");
        assert_eq!(removed, 2);
        assert_eq!(changes.upper_after, 1);
        assert_eq!(changes.lower_after, 2);
    }

    #[test]
    fn test_non_letter_duplicates_removed_without_counting() {
        let mut changes = ChangeRecord::default();
        let (word, removed) = dedup_whole("11--", &mut changes);
        assert_eq!(word, "1-");
        assert_eq!(removed, 2);
        assert_eq!(changes, ChangeRecord::default());
    }

    #[test]
    fn test_following_words_shift_left() {
        let mut buffer = LineBuffer::from("AABB CD");
        let mut changes = ChangeRecord { upper_after: 6, ..Default::default() };
        let removed = collapse_duplicates(&mut buffer, WordSpan { start: 0, end: 4 }, &mut changes);
        assert_eq!(removed, 2);
        assert_eq!(buffer.as_bytes(), b"AB CD");
    }

    #[test]
    fn test_stops_at_word_boundary() {
        let mut buffer = LineBuffer::from("AB BC");
        let mut changes = ChangeRecord::default();
        // the B before the space and the B after it are in different words
        let removed = collapse_duplicates(&mut buffer, WordSpan { start: 0, end: 2 }, &mut changes);
        assert_eq!(removed, 0);
        assert_eq!(buffer.as_bytes(), b"AB BC");
    }

    #[test]
    fn test_empty_span() {
        let mut buffer = LineBuffer::default();
        let mut changes = ChangeRecord::default();
        assert_eq!(collapse_duplicates(&mut buffer, WordSpan { start: 0, end: 0 }, &mut changes), 0);
    }
}
