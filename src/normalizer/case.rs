use super::ascii::{to_lower, to_upper, CaseClass};
use super::buffer::LineBuffer;
use super::changes::ChangeRecord;
use super::segment::WordSpan;

/// True when the word holds no uppercase letter; non-letters do not count
pub fn is_all_lowercase(word: &[u8]) -> bool {
    !word.iter().any(|&byte| CaseClass::of(byte) == CaseClass::Upper)
}

/// Re-case one word in place
///
/// An all-lowercase word is upper-cased entirely. Any other word gets its
/// first byte upper-cased and every later letter lower-cased, so a word that
/// starts with a non-letter ends up with no capital at all. Non-letter bytes
/// are neither converted nor counted.
pub fn normalize_word(buffer: &mut LineBuffer, span: WordSpan, changes: &mut ChangeRecord) {
    if is_all_lowercase(&buffer.as_bytes()[span.range()]) {
        upper_case_word(buffer, span, changes);
    } else {
        title_case_word(buffer, span, changes);
    }
}

fn upper_case_word(buffer: &mut LineBuffer, span: WordSpan, changes: &mut ChangeRecord) {
    for index in span.range() {
        let byte = buffer[index];
        let class = CaseClass::of(byte);
        if class.is_letter() {
            changes.record_letter(class, CaseClass::Upper);
            buffer.set(index, to_upper(byte));
        }
    }
}

fn title_case_word(buffer: &mut LineBuffer, span: WordSpan, changes: &mut ChangeRecord) {
    for index in span.range() {
        let byte = buffer[index];
        let class = CaseClass::of(byte);
        if !class.is_letter() {
            continue;
        }

        // only the first byte of the word may be upper-cased, even when it is not a letter
        if index == span.start {
            changes.record_letter(class, CaseClass::Upper);
            buffer.set(index, to_upper(byte));
        } else {
            changes.record_letter(class, CaseClass::Lower);
            buffer.set(index, to_lower(byte));
        }
    }
}
