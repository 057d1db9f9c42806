use super::buffer::LineBuffer;
use super::changes::ChangeRecord;

/// Collapse every run of spaces into one space
///
/// Every space seen counts toward `spaces_before`; each run contributes one
/// `spaces_after` for the space it keeps. A buffer holding only spaces
/// collapses to a single space, though after trimming that case is empty.
pub fn collapse_spaces(buffer: &mut LineBuffer, changes: &mut ChangeRecord) {
    let mut in_run = false;

    buffer.retain(|&byte| {
        if byte != b' ' {
            in_run = false;
            return true;
        }

        changes.spaces_before += 1;
        if in_run {
            false
        } else {
            in_run = true;
            changes.spaces_after += 1;
            true
        }
    });
}
