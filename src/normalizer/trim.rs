use super::ascii::is_trailing_whitespace;
use super::buffer::LineBuffer;
use super::changes::ChangeRecord;

/// Remove leading space characters (only `' '`), counting each as a space before
pub fn trim_start(buffer: &mut LineBuffer, changes: &mut ChangeRecord) {
    let leading = buffer
        .as_bytes()
        .iter()
        .take_while(|&&byte| byte == b' ')
        .count();

    if leading > 0 {
        buffer.remove_range(0..leading);
    }
    changes.spaces_before += leading;
}

/// Remove trailing whitespace of any class; only literal spaces are counted
pub fn trim_end(buffer: &mut LineBuffer, changes: &mut ChangeRecord) {
    let mut end = buffer.len();

    while end > 0 && is_trailing_whitespace(buffer[end - 1]) {
        if buffer[end - 1] == b' ' {
            changes.spaces_before += 1;
        }
        end -= 1;
    }

    buffer.truncate(end);
}
