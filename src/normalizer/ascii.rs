// WHY: case logic is restricted to the 7-bit letter ranges; every other byte is opaque

/// Bit that separates an ASCII lowercase letter from its uppercase form
pub const ASCII_CASE_BIT: u8 = 0x20;

/// Case class of a single byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClass {
    Lower,
    Upper,
    Other,
}

impl CaseClass {
    pub fn of(byte: u8) -> Self {
        match byte {
            b'a'..=b'z' => CaseClass::Lower,
            b'A'..=b'Z' => CaseClass::Upper,
            _ => CaseClass::Other,
        }
    }

    pub fn is_letter(self) -> bool {
        self != CaseClass::Other
    }
}

/// Upper-case a byte, leaving anything outside `a`-`z` untouched
pub fn to_upper(byte: u8) -> u8 {
    if CaseClass::of(byte) == CaseClass::Lower {
        byte & !ASCII_CASE_BIT
    } else {
        byte
    }
}

/// Lower-case a byte, leaving anything outside `A`-`Z` untouched
pub fn to_lower(byte: u8) -> u8 {
    if CaseClass::of(byte) == CaseClass::Upper {
        byte | ASCII_CASE_BIT
    } else {
        byte
    }
}

/// Whitespace class accepted by the trailing trim: space, tab, newline,
/// vertical tab, form feed and carriage return
pub fn is_trailing_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
