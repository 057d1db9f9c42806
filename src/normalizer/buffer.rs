use std::ops::{Index, Range};

/// Mutable byte buffer holding one line while it is normalized
///
/// Every stage only ever shrinks or rewrites the buffer, so its length never
/// grows past the length it was created with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBuffer {
    bytes: Vec<u8>,
}

impl LineBuffer {
    pub fn new(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Overwrite one byte in place
    pub fn set(&mut self, index: usize, byte: u8) {
        self.bytes[index] = byte;
    }

    /// Remove the byte at `index`, shifting everything after it left by one
    pub fn remove_at(&mut self, index: usize) -> u8 {
        self.bytes.remove(index)
    }

    /// Remove a range of bytes, shifting the tail left to close the gap
    pub fn remove_range(&mut self, range: Range<usize>) {
        self.bytes.drain(range);
    }

    /// Keep bytes for which `keep` returns true; `keep` sees bytes left to right
    pub fn retain(&mut self, keep: impl FnMut(&u8) -> bool) {
        self.bytes.retain(keep);
    }

    pub fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Index<usize> for LineBuffer {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}
