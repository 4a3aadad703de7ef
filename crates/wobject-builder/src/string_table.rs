//! Append-only string table builder.
//!
//! The builder writes into a caller-provided slot slice and keeps counting
//! past its end, so a zero-capacity builder measures the table and a
//! right-sized one fills it. Indices are issued in append order; nothing is
//! deduplicated.

use wobject_format::StringEntry;

pub struct StringTableBuilder<'s, 'a> {
    slots: &'s mut [&'a str],
    len: usize,
    byte_len: usize,
}

impl<'s, 'a> StringTableBuilder<'s, 'a> {
    pub const fn new(slots: &'s mut [&'a str]) -> Self {
        Self {
            slots,
            len: 0,
            byte_len: 0,
        }
    }

    /// Append `s` and return its index.
    pub const fn append(&mut self, s: &'a str) -> u32 {
        let index = self.len;
        if index < self.slots.len() {
            self.slots[index] = s;
        }
        self.len += 1;
        self.byte_len += s.len() + 1;
        index as u32
    }

    /// Number of appended strings.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed size in bytes, one NUL per string included.
    pub const fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Whether every appended string landed in a slot.
    pub const fn is_complete(&self) -> bool {
        self.len <= self.slots.len()
    }

    /// Pack the stored strings into `entries` and `bytes`.
    pub const fn finalize(&self, entries: &mut [StringEntry], bytes: &mut [u8]) {
        assert!(self.is_complete(), "string table overflowed its slots");
        pack(&*self.slots, self.len, entries, bytes);
    }
}

/// Concatenate the first `count` strings, each followed by a NUL.
const fn pack(strings: &[&str], count: usize, entries: &mut [StringEntry], bytes: &mut [u8]) {
    assert!(entries.len() == count, "string entry count mismatch");
    let mut at = 0;
    let mut i = 0;
    while i < count {
        let s = strings[i].as_bytes();
        entries[i] = StringEntry::new(at as u32, s.len() as u32);
        let mut j = 0;
        while j < s.len() {
            bytes[at + j] = s[j];
            j += 1;
        }
        bytes[at + s.len()] = 0;
        at += s.len() + 1;
        i += 1;
    }
    assert!(at == bytes.len(), "string data length mismatch");
}
