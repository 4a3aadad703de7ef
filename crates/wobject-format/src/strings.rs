//! Packed string table.
//!
//! All strings live in one byte buffer, each followed by a NUL byte so the
//! runtime can hand them out as C strings. Entries give the offset from the
//! buffer start and the length without the terminator.

use serde::Serialize;

/// Location of one string inside the packed buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[repr(C)]
pub struct StringEntry {
    pub offset: u32,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<StringEntry>() == 8);

impl StringEntry {
    pub const fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    /// One past the terminating NUL.
    #[inline]
    pub const fn end_with_nul(&self) -> usize {
        self.offset as usize + self.len as usize + 1
    }
}

/// Read-only view of the string table.
#[derive(Clone, Copy, Debug)]
pub struct StringsView<'a> {
    entries: &'a [StringEntry],
    data: &'a [u8],
}

impl<'a> StringsView<'a> {
    /// Wrap entries and data without checking them.
    ///
    /// [`MetaTables::new`](crate::MetaTables::new) performs the checks for
    /// foreign input; tables built by this workspace are valid by construction.
    pub const fn new_unchecked(entries: &'a [StringEntry], data: &'a [u8]) -> Self {
        Self { entries, data }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &'a [StringEntry] {
        self.entries
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Raw bytes of string `index` (without the NUL).
    pub fn bytes(&self, index: u32) -> Option<&'a [u8]> {
        let entry = self.entries.get(index as usize)?;
        let start = entry.offset as usize;
        self.data.get(start..start + entry.len as usize)
    }

    /// String `index`, if present and valid UTF-8.
    pub fn get(&self, index: u32) -> Option<&'a str> {
        self.bytes(index).and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Index of the first string equal to `s`.
    pub fn position(&self, s: &str) -> Option<u32> {
        (0..self.entries.len() as u32).find(|&i| self.bytes(i) == Some(s.as_bytes()))
    }

    pub fn iter(self) -> impl Iterator<Item = (u32, &'a str)> {
        (0..self.entries.len() as u32).filter_map(move |i| self.get(i).map(|s| (i, s)))
    }
}
