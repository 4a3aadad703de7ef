//! Integer table header (14 words).
//!
//! Layout:
//! - 0: revision
//! - 1: class name string index
//! - 2-3: class info count/offset (unused, zero)
//! - 4-5: method count/offset
//! - 6-7: property count/offset
//! - 8-9: enum count/offset (unused, zero)
//! - 10-11: constructor count/offset
//! - 12: flags (zero)
//! - 13: signal count

use serde::Serialize;

use super::constants::{CLASS_NAME_INDEX, HEADER_LEN, REVISION};

/// Decoded table header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Header {
    pub revision: u32,
    pub class_name: u32,
    pub class_info_count: u32,
    pub class_info_offset: u32,
    pub method_count: u32,
    pub method_offset: u32,
    pub property_count: u32,
    pub property_offset: u32,
    pub enum_count: u32,
    pub enum_offset: u32,
    pub constructor_count: u32,
    pub constructor_offset: u32,
    pub flags: u32,
    pub signal_count: u32,
}

impl Default for Header {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Header {
    /// Header of a class with no members.
    pub const EMPTY: Self = Self {
        revision: REVISION,
        class_name: CLASS_NAME_INDEX,
        class_info_count: 0,
        class_info_offset: 0,
        method_count: 0,
        method_offset: HEADER_LEN as u32,
        property_count: 0,
        property_offset: HEADER_LEN as u32,
        enum_count: 0,
        enum_offset: 0,
        constructor_count: 0,
        constructor_offset: HEADER_LEN as u32,
        flags: 0,
        signal_count: 0,
    };

    /// Decode from the first 14 words.
    ///
    /// # Panics
    /// Panics if fewer than 14 words are given; callers validate length first.
    pub fn from_words(words: &[u32]) -> Self {
        assert!(words.len() >= HEADER_LEN, "header too short");
        Self {
            revision: words[0],
            class_name: words[1],
            class_info_count: words[2],
            class_info_offset: words[3],
            method_count: words[4],
            method_offset: words[5],
            property_count: words[6],
            property_offset: words[7],
            enum_count: words[8],
            enum_offset: words[9],
            constructor_count: words[10],
            constructor_offset: words[11],
            flags: words[12],
            signal_count: words[13],
        }
    }

    /// Encode to 14 words.
    pub const fn to_words(&self) -> [u32; HEADER_LEN] {
        [
            self.revision,
            self.class_name,
            self.class_info_count,
            self.class_info_offset,
            self.method_count,
            self.method_offset,
            self.property_count,
            self.property_offset,
            self.enum_count,
            self.enum_offset,
            self.constructor_count,
            self.constructor_offset,
            self.flags,
            self.signal_count,
        ]
    }

    pub fn validate_revision(&self) -> bool {
        self.revision == REVISION
    }
}
