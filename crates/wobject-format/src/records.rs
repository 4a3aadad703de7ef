//! Fixed-size member records.

use serde::Serialize;

use super::constants::{METHOD_RECORD_LEN, PROPERTY_RECORD_LEN};
use super::flags::{MethodFlags, PropertyFlags};
use super::token::TypeToken;

/// Method or constructor record (5 words).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MethodRecord {
    /// String index of the name.
    pub name: u32,
    /// Argument count.
    pub argc: u32,
    /// Absolute word offset of the parameter block.
    pub parameters: u32,
    /// Tag string index (always the empty string).
    pub tag: u32,
    pub flags: MethodFlags,
}

impl MethodRecord {
    pub fn from_words(words: &[u32]) -> Self {
        debug_assert!(words.len() >= METHOD_RECORD_LEN, "method record too short");
        Self {
            name: words[0],
            argc: words[1],
            parameters: words[2],
            tag: words[3],
            flags: MethodFlags(words[4]),
        }
    }

    pub const fn to_words(&self) -> [u32; METHOD_RECORD_LEN] {
        [
            self.name,
            self.argc,
            self.parameters,
            self.tag,
            self.flags.bits(),
        ]
    }
}

/// Property record (3 words).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyRecord {
    /// String index of the name.
    pub name: u32,
    pub type_token: TypeToken,
    pub flags: PropertyFlags,
}

impl PropertyRecord {
    pub fn from_words(words: &[u32]) -> Self {
        debug_assert!(
            words.len() >= PROPERTY_RECORD_LEN,
            "property record too short"
        );
        Self {
            name: words[0],
            type_token: TypeToken(words[1]),
            flags: PropertyFlags(words[2]),
        }
    }

    pub const fn to_words(&self) -> [u32; PROPERTY_RECORD_LEN] {
        [self.name, self.type_token.0, self.flags.bits()]
    }
}
