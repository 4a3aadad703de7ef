//! Type tokens: one u32 multiplexing two encodings.
//!
//! - High bit clear: a built-in type id.
//! - High bit set: a string-table index naming the type, resolved at runtime.

use serde::Serialize;
use wobject_core::BuiltinType;

use super::constants::{EMPTY_STRING_INDEX, IS_UNRESOLVED_TYPE};

/// Encoded type reference stored in parameter blocks and property records.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[repr(transparent)]
pub struct TypeToken(pub u32);

/// Decoded form of a [`TypeToken`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    /// Built-in type id (may be unknown to [`BuiltinType`]).
    Builtin(u32),
    /// Index into the string table holding the type name.
    Unresolved(u32),
}

impl TypeToken {
    /// Synthetic return type of every constructor.
    ///
    /// Index 1 is the reserved empty string, so this never names a real type.
    pub const CONSTRUCTOR_RETURN: Self = Self(IS_UNRESOLVED_TYPE | EMPTY_STRING_INDEX);

    #[inline]
    pub const fn builtin(builtin: BuiltinType) -> Self {
        Self(builtin.id())
    }

    /// Token naming a type by string index.
    ///
    /// # Panics
    /// Panics (at compile time when evaluated in a constant) if the index
    /// collides with the marker bit.
    #[inline]
    pub const fn unresolved(string_index: u32) -> Self {
        assert!(
            string_index & IS_UNRESOLVED_TYPE == 0,
            "string index overflows into the unresolved-type bit"
        );
        Self(IS_UNRESOLVED_TYPE | string_index)
    }

    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 & IS_UNRESOLVED_TYPE == 0
    }

    /// Built-in id or string index, with the marker bit stripped.
    #[inline]
    pub const fn payload(self) -> u32 {
        self.0 & !IS_UNRESOLVED_TYPE
    }

    pub const fn decode(self) -> TokenKind {
        if self.is_builtin() {
            TokenKind::Builtin(self.0)
        } else {
            TokenKind::Unresolved(self.payload())
        }
    }

    /// The built-in type, if this token is one the crate knows.
    pub const fn as_builtin(self) -> Option<BuiltinType> {
        if self.is_builtin() {
            BuiltinType::from_id(self.0)
        } else {
            None
        }
    }
}

impl From<BuiltinType> for TypeToken {
    fn from(builtin: BuiltinType) -> Self {
        Self::builtin(builtin)
    }
}
