//! Method and property flag words.

use std::fmt;
use std::ops::BitOr;

use serde::Serialize;

/// Member access level (low two bits of a method's flags).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Access {
    Private = 0,
    Protected = 1,
    Public = 2,
}

/// Method kind (bits 2-3 of a method's flags).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum MethodKind {
    Method = 0x00,
    Signal = 0x04,
    Slot = 0x08,
    Constructor = 0x0c,
}

impl MethodKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Signal => "signal",
            Self::Slot => "slot",
            Self::Constructor => "constructor",
        }
    }
}

/// Flags word of a method or constructor record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(transparent)]
pub struct MethodFlags(pub u32);

impl MethodFlags {
    pub const ACCESS_PRIVATE: Self = Self(0x00);
    pub const ACCESS_PROTECTED: Self = Self(0x01);
    pub const ACCESS_PUBLIC: Self = Self(0x02);
    pub const ACCESS_MASK: u32 = 0x03;

    pub const METHOD: Self = Self(MethodKind::Method as u32);
    pub const SIGNAL: Self = Self(MethodKind::Signal as u32);
    pub const SLOT: Self = Self(MethodKind::Slot as u32);
    pub const CONSTRUCTOR: Self = Self(MethodKind::Constructor as u32);
    pub const KIND_MASK: u32 = 0x0c;

    pub const COMPATIBILITY: Self = Self(0x10);
    pub const CLONED: Self = Self(0x20);
    pub const SCRIPTABLE: Self = Self(0x40);
    pub const REVISIONED: Self = Self(0x80);

    /// Public invokable method.
    pub const PUBLIC_METHOD: Self = Self::ACCESS_PUBLIC.with(Self::METHOD);
    /// Public signal.
    pub const PUBLIC_SIGNAL: Self = Self::ACCESS_PUBLIC.with(Self::SIGNAL);
    /// Public slot.
    pub const PUBLIC_SLOT: Self = Self::ACCESS_PUBLIC.with(Self::SLOT);
    /// Public constructor.
    pub const PUBLIC_CONSTRUCTOR: Self = Self::ACCESS_PUBLIC.with(Self::CONSTRUCTOR);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Union of two flag sets (usable in constants, unlike `|`).
    #[inline]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn kind(self) -> MethodKind {
        match self.0 & Self::KIND_MASK {
            0x00 => MethodKind::Method,
            0x04 => MethodKind::Signal,
            0x08 => MethodKind::Slot,
            _ => MethodKind::Constructor,
        }
    }

    /// Access level, or `None` for the unused value 3.
    pub const fn access(self) -> Option<Access> {
        match self.0 & Self::ACCESS_MASK {
            0 => Some(Access::Private),
            1 => Some(Access::Protected),
            2 => Some(Access::Public),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_signal(self) -> bool {
        self.0 & Self::KIND_MASK == MethodKind::Signal as u32
    }
}

impl BitOr for MethodFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl fmt::Debug for MethodFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodFlags({:#04x})", self.0)
    }
}

/// Flags word of a property record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(transparent)]
pub struct PropertyFlags(pub u32);

impl PropertyFlags {
    pub const INVALID: Self = Self(0x0000_0000);
    pub const READABLE: Self = Self(0x0000_0001);
    pub const WRITABLE: Self = Self(0x0000_0002);
    pub const RESETTABLE: Self = Self(0x0000_0004);
    pub const ENUM_OR_FLAG: Self = Self(0x0000_0008);
    pub const STD_CPP_SET: Self = Self(0x0000_0100);
    pub const CONSTANT: Self = Self(0x0000_0400);
    pub const FINAL: Self = Self(0x0000_0800);
    pub const DESIGNABLE: Self = Self(0x0000_1000);
    pub const RESOLVE_DESIGNABLE: Self = Self(0x0000_2000);
    pub const SCRIPTABLE: Self = Self(0x0000_4000);
    pub const RESOLVE_SCRIPTABLE: Self = Self(0x0000_8000);
    pub const STORED: Self = Self(0x0001_0000);
    pub const RESOLVE_STORED: Self = Self(0x0002_0000);
    pub const EDITABLE: Self = Self(0x0004_0000);
    pub const RESOLVE_EDITABLE: Self = Self(0x0008_0000);
    pub const USER: Self = Self(0x0010_0000);
    pub const RESOLVE_USER: Self = Self(0x0020_0000);
    pub const NOTIFY: Self = Self(0x0040_0000);
    pub const REVISIONED: Self = Self(0x0080_0000);

    /// Flags emitted for every property.
    pub const READ_WRITE: Self = Self::READABLE.with(Self::WRITABLE);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PropertyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl fmt::Debug for PropertyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyFlags({:#x})", self.0)
    }
}
