//! Value-type registration.
//!
//! Every type that appears as a return, parameter or property type must be
//! either one of the runtime's built-in types or explicitly registered with a
//! display name. The choice is made per Rust type through [`MetaType`], so an
//! unregistered type is a missing trait impl and fails to compile.

use std::ffi::c_void;

use serde::Serialize;

/// Built-in type ids, numbered exactly as the runtime's canonical set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[repr(u32)]
pub enum BuiltinType {
    Bool = 1,
    Int = 2,
    UInt = 3,
    LongLong = 4,
    ULongLong = 5,
    Double = 6,
    QChar = 7,
    QVariantMap = 8,
    QVariantList = 9,
    QString = 10,
    QStringList = 11,
    QByteArray = 12,
    VoidStar = 31,
    Long = 32,
    Short = 33,
    Char = 34,
    ULong = 35,
    UShort = 36,
    UChar = 37,
    Float = 38,
    QObjectStar = 39,
    SChar = 40,
    QVariant = 41,
    Void = 43,
    Nullptr = 51,
}

impl BuiltinType {
    /// Every built-in, in id order.
    pub const ALL: [BuiltinType; 25] = [
        Self::Bool,
        Self::Int,
        Self::UInt,
        Self::LongLong,
        Self::ULongLong,
        Self::Double,
        Self::QChar,
        Self::QVariantMap,
        Self::QVariantList,
        Self::QString,
        Self::QStringList,
        Self::QByteArray,
        Self::VoidStar,
        Self::Long,
        Self::Short,
        Self::Char,
        Self::ULong,
        Self::UShort,
        Self::UChar,
        Self::Float,
        Self::QObjectStar,
        Self::SChar,
        Self::QVariant,
        Self::Void,
        Self::Nullptr,
    ];

    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    pub const fn from_id(id: u32) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i].id() == id {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Spelling used by the runtime for this type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::LongLong => "qlonglong",
            Self::ULongLong => "qulonglong",
            Self::Double => "double",
            Self::QChar => "QChar",
            Self::QVariantMap => "QVariantMap",
            Self::QVariantList => "QVariantList",
            Self::QString => "QString",
            Self::QStringList => "QStringList",
            Self::QByteArray => "QByteArray",
            Self::VoidStar => "void*",
            Self::Long => "long",
            Self::Short => "short",
            Self::Char => "char",
            Self::ULong => "ulong",
            Self::UShort => "ushort",
            Self::UChar => "uchar",
            Self::Float => "float",
            Self::QObjectStar => "QObject*",
            Self::SChar => "signed char",
            Self::QVariant => "QVariant",
            Self::Void => "void",
            Self::Nullptr => "std::nullptr_t",
        }
    }
}

/// How a value type is identified in the generated tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum TypeRef {
    /// Part of the runtime's built-in set; encoded as its numeric id.
    Builtin(BuiltinType),
    /// Registered by display name; resolved by name at runtime.
    Custom(&'static str),
}

impl TypeRef {
    /// The registration of `T`.
    #[inline]
    pub const fn of<T: MetaType + ?Sized>() -> Self {
        T::TYPE
    }

    /// A custom registration. The display name must be non-empty.
    pub const fn custom(name: &'static str) -> Self {
        assert!(
            !name.is_empty(),
            "registered meta type display name must not be empty"
        );
        Self::Custom(name)
    }

    pub const fn is_builtin(self) -> bool {
        matches!(self, Self::Builtin(_))
    }

    /// Equality usable in constant evaluation.
    pub const fn same(self, other: Self) -> bool {
        match (self, other) {
            (Self::Builtin(a), Self::Builtin(b)) => a.id() == b.id(),
            (Self::Custom(a), Self::Custom(b)) => str_eq(a, b),
            _ => false,
        }
    }

    /// Display name, built-in or registered.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Builtin(b) => b.name(),
            Self::Custom(name) => name,
        }
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// A Rust type that can appear in method signatures and properties.
///
/// Built-in impls cover the primitives; user types are registered with
/// [`declare_meta_type!`](crate::declare_meta_type).
///
/// ```
/// use wobject_core::{TypeRef, declare_meta_type};
///
/// struct Registered;
/// declare_meta_type!(Registered);
///
/// assert_eq!(TypeRef::of::<Registered>().name(), "Registered");
/// ```
///
/// A type without a registration is rejected at compile time:
///
/// ```compile_fail,E0277
/// use wobject_core::TypeRef;
///
/// struct Unregistered;
///
/// const _: TypeRef = TypeRef::of::<Unregistered>();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a registered meta type",
    label = "used as a method, property or constructor type here",
    note = "register it with `declare_meta_type!({Self})` or give it a display name with `declare_meta_type!({Self}, \"Name\")`"
)]
pub trait MetaType: 'static {
    const TYPE: TypeRef;
}

macro_rules! builtin_meta_types {
    ($($ty:ty => $builtin:ident),* $(,)?) => {
        $(
            impl MetaType for $ty {
                const TYPE: TypeRef = TypeRef::Builtin(BuiltinType::$builtin);
            }
        )*
    };
}

builtin_meta_types! {
    () => Void,
    bool => Bool,
    i8 => SChar,
    u8 => UChar,
    i16 => Short,
    u16 => UShort,
    i32 => Int,
    u32 => UInt,
    i64 => LongLong,
    u64 => ULongLong,
    f32 => Float,
    f64 => Double,
    String => QString,
    Vec<String> => QStringList,
    Vec<u8> => QByteArray,
    *mut c_void => VoidStar,
}

/// Register a user type under a display name.
///
/// ```ignore
/// declare_meta_type!(Point);              // display name "Point"
/// declare_meta_type!(Rgba, "QColor");     // explicit display name
/// ```
#[macro_export]
macro_rules! declare_meta_type {
    ($ty:ident) => {
        $crate::declare_meta_type!($ty, stringify!($ty));
    };
    ($ty:ty, $name:expr) => {
        impl $crate::MetaType for $ty {
            const TYPE: $crate::TypeRef = $crate::TypeRef::custom($name);
        }
    };
}
