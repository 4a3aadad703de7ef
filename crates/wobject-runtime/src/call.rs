//! Operation kinds accepted by the dispatch entry point.

/// Operation requested from a class's dispatch callable.
///
/// Numbering is fixed by the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Call {
    InvokeMetaMethod = 0,
    ReadProperty = 1,
    WriteProperty = 2,
    ResetProperty = 3,
    QueryPropertyDesignable = 4,
    QueryPropertyScriptable = 5,
    QueryPropertyStored = 6,
    QueryPropertyEditable = 7,
    QueryPropertyUser = 8,
    CreateInstance = 9,
    IndexOfMethod = 10,
    RegisterPropertyMetaType = 11,
    RegisterMethodArgumentMetaType = 12,
}

/// Which member list an operation's id indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdScope {
    Methods,
    Properties,
    Constructors,
    /// The id is ignored.
    None,
}

impl Call {
    pub const ALL: [Call; 13] = [
        Self::InvokeMetaMethod,
        Self::ReadProperty,
        Self::WriteProperty,
        Self::ResetProperty,
        Self::QueryPropertyDesignable,
        Self::QueryPropertyScriptable,
        Self::QueryPropertyStored,
        Self::QueryPropertyEditable,
        Self::QueryPropertyUser,
        Self::CreateInstance,
        Self::IndexOfMethod,
        Self::RegisterPropertyMetaType,
        Self::RegisterMethodArgumentMetaType,
    ];

    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| *c as i32 == raw)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::InvokeMetaMethod => "InvokeMetaMethod",
            Self::ReadProperty => "ReadProperty",
            Self::WriteProperty => "WriteProperty",
            Self::ResetProperty => "ResetProperty",
            Self::QueryPropertyDesignable => "QueryPropertyDesignable",
            Self::QueryPropertyScriptable => "QueryPropertyScriptable",
            Self::QueryPropertyStored => "QueryPropertyStored",
            Self::QueryPropertyEditable => "QueryPropertyEditable",
            Self::QueryPropertyUser => "QueryPropertyUser",
            Self::CreateInstance => "CreateInstance",
            Self::IndexOfMethod => "IndexOfMethod",
            Self::RegisterPropertyMetaType => "RegisterPropertyMetaType",
            Self::RegisterMethodArgumentMetaType => "RegisterMethodArgumentMetaType",
        }
    }

    /// Read through QueryPropertyUser, plus RegisterPropertyMetaType.
    pub fn is_property_call(self) -> bool {
        let raw = self as i32;
        (Self::ReadProperty as i32..=Self::QueryPropertyUser as i32).contains(&raw)
            || self == Self::RegisterPropertyMetaType
    }

    pub fn scope(self) -> IdScope {
        match self {
            Self::InvokeMetaMethod | Self::RegisterMethodArgumentMetaType => IdScope::Methods,
            Self::CreateInstance => IdScope::Constructors,
            Self::IndexOfMethod => IdScope::None,
            _ if self.is_property_call() => IdScope::Properties,
            _ => IdScope::None,
        }
    }
}
