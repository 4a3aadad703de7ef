//! Validated read-only view over a pair of generated tables.
//!
//! [`MetaTables`] is what the runtime adapter holds: the integer table, the
//! string entries and the packed string bytes. Decoding is lazy; only the
//! structure is checked up front.

use std::fmt;

use serde::Serialize;
use wobject_core::BuiltinType;

use super::constants::{
    CONSTRUCTOR_RECORD_LEN, EMPTY_STRING_INDEX, HEADER_LEN, METHOD_RECORD_LEN,
    PROPERTY_RECORD_LEN, REVISION, param_block_len,
};
use super::flags::{MethodFlags, MethodKind, PropertyFlags};
use super::header::Header;
use super::records::{MethodRecord, PropertyRecord};
use super::strings::{StringEntry, StringsView};
use super::token::{TokenKind, TypeToken};

/// Record blocks of the integer table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Methods,
    Properties,
    Constructors,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Methods => "method",
            Self::Properties => "property",
            Self::Constructors => "constructor",
        })
    }
}

/// Structural problem found while validating foreign tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("integer table too short: {0} words (minimum {HEADER_LEN})")]
    TooShort(usize),
    #[error("unsupported revision: {0} (expected {REVISION})")]
    UnsupportedRevision(u32),
    #[error("{section} block [{start}..{end}) exceeds integer table of {len} words")]
    BlockOutOfBounds {
        section: Section,
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("parameters of {section} {index} [{start}..{end}) exceed integer table of {len} words")]
    ParametersOutOfBounds {
        section: Section,
        index: usize,
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("string table needs the class name and the empty string, found {0} entries")]
    MissingReservedStrings(usize),
    #[error("reserved string {0} must be empty")]
    ReservedStringNotEmpty(u32),
    #[error("string {index} ends at byte {end}, past string data of {len} bytes")]
    StringOutOfBounds { index: u32, end: usize, len: usize },
    #[error("string {0} is not valid UTF-8")]
    InvalidUtf8(u32),
    #[error("{section} {index} names string {name}, but only {count} strings exist")]
    NameOutOfRange {
        section: Section,
        index: usize,
        name: u32,
        count: usize,
    },
}

/// The integer table and string table of one class.
#[derive(Clone, Copy, Debug)]
pub struct MetaTables<'a> {
    ints: &'a [u32],
    strings: StringsView<'a>,
    header: Header,
}

impl<'a> MetaTables<'a> {
    /// Validate and wrap foreign tables.
    pub fn new(
        ints: &'a [u32],
        entries: &'a [StringEntry],
        data: &'a [u8],
    ) -> Result<Self, FormatError> {
        if ints.len() < HEADER_LEN {
            return Err(FormatError::TooShort(ints.len()));
        }
        let header = Header::from_words(ints);
        if !header.validate_revision() {
            return Err(FormatError::UnsupportedRevision(header.revision));
        }

        let strings = StringsView::new_unchecked(entries, data);
        validate_strings(&strings)?;

        let tables = Self {
            ints,
            strings,
            header,
        };
        tables.validate_blocks()?;
        Ok(tables)
    }

    /// Wrap tables produced by the builder in this workspace.
    ///
    /// Accessors assume the structure is sound and panic on out-of-range
    /// offsets; use [`MetaTables::new`] for anything else.
    pub fn new_unchecked(ints: &'a [u32], entries: &'a [StringEntry], data: &'a [u8]) -> Self {
        Self {
            ints,
            strings: StringsView::new_unchecked(entries, data),
            header: Header::from_words(ints),
        }
    }

    fn validate_blocks(&self) -> Result<(), FormatError> {
        let h = &self.header;
        let len = self.ints.len();
        let blocks = [
            (Section::Methods, h.method_offset, h.method_count, METHOD_RECORD_LEN),
            (Section::Properties, h.property_offset, h.property_count, PROPERTY_RECORD_LEN),
            (
                Section::Constructors,
                h.constructor_offset,
                h.constructor_count,
                CONSTRUCTOR_RECORD_LEN,
            ),
        ];
        for (section, offset, count, width) in blocks {
            let start = offset as usize;
            let end = start + count as usize * width;
            if end > len {
                return Err(FormatError::BlockOutOfBounds {
                    section,
                    start,
                    end,
                    len,
                });
            }
        }

        let string_count = self.strings.len();
        let name_check = |section, index, name: u32| {
            if name as usize >= string_count {
                Err(FormatError::NameOutOfRange {
                    section,
                    index,
                    name,
                    count: string_count,
                })
            } else {
                Ok(())
            }
        };

        for (section, count, offset) in [
            (Section::Methods, h.method_count, h.method_offset),
            (Section::Constructors, h.constructor_count, h.constructor_offset),
        ] {
            for index in 0..count as usize {
                let at = offset as usize + index * METHOD_RECORD_LEN;
                let record = MethodRecord::from_words(&self.ints[at..]);
                name_check(section, index, record.name)?;
                let start = record.parameters as usize;
                let end = start + param_block_len(record.argc as usize);
                if end > len {
                    return Err(FormatError::ParametersOutOfBounds {
                        section,
                        index,
                        start,
                        end,
                        len,
                    });
                }
            }
        }

        for index in 0..h.property_count as usize {
            let record = self.property_record(index);
            name_check(Section::Properties, index, record.name)?;
        }
        Ok(())
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn ints(&self) -> &'a [u32] {
        self.ints
    }

    pub fn strings(&self) -> StringsView<'a> {
        self.strings
    }

    pub fn class_name(&self) -> &'a str {
        self.strings.get(self.header.class_name).unwrap_or_default()
    }

    pub fn string(&self, index: u32) -> Option<&'a str> {
        self.strings.get(index)
    }

    pub fn method_count(&self) -> usize {
        self.header.method_count as usize
    }

    pub fn property_count(&self) -> usize {
        self.header.property_count as usize
    }

    pub fn constructor_count(&self) -> usize {
        self.header.constructor_count as usize
    }

    pub fn signal_count(&self) -> usize {
        self.header.signal_count as usize
    }

    pub fn method(&self, index: usize) -> Option<MethodView<'a>> {
        if index >= self.method_count() {
            return None;
        }
        let at = self.header.method_offset as usize + index * METHOD_RECORD_LEN;
        Some(self.method_view(at))
    }

    pub fn constructor(&self, index: usize) -> Option<MethodView<'a>> {
        if index >= self.constructor_count() {
            return None;
        }
        let at = self.header.constructor_offset as usize + index * CONSTRUCTOR_RECORD_LEN;
        Some(self.method_view(at))
    }

    pub fn property(&self, index: usize) -> Option<PropertyView<'a>> {
        if index >= self.property_count() {
            return None;
        }
        Some(PropertyView {
            record: self.property_record(index),
            strings: self.strings,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = MethodView<'a>> + '_ {
        (0..self.method_count()).filter_map(|i| self.method(i))
    }

    pub fn constructors(&self) -> impl Iterator<Item = MethodView<'a>> + '_ {
        (0..self.constructor_count()).filter_map(|i| self.constructor(i))
    }

    pub fn properties(&self) -> impl Iterator<Item = PropertyView<'a>> + '_ {
        (0..self.property_count()).filter_map(|i| self.property(i))
    }

    /// Normalized signature of method `index`.
    pub fn method_signature(&self, index: usize) -> Option<String> {
        self.method(index).map(|m| m.signature())
    }

    /// Index of the first method named `name`.
    pub fn index_of_method(&self, name: &str) -> Option<usize> {
        self.methods().position(|m| m.name() == name)
    }

    /// Index of the method with normalized signature `name(type,type)`.
    pub fn index_of_signature(&self, signature: &str) -> Option<usize> {
        self.methods().position(|m| m.signature() == signature)
    }

    pub fn index_of_property(&self, name: &str) -> Option<usize> {
        self.properties().position(|p| p.name() == name)
    }

    /// Type name for a token, if it can be resolved.
    pub fn type_name(&self, token: TypeToken) -> Option<&'a str> {
        token_name(&self.strings, token)
    }

    /// Type name for display; unknown built-in ids render as `#<id>`.
    pub fn type_display(&self, token: TypeToken) -> String {
        display_type(&self.strings, token)
    }

    /// Serializable summary of the whole class.
    pub fn layout(&self) -> ClassLayout {
        ClassLayout {
            class_name: self.class_name().to_string(),
            header: self.header,
            methods: self.methods().map(|m| m.layout()).collect(),
            properties: self
                .properties()
                .map(|p| PropertyLayout {
                    name: p.name().to_string(),
                    type_name: display_type(&self.strings, p.type_token()),
                    flags: p.flags(),
                })
                .collect(),
            constructors: self.constructors().map(|c| c.layout()).collect(),
        }
    }

    fn property_record(&self, index: usize) -> PropertyRecord {
        let at = self.header.property_offset as usize + index * PROPERTY_RECORD_LEN;
        PropertyRecord::from_words(&self.ints[at..])
    }

    fn method_view(&self, at: usize) -> MethodView<'a> {
        let record = MethodRecord::from_words(&self.ints[at..]);
        let start = record.parameters as usize;
        let params = &self.ints[start..start + param_block_len(record.argc as usize)];
        MethodView {
            record,
            params,
            strings: self.strings,
        }
    }
}

fn validate_strings(strings: &StringsView<'_>) -> Result<(), FormatError> {
    if strings.len() < 2 {
        return Err(FormatError::MissingReservedStrings(strings.len()));
    }
    let data_len = strings.data().len();
    for (index, entry) in strings.entries().iter().enumerate() {
        let index = index as u32;
        let end = entry.end_with_nul();
        if end > data_len {
            return Err(FormatError::StringOutOfBounds {
                index,
                end,
                len: data_len,
            });
        }
        if strings.get(index).is_none() {
            return Err(FormatError::InvalidUtf8(index));
        }
    }
    if strings.entries()[EMPTY_STRING_INDEX as usize].len != 0 {
        return Err(FormatError::ReservedStringNotEmpty(EMPTY_STRING_INDEX));
    }
    Ok(())
}

fn token_name<'a>(strings: &StringsView<'a>, token: TypeToken) -> Option<&'a str> {
    match token.decode() {
        TokenKind::Builtin(id) => BuiltinType::from_id(id).map(BuiltinType::name),
        TokenKind::Unresolved(index) => strings.get(index),
    }
}

/// Type name for display; unknown built-in ids render as `#<id>`.
fn display_type(strings: &StringsView<'_>, token: TypeToken) -> String {
    match token_name(strings, token) {
        Some(name) => name.to_string(),
        None => format!("#{}", token.payload()),
    }
}

/// A method or constructor record together with its parameter block.
#[derive(Clone, Copy, Debug)]
pub struct MethodView<'a> {
    pub record: MethodRecord,
    params: &'a [u32],
    strings: StringsView<'a>,
}

impl<'a> MethodView<'a> {
    pub fn name(&self) -> &'a str {
        self.strings.get(self.record.name).unwrap_or_default()
    }

    pub fn argc(&self) -> usize {
        self.record.argc as usize
    }

    pub fn flags(&self) -> MethodFlags {
        self.record.flags
    }

    pub fn kind(&self) -> MethodKind {
        self.record.flags.kind()
    }

    /// The raw parameter block words.
    pub fn params(&self) -> &'a [u32] {
        self.params
    }

    pub fn return_type(&self) -> TypeToken {
        TypeToken(self.params[0])
    }

    pub fn arg_type(&self, index: usize) -> Option<TypeToken> {
        (index < self.argc()).then(|| TypeToken(self.params[1 + index]))
    }

    pub fn arg_types(&self) -> impl Iterator<Item = TypeToken> + 'a {
        let argc = self.argc();
        self.params[1..1 + argc].iter().map(|&w| TypeToken(w))
    }

    /// String index of argument `index`'s name.
    pub fn arg_name_index(&self, index: usize) -> Option<u32> {
        (index < self.argc()).then(|| self.params[1 + self.argc() + index])
    }

    /// Name of argument `index`; `None` when anonymous.
    pub fn arg_name(&self, index: usize) -> Option<&'a str> {
        let name = self.arg_name_index(index)?;
        if name == EMPTY_STRING_INDEX {
            return None;
        }
        self.strings.get(name)
    }

    pub fn type_name(&self, token: TypeToken) -> Option<&'a str> {
        token_name(&self.strings, token)
    }

    /// Normalized signature: `name(type,type)`.
    pub fn signature(&self) -> String {
        let args: Vec<String> = self
            .arg_types()
            .map(|t| display_type(&self.strings, t))
            .collect();
        format!("{}({})", self.name(), args.join(","))
    }

    fn layout(&self) -> MethodLayout {
        MethodLayout {
            name: self.name().to_string(),
            kind: self.kind(),
            signature: self.signature(),
            return_type: match self.kind() {
                MethodKind::Constructor => None,
                _ => Some(display_type(&self.strings, self.return_type())),
            },
            args: (0..self.argc())
                .map(|i| ArgLayout {
                    type_name: self
                        .arg_type(i)
                        .map(|t| display_type(&self.strings, t))
                        .unwrap_or_default(),
                    name: self.arg_name(i).map(str::to_string),
                })
                .collect(),
            flags: self.flags(),
        }
    }
}

/// A property record with name resolution.
#[derive(Clone, Copy, Debug)]
pub struct PropertyView<'a> {
    pub record: PropertyRecord,
    strings: StringsView<'a>,
}

impl<'a> PropertyView<'a> {
    pub fn name(&self) -> &'a str {
        self.strings.get(self.record.name).unwrap_or_default()
    }

    pub fn type_token(&self) -> TypeToken {
        self.record.type_token
    }

    pub fn type_name(&self) -> Option<&'a str> {
        token_name(&self.strings, self.record.type_token)
    }

    pub fn flags(&self) -> PropertyFlags {
        self.record.flags
    }
}

/// Serializable class summary for tooling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassLayout {
    pub class_name: String,
    pub header: Header,
    pub methods: Vec<MethodLayout>,
    pub properties: Vec<PropertyLayout>,
    pub constructors: Vec<MethodLayout>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodLayout {
    pub name: String,
    pub kind: MethodKind,
    pub signature: String,
    pub return_type: Option<String>,
    pub args: Vec<ArgLayout>,
    pub flags: MethodFlags,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArgLayout {
    pub type_name: String,
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyLayout {
    pub name: String,
    pub type_name: String,
    pub flags: PropertyFlags,
}
