//! Binary layout of meta-object tables.
//!
//! This crate contains:
//! - Format constants and the fixed-size header and member records
//! - Type tokens and flag words
//! - The packed string table and a validated view over a class's tables
//! - A human-readable dump

mod constants;
pub mod dump;
mod flags;
pub mod format;
mod header;
mod records;
mod strings;
mod tables;
mod token;

#[cfg(test)]
mod flags_tests;
#[cfg(test)]
mod token_tests;

pub use constants::{
    CLASS_NAME_INDEX, CONSTRUCTOR_RECORD_LEN, EMPTY_STRING_INDEX, HEADER_LEN, IS_UNRESOLVED_TYPE,
    METHOD_RECORD_LEN, METHOD_TAG, PROPERTY_RECORD_LEN, REVISION, param_block_len,
};
pub use dump::dump;
pub use flags::{Access, MethodFlags, MethodKind, PropertyFlags};
pub use format::width_for_count;
pub use header::Header;
pub use records::{MethodRecord, PropertyRecord};
pub use strings::{StringEntry, StringsView};
pub use tables::{
    ArgLayout, ClassLayout, FormatError, MetaTables, MethodLayout, MethodView, PropertyLayout,
    PropertyView, Section,
};
pub use token::{TokenKind, TypeToken};
