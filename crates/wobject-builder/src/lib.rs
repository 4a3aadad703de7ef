//! Compile-time construction of meta-object tables.
//!
//! A [`ClassDescriptor`] is folded into the integer table and the string
//! table of the fixed runtime format. Every step is a `const fn`, so tables
//! are materialized as statics with no runtime work:
//!
//! - [`Layout`] plans block offsets from member counts
//! - [`StringTableBuilder`] issues string indices in append order
//! - [`resolve`] turns a [`TypeRef`] into a [`TypeToken`](wobject_format::TypeToken)
//! - [`fold`] walks the descriptors and writes both tables
//! - [`measure`], [`build_int_data`], [`build_string_data`] size and emit them

mod assemble;
mod descriptor;
mod fold;
mod layout;
mod resolve;
mod string_table;

#[cfg(test)]
mod assemble_tests;

pub use assemble::{
    GeneratedTables, StringData, TableSizes, build_int_data, build_string_data, measure,
};
pub use descriptor::{
    ClassDescriptor, ConstructorDescriptor, MethodDescriptor, PropertyAccess, PropertyDescriptor,
};
pub use fold::{IntSink, fold};
pub use layout::Layout;
pub use resolve::resolve;
pub use string_table::StringTableBuilder;

pub use wobject_core::{MetaType, TypeRef};
