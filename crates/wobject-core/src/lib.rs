//! Shared vocabulary for wobject.
//!
//! This crate contains:
//! - Built-in type ids and the [`MetaType`] registration trait
//! - [`TypeRef`], the per-type resolution input of the table builder
//! - Terminal [`Colors`] shared by dumps and traces

mod colors;
mod meta_type;


pub use colors::Colors;
pub use meta_type::{BuiltinType, MetaType, TypeRef};
