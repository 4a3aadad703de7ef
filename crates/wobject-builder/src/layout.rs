//! Block offsets of the integer table.
//!
//! Records embed absolute offsets, so every block start is computed from the
//! member counts before any record is written.
//!
//! ```text
//! header | method records | property records | constructor records
//!        | method parameter blocks | constructor parameter blocks
//! ```

use wobject_format::{
    CONSTRUCTOR_RECORD_LEN, HEADER_LEN, METHOD_RECORD_LEN, PROPERTY_RECORD_LEN, param_block_len,
};

use super::descriptor::ClassDescriptor;

/// Word offsets of each block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub method_offset: u32,
    pub property_offset: u32,
    pub constructor_offset: u32,
    /// First method parameter block.
    pub param_offset: u32,
    /// First constructor parameter block.
    pub constructor_param_offset: u32,
    /// Total integer table length.
    pub len: u32,
}

impl Layout {
    pub const fn plan(class: &ClassDescriptor<'_>) -> Self {
        let method_offset = HEADER_LEN;
        let property_offset = method_offset + class.method_count() * METHOD_RECORD_LEN;
        let constructor_offset = property_offset + class.property_count() * PROPERTY_RECORD_LEN;
        let param_offset = constructor_offset + class.constructor_count() * CONSTRUCTOR_RECORD_LEN;

        let mut constructor_param_offset = param_offset;
        let mut i = 0;
        while i < class.methods.len() {
            constructor_param_offset += param_block_len(class.methods[i].argc());
            i += 1;
        }

        let mut len = constructor_param_offset;
        let mut i = 0;
        while i < class.constructors.len() {
            len += param_block_len(class.constructors[i].argc());
            i += 1;
        }

        Self {
            method_offset: method_offset as u32,
            property_offset: property_offset as u32,
            constructor_offset: constructor_offset as u32,
            param_offset: param_offset as u32,
            constructor_param_offset: constructor_param_offset as u32,
            len: len as u32,
        }
    }

    /// Parameter block offset of method `index`.
    pub const fn method_param_offset(&self, class: &ClassDescriptor<'_>, index: usize) -> u32 {
        let mut offset = self.param_offset as usize;
        let mut i = 0;
        while i < index {
            offset += param_block_len(class.methods[i].argc());
            i += 1;
        }
        offset as u32
    }

    /// Parameter block offset of constructor `index`.
    pub const fn constructor_param_block_offset(
        &self,
        class: &ClassDescriptor<'_>,
        index: usize,
    ) -> u32 {
        let mut offset = self.constructor_param_offset as usize;
        let mut i = 0;
        while i < index {
            offset += param_block_len(class.constructors[i].argc());
            i += 1;
        }
        offset as u32
    }
}
