//! Table assembly.
//!
//! Constant path, sized by [`measure`] and materialized as statics:
//!
//! ```ignore
//! const SIZES: TableSizes = measure(&CLASS);
//! static INTS: [u32; SIZES.ints] = build_int_data(&CLASS);
//! static STRINGS: StringData<{ SIZES.strings }, { SIZES.bytes }> = build_string_data(&CLASS);
//! ```
//!
//! Owned path for tooling and tests: [`GeneratedTables::build`].

use wobject_format::{MetaTables, StringEntry};

use super::descriptor::ClassDescriptor;
use super::fold::{IntSink, fold};
use super::string_table::StringTableBuilder;

/// Exact sizes of a class's tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSizes {
    /// Integer table length in words.
    pub ints: usize,
    /// Number of strings.
    pub strings: usize,
    /// Packed string bytes, NULs included.
    pub bytes: usize,
}

/// Measure the tables of `class` without writing them.
pub const fn measure(class: &ClassDescriptor<'_>) -> TableSizes {
    let mut ints = IntSink::new(&mut []);
    let mut strings = StringTableBuilder::new(&mut []);
    fold(class, &mut ints, &mut strings);
    TableSizes {
        ints: ints.len(),
        strings: strings.len(),
        bytes: strings.byte_len(),
    }
}

/// Build the integer table. `N` must equal `measure(class).ints`.
pub const fn build_int_data<const N: usize>(class: &ClassDescriptor<'_>) -> [u32; N] {
    let mut words = [0u32; N];
    let mut ints = IntSink::new(&mut words);
    let mut strings = StringTableBuilder::new(&mut []);
    fold(class, &mut ints, &mut strings);
    assert!(ints.len() == N, "integer table size does not match the measured size");
    words
}

/// Packed string table of fixed size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringData<const S: usize, const B: usize> {
    pub entries: [StringEntry; S],
    pub bytes: [u8; B],
}

/// Build the string table. `S` and `B` must equal `measure(class).strings`
/// and `measure(class).bytes`.
pub const fn build_string_data<const S: usize, const B: usize>(
    class: &ClassDescriptor<'_>,
) -> StringData<S, B> {
    let mut slots = [""; S];
    let mut ints = IntSink::new(&mut []);
    let mut strings = StringTableBuilder::new(&mut slots);
    fold(class, &mut ints, &mut strings);
    assert!(
        strings.len() == S && strings.byte_len() == B,
        "string table size does not match the measured size"
    );

    let mut data = StringData {
        entries: [StringEntry::new(0, 0); S],
        bytes: [0; B],
    };
    strings.finalize(&mut data.entries, &mut data.bytes);
    data
}

/// Heap-owned tables, built by the same fold as the constant path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedTables {
    pub ints: Vec<u32>,
    pub entries: Vec<StringEntry>,
    pub bytes: Vec<u8>,
}

impl GeneratedTables {
    pub fn build(class: &ClassDescriptor<'_>) -> Self {
        let sizes = measure(class);
        let mut ints = vec![0; sizes.ints];
        let mut slots = vec![""; sizes.strings];
        let mut entries = vec![StringEntry::default(); sizes.strings];
        let mut bytes = vec![0; sizes.bytes];

        let mut sink = IntSink::new(&mut ints);
        let mut strings = StringTableBuilder::new(&mut slots);
        fold(class, &mut sink, &mut strings);
        strings.finalize(&mut entries, &mut bytes);

        Self {
            ints,
            entries,
            bytes,
        }
    }

    pub fn tables(&self) -> MetaTables<'_> {
        MetaTables::new_unchecked(&self.ints, &self.entries, &self.bytes)
    }
}
