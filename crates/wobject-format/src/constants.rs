//! Meta-object table format constants.
//!
//! Every value here is part of the fixed contract with the runtime and must
//! stay bit-exact.

/// Format revision stored in the first header word.
pub const REVISION: u32 = 7;

/// Header length in u32 words.
pub const HEADER_LEN: usize = 14;

/// Method record length in u32 words: name, argc, parameters, tag, flags.
pub const METHOD_RECORD_LEN: usize = 5;

/// Property record length in u32 words: name, type, flags.
pub const PROPERTY_RECORD_LEN: usize = 3;

/// Constructor record length in u32 words (same shape as a method record).
pub const CONSTRUCTOR_RECORD_LEN: usize = 5;

/// Marks a type token as a string-table reference instead of a built-in id.
pub const IS_UNRESOLVED_TYPE: u32 = 0x8000_0000;

/// String index of the class name.
pub const CLASS_NAME_INDEX: u32 = 0;

/// String index of the reserved empty string ("no name").
pub const EMPTY_STRING_INDEX: u32 = 1;

/// Value of the method record tag slot (points at the empty string).
pub const METHOD_TAG: u32 = EMPTY_STRING_INDEX;

/// Words occupied by a parameter block with `argc` arguments:
/// one return-type slot, then one type slot and one name slot per argument.
#[inline]
pub const fn param_block_len(argc: usize) -> usize {
    1 + 2 * argc
}
