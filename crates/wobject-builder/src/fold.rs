//! The table fold.
//!
//! One pass over a [`ClassDescriptor`] writes the integer table and feeds the
//! string table. The same routine measures (zero-capacity sinks) and builds
//! (right-sized sinks), so the two can never disagree.

use wobject_format::{
    CLASS_NAME_INDEX, EMPTY_STRING_INDEX, Header, METHOD_TAG, MethodRecord, PropertyFlags,
    PropertyRecord, REVISION, TypeToken,
};

use super::descriptor::ClassDescriptor;
use super::layout::Layout;
use super::resolve::resolve;
use super::string_table::StringTableBuilder;

/// Integer table writer; counts words written past its capacity.
pub struct IntSink<'s> {
    words: &'s mut [u32],
    len: usize,
}

impl<'s> IntSink<'s> {
    pub const fn new(words: &'s mut [u32]) -> Self {
        Self { words, len: 0 }
    }

    pub const fn push(&mut self, word: u32) {
        if self.len < self.words.len() {
            self.words[self.len] = word;
        }
        self.len += 1;
    }

    pub const fn extend(&mut self, words: &[u32]) {
        let mut i = 0;
        while i < words.len() {
            self.push(words[i]);
            i += 1;
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Write the tables of `class`.
///
/// # Panics
/// Panics on malformed descriptor shapes; evaluated in a constant this is a
/// compile error.
pub const fn fold<'a>(
    class: &ClassDescriptor<'a>,
    ints: &mut IntSink<'_>,
    strings: &mut StringTableBuilder<'_, 'a>,
) {
    class.check_shape();

    let class_name = strings.append(class.name);
    let empty = strings.append("");
    assert!(class_name == CLASS_NAME_INDEX && empty == EMPTY_STRING_INDEX);

    let layout = Layout::plan(class);
    let header = Header {
        revision: REVISION,
        class_name,
        method_count: class.method_count() as u32,
        method_offset: layout.method_offset,
        property_count: class.property_count() as u32,
        property_offset: layout.property_offset,
        constructor_count: class.constructor_count() as u32,
        constructor_offset: layout.constructor_offset,
        signal_count: class.signal_count() as u32,
        ..Header::EMPTY
    };
    ints.extend(&header.to_words());

    fold_method_records(class, &layout, ints, strings);
    fold_property_records(class, ints, strings);
    fold_constructor_records(class, &layout, ints, strings);
    fold_method_params(class, ints, strings);
    fold_constructor_params(class, ints, strings);

    assert!(
        ints.len() == layout.len as usize,
        "integer table length disagrees with the planned layout"
    );
}

const fn fold_method_records<'a>(
    class: &ClassDescriptor<'a>,
    layout: &Layout,
    ints: &mut IntSink<'_>,
    strings: &mut StringTableBuilder<'_, 'a>,
) {
    let mut i = 0;
    while i < class.methods.len() {
        let method = &class.methods[i];
        let record = MethodRecord {
            name: strings.append(method.name),
            argc: method.argc() as u32,
            parameters: layout.method_param_offset(class, i),
            tag: METHOD_TAG,
            flags: method.flags,
        };
        ints.extend(&record.to_words());
        i += 1;
    }
}

const fn fold_property_records<'a>(
    class: &ClassDescriptor<'a>,
    ints: &mut IntSink<'_>,
    strings: &mut StringTableBuilder<'_, 'a>,
) {
    let mut i = 0;
    while i < class.properties.len() {
        let property = &class.properties[i];
        let name = strings.append(property.name);
        let record = PropertyRecord {
            name,
            type_token: resolve(property.ty, property.type_name, strings),
            flags: PropertyFlags::READ_WRITE,
        };
        ints.extend(&record.to_words());
        i += 1;
    }
}

const fn fold_constructor_records<'a>(
    class: &ClassDescriptor<'a>,
    layout: &Layout,
    ints: &mut IntSink<'_>,
    strings: &mut StringTableBuilder<'_, 'a>,
) {
    let mut i = 0;
    while i < class.constructors.len() {
        let constructor = &class.constructors[i];
        let record = MethodRecord {
            name: strings.append(class.name),
            argc: constructor.argc() as u32,
            parameters: layout.constructor_param_block_offset(class, i),
            tag: METHOD_TAG,
            flags: constructor.flags,
        };
        ints.extend(&record.to_words());
        i += 1;
    }
}

/// `[return, arg types..., arg names...]` per method.
const fn fold_method_params<'a>(
    class: &ClassDescriptor<'a>,
    ints: &mut IntSink<'_>,
    strings: &mut StringTableBuilder<'_, 'a>,
) {
    let mut i = 0;
    while i < class.methods.len() {
        let method = &class.methods[i];
        ints.push(resolve(method.ret, "", strings).0);

        let mut a = 0;
        while a < method.argc() {
            ints.push(resolve(method.args[a], method.arg_type_name(a), strings).0);
            a += 1;
        }

        let mut a = 0;
        while a < method.argc() {
            let name = method.arg_name(a);
            let index = if name.is_empty() {
                EMPTY_STRING_INDEX
            } else {
                strings.append(name)
            };
            ints.push(index);
            a += 1;
        }
        i += 1;
    }
}

/// `[CONSTRUCTOR_RETURN, arg types..., 1...]` per constructor.
const fn fold_constructor_params<'a>(
    class: &ClassDescriptor<'a>,
    ints: &mut IntSink<'_>,
    strings: &mut StringTableBuilder<'_, 'a>,
) {
    let mut i = 0;
    while i < class.constructors.len() {
        let constructor = &class.constructors[i];
        ints.push(TypeToken::CONSTRUCTOR_RETURN.0);

        let mut a = 0;
        while a < constructor.argc() {
            ints.push(resolve(constructor.args[a], "", strings).0);
            a += 1;
        }

        let mut a = 0;
        while a < constructor.argc() {
            ints.push(EMPTY_STRING_INDEX);
            a += 1;
        }
        i += 1;
    }
}
