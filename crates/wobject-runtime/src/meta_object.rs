//! Process-wide meta objects.

use std::ffi::c_void;
use std::ptr;

use wobject_format::{FormatError, MetaTables, StringEntry};

use super::binding::{Args, ClassInfo};
use super::call::{Call, IdScope};

/// Signature of a class's dispatch callable.
pub type StaticMetacall = unsafe fn(*mut c_void, Call, i32, Args);

/// Runtime handle of one class: its tables, its dispatch entry point and its
/// superclass.
///
/// Instances are statics produced by [`impl_meta_object!`](crate::impl_meta_object)
/// and never change after the program starts.
pub struct MetaObject {
    pub superclass: Option<&'static MetaObject>,
    pub int_data: &'static [u32],
    pub string_entries: &'static [StringEntry],
    pub string_bytes: &'static [u8],
    pub static_metacall: StaticMetacall,
}

impl MetaObject {
    pub fn tables(&self) -> MetaTables<'static> {
        MetaTables::new_unchecked(self.int_data, self.string_entries, self.string_bytes)
    }

    /// Tables with every structural check applied.
    pub fn checked_tables(&self) -> Result<MetaTables<'static>, FormatError> {
        MetaTables::new(self.int_data, self.string_entries, self.string_bytes)
    }

    pub fn class_name(&self) -> &'static str {
        self.tables().class_name()
    }

    pub fn superclass(&self) -> Option<&'static MetaObject> {
        self.superclass
    }

    /// Number of methods declared by superclasses.
    pub fn method_offset(&self) -> usize {
        self.ancestors().map(|m| m.tables().method_count()).sum()
    }

    /// Number of properties declared by superclasses.
    pub fn property_offset(&self) -> usize {
        self.ancestors().map(|m| m.tables().property_count()).sum()
    }

    /// Methods of this class and all superclasses.
    pub fn method_count(&self) -> usize {
        self.method_offset() + self.tables().method_count()
    }

    /// Properties of this class and all superclasses.
    pub fn property_count(&self) -> usize {
        self.property_offset() + self.tables().property_count()
    }

    /// Whether `other` is this class or one of its superclasses.
    pub fn inherits(&self, other: &MetaObject) -> bool {
        let mut current = Some(self);
        while let Some(meta) = current {
            if ptr::eq(meta, other) {
                return true;
            }
            current = meta.superclass;
        }
        false
    }

    /// Absolute index of the method with normalized signature `signature`,
    /// searching this class first.
    pub fn index_of_method(&self, signature: &str) -> Option<usize> {
        match self.tables().index_of_signature(signature) {
            Some(local) => Some(self.method_offset() + local),
            None => self.superclass?.index_of_method(signature),
        }
    }

    /// Absolute index of the property named `name`, searching this class first.
    pub fn index_of_property(&self, name: &str) -> Option<usize> {
        match self.tables().index_of_property(name) {
            Some(local) => Some(self.property_offset() + local),
            None => self.superclass?.index_of_property(name),
        }
    }

    /// Dispatch `call` through the superclass chain, root first, and return
    /// the id relative to the next class.
    ///
    /// # Safety
    /// See [`static_metacall`](crate::static_metacall); `obj` must be valid
    /// for every class in the chain.
    pub unsafe fn metacall(&self, obj: *mut c_void, call: Call, mut id: i32, args: Args) -> i32 {
        if let Some(superclass) = self.superclass {
            id = unsafe { superclass.metacall(obj, call, id, args) };
        }
        if id < 0 {
            return id;
        }
        let tables = self.tables();
        let count = match call.scope() {
            IdScope::Methods => tables.method_count(),
            IdScope::Properties => tables.property_count(),
            IdScope::Constructors | IdScope::None => return id,
        } as i32;
        if id < count {
            unsafe { (self.static_metacall)(obj, call, id, args) };
        }
        id - count
    }

    /// Invoke method `index` (absolute) on `obj`.
    ///
    /// Returns false when no class in the chain declares that index.
    ///
    /// # Safety
    /// `obj` must be valid for the declaring class and `args` must match the
    /// method's signature.
    pub unsafe fn invoke_method(&self, obj: *mut c_void, index: usize, args: Args) -> bool {
        unsafe { self.dispatch_absolute(obj, Call::InvokeMetaMethod, index, args) }
    }

    /// Read property `index` (absolute) into `*out`.
    ///
    /// # Safety
    /// `obj` must be valid for the declaring class and `out` must point at an
    /// initialized value of the property type.
    pub unsafe fn read_property(&self, obj: *mut c_void, index: usize, out: *mut c_void) -> bool {
        let mut args = [out];
        unsafe { self.dispatch_absolute(obj, Call::ReadProperty, index, args.as_mut_ptr()) }
    }

    /// Write `*value` to property `index` (absolute).
    ///
    /// # Safety
    /// `obj` must be valid for the declaring class and `value` must point at
    /// a value of the property type.
    pub unsafe fn write_property(
        &self,
        obj: *mut c_void,
        index: usize,
        value: *const c_void,
    ) -> bool {
        let mut args = [value.cast_mut()];
        unsafe { self.dispatch_absolute(obj, Call::WriteProperty, index, args.as_mut_ptr()) }
    }

    /// Run constructor `index` of this class; null when out of range.
    ///
    /// `args[0]` is overwritten; `args[1..]` hold the constructor arguments.
    /// The instance is boxed; reclaim it with `Box::from_raw`.
    ///
    /// # Safety
    /// `args` must match the constructor's signature.
    pub unsafe fn create_instance(&self, index: usize, args: Args) -> *mut c_void {
        let mut instance: *mut c_void = ptr::null_mut();
        if index >= self.tables().constructor_count() {
            return instance;
        }
        unsafe {
            *args = (&raw mut instance).cast();
            (self.static_metacall)(ptr::null_mut(), Call::CreateInstance, index as i32, args);
        }
        instance
    }

    unsafe fn dispatch_absolute(&self, obj: *mut c_void, call: Call, index: usize, args: Args) -> bool {
        let (offset, count) = match call.scope() {
            IdScope::Methods => (self.method_offset(), self.tables().method_count()),
            _ => (self.property_offset(), self.tables().property_count()),
        };
        if index >= offset + count {
            return false;
        }
        if index < offset {
            return match self.superclass {
                Some(superclass) => unsafe { superclass.dispatch_absolute(obj, call, index, args) },
                None => false,
            };
        }
        unsafe { (self.static_metacall)(obj, call, (index - offset) as i32, args) };
        true
    }

    fn ancestors(&self) -> impl Iterator<Item = &'static MetaObject> {
        std::iter::successors(self.superclass, |m| m.superclass)
    }
}

/// The explicit accessor through which the runtime reaches a class's
/// generated data.
pub trait MetaClass: Sized + 'static {
    const CLASS_INFO: &'static ClassInfo<Self>;
    const META_OBJECT: &'static MetaObject;

    fn class_info() -> &'static ClassInfo<Self> {
        Self::CLASS_INFO
    }

    fn static_meta_object() -> &'static MetaObject {
        Self::META_OBJECT
    }

    fn meta_object(&self) -> &'static MetaObject {
        Self::META_OBJECT
    }
}
