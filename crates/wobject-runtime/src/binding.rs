//! Typed per-class bindings.
//!
//! A [`ClassInfo`] pairs the shape-only [`ClassDescriptor`] with one binding
//! per member, in the same order. Bindings are built by [`invoker!`],
//! [`property_binding!`] and [`constructor_binding!`], which record the Rust
//! types they were written against so [`ClassInfo::validate`] can reject a
//! binding that disagrees with its descriptor during constant evaluation.
//!
//! [`invoker!`]: crate::invoker
//! [`property_binding!`]: crate::property_binding
//! [`constructor_binding!`]: crate::constructor_binding

use std::ffi::c_void;

use wobject_builder::{ClassDescriptor, PropertyAccess};
use wobject_core::TypeRef;

/// Argument array of the dispatch protocol: slot 0 is the result, slots
/// `1..` point at the arguments.
pub type Args = *mut *mut c_void;

pub struct MethodBinding<T> {
    /// Call the method with arguments read from `args[1..]`, writing the
    /// result through `args[0]` when it is non-null.
    pub invoke: unsafe fn(&mut T, Args),
    /// Address of the bound Rust method, for signal lookup.
    pub address: fn() -> *const (),
    pub ret: TypeRef,
    pub args: &'static [TypeRef],
}

pub struct PropertyBinding<T> {
    pub ty: TypeRef,
    /// Write the current value into `*out` (an initialized value of the
    /// property type).
    pub read: unsafe fn(&T, *mut c_void),
    /// Store a clone of `*value`; absent for read-only properties.
    pub write: Option<unsafe fn(&mut T, *const c_void)>,
}

pub struct ConstructorBinding<T> {
    /// Build an instance from arguments in `args[1..]`.
    pub create: unsafe fn(Args) -> T,
    pub args: &'static [TypeRef],
}

/// Everything the dispatch callable needs to know about `T`.
pub struct ClassInfo<T: 'static> {
    pub descriptor: ClassDescriptor<'static>,
    pub methods: &'static [MethodBinding<T>],
    pub properties: &'static [PropertyBinding<T>],
    pub constructors: &'static [ConstructorBinding<T>],
}

impl<T: 'static> ClassInfo<T> {
    /// Panics unless every binding matches its descriptor.
    pub const fn validate(&self) {
        let d = &self.descriptor;
        d.check_shape();

        assert!(
            self.methods.len() == d.methods.len(),
            "method binding count does not match the method descriptors"
        );
        let mut i = 0;
        while i < self.methods.len() {
            let (binding, method) = (&self.methods[i], &d.methods[i]);
            assert!(
                binding.ret.same(method.ret),
                "method binding return type does not match its descriptor"
            );
            assert!(
                same_types(binding.args, method.args),
                "method binding argument types do not match its descriptor"
            );
            i += 1;
        }

        assert!(
            self.properties.len() == d.properties.len(),
            "property binding count does not match the property descriptors"
        );
        let mut i = 0;
        while i < self.properties.len() {
            let (binding, property) = (&self.properties[i], &d.properties[i]);
            assert!(
                binding.ty.same(property.ty),
                "property binding type does not match its descriptor"
            );
            let writable = !matches!(property.access, PropertyAccess::Accessors { setter: false });
            assert!(
                binding.write.is_some() == writable,
                "property binding setter does not match the descriptor's access"
            );
            i += 1;
        }

        assert!(
            self.constructors.len() == d.constructors.len(),
            "constructor binding count does not match the constructor descriptors"
        );
        let mut i = 0;
        while i < self.constructors.len() {
            assert!(
                same_types(self.constructors[i].args, d.constructors[i].args),
                "constructor binding argument types do not match its descriptor"
            );
            i += 1;
        }
    }
}

const fn same_types(a: &[TypeRef], b: &[TypeRef]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if !a[i].same(b[i]) {
            return false;
        }
        i += 1;
    }
    true
}
