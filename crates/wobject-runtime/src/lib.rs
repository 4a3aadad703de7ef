//! Runtime side of generated meta-object tables.
//!
//! A class is described once, as a [`ClassInfo`] (descriptor plus typed
//! bindings), and materialized with [`impl_meta_object!`]:
//!
//! ```ignore
//! const COUNTER: ClassInfo<Counter> = ClassInfo {
//!     descriptor: ClassDescriptor::new("Counter").with_methods(METHODS),
//!     methods: &[invoker!(Counter, value_changed(i32))],
//!     properties: &[],
//!     constructors: &[],
//! };
//! impl_meta_object!(Counter, COUNTER);
//! ```
//!
//! The tables are statics; the dispatch callable is [`static_metacall`].

mod binding;
mod call;
mod dispatch;
mod macros;
mod meta_object;
mod trace;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod meta_object_tests;

pub use binding::{Args, ClassInfo, ConstructorBinding, MethodBinding, PropertyBinding};
pub use call::{Call, IdScope};
pub use dispatch::{metacall, static_metacall, static_metacall_traced};
pub use meta_object::{MetaClass, MetaObject, StaticMetacall};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

pub use wobject_builder::{
    ClassDescriptor, ConstructorDescriptor, MethodDescriptor, PropertyAccess, PropertyDescriptor,
    types,
};
pub use wobject_core::{Colors, MetaType, TypeRef, declare_meta_type};
pub use wobject_format::{Access, MethodFlags};

#[doc(hidden)]
pub mod __private {
    use super::Args;

    pub use wobject_builder::{StringData, TableSizes, build_int_data, build_string_data, measure};
    pub use wobject_core::MetaType;

    /// Clone the argument in `args[slot]`.
    ///
    /// # Safety
    /// `args[slot]` must point at a live `A`.
    #[inline]
    pub unsafe fn read_arg<A: Clone>(args: Args, slot: usize) -> A {
        unsafe { (*(*args.add(slot)).cast::<A>()).clone() }
    }

    /// Assign `value` through `args[0]` unless it is null.
    ///
    /// # Safety
    /// A non-null `args[0]` must point at an initialized `R`.
    #[inline]
    pub unsafe fn write_result<R>(args: Args, value: R) {
        let out = unsafe { *args };
        if !out.is_null() {
            unsafe { *out.cast::<R>() = value };
        }
    }
}
