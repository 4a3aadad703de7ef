//! The generic dispatch callable.
//!
//! `static_metacall::<T>` is the entry point a [`MetaObject`] installs for
//! `T`. Ids are zero-based per member list; an id outside the list leaves
//! every argument slot untouched.
//!
//! Argument slots per call:
//!
//! | call                             | `args[0]`             | `args[1..]`            |
//! | -------------------------------- | --------------------- | ---------------------- |
//! | `InvokeMetaMethod`               | `*mut Ret` or null    | `*const Arg` each      |
//! | `RegisterMethodArgumentMetaType` | `*mut i32` result     | `*const i32` arg index |
//! | `IndexOfMethod`                  | `*mut i32` result     | `*const *const ()`     |
//! | `CreateInstance`                 | `*mut *mut c_void`    | `*const Arg` each      |
//! | `ReadProperty`                   | `*mut Value`          |                        |
//! | `WriteProperty`                  | `*const Value`        |                        |
//! | `RegisterPropertyMetaType`       | `*mut i32` result     |                        |
//!
//! [`MetaObject`]: crate::MetaObject

use std::ffi::c_void;

use wobject_core::TypeRef;

use super::binding::{Args, ClassInfo};
use super::call::{Call, IdScope};
use super::meta_object::MetaClass;
use super::trace::{NoopTracer, Tracer};

/// Dispatch `call` for member `id` of `T`.
///
/// # Safety
/// `obj` must point to a live `T` for calls that touch an instance, and
/// `args` must hold the slots the call expects (see the module table), each
/// pointing at a value of the member's declared type.
pub unsafe fn static_metacall<T: MetaClass>(obj: *mut c_void, call: Call, id: i32, args: Args) {
    unsafe { static_metacall_traced::<T, _>(obj, call, id, args, &mut NoopTracer) }
}

/// [`static_metacall`] reporting to `tracer`.
///
/// # Safety
/// Same contract as [`static_metacall`].
pub unsafe fn static_metacall_traced<T: MetaClass, R: Tracer>(
    obj: *mut c_void,
    call: Call,
    id: i32,
    args: Args,
    tracer: &mut R,
) {
    let info = T::class_info();
    tracer.trace_dispatch(call, id);

    if call == Call::IndexOfMethod {
        let result = unsafe { index_of_method(info, args) };
        tracer.trace_index_of_method(result);
        return;
    }

    let count = member_count(info, call.scope());
    let Some(index) = index_in(id, count) else {
        tracer.trace_out_of_range(call, id, count);
        return;
    };

    match call {
        Call::InvokeMetaMethod => {
            let obj = unsafe { &mut *obj.cast::<T>() };
            unsafe { (info.methods[index].invoke)(obj, args) };
            tracer.trace_invoke(index);
        }
        Call::RegisterMethodArgumentMetaType => {
            let arg = unsafe { *(*args.add(1)).cast::<i32>() };
            let method = &info.descriptor.methods[index];
            let result = usize::try_from(arg)
                .ok()
                .and_then(|a| method.args.get(a))
                .map_or(-1, |ty| builtin_id(*ty));
            unsafe { *(*args).cast::<i32>() = result };
            tracer.trace_register_argument(index, arg, result);
        }
        Call::CreateInstance => {
            let instance = unsafe { (info.constructors[index].create)(args) };
            let raw = Box::into_raw(Box::new(instance));
            unsafe { *(*args).cast::<*mut c_void>() = raw.cast() };
            tracer.trace_create(index);
        }
        Call::ReadProperty => {
            let obj = unsafe { &*obj.cast::<T>() };
            unsafe { (info.properties[index].read)(obj, *args) };
            tracer.trace_read(index);
        }
        Call::WriteProperty => {
            let applied = match info.properties[index].write {
                Some(write) => {
                    let obj = unsafe { &mut *obj.cast::<T>() };
                    unsafe { write(obj, (*args).cast_const()) };
                    true
                }
                None => false,
            };
            tracer.trace_write(index, applied);
        }
        Call::RegisterPropertyMetaType => {
            let result = builtin_id(info.descriptor.properties[index].ty);
            unsafe { *(*args).cast::<i32>() = result };
            tracer.trace_register_property(index, result);
        }
        Call::ResetProperty
        | Call::QueryPropertyDesignable
        | Call::QueryPropertyScriptable
        | Call::QueryPropertyStored
        | Call::QueryPropertyEditable
        | Call::QueryPropertyUser
        | Call::IndexOfMethod => {}
    }
}

/// Signal lookup: the index of the signal whose bound method has the address
/// in `*args[1]`, or -1.
unsafe fn index_of_method<T: 'static>(info: &ClassInfo<T>, args: Args) -> i32 {
    let address = unsafe { *(*args.add(1)).cast::<*const ()>() };
    let result = info
        .methods
        .iter()
        .zip(info.descriptor.methods)
        .position(|(binding, method)| method.is_signal() && (binding.address)() == address)
        .map_or(-1, |i| i as i32);
    unsafe { *(*args).cast::<i32>() = result };
    result
}

/// Built-in id, or -1 for registered types (resolved by name instead).
fn builtin_id(ty: TypeRef) -> i32 {
    match ty {
        TypeRef::Builtin(builtin) => builtin.id() as i32,
        TypeRef::Custom(_) => -1,
    }
}

fn member_count<T: 'static>(info: &ClassInfo<T>, scope: IdScope) -> usize {
    match scope {
        IdScope::Methods => info.methods.len(),
        IdScope::Properties => info.properties.len(),
        IdScope::Constructors => info.constructors.len(),
        IdScope::None => 0,
    }
}

fn index_in(id: i32, count: usize) -> Option<usize> {
    usize::try_from(id).ok().filter(|&i| i < count)
}

/// Dispatch through `T`'s meta object, superclasses first, and return the id
/// relative to the next class in the chain.
///
/// Negative ids pass through unchanged.
///
/// # Safety
/// Same contract as [`static_metacall`]; `obj` must also be valid for every
/// superclass's dispatch.
pub unsafe fn metacall<T: MetaClass>(obj: *mut c_void, call: Call, id: i32, args: Args) -> i32 {
    unsafe { T::static_meta_object().metacall(obj, call, id, args) }
}
