//! Materialization and binding macros.

/// Materialize the tables and meta object of a type, once, as statics.
///
/// ```ignore
/// impl_meta_object!(Counter, COUNTER_INFO);
/// impl_meta_object!(LabeledCounter, LABELED_INFO, superclass = Counter);
/// ```
///
/// Malformed class info and unregistered types fail constant evaluation, so
/// no table is ever emitted for them.
///
/// ```
/// use wobject_runtime::{
///     ClassDescriptor, ClassInfo, MetaClass, MethodDescriptor, impl_meta_object, invoker, types,
/// };
///
/// pub struct Beacon;
///
/// impl Beacon {
///     pub fn ping(&mut self, _count: i32) {}
/// }
///
/// const METHODS: &[MethodDescriptor<'static>] =
///     &[MethodDescriptor::signal("ping", types![i32]).with_arg_names(&["count"])];
///
/// const BEACON: ClassInfo<Beacon> = ClassInfo {
///     descriptor: ClassDescriptor::new("Beacon").with_methods(METHODS),
///     methods: &[invoker!(Beacon, ping(i32))],
///     properties: &[],
///     constructors: &[],
/// };
///
/// impl_meta_object!(Beacon, BEACON);
///
/// assert_eq!(Beacon::static_meta_object().class_name(), "Beacon");
/// ```
///
/// One argument with two names does not compile:
///
/// ```compile_fail,E0080
/// use wobject_runtime::{
///     ClassDescriptor, ClassInfo, MethodDescriptor, impl_meta_object, invoker, types,
/// };
///
/// pub struct Beacon;
///
/// impl Beacon {
///     pub fn ping(&mut self, _count: i32) {}
/// }
///
/// const METHODS: &[MethodDescriptor<'static>] =
///     &[MethodDescriptor::signal("ping", types![i32]).with_arg_names(&["count", "extra"])];
///
/// const BEACON: ClassInfo<Beacon> = ClassInfo {
///     descriptor: ClassDescriptor::new("Beacon").with_methods(METHODS),
///     methods: &[invoker!(Beacon, ping(i32))],
///     properties: &[],
///     constructors: &[],
/// };
///
/// impl_meta_object!(Beacon, BEACON);
/// ```
#[macro_export]
macro_rules! impl_meta_object {
    ($ty:ty, $info:expr $(,)?) => {
        $crate::impl_meta_object!(@emit $ty, $info, ::core::option::Option::None);
    };
    ($ty:ty, $info:expr, superclass = $super:ty $(,)?) => {
        $crate::impl_meta_object!(
            @emit $ty,
            $info,
            ::core::option::Option::Some(<$super as $crate::MetaClass>::META_OBJECT)
        );
    };
    (@emit $ty:ty, $info:expr, $superclass:expr) => {
        const _: () = {
            const __INFO: $crate::ClassInfo<$ty> = $info;
            const _: () = __INFO.validate();
            const __SIZES: $crate::__private::TableSizes =
                $crate::__private::measure(&__INFO.descriptor);

            static __INT_DATA: [u32; __SIZES.ints] =
                $crate::__private::build_int_data(&__INFO.descriptor);
            static __STRING_DATA: $crate::__private::StringData<
                { __SIZES.strings },
                { __SIZES.bytes },
            > = $crate::__private::build_string_data(&__INFO.descriptor);
            static __META_OBJECT: $crate::MetaObject = $crate::MetaObject {
                superclass: $superclass,
                int_data: &__INT_DATA,
                string_entries: &__STRING_DATA.entries,
                string_bytes: &__STRING_DATA.bytes,
                static_metacall: $crate::static_metacall::<$ty>,
            };

            impl $crate::MetaClass for $ty {
                const CLASS_INFO: &'static $crate::ClassInfo<Self> = &__INFO;
                const META_OBJECT: &'static $crate::MetaObject = &__META_OBJECT;
            }
        };
    };
}

/// Bind a method: `invoker!(Type, method(Arg, ..) -> Ret)`.
///
/// Arguments are cloned out of `args[1..]`; the result is assigned through
/// `args[0]` unless it is null. Omitting `-> Ret` binds a method returning
/// `()`.
#[macro_export]
macro_rules! invoker {
    ($ty:ty, $method:ident($($arg:ty),* $(,)?)) => {
        $crate::invoker!($ty, $method($($arg),*) -> ())
    };
    ($ty:ty, $method:ident($($arg:ty),* $(,)?) -> $ret:ty) => {
        $crate::MethodBinding::<$ty> {
            invoke: {
                #[allow(unused_mut, unused_variables, unused_assignments)]
                unsafe fn invoke(obj: &mut $ty, args: $crate::Args) {
                    let mut slot = 1usize;
                    let result: $ret = obj.$method($({
                        let value = unsafe { $crate::__private::read_arg::<$arg>(args, slot) };
                        slot += 1;
                        value
                    }),*);
                    unsafe { $crate::__private::write_result(args, result) };
                }
                invoke
            },
            address: {
                fn address() -> *const () {
                    <$ty>::$method as *const ()
                }
                address
            },
            ret: <$ret as $crate::__private::MetaType>::TYPE,
            args: &[$(<$arg as $crate::__private::MetaType>::TYPE),*],
        }
    };
}

/// Bind a property.
///
/// ```ignore
/// property_binding!(Counter, i32, get = value, set = set_value)
/// property_binding!(Counter, String, get = label)          // read-only
/// property_binding!(Counter, i32, member = step)
/// ```
#[macro_export]
macro_rules! property_binding {
    ($ty:ty, $value:ty, get = $getter:ident $(,)?) => {
        $crate::PropertyBinding::<$ty> {
            ty: <$value as $crate::__private::MetaType>::TYPE,
            read: {
                unsafe fn read(obj: &$ty, out: *mut ::std::ffi::c_void) {
                    let value: $value = obj.$getter();
                    unsafe { *out.cast::<$value>() = value };
                }
                read
            },
            write: ::core::option::Option::None,
        }
    };
    ($ty:ty, $value:ty, get = $getter:ident, set = $setter:ident $(,)?) => {
        $crate::PropertyBinding::<$ty> {
            write: ::core::option::Option::Some({
                unsafe fn write(obj: &mut $ty, value: *const ::std::ffi::c_void) {
                    let value = unsafe { (*value.cast::<$value>()).clone() };
                    obj.$setter(value);
                }
                write
            }),
            ..$crate::property_binding!($ty, $value, get = $getter)
        }
    };
    ($ty:ty, $value:ty, member = $field:ident $(,)?) => {
        $crate::PropertyBinding::<$ty> {
            ty: <$value as $crate::__private::MetaType>::TYPE,
            read: {
                unsafe fn read(obj: &$ty, out: *mut ::std::ffi::c_void) {
                    let value: $value = obj.$field.clone();
                    unsafe { *out.cast::<$value>() = value };
                }
                read
            },
            write: ::core::option::Option::Some({
                unsafe fn write(obj: &mut $ty, value: *const ::std::ffi::c_void) {
                    obj.$field = unsafe { (*value.cast::<$value>()).clone() };
                }
                write
            }),
        }
    };
}

/// Bind a constructor: `constructor_binding!(Type, new(Arg, ..))`.
#[macro_export]
macro_rules! constructor_binding {
    ($ty:ty, $ctor:ident($($arg:ty),* $(,)?)) => {
        $crate::ConstructorBinding::<$ty> {
            create: {
                #[allow(unused_mut, unused_variables, unused_assignments)]
                unsafe fn create(args: $crate::Args) -> $ty {
                    let mut slot = 1usize;
                    <$ty>::$ctor($({
                        let value = unsafe { $crate::__private::read_arg::<$arg>(args, slot) };
                        slot += 1;
                        value
                    }),*)
                }
                create
            },
            args: &[$(<$arg as $crate::__private::MetaType>::TYPE),*],
        }
    };
}
