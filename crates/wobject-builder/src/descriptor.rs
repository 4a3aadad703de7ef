//! Class, method, property and constructor descriptors.
//!
//! Descriptors are plain data built in constant expressions. They capture the
//! shape of a class only; the callables that act on instances live in the
//! runtime crate's bindings.

use wobject_core::TypeRef;
use wobject_format::{Access, MethodFlags};

/// One invokable member: an ordinary method, a signal or a slot.
#[derive(Clone, Copy, Debug)]
pub struct MethodDescriptor<'a> {
    pub name: &'a str,
    pub ret: TypeRef,
    pub args: &'a [TypeRef],
    /// Per-argument type name overrides; empty, or one entry per argument.
    /// An empty entry keeps the registered name.
    pub arg_type_names: &'a [&'a str],
    /// Per-argument names; empty, or one entry per argument.
    /// An empty entry leaves the argument anonymous.
    pub arg_names: &'a [&'a str],
    pub flags: MethodFlags,
}

impl<'a> MethodDescriptor<'a> {
    const fn with_kind(
        name: &'a str,
        ret: TypeRef,
        args: &'a [TypeRef],
        flags: MethodFlags,
    ) -> Self {
        Self {
            name,
            ret,
            args,
            arg_type_names: &[],
            arg_names: &[],
            flags,
        }
    }

    /// A public invokable method.
    pub const fn method(name: &'a str, ret: TypeRef, args: &'a [TypeRef]) -> Self {
        Self::with_kind(name, ret, args, MethodFlags::PUBLIC_METHOD)
    }

    /// A public signal. Signals return nothing.
    pub const fn signal(name: &'a str, args: &'a [TypeRef]) -> Self {
        Self::with_kind(
            name,
            TypeRef::of::<()>(),
            args,
            MethodFlags::PUBLIC_SIGNAL,
        )
    }

    /// A public slot.
    pub const fn slot(name: &'a str, ret: TypeRef, args: &'a [TypeRef]) -> Self {
        Self::with_kind(name, ret, args, MethodFlags::PUBLIC_SLOT)
    }

    pub const fn with_arg_names(mut self, names: &'a [&'a str]) -> Self {
        self.arg_names = names;
        self
    }

    pub const fn with_arg_type_names(mut self, names: &'a [&'a str]) -> Self {
        self.arg_type_names = names;
        self
    }

    /// Replace the access bits, keeping kind and attribute bits.
    pub const fn with_access(mut self, access: Access) -> Self {
        self.flags = MethodFlags(self.flags.bits() & !MethodFlags::ACCESS_MASK | access as u32);
        self
    }

    /// Add attribute bits such as [`MethodFlags::SCRIPTABLE`].
    pub const fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags = self.flags.with(flags);
        self
    }

    #[inline]
    pub const fn argc(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub const fn is_signal(&self) -> bool {
        self.flags.is_signal()
    }

    /// Panics when a name list is neither empty nor one entry per argument.
    pub const fn check_shape(&self) {
        assert!(
            self.arg_names.is_empty() || self.arg_names.len() == self.args.len(),
            "argument name count does not match the argument count"
        );
        assert!(
            self.arg_type_names.is_empty() || self.arg_type_names.len() == self.args.len(),
            "argument type name count does not match the argument count"
        );
    }

    /// Name of argument `index`, or `""` when anonymous.
    pub const fn arg_name(&self, index: usize) -> &'a str {
        if self.arg_names.is_empty() {
            ""
        } else {
            self.arg_names[index]
        }
    }

    /// Type name override of argument `index`, or `""` when none.
    pub const fn arg_type_name(&self, index: usize) -> &'a str {
        if self.arg_type_names.is_empty() {
            ""
        } else {
            self.arg_type_names[index]
        }
    }
}

/// How a property reaches its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyAccess {
    /// Through a getter and, when present, a setter.
    Accessors { setter: bool },
    /// Directly through a data member.
    Member,
}

#[derive(Clone, Copy, Debug)]
pub struct PropertyDescriptor<'a> {
    pub name: &'a str,
    pub ty: TypeRef,
    /// Type name override; empty keeps the registered name.
    pub type_name: &'a str,
    pub access: PropertyAccess,
}

impl<'a> PropertyDescriptor<'a> {
    /// A property backed by a getter/setter pair.
    pub const fn accessors(name: &'a str, ty: TypeRef) -> Self {
        Self {
            name,
            ty,
            type_name: "",
            access: PropertyAccess::Accessors { setter: true },
        }
    }

    /// A property backed by a getter only.
    pub const fn getter(name: &'a str, ty: TypeRef) -> Self {
        Self {
            access: PropertyAccess::Accessors { setter: false },
            ..Self::accessors(name, ty)
        }
    }

    /// A property backed by a data member.
    pub const fn member(name: &'a str, ty: TypeRef) -> Self {
        Self {
            access: PropertyAccess::Member,
            ..Self::accessors(name, ty)
        }
    }

    pub const fn with_type_name(mut self, type_name: &'a str) -> Self {
        self.type_name = type_name;
        self
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ConstructorDescriptor<'a> {
    pub args: &'a [TypeRef],
    pub flags: MethodFlags,
}

impl<'a> ConstructorDescriptor<'a> {
    /// A public constructor.
    pub const fn new(args: &'a [TypeRef]) -> Self {
        Self {
            args,
            flags: MethodFlags::PUBLIC_CONSTRUCTOR,
        }
    }

    pub const fn with_access(mut self, access: Access) -> Self {
        self.flags = MethodFlags(self.flags.bits() & !MethodFlags::ACCESS_MASK | access as u32);
        self
    }

    #[inline]
    pub const fn argc(&self) -> usize {
        self.args.len()
    }
}

/// Everything the table generator needs to know about one class.
#[derive(Clone, Copy, Debug)]
pub struct ClassDescriptor<'a> {
    pub name: &'a str,
    pub methods: &'a [MethodDescriptor<'a>],
    pub properties: &'a [PropertyDescriptor<'a>],
    pub constructors: &'a [ConstructorDescriptor<'a>],
}

impl<'a> ClassDescriptor<'a> {
    /// A class with no members.
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            methods: &[],
            properties: &[],
            constructors: &[],
        }
    }

    pub const fn with_methods(mut self, methods: &'a [MethodDescriptor<'a>]) -> Self {
        self.methods = methods;
        self
    }

    pub const fn with_properties(mut self, properties: &'a [PropertyDescriptor<'a>]) -> Self {
        self.properties = properties;
        self
    }

    pub const fn with_constructors(mut self, constructors: &'a [ConstructorDescriptor<'a>]) -> Self {
        self.constructors = constructors;
        self
    }

    #[inline]
    pub const fn method_count(&self) -> usize {
        self.methods.len()
    }

    #[inline]
    pub const fn property_count(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub const fn constructor_count(&self) -> usize {
        self.constructors.len()
    }

    /// Number of methods whose kind is signal.
    pub const fn signal_count(&self) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < self.methods.len() {
            if self.methods[i].is_signal() {
                count += 1;
            }
            i += 1;
        }
        count
    }

    /// Panics on malformed member shapes.
    pub const fn check_shape(&self) {
        assert!(!self.name.is_empty(), "class name must not be empty");
        let mut i = 0;
        while i < self.methods.len() {
            self.methods[i].check_shape();
            i += 1;
        }
    }
}

/// Build a `&[TypeRef]` from a list of registered types.
///
/// ```ignore
/// MethodDescriptor::slot("move_to", TypeRef::of::<()>(), types![i32, i32])
/// ```
#[macro_export]
macro_rules! types {
    ($($ty:ty),* $(,)?) => {
        &[$(<$ty as $crate::MetaType>::TYPE),*]
    };
}
