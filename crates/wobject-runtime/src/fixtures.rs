//! Classes shared by the runtime tests.

use crate::{
    ClassDescriptor, ClassInfo, ConstructorDescriptor, MethodDescriptor, PropertyDescriptor,
    TypeRef, constructor_binding, declare_meta_type, impl_meta_object, invoker, property_binding,
    types,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
declare_meta_type!(Point);

#[derive(Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Counter {
    pub value: i32,
    pub step: i32,
    pub label: String,
    pub position: Point,
    pub emitted: Vec<i32>,
}

impl Counter {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            step: 1,
            label: "counter".to_string(),
            position: Point::default(),
            emitted: Vec::new(),
        }
    }

    pub fn value_changed(&mut self, value: i32) {
        self.emitted.push(value);
    }

    pub fn increment(&mut self) -> i32 {
        self.value += self.step;
        self.value_changed(self.value);
        self.value
    }

    pub fn move_to(&mut self, at: Point) -> bool {
        let moved = self.position != at;
        self.position = at;
        moved
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        if self.value != value {
            self.value = value;
            self.value_changed(value);
        }
    }

    pub fn label(&self) -> String {
        self.label.clone()
    }
}

const COUNTER_METHODS: &[MethodDescriptor<'static>] = &[
    MethodDescriptor::signal("valueChanged", types![i32]).with_arg_names(&["value"]),
    MethodDescriptor::slot("increment", TypeRef::of::<i32>(), &[]),
    MethodDescriptor::method("moveTo", TypeRef::of::<bool>(), types![Point])
        .with_arg_names(&["at"]),
];

const COUNTER_PROPERTIES: &[PropertyDescriptor<'static>] = &[
    PropertyDescriptor::accessors("value", TypeRef::of::<i32>()),
    PropertyDescriptor::member("step", TypeRef::of::<i32>()),
    PropertyDescriptor::getter("label", TypeRef::of::<String>()),
];

const COUNTER_CONSTRUCTORS: &[ConstructorDescriptor<'static>] =
    &[ConstructorDescriptor::new(types![i32])];

pub const COUNTER_INFO: ClassInfo<Counter> = ClassInfo {
    descriptor: ClassDescriptor::new("Counter")
        .with_methods(COUNTER_METHODS)
        .with_properties(COUNTER_PROPERTIES)
        .with_constructors(COUNTER_CONSTRUCTORS),
    methods: &[
        invoker!(Counter, value_changed(i32)),
        invoker!(Counter, increment() -> i32),
        invoker!(Counter, move_to(Point) -> bool),
    ],
    properties: &[
        property_binding!(Counter, i32, get = value, set = set_value),
        property_binding!(Counter, i32, member = step),
        property_binding!(Counter, String, get = label),
    ],
    constructors: &[constructor_binding!(Counter, new(i32))],
};

impl_meta_object!(Counter, COUNTER_INFO);

/// A subclass; the superclass part comes first.
#[repr(C)]
pub struct LimitedCounter {
    pub base: Counter,
    pub limit: i32,
    pub origin: Point,
    pub reached: Vec<i32>,
}

impl LimitedCounter {
    pub fn new(value: i32, limit: i32) -> Self {
        Self {
            base: Counter::new(value),
            limit,
            origin: Point::default(),
            reached: Vec::new(),
        }
    }

    pub fn limit_reached(&mut self, limit: i32) {
        self.reached.push(limit);
    }
}

const LIMITED_METHODS: &[MethodDescriptor<'static>] =
    &[MethodDescriptor::signal("limitReached", types![i32])];

const LIMITED_PROPERTIES: &[PropertyDescriptor<'static>] = &[
    PropertyDescriptor::member("limit", TypeRef::of::<i32>()),
    PropertyDescriptor::member("origin", TypeRef::of::<Point>()),
];

pub const LIMITED_INFO: ClassInfo<LimitedCounter> = ClassInfo {
    descriptor: ClassDescriptor::new("LimitedCounter")
        .with_methods(LIMITED_METHODS)
        .with_properties(LIMITED_PROPERTIES),
    methods: &[invoker!(LimitedCounter, limit_reached(i32))],
    properties: &[
        property_binding!(LimitedCounter, i32, member = limit),
        property_binding!(LimitedCounter, Point, member = origin),
    ],
    constructors: &[],
};

impl_meta_object!(LimitedCounter, LIMITED_INFO, superclass = Counter);
