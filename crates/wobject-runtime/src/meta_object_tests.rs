use std::ffi::c_void;
use std::ptr;

use super::call::Call;
use super::dispatch::metacall;
use super::fixtures::{Counter, LimitedCounter, Point};
use super::meta_object::MetaClass;

fn slot<T>(value: &mut T) -> *mut c_void {
    (value as *mut T).cast()
}

#[test]
fn tables_are_well_formed() {
    let counter = Counter::static_meta_object().checked_tables().unwrap();
    assert_eq!(counter.class_name(), "Counter");
    assert_eq!(counter.method_count(), 3);
    assert_eq!(counter.signal_count(), 1);
    assert_eq!(counter.property_count(), 3);
    assert_eq!(counter.constructor_count(), 1);
    assert_eq!(counter.method_signature(2).as_deref(), Some("moveTo(Point)"));

    let limited = LimitedCounter::static_meta_object().checked_tables().unwrap();
    assert_eq!(limited.class_name(), "LimitedCounter");
    assert_eq!(limited.property(1).unwrap().type_name(), Some("Point"));
}

#[test]
fn one_meta_object_per_class() {
    let counter = Counter::new(0);
    assert!(ptr::eq(counter.meta_object(), Counter::static_meta_object()));
    assert!(ptr::eq(Counter::META_OBJECT, Counter::static_meta_object()));
    assert!(!ptr::eq(
        Counter::static_meta_object(),
        LimitedCounter::static_meta_object()
    ));
}

#[test]
fn superclass_chain() {
    let counter = Counter::static_meta_object();
    let limited = LimitedCounter::static_meta_object();

    assert!(counter.superclass().is_none());
    assert!(ptr::eq(limited.superclass().unwrap(), counter));

    assert!(limited.inherits(counter));
    assert!(limited.inherits(limited));
    assert!(!counter.inherits(limited));
}

#[test]
fn offsets_and_counts() {
    let counter = Counter::static_meta_object();
    assert_eq!(counter.method_offset(), 0);
    assert_eq!(counter.property_offset(), 0);
    assert_eq!(counter.method_count(), 3);

    let limited = LimitedCounter::static_meta_object();
    assert_eq!(limited.method_offset(), 3);
    assert_eq!(limited.property_offset(), 3);
    assert_eq!(limited.method_count(), 4);
    assert_eq!(limited.property_count(), 5);
}

#[test]
fn lookups_are_absolute() {
    let limited = LimitedCounter::static_meta_object();
    assert_eq!(limited.index_of_method("valueChanged(int)"), Some(0));
    assert_eq!(limited.index_of_method("limitReached(int)"), Some(3));
    assert_eq!(limited.index_of_method("limitReached()"), None);
    assert_eq!(limited.index_of_property("value"), Some(0));
    assert_eq!(limited.index_of_property("origin"), Some(4));
    assert_eq!(limited.index_of_property("missing"), None);
}

#[test]
fn metacall_routes_to_declaring_class() {
    let mut limited = LimitedCounter::new(10, 20);
    let obj = slot(&mut limited);

    let mut value = 0;
    let rest = unsafe {
        metacall::<LimitedCounter>(obj, Call::ReadProperty, 3, [slot(&mut value)].as_mut_ptr())
    };
    assert_eq!(value, 20);
    assert_eq!(rest, -2);

    let rest = unsafe {
        metacall::<LimitedCounter>(obj, Call::ReadProperty, 0, [slot(&mut value)].as_mut_ptr())
    };
    assert_eq!(value, 10);
    assert_eq!(rest, -3);
}

#[test]
fn metacall_passes_unclaimed_ids_on() {
    let mut limited = LimitedCounter::new(10, 20);
    let obj = slot(&mut limited);
    let mut value = 12345;

    let rest = unsafe {
        metacall::<LimitedCounter>(obj, Call::ReadProperty, 7, [slot(&mut value)].as_mut_ptr())
    };
    assert_eq!(rest, 2);
    assert_eq!(value, 12345);

    let rest = unsafe {
        metacall::<LimitedCounter>(obj, Call::ReadProperty, -1, [slot(&mut value)].as_mut_ptr())
    };
    assert_eq!(rest, -1);
    assert_eq!(value, 12345);
}

#[test]
fn invoke_by_absolute_index() {
    let mut limited = LimitedCounter::new(10, 20);
    let obj = slot(&mut limited);
    let meta = LimitedCounter::static_meta_object();

    let mut result = 0;
    assert!(unsafe { meta.invoke_method(obj, 1, [slot(&mut result)].as_mut_ptr()) });
    assert_eq!(result, 11);

    let mut limit = 20;
    assert!(unsafe { meta.invoke_method(obj, 3, [ptr::null_mut(), slot(&mut limit)].as_mut_ptr()) });
    assert!(!unsafe { meta.invoke_method(obj, 4, [ptr::null_mut()].as_mut_ptr()) });

    assert_eq!(limited.base.emitted, [11]);
    assert_eq!(limited.reached, [20]);
}

#[test]
fn properties_by_absolute_index() {
    let mut limited = LimitedCounter::new(10, 20);
    let obj = slot(&mut limited);
    let meta = LimitedCounter::static_meta_object();

    let mut origin = Point { x: 1, y: 2 };
    assert!(unsafe { meta.write_property(obj, 4, slot(&mut origin)) });
    let mut step = 5;
    assert!(unsafe { meta.write_property(obj, 1, slot(&mut step)) });

    let mut read = Point::default();
    assert!(unsafe { meta.read_property(obj, 4, slot(&mut read)) });
    assert!(!unsafe { meta.read_property(obj, 5, slot(&mut read)) });

    assert_eq!(read, Point { x: 1, y: 2 });
    assert_eq!(limited.origin, Point { x: 1, y: 2 });
    assert_eq!(limited.base.step, 5);
}

#[test]
fn create_through_meta_object() {
    let meta = Counter::static_meta_object();
    let mut value = 3;
    let mut args = [ptr::null_mut(), slot(&mut value)];

    let instance = unsafe { meta.create_instance(0, args.as_mut_ptr()) };
    assert!(!instance.is_null());
    let instance = unsafe { Box::from_raw(instance.cast::<Counter>()) };
    assert_eq!(instance.value, 3);

    assert!(unsafe { meta.create_instance(1, args.as_mut_ptr()) }.is_null());
    let limited = LimitedCounter::static_meta_object();
    assert!(unsafe { limited.create_instance(0, args.as_mut_ptr()) }.is_null());
}
