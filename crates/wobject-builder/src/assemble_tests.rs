use wobject_core::{TypeRef, declare_meta_type};
use wobject_format::{FormatError, MetaTables, MethodFlags, PropertyFlags, StringsView};

use super::assemble::{
    GeneratedTables, StringData, TableSizes, build_int_data, build_string_data, measure,
};
use super::descriptor::{ClassDescriptor, ConstructorDescriptor, MethodDescriptor, PropertyDescriptor};
use crate::types;

struct Point;
declare_meta_type!(Point);

struct Rgba;
declare_meta_type!(Rgba, "QColor");

const WIDGET_METHODS: &[MethodDescriptor<'static>] =
    &[MethodDescriptor::method("foo", TypeRef::of::<()>(), types![i32])];

const WIDGET: ClassDescriptor<'static> = ClassDescriptor::new("Widget").with_methods(WIDGET_METHODS);

const WIDGET_SIZES: TableSizes = measure(&WIDGET);
static WIDGET_INTS: [u32; WIDGET_SIZES.ints] = build_int_data(&WIDGET);
static WIDGET_STRINGS: StringData<{ WIDGET_SIZES.strings }, { WIDGET_SIZES.bytes }> =
    build_string_data(&WIDGET);

const _: () = assert!(WIDGET_SIZES.ints == 22);

const CANVAS_METHODS: &[MethodDescriptor<'static>] = &[
    MethodDescriptor::signal("moved", types![Point]).with_arg_names(&["to"]),
    MethodDescriptor::slot("paint", TypeRef::of::<bool>(), types![Rgba, i32])
        .with_arg_type_names(&["Color", ""])
        .with_arg_names(&["color", ""]),
];

const CANVAS_PROPERTIES: &[PropertyDescriptor<'static>] = &[
    PropertyDescriptor::member("origin", TypeRef::of::<Point>()),
    PropertyDescriptor::accessors("tint", TypeRef::of::<Rgba>()),
];

const CANVAS_CONSTRUCTORS: &[ConstructorDescriptor<'static>] =
    &[ConstructorDescriptor::new(types![i32, Point])];

const CANVAS: ClassDescriptor<'static> = ClassDescriptor::new("Canvas")
    .with_methods(CANVAS_METHODS)
    .with_properties(CANVAS_PROPERTIES)
    .with_constructors(CANVAS_CONSTRUCTORS);

const CANVAS_SIZES: TableSizes = measure(&CANVAS);
static CANVAS_INTS: [u32; CANVAS_SIZES.ints] = build_int_data(&CANVAS);
static CANVAS_STRINGS: StringData<{ CANVAS_SIZES.strings }, { CANVAS_SIZES.bytes }> =
    build_string_data(&CANVAS);

#[test]
fn single_method_words() {
    #[rustfmt::skip]
    let expected = [
        7, 0, 0, 0, 1, 14, 0, 19, 0, 0, 0, 19, 0, 0,
        2, 1, 19, 1, 0x02,
        43, 2, 1,
    ];
    assert_eq!(WIDGET_INTS, expected);
}

#[test]
fn single_method_strings() {
    assert_eq!(
        WIDGET_SIZES,
        TableSizes {
            ints: 22,
            strings: 3,
            bytes: 12
        }
    );
    assert_eq!(&WIDGET_STRINGS.bytes, b"Widget\0\0foo\0");

    let view = StringsView::new_unchecked(&WIDGET_STRINGS.entries, &WIDGET_STRINGS.bytes);
    assert_eq!(view.get(0), Some("Widget"));
    assert_eq!(view.get(1), Some(""));
    assert_eq!(view.get(2), Some("foo"));
}

#[test]
fn property_flags_ignore_storage() {
    const COUNT_BY_ACCESSORS: &[PropertyDescriptor<'static>] =
        &[PropertyDescriptor::accessors("count", TypeRef::of::<i32>())];
    const COUNT_BY_MEMBER: &[PropertyDescriptor<'static>] =
        &[PropertyDescriptor::member("count", TypeRef::of::<i32>())];

    for properties in [COUNT_BY_ACCESSORS, COUNT_BY_MEMBER] {
        let class = ClassDescriptor::new("Counter").with_properties(properties);
        let generated = GeneratedTables::build(&class);

        assert_eq!(&generated.ints[14..], &[2, 2, PropertyFlags::READ_WRITE.bits()]);
        assert_eq!(generated.ints[6..8], [1, 14]);
    }
}

#[test]
fn registered_types_and_constructors() {
    #[rustfmt::skip]
    let expected: [u32; 48] = [
        // header
        7, 0, 0, 0, 2, 14, 2, 24, 0, 0, 1, 30, 0, 1,
        // methods
        2, 1, 35, 1, 0x06,
        3, 2, 38, 1, 0x0a,
        // properties
        4, 0x8000_0005, 3,
        6, 0x8000_0007, 3,
        // constructors
        8, 2, 43, 1, 0x0e,
        // method parameters
        43, 0x8000_0009, 10,
        1, 0x8000_000b, 2, 12, 1,
        // constructor parameters
        0x8000_0001, 2, 0x8000_000d, 1, 1,
    ];
    assert_eq!(CANVAS_INTS, expected);

    let view = StringsView::new_unchecked(&CANVAS_STRINGS.entries, &CANVAS_STRINGS.bytes);
    let strings: Vec<&str> = view.iter().map(|(_, s)| s).collect();
    assert_eq!(
        strings,
        [
            "Canvas", "", "moved", "paint", "origin", "Point", "tint", "QColor", "Canvas",
            "Point", "to", "Color", "color", "Point",
        ]
    );
}

#[test]
fn generated_tables_decode() {
    let tables = MetaTables::new(
        &CANVAS_INTS,
        &CANVAS_STRINGS.entries,
        &CANVAS_STRINGS.bytes,
    )
    .unwrap();

    assert_eq!(tables.class_name(), "Canvas");
    assert_eq!(tables.signal_count(), 1);
    assert_eq!(tables.method_signature(0).as_deref(), Some("moved(Point)"));
    assert_eq!(tables.method_signature(1).as_deref(), Some("paint(Color,int)"));

    let paint = tables.method(1).unwrap();
    assert_eq!(paint.flags(), MethodFlags::PUBLIC_SLOT);
    assert_eq!(paint.arg_name(0), Some("color"));
    assert_eq!(paint.arg_name(1), None);
    assert_eq!(tables.type_name(paint.return_type()), Some("bool"));

    assert_eq!(tables.property(1).unwrap().type_name(), Some("QColor"));
    assert_eq!(
        tables.constructor(0).unwrap().signature(),
        "Canvas(int,Point)"
    );
}

#[test]
fn static_and_owned_paths_agree() {
    let owned = GeneratedTables::build(&CANVAS);

    assert_eq!(owned.ints, CANVAS_INTS);
    assert_eq!(owned.entries, CANVAS_STRINGS.entries);
    assert_eq!(owned.bytes, CANVAS_STRINGS.bytes);
}

#[test]
fn rebuilding_is_identical() {
    assert_eq!(GeneratedTables::build(&CANVAS), GeneratedTables::build(&CANVAS));
    assert_eq!(build_int_data::<48>(&CANVAS), CANVAS_INTS);
}

#[test]
fn names_round_trip() {
    let owned = GeneratedTables::build(&CANVAS);
    let view = StringsView::new_unchecked(&owned.entries, &owned.bytes);

    let mut expected_offset = 0;
    for (i, entry) in owned.entries.iter().enumerate() {
        assert_eq!(entry.offset, expected_offset);
        let s = view.get(i as u32).unwrap();
        assert_eq!(s.len(), entry.len as usize);
        assert_eq!(owned.bytes[entry.end_with_nul() - 1], 0);
        expected_offset += entry.len + 1;
    }
    assert_eq!(expected_offset as usize, owned.bytes.len());
}

#[test]
fn tampered_tables_are_rejected() {
    let mut owned = GeneratedTables::build(&WIDGET);
    assert!(MetaTables::new(&owned.ints, &owned.entries, &owned.bytes).is_ok());

    owned.ints[0] = 6;
    assert_eq!(
        MetaTables::new(&owned.ints, &owned.entries, &owned.bytes).unwrap_err(),
        FormatError::UnsupportedRevision(6)
    );

    owned.ints[0] = 7;
    owned.ints.truncate(21);
    assert!(matches!(
        MetaTables::new(&owned.ints, &owned.entries, &owned.bytes),
        Err(FormatError::ParametersOutOfBounds { .. })
    ));
}

#[test]
fn access_and_attribute_bits() {
    const METHODS: &[MethodDescriptor<'static>] = &[MethodDescriptor::method(
        "hidden",
        TypeRef::of::<()>(),
        &[],
    )
    .with_access(wobject_format::Access::Private)
    .with_flags(MethodFlags::SCRIPTABLE)];
    const CONSTRUCTORS: &[ConstructorDescriptor<'static>] =
        &[ConstructorDescriptor::new(&[]).with_access(wobject_format::Access::Protected)];

    let class = ClassDescriptor::new("C")
        .with_methods(METHODS)
        .with_constructors(CONSTRUCTORS);
    let generated = GeneratedTables::build(&class);
    let tables = generated.tables();

    assert_eq!(tables.method(0).unwrap().flags().bits(), 0x40);
    assert_eq!(tables.constructor(0).unwrap().flags().bits(), 0x0d);
}

#[test]
#[should_panic(expected = "argument name count does not match the argument count")]
fn mismatched_arg_names_panic() {
    const METHODS: &[MethodDescriptor<'static>] =
        &[MethodDescriptor::slot("f", TypeRef::of::<()>(), types![i32, i32]).with_arg_names(&["a"])];
    GeneratedTables::build(&ClassDescriptor::new("C").with_methods(METHODS));
}

#[test]
#[should_panic(expected = "argument type name count does not match the argument count")]
fn mismatched_arg_type_names_panic() {
    const METHODS: &[MethodDescriptor<'static>] = &[MethodDescriptor::slot(
        "f",
        TypeRef::of::<()>(),
        types![i32],
    )
    .with_arg_type_names(&["A", "B"])];
    GeneratedTables::build(&ClassDescriptor::new("C").with_methods(METHODS));
}
