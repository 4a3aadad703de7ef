use super::flags::{Access, MethodFlags, MethodKind, PropertyFlags};

#[test]
fn preset_method_flags() {
    assert_eq!(MethodFlags::PUBLIC_METHOD.bits(), 0x02);
    assert_eq!(MethodFlags::PUBLIC_SIGNAL.bits(), 0x06);
    assert_eq!(MethodFlags::PUBLIC_SLOT.bits(), 0x0a);
    assert_eq!(MethodFlags::PUBLIC_CONSTRUCTOR.bits(), 0x0e);
}

#[test]
fn kind_and_access_decode() {
    let flags = MethodFlags::ACCESS_PROTECTED | MethodFlags::SLOT | MethodFlags::CLONED;
    assert_eq!(flags.kind(), MethodKind::Slot);
    assert_eq!(flags.access(), Some(Access::Protected));
    assert!(flags.contains(MethodFlags::CLONED));
    assert!(!flags.is_signal());

    assert!(MethodFlags::PUBLIC_SIGNAL.is_signal());
    assert_eq!(MethodFlags(0x03).access(), None);
}

#[test]
fn constructor_kind_is_not_a_signal() {
    assert_eq!(MethodFlags::PUBLIC_CONSTRUCTOR.kind(), MethodKind::Constructor);
    assert!(!MethodFlags::PUBLIC_CONSTRUCTOR.is_signal());
}

#[test]
fn property_read_write() {
    assert_eq!(PropertyFlags::READ_WRITE.bits(), 0x3);
    assert!(PropertyFlags::READ_WRITE.contains(PropertyFlags::READABLE));
    assert!(!PropertyFlags::READ_WRITE.contains(PropertyFlags::CONSTANT));
}

#[test]
fn debug_is_hex() {
    assert_eq!(format!("{:?}", MethodFlags::PUBLIC_SLOT), "MethodFlags(0x0a)");
    assert_eq!(format!("{:?}", PropertyFlags::NOTIFY), "PropertyFlags(0x400000)");
}
