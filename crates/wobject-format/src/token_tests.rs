use wobject_core::BuiltinType;

use super::constants::IS_UNRESOLVED_TYPE;
use super::token::{TokenKind, TypeToken};

#[test]
fn builtin_tokens_carry_the_id() {
    let token = TypeToken::builtin(BuiltinType::Int);
    assert_eq!(token.0, 2);
    assert!(token.is_builtin());
    assert_eq!(token.decode(), TokenKind::Builtin(2));
    assert_eq!(token.as_builtin(), Some(BuiltinType::Int));
}

#[test]
fn unresolved_tokens_set_the_high_bit() {
    let token = TypeToken::unresolved(5);
    assert_eq!(token.0, 0x8000_0005);
    assert!(!token.is_builtin());
    assert_eq!(token.payload(), 5);
    assert_eq!(token.decode(), TokenKind::Unresolved(5));
    assert_eq!(token.as_builtin(), None);
}

#[test]
fn constructor_return_is_the_empty_name_sentinel() {
    assert_eq!(TypeToken::CONSTRUCTOR_RETURN.0, IS_UNRESOLVED_TYPE | 1);
    assert_eq!(TypeToken::CONSTRUCTOR_RETURN.decode(), TokenKind::Unresolved(1));
}

#[test]
fn encodings_are_disjoint() {
    for builtin in BuiltinType::ALL {
        let b = TypeToken::builtin(builtin);
        for index in 0..64 {
            assert_ne!(b, TypeToken::unresolved(index));
        }
        assert!(b.is_builtin());
    }
}

#[test]
fn unknown_builtin_ids_still_decode() {
    let token = TypeToken(1024);
    assert_eq!(token.decode(), TokenKind::Builtin(1024));
    assert_eq!(token.as_builtin(), None);
}

#[test]
#[should_panic(expected = "unresolved-type bit")]
fn oversized_string_index_is_rejected() {
    let _ = TypeToken::unresolved(IS_UNRESOLVED_TYPE);
}
