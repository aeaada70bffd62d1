use super::*;

#[test]
fn test_named_subsets() {
    assert_eq!(TypeFlags::NULLABLE, TypeFlags::UNDEFINED | TypeFlags::NULL);
    assert!(TypeFlags::ACCEPTS_NULLISH.contains(TypeFlags::VOID));
    assert!(!TypeFlags::ACCEPTS_NULLISH.contains(TypeFlags::NEVER));
}

#[test]
fn test_may_carry_object_flags() {
    for flags in [
        TypeFlags::ANY,
        TypeFlags::NULL,
        TypeFlags::UNDEFINED,
        TypeFlags::NEVER,
        TypeFlags::OBJECT,
        TypeFlags::UNION,
        TypeFlags::INTERSECTION,
    ] {
        assert!(flags.may_carry_object_flags(), "{flags:?}");
    }

    for flags in [
        TypeFlags::UNKNOWN,
        TypeFlags::VOID,
        TypeFlags::STRING,
        TypeFlags::TEMPLATE_LITERAL,
        TypeFlags::TYPE_PARAMETER,
    ] {
        assert!(!flags.may_carry_object_flags(), "{flags:?}");
    }
}

#[test]
fn test_has_any() {
    let flags = TypeFlags::STRING | TypeFlags::NULL;
    assert!(flags.has_any(TypeFlags::NULLABLE));
    assert!(!flags.has_any(TypeFlags::NUMBER | TypeFlags::VOID));

    let object_flags = ObjectFlags::INTERFACE | ObjectFlags::REFERENCE;
    assert!(object_flags.has_any(ObjectFlags::CLASS_OR_INTERFACE));
    assert!(!object_flags.has_any(ObjectFlags::TUPLE));
}
