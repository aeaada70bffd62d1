use super::*;
use crate::predicates::TypePredicates;

#[test]
fn test_arena_intrinsics() {
    let arena = TypeArena::new();

    assert_eq!(arena.flags(TypeArena::ANY), TypeFlags::ANY);
    assert_eq!(arena.intrinsic_name(TypeArena::ANY), Some("any"));
    assert_eq!(arena.flags(TypeArena::ERROR), TypeFlags::ANY);
    assert_eq!(arena.intrinsic_name(TypeArena::ERROR), Some("error"));
    assert_eq!(arena.flags(TypeArena::VOID), TypeFlags::VOID);
    assert!(arena.symbol(TypeArena::STRING).is_none());
}

#[test]
fn test_union_normalization() {
    let mut arena = TypeArena::new();

    assert_eq!(arena.union(&[]), TypeArena::NEVER);
    assert_eq!(arena.union(&[TypeArena::STRING]), TypeArena::STRING);

    let a = arena.union(&[TypeArena::STRING, TypeArena::NUMBER]);
    let b = arena.union(&[TypeArena::STRING, TypeArena::NUMBER, TypeArena::STRING]);
    assert_eq!(a, b);
    assert_eq!(
        arena.union_members(a),
        Some(&[TypeArena::STRING, TypeArena::NUMBER][..])
    );
}

#[test]
fn test_union_flattens_nested_unions() {
    let mut arena = TypeArena::new();
    let inner = arena.union(&[TypeArena::STRING, TypeArena::NUMBER]);
    let outer = arena.union(&[inner, TypeArena::NULL]);

    assert_eq!(
        arena.union_members(outer),
        Some(&[TypeArena::STRING, TypeArena::NUMBER, TypeArena::NULL][..])
    );
}

#[test]
fn test_arrays_share_the_array_symbol() {
    let mut arena = TypeArena::new();
    let strings = arena.array(TypeArena::STRING);
    let numbers = arena.array(TypeArena::NUMBER);

    assert!(arena.is_array_type(strings));
    assert_eq!(arena.type_arguments(strings), &[TypeArena::STRING]);
    assert_eq!(arena.symbol(strings), arena.symbol(numbers));
    assert_eq!(arena.symbol(strings).map(|s| s.name.as_str()), Some("Array"));
}

#[test]
fn test_tuple_is_reference_but_not_array() {
    let mut arena = TypeArena::new();
    let tuple = arena.tuple(&[TypeArena::STRING, TypeArena::NUMBER]);

    assert!(!arena.is_array_type(tuple));
    assert!(arena.object_flags(tuple).contains(ObjectFlags::REFERENCE));
    assert_eq!(arena.type_arguments(tuple).len(), 2);
}

#[test]
fn test_reference_inherits_target_heritage() {
    let mut arena = TypeArena::new();
    let base = arena.class("Base", &[]);
    let generic = arena.class("Container", &[base]);
    let instance = arena.reference(generic, &[TypeArena::STRING]);

    assert_eq!(arena.symbol(instance), arena.symbol(generic));
    assert_eq!(arena.base_types(instance), Some(&[base][..]));
    assert_eq!(arena.type_arguments(instance), &[TypeArena::STRING]);
}

#[test]
fn test_same_name_symbols_are_distinct() {
    let mut arena = TypeArena::new();
    let a = arena.declare_symbol("Node");
    let b = arena.declare_symbol("Node");

    assert_ne!(a, b);
    assert_eq!(a.name, b.name);
}

#[test]
fn test_unknown_type_id_has_no_flags() {
    let arena = TypeArena::new();
    let dangling = TypeId(arena.len() as u32 + 10);

    assert!(arena.flags(dangling).is_empty());
    assert!(arena.object_flags(dangling).is_empty());

    let predicates = TypePredicates::new(&arena);
    assert!(!predicates.is_type_any_type(dangling));
    assert!(!predicates.is_nullable_type(dangling));
    assert!(!predicates.is_type_reference_type(dangling));
}
