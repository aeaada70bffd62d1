//! Structural queries: union decomposition, array unions and base-type
//! chains.

use crate::db::{TypeDatabase, TypeId};
use smallvec::{SmallVec, smallvec};

/// Union constituents of a type; a non-union decomposes to itself.
///
/// Nested unions are not expanded here. Hosts that flatten unions on
/// construction (as `TypeArena` does) already store them one level deep.
pub fn union_type_parts(db: &dyn TypeDatabase, type_id: TypeId) -> SmallVec<[TypeId; 4]> {
    match db.union_members(type_id) {
        Some(members) => SmallVec::from_slice(members),
        None => smallvec![type_id],
    }
}

/// Checks if the given type is either an array type, or a union made up
/// solely of array types.
pub fn is_type_array_type_or_union_of_array_types(db: &dyn TypeDatabase, type_id: TypeId) -> bool {
    union_type_parts(db, type_id)
        .iter()
        .all(|&part| db.is_array_type(part))
}

/// Whether `type_id` is, or derives from, `parent_type`.
///
/// Compares symbol NAMES over the type itself and its declared base types,
/// so unrelated types that share a name also match. Returns false if either
/// type has no symbol.
pub fn type_is_or_has_base_type(
    db: &dyn TypeDatabase,
    type_id: TypeId,
    parent_type: TypeId,
) -> bool {
    let Some(parent_symbol) = db.symbol(parent_type) else {
        return false;
    };
    if db.symbol(type_id).is_none() {
        return false;
    }

    let base_types = db.base_types(type_id).unwrap_or(&[]);
    std::iter::once(type_id)
        .chain(base_types.iter().copied())
        .any(|candidate| {
            db.symbol(candidate)
                .is_some_and(|symbol| symbol.name == parent_symbol.name)
        })
}

#[cfg(test)]
#[path = "../tests/walker_tests.rs"]
mod walker_tests;
