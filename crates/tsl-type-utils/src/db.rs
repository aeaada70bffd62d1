//! Type database seam.
//!
//! Type handles are owned by the host compiler. Everything in this crate
//! reads them through [`TypeDatabase`]; nothing here constructs or mutates a
//! host type.

use crate::flags::{ObjectFlags, TypeFlags};

/// Opaque handle to a type in a [`TypeDatabase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Opaque handle to a symbol in a [`TypeDatabase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

/// Nominal identity of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
}

impl Symbol {
    pub fn new(id: SymbolId, name: impl Into<String>) -> Self {
        Symbol {
            id,
            name: name.into(),
        }
    }
}

/// Read-only access to the host type system.
pub trait TypeDatabase {
    /// Primary flags of a type. Never empty for a live handle.
    fn flags(&self, id: TypeId) -> TypeFlags;

    /// Object flags of a type.
    ///
    /// Only defined when `flags(id)` intersects
    /// [`TypeFlags::OBJECT_FLAGS_TYPE`]; callers must check that first.
    fn object_flags(&self, id: TypeId) -> ObjectFlags;

    /// Intrinsic name for built-in types (`"any"`, `"error"`, `"string"`, ...).
    fn intrinsic_name(&self, id: TypeId) -> Option<&str>;

    /// The symbol a type is declared by, if any.
    fn symbol(&self, id: TypeId) -> Option<&Symbol>;

    /// Declared base types, in declaration order. `None` when the type has no
    /// heritage information at all.
    fn base_types(&self, id: TypeId) -> Option<&[TypeId]>;

    /// Constituents of a union type; `None` for non-unions.
    fn union_members(&self, id: TypeId) -> Option<&[TypeId]>;

    /// Whether the type is an `Array<T>` / `ReadonlyArray<T>` instantiation.
    fn is_array_type(&self, id: TypeId) -> bool;

    /// Type arguments of a type reference; empty for anything else.
    fn type_arguments(&self, id: TypeId) -> &[TypeId];

    /// Source text of a literal type's value (e.g. `"123n"` for a bigint
    /// literal), when the host tracks it.
    fn literal_text(&self, _id: TypeId) -> Option<&str> {
        None
    }
}
