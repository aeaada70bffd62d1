//! Type flag predicates.
//!
//! Each predicate answers a single yes/no question about an already computed
//! type. The `as_*` companions return a narrowed view of the handle, and only
//! construct it once the matching predicate has succeeded.

use crate::db::{TypeDatabase, TypeId};
use crate::flags::{ObjectFlags, TypeFlags};
use crate::observer::{NoopObserver, TypeObserver};

static NOOP_OBSERVER: NoopObserver = NoopObserver;

/// Narrowed view of a bigint literal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigIntLiteralType(TypeId);

impl BigIntLiteralType {
    pub fn id(self) -> TypeId {
        self.0
    }

    /// Source spelling of the literal, when the database tracks it.
    pub fn text(self, db: &dyn TypeDatabase) -> Option<&str> {
        db.literal_text(self.0)
    }
}

/// Narrowed view of a template literal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateLiteralType(TypeId);

impl TemplateLiteralType {
    pub fn id(self) -> TypeId {
        self.0
    }

    pub fn text(self, db: &dyn TypeDatabase) -> Option<&str> {
        db.literal_text(self.0)
    }
}

/// Narrowed view of a generic type reference (`Foo<T>`, `T[]`, tuples).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeReference(TypeId);

impl TypeReference {
    pub fn id(self) -> TypeId {
        self.0
    }

    pub fn type_arguments(self, db: &dyn TypeDatabase) -> &[TypeId] {
        db.type_arguments(self.0)
    }
}

/// Flag-based classification of types.
pub struct TypePredicates<'a> {
    db: &'a dyn TypeDatabase,
    observer: &'a dyn TypeObserver,
}

impl<'a> TypePredicates<'a> {
    /// Predicates with no observer.
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        Self {
            db,
            observer: &NOOP_OBSERVER,
        }
    }

    pub fn with_observer(db: &'a dyn TypeDatabase, observer: &'a dyn TypeObserver) -> Self {
        Self { db, observer }
    }

    pub fn db(&self) -> &'a dyn TypeDatabase {
        self.db
    }

    fn has_flags(&self, type_id: TypeId, flags: TypeFlags) -> bool {
        self.db.flags(type_id).has_any(flags)
    }

    /// Checks if the given type is (or accepts) nullable.
    pub fn is_nullable_type(&self, type_id: TypeId) -> bool {
        self.has_flags(type_id, TypeFlags::ACCEPTS_NULLISH)
    }

    /// Returns true if the type is `never`.
    pub fn is_type_never_type(&self, type_id: TypeId) -> bool {
        self.has_flags(type_id, TypeFlags::NEVER)
    }

    /// Returns true if the type is `unknown`.
    pub fn is_type_unknown_type(&self, type_id: TypeId) -> bool {
        self.has_flags(type_id, TypeFlags::UNKNOWN)
    }

    /// Returns true if the type is `any`, including the `any` a prior type
    /// error leaves behind.
    pub fn is_type_any_type(&self, type_id: TypeId) -> bool {
        if !self.has_flags(type_id, TypeFlags::ANY) {
            return false;
        }
        if self.db.intrinsic_name(type_id) == Some("error") {
            self.observer.error_any_type(type_id);
        }
        true
    }

    /// Returns true if the type is `any[]`.
    pub fn is_type_any_array_type(&self, type_id: TypeId) -> bool {
        self.db.is_array_type(type_id)
            && self
                .first_type_argument(type_id)
                .is_some_and(|element| self.is_type_any_type(element))
    }

    /// Returns true if the type is `unknown[]`.
    pub fn is_type_unknown_array_type(&self, type_id: TypeId) -> bool {
        self.db.is_array_type(type_id)
            && self
                .first_type_argument(type_id)
                .is_some_and(|element| self.is_type_unknown_type(element))
    }

    // Only the first argument is examined; tuples are not special-cased.
    fn first_type_argument(&self, type_id: TypeId) -> Option<TypeId> {
        self.db.type_arguments(type_id).first().copied()
    }

    pub fn is_type_bigint_literal_type(&self, type_id: TypeId) -> bool {
        self.has_flags(type_id, TypeFlags::BIG_INT_LITERAL)
    }

    pub fn as_bigint_literal_type(&self, type_id: TypeId) -> Option<BigIntLiteralType> {
        self.is_type_bigint_literal_type(type_id)
            .then_some(BigIntLiteralType(type_id))
    }

    pub fn is_type_template_literal_type(&self, type_id: TypeId) -> bool {
        self.has_flags(type_id, TypeFlags::TEMPLATE_LITERAL)
    }

    pub fn as_template_literal_type(&self, type_id: TypeId) -> Option<TemplateLiteralType> {
        self.is_type_template_literal_type(type_id)
            .then_some(TemplateLiteralType(type_id))
    }

    /// Returns true if the type is a generic type reference.
    ///
    /// Object flags are only read for types whose flags say they carry them.
    pub fn is_type_reference_type(&self, type_id: TypeId) -> bool {
        if !self.db.flags(type_id).may_carry_object_flags() {
            return false;
        }
        self.db
            .object_flags(type_id)
            .has_any(ObjectFlags::REFERENCE)
    }

    pub fn as_type_reference(&self, type_id: TypeId) -> Option<TypeReference> {
        self.is_type_reference_type(type_id)
            .then_some(TypeReference(type_id))
    }
}

#[cfg(test)]
#[path = "../tests/predicates_tests.rs"]
mod predicates_tests;
