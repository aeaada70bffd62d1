//! Type flag sets.
//!
//! Mirrors the host compiler's `TypeFlags` / `ObjectFlags` bit layout so that
//! flag sets read from a host type can be classified without translation.
//! Callers work with the named members and the named subsets below, never with
//! raw masks.

use bitflags::bitflags;

bitflags! {
    /// Primary classification flags of a type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const ENUM = 1 << 5;
        const BIG_INT = 1 << 6;
        const STRING_LITERAL = 1 << 7;
        const NUMBER_LITERAL = 1 << 8;
        const BOOLEAN_LITERAL = 1 << 9;
        const ENUM_LITERAL = 1 << 10;
        const BIG_INT_LITERAL = 1 << 11;
        const ES_SYMBOL = 1 << 12;
        const UNIQUE_ES_SYMBOL = 1 << 13;
        const VOID = 1 << 14;
        const UNDEFINED = 1 << 15;
        const NULL = 1 << 16;
        const NEVER = 1 << 17;
        const TYPE_PARAMETER = 1 << 18;
        const OBJECT = 1 << 19;
        const UNION = 1 << 20;
        const INTERSECTION = 1 << 21;
        const INDEX = 1 << 22;
        const INDEXED_ACCESS = 1 << 23;
        const CONDITIONAL = 1 << 24;
        const SUBSTITUTION = 1 << 25;
        const NON_PRIMITIVE = 1 << 26;
        const TEMPLATE_LITERAL = 1 << 27;
        const STRING_MAPPING = 1 << 28;

        /// `undefined | null`
        const NULLABLE = Self::UNDEFINED.bits() | Self::NULL.bits();
        /// Types that accept a nullish value.
        const ACCEPTS_NULLISH = Self::ANY.bits()
            | Self::UNKNOWN.bits()
            | Self::NULL.bits()
            | Self::UNDEFINED.bits()
            | Self::VOID.bits();
        /// Types whose `object_flags` are defined.
        const OBJECT_FLAGS_TYPE = Self::ANY.bits()
            | Self::NULLABLE.bits()
            | Self::NEVER.bits()
            | Self::OBJECT.bits()
            | Self::UNION.bits()
            | Self::INTERSECTION.bits();
    }
}

bitflags! {
    /// Finer-grained flags for object-like types.
    ///
    /// Only meaningful when the owning type's [`TypeFlags`] intersect
    /// [`TypeFlags::OBJECT_FLAGS_TYPE`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ObjectFlags: u32 {
        const CLASS = 1 << 0;
        const INTERFACE = 1 << 1;
        /// Generic type reference (`Array<T>`, `Foo<string>`)
        const REFERENCE = 1 << 2;
        const TUPLE = 1 << 3;
        const ANONYMOUS = 1 << 4;
        const MAPPED = 1 << 5;
        const INSTANTIATED = 1 << 6;
        const OBJECT_LITERAL = 1 << 7;
        const EVOLVING_ARRAY = 1 << 8;
        const OBJECT_LITERAL_PATTERN_WITH_COMPUTED_PROPERTIES = 1 << 9;
        const REVERSE_MAPPED = 1 << 10;
        const JSX_ATTRIBUTES = 1 << 11;
        const JS_LITERAL = 1 << 12;
        const FRESH_LITERAL = 1 << 13;
        const ARRAY_LITERAL = 1 << 14;

        const CLASS_OR_INTERFACE = Self::CLASS.bits() | Self::INTERFACE.bits();
    }
}

impl TypeFlags {
    /// Whether any flag in `subset` is set.
    #[inline]
    pub const fn has_any(self, subset: TypeFlags) -> bool {
        self.intersects(subset)
    }

    /// Whether a type with these flags has defined object flags.
    #[inline]
    pub const fn may_carry_object_flags(self) -> bool {
        self.intersects(Self::OBJECT_FLAGS_TYPE)
    }
}

impl ObjectFlags {
    /// Whether any flag in `subset` is set.
    #[inline]
    pub const fn has_any(self, subset: ObjectFlags) -> bool {
        self.intersects(subset)
    }
}

#[cfg(test)]
#[path = "../tests/flags_tests.rs"]
mod flags_tests;
