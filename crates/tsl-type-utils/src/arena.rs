//! In-memory type database.
//!
//! [`TypeArena`] is a small, append-only implementation of [`TypeDatabase`]
//! for hosts that lower their own types into tsl and for tests. Intrinsic
//! types are pre-registered at fixed ids; every other constructor appends a
//! new entry and returns its [`TypeId`]. Unions are interned so that the same
//! member list yields the same id.

use crate::db::{Symbol, SymbolId, TypeDatabase, TypeId};
use crate::flags::{ObjectFlags, TypeFlags};
use rustc_hash::FxHashMap;
use tracing::trace;

/// Raw description of a type stored in a [`TypeArena`].
#[derive(Debug, Clone, Default)]
pub struct TypeData {
    pub flags: TypeFlags,
    pub object_flags: ObjectFlags,
    pub intrinsic_name: Option<String>,
    pub symbol: Option<Symbol>,
    pub base_types: Option<Vec<TypeId>>,
    pub union_members: Option<Vec<TypeId>>,
    pub type_arguments: Vec<TypeId>,
    pub is_array: bool,
    pub literal_text: Option<String>,
}

impl TypeData {
    /// A type with the given flags and nothing else.
    pub fn with_flags(flags: TypeFlags) -> Self {
        TypeData {
            flags,
            ..TypeData::default()
        }
    }

    fn intrinsic(flags: TypeFlags, name: &str) -> Self {
        TypeData {
            flags,
            intrinsic_name: Some(name.to_string()),
            ..TypeData::default()
        }
    }
}

/// Append-only type store implementing [`TypeDatabase`].
#[derive(Debug, Clone)]
pub struct TypeArena {
    types: Vec<TypeData>,
    next_symbol: u32,
    array_symbol: Option<Symbol>,
    readonly_array_symbol: Option<Symbol>,
    unions: FxHashMap<Vec<TypeId>, TypeId>,
}

impl TypeArena {
    pub const ANY: TypeId = TypeId(0);
    /// `any` produced by an earlier type error.
    pub const ERROR: TypeId = TypeId(1);
    pub const UNKNOWN: TypeId = TypeId(2);
    pub const NEVER: TypeId = TypeId(3);
    pub const VOID: TypeId = TypeId(4);
    pub const UNDEFINED: TypeId = TypeId(5);
    pub const NULL: TypeId = TypeId(6);
    pub const STRING: TypeId = TypeId(7);
    pub const NUMBER: TypeId = TypeId(8);
    pub const BOOLEAN: TypeId = TypeId(9);
    pub const BIGINT: TypeId = TypeId(10);
    pub const SYMBOL: TypeId = TypeId(11);
    pub const OBJECT: TypeId = TypeId(12);

    pub fn new() -> Self {
        let types = vec![
            TypeData::intrinsic(TypeFlags::ANY, "any"),
            TypeData::intrinsic(TypeFlags::ANY, "error"),
            TypeData::intrinsic(TypeFlags::UNKNOWN, "unknown"),
            TypeData::intrinsic(TypeFlags::NEVER, "never"),
            TypeData::intrinsic(TypeFlags::VOID, "void"),
            TypeData::intrinsic(TypeFlags::UNDEFINED, "undefined"),
            TypeData::intrinsic(TypeFlags::NULL, "null"),
            TypeData::intrinsic(TypeFlags::STRING, "string"),
            TypeData::intrinsic(TypeFlags::NUMBER, "number"),
            TypeData::intrinsic(TypeFlags::BOOLEAN, "boolean"),
            TypeData::intrinsic(TypeFlags::BIG_INT, "bigint"),
            TypeData::intrinsic(TypeFlags::ES_SYMBOL, "symbol"),
            TypeData::intrinsic(TypeFlags::NON_PRIMITIVE, "object"),
        ];

        TypeArena {
            types,
            next_symbol: 0,
            array_symbol: None,
            readonly_array_symbol: None,
            unions: FxHashMap::default(),
        }
    }

    /// Number of types stored, intrinsics included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Look up the raw data for a type.
    pub fn get(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.0 as usize)
    }

    /// Append an arbitrary type.
    pub fn alloc(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        trace!(type_id = id.0, flags = ?data.flags, "alloc type");
        self.types.push(data);
        id
    }

    /// Declare a fresh symbol. Two symbols declared with the same name are
    /// still distinct symbols.
    pub fn declare_symbol(&mut self, name: &str) -> Symbol {
        let id = SymbolId(self.next_symbol);
        self.next_symbol += 1;
        Symbol::new(id, name)
    }

    pub fn literal_string(&mut self, value: &str) -> TypeId {
        self.alloc(TypeData {
            flags: TypeFlags::STRING_LITERAL,
            literal_text: Some(value.to_string()),
            ..TypeData::default()
        })
    }

    pub fn literal_number(&mut self, value: f64) -> TypeId {
        self.alloc(TypeData {
            flags: TypeFlags::NUMBER_LITERAL,
            literal_text: Some(value.to_string()),
            ..TypeData::default()
        })
    }

    /// Bigint literal; `text` is the source spelling, e.g. `"10n"`.
    pub fn literal_bigint(&mut self, text: &str) -> TypeId {
        self.alloc(TypeData {
            flags: TypeFlags::BIG_INT_LITERAL,
            literal_text: Some(text.to_string()),
            ..TypeData::default()
        })
    }

    /// Template literal type; `text` is its display form, e.g. `` `id-${number}` ``.
    pub fn template_literal(&mut self, text: &str) -> TypeId {
        self.alloc(TypeData {
            flags: TypeFlags::TEMPLATE_LITERAL,
            literal_text: Some(text.to_string()),
            ..TypeData::default()
        })
    }

    pub fn type_parameter(&mut self, name: &str) -> TypeId {
        let symbol = self.declare_symbol(name);
        self.alloc(TypeData {
            flags: TypeFlags::TYPE_PARAMETER,
            symbol: Some(symbol),
            ..TypeData::default()
        })
    }

    /// Object literal / anonymous object type without a symbol.
    pub fn anonymous_object(&mut self) -> TypeId {
        self.alloc(TypeData {
            flags: TypeFlags::OBJECT,
            object_flags: ObjectFlags::ANONYMOUS,
            ..TypeData::default()
        })
    }

    /// Class instance type declared with `base_types` as its heritage.
    pub fn class(&mut self, name: &str, base_types: &[TypeId]) -> TypeId {
        let symbol = self.declare_symbol(name);
        self.declared_object(symbol, ObjectFlags::CLASS, base_types)
    }

    pub fn interface(&mut self, name: &str, base_types: &[TypeId]) -> TypeId {
        let symbol = self.declare_symbol(name);
        self.declared_object(symbol, ObjectFlags::INTERFACE, base_types)
    }

    /// Class or interface type bound to an existing symbol.
    pub fn declared_object(
        &mut self,
        symbol: Symbol,
        kind: ObjectFlags,
        base_types: &[TypeId],
    ) -> TypeId {
        self.alloc(TypeData {
            flags: TypeFlags::OBJECT,
            object_flags: kind,
            symbol: Some(symbol),
            base_types: Some(base_types.to_vec()),
            ..TypeData::default()
        })
    }

    /// Instantiation of a generic declared type, e.g. `Box<string>`.
    pub fn reference(&mut self, target: TypeId, type_arguments: &[TypeId]) -> TypeId {
        let (symbol, base_types, is_array) = match self.get(target) {
            Some(data) => (data.symbol.clone(), data.base_types.clone(), data.is_array),
            None => (None, None, false),
        };

        self.alloc(TypeData {
            flags: TypeFlags::OBJECT,
            object_flags: ObjectFlags::REFERENCE,
            symbol,
            base_types,
            type_arguments: type_arguments.to_vec(),
            is_array,
            ..TypeData::default()
        })
    }

    /// `T[]`
    pub fn array(&mut self, element: TypeId) -> TypeId {
        let symbol = match &self.array_symbol {
            Some(symbol) => symbol.clone(),
            None => {
                let symbol = self.declare_symbol("Array");
                self.array_symbol = Some(symbol.clone());
                symbol
            }
        };
        self.array_reference(symbol, element)
    }

    /// `readonly T[]`
    pub fn readonly_array(&mut self, element: TypeId) -> TypeId {
        let symbol = match &self.readonly_array_symbol {
            Some(symbol) => symbol.clone(),
            None => {
                let symbol = self.declare_symbol("ReadonlyArray");
                self.readonly_array_symbol = Some(symbol.clone());
                symbol
            }
        };
        self.array_reference(symbol, element)
    }

    fn array_reference(&mut self, symbol: Symbol, element: TypeId) -> TypeId {
        self.alloc(TypeData {
            flags: TypeFlags::OBJECT,
            object_flags: ObjectFlags::REFERENCE,
            symbol: Some(symbol),
            type_arguments: vec![element],
            is_array: true,
            ..TypeData::default()
        })
    }

    /// `[A, B, ...]`. Tuples are references to a tuple target but are not
    /// array types.
    pub fn tuple(&mut self, elements: &[TypeId]) -> TypeId {
        self.alloc(TypeData {
            flags: TypeFlags::OBJECT,
            object_flags: ObjectFlags::REFERENCE,
            type_arguments: elements.to_vec(),
            ..TypeData::default()
        })
    }

    /// `A | B | ...`
    ///
    /// Members that are themselves unions are flattened one level and
    /// duplicates removed. An empty union is `never`; a single member is
    /// returned as-is.
    pub fn union(&mut self, members: &[TypeId]) -> TypeId {
        let mut flat: Vec<TypeId> = Vec::with_capacity(members.len());
        for &member in members {
            match self.union_members(member) {
                Some(nested) => {
                    for &inner in nested {
                        if !flat.contains(&inner) {
                            flat.push(inner);
                        }
                    }
                }
                None => {
                    if !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }

        match flat.len() {
            0 => return Self::NEVER,
            1 => return flat[0],
            _ => {}
        }

        if let Some(&existing) = self.unions.get(&flat) {
            return existing;
        }

        let id = self.alloc(TypeData {
            flags: TypeFlags::UNION,
            union_members: Some(flat.clone()),
            ..TypeData::default()
        });
        self.unions.insert(flat, id);
        id
    }

    /// `A & B & ...`. Members are not retained; only the flags are.
    pub fn intersection(&mut self, members: &[TypeId]) -> TypeId {
        if members.len() == 1 {
            return members[0];
        }
        self.alloc(TypeData::with_flags(TypeFlags::INTERSECTION))
    }
}

impl Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeDatabase for TypeArena {
    fn flags(&self, id: TypeId) -> TypeFlags {
        self.get(id).map(|data| data.flags).unwrap_or_default()
    }

    fn object_flags(&self, id: TypeId) -> ObjectFlags {
        self.get(id)
            .map(|data| data.object_flags)
            .unwrap_or_default()
    }

    fn intrinsic_name(&self, id: TypeId) -> Option<&str> {
        self.get(id)?.intrinsic_name.as_deref()
    }

    fn symbol(&self, id: TypeId) -> Option<&Symbol> {
        self.get(id)?.symbol.as_ref()
    }

    fn base_types(&self, id: TypeId) -> Option<&[TypeId]> {
        self.get(id)?.base_types.as_deref()
    }

    fn union_members(&self, id: TypeId) -> Option<&[TypeId]> {
        self.get(id)?.union_members.as_deref()
    }

    fn is_array_type(&self, id: TypeId) -> bool {
        self.get(id).is_some_and(|data| data.is_array)
    }

    fn type_arguments(&self, id: TypeId) -> &[TypeId] {
        match self.get(id) {
            Some(data) if data.object_flags.contains(ObjectFlags::REFERENCE) => {
                &data.type_arguments
            }
            _ => &[],
        }
    }

    fn literal_text(&self, id: TypeId) -> Option<&str> {
        self.get(id)?.literal_text.as_deref()
    }
}

#[cfg(test)]
#[path = "../tests/arena_tests.rs"]
mod arena_tests;
