//! Type classification utilities
//!
//! Pure queries over type handles owned by a host type checker:
//!
//! - **Flags**: `TypeFlags` / `ObjectFlags` sets with named subsets
//! - **Predicates**: nullable, any, unknown, never, `any[]`, `unknown[]`,
//!   bigint/template literal and type-reference checks
//! - **Walker**: union decomposition, array unions and base-type chains
//!
//! The host exposes its types through [`TypeDatabase`]. [`TypeArena`] is an
//! in-memory implementation for hosts without one and for tests.

mod arena;
mod db;
pub mod flags;
pub mod observer;
pub mod predicates;
pub mod walker;

pub use arena::{TypeArena, TypeData};
pub use db::{Symbol, SymbolId, TypeDatabase, TypeId};
pub use flags::{ObjectFlags, TypeFlags};
pub use observer::{NoopObserver, TracingObserver, TypeObserver};
pub use predicates::{BigIntLiteralType, TemplateLiteralType, TypePredicates, TypeReference};
pub use walker::{
    is_type_array_type_or_union_of_array_types, type_is_or_has_base_type, union_type_parts,
};
