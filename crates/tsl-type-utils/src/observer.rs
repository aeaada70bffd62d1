//! Observation hooks for the type predicates.
//!
//! Predicates stay pure; anything worth surfacing for debugging goes through
//! an injected [`TypeObserver`].

use crate::db::TypeId;
use tracing::debug;

/// Receives notable observations made while classifying types.
pub trait TypeObserver {
    /// An `any` type whose intrinsic name is `"error"` was classified, i.e. the
    /// `any` came from an earlier type error rather than an explicit `any`.
    fn error_any_type(&self, _type_id: TypeId) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TypeObserver for NoopObserver {}

/// Observer that forwards observations to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TypeObserver for TracingObserver {
    fn error_any_type(&self, type_id: TypeId) {
        debug!(type_id = type_id.0, "found an \"error\" any type");
    }
}
