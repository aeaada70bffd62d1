//! Common types and utilities shared by the tsl crates.
//!
//! This crate provides foundational types used across all tsl crates:
//! - Source spans (`Span`)
//! - Position/Range types for line/column source locations
//! - Comment tokens and a reference comment scanner
//! - Text edits for fixes and suggestions
//! - Diagnostic message templates and interpolation

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position/Range types for line/column source locations
pub mod position;
pub use position::{LineMap, Position, Range};

// Comment tokens and scanning
pub mod comments;
pub use comments::{CommentKind, CommentToken, scan_comments};

// Text edits (fixes and suggestions)
pub mod edit;
pub use edit::{TextEdit, apply_edits};

// Message templates
pub mod diagnostics;
pub use diagnostics::{MessageData, format_message};
