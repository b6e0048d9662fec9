/*
 * error.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Error types for template compilation and rendering.

use thiserror::Error;

/// Errors that can occur during template operations.
///
/// Unresolved variable paths are deliberately *not* an error: they degrade
/// to a literal `{$key}` placeholder so broken templates stay debuggable.
/// Every variant below aborts the render call that raised it; no partial
/// output is returned.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A value accessor was invoked on the wrong variant, or a resolved
    /// path was used where a different shape was required (e.g. a `for`
    /// source that is not a list).
    #[error("Type mismatch: expected {expected} value, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An operation was requested on a node kind that cannot support it,
    /// such as asking a text node for children or rendering a stray end
    /// marker.
    #[error("Unsupported operation: {message}")]
    UnsupportedOperation { message: String },

    /// A directive expression does not have the required shape.
    #[error("Malformed directive: {expression}")]
    MalformedDirective { expression: String },
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
