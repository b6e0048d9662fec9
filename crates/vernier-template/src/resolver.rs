/*
 * resolver.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Dotted-path resolution against a data context.
//!
//! A key like `results.mean` walks nested maps one segment at a time. A key
//! that starts with a double quote is a literal, not a lookup. A key whose
//! first segment is absent resolves to the literal placeholder text
//! `{$key}` so that broken templates render something visibly wrong instead
//! of failing.

use crate::error::TemplateResult;
use crate::value::{Context, Data};

/// Resolve a dotted key against a context.
///
/// The only failure mode is a `TypeMismatch` when a path segment lands on a
/// value that is not a map; a missing key is answered with the
/// placeholder-echo scalar.
pub fn resolve(key: &str, context: &Context) -> TemplateResult<Data> {
    // Quoted literal: `"text"` resolves to the text itself.
    if key.starts_with('"') {
        return Ok(Data::scalar(key.trim_matches('"')));
    }

    match key.split_once('.') {
        None => match context.get(key) {
            Some(value) => Ok(value),
            None => Ok(placeholder(key)),
        },
        Some((head, remainder)) => match context.get(head) {
            // The echo carries the key as seen at this level, dots and all.
            None => Ok(placeholder(key)),
            Some(value) => resolve(remainder, &value.as_map()?),
        },
    }
}

fn placeholder(key: &str) -> Data {
    Data::scalar(format!("{{${key}}}"))
}
