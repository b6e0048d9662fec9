/*
 * value.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! The runtime value model: shared data handles and the data context.
//!
//! Templates are rendered against a [`Context`], a string-keyed map of
//! [`Data`] handles. A handle is reference-counted: assigning it into a list
//! or map aliases the underlying [`Value`] rather than copying it, so a
//! loop-bound variable and an externally-held handle observe the same
//! mutations. Rendering relies on this aliasing; switching to copy semantics
//! would change observable template output.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{TemplateError, TemplateResult};

/// A runtime datum: scalar text, an ordered list, or a keyed map.
#[derive(Debug)]
pub enum Value {
    /// A string value.
    Scalar(String),

    /// An ordered sequence of data handles.
    List(Vec<Data>),

    /// A mapping from string keys to data handles.
    Map(Context),
}

impl Value {
    /// Variant name used in `TypeMismatch` errors.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Scalar(String::new())
    }
}

/// A shared, cheaply clonable handle to a [`Value`].
///
/// Cloning a `Data` clones the handle, not the value. The accessors are
/// strict: asking a scalar for its map is a programming error reported as
/// [`TemplateError::TypeMismatch`], never a silent coercion.
#[derive(Debug, Clone, Default)]
pub struct Data {
    inner: Rc<RefCell<Value>>,
}

impl Data {
    fn new(value: Value) -> Self {
        Data {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Create a scalar handle.
    pub fn scalar(text: impl Into<String>) -> Self {
        Data::new(Value::Scalar(text.into()))
    }

    /// Create a list handle.
    pub fn list(items: Vec<Data>) -> Self {
        Data::new(Value::List(items))
    }

    /// Create a map handle.
    pub fn map(entries: Context) -> Self {
        Data::new(Value::Map(entries))
    }

    /// The scalar text of this value.
    pub fn as_scalar(&self) -> TemplateResult<String> {
        match &*self.inner.borrow() {
            Value::Scalar(text) => Ok(text.clone()),
            other => Err(TemplateError::TypeMismatch {
                expected: "scalar",
                found: other.kind(),
            }),
        }
    }

    /// The items of this list. The returned handles alias the stored ones.
    pub fn as_list(&self) -> TemplateResult<Vec<Data>> {
        match &*self.inner.borrow() {
            Value::List(items) => Ok(items.clone()),
            other => Err(TemplateError::TypeMismatch {
                expected: "list",
                found: other.kind(),
            }),
        }
    }

    /// The entries of this map. The returned context shares its handles
    /// with the stored one.
    pub fn as_map(&self) -> TemplateResult<Context> {
        match &*self.inner.borrow() {
            Value::Map(entries) => Ok(entries.clone()),
            other => Err(TemplateError::TypeMismatch {
                expected: "map",
                found: other.kind(),
            }),
        }
    }

    /// Emptiness is variant-specific: a scalar is empty iff its text is
    /// empty, a list or map iff it has zero entries.
    pub fn is_empty(&self) -> bool {
        match &*self.inner.borrow() {
            Value::Scalar(text) => text.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
        }
    }

    /// Append an item to a list value.
    ///
    /// An uninitialized handle (the default empty scalar) is promoted to a
    /// one-element list on first push. Pushing to a non-empty scalar or to
    /// a map is a `TypeMismatch`.
    pub fn push(&self, item: impl Into<Data>) -> TemplateResult<()> {
        let mut value = self.inner.borrow_mut();
        if matches!(&*value, Value::Scalar(text) if text.is_empty()) {
            *value = Value::List(Vec::new());
        }
        match &mut *value {
            Value::List(items) => {
                items.push(item.into());
                Ok(())
            }
            other => Err(TemplateError::TypeMismatch {
                expected: "list",
                found: other.kind(),
            }),
        }
    }
}

impl From<&str> for Data {
    fn from(text: &str) -> Self {
        Data::scalar(text)
    }
}

impl From<String> for Data {
    fn from(text: String) -> Self {
        Data::scalar(text)
    }
}

impl From<Vec<Data>> for Data {
    fn from(items: Vec<Data>) -> Self {
        Data::list(items)
    }
}

impl From<Context> for Data {
    fn from(entries: Context) -> Self {
        Data::map(entries)
    }
}

/// Convert a JSON document into the value model.
///
/// Strings become scalars; numbers and booleans become scalars of their
/// display text; null becomes the empty scalar; arrays and objects become
/// lists and maps. This is the route by which benchmark result documents
/// reach a template context.
impl From<serde_json::Value> for Data {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Data::scalar(""),
            serde_json::Value::Bool(b) => Data::scalar(b.to_string()),
            serde_json::Value::Number(n) => Data::scalar(n.to_string()),
            serde_json::Value::String(s) => Data::scalar(s),
            serde_json::Value::Array(items) => {
                Data::list(items.into_iter().map(Data::from).collect())
            }
            serde_json::Value::Object(entries) => {
                let mut map = Context::new();
                for (key, item) in entries {
                    map.insert(key, Data::from(item));
                }
                Data::map(map)
            }
        }
    }
}

/// A string-keyed map of data handles.
///
/// The top-level context is owned by the caller and passed mutably through
/// a render call; `for` evaluation binds the iteration variable and the
/// `loop` map directly into it. Nested contexts live inside [`Value::Map`].
#[derive(Debug, Clone, Default)]
pub struct Context {
    entries: HashMap<String, Data>,
}

impl Context {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value under a key, replacing any previous binding.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Data>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a key, returning a handle that aliases the stored value.
    pub fn get(&self, key: &str) -> Option<Data> {
        self.entries.get(key).cloned()
    }

    /// Whether a key is bound.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Append an item to the list bound under `key`, creating the list if
    /// the key is absent.
    pub fn push_value(
        &mut self,
        key: impl Into<String>,
        item: impl Into<Data>,
    ) -> TemplateResult<()> {
        self.entries.entry(key.into()).or_default().push(item)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
