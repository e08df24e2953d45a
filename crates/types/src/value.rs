//! The closed set of value kinds that make up a document's object graph.
//!
//! Values are built once and then handed to the writer; nothing mutates
//! them afterwards. Dictionaries keep their entries in an ordered map so
//! that serialized key order is always ascending, whatever order the
//! entries were inserted in.

use crate::ids::ObjectId;
use std::collections::BTreeMap;
use std::fmt;

/// A single value in the object graph.
///
/// Marked non-exhaustive: serializers outside this crate must keep a
/// catch-all arm for kinds they do not know how to encode.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    /// A name, stored without the leading solidus and unescaped: the
    /// writer turns delimiters, `#` and non-printable bytes into `#xx`.
    Name(String),
    /// Raw, unescaped bytes written between parentheses. The writer
    /// backslash-escapes `(`, `)` and `\`, so already-escaped input would
    /// be escaped twice.
    LiteralString(Vec<u8>),
    /// Raw bytes written as hex digits between angle brackets.
    HexString(Vec<u8>),
    Array(Array),
    Dict(Dict),
    /// An indirect reference to another object.
    Link(ObjectId),
}

/// Tag naming the kind of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Name,
    LiteralString,
    HexString,
    Array,
    Dict,
    Link,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Name => "name",
            ValueKind::LiteralString => "literal string",
            ValueKind::HexString => "hex string",
            ValueKind::Array => "array",
            ValueKind::Dict => "dictionary",
            ValueKind::Link => "link",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn name(name: impl Into<String>) -> Self {
        Value::Name(name.into())
    }

    pub fn literal(bytes: impl Into<Vec<u8>>) -> Self {
        Value::LiteralString(bytes.into())
    }

    pub fn hex(bytes: impl Into<Vec<u8>>) -> Self {
        Value::HexString(bytes.into())
    }

    pub fn link(num: u32, generation: u16) -> Self {
        Value::Link(ObjectId::new(num, generation))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::Name(_) => ValueKind::Name,
            Value::LiteralString(_) => ValueKind::LiteralString,
            Value::HexString(_) => ValueKind::HexString,
            Value::Array(_) => ValueKind::Array,
            Value::Dict(_) => ValueKind::Dict,
            Value::Link(_) => ValueKind::Link,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Value::Name(n) => Some(n),
            _ => None,
        }
    }

    /// Payload bytes of either string flavour.
    pub fn as_string_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::LiteralString(s) | Value::HexString(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<ObjectId> {
        match self {
            Value::Link(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

number_from_int!(i32, i64, u16, u32, u64, usize);

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::Link(id)
    }
}

impl From<Dict> for Value {
    fn from(dict: Dict) -> Self {
        Value::Dict(dict)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(Array(values))
    }
}

/// An ordered sequence of values, serialized in the given order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array(Vec<Value>);

impl Array {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.0.push(value.into());
        self
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A name-keyed dictionary. Iteration is always in ascending key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict(BTreeMap<String, Value>);

impl Dict {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts an entry, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds a [`Dict`] from `key => value` pairs.
///
/// ```
/// use quire_types::{dict, Value};
///
/// let catalog = dict! {
///     "Type" => Value::name("Catalog"),
///     "Pages" => Value::link(2, 0),
/// };
/// assert_eq!(catalog.len(), 2);
/// ```
#[macro_export]
macro_rules! dict {
    () => { $crate::Dict::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut dict = $crate::Dict::new();
        $( dict.insert($key, $value); )+
        dict
    }};
}
