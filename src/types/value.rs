//! Graph value type

use std::rc::Rc;

use super::NdArray;

/// A node in the object graph
///
/// Containers hold `Rc` children, so a node reachable through several paths
/// is one shared object; the codec preserves that sharing through
/// back-references.
#[derive(Debug, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Rc<Value>>),
    Dict(Vec<(String, Rc<Value>)>),
    Array(NdArray),
}

impl Value {
    /// Kinds that take part in the memo table. Writer and reader must agree
    /// exactly, or back-reference indexes drift.
    pub(crate) fn memoizable(&self) -> bool {
        matches!(
            self,
            Value::String(_)
                | Value::Bytes(_)
                | Value::List(_)
                | Value::Dict(_)
                | Value::Array(_)
        )
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as array
    pub fn as_array(&self) -> Option<&NdArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[Rc<Value>]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Try to get as dict entries
    pub fn as_dict(&self) -> Option<&[(String, Rc<Value>)]> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Look up a dict entry by key
    pub fn get(&self, key: &str) -> Option<&Rc<Value>> {
        match self {
            Value::Dict(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

// Convenience From impls for Value
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<NdArray> for Value {
    fn from(v: NdArray) -> Self {
        Value::Array(v)
    }
}
