//! Runtime values for symbex expressions.
//!
//! # Arc Enforcement Architecture
//!
//! All heap allocations go through factory methods on `Value`. The
//! `Heap<T>` wrapper has a private constructor, so external code cannot
//! create heap values directly:
//!
//! ```text
//! let s = Value::string("hello");             // OK
//! let xs = Value::list(vec![]);               // OK
//! let s = Value::Str(Heap::new(...));         // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Thread Safety
//!
//! Heap variants use `Arc` internally and every value is immutable after
//! construction, so values can be shared freely across threads.

mod func;
mod heap;

use std::fmt;

use rustc_hash::FxHashMap;

pub use func::{CallArgs, FuncValue};
pub use heap::Heap;

use crate::errors::EvalResult;

/// Runtime value of a symbex expression.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Character value.
    Char(char),
    /// Void (unit) value.
    Void,

    // Heap Types (use Heap<T> for enforced Arc usage)
    /// String value.
    Str(Heap<String>),
    /// List of values.
    List(Heap<Vec<Value>>),
    /// Set of values: insertion-ordered, structurally deduplicated.
    Set(Heap<Vec<Value>>),
    /// Map from string keys to values.
    Map(Heap<FxHashMap<String, Value>>),

    // Callables
    /// Type-erased function value.
    Func(FuncValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a set value.
    ///
    /// Duplicates (by structural equality) are dropped; the first occurrence
    /// of each element wins, preserving insertion order.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for item in items {
            if !unique.iter().any(|existing| existing.equals(&item)) {
                unique.push(item);
            }
        }
        Value::Set(Heap::new(unique))
    }

    /// Create a map value with string keys.
    #[inline]
    pub fn map(entries: FxHashMap<String, Value>) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Create a function value from a raw `CallArgs` function.
    #[inline]
    pub fn func<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(CallArgs) -> EvalResult + Send + Sync + 'static,
    {
        Value::Func(FuncValue::new(name, f))
    }
}

// Value Methods

impl Value {
    /// Check if this value is truthy.
    ///
    /// Zero, empty collections, the empty string, and `Void` are falsy;
    /// everything else (including every function) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) | Value::Set(items) => !items.is_empty(),
            Value::Map(entries) => !entries.is_empty(),
            Value::Void => false,
            Value::Char(_) | Value::Func(_) => true,
        }
    }

    /// Try to read an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to read a float, widening integers.
    #[expect(clippy::cast_precision_loss, reason = "Int-to-float widening is lossy above 2^53")]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to read a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to read a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to read a list slice.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to read the callable payload.
    pub fn as_func(&self) -> Option<&FuncValue> {
        match self {
            Value::Func(f) => Some(f),
            _ => None,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Void => "void",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Func(_) => "func",
        }
    }

    /// Check structural equality with another value.
    ///
    /// Sets compare order-insensitively; functions compare by identity.
    /// Floats compare strictly (IEEE 754, so `NaN != NaN`), matching the
    /// `Eq` operator at every nesting depth. Values of different types are
    /// never equal.
    #[expect(clippy::float_cmp, reason = "Strict IEEE 754 equality, same as the Eq operator")]
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Void, Value::Void) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Value::Set(a), Value::Set(b)) => {
                a.len() == b.len() && a.iter().all(|x| b.iter().any(|y| x.equals(y)))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|other| v.equals(other)))
            }
            (Value::Func(a), Value::Func(b)) => FuncValue::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Check identity with another value.
    ///
    /// Heap variants compare by allocation pointer, scalars by value. This
    /// is the explicit identity operation backing the `is` operator; it is
    /// deliberately separate from structural equality.
    pub fn is_identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Void, Value::Void) => true,
            (Value::Str(a), Value::Str(b)) => Heap::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) | (Value::Set(a), Value::Set(b)) => Heap::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Heap::ptr_eq(a, b),
            (Value::Func(a), Value::Func(b)) => FuncValue::ptr_eq(a, b),
            _ => false,
        }
    }
}

// Conversions

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Void
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl From<FuncValue> for Value {
    fn from(f: FuncValue) -> Self {
        Value::Func(f)
    }
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Void => write!(f, "Void"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Set(items) => write!(f, "Set({:?})", &**items),
            Value::Map(entries) => write!(f, "Map({:?})", &**entries),
            Value::Func(func) => write!(f, "Func({})", func.name()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Void => write!(f, "void"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Set(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
            Value::Map(entries) => {
                // Sorted for stable output; FxHashMap iteration order varies
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{key}\": {}", entries[key])?;
                }
                write!(f, "}}")
            }
            Value::Func(func) => write!(f, "<func {}>", func.name()),
        }
    }
}

#[cfg(test)]
mod tests;
