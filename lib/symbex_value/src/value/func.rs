//! Type-erased callables and their calling convention.
//!
//! A `FuncValue` is the payload of a callable leaf: an opaque function that
//! receives already-evaluated arguments at invocation time. The arity of a
//! `FuncValue` is checked only when it runs, never when an expression is
//! built.

use std::fmt;
use std::sync::Arc;

use crate::errors::{arity_mismatch, EvalResult};
use crate::value::Value;

/// Evaluated arguments, carrying the calling convention used to bind them.
///
/// Declaration order is preserved in both forms. A callable that does not
/// care about names can read a `Named` argument list in declaration order
/// via [`CallArgs::into_values`].
#[derive(Clone, Debug)]
pub enum CallArgs {
    /// Arguments bound by position.
    Positional(Vec<Value>),
    /// Arguments bound by name, in declaration order.
    Named(Vec<(String, Value)>),
}

impl CallArgs {
    /// Number of arguments.
    pub fn len(&self) -> usize {
        match self {
            CallArgs::Positional(values) => values.len(),
            CallArgs::Named(pairs) => pairs.len(),
        }
    }

    /// Whether no arguments were bound.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strip names and return the argument values in declaration order.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            CallArgs::Positional(values) => values,
            CallArgs::Named(pairs) => pairs.into_iter().map(|(_, value)| value).collect(),
        }
    }

    /// Look up an argument by name. Always `None` for positional bindings.
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        match self {
            CallArgs::Positional(_) => None,
            CallArgs::Named(pairs) => pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value),
        }
    }
}

type ErasedFn = dyn Fn(CallArgs) -> EvalResult + Send + Sync;

/// A type-erased callable value.
///
/// Wraps an `Arc<dyn Fn>` plus a diagnostic name. Cloning is cheap; two
/// clones share the same underlying function (see [`FuncValue::ptr_eq`]).
#[derive(Clone)]
pub struct FuncValue {
    name: &'static str,
    func: Arc<ErasedFn>,
}

impl FuncValue {
    /// Wrap a function taking the raw argument list.
    ///
    /// The function decides how to interpret the calling convention; the
    /// arity helpers below cover the common fixed-arity cases.
    pub fn new<F>(name: &'static str, func: F) -> Self
    where
        F: Fn(CallArgs) -> EvalResult + Send + Sync + 'static,
    {
        FuncValue {
            name,
            func: Arc::new(func),
        }
    }

    /// Wrap a zero-argument function. Rejects any supplied arguments.
    pub fn nullary<F>(name: &'static str, func: F) -> Self
    where
        F: Fn() -> EvalResult + Send + Sync + 'static,
    {
        FuncValue::new(name, move |args: CallArgs| {
            if args.is_empty() {
                func()
            } else {
                Err(arity_mismatch(name, 0, args.len()))
            }
        })
    }

    /// Wrap a one-argument function.
    ///
    /// Accepts either calling convention; a named argument is read in
    /// declaration order regardless of its name.
    pub fn unary<F>(name: &'static str, func: F) -> Self
    where
        F: Fn(Value) -> EvalResult + Send + Sync + 'static,
    {
        FuncValue::new(name, move |args: CallArgs| {
            let len = args.len();
            let mut values = args.into_values();
            match values.pop() {
                Some(value) if len == 1 => func(value),
                _ => Err(arity_mismatch(name, 1, len)),
            }
        })
    }

    /// Wrap a two-argument function.
    ///
    /// Accepts either calling convention; named arguments are read in
    /// declaration order regardless of their names.
    pub fn binary<F>(name: &'static str, func: F) -> Self
    where
        F: Fn(Value, Value) -> EvalResult + Send + Sync + 'static,
    {
        FuncValue::new(name, move |args: CallArgs| {
            let len = args.len();
            let mut values = args.into_values().into_iter();
            match (values.next(), values.next()) {
                (Some(left), Some(right)) if len == 2 => func(left, right),
                _ => Err(arity_mismatch(name, 2, len)),
            }
        })
    }

    /// Diagnostic name of the callable.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the callable with evaluated arguments.
    #[inline]
    pub fn invoke(&self, args: CallArgs) -> EvalResult {
        (self.func)(args)
    }

    /// Pointer identity: do both values share the same underlying function?
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.func, &b.func)
    }
}

impl fmt::Debug for FuncValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FuncValue({})", self.name)
    }
}
