//! The expression node.
//!
//! A [`Symbol`] owns a payload value and, once applied, an immutable
//! parameter binding. Leaves have no binding at all; an application bound
//! to zero children is still an application. Cloning a symbol is cheap
//! (the representation sits behind an `Arc`), which is also what makes
//! shared subexpressions - DAGs - safe: nodes are never mutated after
//! construction.

use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use symbex_value::{
    index_out_of_bounds, no_parameters, not_callable, slice_not_supported, CallArgs, EvalError,
    EvalResult, FuncValue, Value,
};

use crate::args::Args;

/// A node in a deferred-computation tree.
///
/// Either a leaf (payload only) or an application (payload plus parameter
/// binding). Applying a symbol never mutates it; a brand-new node sharing
/// the same payload is produced instead.
#[derive(Clone)]
pub struct Symbol {
    repr: Arc<SymbolRepr>,
}

struct SymbolRepr {
    payload: Value,
    params: Option<Params>,
}

/// Parameter binding of an application node.
///
/// Positional and named bindings are mutually exclusive per node. Both
/// preserve declaration order.
#[derive(Clone, Debug)]
pub enum Params {
    /// Children bound by position.
    Positional(Vec<Symbol>),
    /// Children bound by name, in declaration order.
    Named(Vec<(String, Symbol)>),
}

impl Params {
    /// Number of bound children.
    pub fn len(&self) -> usize {
        match self {
            Params::Positional(children) => children.len(),
            Params::Named(pairs) => pairs.len(),
        }
    }

    /// Whether the binding holds no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Child at a position.
    ///
    /// Named bindings are indexed by treating their values as an ordered
    /// sequence; the names play no part in positional access.
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        match self {
            Params::Positional(children) => children.get(index),
            Params::Named(pairs) => pairs.get(index).map(|(_, child)| child),
        }
    }

    /// Children in declaration order, names stripped.
    pub fn iter(&self) -> Children<'_> {
        Children {
            inner: match self {
                Params::Positional(children) => ChildrenInner::Positional(children.iter()),
                Params::Named(pairs) => ChildrenInner::Named(pairs.iter()),
            },
        }
    }

    /// Argument names for a named binding, `None` for positional.
    pub fn names(&self) -> Option<impl Iterator<Item = &str>> {
        match self {
            Params::Positional(_) => None,
            Params::Named(pairs) => Some(pairs.iter().map(|(name, _)| name.as_str())),
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Symbol;
    type IntoIter = Children<'a>;

    fn into_iter(self) -> Children<'a> {
        self.iter()
    }
}

/// Iterator over a node's children in declaration order.
///
/// Restartable: each call to [`Symbol::iter`] produces a fresh traversal.
pub struct Children<'a> {
    inner: ChildrenInner<'a>,
}

enum ChildrenInner<'a> {
    Empty,
    Positional(std::slice::Iter<'a, Symbol>),
    Named(std::slice::Iter<'a, (String, Symbol)>),
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Symbol;

    fn next(&mut self) -> Option<&'a Symbol> {
        match &mut self.inner {
            ChildrenInner::Empty => None,
            ChildrenInner::Positional(iter) => iter.next(),
            ChildrenInner::Named(iter) => iter.next().map(|(_, child)| child),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ChildrenInner::Empty => (0, Some(0)),
            ChildrenInner::Positional(iter) => iter.size_hint(),
            ChildrenInner::Named(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Children<'_> {}

impl Symbol {
    /// Create a leaf from any value.
    ///
    /// ```
    /// use symbex::{Symbol, Value};
    ///
    /// let leaf = Symbol::new(42);
    /// assert_eq!(leaf.evaluate().unwrap(), Value::Int(42));
    /// ```
    pub fn new(payload: impl Into<Value>) -> Self {
        Symbol {
            repr: Arc::new(SymbolRepr {
                payload: payload.into(),
                params: None,
            }),
        }
    }

    /// Create a callable leaf from a raw `CallArgs` function.
    pub fn from_fn<F>(name: &'static str, func: F) -> Self
    where
        F: Fn(CallArgs) -> EvalResult + Send + Sync + 'static,
    {
        Symbol::new(Value::Func(FuncValue::new(name, func)))
    }

    fn with_params(payload: Value, params: Params) -> Self {
        Symbol {
            repr: Arc::new(SymbolRepr {
                payload,
                params: Some(params),
            }),
        }
    }

    /// The node's payload.
    pub fn payload(&self) -> &Value {
        &self.repr.payload
    }

    /// The node's parameter binding, `None` for a leaf.
    pub fn params(&self) -> Option<&Params> {
        self.repr.params.as_ref()
    }

    /// Whether this node is a leaf (no parameters were ever bound).
    ///
    /// Distinct from [`Symbol::is_empty`]: a zero-argument application is
    /// empty but not a leaf.
    pub fn is_leaf(&self) -> bool {
        self.repr.params.is_none()
    }

    /// Number of children; `0` for a leaf.
    pub fn len(&self) -> usize {
        self.repr.params.as_ref().map_or(0, Params::len)
    }

    /// Whether this node has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply this symbol's payload to a set of arguments, producing a new
    /// application node.
    ///
    /// Positional and named arguments must not be mixed; the error is
    /// raised here, before any node exists. The receiver is untouched.
    pub fn apply(&self, args: Args) -> Result<Symbol, EvalError> {
        Ok(Symbol::with_params(
            self.repr.payload.clone(),
            args.into_params()?,
        ))
    }

    /// Apply to positional children. Infallible convenience for the common
    /// case; zero children yields a zero-argument application node.
    pub fn call(&self, children: impl IntoIterator<Item = Symbol>) -> Symbol {
        Symbol::with_params(
            self.repr.payload.clone(),
            Params::Positional(children.into_iter().collect()),
        )
    }

    /// Apply to named children in declaration order.
    ///
    /// Duplicate names are the caller's responsibility here; [`Symbol::apply`]
    /// checks them.
    pub fn call_named<S>(&self, pairs: impl IntoIterator<Item = (S, Symbol)>) -> Symbol
    where
        S: Into<String>,
    {
        Symbol::with_params(
            self.repr.payload.clone(),
            Params::Named(
                pairs
                    .into_iter()
                    .map(|(name, child)| (name.into(), child))
                    .collect(),
            ),
        )
    }

    /// Child at a position.
    ///
    /// Named bindings are indexed as an ordered sequence of their values,
    /// not by name lookup. Fails on a leaf or an out-of-range index.
    pub fn get(&self, index: usize) -> Result<&Symbol, EvalError> {
        let params = self.repr.params.as_ref().ok_or_else(no_parameters)?;
        params
            .get(index)
            .ok_or_else(|| index_out_of_bounds(index, params.len()))
    }

    /// Child of a named binding looked up by its name.
    pub fn get_named(&self, name: &str) -> Option<&Symbol> {
        match self.repr.params.as_ref()? {
            Params::Positional(_) => None,
            Params::Named(pairs) => pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, child)| child),
        }
    }

    /// Contiguous range of children of a positional binding.
    ///
    /// Named bindings do not support range extraction; a leaf has nothing
    /// to slice.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<&[Symbol], EvalError> {
        let children = match self.repr.params.as_ref() {
            None => return Err(no_parameters()),
            Some(Params::Named(_)) => return Err(slice_not_supported()),
            Some(Params::Positional(children)) => children,
        };
        let len = children.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        if start > end || end > len {
            return Err(index_out_of_bounds(start.max(end), len));
        }
        Ok(&children[start..end])
    }

    /// Children in declaration order, names stripped. Empty for a leaf.
    pub fn iter(&self) -> Children<'_> {
        match self.repr.params.as_ref() {
            Some(params) => params.iter(),
            None => Children {
                inner: ChildrenInner::Empty,
            },
        }
    }

    /// Node identity: do both handles refer to the same node?
    ///
    /// The comparison operators on symbols build expression nodes instead
    /// of comparing, so this is the explicit mechanism for host-level
    /// identity checks (deduplication, map keys via a wrapper, ...).
    pub fn ptr_eq(a: &Symbol, b: &Symbol) -> bool {
        Arc::ptr_eq(&a.repr, &b.repr)
    }

    /// Evaluate the expression tree rooted at this node.
    ///
    /// Depth-first, post-order: a leaf yields its payload unchanged; an
    /// application evaluates every child in declaration order, then invokes
    /// the payload with the results using the node's own calling
    /// convention. Failures from payloads or descendants propagate
    /// unchanged. No memoization: a subexpression shared by several
    /// parents runs once per parent that forces it.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn evaluate(&self) -> EvalResult {
        let Some(params) = self.repr.params.as_ref() else {
            return Ok(self.repr.payload.clone());
        };

        let func = match &self.repr.payload {
            Value::Func(func) => func,
            other => return Err(not_callable(other.type_name())),
        };

        let args = match params {
            Params::Positional(children) => {
                let mut values = Vec::with_capacity(children.len());
                for child in children {
                    values.push(child.evaluate()?);
                }
                CallArgs::Positional(values)
            }
            Params::Named(pairs) => {
                let mut values = Vec::with_capacity(pairs.len());
                for (name, child) in pairs {
                    values.push((name.clone(), child.evaluate()?));
                }
                CallArgs::Named(values)
            }
        };

        func.invoke(args)
    }
}

impl<'a> IntoIterator for &'a Symbol {
    type Item = &'a Symbol;
    type IntoIter = Children<'a>;

    fn into_iter(self) -> Children<'a> {
        self.iter()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr.params.as_ref() {
            None => write!(f, "Symbol({:?})", self.repr.payload),
            Some(params) => write!(
                f,
                "Symbol({:?}, {} children)",
                self.repr.payload,
                params.len()
            ),
        }
    }
}
