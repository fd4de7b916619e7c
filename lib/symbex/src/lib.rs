//! Symbex - deferred symbolic expressions.
//!
//! A [`Symbol`] is a node in a deferred-computation tree: either a leaf
//! value or the application of a callable payload to child nodes. Trees are
//! assembled without executing anything; [`Symbol::evaluate`] later walks
//! the tree depth-first and runs each node exactly once per evaluation.
//!
//! ```
//! use symbex::{catalog, Symbol};
//! use symbex::Value;
//!
//! // Explicit application of a catalog entry...
//! let sum = catalog::add().call([Symbol::new(1), Symbol::new(2)]);
//! assert_eq!(sum.evaluate().unwrap(), Value::Int(3));
//!
//! // ...or the same tree via operator sugar.
//! let sum = Symbol::new(1) + Symbol::new(2);
//! assert_eq!(sum.evaluate().unwrap(), Value::Int(3));
//! ```
//!
//! # Architecture
//!
//! - `Symbol`: the node type - payload plus an optional parameter binding
//! - `Args`: the application builder, enforcing that positional and named
//!   arguments are never mixed in one call
//! - `catalog`: pre-built leaf symbols wrapping the native operators
//! - operator-trait impls (`Add`, `BitAnd`, `Neg`, ...) building
//!   application nodes instead of computing eagerly
//!
//! Nodes are immutable after construction and cheap to clone; shared
//! subexpressions form a DAG and are re-evaluated once per parent that
//! forces them (no memoization). Cycle detection is deliberately absent: a
//! cyclic structure does not terminate.

mod args;
pub mod catalog;
mod sugar;
mod symbol;

pub use args::Args;
pub use symbol::{Children, Params, Symbol};

// Re-export the value layer for convenience
pub use symbex_value::{
    evaluate_binary, evaluate_unary, BinaryOp, CallArgs, EvalError, EvalErrorKind, EvalResult,
    FuncValue, UnaryOp, Value,
};
