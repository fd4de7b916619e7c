//! Symbex Value - runtime values and operator evaluation.
//!
//! This crate provides the dynamic value layer underneath the `symbex`
//! expression nodes:
//!
//! - `Value`: an immutable, cheaply-clonable runtime value
//! - `FuncValue` / `CallArgs`: type-erased callables and their calling
//!   convention (positional or named arguments)
//! - `EvalError`: the evaluation error type with `#[cold]` factory functions
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator
//!   dispatch over `Value` operands
//!
//! The operator evaluators implement the host's native semantics per operand
//! type: checked integer arithmetic, IEEE 754 float comparisons, string
//! concatenation, set algebra, and value-returning truthiness combinators.

pub mod errors;
mod operators;
mod value;

pub use errors::{
    // Application and traversal errors
    duplicate_argument, index_out_of_bounds, mixed_arguments, no_parameters, slice_not_supported,
    // Invocation errors
    arity_mismatch, not_callable,
    // Operator errors
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op_for,
    invalid_unary_op_for, modulo_by_zero, negative_exponent, shift_out_of_range,
    EvalError, EvalErrorKind, EvalResult,
};
pub use operators::{evaluate_binary, evaluate_unary, BinaryOp, UnaryOp};
pub use value::{CallArgs, FuncValue, Heap, Value};
