//! Error types for expression evaluation.
//!
//! `EvalErrorKind` provides typed error categories so callers can match on
//! the condition instead of parsing strings. Factory functions (e.g.
//! [`division_by_zero`]) are the public construction API; they populate
//! both `kind` and `message`.

use std::fmt;

use crate::operators::{BinaryOp, UnaryOp};
use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Application
    /// Positional and named arguments mixed in one application.
    MixedArguments,
    /// The same argument name bound twice in one application.
    DuplicateArgument { name: String },

    // Traversal
    /// Index or slice against a node with no bound parameters.
    NoParameters,
    /// Child index outside the bound parameter range.
    IndexOutOfBounds { index: usize, len: usize },
    /// Slice extraction against a named parameter binding.
    SliceNotSupported,

    // Invocation
    /// Application node whose payload is not callable.
    NotCallable { type_name: String },
    /// Callable invoked with the wrong number of arguments.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow { operation: String },
    NegativeExponent,
    ShiftOutOfRange { amount: i64 },

    // Type/Operator
    InvalidBinaryOp { type_name: String, op: BinaryOp },
    BinaryTypeMismatch { left: String, right: String },
    InvalidUnaryOp { type_name: String, op: UnaryOp },

    /// Catch-all for errors without a structured kind.
    Custom { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MixedArguments => {
                write!(f, "cannot mix positional and named arguments")
            }
            Self::DuplicateArgument { name } => {
                write!(f, "argument `{name}` bound more than once")
            }
            Self::NoParameters => write!(f, "node has no bound parameters"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for {len} parameters")
            }
            Self::SliceNotSupported => {
                write!(f, "slice extraction is not supported for named parameters")
            }
            Self::NotCallable { type_name } => {
                write!(f, "value of type {type_name} is not callable")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => write!(f, "{name} expects {expected} arguments, got {got}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::NegativeExponent => write!(f, "negative exponent in integer power"),
            Self::ShiftOutOfRange { amount } => {
                write!(f, "shift amount {amount} out of range (0-63)")
            }
            Self::InvalidBinaryOp { type_name, op } => {
                write!(f, "invalid binary {} on {type_name}", op.as_symbol())
            }
            Self::BinaryTypeMismatch { left, right } => {
                write!(f, "binary operation on mismatched types {left} and {right}")
            }
            Self::InvalidUnaryOp { type_name, op } => {
                write!(f, "invalid unary {} on {type_name}", op.as_symbol())
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message.
    ///
    /// For factory-created errors, this equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer the specific factory functions when a
    /// structured kind is available.
    pub fn new(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: msg.clone(),
            },
            message: msg,
        }
    }

    /// Create an error from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

// Application Errors

/// Positional and named arguments supplied in the same application.
#[cold]
pub fn mixed_arguments() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MixedArguments)
}

/// Argument name bound twice in one application.
#[cold]
pub fn duplicate_argument(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateArgument {
        name: name.to_string(),
    })
}

// Traversal Errors

/// Index or slice against a node with no bound parameters.
#[cold]
pub fn no_parameters() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoParameters)
}

/// Child index outside the bound parameter range.
#[cold]
pub fn index_out_of_bounds(index: usize, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

/// Slice extraction against a named parameter binding.
#[cold]
pub fn slice_not_supported() -> EvalError {
    EvalError::from_kind(EvalErrorKind::SliceNotSupported)
}

// Invocation Errors

/// Application node whose payload is not callable.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

/// Callable invoked with the wrong number of arguments.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

// Binary Operation Errors

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo by zero error.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

/// Negative exponent in integer power.
#[cold]
pub fn negative_exponent() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeExponent)
}

/// Shift amount outside the 0-63 range.
#[cold]
pub fn shift_out_of_range(amount: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ShiftOutOfRange { amount })
}

/// Invalid operator for a specific type.
#[cold]
pub fn invalid_binary_op_for(type_name: &str, op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp {
        type_name: type_name.to_string(),
        op,
    })
}

/// Type mismatch in binary operation.
#[cold]
pub fn binary_type_mismatch(left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        left: left.to_string(),
        right: right.to_string(),
    })
}

/// Invalid unary operator for a specific type.
#[cold]
pub fn invalid_unary_op_for(type_name: &str, op: UnaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp {
        type_name: type_name.to_string(),
        op,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_messages_match_kind_display() {
        let err = mixed_arguments();
        assert_eq!(err.message, "cannot mix positional and named arguments");
        assert_eq!(err.message, err.kind.to_string());

        let err = index_out_of_bounds(3, 2);
        assert_eq!(err.message, "index 3 out of bounds for 2 parameters");
    }

    #[test]
    fn custom_errors_carry_the_message() {
        let err = EvalError::new("matrix dimension mismatch");
        assert_eq!(
            err.kind,
            EvalErrorKind::Custom {
                message: "matrix dimension mismatch".to_string()
            }
        );
        assert_eq!(err.to_string(), "matrix dimension mismatch");
    }
}
