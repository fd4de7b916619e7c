//! Operator implementations over runtime values.
//!
//! Provides direct enum-based dispatch for binary and unary operations. The
//! type set is fixed (not user-extensible), so pattern matching is preferred
//! over trait objects for better exhaustiveness checking.
//!
//! Semantics follow the host's native operations per operand type: checked
//! integer arithmetic, IEEE 754 float comparisons, string concatenation and
//! lexicographic ordering, set algebra on the set variant. The `And`/`Or`
//! combinators are value-returning short-circuits over truthiness, and `Is`
//! is identity rather than structural equality.

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op_for,
    invalid_unary_op_for, modulo_by_zero, negative_exponent, shift_out_of_range, EvalError,
    EvalResult,
};
use crate::value::{Heap, Value};

/// Binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Matmul,
    Div,
    FloorDiv,
    Mod,
    Pow,

    // Bitwise
    Shl,
    Shr,
    BitAnd,
    BitOr,
    BitXor,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical and relational
    And,
    Or,
    In,
    Is,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Matmul => "@",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "and",
            Self::Or => "or",
            Self::In => "in",
            Self::Is => "is",
        }
    }
}

/// Unary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// Numeric negation.
    Neg,
    /// Numeric identity.
    Pos,
    /// Logical not over truthiness.
    Not,
    /// Bitwise invert (integer) or boolean negation.
    BitNot,
}

impl UnaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::Not => "not",
            Self::BitNot => "~",
        }
    }
}

// Helper functions for repetitive checked arithmetic patterns

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division with zero guard.
#[inline]
fn checked_div<F>(is_zero: bool, op: F, op_name: &'static str) -> EvalResult
where
    F: FnOnce() -> Option<i64>,
{
    if is_zero {
        Err(division_by_zero())
    } else {
        op().map(Value::Int).ok_or_else(|| integer_overflow(op_name))
    }
}

/// Checked shift with range guard.
#[inline]
fn checked_shift(a: i64, b: i64, shift: fn(i64, u32) -> Option<i64>) -> EvalResult {
    u32::try_from(b)
        .ok()
        .and_then(|amount| shift(a, amount))
        .map(Value::Int)
        .ok_or_else(|| shift_out_of_range(b))
}

// Direct Dispatch Functions

/// Evaluate a binary operation using direct pattern matching.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    // These four are defined across every pair of operand types.
    match op {
        BinaryOp::And => return Ok(if left.is_truthy() { right } else { left }),
        BinaryOp::Or => return Ok(if left.is_truthy() { left } else { right }),
        BinaryOp::In => return eval_membership(&left, &right),
        BinaryOp::Is => return Ok(Value::Bool(left.is_identical(&right))),
        _ => {}
    }

    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(*a, *b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Char(a), Value::Char(b)) => eval_char_binary(*a, *b, op),
        (Value::List(a), Value::List(b)) => eval_list_binary(a, b, op),
        (Value::Set(a), Value::Set(b)) => eval_set_binary(a, b, op),
        (Value::Map(_), Value::Map(_)) => eval_map_binary(&left, &right, op),
        (Value::Func(a), Value::Func(b)) => match op {
            BinaryOp::Eq => Ok(Value::Bool(crate::value::FuncValue::ptr_eq(a, b))),
            BinaryOp::NotEq => Ok(Value::Bool(!crate::value::FuncValue::ptr_eq(a, b))),
            _ => Err(invalid_binary_op_for("func", op)),
        },
        (Value::Void, Value::Void) => match op {
            BinaryOp::Eq => Ok(Value::Bool(true)),
            BinaryOp::NotEq => Ok(Value::Bool(false)),
            _ => Err(invalid_binary_op_for("void", op)),
        },
        _ => Err(binary_type_mismatch(left.type_name(), right.type_name())),
    }
}

/// Evaluate a unary operation using direct pattern matching.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (&value, op) {
        // Logical not applies to any value via truthiness
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),

        // Numeric negation
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Float(f), UnaryOp::Neg) => Ok(Value::Float(-f)),

        // Numeric identity
        (Value::Int(_) | Value::Float(_), UnaryOp::Pos) => Ok(value),

        // Bitwise not
        (Value::Int(n), UnaryOp::BitNot) => Ok(Value::Int(!n)),
        (Value::Bool(b), UnaryOp::BitNot) => Ok(Value::Bool(!b)),

        _ => Err(invalid_unary_op_for(value.type_name(), op)),
    }
}

// Type-Specific Evaluation Functions

/// Binary operations on integers. All arithmetic is checked.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(b == 0, || a.checked_div(b), "division"),
        BinaryOp::FloorDiv => checked_div(b == 0, || checked_floor_div(a, b), "floor division"),
        BinaryOp::Mod => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(a.checked_rem(b), "remainder")
            }
        }
        BinaryOp::Pow => {
            if b < 0 {
                Err(negative_exponent())
            } else {
                let exponent =
                    u32::try_from(b).map_err(|_| integer_overflow("power"))?;
                checked_arith(a.checked_pow(exponent), "power")
            }
        }
        BinaryOp::Shl => checked_shift(a, b, i64::checked_shl),
        BinaryOp::Shr => checked_shift(a, b, i64::checked_shr),
        BinaryOp::BitAnd => Ok(Value::Int(a & b)),
        BinaryOp::BitOr => Ok(Value::Int(a | b)),
        BinaryOp::BitXor => Ok(Value::Int(a ^ b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        _ => Err(invalid_binary_op_for("int", op)),
    }
}

/// Floor division rounding toward negative infinity.
fn checked_floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Binary operations on floats.
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    use std::cmp::Ordering;
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div => Ok(Value::Float(a / b)),
        BinaryOp::FloorDiv => Ok(Value::Float((a / b).floor())),
        BinaryOp::Mod => Ok(Value::Float(a % b)),
        BinaryOp::Pow => Ok(Value::Float(a.powf(b))),
        // Use partial_cmp for IEEE 754 compliant comparisons
        // (NaN != NaN, -0.0 == 0.0)
        BinaryOp::Eq => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Equal))),
        BinaryOp::NotEq => Ok(Value::Bool(a.partial_cmp(&b) != Some(Ordering::Equal))),
        BinaryOp::Lt => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Less))),
        BinaryOp::LtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Less | Ordering::Equal)
        ))),
        BinaryOp::Gt => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Greater))),
        BinaryOp::GtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Greater | Ordering::Equal)
        ))),
        _ => Err(invalid_binary_op_for("float", op)),
    }
}

/// Binary operations on booleans.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::BitAnd => Ok(Value::Bool(a & b)),
        BinaryOp::BitOr => Ok(Value::Bool(a | b)),
        BinaryOp::BitXor => Ok(Value::Bool(a ^ b)),
        _ => Err(invalid_binary_op_for("bool", op)),
    }
}

/// Binary operations on strings.
fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::string(format!("{a}{b}"))),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        // Lexicographic comparison
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        _ => Err(invalid_binary_op_for("str", op)),
    }
}

/// Binary operations on characters.
fn eval_char_binary(a: char, b: char, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        _ => Err(invalid_binary_op_for("char", op)),
    }
}

/// Binary operations on lists.
fn eval_list_binary(a: &Heap<Vec<Value>>, b: &Heap<Vec<Value>>, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let mut result = (**a).clone();
            result.extend_from_slice(b);
            Ok(Value::list(result))
        }
        BinaryOp::Matmul => eval_matmul(a, b),
        BinaryOp::Eq => Ok(Value::Bool(
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y)),
        )),
        BinaryOp::NotEq => Ok(Value::Bool(
            a.len() != b.len() || a.iter().zip(b.iter()).any(|(x, y)| !x.equals(y)),
        )),
        _ => Err(invalid_binary_op_for("list", op)),
    }
}

/// Binary operations on sets: algebra plus subset comparisons.
fn eval_set_binary(a: &Heap<Vec<Value>>, b: &Heap<Vec<Value>>, op: BinaryOp) -> EvalResult {
    let subset = |xs: &[Value], ys: &[Value]| xs.iter().all(|x| contains(ys, x));
    match op {
        BinaryOp::BitAnd => Ok(Value::set(
            a.iter().filter(|x| contains(b, x)).cloned(),
        )),
        BinaryOp::BitOr => Ok(Value::set(a.iter().chain(b.iter()).cloned())),
        BinaryOp::BitXor => Ok(Value::set(
            a.iter()
                .filter(|x| !contains(b, x))
                .chain(b.iter().filter(|y| !contains(a, y)))
                .cloned(),
        )),
        BinaryOp::Sub => Ok(Value::set(
            a.iter().filter(|x| !contains(b, x)).cloned(),
        )),
        BinaryOp::Eq => Ok(Value::Bool(a.len() == b.len() && subset(a, b))),
        BinaryOp::NotEq => Ok(Value::Bool(a.len() != b.len() || !subset(a, b))),
        // Subset and superset comparisons
        BinaryOp::Lt => Ok(Value::Bool(a.len() < b.len() && subset(a, b))),
        BinaryOp::LtEq => Ok(Value::Bool(subset(a, b))),
        BinaryOp::Gt => Ok(Value::Bool(a.len() > b.len() && subset(b, a))),
        BinaryOp::GtEq => Ok(Value::Bool(subset(b, a))),
        _ => Err(invalid_binary_op_for("set", op)),
    }
}

/// Binary operations on maps.
fn eval_map_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left.equals(right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.equals(right))),
        // Merge; entries from the right operand win
        BinaryOp::BitOr => match (left, right) {
            (Value::Map(a), Value::Map(b)) => {
                let mut merged = (**a).clone();
                for (key, value) in b.iter() {
                    merged.insert(key.clone(), value.clone());
                }
                Ok(Value::map(merged))
            }
            _ => Err(invalid_binary_op_for("map", op)),
        },
        _ => Err(invalid_binary_op_for("map", op)),
    }
}

/// Structural membership in a slice of values.
fn contains(items: &[Value], needle: &Value) -> bool {
    items.iter().any(|item| item.equals(needle))
}

/// Membership test: `item in container`.
///
/// Lists and sets check element membership, strings check substring (or
/// character) containment, maps check key presence.
fn eval_membership(item: &Value, container: &Value) -> EvalResult {
    match container {
        Value::List(items) | Value::Set(items) => Ok(Value::Bool(contains(items, item))),
        Value::Str(haystack) => match item {
            Value::Str(needle) => Ok(Value::Bool(haystack.contains(&***needle))),
            Value::Char(c) => Ok(Value::Bool(haystack.contains(*c))),
            other => Err(binary_type_mismatch(other.type_name(), "str")),
        },
        Value::Map(entries) => match item {
            Value::Str(key) => Ok(Value::Bool(entries.contains_key(&***key))),
            other => Err(binary_type_mismatch(other.type_name(), "map")),
        },
        other => Err(invalid_binary_op_for(other.type_name(), BinaryOp::In)),
    }
}

// Matrix multiplication

/// Matrix product of two rectangular list-of-list matrices.
///
/// Integer matrices produce an integer result with checked arithmetic; any
/// float element promotes the whole product to floats.
fn eval_matmul(a: &[Value], b: &[Value]) -> EvalResult {
    let lhs = rows_of(a)?;
    let rhs = rows_of(b)?;
    let (m, k) = shape_of(&lhs)?;
    let (k2, n) = shape_of(&rhs)?;
    if k != k2 {
        return Err(EvalError::new(format!(
            "matrix dimension mismatch: {m}x{k} @ {k2}x{n}"
        )));
    }

    if let (Some(xs), Some(ys)) = (int_matrix(&lhs), int_matrix(&rhs)) {
        return int_matmul(&xs, &ys, n, k);
    }
    match (float_matrix(&lhs), float_matrix(&rhs)) {
        (Some(xs), Some(ys)) => Ok(float_matmul(&xs, &ys, n, k)),
        _ => Err(EvalError::new("matrix elements must be numeric")),
    }
}

/// View a list value as a slice of row lists.
fn rows_of<'a>(rows: &'a [Value]) -> Result<Vec<&'a [Value]>, EvalError> {
    rows.iter()
        .map(|row| {
            row.as_list()
                .ok_or_else(|| EvalError::new("matrix operand must be a list of row lists"))
        })
        .collect()
}

/// Shape of a rectangular matrix as (rows, columns).
fn shape_of(rows: &[&[Value]]) -> Result<(usize, usize), EvalError> {
    let Some(first) = rows.first() else {
        return Err(EvalError::new("matrix operand must not be empty"));
    };
    let width = first.len();
    if width == 0 || rows.iter().any(|row| row.len() != width) {
        return Err(EvalError::new("matrix rows must be non-empty and equal length"));
    }
    Ok((rows.len(), width))
}

fn int_matrix(rows: &[&[Value]]) -> Option<Vec<Vec<i64>>> {
    rows.iter()
        .map(|row| row.iter().map(Value::as_int).collect())
        .collect()
}

fn float_matrix(rows: &[&[Value]]) -> Option<Vec<Vec<f64>>> {
    rows.iter()
        .map(|row| row.iter().map(Value::as_float).collect())
        .collect()
}

fn int_matmul(xs: &[Vec<i64>], ys: &[Vec<i64>], n: usize, k: usize) -> EvalResult {
    let mut out = Vec::with_capacity(xs.len());
    for row in xs {
        let mut out_row = Vec::with_capacity(n);
        for j in 0..n {
            let mut acc: i64 = 0;
            for t in 0..k {
                let product = row[t]
                    .checked_mul(ys[t][j])
                    .ok_or_else(|| integer_overflow("matrix multiplication"))?;
                acc = acc
                    .checked_add(product)
                    .ok_or_else(|| integer_overflow("matrix multiplication"))?;
            }
            out_row.push(Value::Int(acc));
        }
        out.push(Value::list(out_row));
    }
    Ok(Value::list(out))
}

fn float_matmul(xs: &[Vec<f64>], ys: &[Vec<f64>], n: usize, k: usize) -> Value {
    let mut out = Vec::with_capacity(xs.len());
    for row in xs {
        let mut out_row = Vec::with_capacity(n);
        for j in 0..n {
            let mut acc = 0.0;
            for t in 0..k {
                acc += row[t] * ys[t][j];
            }
            out_row.push(Value::Float(acc));
        }
        out.push(Value::list(out_row));
    }
    Value::list(out)
}
