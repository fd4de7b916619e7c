//! Pre-built leaf symbols wrapping the native operators.
//!
//! Each entry is an ordinary callable leaf: appliable to operands,
//! evaluable, nestable. The guarantee is native semantics over the
//! evaluated operand types, e.g.
//! `catalog::add().call([a, b]).evaluate()` equals
//! `evaluate_binary(a.evaluate()?, b.evaluate()?, BinaryOp::Add)`.
//!
//! The operator-trait sugar on [`Symbol`] routes through these same
//! entries, so `x + y` and `catalog::add().call([x, y])` build equivalent
//! trees.

use symbex_value::{evaluate_binary, evaluate_unary, BinaryOp, FuncValue, UnaryOp};

use crate::symbol::Symbol;

fn binary(name: &'static str, op: BinaryOp) -> Symbol {
    Symbol::new(FuncValue::binary(name, move |left, right| {
        evaluate_binary(left, right, op)
    }))
}

fn unary(name: &'static str, op: UnaryOp) -> Symbol {
    Symbol::new(FuncValue::unary(name, move |value| {
        evaluate_unary(value, op)
    }))
}

/// Addition (`+`).
pub fn add() -> Symbol {
    binary("add", BinaryOp::Add)
}

/// Subtraction (`-`).
pub fn sub() -> Symbol {
    binary("sub", BinaryOp::Sub)
}

/// Multiplication (`*`).
pub fn mul() -> Symbol {
    binary("mul", BinaryOp::Mul)
}

/// Matrix multiplication (`@`).
pub fn matmul() -> Symbol {
    binary("matmul", BinaryOp::Matmul)
}

/// Division (`/`).
pub fn div() -> Symbol {
    binary("div", BinaryOp::Div)
}

/// Floor division (`//`).
pub fn floordiv() -> Symbol {
    binary("floordiv", BinaryOp::FloorDiv)
}

/// Remainder (`%`).
pub fn rem() -> Symbol {
    binary("rem", BinaryOp::Mod)
}

/// Power (`**`).
pub fn pow() -> Symbol {
    binary("pow", BinaryOp::Pow)
}

/// Left shift (`<<`).
pub fn shl() -> Symbol {
    binary("shl", BinaryOp::Shl)
}

/// Right shift (`>>`).
pub fn shr() -> Symbol {
    binary("shr", BinaryOp::Shr)
}

/// Bitwise and / set intersection (`&`).
pub fn bitand() -> Symbol {
    binary("bitand", BinaryOp::BitAnd)
}

/// Bitwise xor / set symmetric difference (`^`).
pub fn bitxor() -> Symbol {
    binary("bitxor", BinaryOp::BitXor)
}

/// Bitwise or / set union (`|`).
pub fn bitor() -> Symbol {
    binary("bitor", BinaryOp::BitOr)
}

/// Equality (`==`).
pub fn eq() -> Symbol {
    binary("eq", BinaryOp::Eq)
}

/// Inequality (`!=`).
pub fn ne() -> Symbol {
    binary("ne", BinaryOp::NotEq)
}

/// Less-than (`<`).
pub fn lt() -> Symbol {
    binary("lt", BinaryOp::Lt)
}

/// Less-or-equal (`<=`).
pub fn le() -> Symbol {
    binary("le", BinaryOp::LtEq)
}

/// Greater-than (`>`).
pub fn gt() -> Symbol {
    binary("gt", BinaryOp::Gt)
}

/// Greater-or-equal (`>=`).
pub fn ge() -> Symbol {
    binary("ge", BinaryOp::GtEq)
}

/// Logical conjunction; returns the deciding operand, not a coerced bool.
pub fn and() -> Symbol {
    binary("and", BinaryOp::And)
}

/// Logical disjunction; returns the deciding operand, not a coerced bool.
pub fn or() -> Symbol {
    binary("or", BinaryOp::Or)
}

/// Membership test (element in collection, substring, map key).
pub fn is_in() -> Symbol {
    binary("is_in", BinaryOp::In)
}

/// Identity test (pointer identity for heap values).
pub fn is() -> Symbol {
    binary("is", BinaryOp::Is)
}

/// Numeric negation (unary `-`).
pub fn neg() -> Symbol {
    unary("neg", UnaryOp::Neg)
}

/// Numeric identity (unary `+`).
pub fn pos() -> Symbol {
    unary("pos", UnaryOp::Pos)
}

/// Bitwise invert (`~`).
pub fn invert() -> Symbol {
    unary("invert", UnaryOp::BitNot)
}

/// Logical not over truthiness.
pub fn not() -> Symbol {
    unary("not", UnaryOp::Not)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::Value;
    use pretty_assertions::assert_eq;

    fn leaf(n: i64) -> Symbol {
        Symbol::new(n)
    }

    fn set(items: impl IntoIterator<Item = i64>) -> Symbol {
        Symbol::new(Value::set(items.into_iter().map(Value::int)))
    }

    #[test]
    fn add_matches_native_addition() {
        let result = add().call([leaf(2), leaf(3)]).evaluate().unwrap();
        assert_eq!(result, Value::int(5));
    }

    #[test]
    fn floordiv_matches_native_floor_division() {
        let result = floordiv().call([leaf(5), leaf(2)]).evaluate().unwrap();
        assert_eq!(result, Value::int(2));
    }

    #[test]
    fn bitand_intersects_sets() {
        let result = bitand().call([set([1, 2]), set([2, 3])]).evaluate().unwrap();
        assert_eq!(result, Value::set([Value::int(2)]));
    }

    #[test]
    fn and_returns_the_deciding_operand() {
        let result = and()
            .call([Symbol::new(false), Symbol::new(true)])
            .evaluate()
            .unwrap();
        assert_eq!(result, Value::Bool(false));
    }

    #[test]
    fn comparison_entries_build_working_nodes() {
        let result = lt().call([leaf(2), leaf(3)]).evaluate().unwrap();
        assert_eq!(result, Value::Bool(true));
        let result = ge().call([leaf(2), leaf(3)]).evaluate().unwrap();
        assert_eq!(result, Value::Bool(false));
    }

    #[test]
    fn membership_entry() {
        let result = is_in().call([leaf(2), set([1, 2, 3])]).evaluate().unwrap();
        assert_eq!(result, Value::Bool(true));
    }

    #[test]
    fn identity_entry() {
        let shared = Symbol::new("abc");
        let same = is()
            .call([shared.clone(), shared.clone()])
            .evaluate()
            .unwrap();
        assert_eq!(same, Value::Bool(true));

        let other = is()
            .call([Symbol::new("abc"), Symbol::new("abc")])
            .evaluate()
            .unwrap();
        assert_eq!(other, Value::Bool(false));
    }

    #[test]
    fn unary_entries() {
        assert_eq!(neg().call([leaf(2)]).evaluate().unwrap(), Value::int(-2));
        assert_eq!(pos().call([leaf(2)]).evaluate().unwrap(), Value::int(2));
        assert_eq!(invert().call([leaf(2)]).evaluate().unwrap(), Value::int(-3));
        assert_eq!(
            not().call([Symbol::new(true)]).evaluate().unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn entries_nest_like_any_other_node() {
        // add(mul(2, 3), 4) == 10
        let product = mul().call([leaf(2), leaf(3)]);
        let total = add().call([product, leaf(4)]).evaluate().unwrap();
        assert_eq!(total, Value::int(10));
    }

    #[test]
    fn entries_accept_named_binding() {
        let result = add()
            .call_named([("x", leaf(2)), ("y", leaf(3))])
            .evaluate()
            .unwrap();
        assert_eq!(result, Value::int(5));
    }
}
