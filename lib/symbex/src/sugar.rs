//! Operator-overload sugar for building expression nodes.
//!
//! Writing a natural infix or prefix expression over symbols builds a tree
//! instead of computing a value: `x + y` is `catalog::add().call([x, y])`.
//! Operators Rust cannot overload (`**`, `//`, `@`, comparisons, the
//! truthiness combinators, membership, identity) are exposed as fluent
//! methods; the comparison family carries a `sym_` prefix because these
//! build nodes rather than returning `bool` like `PartialEq`/`PartialOrd`.
//!
//! `!x` follows Rust's native `Not`: bitwise invert on integers, negation
//! on booleans. The truthiness-based logical not is [`Symbol::sym_not`].

use std::ops;

use crate::catalog;
use crate::symbol::Symbol;

macro_rules! binary_sugar {
    ($trait:ident, $method:ident, $entry:ident) => {
        impl ops::$trait for Symbol {
            type Output = Symbol;

            fn $method(self, rhs: Symbol) -> Symbol {
                catalog::$entry().call([self, rhs])
            }
        }

        impl ops::$trait for &Symbol {
            type Output = Symbol;

            fn $method(self, rhs: &Symbol) -> Symbol {
                catalog::$entry().call([self.clone(), rhs.clone()])
            }
        }
    };
}

macro_rules! unary_sugar {
    ($trait:ident, $method:ident, $entry:ident) => {
        impl ops::$trait for Symbol {
            type Output = Symbol;

            fn $method(self) -> Symbol {
                catalog::$entry().call([self])
            }
        }

        impl ops::$trait for &Symbol {
            type Output = Symbol;

            fn $method(self) -> Symbol {
                catalog::$entry().call([self.clone()])
            }
        }
    };
}

binary_sugar!(Add, add, add);
binary_sugar!(Sub, sub, sub);
binary_sugar!(Mul, mul, mul);
binary_sugar!(Div, div, div);
binary_sugar!(Rem, rem, rem);
binary_sugar!(BitAnd, bitand, bitand);
binary_sugar!(BitOr, bitor, bitor);
binary_sugar!(BitXor, bitxor, bitxor);
binary_sugar!(Shl, shl, shl);
binary_sugar!(Shr, shr, shr);

unary_sugar!(Neg, neg, neg);
unary_sugar!(Not, not, invert);

/// Fluent constructors for the operators Rust cannot overload.
impl Symbol {
    /// Power (`**`).
    pub fn pow(&self, other: &Symbol) -> Symbol {
        catalog::pow().call([self.clone(), other.clone()])
    }

    /// Floor division (`//`).
    pub fn floordiv(&self, other: &Symbol) -> Symbol {
        catalog::floordiv().call([self.clone(), other.clone()])
    }

    /// Matrix multiplication (`@`).
    pub fn matmul(&self, other: &Symbol) -> Symbol {
        catalog::matmul().call([self.clone(), other.clone()])
    }

    /// Equality node (`==`). Builds an expression; never compares nodes.
    pub fn sym_eq(&self, other: &Symbol) -> Symbol {
        catalog::eq().call([self.clone(), other.clone()])
    }

    /// Inequality node (`!=`).
    pub fn sym_ne(&self, other: &Symbol) -> Symbol {
        catalog::ne().call([self.clone(), other.clone()])
    }

    /// Less-than node (`<`).
    pub fn sym_lt(&self, other: &Symbol) -> Symbol {
        catalog::lt().call([self.clone(), other.clone()])
    }

    /// Less-or-equal node (`<=`).
    pub fn sym_le(&self, other: &Symbol) -> Symbol {
        catalog::le().call([self.clone(), other.clone()])
    }

    /// Greater-than node (`>`).
    pub fn sym_gt(&self, other: &Symbol) -> Symbol {
        catalog::gt().call([self.clone(), other.clone()])
    }

    /// Greater-or-equal node (`>=`).
    pub fn sym_ge(&self, other: &Symbol) -> Symbol {
        catalog::ge().call([self.clone(), other.clone()])
    }

    /// Logical conjunction node; evaluates to the deciding operand.
    pub fn sym_and(&self, other: &Symbol) -> Symbol {
        catalog::and().call([self.clone(), other.clone()])
    }

    /// Logical disjunction node; evaluates to the deciding operand.
    pub fn sym_or(&self, other: &Symbol) -> Symbol {
        catalog::or().call([self.clone(), other.clone()])
    }

    /// Logical-not node over truthiness.
    pub fn sym_not(&self) -> Symbol {
        catalog::not().call([self.clone()])
    }

    /// Membership node: `self in container`.
    pub fn is_in(&self, container: &Symbol) -> Symbol {
        catalog::is_in().call([self.clone(), container.clone()])
    }

    /// Identity node: `self is other`.
    pub fn sym_is(&self, other: &Symbol) -> Symbol {
        catalog::is().call([self.clone(), other.clone()])
    }

    /// Numeric-identity node (unary `+`).
    pub fn pos(&self) -> Symbol {
        catalog::pos().call([self.clone()])
    }

    /// Bitwise-invert node (`~`). Same tree as `!self`.
    pub fn invert(&self) -> Symbol {
        catalog::invert().call([self.clone()])
    }
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

    #[test]
    fn infix_addition_builds_a_tree() {
        let sum = leaf(2) + leaf(3);
        assert!(!sum.is_leaf());
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.evaluate().unwrap(), Value::int(5));
    }

    #[test]
    fn sugar_matches_catalog_semantics() {
        let via_sugar = (leaf(2) + leaf(3)).evaluate().unwrap();
        let via_catalog = catalog::add()
            .call([leaf(2), leaf(3)])
            .evaluate()
            .unwrap();
        assert_eq!(via_sugar, via_catalog);
    }

    #[test]
    fn nested_infix_expressions() {
        // (2 + 3) * 4 - 6 == 14
        let expr = (leaf(2) + leaf(3)) * leaf(4) - leaf(6);
        assert_eq!(expr.evaluate().unwrap(), Value::int(14));
    }

    #[test]
    fn reference_operands_build_without_consuming() {
        let x = leaf(2);
        let y = leaf(3);
        let sum = &x + &y;
        let product = &x * &y;
        assert_eq!(sum.evaluate().unwrap(), Value::int(5));
        assert_eq!(product.evaluate().unwrap(), Value::int(6));
    }

    #[test]
    fn comparison_methods_build_nodes_not_bools() {
        let expr = leaf(2).sym_lt(&leaf(3));
        assert_eq!(expr.len(), 2);
        assert_eq!(expr.evaluate().unwrap(), Value::Bool(true));

        let expr = leaf(2).sym_eq(&leaf(3));
        assert_eq!(expr.evaluate().unwrap(), Value::Bool(false));
    }

    #[test]
    fn set_operators() {
        let a = Symbol::new(Value::set([Value::int(1), Value::int(2)]));
        let b = Symbol::new(Value::set([Value::int(2), Value::int(3)]));
        assert_eq!(
            (&a & &b).evaluate().unwrap(),
            Value::set([Value::int(2)])
        );
        assert_eq!(
            (&a ^ &b).evaluate().unwrap(),
            Value::set([Value::int(1), Value::int(3)])
        );
    }

    #[test]
    fn shifts_and_negation() {
        assert_eq!((leaf(4) << leaf(2)).evaluate().unwrap(), Value::int(16));
        assert_eq!((leaf(16) >> leaf(2)).evaluate().unwrap(), Value::int(4));
        assert_eq!((-leaf(2)).evaluate().unwrap(), Value::int(-2));
    }

    #[test]
    fn not_is_bitwise_invert() {
        assert_eq!((!leaf(2)).evaluate().unwrap(), Value::int(-3));
        assert_eq!(
            (!Symbol::new(true)).evaluate().unwrap(),
            Value::Bool(false)
        );
        // Truthiness-based logical not is a separate method
        assert_eq!(
            leaf(0).sym_not().evaluate().unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn fluent_methods() {
        assert_eq!(
            leaf(5).pow(&leaf(2)).evaluate().unwrap(),
            Value::int(25)
        );
        assert_eq!(
            leaf(5).floordiv(&leaf(2)).evaluate().unwrap(),
            Value::int(2)
        );
        assert_eq!(
            leaf(5).sym_and(&leaf(0)).evaluate().unwrap(),
            Value::int(0)
        );
        assert_eq!(
            leaf(0).sym_or(&leaf(7)).evaluate().unwrap(),
            Value::int(7)
        );
    }
}
