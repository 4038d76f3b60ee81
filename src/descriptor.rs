//! Static descriptors for the built-in operations: arity, commutativity,
//! zero-absorption flags, and print grammar.
//!
//! These are compile-time constants; the table is a `const` array built by
//! a single `match` over `OpCode`, closed-sum-type dispatch rather than
//! per-variant template specialization.

use crate::op_code::{NUM_BUILT_IN_OPS, OpCode};

/// Number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Unary operation; the second operand is conventionally ignored.
    One,
    /// Binary operation; both operands participate.
    Two,
}

impl Arity {
    /// Numeric arity, 1 or 2.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        match self {
            Arity::One => 1,
            Arity::Two => 2,
        }
    }
}

/// The three zero-absorption flags: whether the operation's
/// output is identically zero when both operands are zero, only the first
/// is zero, or only the second is zero.
///
/// These are a contract consumed by (out-of-scope) graph simplification and
/// sparsity inference: whenever a flag is `true`, `eval` on the matching
/// operand pattern must return an exact `T::zero()` (enforced by
/// `crate::tests::zero_absorption`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroAbsorption {
    /// `f(0, 0) == 0` exactly.
    pub f00_is_zero: bool,
    /// `f(0, y) == 0` exactly for every finite `y`.
    pub f0x_is_zero: bool,
    /// `f(x, 0) == 0` exactly for every finite `x`.
    pub fx0_is_zero: bool,
}

/// The textual rendering grammar for one operation: `prefix x separator y
/// postfix` for binary ops, `prefix x postfix` for unary ops (separator is
/// unused and empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintGrammar {
    /// Text emitted before the first operand.
    pub prefix: &'static str,
    /// Text emitted between operands; empty for unary ops.
    pub separator: &'static str,
    /// Text emitted after the last operand.
    pub postfix: &'static str,
}

/// The static record describing one `OpCode`: everything about it that does
/// not depend on an operand type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpDescriptor {
    /// Number of operands.
    pub arity: Arity,
    /// Whether `eval(op, x, y) == eval(op, y, x)` holds for all finite `x, y`.
    ///
    /// `EQUALITY` is recorded as non-commutative here even though equality
    /// is mathematically symmetric; this is a deliberate, preserved quirk
    /// rather than a bug this crate corrects.
    pub commutative: bool,
    /// Zero-absorption flags.
    pub zero: ZeroAbsorption,
    /// Print grammar.
    pub print: PrintGrammar,
}

const fn descriptor_for(op: OpCode) -> OpDescriptor {
    macro_rules! desc {
        ($arity:expr, $commutative:expr, ($f00:expr, $f0x:expr, $fx0:expr), ($prefix:expr, $sep:expr, $postfix:expr)) => {
            OpDescriptor {
                arity: $arity,
                commutative: $commutative,
                zero: ZeroAbsorption {
                    f00_is_zero: $f00,
                    f0x_is_zero: $f0x,
                    fx0_is_zero: $fx0,
                },
                print: PrintGrammar {
                    prefix: $prefix,
                    separator: $sep,
                    postfix: $postfix,
                },
            }
        };
    }

    match op {
        OpCode::Add => desc!(Arity::Two, true, (true, false, false), ("(", "+", ")")),
        OpCode::Sub => desc!(Arity::Two, false, (true, false, false), ("(", "-", ")")),
        OpCode::Mul => desc!(Arity::Two, true, (true, true, true), ("(", "*", ")")),
        OpCode::Div => desc!(Arity::Two, false, (false, true, false), ("(", "/", ")")),
        OpCode::Neg => desc!(Arity::One, true, (true, false, false), ("(-", "", ")")),
        OpCode::Exp => desc!(Arity::One, true, (false, false, false), ("exp(", "", ")")),
        OpCode::Log => desc!(Arity::One, true, (false, false, false), ("log(", "", ")")),
        OpCode::Pow => desc!(Arity::Two, false, (false, false, false), ("pow(", ",", ")")),
        OpCode::ConstPow => desc!(Arity::Two, false, (false, false, false), ("pow(", ",", ")")),
        OpCode::Sqrt => desc!(Arity::One, true, (true, false, false), ("sqrt(", "", ")")),
        OpCode::Sin => desc!(Arity::One, true, (true, false, false), ("sin(", "", ")")),
        OpCode::Cos => desc!(Arity::One, true, (false, false, false), ("cos(", "", ")")),
        OpCode::Tan => desc!(Arity::One, true, (true, false, false), ("tan(", "", ")")),
        OpCode::Asin => desc!(Arity::One, true, (true, false, false), ("asin(", "", ")")),
        OpCode::Acos => desc!(Arity::One, true, (false, false, false), ("acos(", "", ")")),
        OpCode::Atan => desc!(Arity::One, true, (true, false, false), ("atan(", "", ")")),
        OpCode::Step => desc!(Arity::One, true, (false, false, false), ("(", "", ">=0)")),
        OpCode::Floor => desc!(Arity::One, true, (true, false, false), ("floor(", "", ")")),
        OpCode::Ceil => desc!(Arity::One, true, (true, false, false), ("ceil(", "", ")")),
        OpCode::Equality => desc!(Arity::Two, false, (false, false, false), ("(", "==", ")")),
        OpCode::Erf => desc!(Arity::One, true, (true, false, false), ("erf(", "", ")")),
        OpCode::Fmin => desc!(Arity::Two, true, (true, false, false), ("fmin(", ",", ")")),
        OpCode::Fmax => desc!(Arity::Two, true, (true, false, false), ("fmax(", ",", ")")),
        OpCode::Inv => desc!(Arity::One, true, (false, false, false), ("(1/", "", ")")),
        OpCode::Sinh => desc!(Arity::One, true, (true, false, false), ("sinh(", "", ")")),
        OpCode::Cosh => desc!(Arity::One, true, (false, false, false), ("cosh(", "", ")")),
        OpCode::Tanh => desc!(Arity::One, true, (true, false, false), ("tanh(", "", ")")),
        OpCode::Printme => desc!(Arity::Two, false, (false, false, false), ("printme(", ",", ")")),
    }
}

const fn build_table() -> [OpDescriptor; NUM_BUILT_IN_OPS] {
    let mut table = [descriptor_for(OpCode::Add); NUM_BUILT_IN_OPS];
    let mut i = 0;
    while i < NUM_BUILT_IN_OPS {
        table[i] = descriptor_for(crate::op_code::ALL[i]);
        i += 1;
    }
    table
}

/// All descriptors, indexed by `OpCode as usize`. Built at compile time.
pub(crate) static DESCRIPTORS: [OpDescriptor; NUM_BUILT_IN_OPS] = build_table();

/// Look up the static descriptor for an op. Constant-time, never fails
/// (the table is exhaustive over `OpCode` by construction).
#[must_use]
#[inline]
pub const fn descriptor(op: OpCode) -> &'static OpDescriptor {
    &DESCRIPTORS[op.ordinal()]
}

/// Arity of an operation: 1 or 2.
#[must_use]
#[inline]
pub const fn arity(op: OpCode) -> Arity {
    descriptor(op).arity
}

/// Whether `op` is mathematically commutative (see caveat on `EQUALITY` in
/// [`OpDescriptor::commutative`]).
#[must_use]
#[inline]
pub const fn is_commutative(op: OpCode) -> bool {
    descriptor(op).commutative
}

/// Whether `eval(op, 0, 0)` is guaranteed to be exactly zero.
#[must_use]
#[inline]
pub const fn f00_is_zero(op: OpCode) -> bool {
    descriptor(op).zero.f00_is_zero
}

/// Whether `eval(op, 0, y)` is guaranteed to be exactly zero for all `y`.
#[must_use]
#[inline]
pub const fn f0x_is_zero(op: OpCode) -> bool {
    descriptor(op).zero.f0x_is_zero
}

/// Whether `eval(op, x, 0)` is guaranteed to be exactly zero for all `x`.
#[must_use]
#[inline]
pub const fn fx0_is_zero(op: OpCode) -> bool {
    descriptor(op).zero.fx0_is_zero
}

#[cfg(test)]
mod tests {
    use super::{arity, descriptor, f00_is_zero, f0x_is_zero, fx0_is_zero, is_commutative};
    use crate::descriptor::Arity;
    use crate::op_code::{ALL, OpCode};

    #[test]
    fn every_op_has_a_descriptor() {
        for op in ALL {
            let d = descriptor(op);
            assert_eq!(d.arity.as_usize(), arity(op).as_usize());
        }
    }

    #[test]
    fn unary_ops_have_empty_separator() {
        for op in ALL {
            if matches!(arity(op), Arity::One) {
                assert_eq!(
                    descriptor(op).print.separator,
                    "",
                    "{} is unary but has a non-empty separator",
                    op.name()
                );
            }
        }
    }

    #[test]
    fn binary_ops_have_nonempty_separator() {
        for op in ALL {
            if matches!(arity(op), Arity::Two) {
                assert!(
                    !descriptor(op).print.separator.is_empty(),
                    "{} is binary but has an empty separator",
                    op.name()
                );
            }
        }
    }

    #[test]
    fn mul_has_full_zero_absorption() {
        assert!(f00_is_zero(OpCode::Mul));
        assert!(f0x_is_zero(OpCode::Mul));
        assert!(fx0_is_zero(OpCode::Mul));
    }

    #[test]
    fn equality_is_recorded_non_commutative() {
        // Preserved verbatim, not "corrected" to match mathematical symmetry.
        assert!(!is_commutative(OpCode::Equality));
    }

    #[test]
    fn commutative_flags_match_the_expected_set() {
        // Every unary op is trivially commutative; ADD/MUL/FMIN/FMAX are the
        // only non-trivial binary commutative ops. SUB/DIV/POW/CONSTPOW,
        // EQUALITY, and PRINTME are the non-commutative binary ops.
        let expected_non_commutative = [
            OpCode::Sub,
            OpCode::Div,
            OpCode::Pow,
            OpCode::ConstPow,
            OpCode::Equality,
            OpCode::Printme,
        ];
        for op in ALL {
            let expected = !expected_non_commutative.contains(&op);
            assert_eq!(
                is_commutative(op),
                expected,
                "{} commutativity mismatch",
                op.name()
            );
        }
    }
}
