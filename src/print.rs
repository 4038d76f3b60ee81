//! Pretty-printing grammar: `prefix x separator y postfix`.
//!
//! Purely textual and human-oriented: not a round-trippable format, parsing
//! is not defined here. Writes through `fmt::Write`/`String` rather than
//! building an intermediate structure, narrowed to a fixed three-part
//! grammar per op.

use crate::descriptor::{Arity, descriptor};
use crate::op_code::OpCode;
use std::fmt::{self, Write};

/// Emit `prefix x_repr postfix` for unary ops, or
/// `prefix x_repr separator y_repr postfix` for binary ops.
///
/// # Errors
/// Propagates any formatting error from `out`.
pub fn print(
    op: OpCode,
    out: &mut impl Write,
    x_repr: &str,
    y_repr: &str,
) -> fmt::Result {
    let d = descriptor(op);
    out.write_str(d.print.prefix)?;
    out.write_str(x_repr)?;
    if matches!(d.arity, Arity::Two) {
        out.write_str(d.print.separator)?;
        out.write_str(y_repr)?;
    }
    out.write_str(d.print.postfix)
}

/// `prefix` text for `op`.
///
/// # Errors
/// Propagates any formatting error from `out`.
pub fn print_prefix(op: OpCode, out: &mut impl Write) -> fmt::Result {
    out.write_str(descriptor(op).print.prefix)
}

/// `separator` text for `op`; a no-op for unary ops (empty separator).
///
/// # Errors
/// Propagates any formatting error from `out`.
pub fn print_separator(op: OpCode, out: &mut impl Write) -> fmt::Result {
    out.write_str(descriptor(op).print.separator)
}

/// `postfix` text for `op`.
///
/// # Errors
/// Propagates any formatting error from `out`.
pub fn print_postfix(op: OpCode, out: &mut impl Write) -> fmt::Result {
    out.write_str(descriptor(op).print.postfix)
}

/// Convenience wrapper around [`print`] that allocates and returns a
/// `String` rather than requiring a caller-supplied `Write` sink.
#[must_use]
pub fn print_to_string(op: OpCode, x_repr: &str, y_repr: &str) -> String {
    let mut s = String::new();
    // A `String`'s `Write` impl never fails.
    print(op, &mut s, x_repr, y_repr).expect("writing to a String cannot fail");
    s
}

#[cfg(test)]
mod tests {
    use super::print_to_string;
    use crate::op_code::OpCode;

    #[test]
    fn add_renders_infix() {
        assert_eq!(print_to_string(OpCode::Add, "a", "b"), "(a+b)");
    }

    #[test]
    fn sqrt_renders_functional_and_ignores_y() {
        assert_eq!(print_to_string(OpCode::Sqrt, "a", "ignored"), "sqrt(a)");
    }

    #[test]
    fn inv_renders_as_reciprocal() {
        assert_eq!(print_to_string(OpCode::Inv, "a", "ignored"), "(1/a)");
    }

    #[test]
    fn pow_renders_functional_with_comma() {
        assert_eq!(print_to_string(OpCode::Pow, "x", "y"), "pow(x,y)");
    }
}
