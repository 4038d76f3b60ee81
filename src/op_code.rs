//! The closed catalogue of built-in scalar operations.
//!
//! `OpCode` is the single tag every other module in this crate dispatches
//! on: the descriptor table (`crate::descriptor`), the per-operand-type
//! dispatch tables (`crate::table`), and the printing grammar
//! (`crate::print`) are all dense arrays indexed by `OpCode as usize`.

/// One built-in scalar operation.
///
/// The variant order is part of the build contract: `OpCode as usize` is
/// used as a dense array index everywhere in this crate, so reordering
/// variants changes nothing observable as long as every table is rebuilt
/// from this same order, but the ordinals are not meant to be stable
/// across crate versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// `x + y`
    Add,
    /// `x - y`
    Sub,
    /// `x * y`
    Mul,
    /// `x / y`
    Div,
    /// `-x`
    Neg,
    /// `exp(x)`
    Exp,
    /// `log(x)` (natural logarithm)
    Log,
    /// `x^y`, derivative taken with respect to both operands
    Pow,
    /// `x^y` where `y` is treated as a constant exponent (`d/dy` is zero)
    ConstPow,
    /// `sqrt(x)`
    Sqrt,
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `tan(x)`
    Tan,
    /// `asin(x)`
    Asin,
    /// `acos(x)`
    Acos,
    /// `atan(x)`
    Atan,
    /// `[x >= 0]`, the Heaviside step function
    Step,
    /// `floor(x)`
    Floor,
    /// `ceil(x)`
    Ceil,
    /// `[x == y]`
    Equality,
    /// `erf(x)`, the Gauss error function
    Erf,
    /// `min(x, y)`
    Fmin,
    /// `max(x, y)`
    Fmax,
    /// `1 / x`
    Inv,
    /// `sinh(x)`
    Sinh,
    /// `cosh(x)`
    Cosh,
    /// `tanh(x)`
    Tanh,
    /// Identity in `x`, diagnostic side effect on `y` (see [`crate::scalar::Scalar::on_printme`]).
    Printme,
}

/// Number of built-in operations. Equal to `OpCode`'s cardinality, used to
/// size every dense table keyed by `OpCode as usize`.
pub const NUM_BUILT_IN_OPS: usize = 28;

/// All variants, in ordinal order. Used once, at table-construction time,
/// to drive the exhaustiveness check (`crate::table::OpTable::build`).
pub(crate) const ALL: [OpCode; NUM_BUILT_IN_OPS] = [
    OpCode::Add,
    OpCode::Sub,
    OpCode::Mul,
    OpCode::Div,
    OpCode::Neg,
    OpCode::Exp,
    OpCode::Log,
    OpCode::Pow,
    OpCode::ConstPow,
    OpCode::Sqrt,
    OpCode::Sin,
    OpCode::Cos,
    OpCode::Tan,
    OpCode::Asin,
    OpCode::Acos,
    OpCode::Atan,
    OpCode::Step,
    OpCode::Floor,
    OpCode::Ceil,
    OpCode::Equality,
    OpCode::Erf,
    OpCode::Fmin,
    OpCode::Fmax,
    OpCode::Inv,
    OpCode::Sinh,
    OpCode::Cosh,
    OpCode::Tanh,
    OpCode::Printme,
];

impl OpCode {
    /// Dense array index for this op. Stable for the lifetime of a single
    /// build, never persisted across versions.
    #[must_use]
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Human-readable name, used in panic messages and diagnostics. Not
    /// part of the printing grammar (see `crate::print`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OpCode::Add => "ADD",
            OpCode::Sub => "SUB",
            OpCode::Mul => "MUL",
            OpCode::Div => "DIV",
            OpCode::Neg => "NEG",
            OpCode::Exp => "EXP",
            OpCode::Log => "LOG",
            OpCode::Pow => "POW",
            OpCode::ConstPow => "CONSTPOW",
            OpCode::Sqrt => "SQRT",
            OpCode::Sin => "SIN",
            OpCode::Cos => "COS",
            OpCode::Tan => "TAN",
            OpCode::Asin => "ASIN",
            OpCode::Acos => "ACOS",
            OpCode::Atan => "ATAN",
            OpCode::Step => "STEP",
            OpCode::Floor => "FLOOR",
            OpCode::Ceil => "CEIL",
            OpCode::Equality => "EQUALITY",
            OpCode::Erf => "ERF",
            OpCode::Fmin => "FMIN",
            OpCode::Fmax => "FMAX",
            OpCode::Inv => "INV",
            OpCode::Sinh => "SINH",
            OpCode::Cosh => "COSH",
            OpCode::Tanh => "TANH",
            OpCode::Printme => "PRINTME",
        }
    }
}
