//! `OpTable<T>`: the per-operand-type dispatch table.
//!
//! A `OnceLock`-backed static, populated once by a private build function
//! and published for the remainder of the process. The key space here is
//! the closed, dense `0..NUM_BUILT_IN_OPS` range rather than an open set of
//! interned symbol IDs, so a fixed-size array stands in for a hash map
//! while keeping the same one-shot-publish shape.

use crate::error::{MissingEntry, TableBuildError};
use crate::op_code::{ALL, NUM_BUILT_IN_OPS, OpCode};
use crate::ops;
use crate::scalar::Scalar;

/// `(x, y) -> f`
pub(crate) type EvalFn<T> = fn(T, T) -> T;
/// `(x, y, f) -> (d0, d1)`
pub(crate) type PartialsFn<T> = fn(T, T, T) -> (T, T);

fn eval_fn<T: Scalar>(op: OpCode) -> EvalFn<T> {
    match op {
        OpCode::Add => ops::arithmetic::eval_add,
        OpCode::Sub => ops::arithmetic::eval_sub,
        OpCode::Mul => ops::arithmetic::eval_mul,
        OpCode::Div => ops::arithmetic::eval_div,
        OpCode::Neg => ops::arithmetic::eval_neg,
        OpCode::Inv => ops::arithmetic::eval_inv,
        OpCode::Exp => ops::exponential::eval_exp,
        OpCode::Log => ops::exponential::eval_log,
        OpCode::Pow => ops::exponential::eval_pow,
        OpCode::ConstPow => ops::exponential::eval_constpow,
        OpCode::Sqrt => ops::exponential::eval_sqrt,
        OpCode::Sin => ops::trig::eval_sin,
        OpCode::Cos => ops::trig::eval_cos,
        OpCode::Tan => ops::trig::eval_tan,
        OpCode::Asin => ops::trig::eval_asin,
        OpCode::Acos => ops::trig::eval_acos,
        OpCode::Atan => ops::trig::eval_atan,
        OpCode::Sinh => ops::hyperbolic::eval_sinh,
        OpCode::Cosh => ops::hyperbolic::eval_cosh,
        OpCode::Tanh => ops::hyperbolic::eval_tanh,
        OpCode::Step => ops::comparison::eval_step,
        OpCode::Floor => ops::comparison::eval_floor,
        OpCode::Ceil => ops::comparison::eval_ceil,
        OpCode::Equality => ops::comparison::eval_equality,
        OpCode::Fmin => ops::comparison::eval_fmin,
        OpCode::Fmax => ops::comparison::eval_fmax,
        OpCode::Erf => erf_eval,
        OpCode::Printme => ops::misc::eval_printme,
    }
}

// `Scalar::erf` is a trait method, not a free function, so it cannot be
// named directly as an `EvalFn`; this adapter gives it the right shape.
fn erf_eval<T: Scalar>(x: T, _y: T) -> T {
    x.erf()
}

fn partials_fn<T: Scalar>(op: OpCode) -> PartialsFn<T> {
    match op {
        OpCode::Add => ops::arithmetic::partials_add,
        OpCode::Sub => ops::arithmetic::partials_sub,
        OpCode::Mul => ops::arithmetic::partials_mul,
        OpCode::Div => ops::arithmetic::partials_div,
        OpCode::Neg => ops::arithmetic::partials_neg,
        OpCode::Inv => ops::arithmetic::partials_inv,
        OpCode::Exp => ops::exponential::partials_exp,
        OpCode::Log => ops::exponential::partials_log,
        OpCode::Pow => ops::exponential::partials_pow,
        OpCode::ConstPow => ops::exponential::partials_constpow,
        OpCode::Sqrt => ops::exponential::partials_sqrt,
        OpCode::Sin => ops::trig::partials_sin,
        OpCode::Cos => ops::trig::partials_cos,
        OpCode::Tan => ops::trig::partials_tan,
        OpCode::Asin => ops::trig::partials_asin,
        OpCode::Acos => ops::trig::partials_acos,
        OpCode::Atan => ops::trig::partials_atan,
        OpCode::Sinh => ops::hyperbolic::partials_sinh,
        OpCode::Cosh => ops::hyperbolic::partials_cosh,
        OpCode::Tanh => ops::hyperbolic::partials_tanh,
        OpCode::Step => ops::comparison::partials_step,
        OpCode::Floor => ops::comparison::partials_floor,
        OpCode::Ceil => ops::comparison::partials_ceil,
        OpCode::Equality => ops::comparison::partials_equality,
        OpCode::Fmin => ops::comparison::partials_fmin,
        OpCode::Fmax => ops::comparison::partials_fmax,
        OpCode::Erf => erf_partials,
        OpCode::Printme => ops::misc::partials_printme,
    }
}

fn erf_partials<T: Scalar>(x: T, _y: T, _f: T) -> (T, T) {
    // d(erf(x))/dx = (2/sqrt(pi)) * exp(-x^2)
    let two_over_sqrt_pi = T::from_f64(2.0 / std::f64::consts::PI.sqrt());
    (two_over_sqrt_pi * (-(x * x)).exp(), T::zero())
}

/// Find the first `OpCode` whose `present` flag is `false`, paired with
/// which kind of entry is missing. Used to drive [`TableBuildError`];
/// exercised directly in tests against a synthetic, deliberately-gapped
/// flag array, since the production tables built by `eval_fn`/`partials_fn`
/// are exhaustive matches the compiler itself verifies cover every variant.
pub(crate) fn first_missing(
    present: &[bool; NUM_BUILT_IN_OPS],
    kind: MissingEntry,
) -> Option<TableBuildError> {
    ALL.into_iter()
        .find(|op| !present[op.ordinal()])
        .map(|op| TableBuildError { op, kind })
}

/// The per-operand-type dispatch table: one evaluator and one
/// partial-derivative rule per `OpCode`, built once and read thereafter.
pub struct OpTable<T> {
    eval: [EvalFn<T>; NUM_BUILT_IN_OPS],
    partials: [PartialsFn<T>; NUM_BUILT_IN_OPS],
}

impl<T: Scalar> OpTable<T> {
    /// Build the table, checking exhaustiveness explicitly rather than
    /// relying solely on the compiler-verified `match` in `eval_fn`/
    /// `partials_fn`: every ordinal must have a populated entry before the
    /// table is published.
    ///
    /// # Errors
    /// Returns [`TableBuildError`] if an entry is missing. In this crate
    /// that can only happen if `eval_fn`/`partials_fn`'s match arms and
    /// `OpCode::ALL` fall out of sync with each other.
    pub fn try_build() -> Result<Self, TableBuildError> {
        let mut eval = [eval_fn::<T>(OpCode::Add); NUM_BUILT_IN_OPS];
        let mut partials = [partials_fn::<T>(OpCode::Add); NUM_BUILT_IN_OPS];
        let mut eval_present = [false; NUM_BUILT_IN_OPS];
        let mut partials_present = [false; NUM_BUILT_IN_OPS];

        for op in ALL {
            let i = op.ordinal();
            eval[i] = eval_fn::<T>(op);
            partials[i] = partials_fn::<T>(op);
            eval_present[i] = true;
            partials_present[i] = true;
        }

        if let Some(err) = first_missing(&eval_present, MissingEntry::Evaluator) {
            return Err(err);
        }
        if let Some(err) = first_missing(&partials_present, MissingEntry::Partials) {
            return Err(err);
        }

        Ok(Self { eval, partials })
    }

    /// Build the table, panicking on a construction error.
    ///
    /// A missing table entry is a fatal, non-recoverable programming error
    /// reported once at construction — this is the path every public
    /// dispatch entry point in `crate::dispatch` uses.
    ///
    /// # Panics
    /// Panics if [`Self::try_build`] returns an error.
    #[must_use]
    pub fn build() -> Self {
        match Self::try_build() {
            Ok(table) => table,
            Err(err) => panic!("{err}"),
        }
    }

    #[inline]
    pub(crate) fn eval(&self, op: OpCode, x: T, y: T) -> T {
        (self.eval[op.ordinal()])(x, y)
    }

    #[inline]
    pub(crate) fn partials(&self, op: OpCode, x: T, y: T, f: T) -> (T, T) {
        (self.partials[op.ordinal()])(x, y, f)
    }
}

/// A supported operand type, whose dispatch table is built once per
/// process and cached behind a `OnceLock`.
///
/// Initialisation must happen once and be published to other threads
/// before use. Implemented per supported type, via a trait each concrete
/// operand type implements, rather than an unconstrained generic static —
/// Rust doesn't allow a generic function's static to depend on its own
/// type parameter.
pub trait HasOpTable: Scalar + Sized + 'static {
    /// The process-wide table for this operand type, built on first use.
    fn op_table() -> &'static OpTable<Self>;
}

macro_rules! impl_has_op_table {
    ($ty:ty) => {
        impl HasOpTable for $ty {
            fn op_table() -> &'static OpTable<Self> {
                static TABLE: std::sync::OnceLock<OpTable<$ty>> = std::sync::OnceLock::new();
                TABLE.get_or_init(OpTable::build)
            }
        }
    };
}

impl_has_op_table!(f64);
impl_has_op_table!(f32);
impl_has_op_table!(crate::dual::Dual<f64>);
impl_has_op_table!(crate::dual::Dual<f32>);

#[cfg(test)]
mod tests {
    use super::{HasOpTable, OpTable, first_missing};
    use crate::error::MissingEntry;
    use crate::op_code::NUM_BUILT_IN_OPS;

    #[test]
    fn f64_table_builds_without_error() {
        assert!(OpTable::<f64>::try_build().is_ok());
    }

    #[test]
    fn op_table_is_cached_across_calls() {
        let a: *const _ = f64::op_table();
        let b: *const _ = f64::op_table();
        assert_eq!(a, b, "op_table() should return the same published instance");
    }

    #[test]
    fn first_missing_detects_a_synthetic_gap() {
        let mut present = [true; NUM_BUILT_IN_OPS];
        present[5] = false;
        let err = first_missing(&present, MissingEntry::Evaluator);
        assert!(err.is_some());
        assert_eq!(err.unwrap().op.ordinal(), 5);
    }

    #[test]
    fn first_missing_is_none_when_all_present() {
        let present = [true; NUM_BUILT_IN_OPS];
        assert!(first_missing(&present, MissingEntry::Evaluator).is_none());
    }
}
