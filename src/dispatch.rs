//! The three dispatch entry points: `eval`, `partials`, `eval_and_partials`.
//!
//! Key contract: the evaluator runs strictly before the partial-derivative
//! routine, and the computed `f` is the value passed to the derivative
//! routine — several rules (`DIV`, `EXP`, `INV`, `TANH`) are expressed in
//! terms of `f` and this ordering is what makes aliased-storage calls safe.

use crate::op_code::OpCode;
use crate::table::HasOpTable;

/// Evaluate `op(x, y)`. For unary ops `y` is ignored by the evaluator but
/// must still be a well-formed `T`.
///
/// `PRINTME` additionally triggers `x.on_printme(y)` (see
/// [`crate::scalar::Scalar::on_printme`]) as a best-effort diagnostic side
/// channel; it is not part of the ordering contract below.
#[must_use]
pub fn eval<T: HasOpTable>(op: OpCode, x: T, y: T) -> T {
    let f = T::op_table().eval(op, x, y);
    if matches!(op, OpCode::Printme) {
        x.on_printme(y);
    }
    f
}

/// Compute `(d0, d1) = (∂f/∂x, ∂f/∂y)` given `x`, `y`, and the
/// already-computed `f`. `d1` is zero for unary ops.
///
/// Callers that don't already have `f` should use [`eval_and_partials`]
/// instead of calling [`eval`] then `partials` separately, to avoid
/// recomputing `f` and to get the aliasing guarantee described above.
#[must_use]
pub fn partials<T: HasOpTable>(op: OpCode, x: T, y: T, f: T) -> (T, T) {
    T::op_table().partials(op, x, y, f)
}

/// Compute `f` and `(d0, d1)` together, evaluating `f` first and passing it
/// into the partial-derivative rule.
///
/// Contract: input references and the output may alias safely — `f` is
/// always fully computed (into a temporary) before the derivative routine
/// reads it, so supplying the same storage for `x`/`y`/the result is sound.
#[must_use]
pub fn eval_and_partials<T: HasOpTable>(op: OpCode, x: T, y: T) -> (T, T, T) {
    let table = T::op_table();
    let f = table.eval(op, x, y);
    if matches!(op, OpCode::Printme) {
        x.on_printme(y);
    }
    let (d0, d1) = table.partials(op, x, y, f);
    (f, d0, d1)
}
