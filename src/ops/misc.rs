//! `PRINTME`: the identity in `x`, with a diagnostic side channel on `y`.
//!
//! The diagnostic emission of `y` is not part of the pure evaluator (these
//! functions are what the dispatch table stores and must stay referentially
//! transparent for aliasing to work) — it is layered on top by
//! `crate::dispatch::eval` via [`crate::scalar::Scalar::on_printme`], a
//! best-effort side channel, not part of the core evaluation contract.

use crate::scalar::Scalar;

/// `x`, ignoring `y` for the purposes of the pure numeric value.
pub fn eval_printme<T: Scalar>(x: T, _y: T) -> T {
    x
}

/// `(1, 0)`: the identity-in-`x` derivative. Deliberately not routed
/// through `TANH`'s rule, which would give the wrong answer here.
pub fn partials_printme<T: Scalar>(_x: T, _y: T, _f: T) -> (T, T) {
    (T::one(), T::zero())
}
