//! `STEP`, `FLOOR`, `CEIL`, `EQUALITY`, `FMIN`, `FMAX`.
//!
//! All six have zero derivatives at every point except the measure-zero
//! switch point (`FMIN`/`FMAX` at `x == y`, `STEP`/`EQUALITY` at their
//! jump), which these partial rules do not special-case — they describe
//! the open interior of each operation's domain, not behavior exactly at
//! the switch.

use crate::scalar::Scalar;

/// `[x >= 0]`, the Heaviside step function.
pub fn eval_step<T: Scalar>(x: T, _y: T) -> T {
    T::from_bool(x.ge(T::zero()))
}

/// Zero everywhere on the open interior (a step has no slope away from its jump).
pub fn partials_step<T: Scalar>(_x: T, _y: T, _f: T) -> (T, T) {
    (T::zero(), T::zero())
}

/// `floor(x)`
pub fn eval_floor<T: Scalar>(x: T, _y: T) -> T {
    x.floor()
}

/// Zero everywhere `floor` is differentiable.
pub fn partials_floor<T: Scalar>(_x: T, _y: T, _f: T) -> (T, T) {
    (T::zero(), T::zero())
}

/// `ceil(x)`
pub fn eval_ceil<T: Scalar>(x: T, _y: T) -> T {
    x.ceil()
}

/// Zero everywhere `ceil` is differentiable.
pub fn partials_ceil<T: Scalar>(_x: T, _y: T, _f: T) -> (T, T) {
    (T::zero(), T::zero())
}

/// `[x == y]`
pub fn eval_equality<T: Scalar>(x: T, y: T) -> T {
    T::from_bool(x.eq_exact(y))
}

/// Zero everywhere (equality is locally constant away from `x == y`).
pub fn partials_equality<T: Scalar>(_x: T, _y: T, _f: T) -> (T, T) {
    (T::zero(), T::zero())
}

/// `min(x, y)`
pub fn eval_fmin<T: Scalar>(x: T, y: T) -> T {
    x.fmin(y)
}

/// `d(min)/dx = [x <= y]`, `d(min)/dy = 1 - [x <= y]`
pub fn partials_fmin<T: Scalar>(x: T, y: T, _f: T) -> (T, T) {
    let d0 = T::from_bool(x.le(y));
    (d0, T::one() - d0)
}

/// `max(x, y)`
pub fn eval_fmax<T: Scalar>(x: T, y: T) -> T {
    x.fmax(y)
}

/// `d(max)/dx = [x >= y]`, `d(max)/dy = 1 - [x >= y]`
pub fn partials_fmax<T: Scalar>(x: T, y: T, _f: T) -> (T, T) {
    let d0 = T::from_bool(x.ge(y));
    (d0, T::one() - d0)
}
