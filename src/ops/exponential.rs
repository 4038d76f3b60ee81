//! `EXP`, `LOG`, `POW`, `CONSTPOW`, `SQRT`.

use crate::scalar::Scalar;

/// `exp(x)`
pub fn eval_exp<T: Scalar>(x: T, _y: T) -> T {
    x.exp()
}

/// `d(exp(x))/dx = exp(x) = f`, reusing the already-computed output.
pub fn partials_exp<T: Scalar>(_x: T, _y: T, f: T) -> (T, T) {
    (f, T::zero())
}

/// `log(x)` (natural logarithm)
pub fn eval_log<T: Scalar>(x: T, _y: T) -> T {
    x.log()
}

/// `d(log(x))/dx = 1/x`
pub fn partials_log<T: Scalar>(x: T, _y: T, _f: T) -> (T, T) {
    (T::one() / x, T::zero())
}

/// `x ^ y`
pub fn eval_pow<T: Scalar>(x: T, y: T) -> T {
    x.powf(y)
}

/// `d(x^y)/dx = y*x^(y-1)` (expressed this way, not `y*f/x`, to stay
/// defined at `x=0` for integer `y`), `d(x^y)/dy = log(x)*f`.
pub fn partials_pow<T: Scalar>(x: T, y: T, f: T) -> (T, T) {
    let d0 = y * x.powf(y - T::one());
    let d1 = x.log() * f;
    (d0, d1)
}

/// `x ^ y`, treating `y` as a constant exponent.
pub fn eval_constpow<T: Scalar>(x: T, y: T) -> T {
    x.powf(y)
}

/// Same `d0` as `POW`; `d1 = 0` because `y` is held constant.
pub fn partials_constpow<T: Scalar>(x: T, y: T, _f: T) -> (T, T) {
    let d0 = y * x.powf(y - T::one());
    (d0, T::zero())
}

/// `sqrt(x)`
pub fn eval_sqrt<T: Scalar>(x: T, _y: T) -> T {
    x.sqrt()
}

/// `d(sqrt(x))/dx = 1/(2*f)`
pub fn partials_sqrt<T: Scalar>(_x: T, _y: T, f: T) -> (T, T) {
    (T::one() / (T::from_f64(2.0) * f), T::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow_evaluates_and_differentiates_correctly() {
        assert_eq!(eval_pow(2.0_f64, 3.0), 8.0);
        let (d0, d1) = partials_pow(2.0_f64, 3.0, 8.0);
        assert!((d0 - 12.0).abs() < 1e-12);
        assert!((d1 - 2.0_f64.ln() * 8.0).abs() < 1e-12);
    }

    #[test]
    fn exp_derivative_is_itself() {
        let f = eval_exp(1.0_f64, 0.0);
        let (d0, _) = partials_exp(1.0_f64, 0.0, f);
        assert_eq!(d0, f);
    }

    #[test]
    fn constpow_has_zero_second_partial() {
        let (_, d1) = partials_constpow(2.0_f64, 3.0, 8.0);
        assert_eq!(d1, 0.0);
    }
}
