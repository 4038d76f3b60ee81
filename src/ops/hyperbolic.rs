//! `SINH`, `COSH`, `TANH`.

use crate::scalar::Scalar;

/// `sinh(x)`
pub fn eval_sinh<T: Scalar>(x: T, _y: T) -> T {
    x.sinh()
}

/// `d(sinh(x))/dx = cosh(x)`
pub fn partials_sinh<T: Scalar>(x: T, _y: T, _f: T) -> (T, T) {
    (x.cosh(), T::zero())
}

/// `cosh(x)`
pub fn eval_cosh<T: Scalar>(x: T, _y: T) -> T {
    x.cosh()
}

/// `d(cosh(x))/dx = sinh(x)`.
pub fn partials_cosh<T: Scalar>(x: T, _y: T, _f: T) -> (T, T) {
    (x.sinh(), T::zero())
}

/// `tanh(x)`
pub fn eval_tanh<T: Scalar>(x: T, _y: T) -> T {
    x.tanh()
}

/// `d(tanh(x))/dx = 1 - f^2`
pub fn partials_tanh<T: Scalar>(_x: T, _y: T, f: T) -> (T, T) {
    (T::one() - f * f, T::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tanh_at_zero_has_unit_slope() {
        let f = eval_tanh(0.0_f64, 0.0);
        assert_eq!(f, 0.0);
        let (d0, _) = partials_tanh(0.0_f64, 0.0, f);
        assert_eq!(d0, 1.0);
    }

    #[test]
    fn cosh_derivative_is_positive_sinh() {
        let x = 0.8_f64;
        let (d0, _) = partials_cosh(x, 0.0, eval_cosh(x, 0.0));
        assert!((d0 - x.sinh()).abs() < 1e-12);
    }
}
