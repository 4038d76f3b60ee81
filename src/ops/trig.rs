//! `SIN`, `COS`, `TAN`, `ASIN`, `ACOS`, `ATAN`.

use crate::scalar::Scalar;

/// `sin(x)`
pub fn eval_sin<T: Scalar>(x: T, _y: T) -> T {
    x.sin()
}

/// `d(sin(x))/dx = cos(x)`
pub fn partials_sin<T: Scalar>(x: T, _y: T, _f: T) -> (T, T) {
    (x.cos(), T::zero())
}

/// `cos(x)`
pub fn eval_cos<T: Scalar>(x: T, _y: T) -> T {
    x.cos()
}

/// `d(cos(x))/dx = -sin(x)`
pub fn partials_cos<T: Scalar>(x: T, _y: T, _f: T) -> (T, T) {
    (-x.sin(), T::zero())
}

/// `tan(x)`
pub fn eval_tan<T: Scalar>(x: T, _y: T) -> T {
    x.tan()
}

/// `d(tan(x))/dx = 1/cos(x)^2`
pub fn partials_tan<T: Scalar>(x: T, _y: T, _f: T) -> (T, T) {
    let c = x.cos();
    (T::one() / (c * c), T::zero())
}

/// `asin(x)`
pub fn eval_asin<T: Scalar>(x: T, _y: T) -> T {
    x.asin()
}

/// `d(asin(x))/dx = 1/sqrt(1-x^2)`
pub fn partials_asin<T: Scalar>(x: T, _y: T, _f: T) -> (T, T) {
    (T::one() / (T::one() - x * x).sqrt(), T::zero())
}

/// `acos(x)`
pub fn eval_acos<T: Scalar>(x: T, _y: T) -> T {
    x.acos()
}

/// `d(acos(x))/dx = -1/sqrt(1-x^2)`
pub fn partials_acos<T: Scalar>(x: T, _y: T, _f: T) -> (T, T) {
    (-T::one() / (T::one() - x * x).sqrt(), T::zero())
}

/// `atan(x)`
pub fn eval_atan<T: Scalar>(x: T, _y: T) -> T {
    x.atan()
}

/// `d(atan(x))/dx = 1/(1+x^2)`
pub fn partials_atan<T: Scalar>(x: T, _y: T, _f: T) -> (T, T) {
    (T::one() / (T::one() + x * x), T::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_and_cos_are_complementary() {
        let x = 0.3_f64;
        let (d0, _) = partials_sin(x, 0.0, x.sin());
        assert!((d0 - x.cos()).abs() < 1e-12);
    }

    #[test]
    fn tan_derivative_matches_secant_squared() {
        let x = 0.4_f64;
        let (d0, _) = partials_tan(x, 0.0, eval_tan(x, 0.0));
        let expected = 1.0 / x.cos().powi(2);
        assert!((d0 - expected).abs() < 1e-9);
    }
}
