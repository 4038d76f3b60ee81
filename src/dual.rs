//! Forward-mode automatic differentiation operand type.
//!
//! A second operand type, alongside plain `f64`/`f32`, that the dispatch
//! tables accept: exercising the same evaluator/partials rules through a
//! dual number recovers first-order derivatives for free and is a useful
//! cross-check against the hand-written partial-derivative rules in
//! `crate::ops`. The public shape (`new`/`constant`/`variable`, `.val`/`.eps`
//! fields) mirrors the call sites of a `PyDual`-style binding layer wrapping
//! a `Dual<f64>`.

use crate::scalar::Scalar;
use std::cmp::Ordering;

/// `val + eps * ε` with `ε² = 0`: a first-order forward-mode dual number.
///
/// Plugging `Dual<T>` into [`crate::eval_and_partials`] as the operand type
/// recovers the same first-order partials the hand-written
/// [`crate::ops`] derivative rules compute directly — this is what proves
/// the dispatch tables are generic over the operand type rather than
/// `f64`-shaped in disguise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<T> {
    /// The real (primal) component.
    pub val: T,
    /// The infinitesimal (tangent) component.
    pub eps: T,
}

impl<T: Scalar> Dual<T> {
    /// Build `val + eps * ε` directly.
    #[must_use]
    pub const fn new(val: T, eps: T) -> Self {
        Self { val, eps }
    }

    /// A constant: `val + 0 * ε`.
    #[must_use]
    pub fn constant(val: T) -> Self {
        Self { val, eps: T::zero() }
    }

    /// The seed for differentiating with respect to this variable:
    /// `val + 1 * ε`.
    #[must_use]
    pub fn variable(val: T) -> Self {
        Self { val, eps: T::one() }
    }
}

impl<T: Scalar> PartialOrd for Dual<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

impl<T: Scalar> std::ops::Add for Dual<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.val + rhs.val, self.eps + rhs.eps)
    }
}

impl<T: Scalar> std::ops::Sub for Dual<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.val - rhs.val, self.eps - rhs.eps)
    }
}

impl<T: Scalar> std::ops::Mul for Dual<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // d(uv) = u dv + v du
        Self::new(
            self.val * rhs.val,
            self.val * rhs.eps + rhs.val * self.eps,
        )
    }
}

impl<T: Scalar> std::ops::Div for Dual<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        // d(u/v) = (du*v - u*dv) / v^2
        let val = self.val / rhs.val;
        let eps = (self.eps * rhs.val - self.val * rhs.eps) / (rhs.val * rhs.val);
        Self::new(val, eps)
    }
}

impl<T: Scalar> std::ops::Neg for Dual<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.val, -self.eps)
    }
}

impl<T: Scalar> Scalar for Dual<T> {
    fn zero() -> Self {
        Self::constant(T::zero())
    }

    fn one() -> Self {
        Self::constant(T::one())
    }

    fn from_f64(value: f64) -> Self {
        Self::constant(T::from_f64(value))
    }

    fn exp(self) -> Self {
        let f = self.val.exp();
        Self::new(f, self.eps * f)
    }

    fn log(self) -> Self {
        Self::new(self.val.log(), self.eps / self.val)
    }

    fn sqrt(self) -> Self {
        let f = self.val.sqrt();
        Self::new(f, self.eps / (T::from_f64(2.0) * f))
    }

    fn sin(self) -> Self {
        Self::new(self.val.sin(), self.eps * self.val.cos())
    }

    fn cos(self) -> Self {
        Self::new(self.val.cos(), -(self.eps * self.val.sin()))
    }

    fn tan(self) -> Self {
        let c = self.val.cos();
        Self::new(self.val.tan(), self.eps / (c * c))
    }

    fn asin(self) -> Self {
        let denom = (T::one() - self.val * self.val).sqrt();
        Self::new(self.val.asin(), self.eps / denom)
    }

    fn acos(self) -> Self {
        let denom = (T::one() - self.val * self.val).sqrt();
        Self::new(self.val.acos(), -(self.eps / denom))
    }

    fn atan(self) -> Self {
        let denom = T::one() + self.val * self.val;
        Self::new(self.val.atan(), self.eps / denom)
    }

    fn sinh(self) -> Self {
        Self::new(self.val.sinh(), self.eps * self.val.cosh())
    }

    fn cosh(self) -> Self {
        Self::new(self.val.cosh(), self.eps * self.val.sinh())
    }

    fn tanh(self) -> Self {
        let f = self.val.tanh();
        Self::new(f, self.eps * (T::one() - f * f))
    }

    fn erf(self) -> Self {
        let two_over_sqrt_pi = T::from_f64(2.0 / std::f64::consts::PI.sqrt());
        let f = self.val.erf();
        let derivative = two_over_sqrt_pi * (-(self.val * self.val)).exp();
        Self::new(f, self.eps * derivative)
    }

    fn powf(self, exponent: Self) -> Self {
        // d(x^y) = y*x^(y-1)*dx + ln(x)*x^y*dy
        let f = self.val.powf(exponent.val);
        let term_x = exponent.val * self.val.powf(exponent.val - T::one()) * self.eps;
        let term_y = self.val.log() * f * exponent.eps;
        Self::new(f, term_x + term_y)
    }

    fn fmin(self, other: Self) -> Self {
        if self.val.le(other.val) { self } else { other }
    }

    fn fmax(self, other: Self) -> Self {
        if self.val.ge(other.val) { self } else { other }
    }

    fn floor(self) -> Self {
        Self::constant(self.val.floor())
    }

    fn ceil(self) -> Self {
        Self::constant(self.val.ceil())
    }

    fn eq_exact(self, other: Self) -> bool {
        self.val.eq_exact(other.val)
    }
}

#[cfg(test)]
mod tests {
    use super::Dual;

    #[test]
    fn product_rule_matches_hand_derivative() {
        // f(x) = x^2 * sin(x), f'(x) = 2x*sin(x) + x^2*cos(x)
        let x = Dual::variable(2.0_f64);
        let f = (x * x) * x.sin();
        let expected = 2.0 * 2.0_f64.sin() + 2.0_f64.powi(2) * 2.0_f64.cos();
        assert!((f.eps - expected).abs() < 1e-9);
    }

    #[test]
    fn constant_has_zero_tangent() {
        let c: Dual<f64> = Dual::constant(5.0);
        assert_eq!(c.eps, 0.0);
        assert_eq!(c.val, 5.0);
    }

    #[test]
    fn quotient_rule_matches_hand_derivative() {
        // f(x) = sin(x)/x, f'(x) = (cos(x)*x - sin(x))/x^2
        let x = Dual::variable(1.5_f64);
        let f = x.sin() / x;
        let expected = (1.5_f64.cos() * 1.5 - 1.5_f64.sin()) / (1.5_f64 * 1.5_f64);
        assert!((f.eps - expected).abs() < 1e-9);
    }
}
