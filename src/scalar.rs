//! The `Scalar` trait: the arithmetic and elementary-function surface an
//! operand type `T` must support to participate in the dispatch tables.
//!
//! A value type: every method takes `self` by value and returns a new
//! `Self`, so operand types can be small Copy values (`f64`) or richer
//! tuples (`Dual<f64>`) without the trait caring either way.

use num_traits::{Float, FloatConst};

/// The elementary-function surface every built-in operation is defined
/// against.
///
/// `f64`/`f32` get this via the blanket impl below. `crate::dual::Dual<T>`
/// implements it directly, propagating derivatives through the chain rule,
/// which is what exercises the dispatch tables against a second,
/// structurally different operand type than plain floats.
pub trait Scalar:
    Copy
    + PartialOrd
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;
    /// The multiplicative identity.
    fn one() -> Self;
    /// Lift an `f64` constant into `Self` (used for small integer/rational
    /// constants appearing in derivative rules, e.g. the `2` in `2*x`).
    fn from_f64(value: f64) -> Self;

    /// `e^x`
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn log(self) -> Self;
    /// Principal square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Tangent.
    fn tan(self) -> Self;
    /// Arcsine.
    fn asin(self) -> Self;
    /// Arccosine.
    fn acos(self) -> Self;
    /// Arctangent.
    fn atan(self) -> Self;
    /// Hyperbolic sine.
    fn sinh(self) -> Self;
    /// Hyperbolic cosine.
    fn cosh(self) -> Self;
    /// Hyperbolic tangent.
    fn tanh(self) -> Self;
    /// Gauss error function.
    fn erf(self) -> Self;
    /// `self ^ exponent`.
    fn powf(self, exponent: Self) -> Self;
    /// Smaller of `self` and `other`.
    fn fmin(self, other: Self) -> Self;
    /// Larger of `self` and `other`.
    fn fmax(self, other: Self) -> Self;
    /// Largest integer less than or equal to `self`.
    fn floor(self) -> Self;
    /// Smallest integer greater than or equal to `self`.
    fn ceil(self) -> Self;

    /// `self >= other`, as a plain `bool` (used to build `STEP`'s `Self`
    /// output via `from_bool`, and for `FMIN`/`FMAX` partials).
    fn ge(self, other: Self) -> bool {
        !(self < other)
    }
    /// `self <= other`.
    fn le(self, other: Self) -> bool {
        !(other < self)
    }
    /// `self == other`, exact (no epsilon tolerance — `EQUALITY` is a
    /// literal predicate).
    fn eq_exact(self, other: Self) -> bool;

    /// Lift a `bool` into `Self` as `1` or `0`. Backs `STEP` and
    /// `EQUALITY`'s evaluators.
    fn from_bool(value: bool) -> Self {
        if value { Self::one() } else { Self::zero() }
    }

    /// `PRINTME`'s diagnostic side channel.
    ///
    /// Defaults to a no-op for every operand type; only the blanket
    /// `Float + FloatConst` implementation below overrides this to emit a
    /// diagnostic line, and only when the `printme_diagnostics` feature is
    /// enabled.
    fn on_printme(self, _y: Self) {}
}

impl<T> Scalar for T
where
    T: Float + FloatConst + std::fmt::Display,
{
    fn zero() -> Self {
        Float::zero()
    }

    fn one() -> Self {
        Float::one()
    }

    fn from_f64(value: f64) -> Self {
        T::from(value).unwrap_or_else(T::nan)
    }

    fn exp(self) -> Self {
        Float::exp(self)
    }

    fn log(self) -> Self {
        Float::ln(self)
    }

    fn sqrt(self) -> Self {
        Float::sqrt(self)
    }

    fn sin(self) -> Self {
        Float::sin(self)
    }

    fn cos(self) -> Self {
        Float::cos(self)
    }

    fn tan(self) -> Self {
        Float::tan(self)
    }

    fn asin(self) -> Self {
        Float::asin(self)
    }

    fn acos(self) -> Self {
        Float::acos(self)
    }

    fn atan(self) -> Self {
        Float::atan(self)
    }

    fn sinh(self) -> Self {
        Float::sinh(self)
    }

    fn cosh(self) -> Self {
        Float::cosh(self)
    }

    fn tanh(self) -> Self {
        Float::tanh(self)
    }

    fn erf(self) -> Self {
        crate::ops::special::eval_erf(self)
    }

    fn powf(self, exponent: Self) -> Self {
        Float::powf(self, exponent)
    }

    fn fmin(self, other: Self) -> Self {
        Float::min(self, other)
    }

    fn fmax(self, other: Self) -> Self {
        Float::max(self, other)
    }

    fn floor(self) -> Self {
        Float::floor(self)
    }

    fn ceil(self) -> Self {
        Float::ceil(self)
    }

    fn eq_exact(self, other: Self) -> bool {
        self == other
    }

    #[cfg_attr(
        not(feature = "printme_diagnostics"),
        allow(unused_variables, reason = "y is only read when the diagnostic feature is on")
    )]
    fn on_printme(self, y: Self) {
        #[cfg(feature = "printme_diagnostics")]
        {
            eprintln!("[PRINTME] x={self} y={y}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn from_bool_round_trips() {
        assert_eq!(f64::from_bool(true), 1.0);
        assert_eq!(f64::from_bool(false), 0.0);
    }

    #[test]
    fn ge_le_are_consistent_with_partial_ord() {
        assert!(Scalar::ge(3.0_f64, 2.0));
        assert!(!Scalar::ge(2.0_f64, 3.0));
        assert!(Scalar::le(2.0_f64, 3.0));
        assert!(!Scalar::le(3.0_f64, 2.0));
    }
}
