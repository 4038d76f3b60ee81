//! Error function evaluation for the `f64`/`f32` operand path.
//!
//! A Taylor series (DLMF §7.6.1) with Kahan compensated summation, generic over any
//! `num_traits::Float + FloatConst`. `crate::dual::Dual<T>`'s `erf` instead
//! differentiates this series in closed form (`(2/√π) e^{-x²}`) rather than
//! re-summing it, since the series itself is only needed for the primal
//! value.

use num_traits::{Float, FloatConst};

/// `erf(x) = (2/√π) ∫₀ˣ e^(-t²) dt`, evaluated via a 30-term alternating
/// Taylor series with Kahan summation.
///
/// Reference: NIST DLMF §7.6.1 <https://dlmf.nist.gov/7.6#E1>
pub fn eval_erf<T: Float + FloatConst>(x: T) -> T {
    let sign = x.signum();
    let x = x.abs();
    let coeff = T::from(2.0).unwrap_or_else(T::nan) / T::PI().sqrt();

    let mut sum = T::zero();
    let mut compensation = T::zero();
    let mut factorial = T::one();
    let mut power = x;

    for n in 0..30_u32 {
        let two_n_plus_one = T::from(2 * n + 1).unwrap_or_else(T::nan);
        let term = power / (factorial * two_n_plus_one);

        if term.is_nan() || term.is_infinite() {
            break;
        }

        let signed_term = if n % 2 == 0 { term } else { -term };
        let y = signed_term - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;

        let n_plus_one = T::from(n + 1).unwrap_or_else(T::nan);
        factorial = factorial * n_plus_one;
        power = power * x * x;

        if term.abs() < T::epsilon() {
            break;
        }
    }
    sign * coeff * sum
}
