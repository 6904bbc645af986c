//! Arithmetic that hands back a caller-chosen fallback instead of producing
//! inf/NaN from a degenerate input.
//!
//! The `Option<f64>` returned by most functions here is `default` whenever the
//! operation was refused, so `None` means "refused and no fallback given".

use crate::core::compare::near_zero;

/// `a / b`, or `default` when `|b| <= zero_tol`.
///
/// With `zero_tol == 0.0` only an exact zero is refused. A NaN denominator is
/// not zero, so it divides through to NaN.
///
/// ```
/// use neon::safe::div;
/// assert_eq!(div(6.0, 3.0, None, 0.0), Some(2.0));
/// assert_eq!(div(1.0, 0.0, None, 0.0), None);
/// assert_eq!(div(1.0, 0.0, Some(0.0), 0.0), Some(0.0));
/// ```
#[inline]
pub fn div(a: f64, b: f64, default: Option<f64>, zero_tol: f64) -> Option<f64> {
    if near_zero(b, zero_tol) {
        return default;
    }
    Some(a / b)
}

#[inline]
pub fn div_or_zero(a: f64, b: f64, zero_tol: f64) -> f64 {
    div(a, b, Some(0.0), zero_tol).unwrap_or(0.0)
}

/// `a / b`, or an infinity carrying the sign of `a` when `b` is (near) zero.
/// `0 / 0` is NaN.
pub fn div_or_inf(a: f64, b: f64, zero_tol: f64) -> f64 {
    if near_zero(b, zero_tol) {
        if near_zero(a, zero_tol) {
            return f64::NAN;
        }
        return f64::INFINITY.copysign(a);
    }
    a / b
}

/// Floored modulo: a non-zero result has the sign of `b`.
pub fn modulo(a: f64, b: f64, default: Option<f64>, zero_tol: f64) -> Option<f64> {
    if near_zero(b, zero_tol) {
        return default;
    }
    let mut r = a % b;
    if r != 0.0 {
        if (r < 0.0) != (b < 0.0) {
            r += b;
        }
    } else {
        r = 0.0f64.copysign(b);
    }
    Some(r)
}

#[inline]
pub fn sqrt(x: f64, default: Option<f64>) -> Option<f64> {
    if x < 0.0 {
        return default;
    }
    Some(x.sqrt())
}

/// Logarithm of `x` in `base` (natural log when `None`).
///
/// Refuses `x <= 0`, NaN, and any base that has no logarithm (non-positive,
/// NaN, or exactly 1).
pub fn log(x: f64, base: Option<f64>, default: Option<f64>) -> Option<f64> {
    if !(x > 0.0) {
        return default;
    }
    match base {
        None => Some(x.ln()),
        Some(b) if !(b > 0.0) || b == 1.0 => default,
        Some(b) => Some(x.log(b)),
    }
}

/// `base^exp`, or `default` where the real power is undefined: a negative
/// base with a fractional exponent, or zero raised to a negative power.
///
/// Overflow is not refused and yields an infinity. `pow(0, 0)` is 1.
pub fn pow(base: f64, exp: f64, default: Option<f64>) -> Option<f64> {
    if base == 0.0 && exp < 0.0 {
        return default;
    }
    let r = base.powf(exp);
    if r.is_nan() && !base.is_nan() && !exp.is_nan() {
        return default;
    }
    Some(r)
}
