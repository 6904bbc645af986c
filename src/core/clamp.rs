//! Snap values that are "basically" something onto that something.
//!
//! NaN always passes through untouched.

use crate::core::compare::near_zero;

/// `0.0` if `|x| <= abs_tol`, else `x`.
#[inline]
pub fn to_zero(x: f64, abs_tol: f64) -> f64 {
    if near_zero(x, abs_tol) {
        0.0
    } else {
        x
    }
}

/// Nearest integer if `x` is within `abs_tol` of it, else `x`.
#[inline]
pub fn to_int(x: f64, abs_tol: f64) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return x;
    }
    let r = x.round_ties_even();
    if (x - r).abs() <= abs_tol {
        r
    } else {
        x
    }
}

#[inline]
pub fn to_value(x: f64, target: f64, abs_tol: f64) -> f64 {
    if (x - target).abs() <= abs_tol {
        target
    } else {
        x
    }
}

/// Clamp into `[lo, hi]`.
///
/// Unlike `f64::clamp` this never panics: NaN `x` passes through, and NaN
/// bounds are simply never crossed.
#[inline]
pub fn to_range(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Snap to the closest of `targets` that lies within `abs_tol`. Ties go to the
/// earlier target.
pub fn to_values(x: f64, targets: &[f64], abs_tol: f64) -> f64 {
    let mut best: Option<(f64, f64)> = None;
    for &t in targets {
        let err = (x - t).abs();
        if err > abs_tol {
            continue;
        }
        match best {
            Some((_, best_err)) if best_err <= err => {}
            _ => best = Some((t, err)),
        }
    }
    best.map_or(x, |(t, _)| t)
}

pub fn to_zero_many(values: &[f64], abs_tol: f64) -> Vec<f64> {
    values.iter().map(|&x| to_zero(x, abs_tol)).collect()
}
