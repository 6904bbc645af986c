//! Relative/absolute tolerance comparisons.
//!
//! All predicates here return `false` for NaN instead of failing, so they can
//! sit in a comparison chain unguarded.

use core::cmp::Ordering;

pub const DEFAULT_REL_TOL: f64 = 1e-9;
pub const DEFAULT_ABS_TOL: f64 = 0.0;
pub const DEFAULT_ZERO_TOL: f64 = 1e-9;

/// `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
///
/// NaN is near nothing, itself included. An infinity is near only the same
/// infinity.
///
/// ```
/// use neon::compare::{near, DEFAULT_ABS_TOL, DEFAULT_REL_TOL};
/// assert!(near(0.1 + 0.2, 0.3, DEFAULT_REL_TOL, DEFAULT_ABS_TOL));
/// assert!(!near(f64::NAN, f64::NAN, DEFAULT_REL_TOL, DEFAULT_ABS_TOL));
/// ```
#[inline]
pub fn near(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= (rel_tol * a.abs().max(b.abs())).max(abs_tol)
}

/// `|x| <= abs_tol`, false for NaN and both infinities.
#[inline]
pub fn near_zero(x: f64, abs_tol: f64) -> bool {
    if x.is_nan() || x.is_infinite() {
        return false;
    }
    x.abs() <= abs_tol
}

#[inline]
pub fn less_or_near(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    a < b || near(a, b, rel_tol, abs_tol)
}

#[inline]
pub fn greater_or_near(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    a > b || near(a, b, rel_tol, abs_tol)
}

/// Three-way comparison that folds near values into `Equal`.
///
/// Anything that is neither near nor less (NaN included) is `Greater`.
pub fn compare(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> Ordering {
    if near(a, b, rel_tol, abs_tol) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// True if every pair is near. Vacuously true for an empty slice.
pub fn all_near(pairs: &[(f64, f64)], rel_tol: f64, abs_tol: f64) -> bool {
    pairs.iter().all(|&(a, b)| near(a, b, rel_tol, abs_tol))
}

pub fn near_many(pairs: &[(f64, f64)], rel_tol: f64, abs_tol: f64) -> Vec<bool> {
    pairs.iter().map(|&(a, b)| near(a, b, rel_tol, abs_tol)).collect()
}

/// True if `x` lies within `abs_tol` of an integer.
#[inline]
pub fn is_integer(x: f64, abs_tol: f64) -> bool {
    if x.is_nan() || x.is_infinite() {
        return false;
    }
    (x - x.round_ties_even()).abs() <= abs_tol
}
