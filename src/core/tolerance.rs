#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::{clamp, compare, ulp};

/// A bundle of tolerances so call sites don't repeat magic epsilons.
///
/// With the `serde` feature this loads from config; missing fields take the
/// defaults below.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerance {
    pub rel_tol:  f64, // relative, scaled by max(|a|, |b|)
    pub abs_tol:  f64, // absolute floor for `near`
    pub zero_tol: f64, // what counts as zero for snapping and near_zero
    pub max_ulps: u64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rel_tol: compare::DEFAULT_REL_TOL,
            abs_tol: compare::DEFAULT_ABS_TOL,
            zero_tol: compare::DEFAULT_ZERO_TOL,
            max_ulps: ulp::DEFAULT_MAX_ULPS,
        }
    }
}

impl Tolerance {
    #[inline]
    pub const fn with_rel_tol(self, rel_tol: f64) -> Self {
        Self { rel_tol, ..self }
    }

    #[inline]
    pub const fn with_abs_tol(self, abs_tol: f64) -> Self {
        Self { abs_tol, ..self }
    }

    #[inline]
    pub const fn with_zero_tol(self, zero_tol: f64) -> Self {
        Self { zero_tol, ..self }
    }

    #[inline]
    pub const fn with_max_ulps(self, max_ulps: u64) -> Self {
        Self { max_ulps, ..self }
    }

    // ---- predicates ----

    #[inline]
    pub fn near(&self, a: f64, b: f64) -> bool {
        compare::near(a, b, self.rel_tol, self.abs_tol)
    }

    #[inline]
    pub fn near_zero(&self, x: f64) -> bool {
        compare::near_zero(x, self.zero_tol)
    }

    #[inline]
    pub fn within_ulps(&self, a: f64, b: f64) -> bool {
        ulp::within(a, b, self.max_ulps)
    }

    #[inline]
    pub fn compare(&self, a: f64, b: f64) -> core::cmp::Ordering {
        compare::compare(a, b, self.rel_tol, self.abs_tol)
    }

    #[inline]
    pub fn is_integer(&self, x: f64) -> bool {
        compare::is_integer(x, self.zero_tol)
    }

    // ---- snapping ----

    #[inline]
    pub fn to_zero(&self, x: f64) -> f64 {
        clamp::to_zero(x, self.zero_tol)
    }

    #[inline]
    pub fn to_int(&self, x: f64) -> f64 {
        clamp::to_int(x, self.zero_tol)
    }
}
