//! Unit-in-the-last-place arithmetic on f64.
//!
//! Every operation works on the monotonic key from [`crate::core::rep::key`],
//! so distances and jumps are O(1) no matter how many doubles lie between the
//! endpoints.

use crate::core::error::{NeonError, Result};
use crate::core::rep::{from_key, key, INF_KEY};

/// ULP budget used by [`within_default`].
pub const DEFAULT_MAX_ULPS: u64 = 4;

/// Smallest positive subnormal, the ULP of zero.
pub const MIN_SUBNORMAL: f64 = 4.9406564584124654e-324;

/// Gap between `x` and the next double toward +inf.
///
/// NaN is rejected. Infinities report +inf and both zeros report
/// [`MIN_SUBNORMAL`].
///
/// ```
/// assert_eq!(neon::ulp::of(1.0).unwrap(), f64::EPSILON);
/// assert!(neon::ulp::of(f64::NAN).is_err());
/// ```
pub fn of(x: f64) -> Result<f64> {
    if x.is_nan() {
        return Err(NeonError::invalid(x, "cannot compute ULP of NaN"));
    }
    if x.is_infinite() {
        return Ok(f64::INFINITY);
    }
    if x == 0.0 {
        return Ok(MIN_SUBNORMAL);
    }
    Ok((next(x) - x).abs())
}

/// Number of representable doubles you have to step over to get from `a` to
/// `b`. Zero when they compare equal, including `0.0` vs `-0.0`.
///
/// Fails on NaN or on either infinity.
pub fn diff(a: f64, b: f64) -> Result<u64> {
    for v in [a, b] {
        if v.is_nan() {
            return Err(NeonError::invalid(v, "cannot compute ULP distance with NaN"));
        }
        if v.is_infinite() {
            return Err(NeonError::invalid(v, "cannot compute ULP distance with infinity"));
        }
    }

    if a == b {
        return Ok(0);
    }

    // Finite keys span almost the whole i64 range on each side of zero, so
    // the difference needs the wider type.
    let d = key(b) as i128 - key(a) as i128;
    Ok(d.unsigned_abs() as u64)
}

/// True if `a` and `b` are equal or at most `max_ulps` apart.
///
/// Never fails: NaN is never within anything, and an infinity is only within
/// the same infinity.
pub fn within(a: f64, b: f64, max_ulps: u64) -> bool {
    if a == b {
        return true;
    }
    if a.is_nan() || b.is_nan() || a.is_infinite() || b.is_infinite() {
        return false;
    }
    match diff(a, b) {
        Ok(d) => d <= max_ulps,
        Err(_) => false,
    }
}

/// [`within`] with [`DEFAULT_MAX_ULPS`].
#[inline]
pub fn within_default(a: f64, b: f64) -> bool {
    within(a, b, DEFAULT_MAX_ULPS)
}

/// Adjacent double toward +inf. `next(+inf)` is +inf, NaN comes back unchanged.
#[inline]
pub fn next(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    from_key(key(x) + 1)
}

/// Adjacent double toward -inf. `prev(-inf)` is -inf, NaN comes back unchanged.
#[inline]
pub fn prev(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY {
        return x;
    }
    from_key(key(x) - 1)
}

/// Move `x` by `n` representable steps, negative `n` going down.
///
/// Gives the same value as applying [`next`] or [`prev`] `|n|` times, without
/// the loop. Walking off either end of the finite range pins the result to
/// that infinity.
pub fn add(x: f64, n: i64) -> f64 {
    if n == 0 || x.is_nan() {
        return x;
    }
    if x.is_infinite() && (x > 0.0) == (n > 0) {
        return x;
    }

    let target = key(x).saturating_add(n);
    if target >= INF_KEY {
        log::trace!("stepping {x} by {n} ulps saturated at +inf");
        return f64::INFINITY;
    }
    if target <= -INF_KEY {
        log::trace!("stepping {x} by {n} ulps saturated at -inf");
        return f64::NEG_INFINITY;
    }
    from_key(target)
}
