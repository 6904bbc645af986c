// Ours
pub mod rep;
pub mod error;
pub mod ulp;
pub mod compare;
pub mod clamp;
pub mod safe;
pub mod sum;
pub mod tolerance;

pub use error::{NeonError, Result};
pub use tolerance::Tolerance;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;


// Assertion macros
#[macro_export]
macro_rules! assert_within_ulps {
    ($a:expr, $b:expr) => {
        $crate::assert_within_ulps!($a, $b, $crate::core::ulp::DEFAULT_MAX_ULPS)
    };
    ($a:expr, $b:expr, $max:expr) => {{
        let (a, b): (f64, f64) = ($a, $b);
        let max: u64 = $max;
        assert!(
            $crate::core::ulp::within(a, b, max),
            "{} and {} are {:?} ulps apart, allowed {}",
            a,
            b,
            $crate::core::ulp::diff(a, b),
            max
        );
    }};
}

#[macro_export]
macro_rules! assert_near {
    ($a:expr, $b:expr) => {
        $crate::assert_near!($a, $b, $crate::core::compare::DEFAULT_REL_TOL)
    };
    ($a:expr, $b:expr, $rel:expr) => {{
        let (a, b): (f64, f64) = ($a, $b);
        assert!(
            $crate::core::compare::near(a, b, $rel, $crate::core::compare::DEFAULT_ABS_TOL),
            "{} is not near {} (rel_tol={})",
            a,
            b,
            $rel
        );
    }};
}
