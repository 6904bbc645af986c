use crate::core::error::{NeonError, Result};

/// Running sum with a Neumaier compensation term.
///
/// The low-order bits lost by each addition are collected in `err` and folded
/// back in by [`CompensatedSum::value`], so cancellations like
/// `1e16 + 1.0 - 1e16` come out exact.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CompensatedSum {
    pub v: f64,
    pub err: f64,
}

impl CompensatedSum {
    pub const fn new() -> Self {
        Self { v: 0.0, err: 0.0 }
    }

    #[inline]
    pub fn add(&mut self, x: f64) {
        let t = self.v + x;
        if self.v.abs() >= x.abs() {
            self.err += (self.v - t) + x;
        } else {
            self.err += (x - t) + self.v;
        }
        self.v = t;
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.v + self.err
    }
}

impl Extend<f64> for CompensatedSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<f64> for CompensatedSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

impl From<CompensatedSum> for f64 {
    fn from(s: CompensatedSum) -> Self {
        s.value()
    }
}

/// Compensated sum of `values`. Empty input is an error rather than `0.0`.
///
/// ```
/// assert_eq!(neon::sum::sum_exact(&[0.1; 10]).unwrap(), 1.0);
/// assert_eq!(neon::sum::sum_exact(&[1e16, 1.0, -1e16]).unwrap(), 1.0);
/// ```
pub fn sum_exact(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(NeonError::empty("values"));
    }
    Ok(values.iter().copied().collect::<CompensatedSum>().value())
}

pub fn mean_exact(values: &[f64]) -> Result<f64> {
    Ok(sum_exact(values)? / values.len() as f64)
}
