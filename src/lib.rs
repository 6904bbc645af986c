//! Near-equality and tolerance arithmetic for `f64`.
//!
//! ```
//! use neon::{compare, ulp};
//!
//! assert!(compare::near(0.1 + 0.2, 0.3, 1e-9, 0.0));
//! assert_eq!(ulp::diff(1.0, ulp::next(1.0)).unwrap(), 1);
//! ```

pub mod core;
pub use crate::core::*;
