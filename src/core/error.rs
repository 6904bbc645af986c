use thiserror::Error;

/// Failures raised by the computing functions. Predicates never produce these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NeonError {
    /// Input is NaN or infinite where the operation needs a measurable value.
    #[error("{message} (got {value})")]
    InvalidValue { value: f64, message: &'static str },

    /// An aggregate was asked of an empty slice.
    #[error("cannot operate on empty {what}")]
    EmptyInput { what: &'static str },
}

impl NeonError {
    #[inline]
    pub(crate) fn invalid(value: f64, message: &'static str) -> Self {
        log::trace!("rejecting {value}: {message}");
        NeonError::InvalidValue { value, message }
    }

    #[inline]
    pub(crate) fn empty(what: &'static str) -> Self {
        log::trace!("rejecting empty {what}");
        NeonError::EmptyInput { what }
    }
}

pub type Result<T> = core::result::Result<T, NeonError>;
