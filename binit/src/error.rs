use thiserror::Error;

/// Errors returned for limit construction and bin operations.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("limits must be strictly increasing, check the value at index {index}")]
    Unsorted { index: usize },
    #[error("the bins have incompatible limits")]
    IncompatibleLimits,
    #[error("an overflow occurred")]
    Overflow,
}
