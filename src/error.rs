//! Error types for mesh construction and solver configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelaxError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RelaxError {
    /// The mesh needs at least a boundary ring.
    #[error("mesh size {size} is too small, must be at least {minimum}")]
    TooSmall { size: usize, minimum: usize },

    /// Tolerance must be positive and finite or the sweep loop never ends.
    #[error("convergence tolerance {0} must be positive and finite")]
    InvalidEpsilon(f64),
}
