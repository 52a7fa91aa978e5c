//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Invalid construction parameters.  Raised once, at build time; nothing in
/// the tick loop produces a `CoreError`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("domain must have positive, finite size (got {width} x {height})")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("group size bounds must satisfy 1 <= min <= max (got min={min}, max={max})")]
    InvalidGroupSizes { min: usize, max: usize },

    #[error("min_radius must be positive and finite (got {0})")]
    InvalidRadius(f64),

    #[error("min_velocity must be positive and finite (got {0})")]
    InvalidVelocity(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ps-core`.
pub type CoreResult<T> = Result<T, CoreError>;
