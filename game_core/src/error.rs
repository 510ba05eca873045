//! Error types for the engine

use thiserror::Error;

/// Result type for engine operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Caller contract violations. Aim and power inputs are clamped, never rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoreError {
    #[error("invalid dt: {0}, must be non-negative")]
    InvalidDt(f32),
}
