//! Engine error types.
//!
//! Detection outcomes are never errors: a cell that matches nothing,
//! or matches with a failing checksum, is ordinary data handled by the
//! confidence machinery. Errors here are confined to configuration.

use thiserror::Error;

/// Engine result type.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Confidence threshold outside the unit interval.
    #[error("invalid confidence threshold {0}: must lie in 0.0..=1.0")]
    InvalidThreshold(f64),
}
