//! Error types for time-aware tensor operations
//!
//! Every public operation either returns a fully valid tensor or fails with one
//! of the conditions below, raised at the point of detection.
//!
//! # Examples
//!
//! ```
//! use chronors_core::{BaseTensor, TimeTensor, TimeTensorError};
//!
//! let base = BaseTensor::<f64>::zeros(&[4, 2]);
//! let err = TimeTensor::new(base, 5).unwrap_err();
//! assert!(matches!(err, TimeTensorError::InvalidTimeDimension { time_dim: 5, rank: 2 }));
//! ```

use thiserror::Error;

use crate::dtype::DType;

/// Top-level error type for all time tensor operations
#[derive(Error, Debug)]
pub enum TimeTensorError {
    /// The declared time axis does not exist in the tensor
    #[error("Invalid time dimension {time_dim} for tensor of rank {rank}")]
    InvalidTimeDimension { time_dim: usize, rank: usize },

    /// The time axis has length zero where a non-empty one is required
    #[error("Time axis {time_dim} is empty, a non-empty time axis is required")]
    EmptyTimeAxis { time_dim: usize },

    /// Operands disagree on rank or on an axis length
    #[error("Shape mismatch in {op}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        op: &'static str,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A selection index falls outside the axis bounds
    #[error("Index {index} out of range for axis {axis} with length {len}")]
    IndexOutOfRange { index: usize, axis: usize, len: usize },

    /// A series operation needs more samples than the time axis holds
    #[error("{op} needs at least {required} time steps, got {available}")]
    InsufficientLength {
        op: &'static str,
        required: usize,
        available: usize,
    },

    /// Operands or an imported buffer carry a different element type
    #[error("DType mismatch: expected {expected}, got {got}")]
    DtypeMismatch { expected: DType, got: DType },

    /// Operands declare their time axis at different positions
    #[error("Time dimension mismatch in {op}: expected {expected}, got {got}")]
    TimeDimMismatch {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    /// A non-time axis index is out of range
    #[error("Axis {axis} out of bounds for tensor of rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    /// An operation over a list of tensors received none
    #[error("{op} requires at least one input tensor")]
    EmptyInput { op: &'static str },

    /// Normalisation by a zero variance
    #[error("{op}: channel {channel} has zero variance")]
    ZeroVariance { op: &'static str, channel: usize },

    #[error("Unknown axis label '{0}'")]
    UnknownAxis(String),

    #[error("Duplicate axis label '{0}'")]
    DuplicateAxis(String),

    #[error("Unknown key '{key}' on axis '{axis}'")]
    UnknownKey { axis: String, key: String },

    /// A scalar parameter is outside its valid domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Capability negotiation with the array engine failed
    #[error("Engine capability '{capability}' unavailable: {reason}")]
    EngineUnavailable { capability: String, reason: String },

    /// Failure reported by the array engine, propagated unchanged
    #[error("Engine error: {0}")]
    Engine(#[from] anyhow::Error),
}

impl TimeTensorError {
    /// Wrap an engine-level error without altering it.
    pub(crate) fn engine<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Engine(anyhow::Error::new(err))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TimeTensorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TimeTensorError::InvalidTimeDimension {
            time_dim: 3,
            rank: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid time dimension 3 for tensor of rank 2"
        );

        let err = TimeTensorError::InsufficientLength {
            op: "acf",
            required: 6,
            available: 5,
        };
        assert_eq!(err.to_string(), "acf needs at least 6 time steps, got 5");
    }

    #[test]
    fn test_engine_error_preserves_source() {
        let source = std::io::Error::other("buffer exhausted");
        let err = TimeTensorError::engine(source);
        assert!(err.to_string().contains("buffer exhausted"));
    }
}
