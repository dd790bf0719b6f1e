//! Core type definitions shared by every tensor flavour.
//!
//! This module defines:
//!
//! - Type aliases for tensor dimensions ([`Axis`], [`Rank`], [`Shape`])
//! - The time axis placement convention ([`TimeDim`])
//! - Axis metadata ([`AxisMeta`]) used by the data indexer
//!
//! # Examples
//!
//! ```
//! use chronors_core::{AxisMeta, TimeDim};
//!
//! // Time is the last axis unless declared otherwise
//! assert_eq!(TimeDim::default(), TimeDim::Last);
//! assert_eq!(TimeDim::Last.resolve(3).unwrap(), 2);
//! assert_eq!(TimeDim::Index(0).resolve(3).unwrap(), 0);
//!
//! let channels = AxisMeta::new("channel", 2).with_keys(["left", "right"]).unwrap();
//! assert_eq!(channels.key_position("right"), Some(1));
//! ```

use smallvec::SmallVec;

use crate::error::{Result, TimeTensorError};

/// Index of a tensor axis (zero-based).
pub type Axis = usize;

/// Number of dimensions of a tensor.
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common ranks.
///
/// Time series rarely exceed (batch, channel, time) plus a couple of spatial axes.
pub type Shape = SmallVec<[usize; 6]>;

/// Placement of the time axis.
///
/// Every creation operation takes a `TimeDim` explicitly. The documented default is
/// [`TimeDim::Last`]: time is the last axis unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeDim {
    /// The last axis of the tensor
    #[default]
    Last,
    /// An explicit axis index
    Index(usize),
}

impl TimeDim {
    /// Resolve to a concrete axis for a tensor of the given rank.
    ///
    /// # Errors
    ///
    /// Returns [`TimeTensorError::InvalidTimeDimension`] if the axis does not exist
    /// (including any placement on a rank-0 tensor).
    pub fn resolve(self, rank: Rank) -> Result<Axis> {
        let time_dim = match self {
            TimeDim::Last => rank.checked_sub(1).ok_or(
                TimeTensorError::InvalidTimeDimension {
                    time_dim: 0,
                    rank,
                },
            )?,
            TimeDim::Index(i) => i,
        };
        crate::invariants::check_time_dim(time_dim, rank)?;
        Ok(time_dim)
    }
}

impl From<usize> for TimeDim {
    fn from(index: usize) -> Self {
        TimeDim::Index(index)
    }
}

/// Metadata for a single labelled tensor axis.
///
/// Besides the symbolic axis name, an axis may carry one symbolic key per position
/// (for instance channel names), so positions can be addressed by key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisMeta {
    /// Symbolic name for this axis (e.g., "batch", "time", "channel")
    pub name: String,
    /// Number of elements along this axis
    pub size: usize,
    /// Optional key for each position along the axis
    pub keys: Option<Vec<String>>,
}

impl AxisMeta {
    /// Create axis metadata without position keys.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
            keys: None,
        }
    }

    /// Attach one key per position.
    ///
    /// # Errors
    ///
    /// Fails with `ShapeMismatch` when the number of keys differs from the axis size,
    /// and with `DuplicateAxis` when a key repeats.
    pub fn with_keys<I, S>(mut self, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.len() != self.size {
            return Err(TimeTensorError::ShapeMismatch {
                op: "AxisMeta::with_keys",
                expected: vec![self.size],
                got: vec![keys.len()],
            });
        }
        for (i, key) in keys.iter().enumerate() {
            if keys[..i].contains(key) {
                return Err(TimeTensorError::DuplicateAxis(format!(
                    "{}[{}]",
                    self.name, key
                )));
            }
        }
        self.keys = Some(keys);
        Ok(self)
    }

    /// Position of `key` along this axis, if the axis is keyed and has it.
    pub fn key_position(&self, key: &str) -> Option<usize> {
        self.keys
            .as_ref()
            .and_then(|keys| keys.iter().position(|k| k == key))
    }

    /// Metadata after keeping only `positions` (in that order).
    ///
    /// Keys survive only when no position repeats; a repeated position would
    /// leave two positions under one key.
    pub(crate) fn select(&self, positions: &[usize]) -> Self {
        let repeats = positions
            .iter()
            .enumerate()
            .any(|(i, p)| positions[..i].contains(p));
        let keys = match &self.keys {
            Some(keys) if !repeats => Some(positions.iter().map(|&p| keys[p].clone()).collect()),
            _ => None,
        };
        Self {
            name: self.name.clone(),
            size: positions.len(),
            keys,
        }
    }
}
