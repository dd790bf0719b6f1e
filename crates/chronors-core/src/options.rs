//! Option structs for reductions and series operations.
//!
//! Every numeric convention an operation depends on (reduction axis, variance
//! denominator, diff boundary policy, acf normalisation) is a field here with a
//! documented default, never a hidden fallback inside the operation.
//!
//! # Examples
//!
//! ```
//! use chronors_core::{Correction, DiffBoundary, DiffOptions, ReduceOptions};
//!
//! let opts = ReduceOptions::default().with_keepdim(true).with_correction(Correction::Biased);
//! assert_eq!(opts.dim, None);
//!
//! let diff = DiffOptions::default().with_order(2).with_boundary(DiffBoundary::Pad(0.0));
//! assert_eq!(diff.order, 2);
//! ```

/// Variance denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Correction {
    /// Divide by `N - 1` (sample variance)
    #[default]
    Unbiased,
    /// Divide by `N` (population variance)
    Biased,
}

impl Correction {
    /// Degrees of freedom subtracted from the sample count.
    pub fn ddof(self) -> usize {
        match self {
            Correction::Unbiased => 1,
            Correction::Biased => 0,
        }
    }
}

/// Options for `tmean`, `tvar` and `tstd`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReduceOptions {
    /// Axis to reduce; `None` means the time axis
    pub dim: Option<usize>,
    /// Keep the reduced axis with length 1
    pub keepdim: bool,
    /// Denominator for variance and standard deviation
    pub correction: Correction,
}

impl ReduceOptions {
    /// Reduce along the time axis, dropping it (the default)
    pub fn time() -> Self {
        Self::default()
    }

    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = Some(dim);
        self
    }

    pub fn with_keepdim(mut self, keepdim: bool) -> Self {
        self.keepdim = keepdim;
        self
    }

    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = correction;
        self
    }
}

/// What happens to the first `order` samples lost by differencing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiffBoundary {
    /// Output time length is `time_len - order`
    #[default]
    Drop,
    /// Output keeps `time_len`; the leading `order` samples hold the fill value
    Pad(f64),
}

/// Options for `diff`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffOptions {
    /// Number of times the first difference is applied
    pub order: usize,
    pub boundary: DiffBoundary,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            order: 1,
            boundary: DiffBoundary::Drop,
        }
    }
}

impl DiffOptions {
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn with_boundary(mut self, boundary: DiffBoundary) -> Self {
        self.boundary = boundary;
        self
    }
}

/// Options for `acf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcfOptions {
    /// Largest lag `k`; the output holds lags `0..=k`
    pub max_lag: usize,
    /// Divide the lag-k sum by `N - k` instead of `N`
    pub adjusted: bool,
}

impl AcfOptions {
    pub fn new(max_lag: usize) -> Self {
        Self {
            max_lag,
            adjusted: false,
        }
    }

    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = adjusted;
        self
    }
}
