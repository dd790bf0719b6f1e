//! # chronors-core
//!
//! Time-aware tensors: a dense N-dimensional array that records which of its
//! axes is time, plus creation, structural, statistical and series operations
//! that keep that record correct.
//!
//! This crate provides:
//!
//! - **Base tensors** ([`BaseTensor`]): one dtype-generic buffer, with aliases
//!   per element type ([`FloatBaseTensor`], [`ByteBaseTensor`], ...)
//! - **Time tensors** ([`TimeTensor`]): a base tensor plus a validated time axis
//! - **Operations** ([`ops`]): creation, `cat`/`tcat`/`stack`, time
//!   reductions, covariance, differencing and autocorrelation
//! - **Labelled tensors** ([`DataTensor`]): axes addressed by name
//!
//! ## Core Principles
//!
//! ### The time axis is always valid
//!
//! Every [`TimeTensor`] satisfies `time_dim < rank`. Operations that remove,
//! insert or reorder axes recompute it; operations that would leave no valid
//! time axis return a [`BaseTensor`] (or [`Reduced::Plain`]) instead.
//!
//! ### SciRS2 Integration
//!
//! Buffers are `scirs2_core::ndarray_ext` arrays and random draws go through
//! `scirs2_core::random`. Direct use of `ndarray` or `rand` is avoided.
//!
//! ### Errors, not panics
//!
//! Every fallible operation returns [`Result`], failing with a
//! [`TimeTensorError`] at the point of detection.
//!
//! ## Quick Start
//!
//! ```
//! use chronors_core::ops::{timetensor, tmean};
//! use chronors_core::{ReduceOptions, TimeDim};
//!
//! // (channel=2, time=3)
//! let x = timetensor(vec![1.0f64, 2.0, 3.0, 10.0, 20.0, 30.0], &[2, 3], TimeDim::Last).unwrap();
//! assert_eq!(x.time_dim(), 1);
//! assert_eq!(x.time_len(), 3);
//!
//! let mean = tmean(&x, ReduceOptions::default()).unwrap();
//! assert!(!mean.is_time());
//! assert_eq!(mean.to_vec(), vec![2.0, 20.0]);
//! ```
//!
//! ## Axis Bookkeeping
//!
//! ```
//! use chronors_core::ops::zeros;
//!
//! let x = zeros::<f32>(&[4, 100, 3], 1).unwrap();
//!
//! // permute moves the time axis with its data
//! let p = x.permute(&[1, 2, 0]).unwrap();
//! assert_eq!(p.time_dim(), 0);
//!
//! // a new leading axis shifts time right
//! let u = x.unsqueeze(0).unwrap();
//! assert_eq!(u.time_dim(), 2);
//!
//! // the time axis itself cannot be squeezed away
//! let one = zeros::<f32>(&[1, 3], 0).unwrap();
//! assert!(one.squeeze_axis(0).is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: serialization of metadata and option types

pub mod base;
pub mod data;
pub mod dtype;
pub mod error;
mod invariants;
pub mod ops;
pub mod options;
pub mod time;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use base::{
    BFloat16BaseTensor, BaseTensor, ByteBaseTensor, CharBaseTensor, ComplexBaseTensor,
    DoubleBaseTensor, FloatBaseTensor, HalfBaseTensor,
};
pub use data::{DataIndexer, DataTensor};
pub use dtype::{DType, Element, FloatElement};
pub use error::{Result, TimeTensorError};
pub use ops::Reduced;
pub use options::{AcfOptions, Correction, DiffBoundary, DiffOptions, ReduceOptions};
pub use time::{
    BFloat16TimeTensor, ByteTimeTensor, CharTimeTensor, ComplexTimeTensor, DoubleTimeTensor,
    FloatTimeTensor, HalfTimeTensor, TimeTensor,
};
pub use types::{Axis, AxisMeta, Rank, Shape, TimeDim};
