//! Operations over time tensors.
//!
//! All operations are pure: they read their inputs and return new tensors.
//! Axis-changing methods (permute, unsqueeze, ...) live on
//! [`TimeTensor`](crate::TimeTensor); everything else is a free function here.
//!
//! # Available Operations
//!
//! ## Creation
//!
//! - [`timetensor`], [`as_timetensor`], [`from_vec`], [`from_array`], [`from_raw_bytes`]
//! - [`sparse_coo_timetensor`]: dense tensor from coordinate/value pairs
//! - [`zeros`], [`ones`], [`full`], [`empty`] and their `*_like` variants
//! - [`arange`], [`linspace`], [`logspace`]: always 1-D with `time_dim = 0`
//! - [`rand`], [`randn`], [`rand_with`], [`randn_with`]
//! - [`complex`], [`polar`]
//! - [`quantize_per_timetensor`], [`quantize_per_channel`], [`dequantize`]
//! - [`as_strided`] (unsafe), [`empty_strided`]
//!
//! ## Structural
//!
//! - [`cat`]: along any axis, time axis position must agree
//! - [`tcat`]: along the time axis; time lengths add up
//! - [`stack`]: along a new axis
//! - [`tindex_select`], [`index_select`]
//!
//! ## Reductions
//!
//! - [`tmean`], [`tvar`], [`tstd`]: return [`Reduced`]
//! - [`cov`], [`cor`]: channel x channel matrices
//!
//! ## Series
//!
//! - [`diff`]: n-th order differences with an explicit boundary policy
//! - [`autocovariance`], [`acf`]
//!
//! # Examples
//!
//! ```
//! use chronors_core::ops::{diff, from_vec, tcat, tmean};
//! use chronors_core::{DiffOptions, ReduceOptions};
//!
//! let x = from_vec(vec![1.0f64, 2.0, 3.0, 4.0, 5.0]);
//!
//! let mean = tmean(&x, ReduceOptions::default()).unwrap();
//! assert_eq!(mean.to_vec(), vec![3.0]);
//!
//! let d = diff(&x, DiffOptions::default()).unwrap();
//! assert_eq!(d.to_vec(), vec![1.0, 1.0, 1.0, 1.0]);
//!
//! let y = tcat(&[x, from_vec(vec![6.0, 7.0])]).unwrap();
//! assert_eq!(y.time_len(), 7);
//! ```

mod channels;
mod creation;
pub(crate) mod kernels;
mod quantize;
mod series;
mod statistics;
mod strided;
mod structural;

pub use creation::{
    arange, as_timetensor, complex, empty, empty_like, from_array, from_raw_bytes, from_vec,
    full, full_like, linspace, logspace, ones, ones_like, polar, rand, rand_with, randn,
    randn_with, sparse_coo_timetensor, timetensor, zeros, zeros_like,
};
pub use quantize::{
    dequantize, quantize_per_channel, quantize_per_timetensor, QDType, QScheme,
    QuantizedTimeTensor,
};
pub use series::{acf, autocovariance, diff};
pub use statistics::{cor, cov, tmean, tstd, tvar, Reduced};
pub use strided::{as_strided, empty_strided, strided_extent};
pub use structural::{cat, index_select, stack, tcat, tindex_select};
