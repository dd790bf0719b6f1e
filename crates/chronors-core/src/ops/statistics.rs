//! Reductions along an axis and cross-channel statistics.
//!
//! Reductions default to the time axis. Whether time survives decides the
//! result kind: a [`Reduced::Time`] tensor when it does, a
//! [`Reduced::Plain`] buffer when it was reduced away.
//!
//! # Examples
//!
//! ```
//! use chronors_core::ops::{from_vec, tmean, tvar};
//! use chronors_core::{Correction, ReduceOptions};
//!
//! let x = from_vec(vec![1.0f64, 2.0, 3.0, 4.0, 5.0]);
//!
//! let mean = tmean(&x, ReduceOptions::default()).unwrap();
//! assert_eq!(mean.into_base().item(), Some(3.0));
//!
//! let var = tvar(&x, ReduceOptions::default().with_correction(Correction::Biased)).unwrap();
//! assert_eq!(var.into_base().item(), Some(2.0));
//! ```

use super::channels::Channels;
use super::kernels;
use crate::base::BaseTensor;
use crate::dtype::{Element, FloatElement};
use crate::error::{Result, TimeTensorError};
use crate::invariants::{check_axis, time_dim_after_remove};
use crate::options::{Correction, ReduceOptions};
use crate::time::TimeTensor;
use scirs2_core::ndarray_ext::Axis;

/// Result of a reduction: time survives, or it does not.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduced<T: Element> {
    /// The time axis is still present (possibly with length 1)
    Time(TimeTensor<T>),
    /// The time axis was reduced away
    Plain(BaseTensor<T>),
}

impl<T: Element> Reduced<T> {
    pub fn shape(&self) -> &[usize] {
        match self {
            Reduced::Time(t) => t.shape(),
            Reduced::Plain(b) => b.shape(),
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        match self {
            Reduced::Time(t) => t.to_vec(),
            Reduced::Plain(b) => b.to_vec(),
        }
    }

    pub fn into_base(self) -> BaseTensor<T> {
        match self {
            Reduced::Time(t) => t.into_base(),
            Reduced::Plain(b) => b,
        }
    }

    pub fn as_time(&self) -> Option<&TimeTensor<T>> {
        match self {
            Reduced::Time(t) => Some(t),
            Reduced::Plain(_) => None,
        }
    }

    pub fn is_time(&self) -> bool {
        matches!(self, Reduced::Time(_))
    }
}

fn reduce<T, F>(
    op: &'static str,
    x: &TimeTensor<T>,
    opts: ReduceOptions,
    min_len: usize,
    kernel: F,
) -> Result<Reduced<T>>
where
    T: FloatElement,
    F: Fn(&[f64]) -> f64,
{
    let dim = opts.dim.unwrap_or(x.time_dim());
    check_axis(dim, x.rank())?;
    let available = x.shape()[dim];
    if available < min_len {
        return Err(TimeTensorError::InsufficientLength {
            op,
            required: min_len,
            available,
        });
    }
    tracing::trace!(op, dim, keepdim = opts.keepdim, "reduce");

    let mut reduced = x.data().as_array().map_axis(Axis(dim), |lane| {
        let values: Vec<f64> = lane.iter().map(|v| v.to_f64()).collect();
        T::from_f64(kernel(&values))
    });
    if opts.keepdim {
        reduced = reduced.insert_axis(Axis(dim));
    }
    let data = BaseTensor::from_array(reduced);

    let time_dim = x.time_dim();
    Ok(match (dim == time_dim, opts.keepdim) {
        (true, false) => Reduced::Plain(data),
        (true, true) | (false, true) => Reduced::Time(TimeTensor::from_parts(data, time_dim)),
        (false, false) => Reduced::Time(TimeTensor::from_parts(
            data,
            time_dim_after_remove(time_dim, dim),
        )),
    })
}

/// Arithmetic mean along `opts.dim` (the time axis by default).
///
/// # Errors
///
/// `InsufficientLength` when the reduced axis is empty.
pub fn tmean<T: FloatElement>(x: &TimeTensor<T>, opts: ReduceOptions) -> Result<Reduced<T>> {
    reduce("tmean", x, opts, 1, kernels::mean)
}

/// Variance along `opts.dim` with the denominator chosen by `opts.correction`.
///
/// # Errors
///
/// `InsufficientLength` when the axis has no more samples than the
/// correction subtracts.
pub fn tvar<T: FloatElement>(x: &TimeTensor<T>, opts: ReduceOptions) -> Result<Reduced<T>> {
    let ddof = opts.correction.ddof();
    reduce("tvar", x, opts, ddof + 1, |xs| kernels::variance(xs, ddof))
}

/// Standard deviation; the square root of [`tvar`].
pub fn tstd<T: FloatElement>(x: &TimeTensor<T>, opts: ReduceOptions) -> Result<Reduced<T>> {
    let ddof = opts.correction.ddof();
    reduce("tstd", x, opts, ddof + 1, |xs| {
        kernels::variance(xs, ddof).sqrt()
    })
}

/// Covariance matrix between channels, with time as the sample axis.
///
/// Every non-time axis is flattened (row-major) into `C` channels; the result
/// is a plain `C x C` tensor.
///
/// # Examples
///
/// ```
/// use chronors_core::ops::{cov, timetensor};
/// use chronors_core::{Correction, TimeDim};
///
/// // two channels over four time steps; the second is twice the first
/// let x = timetensor(vec![1.0f64, 2.0, 3.0, 4.0, 2.0, 4.0, 6.0, 8.0], &[2, 4], TimeDim::Last).unwrap();
/// let c = cov(&x, Correction::Biased).unwrap();
/// assert_eq!(c.shape(), &[2, 2]);
/// assert_eq!(c[&[0, 0]], 1.25);
/// assert_eq!(c[&[0, 1]], 2.5);
/// assert_eq!(c[&[1, 1]], 5.0);
/// ```
pub fn cov<T: FloatElement>(x: &TimeTensor<T>, correction: Correction) -> Result<BaseTensor<T>> {
    let ddof = correction.ddof();
    x.require_time_steps("cov", ddof + 1)?;
    tracing::trace!(time_len = x.time_len(), ddof, "cov");
    let channels = Channels::from_time_tensor(x)?;
    let series = &channels.series;
    pairwise(channels.count(), |i, j| {
        kernels::covariance(&series[i], &series[j], ddof)
    })
}

/// Pearson correlation matrix between channels, with time as the sample axis.
///
/// # Errors
///
/// - `InsufficientLength` with fewer than two time steps
/// - `ZeroVariance` if a channel is constant
pub fn cor<T: FloatElement>(x: &TimeTensor<T>) -> Result<BaseTensor<T>> {
    x.require_time_steps("cor", 2)?;
    tracing::trace!(time_len = x.time_len(), "cor");
    let channels = Channels::from_time_tensor(x)?;
    let stds: Vec<f64> = channels
        .series
        .iter()
        .map(|s| kernels::variance(s, 0).sqrt())
        .collect();
    if let Some(channel) = stds.iter().position(|&s| s == 0.0) {
        return Err(TimeTensorError::ZeroVariance { op: "cor", channel });
    }
    let series = &channels.series;
    pairwise(channels.count(), |i, j| {
        kernels::covariance(&series[i], &series[j], 0) / (stds[i] * stds[j])
    })
}

fn pairwise<T, F>(count: usize, f: F) -> Result<BaseTensor<T>>
where
    T: Element,
    F: Fn(usize, usize) -> f64,
{
    let data: Vec<T> = (0..count)
        .flat_map(|i| (0..count).map(move |j| (i, j)))
        .map(|(i, j)| T::from_f64(f(i, j)))
        .collect();
    BaseTensor::from_vec(data, &[count, count])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{from_vec, timetensor};
    use crate::types::TimeDim;
    use approx::assert_relative_eq;

    fn batch() -> TimeTensor<f64> {
        // (channel=2, time=3)
        timetensor(vec![1.0, 2.0, 3.0, 10.0, 20.0, 60.0], &[2, 3], TimeDim::Last).unwrap()
    }

    #[test]
    fn test_tmean_over_time_is_plain() {
        let m = tmean(&batch(), ReduceOptions::default()).unwrap();
        assert!(!m.is_time());
        assert_eq!(m.shape(), &[2]);
        assert_eq!(m.to_vec(), vec![2.0, 30.0]);
    }

    #[test]
    fn test_tmean_keepdim_keeps_time() {
        let m = tmean(&batch(), ReduceOptions::default().with_keepdim(true)).unwrap();
        let t = m.as_time().unwrap();
        assert_eq!(t.shape(), &[2, 1]);
        assert_eq!(t.time_dim(), 1);
        assert_eq!(t.time_len(), 1);
    }

    #[test]
    fn test_reduce_other_axis_shifts_time() {
        let m = tmean(&batch(), ReduceOptions::default().with_dim(0)).unwrap();
        let t = m.as_time().unwrap();
        assert_eq!(t.shape(), &[3]);
        assert_eq!(t.time_dim(), 0);
        assert_eq!(t.to_vec(), vec![5.5, 11.0, 31.5]);
    }

    #[test]
    fn test_tvar_and_tstd_corrections() {
        let x = from_vec(vec![2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let biased = ReduceOptions::default().with_correction(Correction::Biased);
        assert_eq!(tvar(&x, biased).unwrap().to_vec(), vec![4.0]);
        assert_eq!(tstd(&x, biased).unwrap().to_vec(), vec![2.0]);
        let unbiased = tvar(&x, ReduceOptions::default()).unwrap().to_vec()[0];
        assert_relative_eq!(unbiased, 32.0 / 7.0);
    }

    #[test]
    fn test_tvar_needs_two_samples_unbiased() {
        let x = from_vec(vec![1.0f32]);
        assert!(matches!(
            tvar(&x, ReduceOptions::default()),
            Err(TimeTensorError::InsufficientLength { required: 2, .. })
        ));
        assert!(tvar(&x, ReduceOptions::default().with_correction(Correction::Biased)).is_ok());
        assert!(tmean(&from_vec(Vec::<f32>::new()), ReduceOptions::default()).is_err());
    }

    #[test]
    fn test_cor_unit_diagonal() {
        let c = cor(&batch()).unwrap();
        assert_relative_eq!(c[&[0, 0]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(c[&[1, 1]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(c[&[0, 1]], c[&[1, 0]], epsilon = 1e-12);
        assert!(c[&[0, 1]] > 0.9);
    }

    #[test]
    fn test_cor_constant_channel() {
        let x = timetensor(vec![1.0f64, 1.0, 1.0, 0.0, 1.0, 2.0], &[2, 3], TimeDim::Last).unwrap();
        assert!(matches!(
            cor(&x),
            Err(TimeTensorError::ZeroVariance { op: "cor", channel: 0 })
        ));
    }

    #[test]
    fn test_cov_time_first_layout() {
        // (time=4, channel=2) gives the same matrix as the transposed layout
        let x = timetensor(vec![1.0f64, 2.0, 2.0, 4.0, 3.0, 6.0, 4.0, 8.0], &[4, 2], 0).unwrap();
        let c = cov(&x, Correction::Unbiased).unwrap();
        assert_relative_eq!(c[&[0, 0]], 5.0 / 3.0);
        assert_relative_eq!(c[&[0, 1]], 10.0 / 3.0);
    }
}
