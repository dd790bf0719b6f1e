//! Series operations: differencing and autocorrelation along the time axis.
//!
//! Each channel (every combination of non-time indices) is processed as an
//! independent series.

use super::channels::Channels;
use super::kernels;
use crate::base::BaseTensor;
use crate::dtype::FloatElement;
use crate::error::{Result, TimeTensorError};
use crate::options::{AcfOptions, DiffBoundary, DiffOptions};
use crate::time::TimeTensor;

/// Successive differences along the time axis.
///
/// Order `n` applies the first difference `n` times. Under
/// [`DiffBoundary::Drop`] the time length shrinks by `n`; under
/// [`DiffBoundary::Pad`] it is unchanged and the first `n` steps hold the fill
/// value.
///
/// # Errors
///
/// `InsufficientLength` unless `time_len > order`.
///
/// # Examples
///
/// ```
/// use chronors_core::ops::{diff, from_vec};
/// use chronors_core::{DiffBoundary, DiffOptions};
///
/// let x = from_vec(vec![1.0f64, 2.0, 4.0, 7.0, 11.0]);
///
/// let d = diff(&x, DiffOptions::default()).unwrap();
/// assert_eq!(d.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(d.time_len(), 4);
///
/// let padded = diff(&x, DiffOptions::default().with_order(2).with_boundary(DiffBoundary::Pad(f64::NAN))).unwrap();
/// assert_eq!(padded.time_len(), 5);
/// assert!(padded[&[0]].is_nan() && padded[&[1]].is_nan());
/// assert_eq!(padded[&[4]], 1.0);
/// ```
pub fn diff<T: FloatElement>(x: &TimeTensor<T>, opts: DiffOptions) -> Result<TimeTensor<T>> {
    x.require_time_steps("diff", opts.order.saturating_add(1))?;
    tracing::trace!(order = opts.order, boundary = ?opts.boundary, "diff");

    let channels = Channels::from_time_tensor(x)?;
    let differenced: Vec<Vec<f64>> = channels
        .series
        .iter()
        .map(|s| {
            let dropped = kernels::difference(s, opts.order);
            match opts.boundary {
                DiffBoundary::Drop => dropped,
                DiffBoundary::Pad(fill) => {
                    let mut padded = vec![fill; opts.order];
                    padded.extend(dropped);
                    padded
                }
            }
        })
        .collect();

    let len = match opts.boundary {
        DiffBoundary::Drop => x.time_len() - opts.order,
        DiffBoundary::Pad(_) => x.time_len(),
    };
    let data = channels.assemble(&differenced, len)?;
    Ok(TimeTensor::from_parts(data, x.time_dim()))
}

/// Biased autocovariance at lags `0..=max_lag`.
///
/// The time axis of the result is replaced by a lag axis of length
/// `max_lag + 1` at the same position.
///
/// # Errors
///
/// `InsufficientLength` unless `time_len > max_lag`.
pub fn autocovariance<T: FloatElement>(x: &TimeTensor<T>, max_lag: usize) -> Result<BaseTensor<T>> {
    x.require_time_steps("autocovariance", max_lag.saturating_add(1))?;
    let channels = Channels::from_time_tensor(x)?;
    let lags: Vec<Vec<f64>> = channels
        .series
        .iter()
        .map(|s| kernels::autocovariance(s, max_lag, false))
        .collect();
    channels.assemble(&lags, max_lag + 1)
}

/// Autocorrelation coefficients at lags `0..=max_lag`, lag 0 equal to 1.
///
/// Lag `k` is the lag-`k` autocovariance divided by the lag-0 one. With
/// `adjusted` the lag-`k` sum is divided by `N - k` rather than `N`.
///
/// # Errors
///
/// - `InsufficientLength` if `time_len <= max_lag`
/// - `ZeroVariance` if a channel is constant
///
/// # Examples
///
/// ```
/// use chronors_core::ops::{acf, from_vec};
/// use chronors_core::AcfOptions;
///
/// let x = from_vec(vec![1.0f64, 3.0, 2.0, 5.0, 4.0]);
/// let r = acf(&x, AcfOptions::new(2)).unwrap();
/// assert_eq!(r.shape(), &[3]);
/// assert!((r[&[0]] - 1.0).abs() < 1e-12);
///
/// assert!(acf(&x, AcfOptions::new(5)).is_err());
/// ```
pub fn acf<T: FloatElement>(x: &TimeTensor<T>, opts: AcfOptions) -> Result<BaseTensor<T>> {
    x.require_time_steps("acf", opts.max_lag.saturating_add(1))?;
    tracing::trace!(max_lag = opts.max_lag, adjusted = opts.adjusted, "acf");

    let channels = Channels::from_time_tensor(x)?;
    let coefficients = channels
        .series
        .iter()
        .enumerate()
        .map(|(channel, s)| {
            let acov = kernels::autocovariance(s, opts.max_lag, opts.adjusted);
            let c0 = acov[0];
            if c0 == 0.0 {
                return Err(TimeTensorError::ZeroVariance { op: "acf", channel });
            }
            Ok(acov.into_iter().map(|c| c / c0).collect())
        })
        .collect::<Result<Vec<Vec<f64>>>>()?;
    channels.assemble(&coefficients, opts.max_lag + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{from_vec, timetensor, zeros};
    use crate::types::TimeDim;
    use approx::assert_relative_eq;

    #[test]
    fn test_diff_multichannel_time_first() {
        // (time=3, channel=2)
        let x = timetensor(vec![0.0f32, 10.0, 1.0, 20.0, 3.0, 40.0], &[3, 2], 0).unwrap();
        let d = diff(&x, DiffOptions::default()).unwrap();
        assert_eq!(d.shape(), &[2, 2]);
        assert_eq!(d.time_dim(), 0);
        assert_eq!(d.to_vec(), vec![1.0, 10.0, 2.0, 20.0]);
    }

    #[test]
    fn test_diff_requires_more_steps_than_order() {
        let x = from_vec(vec![1.0f64, 2.0]);
        assert!(matches!(
            diff(&x, DiffOptions::default().with_order(2)),
            Err(TimeTensorError::InsufficientLength {
                op: "diff",
                required: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn test_huge_order_and_lag_are_insufficient_length() {
        let x = from_vec(vec![1.0f64, 2.0, 3.0]);
        assert!(matches!(
            diff(&x, DiffOptions::default().with_order(usize::MAX)),
            Err(TimeTensorError::InsufficientLength { op: "diff", available: 3, .. })
        ));
        assert!(matches!(
            acf(&x, AcfOptions::new(usize::MAX)),
            Err(TimeTensorError::InsufficientLength { op: "acf", available: 3, .. })
        ));
        assert!(matches!(
            autocovariance(&x, usize::MAX),
            Err(TimeTensorError::InsufficientLength { op: "autocovariance", .. })
        ));
    }

    #[test]
    fn test_no_channels_keep_series_axis_length() {
        let x = zeros::<f64>(&[0, 5], 1).unwrap();

        let d = diff(&x, DiffOptions::default()).unwrap();
        assert_eq!(d.shape(), &[0, 4]);
        assert_eq!(d.time_len(), 4);

        let padded = diff(&x, DiffOptions::default().with_boundary(DiffBoundary::Pad(0.0))).unwrap();
        assert_eq!(padded.time_len(), 5);

        assert_eq!(acf(&x, AcfOptions::new(2)).unwrap().shape(), &[0, 3]);
        assert_eq!(autocovariance(&x, 2).unwrap().shape(), &[0, 3]);
    }

    #[test]
    fn test_acf_lag_axis_replaces_time() {
        let x = timetensor(
            vec![1.0f64, 2.0, 1.0, 2.0, 1.0, 5.0, 3.0, 4.0, 1.0, 2.0],
            &[2, 5],
            TimeDim::Last,
        )
        .unwrap();
        let r = acf(&x, AcfOptions::new(3)).unwrap();
        assert_eq!(r.shape(), &[2, 4]);
        assert_relative_eq!(r[&[0, 0]], 1.0);
        assert_relative_eq!(r[&[1, 0]], 1.0);
        // alternating series: negative lag-1 correlation
        assert!(r[&[0, 1]] < 0.0);
    }

    #[test]
    fn test_acf_constant_series() {
        let x = from_vec(vec![2.0f64; 6]);
        assert!(matches!(
            acf(&x, AcfOptions::new(2)),
            Err(TimeTensorError::ZeroVariance { op: "acf", channel: 0 })
        ));
    }

    #[test]
    fn test_autocovariance_lag_zero_matches_biased_variance() {
        let x = from_vec(vec![2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let acov = autocovariance(&x, 1).unwrap();
        assert_relative_eq!(acov[&[0]], 4.0);
    }
}
