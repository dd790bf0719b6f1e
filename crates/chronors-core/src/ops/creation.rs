//! Creation operations.
//!
//! Every function takes the time axis placement explicitly. Pass
//! [`TimeDim::Last`] (or `TimeDim::default()`) for the documented convention
//! that time is the last axis. Range constructors always produce a 1-D tensor
//! whose only axis is time.

use crate::base::BaseTensor;
use crate::dtype::{DType, Element, FloatElement};
use crate::error::{Result, TimeTensorError};
use crate::time::TimeTensor;
use crate::types::TimeDim;
use num_complex::Complex;
use scirs2_core::ndarray_ext::{Array, ArrayD};
use scirs2_core::random::Rng;

/// Build a time tensor from row-major data.
///
/// # Examples
///
/// ```
/// use chronors_core::ops::timetensor;
/// use chronors_core::TimeDim;
///
/// // two channels, three time steps
/// let x = timetensor(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3], TimeDim::Last).unwrap();
/// assert_eq!(x.time_dim(), 1);
/// assert_eq!(x.time_len(), 3);
/// ```
pub fn timetensor<T: Element>(
    data: Vec<T>,
    shape: &[usize],
    time_dim: impl Into<TimeDim>,
) -> Result<TimeTensor<T>> {
    TimeTensor::new(BaseTensor::from_vec(data, shape)?, time_dim)
}

/// Annotate an existing buffer with a time axis, without copying.
pub fn as_timetensor<T: Element>(
    base: BaseTensor<T>,
    time_dim: impl Into<TimeDim>,
) -> Result<TimeTensor<T>> {
    TimeTensor::new(base, time_dim)
}

/// A single series: a 1-D tensor whose only axis is time.
pub fn from_vec<T: Element>(data: Vec<T>) -> TimeTensor<T> {
    let base = BaseTensor::from_array(Array::from_vec(data).into_dyn());
    TimeTensor::from_parts(base, 0)
}

/// Wrap an engine array.
pub fn from_array<T: Element>(
    array: ArrayD<T>,
    time_dim: impl Into<TimeDim>,
) -> Result<TimeTensor<T>> {
    TimeTensor::new(BaseTensor::from_array(array), time_dim)
}

/// Import a raw native-endian buffer, the entry point for externally
/// generated sequences.
///
/// # Errors
///
/// - `DtypeMismatch` if `dtype` is not the element type requested
/// - `ShapeMismatch` if the buffer does not hold exactly one element per
///   position of `shape`
///
/// # Examples
///
/// ```
/// use chronors_core::ops::from_raw_bytes;
/// use chronors_core::{DType, TimeDim};
///
/// let samples = [0.5f32, 1.5, 2.5];
/// let bytes: Vec<u8> = samples.iter().flat_map(|v| v.to_ne_bytes()).collect();
///
/// let x = from_raw_bytes::<f32>(&bytes, DType::F32, &[3], TimeDim::Last).unwrap();
/// assert_eq!(x.to_vec(), samples.to_vec());
///
/// assert!(from_raw_bytes::<f64>(&bytes, DType::F32, &[3], TimeDim::Last).is_err());
/// ```
pub fn from_raw_bytes<T: Element>(
    bytes: &[u8],
    dtype: DType,
    shape: &[usize],
    time_dim: impl Into<TimeDim>,
) -> Result<TimeTensor<T>> {
    if dtype != T::DTYPE {
        return Err(TimeTensorError::DtypeMismatch {
            expected: T::DTYPE,
            got: dtype,
        });
    }
    let width = dtype.element_size();
    let count: usize = shape.iter().product();
    if bytes.len() != count * width {
        return Err(TimeTensorError::ShapeMismatch {
            op: "from_raw_bytes",
            expected: vec![count * width],
            got: vec![bytes.len()],
        });
    }
    let data: Vec<T> = bytes.chunks_exact(width).map(T::from_ne_bytes).collect();
    timetensor(data, shape, time_dim)
}

/// Assemble a dense time tensor from coordinate/value pairs.
///
/// Positions not listed are zero; values at duplicate coordinates are summed.
///
/// # Examples
///
/// ```
/// use chronors_core::ops::sparse_coo_timetensor;
/// use chronors_core::TimeDim;
///
/// let coords = vec![vec![0, 1], vec![1, 3], vec![0, 1]];
/// let x = sparse_coo_timetensor(&coords, &[1.0f64, 2.0, 0.5], &[2, 4], TimeDim::Last).unwrap();
/// assert_eq!(x[&[0, 1]], 1.5);
/// assert_eq!(x[&[1, 3]], 2.0);
/// assert_eq!(x[&[1, 0]], 0.0);
/// ```
pub fn sparse_coo_timetensor<T: Element>(
    indices: &[Vec<usize>],
    values: &[T],
    shape: &[usize],
    time_dim: impl Into<TimeDim>,
) -> Result<TimeTensor<T>> {
    if indices.len() != values.len() {
        return Err(TimeTensorError::ShapeMismatch {
            op: "sparse_coo_timetensor",
            expected: vec![indices.len()],
            got: vec![values.len()],
        });
    }
    let mut dense = BaseTensor::<T>::zeros(shape);
    for (coord, &value) in indices.iter().zip(values) {
        if coord.len() != shape.len() {
            return Err(TimeTensorError::ShapeMismatch {
                op: "sparse_coo_timetensor",
                expected: vec![shape.len()],
                got: vec![coord.len()],
            });
        }
        if let Some((axis, (&index, &len))) = coord
            .iter()
            .zip(shape)
            .enumerate()
            .find(|&(_, (&index, &len))| index >= len)
        {
            return Err(TimeTensorError::IndexOutOfRange { index, axis, len });
        }
        let slot = &mut dense[coord.as_slice()];
        *slot = slot.add_elem(value);
    }
    TimeTensor::new(dense, time_dim)
}

pub fn zeros<T: Element>(shape: &[usize], time_dim: impl Into<TimeDim>) -> Result<TimeTensor<T>> {
    TimeTensor::new(BaseTensor::zeros(shape), time_dim)
}

pub fn ones<T: Element>(shape: &[usize], time_dim: impl Into<TimeDim>) -> Result<TimeTensor<T>> {
    TimeTensor::new(BaseTensor::ones(shape), time_dim)
}

pub fn full<T: Element>(
    shape: &[usize],
    value: T,
    time_dim: impl Into<TimeDim>,
) -> Result<TimeTensor<T>> {
    TimeTensor::new(BaseTensor::full(shape, value), time_dim)
}

/// Allocate a tensor whose contents the caller will overwrite.
///
/// The buffer is zero-filled; no uninitialised memory is exposed.
pub fn empty<T: Element>(shape: &[usize], time_dim: impl Into<TimeDim>) -> Result<TimeTensor<T>> {
    zeros(shape, time_dim)
}

/// Same shape, dtype and time axis as `like`, filled with zeros.
///
/// Use [`TimeTensor::with_time_dim`] or [`TimeTensor::cast`] on the result to
/// override the time axis or the element type.
pub fn zeros_like<T: Element>(like: &TimeTensor<T>) -> TimeTensor<T> {
    full_like(like, T::zero())
}

pub fn ones_like<T: Element>(like: &TimeTensor<T>) -> TimeTensor<T> {
    full_like(like, T::one())
}

pub fn full_like<T: Element>(like: &TimeTensor<T>, value: T) -> TimeTensor<T> {
    TimeTensor::from_parts(BaseTensor::full(like.shape(), value), like.time_dim())
}

pub fn empty_like<T: Element>(like: &TimeTensor<T>) -> TimeTensor<T> {
    zeros_like(like)
}

/// Values `start, start + step, ...` below `end` as a 1-D series.
///
/// # Examples
///
/// ```
/// use chronors_core::ops::arange;
///
/// let t = arange::<f64>(0.0, 1.0, 0.25).unwrap();
/// assert_eq!(t.time_dim(), 0);
/// assert_eq!(t.to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn arange<T: Element>(start: f64, end: f64, step: f64) -> Result<TimeTensor<T>> {
    Ok(TimeTensor::from_parts(
        BaseTensor::arange(start, end, step)?,
        0,
    ))
}

/// `steps` evenly spaced values over `[start, end]` as a 1-D series.
pub fn linspace<T: Element>(start: f64, end: f64, steps: usize) -> Result<TimeTensor<T>> {
    Ok(TimeTensor::from_parts(
        BaseTensor::linspace(start, end, steps)?,
        0,
    ))
}

/// `base^x` for `steps` evenly spaced `x` over `[start, end]` as a 1-D series.
pub fn logspace<T: Element>(
    start: f64,
    end: f64,
    steps: usize,
    base: f64,
) -> Result<TimeTensor<T>> {
    Ok(TimeTensor::from_parts(
        BaseTensor::logspace(start, end, steps, base)?,
        0,
    ))
}

/// Uniform draws in `[0, 1)` from the engine's process-wide generator.
pub fn rand<T: FloatElement>(
    shape: &[usize],
    time_dim: impl Into<TimeDim>,
) -> Result<TimeTensor<T>> {
    TimeTensor::new(BaseTensor::random_uniform(shape, 0.0, 1.0), time_dim)
}

/// Standard normal draws from the engine's process-wide generator.
pub fn randn<T: FloatElement>(
    shape: &[usize],
    time_dim: impl Into<TimeDim>,
) -> Result<TimeTensor<T>> {
    TimeTensor::new(BaseTensor::random_normal(shape, 0.0, 1.0), time_dim)
}

/// Uniform draws in `[0, 1)` from a caller-supplied generator.
///
/// # Examples
///
/// ```
/// use chronors_core::ops::rand_with;
/// use chronors_core::TimeDim;
/// use scirs2_core::random::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let x = rand_with::<f32, _>(&[3, 64], TimeDim::Last, &mut rng).unwrap();
/// assert_eq!(x.time_len(), 64);
/// ```
pub fn rand_with<T: FloatElement, R: Rng>(
    shape: &[usize],
    time_dim: impl Into<TimeDim>,
    rng: &mut R,
) -> Result<TimeTensor<T>> {
    TimeTensor::new(
        BaseTensor::random_uniform_with(shape, 0.0, 1.0, rng),
        time_dim,
    )
}

/// Standard normal draws from a caller-supplied generator.
pub fn randn_with<T: FloatElement, R: Rng>(
    shape: &[usize],
    time_dim: impl Into<TimeDim>,
    rng: &mut R,
) -> Result<TimeTensor<T>> {
    TimeTensor::new(
        BaseTensor::random_normal_with(shape, 0.0, 1.0, rng),
        time_dim,
    )
}

/// Complex tensor from real and imaginary parts of identical layout.
///
/// # Errors
///
/// `TimeDimMismatch` or `ShapeMismatch` if the parts disagree.
pub fn complex<T>(real: &TimeTensor<T>, imag: &TimeTensor<T>) -> Result<TimeTensor<Complex<T>>>
where
    T: FloatElement,
    Complex<T>: Element,
{
    real.zip_map(imag, Complex::new)
}

/// Complex tensor from magnitudes and phase angles (radians).
///
/// # Examples
///
/// ```
/// use chronors_core::ops::{from_vec, polar};
///
/// let abs = from_vec(vec![2.0f64, 1.0]);
/// let angle = from_vec(vec![0.0f64, std::f64::consts::FRAC_PI_2]);
/// let z = polar(&abs, &angle).unwrap();
/// assert!((z[&[0]].re - 2.0).abs() < 1e-12);
/// assert!((z[&[1]].im - 1.0).abs() < 1e-12);
/// ```
pub fn polar<T>(abs: &TimeTensor<T>, angle: &TimeTensor<T>) -> Result<TimeTensor<Complex<T>>>
where
    T: FloatElement,
    Complex<T>: Element,
{
    abs.zip_map(angle, |r, theta| {
        let (r, theta) = (r.to_f64(), theta.to_f64());
        Complex::new(T::from_f64(r * theta.cos()), T::from_f64(r * theta.sin()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::random::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_creation_time_len_matches_shape() {
        for time_dim in 0..3 {
            let x = zeros::<f32>(&[2, 5, 7], time_dim).unwrap();
            assert_eq!(x.time_len(), x.shape()[time_dim]);
        }
        let last = ones::<u8>(&[4, 9], TimeDim::Last).unwrap();
        assert_eq!(last.time_dim(), 1);
        assert!(full(&[3], 2i32, 1).is_err());
    }

    #[test]
    fn test_like_copies_layout() {
        let x = randn::<f64>(&[6, 2], 0).unwrap();
        let z = zeros_like(&x);
        assert_eq!(z.shape(), x.shape());
        assert_eq!(z.time_dim(), 0);
        assert!(empty_like(&x).iter().all(|&v| v == 0.0));
        assert!(ones_like(&x).iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_ranges_are_time_series() {
        let l = linspace::<f32>(0.0, 1.0, 5).unwrap();
        assert_eq!((l.rank(), l.time_dim(), l.time_len()), (1, 0, 5));
        let g = logspace::<f64>(0.0, 2.0, 3, 2.0).unwrap();
        assert_eq!(g.to_vec(), vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_raw_bytes_length_mismatch() {
        let bytes = vec![0u8; 7];
        assert!(matches!(
            from_raw_bytes::<u8>(&bytes, DType::U8, &[2, 4], TimeDim::Last),
            Err(TimeTensorError::ShapeMismatch { .. })
        ));
        let x = from_raw_bytes::<u8>(&bytes, DType::U8, &[7], TimeDim::Last).unwrap();
        assert_eq!(x.time_len(), 7);
    }

    #[test]
    fn test_sparse_coo_rejects_out_of_range() {
        let coords = vec![vec![0, 5]];
        assert!(matches!(
            sparse_coo_timetensor(&coords, &[1.0f32], &[2, 5], TimeDim::Last),
            Err(TimeTensorError::IndexOutOfRange {
                index: 5,
                axis: 1,
                len: 5
            })
        ));
    }

    #[test]
    fn test_sparse_coo_sums_duplicates_on_time_axis() {
        // (time=3, channel=2)
        let coords = vec![vec![2, 1], vec![0, 0], vec![2, 1]];
        let x = sparse_coo_timetensor(&coords, &[4i64, 7, -1], &[3, 2], 0).unwrap();
        assert_eq!(x.time_dim(), 0);
        assert_eq!(x.to_vec(), vec![7, 0, 0, 0, 0, 3]);
    }

    #[test]
    fn test_complex_parts() {
        let re = from_vec(vec![1.0f32, 2.0]);
        let im = from_vec(vec![-1.0f32, 0.5]);
        let z = complex(&re, &im).unwrap();
        assert_eq!(z.to_vec(), vec![Complex::new(1.0, -1.0), Complex::new(2.0, 0.5)]);
        assert_eq!(z.dtype(), DType::Complex64);
    }

    #[test]
    fn test_seeded_randn_reproducible() {
        let a = randn_with::<f64, _>(&[16], 0, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = randn_with::<f64, _>(&[16], 0, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
        let u = rand_with::<f64, _>(&[16], 0, &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(u.iter().all(|&v| (0.0..1.0).contains(&v)));
    }
}
