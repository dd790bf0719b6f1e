//! Strided reinterpretation of a buffer.
//!
//! Strides are in elements and address the row-major (logical order) buffer of
//! the source tensor. Results are materialised in row-major layout.

use crate::base::BaseTensor;
use crate::dtype::Element;
use crate::error::{Result, TimeTensorError};
use crate::time::TimeTensor;
use crate::types::TimeDim;

fn check_stride_rank(shape: &[usize], strides: &[usize]) -> Result<()> {
    if shape.len() != strides.len() {
        return Err(TimeTensorError::ShapeMismatch {
            op: "as_strided",
            expected: shape.to_vec(),
            got: strides.to_vec(),
        });
    }
    Ok(())
}

/// Number of buffer elements a `(shape, strides, offset)` view reaches.
///
/// Zero when the view is empty.
pub fn strided_extent(shape: &[usize], strides: &[usize], offset: usize) -> usize {
    if shape.contains(&0) {
        return 0;
    }
    offset
        + 1
        + shape
            .iter()
            .zip(strides)
            .map(|(&len, &stride)| (len - 1) * stride)
            .sum::<usize>()
}

/// Buffer positions visited by the view, in row-major order of `shape`.
fn strided_positions(shape: &[usize], strides: &[usize], offset: usize) -> Vec<usize> {
    let count: usize = shape.iter().product();
    let mut positions = Vec::with_capacity(count);
    let mut index = vec![0usize; shape.len()];
    for _ in 0..count {
        positions.push(
            offset
                + index
                    .iter()
                    .zip(strides)
                    .map(|(&i, &stride)| i * stride)
                    .sum::<usize>(),
        );
        for axis in (0..shape.len()).rev() {
            index[axis] += 1;
            if index[axis] < shape[axis] {
                break;
            }
            index[axis] = 0;
        }
    }
    positions
}

/// Reinterpret the elements of `x` with a new shape, strides, offset and
/// time axis.
///
/// Only the rank agreement of `shape` and `strides` and the validity of
/// `time_dim` are checked. Overlapping views are allowed.
///
/// # Safety
///
/// The caller must guarantee that every position the view reaches lies
/// inside the source, i.e. `strided_extent(shape, strides, offset) <= x.len()`.
/// Reading past it is undefined behaviour.
///
/// # Examples
///
/// ```
/// use chronors_core::ops::{as_strided, from_vec, strided_extent};
///
/// // overlapping sliding windows of length 3 over a series of 5
/// let x = from_vec(vec![0.0f64, 1.0, 2.0, 3.0, 4.0]);
/// assert!(strided_extent(&[3, 3], &[1, 1], 0) <= x.len());
/// let windows = unsafe { as_strided(&x, &[3, 3], &[1, 1], 0, 0) }.unwrap();
/// assert_eq!(windows.to_vec(), vec![0.0, 1.0, 2.0, 1.0, 2.0, 3.0, 2.0, 3.0, 4.0]);
/// assert_eq!(windows.time_len(), 3);
/// ```
pub unsafe fn as_strided<T: Element>(
    x: &TimeTensor<T>,
    shape: &[usize],
    strides: &[usize],
    offset: usize,
    time_dim: impl Into<TimeDim>,
) -> Result<TimeTensor<T>> {
    check_stride_rank(shape, strides)?;
    let time_dim = time_dim.into().resolve(shape.len())?;
    tracing::trace!(?shape, ?strides, offset, time_dim, "as_strided");

    let flat = x.to_vec();
    let data: Vec<T> = strided_positions(shape, strides, offset)
        .into_iter()
        // SAFETY: the caller guarantees every position is below x.len()
        .map(|pos| unsafe { *flat.get_unchecked(pos) })
        .collect();
    Ok(TimeTensor::from_parts(
        BaseTensor::from_vec(data, shape)?,
        time_dim,
    ))
}

/// Zero-filled tensor laid out by `strides`.
///
/// A backing buffer of exactly [`strided_extent`] elements is allocated and
/// read through the strides, so the result is always initialised.
pub fn empty_strided<T: Element>(
    shape: &[usize],
    strides: &[usize],
    time_dim: impl Into<TimeDim>,
) -> Result<TimeTensor<T>> {
    check_stride_rank(shape, strides)?;
    let time_dim = time_dim.into().resolve(shape.len())?;
    let backing = vec![T::zero(); strided_extent(shape, strides, 0)];
    let data: Vec<T> = strided_positions(shape, strides, 0)
        .into_iter()
        .map(|pos| backing[pos])
        .collect();
    Ok(TimeTensor::from_parts(
        BaseTensor::from_vec(data, shape)?,
        time_dim,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::timetensor;

    #[test]
    fn test_extent() {
        assert_eq!(strided_extent(&[2, 3], &[3, 1], 0), 6);
        assert_eq!(strided_extent(&[2, 3], &[1, 2], 1), 7);
        assert_eq!(strided_extent(&[0, 3], &[3, 1], 4), 0);
    }

    #[test]
    fn test_as_strided_transposes() {
        let x = timetensor(vec![1, 2, 3, 4, 5, 6], &[2, 3], TimeDim::Last).unwrap();
        let t = unsafe { as_strided(&x, &[3, 2], &[1, 3], 0, 0) }.unwrap();
        assert_eq!(t.to_vec(), vec![1, 4, 2, 5, 3, 6]);
        assert_eq!(t.time_dim(), 0);
    }

    #[test]
    fn test_as_strided_validates_metadata() {
        let x = timetensor(vec![1, 2, 3], &[3], TimeDim::Last).unwrap();
        assert!(unsafe { as_strided(&x, &[3], &[1, 1], 0, 0) }.is_err());
        assert!(unsafe { as_strided(&x, &[3], &[1], 0, 1) }.is_err());
    }

    #[test]
    fn test_empty_strided_zero_filled() {
        let e = empty_strided::<f32>(&[4, 2], &[1, 4], TimeDim::Last).unwrap();
        assert_eq!(e.shape(), &[4, 2]);
        assert_eq!(e.time_dim(), 1);
        assert!(e.iter().all(|&v| v == 0.0));
    }
}
