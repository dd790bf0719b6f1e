//! Structural operations: concatenation, stacking and selection.
//!
//! Inputs to every multi-tensor operation must agree on the time axis position;
//! the result carries that position, shifted when a new axis is inserted before it.

use crate::base::BaseTensor;
use crate::dtype::Element;
use crate::error::{Result, TimeTensorError};
use crate::invariants::{check_same_time_dim, time_dim_after_insert};
use crate::time::TimeTensor;

fn common_time_dim<T: Element>(op: &'static str, tensors: &[TimeTensor<T>]) -> Result<usize> {
    let first = tensors.first().ok_or(TimeTensorError::EmptyInput { op })?;
    for tensor in &tensors[1..] {
        check_same_time_dim(op, first.time_dim(), tensor.time_dim())?;
    }
    Ok(first.time_dim())
}

fn bases<T: Element>(tensors: &[TimeTensor<T>]) -> Vec<BaseTensor<T>> {
    tensors.iter().map(|t| t.data().clone()).collect()
}

/// Concatenate along axis `dim`.
///
/// # Errors
///
/// - `EmptyInput` for an empty list
/// - `TimeDimMismatch` if the inputs place time differently
/// - `InvalidAxis` if `dim` is out of range
/// - `ShapeMismatch` if any axis other than `dim` differs
///
/// # Examples
///
/// ```
/// use chronors_core::ops::{cat, zeros};
/// use chronors_core::TimeDim;
///
/// // concatenate channels of two (channel, time) tensors
/// let a = zeros::<f32>(&[2, 10], TimeDim::Last).unwrap();
/// let b = zeros::<f32>(&[3, 10], TimeDim::Last).unwrap();
/// let c = cat(&[a, b], 0).unwrap();
/// assert_eq!(c.shape(), &[5, 10]);
/// assert_eq!(c.time_len(), 10);
/// ```
pub fn cat<T: Element>(tensors: &[TimeTensor<T>], dim: usize) -> Result<TimeTensor<T>> {
    let time_dim = common_time_dim("cat", tensors)?;
    tracing::trace!(count = tensors.len(), dim, time_dim, "cat");
    let data = BaseTensor::concatenate(&bases(tensors), dim)?;
    Ok(TimeTensor::from_parts(data, time_dim))
}

/// Concatenate along the time axis.
///
/// The result's time length is the sum of the inputs' time lengths.
///
/// # Examples
///
/// ```
/// use chronors_core::ops::{from_vec, tcat};
///
/// let a = from_vec(vec![1, 2, 3, 4, 5]);
/// let b = from_vec(vec![6, 7]);
/// let c = tcat(&[a, b]).unwrap();
/// assert_eq!(c.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(c.time_len(), 7);
/// ```
pub fn tcat<T: Element>(tensors: &[TimeTensor<T>]) -> Result<TimeTensor<T>> {
    let time_dim = common_time_dim("tcat", tensors)?;
    cat(tensors, time_dim)
}

/// Stack tensors of identical shape along a new axis `dim`.
///
/// # Examples
///
/// ```
/// use chronors_core::ops::{ones, stack};
/// use chronors_core::TimeDim;
///
/// let series = vec![ones::<f64>(&[100], TimeDim::Last).unwrap(); 4];
/// let batch = stack(&series, 0).unwrap();
/// assert_eq!(batch.shape(), &[4, 100]);
/// assert_eq!(batch.time_dim(), 1);
/// ```
pub fn stack<T: Element>(tensors: &[TimeTensor<T>], dim: usize) -> Result<TimeTensor<T>> {
    let time_dim = common_time_dim("stack", tensors)?;
    tracing::trace!(count = tensors.len(), dim, time_dim, "stack");
    let data = BaseTensor::stack(&bases(tensors), dim)?;
    Ok(TimeTensor::from_parts(
        data,
        time_dim_after_insert(time_dim, dim),
    ))
}

/// Select time steps in the given order. See [`TimeTensor::tindex_select`].
pub fn tindex_select<T: Element>(x: &TimeTensor<T>, indices: &[usize]) -> Result<TimeTensor<T>> {
    x.tindex_select(indices)
}

/// Select positions along axis `dim`. See [`TimeTensor::index_select`].
pub fn index_select<T: Element>(
    x: &TimeTensor<T>,
    dim: usize,
    indices: &[usize],
) -> Result<TimeTensor<T>> {
    x.index_select(dim, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{from_vec, timetensor, zeros};
    use crate::types::TimeDim;

    #[test]
    fn test_tcat_sums_time_lengths() {
        let a = zeros::<f64>(&[2, 5], TimeDim::Last).unwrap();
        let b = zeros::<f64>(&[2, 3], TimeDim::Last).unwrap();
        let c = tcat(&[a, b]).unwrap();
        assert_eq!(c.time_len(), 8);
        assert_eq!(c.shape(), &[2, 8]);
    }

    #[test]
    fn test_tcat_time_dim_mismatch() {
        let a = zeros::<f64>(&[3, 3], 0).unwrap();
        let b = zeros::<f64>(&[3, 3], 1).unwrap();
        assert!(matches!(
            tcat(&[a, b]),
            Err(TimeTensorError::TimeDimMismatch {
                op: "tcat",
                expected: 0,
                got: 1
            })
        ));
    }

    #[test]
    fn test_tcat_shape_mismatch() {
        let a = zeros::<f64>(&[2, 5], TimeDim::Last).unwrap();
        let b = zeros::<f64>(&[3, 5], TimeDim::Last).unwrap();
        assert!(matches!(
            tcat(&[a, b]),
            Err(TimeTensorError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_tcat_empty() {
        let none: Vec<TimeTensor<f32>> = Vec::new();
        assert!(matches!(
            tcat(&none),
            Err(TimeTensorError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_stack_after_time_axis() {
        let a = timetensor(vec![1, 2, 3], &[3], 0).unwrap();
        let b = timetensor(vec![4, 5, 6], &[3], 0).unwrap();
        let s = stack(&[a, b], 1).unwrap();
        assert_eq!(s.shape(), &[3, 2]);
        assert_eq!(s.time_dim(), 0);
        assert_eq!(s.to_vec(), vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_index_select_keeps_time() {
        let x = timetensor((0..6).collect::<Vec<i32>>(), &[3, 2], 0).unwrap();
        let y = index_select(&x, 1, &[1]).unwrap();
        assert_eq!(y.time_dim(), 0);
        assert_eq!(y.to_vec(), vec![1, 3, 5]);
        let z = tindex_select(&from_vec(vec![5u8, 6, 7]), &[2, 1, 0]).unwrap();
        assert_eq!(z.to_vec(), vec![7, 6, 5]);
    }
}
