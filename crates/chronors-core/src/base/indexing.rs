//! Base tensor selection along an axis

use super::types::BaseTensor;
use crate::dtype::Element;
use crate::error::{Result, TimeTensorError};
use crate::invariants::{check_axis, check_indices};
use scirs2_core::ndarray_ext::Axis;

impl<T: Element> BaseTensor<T> {
    /// Select positions along an axis, in the given order.
    ///
    /// Duplicate and out-of-order indices are allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2]).unwrap();
    /// let selected = tensor.select_indices(&[2, 0, 2], 0).unwrap();
    ///
    /// assert_eq!(selected.shape(), &[3, 2]);
    /// assert_eq!(selected[&[0, 0]], 5.0);
    /// assert_eq!(selected[&[1, 0]], 1.0);
    /// ```
    pub fn select_indices(&self, indices: &[usize], axis: usize) -> Result<Self> {
        check_axis(axis, self.rank())?;
        check_indices(indices, axis, self.shape()[axis])?;
        Ok(Self {
            data: self.data.select(Axis(axis), indices),
        })
    }

    /// Contiguous window `[start, start + len)` along an axis.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when the window reaches past the end of the axis.
    pub fn narrow(&self, axis: usize, start: usize, len: usize) -> Result<Self> {
        check_axis(axis, self.rank())?;
        let axis_len = self.shape()[axis];
        let end = start.checked_add(len).unwrap_or(usize::MAX);
        if end > axis_len {
            return Err(TimeTensorError::IndexOutOfRange {
                index: end.saturating_sub(1).max(start),
                axis,
                len: axis_len,
            });
        }
        let indices: Vec<usize> = (start..end).collect();
        Ok(Self {
            data: self.data.select(Axis(axis), &indices),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_out_of_range() {
        let t = BaseTensor::<f32>::zeros(&[4, 2]);
        assert!(matches!(
            t.select_indices(&[1, 4], 0),
            Err(TimeTensorError::IndexOutOfRange { index: 4, .. })
        ));
        assert!(matches!(
            t.select_indices(&[0], 2),
            Err(TimeTensorError::InvalidAxis { .. })
        ));
    }

    #[test]
    fn test_select_empty_index_list() {
        let t = BaseTensor::<f32>::ones(&[4, 2]);
        assert_eq!(t.select_indices(&[], 1).unwrap().shape(), &[4, 0]);
    }

    #[test]
    fn test_narrow_window() {
        let t = BaseTensor::from_vec((0..10).collect::<Vec<i32>>(), &[2, 5]).unwrap();
        let w = t.narrow(1, 1, 3).unwrap();
        assert_eq!(w.to_vec(), vec![1, 2, 3, 6, 7, 8]);
        assert!(t.narrow(1, 3, 3).is_err());
        assert_eq!(t.narrow(1, 5, 0).unwrap().shape(), &[2, 0]);
    }
}
