//! Base tensor shape operations
//!
//! This module provides operations for reshaping and reordering axes:
//! reshape, permute, transpose, squeeze_axis and unsqueeze.

use super::types::BaseTensor;
use crate::dtype::Element;
use crate::error::{Result, TimeTensorError};
use crate::invariants::check_axis;
use scirs2_core::ndarray_ext::{Axis, IxDyn};

impl<T: Element> BaseTensor<T> {
    /// Reshape the tensor to a new shape with the same element count.
    ///
    /// Elements are taken in row-major order, so a permuted tensor is first
    /// materialised in its logical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::zeros(&[2, 3, 4]);
    /// let reshaped = tensor.reshape(&[6, 4]).unwrap();
    /// assert_eq!(reshaped.shape(), &[6, 4]);
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self> {
        let new_len: usize = new_shape.iter().product();
        if new_len != self.len() {
            return Err(TimeTensorError::ShapeMismatch {
                op: "reshape",
                expected: self.shape_vec(),
                got: new_shape.to_vec(),
            });
        }
        Self::from_vec(self.to_vec(), new_shape)
    }

    /// Permute the axes of the tensor.
    ///
    /// # Arguments
    ///
    /// * `axes` - The new order of axes (must be a permutation of 0..rank)
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `axes` is not a valid permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::zeros(&[2, 3, 4]);
    /// let permuted = tensor.permute(&[2, 0, 1]).unwrap();
    /// assert_eq!(permuted.shape(), &[4, 2, 3]);
    /// ```
    pub fn permute(&self, axes: &[usize]) -> Result<Self> {
        validate_permutation(axes, self.rank())?;
        let permuted = self.data.clone().permuted_axes(IxDyn(axes));
        Ok(Self { data: permuted })
    }

    /// Swap two axes.
    pub fn transpose(&self, axis1: usize, axis2: usize) -> Result<Self> {
        check_axis(axis1, self.rank())?;
        check_axis(axis2, self.rank())?;
        let mut data = self.data.clone();
        data.swap_axes(axis1, axis2);
        Ok(Self { data })
    }

    /// Remove an axis of length 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::zeros(&[3, 1, 5]);
    /// let squeezed = tensor.squeeze_axis(1).unwrap();
    /// assert_eq!(squeezed.shape(), &[3, 5]);
    /// ```
    pub fn squeeze_axis(&self, axis: usize) -> Result<Self> {
        check_axis(axis, self.rank())?;
        if self.shape()[axis] != 1 {
            return Err(TimeTensorError::InvalidArgument(format!(
                "cannot squeeze axis {} with size {}",
                axis,
                self.shape()[axis]
            )));
        }
        Ok(Self {
            data: self.data.clone().remove_axis(Axis(axis)),
        })
    }

    /// Add a singleton dimension at the specified axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::zeros(&[3, 5]);
    /// let unsqueezed = tensor.unsqueeze(1).unwrap();
    /// assert_eq!(unsqueezed.shape(), &[3, 1, 5]);
    /// ```
    pub fn unsqueeze(&self, axis: usize) -> Result<Self> {
        if axis > self.rank() {
            return Err(TimeTensorError::InvalidAxis {
                axis,
                rank: self.rank() + 1,
            });
        }
        Ok(Self {
            data: self.data.clone().insert_axis(Axis(axis)),
        })
    }

    /// Flatten to one dimension in row-major order
    pub fn flatten(&self) -> Self {
        Self {
            data: scirs2_core::ndarray_ext::Array::from_vec(self.to_vec()).into_dyn(),
        }
    }
}

fn validate_permutation(axes: &[usize], rank: usize) -> Result<()> {
    if axes.len() != rank {
        return Err(TimeTensorError::InvalidArgument(format!(
            "permutation length {} does not match tensor rank {}",
            axes.len(),
            rank
        )));
    }
    let mut seen = vec![false; rank];
    for &axis in axes {
        check_axis(axis, rank)?;
        if seen[axis] {
            return Err(TimeTensorError::InvalidArgument(format!(
                "duplicate axis {axis} in permutation"
            )));
        }
        seen[axis] = true;
    }
    Ok(())
}
