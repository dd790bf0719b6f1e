//! Base tensor combining and splitting operations
//!
//! This module provides operations for combining multiple tensors (concatenate, stack)
//! and splitting a tensor into consecutive pieces (chunk).

use super::types::BaseTensor;
use crate::dtype::Element;
use crate::error::{Result, TimeTensorError};
use crate::invariants::{check_axis, check_shapes_except};
use scirs2_core::ndarray_ext::Axis;

impl<T: Element> BaseTensor<T> {
    /// Concatenate multiple tensors along an existing axis.
    ///
    /// All tensors must have the same rank and the same shape except along `axis`.
    ///
    /// # Complexity
    ///
    /// O(n) where n is the total number of elements across all tensors
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if the tensor list is empty
    /// - `InvalidAxis` if the axis is out of bounds
    /// - `ShapeMismatch` if shapes are incompatible
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let a = BaseTensor::<f64>::ones(&[2, 3]);
    /// let b = BaseTensor::<f64>::zeros(&[2, 2]);
    ///
    /// let joined = BaseTensor::concatenate(&[a, b], 1).unwrap();
    /// assert_eq!(joined.shape(), &[2, 5]);
    /// ```
    pub fn concatenate(tensors: &[Self], axis: usize) -> Result<Self> {
        let first = tensors
            .first()
            .ok_or(TimeTensorError::EmptyInput { op: "concatenate" })?;
        check_axis(axis, first.rank())?;
        for tensor in &tensors[1..] {
            check_shapes_except("concatenate", first.shape(), tensor.shape(), Some(axis))?;
        }

        let views: Vec<_> = tensors.iter().map(|t| t.data.view()).collect();
        let concatenated = scirs2_core::ndarray::concatenate(Axis(axis), &views)
            .map_err(TimeTensorError::engine)?;

        Ok(Self { data: concatenated })
    }

    /// Stack tensors of identical shape along a new axis inserted at `axis`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let a = BaseTensor::<f64>::ones(&[2, 3]);
    /// let b = BaseTensor::<f64>::zeros(&[2, 3]);
    ///
    /// let stacked = BaseTensor::stack(&[a, b], 0).unwrap();
    /// assert_eq!(stacked.shape(), &[2, 2, 3]);
    /// ```
    pub fn stack(tensors: &[Self], axis: usize) -> Result<Self> {
        let first = tensors
            .first()
            .ok_or(TimeTensorError::EmptyInput { op: "stack" })?;
        if axis > first.rank() {
            return Err(TimeTensorError::InvalidAxis {
                axis,
                rank: first.rank() + 1,
            });
        }
        for tensor in &tensors[1..] {
            check_shapes_except("stack", first.shape(), tensor.shape(), None)?;
        }

        let unsqueezed = tensors
            .iter()
            .map(|t| t.unsqueeze(axis))
            .collect::<Result<Vec<_>>>()?;

        Self::concatenate(&unsqueezed, axis)
    }

    /// Split into consecutive pieces of `chunk_size` along `axis`.
    ///
    /// The last piece may be shorter.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::ones(&[5, 3]);
    /// let chunks = tensor.chunk(2, 0).unwrap();
    ///
    /// assert_eq!(chunks.len(), 3);
    /// assert_eq!(chunks[2].shape(), &[1, 3]);
    /// ```
    pub fn chunk(&self, chunk_size: usize, axis: usize) -> Result<Vec<Self>> {
        check_axis(axis, self.rank())?;
        if chunk_size == 0 {
            return Err(TimeTensorError::InvalidArgument(
                "chunk size must be greater than 0".into(),
            ));
        }

        let axis_size = self.shape()[axis];
        (0..axis_size)
            .step_by(chunk_size)
            .map(|start| self.narrow(axis, start, chunk_size.min(axis_size - start)))
            .collect()
    }
}
