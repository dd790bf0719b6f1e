//! Base tensor type definition and basic accessors
//!
//! This module defines the core `BaseTensor<T>` type and provides basic creation
//! and accessor methods. Additional operations are organized in sibling modules.

use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};

use crate::dtype::{DType, Element};
use crate::error::{Result, TimeTensorError};

/// Dense N-dimensional numeric buffer with an element-type tag and no time semantics.
///
/// Wraps the array engine's dynamic-dimensionality arrays. One generic structure
/// covers every element type; the dtype-specialised names (`FloatBaseTensor`,
/// `ByteBaseTensor`, ...) are aliases of it.
///
/// # Type Parameters
///
/// * `T` - The element type, any [`Element`]
///
/// # Examples
///
/// ```
/// use chronors_core::{BaseTensor, DType};
///
/// let tensor = BaseTensor::<f32>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// assert_eq!(tensor.dtype(), DType::F32);
/// ```
#[derive(Clone, PartialEq)]
pub struct BaseTensor<T> {
    /// Underlying engine array
    pub(crate) data: Array<T, IxDyn>,
}

impl<T: Element> BaseTensor<T> {
    /// Wrap an existing engine array
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the element count does not match the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let tensor = BaseTensor::<f64>::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert_eq!(tensor[&[1, 0]], 4.0);
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            return Err(TimeTensorError::ShapeMismatch {
                op: "from_vec",
                expected: vec![total],
                got: vec![vec.len()],
            });
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec).map_err(TimeTensorError::engine)?;
        Ok(Self { data: array })
    }

    /// Create a tensor filled with a specific value
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Zero-dimensional tensor holding one value
    pub fn scalar(value: T) -> Self {
        Self::from_elem(&[], value)
    }

    /// Runtime element type tag
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get a copy of the shape as a vector.
    pub fn shape_vec(&self) -> Vec<usize> {
        self.shape().to_vec()
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if the tensor is contiguous in memory (row-major).
    pub fn is_contiguous(&self) -> bool {
        self.data.is_standard_layout()
    }

    /// Size of the element data in bytes
    pub fn size_bytes(&self) -> usize {
        self.len() * T::DTYPE.element_size()
    }

    /// Get an immutable reference to the underlying engine array
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Consume the tensor and return the engine array
    pub fn into_array(self) -> Array<T, IxDyn> {
        self.data
    }

    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Elements in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let transposed = tensor.permute(&[1, 0]).unwrap();
    /// assert_eq!(transposed.to_vec(), vec![1.0, 3.0, 2.0, 4.0]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Bounds-checked element access
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.data.get(IxDyn(index))
    }

    /// The single value of a tensor holding exactly one element
    pub fn item(&self) -> Option<T> {
        if self.len() == 1 {
            self.data.iter().next().copied()
        } else {
            None
        }
    }

    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }
}
