//! Time-dimension tensor type definition, construction and accessors

use crate::base::BaseTensor;
use crate::dtype::{DType, Element};
use crate::error::{Result, TimeTensorError};
use crate::invariants::{check_nonempty_time, check_same_time_dim};
use crate::types::TimeDim;
use std::ops::{Add, Div, Mul, Sub};

/// A [`BaseTensor`] with one axis designated as time.
///
/// The time axis position is validated on construction and recomputed by every
/// operation that inserts, removes or reorders axes. The time length is never
/// stored; it is always read from the buffer shape.
///
/// # Examples
///
/// ```
/// use chronors_core::{BaseTensor, TimeDim, TimeTensor};
///
/// // (channel, time)
/// let base = BaseTensor::<f32>::zeros(&[3, 100]);
/// let x = TimeTensor::new(base, TimeDim::Last).unwrap();
/// assert_eq!(x.time_dim(), 1);
/// assert_eq!(x.time_len(), 100);
///
/// // (time, channel)
/// let y = TimeTensor::new(BaseTensor::<f32>::zeros(&[100, 3]), 0).unwrap();
/// assert_eq!(y.time_dim(), 0);
/// assert_eq!(y.tlen(), 100);
/// ```
#[derive(Clone, PartialEq)]
pub struct TimeTensor<T> {
    pub(crate) data: BaseTensor<T>,
    pub(crate) time_dim: usize,
}

impl<T: Element> TimeTensor<T> {
    /// Declare `time_dim` as the time axis of `data`.
    ///
    /// A zero-length time axis is accepted; see [`TimeTensor::new_nonempty`].
    ///
    /// # Errors
    ///
    /// `InvalidTimeDimension` if the axis does not exist.
    pub fn new(data: BaseTensor<T>, time_dim: impl Into<TimeDim>) -> Result<Self> {
        let time_dim = time_dim.into().resolve(data.rank())?;
        Ok(Self { data, time_dim })
    }

    /// Like [`TimeTensor::new`], additionally requiring at least one time step.
    ///
    /// # Errors
    ///
    /// `InvalidTimeDimension` or `EmptyTimeAxis`.
    pub fn new_nonempty(data: BaseTensor<T>, time_dim: impl Into<TimeDim>) -> Result<Self> {
        let tensor = Self::new(data, time_dim)?;
        check_nonempty_time(tensor.time_dim, tensor.time_len())?;
        Ok(tensor)
    }

    /// Internal constructor for results whose time axis is known to be valid.
    pub(crate) fn from_parts(data: BaseTensor<T>, time_dim: usize) -> Self {
        debug_assert!(time_dim < data.rank());
        Self { data, time_dim }
    }

    /// Re-declare which axis is time, keeping the same buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::{BaseTensor, TimeTensor};
    ///
    /// let x = TimeTensor::new(BaseTensor::<f64>::zeros(&[4, 9]), 1).unwrap();
    /// let y = x.with_time_dim(0).unwrap();
    /// assert_eq!(y.time_len(), 4);
    /// ```
    pub fn with_time_dim(self, time_dim: impl Into<TimeDim>) -> Result<Self> {
        Self::new(self.data, time_dim)
    }

    /// Index of the time axis
    pub fn time_dim(&self) -> usize {
        self.time_dim
    }

    /// Number of time steps, read from the buffer shape
    pub fn time_len(&self) -> usize {
        self.data.shape()[self.time_dim]
    }

    /// Short alias of [`TimeTensor::time_len`]
    pub fn tlen(&self) -> usize {
        self.time_len()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn rank(&self) -> usize {
        self.data.rank()
    }

    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The wrapped buffer
    pub fn data(&self) -> &BaseTensor<T> {
        &self.data
    }

    /// Drop the time annotation and return the buffer
    pub fn into_base(self) -> BaseTensor<T> {
        self.data
    }

    /// Elements in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.data.get(index)
    }

    /// Convert the element type; the time axis is unchanged.
    pub fn cast<U: Element>(&self) -> TimeTensor<U> {
        TimeTensor::from_parts(self.data.cast(), self.time_dim)
    }

    /// Apply a function to every element; the time axis is unchanged.
    pub fn map<U, F>(&self, f: F) -> TimeTensor<U>
    where
        U: Element,
        F: FnMut(T) -> U,
    {
        TimeTensor::from_parts(self.data.map(f), self.time_dim)
    }

    /// Element-wise combination with another time tensor of the same layout.
    ///
    /// # Errors
    ///
    /// `TimeDimMismatch` if the time axes differ, `ShapeMismatch` if the shapes do.
    pub fn zip_map<U, V, F>(&self, other: &TimeTensor<U>, f: F) -> Result<TimeTensor<V>>
    where
        U: Element,
        V: Element,
        F: FnMut(T, U) -> V,
    {
        check_same_time_dim("zip_map", self.time_dim, other.time_dim)?;
        Ok(TimeTensor::from_parts(
            self.data.zip_map(&other.data, f)?,
            self.time_dim,
        ))
    }

    /// Element-wise sum of two tensors with the same layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::ops::timetensor;
    /// use chronors_core::TimeDim;
    ///
    /// let a = timetensor(vec![1.0f64, 2.0, 3.0], &[3], TimeDim::Last).unwrap();
    /// let b = timetensor(vec![10.0f64, 20.0, 30.0], &[3], TimeDim::Last).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap().to_vec(), vec![11.0, 22.0, 33.0]);
    /// ```
    pub fn try_add(&self, other: &Self) -> Result<Self>
    where
        T: Add<Output = T>,
    {
        self.zip_map(other, |a, b| a + b)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self>
    where
        T: Sub<Output = T>,
    {
        self.zip_map(other, |a, b| a - b)
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self>
    where
        T: Mul<Output = T>,
    {
        self.zip_map(other, |a, b| a * b)
    }

    pub fn try_div(&self, other: &Self) -> Result<Self>
    where
        T: Div<Output = T>,
    {
        self.zip_map(other, |a, b| a / b)
    }

    /// Require at least `required` time steps.
    pub(crate) fn require_time_steps(&self, op: &'static str, required: usize) -> Result<()> {
        if self.time_len() < required {
            return Err(TimeTensorError::InsufficientLength {
                op,
                required,
                available: self.time_len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_len_follows_buffer() {
        let x = TimeTensor::new(BaseTensor::<f64>::zeros(&[2, 7, 3]), 1).unwrap();
        assert_eq!(x.time_len(), 7);
        assert_eq!(x.time_len(), x.shape()[x.time_dim()]);
    }

    #[test]
    fn test_new_rejects_bad_time_dim() {
        let err = TimeTensor::new(BaseTensor::<f64>::zeros(&[2, 3]), 2).unwrap_err();
        assert!(matches!(
            err,
            TimeTensorError::InvalidTimeDimension {
                time_dim: 2,
                rank: 2
            }
        ));
        assert!(TimeTensor::new(BaseTensor::<f64>::scalar(1.0), TimeDim::Last).is_err());
    }

    #[test]
    fn test_empty_time_axis() {
        let base = BaseTensor::<f32>::zeros(&[3, 0]);
        assert!(TimeTensor::new(base.clone(), TimeDim::Last).is_ok());
        assert!(matches!(
            TimeTensor::new_nonempty(base, TimeDim::Last),
            Err(TimeTensorError::EmptyTimeAxis { time_dim: 1 })
        ));
    }

    #[test]
    fn test_arithmetic_requires_same_time_dim() {
        let a = TimeTensor::new(BaseTensor::<f64>::ones(&[3, 3]), 0).unwrap();
        let b = TimeTensor::new(BaseTensor::<f64>::ones(&[3, 3]), 1).unwrap();
        assert!(matches!(
            a.try_add(&b),
            Err(TimeTensorError::TimeDimMismatch { .. })
        ));
        let c = a.try_mul(&a).unwrap();
        assert_eq!(c.time_dim(), 0);
    }

    #[test]
    fn test_cast_keeps_time_dim() {
        let x = TimeTensor::new(BaseTensor::<f64>::ones(&[4, 2]), 0).unwrap();
        let y = x.cast::<i16>();
        assert_eq!(y.time_dim(), 0);
        assert_eq!(y.dtype(), DType::I16);
    }
}
