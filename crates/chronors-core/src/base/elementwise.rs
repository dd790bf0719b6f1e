//! Element-wise operations, casting and same-shape arithmetic

use super::types::BaseTensor;
use crate::dtype::Element;
use crate::error::Result;
use crate::invariants::check_shapes_except;
use scirs2_core::ndarray_ext::Zip;
use std::any::Any;
use std::ops::{Add, Div, Mul, Sub};

impl<T: Element> BaseTensor<T> {
    /// Apply a function to every element, possibly changing the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::from_vec(vec![1.0, -2.0, 3.0], &[3]).unwrap();
    /// let magnitudes = tensor.map(|x| x.abs() as f32);
    /// assert_eq!(magnitudes.to_vec(), vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> BaseTensor<U>
    where
        F: FnMut(T) -> U,
    {
        BaseTensor {
            data: self.data.mapv(f),
        }
    }

    /// Combine two tensors of identical shape element by element.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the shapes differ; no broadcasting is performed.
    pub fn zip_map<U, V, F>(&self, other: &BaseTensor<U>, mut f: F) -> Result<BaseTensor<V>>
    where
        U: Element,
        F: FnMut(T, U) -> V,
    {
        check_shapes_except("zip_map", self.shape(), other.shape(), None)?;
        let data = Zip::from(&self.data)
            .and(&other.data)
            .map_collect(|&a, &b| f(a, b));
        Ok(BaseTensor { data })
    }

    /// Convert to another element type.
    ///
    /// Conversion goes through `f64`: integer targets saturate and complex
    /// sources contribute their real part.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::{BaseTensor, DType};
    ///
    /// let tensor = BaseTensor::<f64>::from_vec(vec![1.7, 300.0], &[2]).unwrap();
    /// let bytes = tensor.cast::<u8>();
    /// assert_eq!(bytes.dtype(), DType::U8);
    /// assert_eq!(bytes.to_vec(), vec![1, 255]);
    /// ```
    pub fn cast<U: Element>(&self) -> BaseTensor<U> {
        if let Some(same) = (self as &dyn Any).downcast_ref::<BaseTensor<U>>() {
            return same.clone();
        }
        self.map(|x| U::from_f64(x.to_f64()))
    }

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

    /// Element-wise division. Integer division by zero follows Rust semantics.
    pub fn try_div(&self, other: &Self) -> Result<Self>
    where
        T: Div<Output = T>,
    {
        self.zip_map(other, |a, b| a / b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeTensorError;
    use half::bf16;
    use num_complex::Complex;

    #[test]
    fn test_arithmetic_same_shape() {
        let a = BaseTensor::from_vec(vec![1.0f64, 2.0, 3.0], &[3]).unwrap();
        let b = BaseTensor::from_vec(vec![0.5f64, 0.5, 1.0], &[3]).unwrap();
        assert_eq!(a.try_add(&b).unwrap().to_vec(), vec![1.5, 2.5, 4.0]);
        assert_eq!(a.try_sub(&b).unwrap().to_vec(), vec![0.5, 1.5, 2.0]);
        assert_eq!(a.try_mul(&b).unwrap().to_vec(), vec![0.5, 1.0, 3.0]);
        assert_eq!(a.try_div(&b).unwrap().to_vec(), vec![2.0, 4.0, 3.0]);
    }

    #[test]
    fn test_arithmetic_does_not_broadcast() {
        let a = BaseTensor::<f32>::ones(&[2, 3]);
        let b = BaseTensor::<f32>::ones(&[3]);
        assert!(matches!(
            a.try_add(&b),
            Err(TimeTensorError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_cast_same_type_is_exact() {
        let big = BaseTensor::from_vec(vec![i64::MAX, -7], &[2]).unwrap();
        assert_eq!(big.cast::<i64>().to_vec(), vec![i64::MAX, -7]);

        let c = BaseTensor::from_vec(vec![Complex::new(1.0f64, 2.0)], &[1]).unwrap();
        assert_eq!(c.cast::<Complex<f64>>().to_vec(), vec![Complex::new(1.0, 2.0)]);
    }

    #[test]
    fn test_cast_to_half_precision() {
        let t = BaseTensor::from_vec(vec![1.0f32, 0.5], &[2]).unwrap();
        let h = t.cast::<bf16>();
        assert_eq!(h.to_vec(), vec![bf16::from_f32(1.0), bf16::from_f32(0.5)]);
    }
}
