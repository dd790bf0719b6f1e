//! # BaseTensor - Trait Implementations
//!
//! - `Index` / `IndexMut` by multi-dimensional index
//! - `Debug`

use super::types::BaseTensor;
use crate::dtype::Element;
use scirs2_core::ndarray_ext::IxDyn;
use std::fmt;

impl<T> std::ops::Index<&[usize]> for BaseTensor<T> {
    type Output = T;
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T, const N: usize> std::ops::Index<&[usize; N]> for BaseTensor<T> {
    type Output = T;
    fn index(&self, index: &[usize; N]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T> std::ops::IndexMut<&[usize]> for BaseTensor<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        &mut self.data[IxDyn(index)]
    }
}

impl<T, const N: usize> std::ops::IndexMut<&[usize; N]> for BaseTensor<T> {
    fn index_mut(&mut self, index: &[usize; N]) -> &mut Self::Output {
        &mut self.data[IxDyn(index)]
    }
}

impl<T: Element> fmt::Debug for BaseTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseTensor")
            .field("dtype", &T::DTYPE)
            .field("shape", &self.shape())
            .field("data", &self.data)
            .finish()
    }
}
