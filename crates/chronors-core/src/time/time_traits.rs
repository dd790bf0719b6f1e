//! # TimeTensor - Trait Implementations
//!
//! - `Index` by multi-dimensional index
//! - `Debug` and a compact `Display`

use super::types::TimeTensor;
use crate::dtype::Element;
use std::fmt;

impl<T> std::ops::Index<&[usize]> for TimeTensor<T> {
    type Output = T;
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const N: usize> std::ops::Index<&[usize; N]> for TimeTensor<T> {
    type Output = T;
    fn index(&self, index: &[usize; N]) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: Element> fmt::Debug for TimeTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeTensor")
            .field("dtype", &T::DTYPE)
            .field("shape", &self.shape())
            .field("time_dim", &self.time_dim)
            .field("data", &self.data.as_array())
            .finish()
    }
}

impl<T: Element> fmt::Display for TimeTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimeTensor<{}>(shape={:?}, time_dim={}, time_len={})",
            T::DTYPE,
            self.shape(),
            self.time_dim,
            self.time_len()
        )
    }
}
