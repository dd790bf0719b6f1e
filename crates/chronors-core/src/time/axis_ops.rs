//! Axis-changing operations on time tensors
//!
//! Each operation here delegates the buffer work to [`BaseTensor`] and then
//! recomputes where the time axis ended up.

use super::types::TimeTensor;
use crate::base::BaseTensor;
use crate::dtype::Element;
use crate::error::{Result, TimeTensorError};
use crate::invariants::{time_dim_after_insert, time_dim_after_remove};

impl<T: Element> TimeTensor<T> {
    /// Reorder axes; the time axis follows its data.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::{BaseTensor, TimeTensor};
    ///
    /// // (batch, time, channel) -> (batch, channel, time)
    /// let x = TimeTensor::new(BaseTensor::<f32>::zeros(&[2, 50, 3]), 1).unwrap();
    /// let y = x.permute(&[0, 2, 1]).unwrap();
    /// assert_eq!(y.time_dim(), 2);
    /// assert_eq!(y.time_len(), 50);
    /// ```
    pub fn permute(&self, axes: &[usize]) -> Result<Self> {
        let data = self.data.permute(axes)?;
        // a valid permutation always contains the old time axis
        let time_dim = axes
            .iter()
            .position(|&axis| axis == self.time_dim)
            .ok_or(TimeTensorError::InvalidTimeDimension {
                time_dim: self.time_dim,
                rank: axes.len(),
            })?;
        Ok(Self::from_parts(data, time_dim))
    }

    /// Swap two axes.
    pub fn transpose(&self, axis1: usize, axis2: usize) -> Result<Self> {
        let data = self.data.transpose(axis1, axis2)?;
        let time_dim = if self.time_dim == axis1 {
            axis2
        } else if self.time_dim == axis2 {
            axis1
        } else {
            self.time_dim
        };
        Ok(Self::from_parts(data, time_dim))
    }

    /// Insert a length-1 axis at `axis`.
    ///
    /// Inserting at or before the time axis shifts it right by one.
    pub fn unsqueeze(&self, axis: usize) -> Result<Self> {
        let data = self.data.unsqueeze(axis)?;
        Ok(Self::from_parts(
            data,
            time_dim_after_insert(self.time_dim, axis),
        ))
    }

    /// Remove a length-1 axis other than the time axis.
    ///
    /// # Errors
    ///
    /// `InvalidTimeDimension` when `axis` is the time axis; the result would
    /// have no time axis left to point at.
    pub fn squeeze_axis(&self, axis: usize) -> Result<Self> {
        if axis == self.time_dim {
            return Err(TimeTensorError::InvalidTimeDimension {
                time_dim: self.time_dim,
                rank: self.rank().saturating_sub(1),
            });
        }
        let data = self.data.squeeze_axis(axis)?;
        Ok(Self::from_parts(
            data,
            time_dim_after_remove(self.time_dim, axis),
        ))
    }

    /// Select positions along any axis; rank and time axis are unchanged.
    pub fn index_select(&self, dim: usize, indices: &[usize]) -> Result<Self> {
        let data = self.data.select_indices(indices, dim)?;
        Ok(Self::from_parts(data, self.time_dim))
    }

    /// Select time steps in the given order.
    ///
    /// Duplicates and out-of-order indices resample the time axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::ops::timetensor;
    /// use chronors_core::TimeDim;
    ///
    /// let x = timetensor(vec![10, 11, 12, 13], &[4], TimeDim::Last).unwrap();
    /// let y = x.tindex_select(&[3, 0, 0]).unwrap();
    /// assert_eq!(y.to_vec(), vec![13, 10, 10]);
    /// assert_eq!(y.time_len(), 3);
    /// ```
    pub fn tindex_select(&self, indices: &[usize]) -> Result<Self> {
        tracing::trace!(
            time_dim = self.time_dim,
            count = indices.len(),
            "tindex_select"
        );
        self.index_select(self.time_dim, indices)
    }

    /// Window `[start, start + len)` along the time axis.
    pub fn tnarrow(&self, start: usize, len: usize) -> Result<Self> {
        let data = self.data.narrow(self.time_dim, start, len)?;
        Ok(Self::from_parts(data, self.time_dim))
    }

    /// Split the time axis into consecutive windows of `chunk` steps.
    ///
    /// The last window may be shorter.
    pub fn tsplit(&self, chunk: usize) -> Result<Vec<Self>> {
        Ok(self
            .data
            .chunk(chunk, self.time_dim)?
            .into_iter()
            .map(|data| Self::from_parts(data, self.time_dim))
            .collect())
    }

    /// Drop the time annotation, moving the time axis to position 0.
    pub(crate) fn time_first(&self) -> Result<BaseTensor<T>> {
        let mut axes: Vec<usize> = (0..self.rank()).filter(|&a| a != self.time_dim).collect();
        axes.insert(0, self.time_dim);
        self.data.permute(&axes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TimeTensor<f64> {
        // (channel=2, time=4)
        let base = BaseTensor::from_vec((0..8).map(f64::from).collect(), &[2, 4]).unwrap();
        TimeTensor::new(base, 1).unwrap()
    }

    #[test]
    fn test_transpose_moves_time() {
        let x = sample().transpose(0, 1).unwrap();
        assert_eq!(x.time_dim(), 0);
        assert_eq!(x.time_len(), 4);
    }

    #[test]
    fn test_unsqueeze_shifts_time() {
        let x = sample();
        assert_eq!(x.unsqueeze(0).unwrap().time_dim(), 2);
        assert_eq!(x.unsqueeze(1).unwrap().time_dim(), 2);
        assert_eq!(x.unsqueeze(2).unwrap().time_dim(), 1);
    }

    #[test]
    fn test_squeeze_time_axis_rejected() {
        let x = TimeTensor::new(BaseTensor::<f64>::zeros(&[3, 1]), 1).unwrap();
        assert!(matches!(
            x.squeeze_axis(1),
            Err(TimeTensorError::InvalidTimeDimension { .. })
        ));
        let y = TimeTensor::new(BaseTensor::<f64>::zeros(&[1, 3]), 1).unwrap();
        let z = y.squeeze_axis(0).unwrap();
        assert_eq!(z.time_dim(), 0);
        assert_eq!(z.time_len(), 3);
    }

    #[test]
    fn test_tindex_select_out_of_range() {
        let x = sample();
        assert!(matches!(
            x.tindex_select(&[4]),
            Err(TimeTensorError::IndexOutOfRange {
                index: 4,
                axis: 1,
                len: 4
            })
        ));
    }

    #[test]
    fn test_tsplit_and_tnarrow() {
        let x = sample();
        let parts = x.tsplit(3).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].time_len(), 3);
        assert_eq!(parts[1].to_vec(), vec![3.0, 7.0]);
        assert_eq!(x.tnarrow(1, 2).unwrap().to_vec(), vec![1.0, 2.0, 5.0, 6.0]);
    }

    #[test]
    fn test_time_first_layout() {
        let t = sample().time_first().unwrap();
        assert_eq!(t.shape(), &[4, 2]);
        assert_eq!(t.to_vec(), vec![0.0, 4.0, 1.0, 5.0, 2.0, 6.0, 3.0, 7.0]);
    }
}
