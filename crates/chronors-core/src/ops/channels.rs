//! Channel view of a time tensor: every non-time axis flattened (row-major)
//! into one channel index, each channel a series of `f64` samples.

use crate::base::BaseTensor;
use crate::dtype::Element;
use crate::error::Result;
use crate::time::TimeTensor;
use crate::types::Shape;

pub(crate) struct Channels {
    /// One series per channel, each of the same length
    pub(crate) series: Vec<Vec<f64>>,
    /// Shape of the non-time axes, in their original order
    pub(crate) rest_shape: Shape,
    pub(crate) time_dim: usize,
}

impl Channels {
    pub(crate) fn from_time_tensor<T: Element>(x: &TimeTensor<T>) -> Result<Self> {
        let time_first = x.time_first()?;
        let rest_shape = Shape::from_slice(&time_first.shape()[1..]);
        let count: usize = rest_shape.iter().product();
        let mut series = vec![Vec::with_capacity(x.time_len()); count];
        for (i, v) in time_first.iter().enumerate() {
            series[i % count.max(1)].push(v.to_f64());
        }
        Ok(Self {
            series,
            rest_shape,
            time_dim: x.time_dim(),
        })
    }

    pub(crate) fn count(&self) -> usize {
        self.series.len()
    }

    /// Reassemble per-channel series, each `len` long, into a tensor with
    /// the new series axis at the original time position.
    ///
    /// `len` is explicit so that a tensor with no channels keeps its series
    /// axis length.
    pub(crate) fn assemble<T: Element>(
        &self,
        series: &[Vec<f64>],
        len: usize,
    ) -> Result<BaseTensor<T>> {
        debug_assert!(series.iter().all(|s| s.len() == len));
        let mut data = Vec::with_capacity(len * series.len());
        for t in 0..len {
            data.extend(series.iter().map(|s| T::from_f64(s[t])));
        }
        let mut shape = Shape::new();
        shape.push(len);
        shape.extend_from_slice(&self.rest_shape);
        let time_first = BaseTensor::from_vec(data, &shape)?;

        let rank = shape.len();
        let mut axes: Vec<usize> = (1..rank).collect();
        axes.insert(self.time_dim, 0);
        time_first.permute(&axes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::timetensor;

    #[test]
    fn test_channels_of_middle_time_axis() {
        // (2, time=3, 2)
        let x = timetensor((0..12).map(f64::from).collect(), &[2, 3, 2], 1).unwrap();
        let ch = Channels::from_time_tensor(&x).unwrap();
        assert_eq!(ch.count(), 4);
        assert_eq!(ch.rest_shape.as_slice(), &[2, 2]);
        assert_eq!(ch.series[0], vec![0.0, 2.0, 4.0]);
        assert_eq!(ch.series[3], vec![7.0, 9.0, 11.0]);

        let back: BaseTensor<f64> = ch.assemble(&ch.series, 3).unwrap();
        assert_eq!(back, *x.data());
    }

    #[test]
    fn test_assemble_without_channels_keeps_axis_length() {
        let x = crate::ops::zeros::<f64>(&[0, 5], 1).unwrap();
        let ch = Channels::from_time_tensor(&x).unwrap();
        assert_eq!(ch.count(), 0);

        let back: BaseTensor<f64> = ch.assemble(&ch.series, 4).unwrap();
        assert_eq!(back.shape(), &[0, 4]);
    }
}
