//! Label-addressed tensor.

use super::indexer::DataIndexer;
use crate::base::BaseTensor;
use crate::dtype::{Element, FloatElement};
use crate::error::{Result, TimeTensorError};
use crate::ops::kernels;
use crate::time::TimeTensor;
use scirs2_core::ndarray_ext::Axis;
use std::fmt;

/// A buffer whose axes are addressed by label rather than position.
///
/// Every method resolves labels through the [`DataIndexer`] and then delegates to
/// the positional [`BaseTensor`] operation. The indexer always mirrors the
/// buffer's shape.
///
/// # Examples
///
/// ```
/// use chronors_core::{BaseTensor, DataIndexer, DataTensor};
///
/// let data = BaseTensor::from_vec(vec![1.0f64, 2.0, 3.0, 10.0, 20.0, 30.0], &[2, 3]).unwrap();
/// let indexer = DataIndexer::from_labels(["sensor", "time"], &[2, 3])
///     .unwrap()
///     .with_keys("sensor", ["left", "right"])
///     .unwrap();
/// let dt = DataTensor::new(data, indexer).unwrap();
///
/// let right = dt.select_keys("sensor", &["right"]).unwrap();
/// assert_eq!(right.data().to_vec(), vec![10.0, 20.0, 30.0]);
///
/// let per_sensor = dt.mean("time", false).unwrap();
/// assert_eq!(per_sensor.data().to_vec(), vec![2.0, 20.0]);
/// assert_eq!(per_sensor.indexer().labels().collect::<Vec<_>>(), vec!["sensor"]);
/// ```
#[derive(Clone, PartialEq)]
pub struct DataTensor<T: Element> {
    data: BaseTensor<T>,
    indexer: DataIndexer,
}

impl<T: Element> DataTensor<T> {
    /// # Errors
    ///
    /// `ShapeMismatch` if the indexer's rank or axis sizes disagree with `data`.
    pub fn new(data: BaseTensor<T>, indexer: DataIndexer) -> Result<Self> {
        indexer.validate_shape(data.shape())?;
        Ok(Self { data, indexer })
    }

    pub fn data(&self) -> &BaseTensor<T> {
        &self.data
    }

    pub fn indexer(&self) -> &DataIndexer {
        &self.indexer
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn into_parts(self) -> (BaseTensor<T>, DataIndexer) {
        (self.data, self.indexer)
    }

    /// Axis index of `label`.
    pub fn axis(&self, label: &str) -> Result<usize> {
        self.indexer.resolve(label)
    }

    /// Keep `positions` along the axis `label`, in that order.
    pub fn select(&self, label: &str, positions: &[usize]) -> Result<Self> {
        let axis = self.axis(label)?;
        let data = self.data.select_indices(positions, axis)?;
        Ok(Self {
            data,
            indexer: self.indexer.select(axis, positions),
        })
    }

    /// Keep the positions named by `keys` along the axis `label`.
    ///
    /// # Errors
    ///
    /// `UnknownKey` if the axis is unkeyed or a key is missing.
    pub fn select_keys(&self, label: &str, keys: &[&str]) -> Result<Self> {
        let positions = keys
            .iter()
            .map(|key| self.indexer.key_position(label, key))
            .collect::<Result<Vec<_>>>()?;
        self.select(label, &positions)
    }

    /// Join tensors with identical labels along the axis `label`.
    ///
    /// Keys on that axis are concatenated when every part carries them.
    pub fn cat(tensors: &[Self], label: &str) -> Result<Self> {
        let first = tensors
            .first()
            .ok_or(TimeTensorError::EmptyInput { op: "DataTensor::cat" })?;
        let axis = first.axis(label)?;
        let indexers: Vec<&DataIndexer> = tensors.iter().map(|t| &t.indexer).collect();
        let indexer = DataIndexer::concatenate(&indexers, axis)?;

        let parts: Vec<BaseTensor<T>> = tensors.iter().map(|t| t.data.clone()).collect();
        let data = BaseTensor::concatenate(&parts, axis)?;
        Self::new(data, indexer)
    }

    /// Reinterpret as a [`TimeTensor`] with the axis `label` as time.
    pub fn to_time_tensor(&self, label: &str) -> Result<TimeTensor<T>> {
        TimeTensor::new(self.data.clone(), self.axis(label)?)
    }

    /// Attach labels, in axis order, to a time tensor.
    pub fn from_time_tensor<I, S>(tensor: &TimeTensor<T>, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let indexer = DataIndexer::from_labels(labels, tensor.shape())?;
        Self::new(tensor.data().clone(), indexer)
    }
}

impl<T: FloatElement> DataTensor<T> {
    /// Mean along the axis `label`.
    ///
    /// With `keepdim` the axis stays with length 1 and loses its keys.
    ///
    /// # Errors
    ///
    /// `InsufficientLength` if the axis is empty.
    pub fn mean(&self, label: &str, keepdim: bool) -> Result<Self> {
        let axis = self.axis(label)?;
        let available = self.shape()[axis];
        if available == 0 {
            return Err(TimeTensorError::InsufficientLength {
                op: "DataTensor::mean",
                required: 1,
                available,
            });
        }

        let reduced = self.data.as_array().map_axis(Axis(axis), |lane| {
            let values: Vec<f64> = lane.iter().map(|v| v.to_f64()).collect();
            T::from_f64(kernels::mean(&values))
        });
        if keepdim {
            Self::new(
                BaseTensor::from_array(reduced.insert_axis(Axis(axis))),
                self.indexer.collapse(axis),
            )
        } else {
            Self::new(BaseTensor::from_array(reduced), self.indexer.remove(axis)?)
        }
    }
}

impl<T: Element> fmt::Debug for DataTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTensor")
            .field("dtype", &self.data.dtype())
            .field(
                "axes",
                &self
                    .indexer
                    .axes()
                    .iter()
                    .map(|a| format!("{}:{}", a.name, a.size))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
