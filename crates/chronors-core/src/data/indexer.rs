//! Symbolic axis labels and per-position keys.

use crate::error::{Result, TimeTensorError};
use crate::invariants::check_axis;
use crate::types::AxisMeta;

/// Ordered axis labels of a [`DataTensor`](crate::DataTensor).
///
/// Resolves a label to its axis index, and a key to its position along a keyed
/// axis, before any structural work is delegated to the buffer.
///
/// # Examples
///
/// ```
/// use chronors_core::DataIndexer;
///
/// let indexer = DataIndexer::from_labels(["sensor", "time"], &[3, 200])
///     .unwrap()
///     .with_keys("sensor", ["x", "y", "z"])
///     .unwrap();
///
/// assert_eq!(indexer.resolve("time").unwrap(), 1);
/// assert_eq!(indexer.key_position("sensor", "z").unwrap(), 2);
/// assert!(indexer.resolve("channel").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataIndexer {
    axes: Vec<AxisMeta>,
}

impl DataIndexer {
    /// # Errors
    ///
    /// `DuplicateAxis` if two axes share a label.
    pub fn new(axes: Vec<AxisMeta>) -> Result<Self> {
        for (i, axis) in axes.iter().enumerate() {
            if axes[..i].iter().any(|other| other.name == axis.name) {
                return Err(TimeTensorError::DuplicateAxis(axis.name.clone()));
            }
        }
        Ok(Self { axes })
    }

    /// One unkeyed axis per label, sized from `shape`.
    pub fn from_labels<I, S>(labels: I, shape: &[usize]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = labels.into_iter().map(Into::into).collect();
        if names.len() != shape.len() {
            return Err(TimeTensorError::ShapeMismatch {
                op: "DataIndexer::from_labels",
                expected: vec![shape.len()],
                got: vec![names.len()],
            });
        }
        Self::new(
            names
                .into_iter()
                .zip(shape)
                .map(|(name, &size)| AxisMeta::new(name, size))
                .collect(),
        )
    }

    pub fn rank(&self) -> usize {
        self.axes.len()
    }

    pub fn axes(&self) -> &[AxisMeta] {
        &self.axes
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|axis| axis.name.as_str())
    }

    /// Axis index of `label`.
    ///
    /// # Errors
    ///
    /// `UnknownAxis` if no axis carries the label.
    pub fn resolve(&self, label: &str) -> Result<usize> {
        self.axes
            .iter()
            .position(|axis| axis.name == label)
            .ok_or_else(|| TimeTensorError::UnknownAxis(label.to_string()))
    }

    pub fn axis(&self, label: &str) -> Result<&AxisMeta> {
        Ok(&self.axes[self.resolve(label)?])
    }

    /// Position of `key` along the axis `label`.
    ///
    /// # Errors
    ///
    /// `UnknownAxis`, or `UnknownKey` when the axis is unkeyed or lacks the key.
    pub fn key_position(&self, label: &str, key: &str) -> Result<usize> {
        self.axis(label)?
            .key_position(key)
            .ok_or_else(|| TimeTensorError::UnknownKey {
                axis: label.to_string(),
                key: key.to_string(),
            })
    }

    /// Attach one key per position to the axis `label`.
    pub fn with_keys<I, S>(mut self, label: &str, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let axis = self.resolve(label)?;
        self.axes[axis] = self.axes[axis].clone().with_keys(keys)?;
        Ok(self)
    }

    /// Rank and every axis size must agree with `shape`.
    pub(crate) fn validate_shape(&self, shape: &[usize]) -> Result<()> {
        let sizes: Vec<usize> = self.axes.iter().map(|axis| axis.size).collect();
        if sizes != shape {
            return Err(TimeTensorError::ShapeMismatch {
                op: "DataTensor::new",
                expected: sizes,
                got: shape.to_vec(),
            });
        }
        Ok(())
    }

    pub(crate) fn select(&self, axis: usize, positions: &[usize]) -> Self {
        let mut axes = self.axes.clone();
        axes[axis] = axes[axis].select(positions);
        Self { axes }
    }

    /// Metadata after the axis has been reduced to length 1 (keys dropped).
    pub(crate) fn collapse(&self, axis: usize) -> Self {
        let mut axes = self.axes.clone();
        axes[axis] = AxisMeta::new(axes[axis].name.clone(), 1);
        Self { axes }
    }

    pub(crate) fn remove(&self, axis: usize) -> Result<Self> {
        check_axis(axis, self.rank())?;
        let mut axes = self.axes.clone();
        axes.remove(axis);
        Ok(Self { axes })
    }

    /// Metadata for several tensors joined along `axis`.
    ///
    /// Keys survive only when every part is keyed on that axis.
    pub(crate) fn concatenate(parts: &[&Self], axis: usize) -> Result<Self> {
        let first = parts.first().ok_or(TimeTensorError::EmptyInput {
            op: "DataIndexer::concatenate",
        })?;
        for part in &parts[1..] {
            if !part.labels().eq(first.labels()) {
                return Err(TimeTensorError::InvalidArgument(format!(
                    "axis labels differ: {:?} vs {:?}",
                    first.labels().collect::<Vec<_>>(),
                    part.labels().collect::<Vec<_>>()
                )));
            }
        }
        let size = parts.iter().map(|p| p.axes[axis].size).sum();
        let keys: Option<Vec<String>> = parts
            .iter()
            .map(|p| p.axes[axis].keys.clone())
            .collect::<Option<Vec<_>>>()
            .map(|all| all.concat());

        let mut axes = first.axes.clone();
        let joined = AxisMeta::new(axes[axis].name.clone(), size);
        axes[axis] = match keys {
            Some(keys) => joined.with_keys(keys)?,
            None => joined,
        };
        Ok(Self { axes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_labels_rejected() {
        assert!(matches!(
            DataIndexer::from_labels(["time", "time"], &[2, 3]),
            Err(TimeTensorError::DuplicateAxis(label)) if label == "time"
        ));
    }

    #[test]
    fn test_unknown_key() {
        let indexer = DataIndexer::from_labels(["channel", "time"], &[2, 10]).unwrap();
        assert!(matches!(
            indexer.key_position("channel", "left"),
            Err(TimeTensorError::UnknownKey { .. })
        ));
        assert!(matches!(
            indexer.key_position("batch", "left"),
            Err(TimeTensorError::UnknownAxis(_))
        ));
    }

    #[test]
    fn test_concatenate_keys() {
        let a = DataIndexer::from_labels(["channel", "time"], &[2, 4])
            .unwrap()
            .with_keys("channel", ["a", "b"])
            .unwrap();
        let b = DataIndexer::from_labels(["channel", "time"], &[1, 4])
            .unwrap()
            .with_keys("channel", ["c"])
            .unwrap();
        let joined = DataIndexer::concatenate(&[&a, &b], 0).unwrap();
        assert_eq!(joined.axes()[0].size, 3);
        assert_eq!(joined.key_position("channel", "c").unwrap(), 2);

        assert!(matches!(
            DataIndexer::concatenate(&[&a, &a], 0),
            Err(TimeTensorError::DuplicateAxis(_))
        ));
    }
}
