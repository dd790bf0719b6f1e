//! Affine quantization of time tensors.
//!
//! Quantization only changes the numeric representation: shape and time axis
//! are carried through unchanged in both directions.
//!
//! # Examples
//!
//! ```
//! use chronors_core::ops::{dequantize, from_vec, quantize_per_timetensor, QDType};
//!
//! let x = from_vec(vec![-1.0f32, 0.0, 0.5, 1.0]);
//! let q = quantize_per_timetensor(&x, 0.5, 0, QDType::QInt8).unwrap();
//! assert_eq!(q.codes().to_vec(), vec![-2, 0, 1, 2]);
//! assert_eq!(q.time_dim(), x.time_dim());
//!
//! let back = dequantize::<f32>(&q);
//! assert_eq!(back.to_vec(), x.to_vec());
//! ```

use crate::base::BaseTensor;
use crate::dtype::{Element, FloatElement};
use crate::error::{Result, TimeTensorError};
use crate::invariants::check_axis;
use crate::time::TimeTensor;
use scirs2_core::ndarray_ext::{ArrayD, Axis, Zip};

/// Integer code range of a quantized tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QDType {
    /// Codes in `[-128, 127]`
    QInt8,
    /// Codes in `[0, 255]`
    QUInt8,
}

impl QDType {
    pub fn min_code(self) -> i32 {
        match self {
            QDType::QInt8 => i8::MIN as i32,
            QDType::QUInt8 => u8::MIN as i32,
        }
    }

    pub fn max_code(self) -> i32 {
        match self {
            QDType::QInt8 => i8::MAX as i32,
            QDType::QUInt8 => u8::MAX as i32,
        }
    }

    fn quantize(self, value: f64, scale: f64, zero_point: i32) -> i32 {
        let code = (value / scale).round() + zero_point as f64;
        code.clamp(self.min_code() as f64, self.max_code() as f64) as i32
    }
}

/// Affine mapping `value = (code - zero_point) * scale`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QScheme {
    /// One scale and zero point for the whole tensor
    PerTensor { scale: f64, zero_point: i32 },
    /// One scale and zero point per position along `axis`
    PerChannel {
        scales: Vec<f64>,
        zero_points: Vec<i32>,
        axis: usize,
    },
}

/// Integer codes plus the affine scheme and the original time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedTimeTensor {
    codes: BaseTensor<i32>,
    scheme: QScheme,
    qdtype: QDType,
    time_dim: usize,
}

impl QuantizedTimeTensor {
    pub fn codes(&self) -> &BaseTensor<i32> {
        &self.codes
    }

    pub fn scheme(&self) -> &QScheme {
        &self.scheme
    }

    pub fn qdtype(&self) -> QDType {
        self.qdtype
    }

    pub fn time_dim(&self) -> usize {
        self.time_dim
    }

    pub fn time_len(&self) -> usize {
        self.codes.shape()[self.time_dim]
    }

    pub fn shape(&self) -> &[usize] {
        self.codes.shape()
    }
}

fn check_affine(qdtype: QDType, scale: f64, zero_point: i32) -> Result<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(TimeTensorError::InvalidArgument(format!(
            "quantization scale must be positive and finite, got {scale}"
        )));
    }
    if zero_point < qdtype.min_code() || zero_point > qdtype.max_code() {
        return Err(TimeTensorError::InvalidArgument(format!(
            "zero point {zero_point} outside the {qdtype:?} code range"
        )));
    }
    Ok(())
}

/// Quantize with one scale and zero point for the whole tensor.
///
/// # Errors
///
/// `InvalidArgument` for a non-positive scale or an out-of-range zero point.
pub fn quantize_per_timetensor<T: FloatElement>(
    x: &TimeTensor<T>,
    scale: f64,
    zero_point: i32,
    qdtype: QDType,
) -> Result<QuantizedTimeTensor> {
    check_affine(qdtype, scale, zero_point)?;
    let codes = x
        .data()
        .map(|v| qdtype.quantize(v.to_f64(), scale, zero_point));
    Ok(QuantizedTimeTensor {
        codes,
        scheme: QScheme::PerTensor { scale, zero_point },
        qdtype,
        time_dim: x.time_dim(),
    })
}

/// Quantize with a separate scale and zero point for each position along `axis`.
///
/// # Errors
///
/// - `InvalidAxis` if `axis` is out of range
/// - `ShapeMismatch` if `scales` or `zero_points` do not match the axis length
/// - `InvalidArgument` for any invalid scale or zero point
pub fn quantize_per_channel<T: FloatElement>(
    x: &TimeTensor<T>,
    scales: &[f64],
    zero_points: &[i32],
    axis: usize,
    qdtype: QDType,
) -> Result<QuantizedTimeTensor> {
    check_axis(axis, x.rank())?;
    let len = x.shape()[axis];
    for got in [scales.len(), zero_points.len()] {
        if got != len {
            return Err(TimeTensorError::ShapeMismatch {
                op: "quantize_per_channel",
                expected: vec![len],
                got: vec![got],
            });
        }
    }
    for (&scale, &zero_point) in scales.iter().zip(zero_points) {
        check_affine(qdtype, scale, zero_point)?;
    }

    let codes = map_along(x.data().as_array(), axis, |c, v| {
        qdtype.quantize(v.to_f64(), scales[c], zero_points[c])
    });
    Ok(QuantizedTimeTensor {
        codes: BaseTensor::from_array(codes),
        scheme: QScheme::PerChannel {
            scales: scales.to_vec(),
            zero_points: zero_points.to_vec(),
            axis,
        },
        qdtype,
        time_dim: x.time_dim(),
    })
}

/// Apply `f(position, value)` where `position` is the index along `axis`.
fn map_along<A, B, F>(src: &ArrayD<A>, axis: usize, f: F) -> ArrayD<B>
where
    A: Copy,
    B: Element,
    F: Fn(usize, A) -> B,
{
    let mut out = ArrayD::from_elem(src.raw_dim(), B::zero());
    for (c, (lane, from)) in out
        .axis_iter_mut(Axis(axis))
        .zip(src.axis_iter(Axis(axis)))
        .enumerate()
    {
        Zip::from(lane).and(from).for_each(|o, &v| *o = f(c, v));
    }
    out
}

/// Map codes back to floating-point values with the stored scheme.
pub fn dequantize<T: FloatElement>(q: &QuantizedTimeTensor) -> TimeTensor<T> {
    let data = match &q.scheme {
        QScheme::PerTensor { scale, zero_point } => q
            .codes
            .map(|code| T::from_f64((code - zero_point) as f64 * scale)),
        QScheme::PerChannel {
            scales,
            zero_points,
            axis,
        } => BaseTensor::from_array(map_along(q.codes.as_array(), *axis, |c, code| {
            T::from_f64((code - zero_points[c]) as f64 * scales[c])
        })),
    };
    TimeTensor::from_parts(data, q.time_dim)
}
