//! Dtype-generic dense tensors without time semantics.
//!
//! This module is organized into several submodules:
//! - `types`: Core `BaseTensor` type definition and accessors
//! - `creation`: Ranges and random draws
//! - `combining`: Concatenate, stack and chunk
//! - `indexing`: Selection and windowing along an axis
//! - `shape_ops`: Reshape, permute, squeeze/unsqueeze
//! - `elementwise`: Map, cast and same-shape arithmetic
//! - `base_traits`: Indexing and formatting trait implementations

mod base_traits;
mod combining;
mod creation;
mod elementwise;
mod indexing;
mod shape_ops;
mod types;

pub use types::BaseTensor;

use half::{bf16, f16};
use num_complex::Complex;

pub type ByteBaseTensor = BaseTensor<u8>;
pub type CharBaseTensor = BaseTensor<i8>;
pub type HalfBaseTensor = BaseTensor<f16>;
pub type BFloat16BaseTensor = BaseTensor<bf16>;
pub type FloatBaseTensor = BaseTensor<f32>;
pub type DoubleBaseTensor = BaseTensor<f64>;
pub type ComplexBaseTensor = BaseTensor<Complex<f64>>;
