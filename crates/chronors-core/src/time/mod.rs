//! Time-dimension tensors.
//!
//! - `types`: `TimeTensor` definition, construction, accessors and arithmetic
//! - `axis_ops`: permute, transpose, squeeze/unsqueeze and time-axis selection
//! - `time_traits`: indexing and formatting

mod axis_ops;
mod time_traits;
mod types;

pub use types::TimeTensor;

use half::{bf16, f16};
use num_complex::Complex;

pub type ByteTimeTensor = TimeTensor<u8>;
pub type CharTimeTensor = TimeTensor<i8>;
pub type HalfTimeTensor = TimeTensor<f16>;
pub type BFloat16TimeTensor = TimeTensor<bf16>;
pub type FloatTimeTensor = TimeTensor<f32>;
pub type DoubleTimeTensor = TimeTensor<f64>;
pub type ComplexTimeTensor = TimeTensor<Complex<f64>>;
