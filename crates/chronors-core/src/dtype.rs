//! Element type taxonomy and per-dtype kernels.
//!
//! All tensor variants (byte, char, half, bfloat16, float, double, complex) share one
//! generic structure. The [`Element`] trait is the small dispatch table each element
//! type provides: identity values, conversion through `f64`, accumulation and decoding
//! from a raw native-endian buffer.
//!
//! # Examples
//!
//! ```
//! use chronors_core::{DType, Element};
//!
//! assert_eq!(<f32 as Element>::DTYPE, DType::F32);
//! assert_eq!(DType::F16.element_size(), 2);
//! assert!(DType::BF16.is_float());
//! assert!(DType::Complex128.is_complex());
//! ```

use half::{bf16, f16};
use num_complex::Complex;
use std::fmt;

/// Element types a tensor can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DType {
    U8,
    I8,
    I16,
    I32,
    I64,
    F16,
    BF16,
    F32,
    F64,
    /// Two `f32` components
    Complex64,
    /// Two `f64` components
    Complex128,
}

impl DType {
    /// Size in bytes of a single element.
    pub fn element_size(&self) -> usize {
        match self {
            DType::U8 | DType::I8 => 1,
            DType::I16 | DType::F16 | DType::BF16 => 2,
            DType::I32 | DType::F32 => 4,
            DType::I64 | DType::F64 | DType::Complex64 => 8,
            DType::Complex128 => 16,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DType::F16 | DType::BF16 | DType::F32 | DType::F64)
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, DType::Complex64 | DType::Complex128)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DType::U8 | DType::I8 | DType::I16 | DType::I32 | DType::I64
        )
    }

    pub fn is_signed(&self) -> bool {
        !matches!(self, DType::U8)
    }

    /// Canonical lowercase name (`float32`, `bfloat16`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            DType::U8 => "uint8",
            DType::I8 => "int8",
            DType::I16 => "int16",
            DType::I32 => "int32",
            DType::I64 => "int64",
            DType::F16 => "float16",
            DType::BF16 => "bfloat16",
            DType::F32 => "float32",
            DType::F64 => "float64",
            DType::Complex64 => "complex64",
            DType::Complex128 => "complex128",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-dtype kernel table implemented by every storable element type.
///
/// Integer conversions from `f64` saturate; complex conversions map to and from the
/// real component.
pub trait Element: Copy + Send + Sync + fmt::Debug + PartialEq + 'static {
    /// Tag identifying this element type at runtime
    const DTYPE: DType;

    fn zero() -> Self;

    fn one() -> Self;

    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;

    /// Addition used when assembling tensors (duplicate sparse coordinates).
    /// Integer types wrap on overflow.
    fn add_elem(self, other: Self) -> Self;

    /// Decode one element from exactly `DTYPE.element_size()` native-endian bytes.
    fn from_ne_bytes(bytes: &[u8]) -> Self;
}

/// Real floating-point elements, the domain of statistical and series kernels.
pub trait FloatElement: Element + PartialOrd {}

macro_rules! impl_int_element {
    ($($t:ty => $dtype:expr),* $(,)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = $dtype;

                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn add_elem(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                fn from_ne_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }
            }
        )*
    };
}

impl_int_element!(
    u8 => DType::U8,
    i8 => DType::I8,
    i16 => DType::I16,
    i32 => DType::I32,
    i64 => DType::I64,
);

macro_rules! impl_primitive_float_element {
    ($($t:ty => $dtype:expr),* $(,)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = $dtype;

                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn add_elem(self, other: Self) -> Self {
                    self + other
                }

                fn from_ne_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }
            }

            impl FloatElement for $t {}
        )*
    };
}

impl_primitive_float_element!(f32 => DType::F32, f64 => DType::F64);

macro_rules! impl_half_element {
    ($($t:ty => $dtype:expr),* $(,)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = $dtype;

                fn zero() -> Self {
                    <$t>::ZERO
                }

                fn one() -> Self {
                    <$t>::ONE
                }

                fn from_f64(value: f64) -> Self {
                    <$t>::from_f64(value)
                }

                fn to_f64(self) -> f64 {
                    <$t>::to_f64(self)
                }

                fn add_elem(self, other: Self) -> Self {
                    <$t>::from_f32(self.to_f32() + other.to_f32())
                }

                fn from_ne_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; 2];
                    buf.copy_from_slice(bytes);
                    <$t>::from_bits(u16::from_ne_bytes(buf))
                }
            }

            impl FloatElement for $t {}
        )*
    };
}

impl_half_element!(f16 => DType::F16, bf16 => DType::BF16);

macro_rules! impl_complex_element {
    ($($t:ty => $dtype:expr),* $(,)?) => {
        $(
            impl Element for Complex<$t> {
                const DTYPE: DType = $dtype;

                fn zero() -> Self {
                    Complex::new(0.0, 0.0)
                }

                fn one() -> Self {
                    Complex::new(1.0, 0.0)
                }

                fn from_f64(value: f64) -> Self {
                    Complex::new(value as $t, 0.0)
                }

                fn to_f64(self) -> f64 {
                    self.re as f64
                }

                fn add_elem(self, other: Self) -> Self {
                    self + other
                }

                fn from_ne_bytes(bytes: &[u8]) -> Self {
                    let width = std::mem::size_of::<$t>();
                    Complex::new(
                        <$t as Element>::from_ne_bytes(&bytes[..width]),
                        <$t as Element>::from_ne_bytes(&bytes[width..]),
                    )
                }
            }
        )*
    };
}

impl_complex_element!(f32 => DType::Complex64, f64 => DType::Complex128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_sizes_match_rust_types() {
        assert_eq!(DType::U8.element_size(), std::mem::size_of::<u8>());
        assert_eq!(DType::F16.element_size(), std::mem::size_of::<f16>());
        assert_eq!(DType::BF16.element_size(), std::mem::size_of::<bf16>());
        assert_eq!(
            DType::Complex64.element_size(),
            std::mem::size_of::<Complex<f32>>()
        );
        assert_eq!(
            DType::Complex128.element_size(),
            std::mem::size_of::<Complex<f64>>()
        );
    }

    #[test]
    fn test_dtype_classification() {
        assert!(DType::F32.is_float());
        assert!(!DType::Complex64.is_float());
        assert!(DType::I16.is_integer());
        assert!(!DType::U8.is_signed());
        assert_eq!(DType::BF16.to_string(), "bfloat16");
    }

    #[test]
    fn test_from_ne_bytes_roundtrip() {
        let v = -12345.5f64;
        assert_eq!(<f64 as Element>::from_ne_bytes(&v.to_ne_bytes()), v);

        let h = f16::from_f32(1.5);
        assert_eq!(
            <f16 as Element>::from_ne_bytes(&h.to_bits().to_ne_bytes()),
            h
        );

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2.0f32.to_ne_bytes());
        bytes.extend_from_slice(&(-3.0f32).to_ne_bytes());
        let c = <Complex<f32> as Element>::from_ne_bytes(&bytes);
        assert_eq!(c, Complex::new(2.0, -3.0));
    }

    #[test]
    fn test_integer_conversions_saturate() {
        assert_eq!(<u8 as Element>::from_f64(300.0), 255);
        assert_eq!(<i8 as Element>::from_f64(-300.0), -128);
        assert_eq!(<u8 as Element>::from_f64(-1.0), 0);
        assert_eq!(200u8.add_elem(100), 44);
    }
}
