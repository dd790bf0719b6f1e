//! Base tensor creation: ranges and random draws
//!
//! Random draws go through scirs2_core::random, never rand directly.

use super::types::BaseTensor;
use crate::dtype::{Element, FloatElement};
use crate::error::{Result, TimeTensorError};
use scirs2_core::ndarray_ext::{Array, IxDyn};
use scirs2_core::random::Rng;

impl<T: Element> BaseTensor<T> {
    /// Create a tensor filled with a specific value
    pub fn full(shape: &[usize], value: T) -> Self {
        Self::from_elem(shape, value)
    }

    /// Create a 1D tensor with values `start, start + step, ...` below `stop`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `step` is zero, the bounds are not finite, or the
    /// element count cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::arange(0.0, 5.0, 1.0).unwrap();
    /// assert_eq!(tensor.shape(), &[5]);
    /// assert_eq!(tensor[&[4]], 4.0);
    ///
    /// let down = BaseTensor::<f64>::arange(1.0, 0.0, -0.25).unwrap();
    /// assert_eq!(down.to_vec(), vec![1.0, 0.75, 0.5, 0.25]);
    /// ```
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self> {
        if step == 0.0 || !step.is_finite() {
            return Err(TimeTensorError::InvalidArgument(format!(
                "arange step must be finite and non-zero, got {step}"
            )));
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(TimeTensorError::InvalidArgument(format!(
                "arange bounds must be finite, got [{start}, {stop})"
            )));
        }
        let count = ((stop - start) / step).ceil().max(0.0);
        // largest length a buffer of `T` can address
        let limit = (isize::MAX as usize / std::mem::size_of::<T>().max(1)) as f64;
        if count >= limit {
            return Err(TimeTensorError::InvalidArgument(format!(
                "arange over [{start}, {stop}) with step {step} has too many elements"
            )));
        }
        let n = count as usize;
        let data: Vec<T> = (0..n)
            .map(|i| T::from_f64(start + step * i as f64))
            .collect();
        Self::from_vec(data, &[n])
    }

    /// Create a 1D tensor with `num` evenly spaced values over `[start, stop]`
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::linspace(0.0, 10.0, 5).unwrap();
    /// assert_eq!(tensor.to_vec(), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    /// ```
    pub fn linspace(start: f64, stop: f64, num: usize) -> Result<Self> {
        let data: Vec<T> = linspace_values(start, stop, num)
            .into_iter()
            .map(T::from_f64)
            .collect();
        Self::from_vec(data, &[num])
    }

    /// Create a 1D tensor with `num` values `base^x` for `x` evenly spaced over
    /// `[start, stop]`
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::logspace(0.0, 3.0, 4, 10.0).unwrap();
    /// assert_eq!(tensor.to_vec(), vec![1.0, 10.0, 100.0, 1000.0]);
    /// ```
    pub fn logspace(start: f64, stop: f64, num: usize, base: f64) -> Result<Self> {
        if !(base > 0.0) {
            return Err(TimeTensorError::InvalidArgument(format!(
                "logspace base must be positive, got {base}"
            )));
        }
        let data: Vec<T> = linspace_values(start, stop, num)
            .into_iter()
            .map(|x| T::from_f64(base.powf(x)))
            .collect();
        Self::from_vec(data, &[num])
    }
}

fn linspace_values(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| {
                    // pin the endpoint to avoid accumulated rounding
                    if i == num - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

impl<T: FloatElement> BaseTensor<T> {
    /// Create a tensor with values drawn uniformly from `[low, high)`
    ///
    /// Uses the engine's process-wide generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronors_core::BaseTensor;
    ///
    /// let tensor = BaseTensor::<f64>::random_uniform(&[2, 3], 0.0, 1.0);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert!(tensor.iter().all(|&v| (0.0..1.0).contains(&v)));
    /// ```
    pub fn random_uniform(shape: &[usize], low: f64, high: f64) -> Self {
        use scirs2_core::random::quick::random_f64;
        let range = high - low;
        Self::from_sampler(shape, || low + random_f64() * range)
    }

    /// Create a tensor with values from a normal distribution (Box-Muller)
    pub fn random_normal(shape: &[usize], mean: f64, std: f64) -> Self {
        use scirs2_core::random::quick::random_f64;
        Self::from_sampler(shape, || mean + std * box_muller(random_f64(), random_f64()))
    }

    /// Uniform draws from a caller-supplied generator, for reproducible data
    pub fn random_uniform_with<R: Rng>(shape: &[usize], low: f64, high: f64, rng: &mut R) -> Self {
        let range = high - low;
        Self::from_sampler(shape, || low + rng.random::<f64>() * range)
    }

    /// Normal draws from a caller-supplied generator, for reproducible data
    pub fn random_normal_with<R: Rng>(shape: &[usize], mean: f64, std: f64, rng: &mut R) -> Self {
        Self::from_sampler(shape, || {
            let u1 = rng.random::<f64>();
            let u2 = rng.random::<f64>();
            mean + std * box_muller(u1, u2)
        })
    }

    fn from_sampler<F: FnMut() -> f64>(shape: &[usize], mut sample: F) -> Self {
        Self {
            data: Array::from_shape_simple_fn(IxDyn(shape), || T::from_f64(sample())),
        }
    }
}

/// One standard normal deviate from two uniforms in `[0, 1)`.
fn box_muller(u1: f64, u2: f64) -> f64 {
    // 1 - u1 lies in (0, 1], keeping ln finite
    (-2.0 * (1.0 - u1).ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::random::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_arange_rejects_zero_step() {
        assert!(BaseTensor::<f64>::arange(0.0, 1.0, 0.0).is_err());
        let empty = BaseTensor::<f64>::arange(1.0, 0.0, 1.0).unwrap();
        assert_eq!(empty.shape(), &[0]);
    }

    #[test]
    fn test_linspace_edge_counts() {
        assert_eq!(BaseTensor::<f32>::linspace(0.0, 1.0, 0).unwrap().len(), 0);
        assert_eq!(
            BaseTensor::<f32>::linspace(3.0, 7.0, 1).unwrap().to_vec(),
            vec![3.0]
        );
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let x = BaseTensor::<f64>::random_normal_with(&[4, 8], 0.0, 1.0, &mut a);
        let y = BaseTensor::<f64>::random_normal_with(&[4, 8], 0.0, 1.0, &mut b);
        assert_eq!(x, y);
        assert!(x.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_arange_too_many_elements() {
        assert!(matches!(
            BaseTensor::<f64>::arange(0.0, 1e300, 1.0),
            Err(TimeTensorError::InvalidArgument(_))
        ));
        assert!(BaseTensor::<f64>::arange(0.0, -1e300, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_random_uniform_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let t = BaseTensor::<f32>::random_uniform_with(&[100], -2.0, 3.0, &mut rng);
        assert!(t.iter().all(|&v| (-2.0..=3.0).contains(&v)));
    }
}
