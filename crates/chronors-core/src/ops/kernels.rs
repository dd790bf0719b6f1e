//! Scalar kernels over a single series, computed in `f64`.
//!
//! Callers guarantee the length preconditions; the kernels themselves do not
//! check them.

pub(crate) fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sum of squared deviations divided by `n - ddof`.
pub(crate) fn variance(xs: &[f64], ddof: usize) -> f64 {
    covariance(xs, xs, ddof)
}

pub(crate) fn covariance(xs: &[f64], ys: &[f64], ddof: usize) -> f64 {
    let (mx, my) = (mean(xs), mean(ys));
    let sum: f64 = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (x - mx) * (y - my))
        .sum();
    sum / (xs.len() - ddof) as f64
}

/// Autocovariance at lags `0..=max_lag`.
///
/// The lag-k sum is divided by `n`, or by `n - k` when `adjusted`.
pub(crate) fn autocovariance(xs: &[f64], max_lag: usize, adjusted: bool) -> Vec<f64> {
    let n = xs.len();
    let m = mean(xs);
    let centered: Vec<f64> = xs.iter().map(|&x| x - m).collect();
    (0..=max_lag)
        .map(|k| {
            let sum: f64 = centered[..n - k]
                .iter()
                .zip(&centered[k..])
                .map(|(a, b)| a * b)
                .sum();
            let denom = if adjusted { n - k } else { n };
            sum / denom as f64
        })
        .collect()
}

/// First difference applied `order` times; the result has `len - order` samples.
pub(crate) fn difference(xs: &[f64], order: usize) -> Vec<f64> {
    let mut current = xs.to_vec();
    for _ in 0..order {
        current = current.windows(2).map(|w| w[1] - w[0]).collect();
    }
    current
}
