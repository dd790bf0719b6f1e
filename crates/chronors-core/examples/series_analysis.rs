//! Statistics and series analysis on a noisy multi-channel signal.
//!
//! Run with:
//! ```bash
//! cargo run --example series_analysis
//! ```

use chronors_core::ops::{acf, cor, diff, randn_with, timetensor, tmean, tstd};
use chronors_core::{AcfOptions, DiffBoundary, DiffOptions, ReduceOptions, Result, TimeDim};
use scirs2_core::random::{rngs::StdRng, SeedableRng};

fn main() -> Result<()> {
    let steps = 256;
    let mut rng = StdRng::seed_from_u64(7);

    // channel 0: slow sine, channel 1: trend; both plus noise
    let noise = randn_with::<f64, _>(&[2, steps], TimeDim::Last, &mut rng)?;
    let mut values = Vec::with_capacity(2 * steps);
    for t in 0..steps {
        values.push((t as f64 / 16.0).sin());
    }
    for t in 0..steps {
        values.push(t as f64 * 0.01);
    }
    let clean = timetensor(values, &[2, steps], TimeDim::Last)?;
    let signal = clean.try_add(&noise.map(|n| 0.1 * n))?;
    println!("signal: {signal}");

    let mean = tmean(&signal, ReduceOptions::default())?;
    let std = tstd(&signal, ReduceOptions::default())?;
    println!("per-channel mean: {:?}", mean.to_vec());
    println!("per-channel std:  {:?}", std.to_vec());

    let r = cor(&signal)?;
    println!("channel correlation:\n{r:?}");

    // removing the trend with a first difference
    let d = diff(&signal, DiffOptions::default())?;
    println!("diff (drop): time_len {} -> {}", signal.time_len(), d.time_len());

    let padded = diff(
        &signal,
        DiffOptions::default().with_boundary(DiffBoundary::Pad(0.0)),
    )?;
    println!("diff (pad):  time_len {} -> {}", signal.time_len(), padded.time_len());

    let coefficients = acf(&signal, AcfOptions::new(8))?;
    println!("acf lags 0..=8, shape {:?}:", coefficients.shape());
    for lag in 0..=8 {
        println!(
            "  lag {lag}: sine {:+.3}  trend {:+.3}",
            coefficients[&[0, lag]],
            coefficients[&[1, lag]]
        );
    }
    Ok(())
}
