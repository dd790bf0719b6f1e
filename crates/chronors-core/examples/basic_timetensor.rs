//! Basic time tensor creation and axis bookkeeping.
//!
//! This example demonstrates:
//! - Creating time tensors with explicit time axis placement
//! - How permute/unsqueeze/index_select move the time axis
//! - Concatenating along time and stacking into a batch
//! - Labelled axes with `DataTensor`
//!
//! Run with:
//! ```bash
//! cargo run --example basic_timetensor
//! ```

use chronors_core::ops::{arange, stack, tcat, timetensor, zeros};
use chronors_core::{DataTensor, Result, TimeDim};

fn main() -> Result<()> {
    println!("=== chronors-core: Basic Time Tensor Examples ===\n");

    example_creation()?;
    example_axis_moves()?;
    example_joining()?;
    example_labels()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_creation() -> Result<()> {
    println!("--- Example 1: Creation ---");

    // Time last by default
    let x = zeros::<f32>(&[3, 100], TimeDim::Last)?;
    println!("zeros [3, 100], time last: {x}");

    // Explicit time axis
    let y = zeros::<f64>(&[50, 4], 0)?;
    println!("zeros [50, 4], time first: {y}");

    // Ranges are always 1-D series
    let r = arange::<f64>(0.0, 1.0, 0.25)?;
    println!("arange(0, 1, 0.25): {:?}", r.to_vec());
    Ok(())
}

fn example_axis_moves() -> Result<()> {
    println!("\n--- Example 2: Axis Moves ---");

    let x = zeros::<f64>(&[8, 200, 3], 1)?;
    println!("start:            {x}");
    println!("permute [2,1,0]:  {}", x.permute(&[2, 1, 0])?);
    println!("unsqueeze(0):     {}", x.unsqueeze(0)?);
    println!("index_select ch0: {}", x.index_select(2, &[0])?);

    match zeros::<f64>(&[1, 10], 0)?.squeeze_axis(0) {
        Ok(_) => println!("unexpected: squeezed the time axis"),
        Err(e) => println!("squeeze time axis: {e}"),
    }
    Ok(())
}

fn example_joining() -> Result<()> {
    println!("\n--- Example 3: Joining ---");

    let a = timetensor(vec![1.0f64, 2.0, 3.0], &[3], 0)?;
    let b = timetensor(vec![4.0, 5.0], &[2], 0)?;
    let joined = tcat(&[a.clone(), a.clone()])?;
    println!("tcat lengths 3 + 3 = {}", joined.time_len());

    let longer = tcat(&[a.clone(), b])?;
    println!("tcat values: {:?}", longer.to_vec());

    let batch = stack(&[a.clone(), a], 0)?;
    println!("stack of two series: {batch}");
    Ok(())
}

fn example_labels() -> Result<()> {
    println!("\n--- Example 4: Labelled Axes ---");

    let x = timetensor(
        (0..12).map(f64::from).collect(),
        &[3, 4],
        TimeDim::Last,
    )?;
    let dt = DataTensor::from_time_tensor(&x, ["sensor", "time"])?;
    let keyed = dt.indexer().clone().with_keys("sensor", ["x", "y", "z"])?;
    let dt = DataTensor::new(dt.data().clone(), keyed)?;

    let z = dt.select_keys("sensor", &["z"])?;
    println!("sensor z: {:?}", z.data().to_vec());

    let per_sensor = dt.mean("time", false)?;
    println!("mean over time: {:?}", per_sensor.data().to_vec());
    Ok(())
}
