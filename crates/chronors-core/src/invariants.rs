//! Invariant checks shared by time tensors and data tensors.
//!
//! Every check runs at operation entry and raises immediately; nothing is deferred.

use crate::error::{Result, TimeTensorError};

pub(crate) fn check_time_dim(time_dim: usize, rank: usize) -> Result<()> {
    if time_dim >= rank {
        return Err(TimeTensorError::InvalidTimeDimension { time_dim, rank });
    }
    Ok(())
}

pub(crate) fn check_axis(axis: usize, rank: usize) -> Result<()> {
    if axis >= rank {
        return Err(TimeTensorError::InvalidAxis { axis, rank });
    }
    Ok(())
}

pub(crate) fn check_nonempty_time(time_dim: usize, time_len: usize) -> Result<()> {
    if time_len == 0 {
        return Err(TimeTensorError::EmptyTimeAxis { time_dim });
    }
    Ok(())
}

pub(crate) fn check_indices(indices: &[usize], axis: usize, len: usize) -> Result<()> {
    match indices.iter().find(|&&index| index >= len) {
        Some(&index) => Err(TimeTensorError::IndexOutOfRange { index, axis, len }),
        None => Ok(()),
    }
}

/// Shapes must agree on rank and on every axis except `free_axis`.
pub(crate) fn check_shapes_except(
    op: &'static str,
    reference: &[usize],
    other: &[usize],
    free_axis: Option<usize>,
) -> Result<()> {
    let mismatch = reference.len() != other.len()
        || reference
            .iter()
            .zip(other)
            .enumerate()
            .any(|(dim, (a, b))| Some(dim) != free_axis && a != b);
    if mismatch {
        return Err(TimeTensorError::ShapeMismatch {
            op,
            expected: reference.to_vec(),
            got: other.to_vec(),
        });
    }
    Ok(())
}

pub(crate) fn check_same_time_dim(op: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(TimeTensorError::TimeDimMismatch { op, expected, got });
    }
    Ok(())
}

/// Time axis position after inserting a new axis at `inserted`.
pub(crate) fn time_dim_after_insert(time_dim: usize, inserted: usize) -> usize {
    if inserted <= time_dim {
        time_dim + 1
    } else {
        time_dim
    }
}

/// Time axis position after removing the (non-time) axis `removed`.
pub(crate) fn time_dim_after_remove(time_dim: usize, removed: usize) -> usize {
    debug_assert_ne!(time_dim, removed);
    if removed < time_dim {
        time_dim - 1
    } else {
        time_dim
    }
}
