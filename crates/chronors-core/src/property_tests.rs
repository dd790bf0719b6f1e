//! Property-based tests for time tensor operations
//!
//! These check the time-axis bookkeeping and the series identities across
//! randomly generated shapes, time axes and values.

#[cfg(test)]
mod tests {
    use crate::ops::{acf, diff, from_vec, rand, tcat, timetensor, tindex_select, zeros};
    use crate::{AcfOptions, DiffOptions, TimeTensor, TimeTensorError};
    use proptest::prelude::*;

    // 1-4D shapes with small axes
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=4)
    }

    // shape plus a valid time axis for it
    fn shape_and_time_dim() -> impl Strategy<Value = (Vec<usize>, usize)> {
        shape_strategy().prop_flat_map(|shape| {
            let rank = shape.len();
            (Just(shape), 0..rank)
        })
    }

    fn series(len: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-100.0f64..100.0, len)
    }

    // three tensors of shape (2, t_i) with time last
    fn triple(a: Vec<f64>, b: Vec<f64>, c: Vec<f64>) -> [TimeTensor<f64>; 3] {
        let make = |v: Vec<f64>| {
            let len = v.len() / 2;
            timetensor(v, &[2, len], 1).unwrap()
        };
        [make(a), make(b), make(c)]
    }

    proptest! {
        #[test]
        fn prop_creation_time_len((shape, time_dim) in shape_and_time_dim()) {
            let z = zeros::<f32>(&shape, time_dim).unwrap();
            prop_assert_eq!(z.time_dim(), time_dim);
            prop_assert_eq!(z.time_len(), shape[time_dim]);

            let r = rand::<f64>(&shape, time_dim).unwrap();
            prop_assert_eq!(r.time_len(), r.shape()[time_dim]);
        }

        #[test]
        fn prop_invalid_time_dim_rejected(shape in shape_strategy(), extra in 0usize..3) {
            let rank = shape.len();
            let result = zeros::<f64>(&shape, rank + extra);
            let is_invalid_time_dim = matches!(
                result,
                Err(TimeTensorError::InvalidTimeDimension { .. })
            );
            prop_assert!(is_invalid_time_dim);
        }

        #[test]
        fn prop_tcat_lengths_add(
            a in series(10),
            b in series(6),
        ) {
            let x = from_vec(a);
            let y = from_vec(b);
            let joined = tcat(&[x.clone(), y.clone()]).unwrap();
            prop_assert_eq!(joined.time_len(), x.time_len() + y.time_len());
        }

        #[test]
        fn prop_tcat_associative(
            a in series(4),
            b in series(6),
            c in series(2),
        ) {
            let [a, b, c] = triple(a, b, c);
            let left = tcat(&[tcat(&[a.clone(), b.clone()]).unwrap(), c.clone()]).unwrap();
            let right = tcat(&[a, tcat(&[b, c]).unwrap()]).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_tindex_select_identity((shape, time_dim) in shape_and_time_dim()) {
            let x = rand::<f64>(&shape, time_dim).unwrap();
            let identity: Vec<usize> = (0..x.time_len()).collect();
            prop_assert_eq!(tindex_select(&x, &identity).unwrap(), x.clone());

            let past_end = matches!(
                tindex_select(&x, &[x.time_len()]),
                Err(TimeTensorError::IndexOutOfRange { .. })
            );
            prop_assert!(past_end);
        }

        #[test]
        fn prop_diff_order_composes(values in series(12), order in 1usize..5) {
            let x = from_vec(values);
            let direct = diff(&x, DiffOptions::default().with_order(order)).unwrap();

            let mut repeated = x.clone();
            for _ in 0..order {
                repeated = diff(&repeated, DiffOptions::default()).unwrap();
            }

            prop_assert_eq!(direct.time_len(), x.time_len() - order);
            for (d, r) in direct.iter().zip(repeated.iter()) {
                prop_assert!((d - r).abs() <= 1e-9 * (1.0 + d.abs()));
            }
        }

        #[test]
        fn prop_acf_lag_zero_is_one(values in series(16), max_lag in 0usize..8) {
            let x = from_vec(values);
            // skip (vanishingly rare) constant draws
            prop_assume!(x.iter().any(|&v| v != x.to_vec()[0]));
            let r = acf(&x, AcfOptions::new(max_lag)).unwrap();
            prop_assert_eq!(r.shape(), &[max_lag + 1]);
            prop_assert!((r[&[0]] - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_acf_lag_bound(values in series(6), extra in 0usize..4) {
            let x = from_vec(values);
            let too_long = matches!(
                acf(&x, AcfOptions::new(x.time_len() + extra)),
                Err(TimeTensorError::InsufficientLength { .. })
            );
            prop_assert!(too_long);
        }

        #[test]
        fn prop_permute_tracks_time((shape, time_dim) in shape_and_time_dim()) {
            let x = zeros::<f64>(&shape, time_dim).unwrap();
            let mut axes: Vec<usize> = (0..shape.len()).collect();
            axes.reverse();
            let p = x.permute(&axes).unwrap();
            prop_assert_eq!(p.time_dim(), shape.len() - 1 - time_dim);
            prop_assert_eq!(p.time_len(), x.time_len());
        }
    }
}
