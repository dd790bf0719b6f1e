//! Process-level initialisation through the meta crate.

use chronors::prelude::*;
use chronors::{engine_info, negotiate_with, Capability};

#[test]
fn test_init_is_cached() {
    let first = init(EngineConfig::default()).unwrap();
    assert_eq!(first.verified.len(), Capability::ALL.len());

    let second = init(EngineConfig::default().with_capabilities(vec![Capability::Cast])).unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(engine_info(), Some(first));
}

#[test]
fn test_version_gate_fails_fast() {
    let config = EngineConfig::default().with_min_version("99.0.0");
    let err = negotiate_with(&config, &chronors::engine_version()).unwrap_err();
    assert!(matches!(err, TimeTensorError::EngineUnavailable { .. }));
    assert!(err.to_string().contains("99.0.0"));
}

#[test]
fn test_prelude_covers_a_pipeline() {
    let x = timetensor(vec![1.0f64, 2.0, 3.0, 4.0, 5.0], &[5], 0).unwrap();
    let y = tcat(&[x.clone(), from_vec(vec![6.0, 7.0])]).unwrap();
    assert_eq!(y.time_len(), 7);

    let d = diff(&y, DiffOptions::default()).unwrap();
    assert!(d.iter().all(|&v| v == 1.0));

    let r = acf(&y, AcfOptions::new(2)).unwrap();
    approx::assert_relative_eq!(r[&[0]], 1.0);
}
