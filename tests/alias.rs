#![cfg(feature = "rand")]

use rand::{rngs::StdRng, SeedableRng};
use rbset::rand::{Alias, WeightError};

#[test]
fn test_should_error_on_non_normalized() {
    let err = Alias::new(&[0.333, 0.333, 0.333]).unwrap_err();
    assert!(matches!(err, WeightError::NotNormalized(_)));
}

#[test]
fn test_should_error_on_nan() {
    let err = Alias::new(&[f64::NAN, 1.0]).unwrap_err();
    assert_eq!(err, WeightError::Invalid { index: 0 });
}

#[test]
fn test_generate() {
    let alias = Alias::new(&[0.08, 0.12, 0.10, 0.07, 0.0, 0.28, 0.11, 0.08, 0.06, 0.10]).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let i = alias.sample(&mut rng);
        assert!(i < 10);
        assert_ne!(i, 4, "zero-weight outcome was sampled");
    }
}

#[test]
fn test_sample_frequencies() {
    let alias = Alias::new(&[0.2, 0.3, 0.5]).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let mut res = [0usize; 3];
    for _ in 0..1_000_000 {
        res[alias.sample(&mut rng)] += 1;
    }
    assert!(res[0] < res[1]);
    assert!(res[1] < res[2]);
}
