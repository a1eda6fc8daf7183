//! Unit tests for the uniform source infrastructure.
//!
//! This module contains tests verifying:
//! - Seed reproducibility of shared sources
//! - Primitive ranges and moments
//! - State sharing between cloned handles
//! - The provided inverse-CDF exponential

use super::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source that replays a fixed list of uniforms, for exact arithmetic checks.
struct Replay {
    values: Vec<f64>,
    next: usize,
}

impl UniformSource for Replay {
    fn uniform01(&mut self) -> f64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }

    fn standard_normal(&mut self) -> f64 {
        0.0
    }
}

#[test]
fn test_seed_reproducibility() {
    let mut a = SharedSource::from_seed(12345);
    let mut b = SharedSource::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(a.uniform01(), b.uniform01());
        assert_eq!(a.standard_normal(), b.standard_normal());
        assert_eq!(a.exponential(), b.exponential());
    }
}

#[test]
fn test_shared_source_matches_rng_source() {
    let mut shared = SharedSource::from_seed(99);
    let mut direct = RngSource::new(StdRng::seed_from_u64(99));

    for _ in 0..100 {
        assert_eq!(shared.uniform01(), direct.uniform01());
    }
}

#[test]
fn test_seed_accessor() {
    assert_eq!(SharedSource::from_seed(42).seed(), Some(42));
    assert_eq!(SharedSource::from_rng(StdRng::seed_from_u64(42)).seed(), None);
}

#[test]
fn test_cloned_handles_share_state() {
    let mut first = SharedSource::from_seed(3);
    let mut second = first.clone();
    assert!(first.ptr_eq(&second));

    let mut reference = RngSource::new(StdRng::seed_from_u64(3));
    for _ in 0..50 {
        assert_eq!(first.uniform01(), reference.uniform01());
        assert_eq!(second.uniform01(), reference.uniform01());
    }
}

#[test]
fn test_distinct_sources_are_not_shared() {
    let a = SharedSource::from_seed(3);
    let b = SharedSource::from_seed(3);
    assert!(!a.ptr_eq(&b));
}

#[test]
fn test_bind_caller_source_uses_caller_stream() {
    let shared = SharedSource::from_seed(11);
    let mut bound = bind(Some(&shared));
    let mut reference = RngSource::new(StdRng::seed_from_u64(11));

    for _ in 0..20 {
        assert_eq!(bound.uniform01(), reference.uniform01());
    }
}

#[test]
fn test_default_source_range() {
    let mut source = DefaultSource;
    for _ in 0..10_000 {
        let u = source.uniform01();
        assert!((0.0..1.0).contains(&u), "Uniform value {} out of range", u);
    }
}

#[test]
fn test_provided_exponential_inverts_cdf() {
    let mut replay = Replay {
        values: vec![0.0, 0.5, 0.75],
        next: 0,
    };

    assert_eq!(replay.exponential(), 0.0);
    approx::assert_relative_eq!(replay.exponential(), 2.0_f64.ln(), epsilon = 1e-15);
    approx::assert_relative_eq!(replay.exponential(), 4.0_f64.ln(), epsilon = 1e-15);
}

#[test]
fn test_normal_moments() {
    let mut source = SharedSource::from_seed(42);
    let n = 100_000;
    let samples: Vec<f64> = (0..n).map(|_| source.standard_normal()).collect();

    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    assert!(mean.abs() < 0.02, "Mean {} too far from 0", mean);
    assert!((variance - 1.0).abs() < 0.03, "Variance {} too far from 1", variance);
}

#[test]
fn test_exponential_mean() {
    let mut source = SharedSource::from_seed(42);
    let n = 100_000;
    let mean = (0..n).map(|_| source.exponential()).sum::<f64>() / n as f64;

    assert!((mean - 1.0).abs() < 0.02, "Mean {} too far from 1", mean);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// All uniform values must be in [0, 1) for any seed.
    #[test]
    fn prop_uniform_in_range(seed in any::<u64>()) {
        let mut source = SharedSource::from_seed(seed);
        for _ in 0..1000 {
            let u = source.uniform01();
            prop_assert!((0.0..1.0).contains(&u), "Uniform {} out of range (seed={})", u, seed);
        }
    }

    /// Exponential variates are never negative.
    #[test]
    fn prop_exponential_non_negative(seed in any::<u64>()) {
        let mut source = SharedSource::from_seed(seed);
        for _ in 0..1000 {
            prop_assert!(source.exponential() >= 0.0);
        }
    }
}
