//! Regression fixtures: exact results for known (M, N, T) configurations.
//!
//! Reference values were produced by an independent brute-force enumeration and
//! are stable to at least 10 decimal places.

use hanoi_walk::propagation::{propagate, DeadEndPolicy, EngineConfig};
use hanoi_walk::statistics::summarize;
use hanoi_walk::{Params, Tower};

const TOL: f64 = 1e-9;

fn run(m: i64, n: i64, t: i64) -> (usize, f64, f64) {
    let params = Params::new(m, n, t).unwrap();
    let result = propagate(&params, &EngineConfig::default()).unwrap();
    let s = summarize(&result.distribution);
    (s.num_states, s.mean, s.std_dev)
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < TOL,
        "{what}: got {actual:.12}, expected {expected:.12}"
    );
}

#[test]
fn initial_distribution_unchanged_at_t0() {
    let params = Params::new(3, 3, 0).unwrap();
    let result = propagate(&params, &EngineConfig::default()).unwrap();
    let initial = Tower::new(3, 3).unwrap();
    assert_eq!(result.distribution.len(), 1);
    assert_eq!(result.distribution.mass_of(&initial), Some(1.0));

    let s = summarize(&result.distribution);
    assert_eq!(s.mean, 0.0);
    assert_eq!(s.std_dev, 0.0);
}

#[test]
fn m3_n3_t1_single_successor() {
    let params = Params::new(3, 3, 1).unwrap();
    let result = propagate(&params, &EngineConfig::default()).unwrap();
    let moved = Tower::from_stacks(vec![vec![3, 2], vec![1], vec![]]).unwrap();
    assert_eq!(result.distribution.len(), 1);
    assert_eq!(result.distribution.mass_of(&moved), Some(1.0));

    let (_, mean, std) = run(3, 3, 1);
    assert_close(mean, 1.0 / 6.0, "mean");
    assert_close(std, 0.0, "std");
}

#[test]
fn m3_n3_t2() {
    let (states, mean, std) = run(3, 3, 2);
    assert_eq!(states, 2);
    assert_close(mean, 1.0 / 6.0, "mean");
    assert_close(std, 1.0 / 6.0, "std");
}

#[test]
fn m3_n3_t16() {
    let (states, mean, std) = run(3, 3, 16);
    assert_eq!(states, 9);
    assert_close(mean, 0.409_403_483_1, "mean");
    assert_close(std, 0.284_018_028_1, "std");
}

#[test]
fn m4_n2_t5() {
    let (states, mean, std) = run(4, 2, 5);
    assert_eq!(states, 5);
    assert_close(mean, 0.802_469_135_8, "mean");
    assert_close(std, 0.538_701_832_8, "std");
}

#[test]
fn single_disk_oscillates_between_two_stacks() {
    // N=1 on two stacks: the disk alternates, so after odd T it sits on stack 1.
    for t in [1, 3, 7] {
        let (states, mean, std) = run(2, 1, t);
        assert_eq!(states, 1);
        assert_eq!(mean, 1.0);
        assert_eq!(std, 0.0);
    }
}

#[test]
fn single_stack_drops_all_mass() {
    let params = Params::new(1, 3, 4).unwrap();
    let result = propagate(&params, &EngineConfig::default()).unwrap();
    assert!(result.distribution.is_empty());
    assert_eq!(result.dropped_mass, 1.0);

    let s = summarize(&result.distribution);
    assert_eq!(s.mean, 0.0);
    assert_eq!(s.std_dev, 0.0);
}

#[test]
fn single_stack_hold_keeps_initial() {
    let params = Params::new(1, 3, 4).unwrap();
    let config = EngineConfig {
        dead_end: DeadEndPolicy::Hold,
        ..EngineConfig::default()
    };
    let result = propagate(&params, &config).unwrap();
    let s = summarize(&result.distribution);
    assert_eq!(s.num_states, 1);
    assert_eq!(s.mean, 0.0);
    assert_eq!(s.total_mass, 1.0);
}

#[test]
fn repeated_runs_identical() {
    let a = run(4, 4, 30);
    let b = run(4, 4, 30);
    assert_eq!(a, b);
}

#[test]
fn small_reserve_cap_gives_same_answer() {
    let params = Params::new(4, 3, 20).unwrap();
    let roomy = propagate(&params, &EngineConfig::default()).unwrap();
    let tight = propagate(
        &params,
        &EngineConfig {
            reserve_cap: 1,
            ..EngineConfig::default()
        },
    )
    .unwrap();
    assert_eq!(
        summarize(&roomy.distribution),
        summarize(&tight.distribution)
    );
}

/// Run with: cargo test --release m6_n6_t256 -- --ignored
#[test]
#[ignore] // 256 generations over ~23k towers: slow in debug builds
fn m6_n6_t256() {
    let (states, mean, std) = run(6, 6, 256);
    assert_eq!(states, 23_328);
    assert_close(mean, 1.332_561_885_0, "mean");
    assert_close(std, 0.614_564_405_8, "std");
}
