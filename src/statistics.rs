//! Center-of-mass statistics over a tower distribution.
//!
//! For each tower the statistic is c = Σ(w·i)/Σ(w) (see [`Tower::center_of_mass`]).
//! The summary is the probability-weighted mean and standard deviation of c.

use serde::Serialize;

use crate::distribution::Distribution;
use crate::state::Tower;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CenterOfMassSummary {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Σ mass the moments were normalized by (1.0 unless mass was dropped).
    pub total_mass: f64,
    pub num_states: usize,
}

/// Summary statistic recorded after one generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationStats {
    pub generation: usize,
    #[serde(flatten)]
    pub summary: CenterOfMassSummary,
}

/// Weighted mean and standard deviation of the center of mass.
///
/// Moments are divided by Σ mass, which is 1 up to rounding whenever mass is
/// conserved. A distribution without mass reports mean 0 and variance 0.
/// Variance is E[c²] − E[c]², clamped at 0 so rounding cannot produce NaN.
pub fn summarize(dist: &Distribution) -> CenterOfMassSummary {
    summarize_by(dist, Tower::center_of_mass)
}

/// Same as [`summarize`] for an arbitrary per-tower statistic.
pub fn summarize_by<F>(dist: &Distribution, stat: F) -> CenterOfMassSummary
where
    F: Fn(&Tower) -> f64,
{
    let mut total_mass = 0.0;
    let mut first = 0.0;
    let mut second = 0.0;

    for (tower, mass) in dist.iter() {
        let c = stat(tower);
        total_mass += mass;
        first += c * mass;
        second += c * c * mass;
    }

    if total_mass <= 0.0 {
        return CenterOfMassSummary {
            mean: 0.0,
            variance: 0.0,
            std_dev: 0.0,
            total_mass,
            num_states: dist.len(),
        };
    }

    let mean = first / total_mass;
    let variance = (second / total_mass - mean * mean).max(0.0);

    CenterOfMassSummary {
        mean,
        variance,
        std_dev: variance.sqrt(),
        total_mass,
        num_states: dist.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tower_has_no_spread() {
        let t = Tower::from_stacks(vec![vec![], vec![], vec![1]]).unwrap();
        let s = summarize(&Distribution::singleton(t));
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.variance, 0.0);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.num_states, 1);
    }

    #[test]
    fn test_two_point_distribution() {
        let mut d = Distribution::default();
        d.add_mass(Tower::from_stacks(vec![vec![1], vec![]]).unwrap(), 0.5);
        d.add_mass(Tower::from_stacks(vec![vec![], vec![1]]).unwrap(), 0.5);
        let s = summarize(&d);
        assert!((s.mean - 0.5).abs() < 1e-15);
        assert!((s.std_dev - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_empty_distribution() {
        let s = summarize(&Distribution::default());
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.total_mass, 0.0);
        assert_eq!(s.num_states, 0);
    }

    #[test]
    fn test_undefined_center_without_disks() {
        let s = summarize(&Distribution::singleton(Tower::new(3, 0).unwrap()));
        assert_eq!(s.mean, -1.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn test_rounding_never_yields_nan() {
        // Identical statistic on every tower: E[c²] − E[c]² may round below zero.
        let mut d = Distribution::default();
        for stacks in [
            vec![vec![2, 1], vec![], vec![]],
            vec![vec![2], vec![1], vec![]],
            vec![vec![2], vec![], vec![1]],
        ] {
            d.add_mass(Tower::from_stacks(stacks).unwrap(), 0.1);
        }
        let s = summarize_by(&d, |_| 0.1 + 0.2);
        assert!(s.std_dev.is_finite());
        assert!(s.variance >= 0.0);
    }

    #[test]
    fn test_normalizes_partial_mass() {
        let mut d = Distribution::default();
        d.add_mass(Tower::from_stacks(vec![vec![], vec![1]]).unwrap(), 0.25);
        let s = summarize(&d);
        assert_eq!(s.mean, 1.0);
        assert_eq!(s.total_mass, 0.25);
    }
}
