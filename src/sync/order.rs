//! Synchronization order parameters.
//!
//! Both evaluators are pure functions of the current phase state (and, for the
//! local variant, the adjacency). They serve as stopping conditions for
//! convergence-driven simulation and as diagnostics.

use super::topology::Adjacency;

/// Which order parameter drives a convergence-driven simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderMetric {
    /// Global phasor magnitude: meaningful when a single phase-locked group is
    /// expected.
    Global,
    /// Neighborhood synchrony: required when the coupling intentionally forms
    /// several phase-locked groups (cluster parameter > 1, or a disconnected
    /// proximity topology).
    #[default]
    Local,
}

/// Global synchronization order: the magnitude of the mean complex phasor,
///
/// ```text
/// r = | (1/N) Σ_i e^(iφ_i) |
/// ```
///
/// `r` is 1.0 exactly when all phases coincide (and trivially for a single
/// oscillator), and approaches 0 for uniformly spread phases. An empty phase
/// vector yields 0.0.
pub fn global_order(phases: &[f64]) -> f64 {
    if phases.is_empty() {
        return 0.0;
    }

    let n = phases.len() as f64;
    let (sum_cos, sum_sin) = phases
        .iter()
        .fold((0.0, 0.0), |(c, s), &phase| (c + phase.cos(), s + phase.sin()));

    let avg_cos = sum_cos / n;
    let avg_sin = sum_sin / n;
    (avg_cos * avg_cos + avg_sin * avg_sin).sqrt()
}

/// Local synchronization order: `exp(-|φ_j - φ_i|)` averaged over every
/// connected (directed) pair.
///
/// Reaches 1.0 when every oscillator agrees with all of its neighbors, even if
/// disconnected components settle at different phases. A network with no edges
/// (including a single oscillator) has local order 0.0.
pub fn local_order(phases: &[f64], adjacency: &Adjacency) -> f64 {
    let mut total = 0.0;
    let mut pairs = 0usize;

    for i in 0..phases.len() {
        for j in adjacency.neighbors(i) {
            total += (-(phases[j] - phases[i]).abs()).exp();
            pairs += 1;
        }
    }

    if pairs == 0 {
        0.0
    } else {
        total / pairs as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::topology::{AdjacencyRepr, Connectivity};
    use std::f64::consts::PI;

    #[test]
    fn test_global_order_single_oscillator_is_one() {
        assert_eq!(global_order(&[0.0]), 1.0);
        assert!((global_order(&[2.3]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_global_order_locked_phases() {
        let phases = vec![1.7; 8];
        assert!((global_order(&phases) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_global_order_antiphase_is_zero() {
        let phases = vec![0.0, PI];
        assert!(global_order(&phases).abs() < 1e-12);
    }

    #[test]
    fn test_local_order_no_neighbors_is_zero() {
        let adjacency = Adjacency::build(1, Connectivity::None, AdjacencyRepr::Matrix).unwrap();
        assert_eq!(local_order(&[1.0], &adjacency), 0.0);
    }

    #[test]
    fn test_local_order_synchronized_neighbors() {
        let adjacency = Adjacency::build(4, Connectivity::AllToAll, AdjacencyRepr::List).unwrap();
        let phases = vec![0.4; 4];
        assert!((local_order(&phases, &adjacency) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_local_order_ignores_disconnected_disagreement() {
        // Two chains, internally synchronized at different phases.
        let points = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![5.0, 0.0],
            vec![5.1, 0.0],
        ];
        let adjacency = Adjacency::by_radius(&points, 0.5, AdjacencyRepr::Matrix).unwrap();
        let phases = vec![0.0, 0.0, 2.0, 2.0];
        assert!((local_order(&phases, &adjacency) - 1.0).abs() < 1e-12);
        assert!(global_order(&phases) < 1.0);
    }
}
