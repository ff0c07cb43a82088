//! SyncSOM: two-stage clustering over a self-organizing map.
//!
//! A trained self-organizing map (SOM) compresses the dataset into a small
//! grid of neuron weight vectors, each of which captured some subset of the
//! input points. SyncSOM then runs radius-based sync clustering over the
//! *winner* neurons only (those that captured at least one point) and expands
//! the resulting neuron clusters back into clusters of original points
//! through the capture lists.
//!
//! Training the map is out of scope: any collaborator that can answer the
//! [`SelfOrganizingMap`] queries works. This module owns the decode stage and
//! its invariants: every input point must come back in exactly one cluster.

use super::traits::groups_to_labels;
use super::util::average_neighbor_distance;
use crate::error::{Error, Result};
use crate::sync::{AdjacencyRepr, ConvergenceOptions, PhaseInit, Solver, SpatialNetwork};

/// A trained self-organizing map, viewed as a dataset summary.
///
/// `units()` neurons each carry a weight vector in data space plus the list
/// of input point indices the neuron won during training. A consistent map
/// captures every one of its `n_samples()` points exactly once across all
/// units; [`SyncSom`] verifies this at decode time.
pub trait SelfOrganizingMap {
    /// Number of neurons in the map.
    fn units(&self) -> usize;

    /// Number of data points the map was trained on.
    fn n_samples(&self) -> usize;

    /// Weight vector of a neuron.
    fn weight(&self, unit: usize) -> &[f64];

    /// Indices of the input points captured by a neuron.
    fn captured(&self, unit: usize) -> &[usize];
}

/// SyncSOM clustering model: sync clustering over SOM winner neurons.
#[derive(Debug, Clone)]
pub struct SyncSom {
    /// Local-order target for the sync stage.
    order: f64,
    /// Integration strategy.
    solver: Solver,
    /// Phase tolerance for neuron cluster extraction.
    tolerance: f64,
    /// Neighborhood size for the radius heuristic.
    neighbors: usize,
    /// Initial phase distribution for the sync stage.
    initial: PhaseInit,
    /// Optional RNG seed.
    seed: Option<u64>,
}

impl Default for SyncSom {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncSom {
    /// Create a model with default sync-stage parameters.
    pub fn new() -> Self {
        Self {
            order: 0.998,
            solver: Solver::default(),
            tolerance: 0.1,
            neighbors: 3,
            initial: PhaseInit::Random,
            seed: None,
        }
    }

    /// Set the convergence order target in `(0, 1]`.
    pub fn with_order(mut self, order: f64) -> Self {
        self.order = order;
        self
    }

    /// Set the integration strategy.
    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    /// Set the phase tolerance for neuron cluster extraction.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the neighborhood size for the radius heuristic.
    pub fn with_neighbors(mut self, neighbors: usize) -> Self {
        self.neighbors = neighbors;
        self
    }

    /// Set the initial phase distribution for the sync stage.
    pub fn with_initial(mut self, initial: PhaseInit) -> Self {
        self.initial = initial;
        self
    }

    /// Set the RNG seed for reproducible random initial phases.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cluster the original data points summarized by `map`.
    ///
    /// Winner neurons (those that captured at least one point) are clustered
    /// by synchronization; each neuron cluster is then expanded into the
    /// points its neurons captured.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if the map has no winner neurons.
    /// - [`Error::MapMismatch`] if the capture lists do not cover every
    ///   sample index exactly once.
    pub fn fit_map<M: SelfOrganizingMap>(&self, map: &M) -> Result<Vec<Vec<usize>>> {
        let winners: Vec<usize> = (0..map.units())
            .filter(|&unit| !map.captured(unit).is_empty())
            .collect();
        if winners.is_empty() {
            return Err(Error::EmptyInput);
        }

        let weights: Vec<Vec<f64>> = winners
            .iter()
            .map(|&unit| map.weight(unit).to_vec())
            .collect();

        let neuron_clusters = if winners.len() == 1 {
            vec![vec![0]]
        } else {
            let k = self.neighbors.clamp(1, winners.len() - 1);
            let radius = average_neighbor_distance(&weights, k)?;

            let mut network =
                SpatialNetwork::new(&weights, false, AdjacencyRepr::default(), self.initial, self.seed)?;
            let options = ConvergenceOptions {
                solver: self.solver,
                ..ConvergenceOptions::default()
            };
            network.process(radius, self.order, &options, false)?;
            network.clusters(self.tolerance)
        };

        // Decode: expand winner-neuron clusters through the capture lists.
        let clusters: Vec<Vec<usize>> = neuron_clusters
            .into_iter()
            .map(|cluster| {
                cluster
                    .into_iter()
                    .flat_map(|winner_idx| map.captured(winners[winner_idx]).iter().copied())
                    .collect()
            })
            .collect();

        self.verify_partition(&clusters, map.n_samples())?;
        Ok(clusters)
    }

    /// Like [`fit_map`](Self::fit_map), but returns a flat label per sample.
    pub fn fit_predict_map<M: SelfOrganizingMap>(&self, map: &M) -> Result<Vec<usize>> {
        let clusters = self.fit_map(map)?;
        Ok(groups_to_labels(&clusters, map.n_samples()))
    }

    /// Decode-time invariant: the clusters cover `0..n_samples` exactly once.
    fn verify_partition(&self, clusters: &[Vec<usize>], n_samples: usize) -> Result<()> {
        let captured: usize = clusters.iter().map(Vec::len).sum();
        if captured != n_samples {
            return Err(Error::MapMismatch {
                captured,
                expected: n_samples,
            });
        }

        let mut seen = vec![false; n_samples];
        for &index in clusters.iter().flatten() {
            if index >= n_samples || seen[index] {
                return Err(Error::MapMismatch {
                    captured,
                    expected: n_samples,
                });
            }
            seen[index] = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal trained-map stand-in for tests.
    struct StubMap {
        weights: Vec<Vec<f64>>,
        captured: Vec<Vec<usize>>,
        n_samples: usize,
    }

    impl SelfOrganizingMap for StubMap {
        fn units(&self) -> usize {
            self.weights.len()
        }
        fn n_samples(&self) -> usize {
            self.n_samples
        }
        fn weight(&self, unit: usize) -> &[f64] {
            &self.weights[unit]
        }
        fn captured(&self, unit: usize) -> &[usize] {
            &self.captured[unit]
        }
    }

    /// Four neurons summarizing two blobs; one dead neuron in between.
    fn blob_map() -> StubMap {
        StubMap {
            weights: vec![
                vec![0.0, 0.0],
                vec![0.4, 0.4],
                vec![5.0, 5.0], // dead neuron, captured nothing
                vec![9.0, 9.0],
                vec![9.4, 9.4],
            ],
            captured: vec![vec![0, 1], vec![2, 3], vec![], vec![4, 5], vec![6, 7]],
            n_samples: 8,
        }
    }

    #[test]
    fn test_syncsom_decodes_two_clusters() {
        let map = blob_map();
        let model = SyncSom::new().with_initial(PhaseInit::Equipartition);
        let mut clusters = model.fit_map(&map).unwrap();
        clusters.iter_mut().for_each(|c| c.sort_unstable());
        clusters.sort_by_key(|c| c[0]);

        assert_eq!(clusters, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]]);
    }

    #[test]
    fn test_syncsom_single_winner() {
        let map = StubMap {
            weights: vec![vec![1.0], vec![2.0]],
            captured: vec![vec![0, 1, 2], vec![]],
            n_samples: 3,
        };
        let clusters = SyncSom::new().fit_map(&map).unwrap();
        assert_eq!(clusters, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_syncsom_no_winners() {
        let map = StubMap {
            weights: vec![vec![1.0]],
            captured: vec![vec![]],
            n_samples: 0,
        };
        assert!(matches!(
            SyncSom::new().fit_map(&map),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_syncsom_detects_undercapture() {
        let mut map = blob_map();
        map.captured[0] = vec![0]; // point 1 lost
        assert!(matches!(
            SyncSom::new()
                .with_initial(PhaseInit::Equipartition)
                .fit_map(&map),
            Err(Error::MapMismatch {
                captured: 7,
                expected: 8
            })
        ));
    }

    #[test]
    fn test_syncsom_detects_double_capture() {
        let mut map = blob_map();
        map.captured[2] = vec![0]; // point 0 captured twice
        let result = SyncSom::new()
            .with_initial(PhaseInit::Equipartition)
            .fit_map(&map);
        assert!(matches!(result, Err(Error::MapMismatch { .. })));
    }
}
