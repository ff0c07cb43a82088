//! SyncNet: clustering by oscillator synchronization within a connectivity radius.
//!
//! # The Algorithm (Novikov & Benderskaya, 2014)
//!
//! Every data point becomes a phase oscillator with zero natural frequency.
//! Two oscillators are coupled iff their points lie within a connectivity
//! radius. Integrating the Kuramoto dynamics makes each connected component
//! phase-lock onto a common value while disconnected components drift to
//! different values; reading off groups of equal final phase yields the
//! clusters.
//!
//! ## Core Concepts
//!
//! - **Connectivity radius**: maximum inter-point distance at which two oscillators
//!   are coupled. Plays the role DBSCAN's epsilon plays, without a MinPts.
//! - **Order target**: the local synchronization level at which the
//!   simulation is considered converged (default 0.998).
//! - **Tolerance**: maximum final phase difference for two oscillators to
//!   share a cluster (default 0.1).
//!
//! ## Complexity
//!
//! - **Time**: O(n²) per integration increment (dense neighbor sums) times
//!   the number of increments to convergence.
//! - **Space**: O(n²) for the dense adjacency, O(n + edges) for the list
//!   representation.
//!
//! ## When to Use
//!
//! - Clusters have non-convex shapes but a usable distance scale
//! - Number of clusters unknown
//! - The phase-history diagnostic ("dynamic") is of interest
//!
//! ## Limitations
//!
//! - The radius is as sensitive as DBSCAN's epsilon
//! - Simulation cost is much higher than one DBSCAN pass

use super::traits::{groups_to_labels, Clustering};
use crate::error::{Error, Result};
use crate::sync::{
    AdjacencyRepr, ConvergenceOptions, PhaseDynamic, PhaseInit, Solver, SpatialNetwork,
};

/// SyncNet clustering model.
#[derive(Debug, Clone)]
pub struct SyncNet {
    /// Connectivity radius: maximum distance for two points to be coupled.
    radius: f64,
    /// Local-order target for convergence-driven simulation.
    order: f64,
    /// Integration strategy.
    solver: Solver,
    /// Maximum final phase difference within a cluster.
    tolerance: f64,
    /// Couple edges by normalized inter-point distance instead of uniformly.
    weighted: bool,
    /// Adjacency storage representation.
    repr: AdjacencyRepr,
    /// Initial phase distribution.
    initial: PhaseInit,
    /// Optional RNG seed for the random phase draw.
    seed: Option<u64>,
}

/// Result of a [`SyncNet::fit`] call.
#[derive(Debug, Clone)]
pub struct SyncNetFit {
    /// Disjoint groups of input indices, covering every point exactly once.
    pub clusters: Vec<Vec<usize>>,
    /// Phase history of the simulation (final snapshot only, unless fitted
    /// with [`SyncNet::fit_with_dynamic`]).
    pub dynamic: PhaseDynamic,
}

impl SyncNet {
    /// Create a SyncNet model with the given connectivity radius.
    ///
    /// # Typical Values
    ///
    /// - `radius`: on the order of the intra-cluster point spacing; the
    ///   average-neighbor-distance heuristic used by `HSyncNet` is a good
    ///   starting point.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            order: 0.998,
            solver: Solver::default(),
            tolerance: 0.1,
            weighted: false,
            repr: AdjacencyRepr::default(),
            initial: PhaseInit::Random,
            seed: None,
        }
    }

    /// Set the connectivity radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
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

    /// Set the phase tolerance for cluster extraction.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable distance-weighted coupling.
    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Set the adjacency storage representation.
    pub fn with_repr(mut self, repr: AdjacencyRepr) -> Self {
        self.repr = repr;
        self
    }

    /// Set the initial phase distribution.
    pub fn with_initial(mut self, initial: PhaseInit) -> Self {
        self.initial = initial;
        self
    }

    /// Set the RNG seed for reproducible random initial phases.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self, n_items: usize) -> Result<()> {
        if n_items == 0 {
            return Err(Error::EmptyInput);
        }
        if self.radius <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "radius",
                message: "must be positive",
            });
        }
        if !(self.order > 0.0 && self.order <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "order",
                message: "must lie in (0, 1]",
            });
        }
        if self.tolerance <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "tolerance",
                message: "must be positive",
            });
        }
        Ok(())
    }

    fn run(&self, data: &[Vec<f64>], collect: bool) -> Result<SyncNetFit> {
        self.validate(data.len())?;

        let mut network =
            SpatialNetwork::new(data, self.weighted, self.repr, self.initial, self.seed)?;
        let options = ConvergenceOptions {
            solver: self.solver,
            ..ConvergenceOptions::default()
        };
        let dynamic = network.process(self.radius, self.order, &options, collect)?;
        let clusters = network.clusters(self.tolerance);

        Ok(SyncNetFit { clusters, dynamic })
    }

    /// Simulate to convergence and extract clusters.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<SyncNetFit> {
        self.run(data, false)
    }

    /// Like [`SyncNet::fit`], additionally collecting the full phase history
    /// for diagnostics.
    pub fn fit_with_dynamic(&self, data: &[Vec<f64>]) -> Result<SyncNetFit> {
        self.run(data, true)
    }
}

impl Clustering for SyncNet {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        let fit = self.fit(data)?;
        Ok(groups_to_labels(&fit.clusters, data.len()))
    }

    /// SyncNet discovers clusters dynamically, so this returns 0.
    fn n_clusters(&self) -> usize {
        0 // Unknown until fit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blobs() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![0.2, 0.0],
            vec![0.0, 0.2],
            vec![0.2, 0.2],
            vec![0.1, 0.1],
            vec![8.0, 8.0],
            vec![8.2, 8.0],
            vec![8.0, 8.2],
            vec![8.2, 8.2],
            vec![8.1, 8.1],
        ]
    }

    #[test]
    fn test_syncnet_two_blobs() {
        let model = SyncNet::new(1.0).with_initial(PhaseInit::Equipartition);
        let fit = model.fit(&two_blobs()).unwrap();

        assert_eq!(fit.clusters.len(), 2);
        let mut sizes: Vec<usize> = fit.clusters.iter().map(Vec::len).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![5, 5]);
    }

    #[test]
    fn test_syncnet_labels_partition() {
        let data = two_blobs();
        let model = SyncNet::new(1.0).with_initial(PhaseInit::Equipartition);
        let labels = model.fit_predict(&data).unwrap();

        assert_eq!(labels.len(), data.len());
        assert_eq!(labels[0], labels[4]);
        assert_eq!(labels[5], labels[9]);
        assert_ne!(labels[0], labels[5]);
    }

    #[test]
    fn test_syncnet_single_cluster_when_radius_spans_all() {
        let data = two_blobs();
        let model = SyncNet::new(100.0).with_seed(3);
        let fit = model.fit(&data).unwrap();
        assert_eq!(fit.clusters.len(), 1);
        assert_eq!(fit.clusters[0].len(), data.len());
    }

    #[test]
    fn test_syncnet_dynamic_history() {
        let data = two_blobs();
        let model = SyncNet::new(1.0)
            .with_initial(PhaseInit::Equipartition)
            .with_solver(Solver::Fast);
        let fit = model.fit_with_dynamic(&data).unwrap();
        assert!(fit.dynamic.len() >= 2);
        assert_eq!(fit.dynamic.last_phases().unwrap().len(), data.len());
    }

    #[test]
    fn test_syncnet_invalid_params() {
        let data = vec![vec![0.0], vec![1.0]];
        assert!(SyncNet::new(0.0).fit(&data).is_err());
        assert!(SyncNet::new(1.0).with_order(0.0).fit(&data).is_err());
        assert!(SyncNet::new(1.0).with_order(1.5).fit(&data).is_err());
        assert!(SyncNet::new(1.0).with_tolerance(0.0).fit(&data).is_err());
        assert!(SyncNet::new(1.0).fit(&[]).is_err());
    }

    #[test]
    fn test_syncnet_seeded_random_is_reproducible() {
        let data = two_blobs();
        let model = SyncNet::new(1.0).with_seed(42);
        let a = model.fit_predict(&data).unwrap();
        let b = model.fit_predict(&data).unwrap();
        assert_eq!(a, b);
    }
}
