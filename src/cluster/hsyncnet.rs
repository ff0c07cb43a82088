//! HSyncNet: sync clustering driven toward a target cluster count.
//!
//! # The Algorithm
//!
//! HSyncNet removes SyncNet's radius parameter in favor of a target number of
//! clusters. It starts from a small connectivity radius (the average distance to
//! each point's `k = 3` nearest neighbors) and grows it between simulation
//! passes until the extracted cluster count drops to the target:
//!
//! 1. Connect at the current radius and simulate one convergence pass.
//! 2. Extract clusters with a fixed internal tolerance (0.05).
//! 3. While more clusters than requested remain: widen the neighborhood
//!    (`k + 1`, recomputing the radius) or, once `k` reaches the dataset
//!    size, grow the radius itself by 10%; repeat from step 1.
//!
//! The loop is best-effort and non-monotonic: it stops as soon
//! as the count is **at most** the target, and never tries to hit the target
//! exactly. A growing radius can skip past a count, so a `!=` condition could
//! loop forever; the `>` condition always terminates because the radius
//! eventually spans the whole cloud, which yields one cluster.
//!
//! When the phase history is collected, the passes are concatenated with
//! continuous time offsets, so the returned dynamic reads as one run.

use super::traits::{groups_to_labels, Clustering};
use super::util::average_neighbor_distance;
use crate::error::{Error, Result};
use crate::sync::{
    AdjacencyRepr, ConvergenceOptions, PhaseDynamic, PhaseInit, Solver, SpatialNetwork,
};

/// Phase tolerance used for cluster extraction between passes.
const EXTRACTION_TOLERANCE: f64 = 0.05;

/// Neighborhood size the radius search starts from.
const INITIAL_NEIGHBORS: usize = 3;

/// Radius growth factor once the neighbor count is exhausted.
const RADIUS_GROWTH: f64 = 1.1;

/// HSyncNet clustering model.
#[derive(Debug, Clone)]
pub struct HSyncNet {
    /// Target cluster count; the fit stops at the first pass producing at
    /// most this many clusters.
    n_clusters: usize,
    /// Local-order target per simulation pass.
    order: f64,
    /// Integration strategy.
    solver: Solver,
    /// Adjacency storage representation.
    repr: AdjacencyRepr,
    /// Initial phase distribution.
    initial: PhaseInit,
    /// Optional RNG seed for the random phase draw.
    seed: Option<u64>,
}

/// Result of a [`HSyncNet::fit`] call.
#[derive(Debug, Clone)]
pub struct HSyncNetFit {
    /// Disjoint groups of input indices; at most the requested cluster count.
    pub clusters: Vec<Vec<usize>>,
    /// Phase history concatenated across passes (final snapshot per pass
    /// unless fitted with [`HSyncNet::fit_with_dynamic`]).
    pub dynamic: PhaseDynamic,
}

impl HSyncNet {
    /// Create a model targeting `n_clusters` clusters.
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            order: 0.998,
            solver: Solver::Fast,
            repr: AdjacencyRepr::default(),
            initial: PhaseInit::Random,
            seed: None,
        }
    }

    /// Set the per-pass convergence order target in `(0, 1]`.
    pub fn with_order(mut self, order: f64) -> Self {
        self.order = order;
        self
    }

    /// Set the integration strategy.
    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
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
        if self.n_clusters == 0 || self.n_clusters > n_items {
            return Err(Error::InvalidClusterCount {
                requested: self.n_clusters,
                n_items,
            });
        }
        if !(self.order > 0.0 && self.order <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "order",
                message: "must lie in (0, 1]",
            });
        }
        Ok(())
    }

    fn run(&self, data: &[Vec<f64>], collect: bool) -> Result<HSyncNetFit> {
        self.validate(data.len())?;

        let mut network =
            SpatialNetwork::new(data, false, self.repr, self.initial, self.seed)?;
        let options = ConvergenceOptions {
            solver: self.solver,
            ..ConvergenceOptions::default()
        };

        let mut neighbors = INITIAL_NEIGHBORS.min(data.len() - 1).max(1);
        let mut radius = if data.len() > 1 {
            average_neighbor_distance(data, neighbors)?
        } else {
            1.0
        };
        // A degenerate radius (duplicate points) still has to grow.
        if radius <= 0.0 {
            radius = 1.0;
        }

        let mut dynamic = PhaseDynamic::new();
        let mut clusters;
        loop {
            let pass = network.process(radius, self.order, &options, collect)?;
            dynamic.append_offset(pass);

            clusters = network.clusters(EXTRACTION_TOLERANCE);
            if clusters.len() <= self.n_clusters {
                break;
            }

            if neighbors + 1 < data.len() {
                neighbors += 1;
                radius = average_neighbor_distance(data, neighbors)?.max(radius);
            } else {
                radius *= RADIUS_GROWTH;
            }
        }

        Ok(HSyncNetFit { clusters, dynamic })
    }

    /// Grow the radius until at most `n_clusters` clusters remain.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<HSyncNetFit> {
        self.run(data, false)
    }

    /// Like [`HSyncNet::fit`], additionally collecting the concatenated phase
    /// history of all passes.
    pub fn fit_with_dynamic(&self, data: &[Vec<f64>]) -> Result<HSyncNetFit> {
        self.run(data, true)
    }
}

impl Clustering for HSyncNet {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        let fit = self.fit(data)?;
        Ok(groups_to_labels(&fit.clusters, data.len()))
    }

    fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}
