//! Spatial oscillator network: one oscillator per data point, coupled by
//! proximity.
//!
//! This is the engine behind radius-based sync clustering. It wraps a
//! [`SyncNetwork`] whose oscillators start unconnected with zero natural
//! frequency, then connects every pair of points within a connectivity radius and
//! simulates to convergence. Oscillators that end up phase-locked correspond
//! to points in the same cluster.
//!
//! The input points are borrowed for the lifetime of the network and are
//! never mutated; they are only read to derive the adjacency (and, in
//! weighted mode, the per-edge weights).

use super::network::{
    sync_ensembles, ConvergenceOptions, Normalization, PhaseDynamic, PhaseInit, SyncConfig,
    SyncNetwork,
};
use super::topology::{Adjacency, AdjacencyRepr, Connectivity};
use crate::cluster::util::{euclidean, validate_dims};
use crate::error::Result;

/// Oscillator network over a point cloud, coupled within a connectivity radius.
#[derive(Debug, Clone)]
pub struct SpatialNetwork<'a> {
    points: &'a [Vec<f64>],
    network: SyncNetwork,
    weighted: bool,
    repr: AdjacencyRepr,
}

impl<'a> SpatialNetwork<'a> {
    /// Create an unconnected network with one oscillator per point.
    ///
    /// With `weighted`, each edge later receives the min-max-normalized
    /// distance between its endpoints as a coupling weight; otherwise all
    /// edges weigh 1.
    ///
    /// # Errors
    ///
    /// [`crate::Error::EmptyInput`] for an empty point cloud,
    /// [`crate::Error::DimensionMismatch`] for ragged points.
    pub fn new(
        points: &'a [Vec<f64>],
        weighted: bool,
        repr: AdjacencyRepr,
        initial: PhaseInit,
        seed: Option<u64>,
    ) -> Result<Self> {
        validate_dims(points)?;

        let config = SyncConfig {
            coupling: 1.0,
            frequency_scale: 0.0,
            cluster_parameter: 1,
            normalization: Normalization::Degree,
            initial_phases: initial,
            seed,
        };
        let network = SyncNetwork::new(points.len(), Connectivity::None, repr, config)?;

        Ok(Self {
            points,
            network,
            weighted,
            repr,
        })
    }

    /// The borrowed input points.
    pub fn points(&self) -> &'a [Vec<f64>] {
        self.points
    }

    /// The wrapped oscillator network.
    pub fn network(&self) -> &SyncNetwork {
        &self.network
    }

    /// Rebuild the adjacency for a new connectivity radius. The previous structure
    /// (and any cached edge weights) is discarded, not updated incrementally.
    pub fn connect(&mut self, radius: f64) -> Result<()> {
        let adjacency = Adjacency::by_radius(self.points, radius, self.repr)?;

        if self.weighted {
            let weights = self.normalized_weights(&adjacency);
            self.network.set_adjacency(adjacency);
            self.network.set_edge_weights(weights);
        } else {
            self.network.set_adjacency(adjacency);
        }
        Ok(())
    }

    /// Dense per-edge weights: inter-point distances rescaled to `[0, 1]` by
    /// the global minimum and maximum over all connected pairs. Two passes:
    /// the first finds the extremes, the second rescales.
    fn normalized_weights(&self, adjacency: &Adjacency) -> Vec<f64> {
        let n = self.points.len();
        let mut distances = vec![0.0; n * n];
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for i in 0..n {
            for j in (i + 1)..n {
                if !adjacency.has_connection(i, j) {
                    continue;
                }
                let distance = euclidean(&self.points[i], &self.points[j]);
                distances[i * n + j] = distance;
                distances[j * n + i] = distance;
                min = min.min(distance);
                max = max.max(distance);
            }
        }

        let span = max - min;
        let mut weights = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if !adjacency.has_connection(i, j) {
                    continue;
                }
                // All connected distances equal: keep full coupling.
                weights[i * n + j] = if span > 0.0 {
                    (distances[i * n + j] - min) / span
                } else {
                    1.0
                };
            }
        }
        weights
    }

    /// Connect at `radius` and run a convergence-driven simulation toward the
    /// `order` target. Returns the phase history (or the final snapshot when
    /// `collect` is off).
    pub fn process(
        &mut self,
        radius: f64,
        order: f64,
        options: &ConvergenceOptions,
        collect: bool,
    ) -> Result<PhaseDynamic> {
        self.connect(radius)?;
        Ok(self.network.simulate_to_order(order, options, collect))
    }

    /// Extract clusters of point indices from the current phase state:
    /// oscillators within `tolerance` of an ensemble's first member share a
    /// cluster.
    pub fn clusters(&self, tolerance: f64) -> Vec<Vec<usize>> {
        sync_ensembles(self.network.phases(), tolerance)
    }
}
