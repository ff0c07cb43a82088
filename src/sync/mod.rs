//! Oscillator-network simulation engine.
//!
//! This module implements clustering-by-synchronization: data points become
//! phase oscillators, proximity (or a static topology) becomes coupling, and
//! the Kuramoto dynamics are integrated until the network phase-locks. Groups
//! of oscillators that lock onto the same phase form the clusters.
//!
//! The pieces compose rather than inherit:
//!
//! - [`topology`] builds the coupling structure ([`Adjacency`]) from a static
//!   kind or a connectivity radius, stored as a dense matrix or neighbor lists.
//! - [`solver`] advances a single phase over one increment ([`Solver`]), with
//!   Euler, fixed-step RK4, and adaptive strategies.
//! - [`order`] evaluates the global and local synchronization order used as
//!   stopping conditions.
//! - [`network`] owns the mutable state ([`SyncNetwork`]) and the two driving
//!   modes (fixed duration, convergence-driven), plus the ensemble extractor.
//! - [`spatial`] specializes the network to point clouds coupled within a
//!   connectivity radius ([`SpatialNetwork`]), the engine behind the high-level
//!   clustering models in [`crate::cluster`].

pub mod network;
pub mod order;
pub mod solver;
pub mod spatial;
pub mod topology;

pub use network::{
    sync_ensembles, ConvergenceOptions, Normalization, PhaseDynamic, PhaseInit, SyncConfig,
    SyncNetwork,
};
pub use order::{global_order, local_order, OrderMetric};
pub use solver::{normalize_phase, Solver};
pub use spatial::SpatialNetwork;
pub use topology::{Adjacency, AdjacencyRepr, Connectivity};
