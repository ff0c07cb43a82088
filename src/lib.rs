//! Clustering by coupled-oscillator synchronization.
//!
//! `entrain` is a small, pure-Rust library that performs cluster analysis by
//! simulating networks of Kuramoto phase oscillators to convergence.
//!
//! The engine lives under [`sync`] (topologies, numerical integration, order
//! parameters, ensemble extraction); the clustering models live under
//! [`cluster`]:
//! - SyncNet (radius-based sync clustering)
//! - HSyncNet (radius grown toward a target cluster count)
//! - SyncSOM (sync clustering over self-organizing-map representatives)

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod sync;

pub use cluster::{
    Clustering, HSyncNet, HSyncNetFit, SelfOrganizingMap, SyncNet, SyncNetFit, SyncSom,
};
pub use error::{Error, Result};
pub use sync::{
    Adjacency, AdjacencyRepr, Connectivity, ConvergenceOptions, OrderMetric, PhaseDynamic,
    PhaseInit, Solver, SpatialNetwork, SyncConfig, SyncNetwork,
};
