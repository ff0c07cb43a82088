//! Clustering algorithms built on oscillator synchronization.
//!
//! This module provides the high-level clustering models over the engine in
//! [`crate::sync`].
//!
//! ## Why cluster by synchronization?
//!
//! Classic partitional algorithms assign points to clusters by comparing
//! distances. Sync clustering instead *simulates* the data: each point is a
//! phase oscillator, nearby points are coupled, and the Kuramoto dynamics are
//! integrated until phases lock. Points whose oscillators lock onto the same
//! phase belong together. The number of clusters falls out of the topology
//! (plain SyncNet never needs it specified), and non-convex, chain-shaped
//! clusters are handled naturally because synchronization propagates through
//! any connected path.
//!
//! ## Algorithms (implemented)
//!
//! ### SyncNet
//!
//! Radius-parameterized sync clustering: couple points within a connectivity
//! radius, simulate to convergence, read clusters off the final phases.
//!
//! ### HSyncNet
//!
//! Target-count sync clustering: grows the connectivity radius between simulation
//! passes until at most the requested number of clusters remains. Best
//! effort: it stops at "few enough", never at "exactly that many".
//!
//! ### SyncSOM
//!
//! Two-stage clustering for larger datasets: a self-organizing map (trained
//! externally) compresses the data into neuron representatives, SyncNet
//! clusters the representatives, and the result is decoded back to the
//! original points.
//!
//! ## Usage
//!
//! ```rust
//! use entrain::cluster::{Clustering, HSyncNet, SyncNet};
//! use entrain::sync::PhaseInit;
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! // Radius-based sync clustering.
//! let labels = SyncNet::new(0.5)
//!     .with_initial(PhaseInit::Equipartition)
//!     .fit_predict(&data)
//!     .unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//!
//! // Radius grown automatically toward a target count.
//! let labels = HSyncNet::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), data.len());
//! ```

mod hsyncnet;
mod syncnet;
mod syncsom;
mod traits;
pub(crate) mod util;

pub use hsyncnet::{HSyncNet, HSyncNetFit};
pub use syncnet::{SyncNet, SyncNetFit};
pub use syncsom::{SelfOrganizingMap, SyncSom};
pub use traits::Clustering;
