//! Oscillator network state and simulation driving modes.
//!
//! A [`SyncNetwork`] owns one phase and one natural frequency per oscillator
//! plus the coupling structure between them, and advances the phases under
//! Kuramoto dynamics:
//!
//! ```text
//! dφ_i/dt = ω_i + (K / D_i) Σ_{j ∈ neighbors(i)} w_ij · sin(q · (φ_j - φ_i))
//! ```
//!
//! where `K` is the coupling strength, `D_i` a normalization constant (network
//! size or neighbor count), `w_ij` an optional per-edge weight, and `q` the
//! cluster parameter that stabilizes multiple phase-locked groups when > 1.
//!
//! Two driving modes are offered: a fixed-duration run over a given number of
//! steps, and a convergence-driven run that stops once an order parameter
//! reaches a target (with stall detection and a step bound so it always
//! terminates, returning the best-effort state rather than an error).

use std::f64::consts::PI;

use rand::prelude::*;

use super::order::{global_order, local_order, OrderMetric};
use super::solver::Solver;
use super::topology::{Adjacency, AdjacencyRepr, Connectivity};
use crate::error::{Error, Result};

/// Initial phase distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseInit {
    /// Independent uniform draws over `[0, 2π)`.
    #[default]
    Random,
    /// Evenly spaced phases `2π·i / (n-1)` across `[0, 2π]`; deterministic.
    Equipartition,
}

/// Divisor applied to the coupling sum of each oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide by the total oscillator count (classic Kuramoto `K/N`).
    #[default]
    NetworkSize,
    /// Divide by the oscillator's own neighbor count (spatial networks, where
    /// degree varies with the connectivity radius).
    Degree,
}

/// Configuration for a [`SyncNetwork`].
///
/// Every tunable of the dynamics lives here; nothing is read from process-wide
/// state, so independent clustering calls cannot influence each other.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Coupling strength `K` applied to every edge.
    pub coupling: f64,

    /// Scale for the natural frequencies: each `ω_i` is drawn uniformly from
    /// `[0, frequency_scale)`. Zero gives identical (zero) frequencies.
    pub frequency_scale: f64,

    /// Cluster parameter `q` inside the sine coupling term. Must be >= 1;
    /// values above 1 force multiple stable phase-locked groups.
    pub cluster_parameter: u32,

    /// Divisor for the coupling sum.
    pub normalization: Normalization,

    /// Initial phase distribution.
    pub initial_phases: PhaseInit,

    /// Optional RNG seed for reproducible random phases/frequencies.
    pub seed: Option<u64>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            coupling: 1.0,
            frequency_scale: 0.0,
            cluster_parameter: 1,
            normalization: Normalization::NetworkSize,
            initial_phases: PhaseInit::Random,
            seed: None,
        }
    }
}

/// Options for convergence-driven simulation.
#[derive(Debug, Clone)]
pub struct ConvergenceOptions {
    /// Integration strategy per increment.
    pub solver: Solver,

    /// Order parameter used as the stopping condition.
    pub metric: OrderMetric,

    /// Simulated time per increment.
    pub step: f64,

    /// Internal sub-step for the RK4 strategy.
    pub substep: f64,

    /// When the order parameter changes by less than this between consecutive
    /// increments, the run stops and returns the best-effort state. Guards
    /// against targets the dynamics can never reach.
    pub stall_epsilon: f64,

    /// Hard bound on the number of increments; reaching it is a best-effort
    /// stop, not an error.
    pub max_steps: usize,
}

impl Default for ConvergenceOptions {
    fn default() -> Self {
        Self {
            solver: Solver::default(),
            metric: OrderMetric::default(),
            step: 0.1,
            substep: 0.01,
            stall_epsilon: 1e-6,
            max_steps: 10_000,
        }
    }
}

/// Full phase history of a simulation run: ordered `(time, phases)` snapshots.
///
/// When history collection is disabled, a run still yields a dynamic holding
/// the single final snapshot.
#[derive(Debug, Clone, Default)]
pub struct PhaseDynamic {
    times: Vec<f64>,
    states: Vec<Vec<f64>>,
}

impl PhaseDynamic {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot.
    pub fn push(&mut self, time: f64, phases: Vec<f64>) {
        self.times.push(time);
        self.states.push(phases);
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether no snapshot has been recorded.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Snapshot times in simulation order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Phase vectors in simulation order.
    pub fn states(&self) -> &[Vec<f64>] {
        &self.states
    }

    /// Time of the last snapshot.
    pub fn last_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Phases of the last snapshot.
    pub fn last_phases(&self) -> Option<&[f64]> {
        self.states.last().map(Vec::as_slice)
    }

    /// Iterate over `(time, phases)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> {
        self.times
            .iter()
            .copied()
            .zip(self.states.iter().map(Vec::as_slice))
    }

    /// Append another run's history, shifting its times so the combined
    /// sequence is continuous (used by outer loops that simulate in passes).
    pub fn append_offset(&mut self, other: PhaseDynamic) {
        let offset = self.last_time().unwrap_or(0.0);
        for (time, state) in other.times.into_iter().zip(other.states) {
            self.times.push(offset + time);
            self.states.push(state);
        }
    }
}

/// A network of coupled phase oscillators.
#[derive(Debug, Clone)]
pub struct SyncNetwork {
    phases: Vec<f64>,
    frequencies: Vec<f64>,
    adjacency: Adjacency,
    /// Dense row-major per-edge weights; `None` means every edge weighs 1.
    edge_weights: Option<Vec<f64>>,
    config: SyncConfig,
}

impl SyncNetwork {
    /// Create a network of `size` oscillators over a static topology.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] for `size == 0`.
    /// - [`Error::InvalidParameter`] for `cluster_parameter == 0`.
    /// - [`Error::InvalidTopology`] if a grid topology does not fit `size`.
    pub fn new(
        size: usize,
        kind: Connectivity,
        repr: AdjacencyRepr,
        config: SyncConfig,
    ) -> Result<Self> {
        let adjacency = Adjacency::build(size, kind, repr)?;
        Self::with_adjacency(adjacency, config)
    }

    /// Create a network over a prebuilt adjacency structure.
    pub fn with_adjacency(adjacency: Adjacency, config: SyncConfig) -> Result<Self> {
        let size = adjacency.size();
        if size == 0 {
            return Err(Error::EmptyInput);
        }
        if config.cluster_parameter == 0 {
            return Err(Error::InvalidParameter {
                name: "cluster_parameter",
                message: "must be at least 1",
            });
        }

        let mut rng: Box<dyn RngCore> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };

        let phases = match config.initial_phases {
            PhaseInit::Random => (0..size).map(|_| rng.random::<f64>() * 2.0 * PI).collect(),
            PhaseInit::Equipartition => (0..size)
                .map(|i| {
                    if size > 1 {
                        2.0 * PI * i as f64 / (size - 1) as f64
                    } else {
                        0.0
                    }
                })
                .collect(),
        };

        let frequencies = if config.frequency_scale == 0.0 {
            vec![0.0; size]
        } else {
            (0..size)
                .map(|_| rng.random::<f64>() * config.frequency_scale)
                .collect()
        };

        Ok(Self {
            phases,
            frequencies,
            adjacency,
            edge_weights: None,
            config,
        })
    }

    /// Number of oscillators.
    pub fn size(&self) -> usize {
        self.phases.len()
    }

    /// Current phases, one per oscillator, each in `[0, 2π]`.
    pub fn phases(&self) -> &[f64] {
        &self.phases
    }

    /// Natural frequencies, fixed after construction.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Current coupling structure.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Replace the coupling structure (full rebuild, e.g. after a radius
    /// change). Clears any cached edge weights.
    pub(crate) fn set_adjacency(&mut self, adjacency: Adjacency) {
        debug_assert_eq!(adjacency.size(), self.size());
        self.adjacency = adjacency;
        self.edge_weights = None;
    }

    /// Install dense row-major per-edge weights (weighted-connection mode).
    pub(crate) fn set_edge_weights(&mut self, weights: Vec<f64>) {
        debug_assert_eq!(weights.len(), self.size() * self.size());
        self.edge_weights = Some(weights);
    }

    #[inline]
    fn edge_weight(&self, i: usize, j: usize) -> f64 {
        match &self.edge_weights {
            Some(weights) => weights[i * self.size() + j],
            None => 1.0,
        }
    }

    /// Kuramoto derivative of oscillator `i` at its hypothetical phase `phi`,
    /// with all neighbor phases frozen at `frozen`.
    fn phase_derivative(&self, frozen: &[f64], i: usize, phi: f64) -> f64 {
        let neighbors = self.adjacency.neighbors(i);
        if neighbors.is_empty() {
            return self.frequencies[i];
        }

        let q = f64::from(self.config.cluster_parameter);
        let coupling_sum: f64 = neighbors
            .iter()
            .map(|&j| self.edge_weight(i, j) * (q * (frozen[j] - phi)).sin())
            .sum();

        let divisor = match self.config.normalization {
            Normalization::NetworkSize => self.size() as f64,
            Normalization::Degree => neighbors.len() as f64,
        };

        self.frequencies[i] + self.config.coupling * coupling_sum / divisor
    }

    /// Advance every oscillator over one increment of simulated time `dt`.
    /// Neighbor phases are frozen at the start of the increment.
    fn advance(&mut self, solver: Solver, dt: f64, substep: f64) {
        let frozen = self.phases.clone();
        let mut next = Vec::with_capacity(frozen.len());
        for i in 0..frozen.len() {
            let next_phase = solver.step(
                |phi| self.phase_derivative(&frozen, i, phi),
                frozen[i],
                dt,
                substep,
            );
            next.push(next_phase);
        }
        self.phases = next;
    }

    /// Evaluate the chosen order parameter on the current state.
    pub fn order(&self, metric: OrderMetric) -> f64 {
        match metric {
            OrderMetric::Global => global_order(&self.phases),
            OrderMetric::Local => local_order(&self.phases, &self.adjacency),
        }
    }

    /// Fixed-duration simulation: `steps` increments covering `time` units of
    /// simulated time.
    ///
    /// With `collect` the returned dynamic holds the initial state plus one
    /// snapshot per increment; otherwise only the final state.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for zero `steps` or non-positive `time`.
    pub fn simulate(
        &mut self,
        steps: usize,
        time: f64,
        solver: Solver,
        collect: bool,
    ) -> Result<PhaseDynamic> {
        if steps == 0 {
            return Err(Error::InvalidParameter {
                name: "steps",
                message: "must be at least 1",
            });
        }
        if time <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "time",
                message: "must be positive",
            });
        }

        let dt = time / steps as f64;
        let substep = dt / 10.0;

        let mut dynamic = PhaseDynamic::new();
        if collect {
            dynamic.push(0.0, self.phases.clone());
        }
        for step in 1..=steps {
            self.advance(solver, dt, substep);
            if collect {
                dynamic.push(dt * step as f64, self.phases.clone());
            }
        }
        if !collect {
            dynamic.push(time, self.phases.clone());
        }
        Ok(dynamic)
    }

    /// Convergence-driven simulation: integrate in fixed increments until the
    /// chosen order parameter reaches `target`, the order stalls, or
    /// `max_steps` increments have run. All three outcomes return the final
    /// state normally; failing to reach `target` is a soft condition, not an
    /// error.
    pub fn simulate_to_order(
        &mut self,
        target: f64,
        options: &ConvergenceOptions,
        collect: bool,
    ) -> PhaseDynamic {
        let mut dynamic = PhaseDynamic::new();
        if collect {
            dynamic.push(0.0, self.phases.clone());
        }

        let mut previous = self.order(options.metric);
        let mut time = 0.0;
        if previous < target {
            for _ in 0..options.max_steps {
                self.advance(options.solver, options.step, options.substep);
                time += options.step;
                if collect {
                    dynamic.push(time, self.phases.clone());
                }

                let current = self.order(options.metric);
                if current >= target || (current - previous).abs() < options.stall_epsilon {
                    break;
                }
                previous = current;
            }
        }

        if !collect {
            dynamic.push(time, self.phases.clone());
        }
        dynamic
    }

    /// Partition the oscillators into synchronized ensembles at the current
    /// phase state. See [`sync_ensembles`].
    pub fn ensembles(&self, tolerance: f64) -> Vec<Vec<usize>> {
        sync_ensembles(&self.phases, tolerance)
    }
}

/// Partition oscillator indices into ensembles of phase-proximate oscillators.
///
/// Oscillators are scanned in index order; each one joins the first existing
/// ensemble whose **first** member's phase lies within `tolerance`, or opens a
/// new singleton ensemble. The comparison is against the first member only,
/// not all members, so membership is order-dependent. The
/// ensembles are disjoint, non-empty, and cover every index.
pub fn sync_ensembles(phases: &[f64], tolerance: f64) -> Vec<Vec<usize>> {
    let mut ensembles: Vec<Vec<usize>> = Vec::new();
    for (i, &phase) in phases.iter().enumerate() {
        let home = ensembles
            .iter_mut()
            .find(|ensemble| (phase - phases[ensemble[0]]).abs() < tolerance);
        match home {
            Some(ensemble) => ensemble.push(i),
            None => ensembles.push(vec![i]),
        }
    }
    ensembles
}
