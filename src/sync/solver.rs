//! Numerical integration strategies for phase dynamics.
//!
//! Each oscillator's phase obeys a scalar ODE whose right-hand side depends on
//! the phases of its neighbors. One simulation increment advances every
//! oscillator over the same interval with the neighbor phases frozen at the
//! start of the increment, so integration reduces to independent scalar steps.

use std::f64::consts::PI;

/// Tolerance for the adaptive step-doubling solver.
const ADAPTIVE_TOLERANCE: f64 = 1e-9;

/// Maximum halving depth for the adaptive solver.
const ADAPTIVE_MAX_DEPTH: u32 = 12;

/// Integration strategy for one phase increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solver {
    /// Single explicit Euler step per increment. Fastest, least accurate.
    Fast,
    /// Classic fixed-step 4th-order Runge-Kutta with a finer internal sub-step.
    #[default]
    Rk4,
    /// Step-doubling RK4: halves the step until two half steps agree with one
    /// full step, up to a bounded depth.
    Adaptive,
}

impl Solver {
    /// Advance a single phase over `dt` under derivative `f`, then wrap the
    /// result into `[0, 2π]`.
    ///
    /// `substep` is the internal integration step for the RK4 strategy (the
    /// increment is split into `ceil(dt / substep)` equal pieces).
    pub fn step(self, f: impl Fn(f64) -> f64, phase: f64, dt: f64, substep: f64) -> f64 {
        let next = match self {
            Solver::Fast => phase + f(phase) * dt,
            Solver::Rk4 => {
                let pieces = if substep > 0.0 && substep < dt {
                    (dt / substep).ceil() as usize
                } else {
                    1
                };
                let h = dt / pieces as f64;
                let mut current = phase;
                for _ in 0..pieces {
                    current = rk4_step(&f, current, h);
                }
                current
            }
            Solver::Adaptive => adaptive_step(&f, phase, dt, 0),
        };
        normalize_phase(next)
    }
}

/// One classic RK4 step for a scalar autonomous ODE.
fn rk4_step(f: &impl Fn(f64) -> f64, y: f64, h: f64) -> f64 {
    let k1 = f(y);
    let k2 = f(y + 0.5 * h * k1);
    let k3 = f(y + 0.5 * h * k2);
    let k4 = f(y + h * k3);
    y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}

/// Step-doubling error control: accept the full step when one RK4 step over
/// `h` agrees with two chained steps over `h/2`, otherwise recurse on the
/// halves. Depth is bounded so pathological derivatives cannot hang.
fn adaptive_step(f: &impl Fn(f64) -> f64, y: f64, h: f64, depth: u32) -> f64 {
    let full = rk4_step(f, y, h);
    let half = rk4_step(f, y, 0.5 * h);
    let twice = rk4_step(f, half, 0.5 * h);

    if (full - twice).abs() <= ADAPTIVE_TOLERANCE || depth >= ADAPTIVE_MAX_DEPTH {
        twice
    } else {
        let mid = adaptive_step(f, y, 0.5 * h, depth + 1);
        adaptive_step(f, mid, 0.5 * h, depth + 1)
    }
}

/// Wrap a phase into `[0, 2π]`.
///
/// Values already inside the interval are returned untouched (including the
/// boundary value `2π` itself). Everything else is reduced with true modular
/// arithmetic, so the result is correct for arbitrarily large or negative
/// inputs in constant time.
#[inline]
pub fn normalize_phase(phase: f64) -> f64 {
    if (0.0..=2.0 * PI).contains(&phase) {
        phase
    } else {
        phase.rem_euclid(2.0 * PI)
    }
}
