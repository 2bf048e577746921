//! Fixed-step Störmer–Verlet integration of the N-body Hamiltonian
//!
//! Each step is a position–momentum–position split driven by a
//! [`PotentialGradient`] and the kinematic relation `Hp = p / m`:
//!
//! ```text
//! q_half = q_n    + dt/2 * Hp(p_n)
//! p_n+1  = p_n    - dt   * Hq(q_half)
//! q_n+1  = q_half + dt/2 * Hp(p_n+1)
//! ```
//!
//! A run is a pure function of its inputs and returns the whole trajectory.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{debug, warn};

use super::forces::{grad_p, NewtonianGravity, PotentialGradient};
use super::params::{steps, validate_timing, Parameters};
use super::states::{validate_masses, State, System, Trajectory, Vector};
use crate::error::SimError;

/// Per-run work buffers, sized once and reused by every step
#[derive(Debug, Clone)]
pub struct Scratch<const D: usize> {
    velocity: Vec<Vector<D>>,
    gradient: Vec<Vector<D>>,
}

impl<const D: usize> Scratch<D> {
    pub fn new(n: usize) -> Self {
        Self {
            velocity: vec![Vector::<D>::zeros(); n],
            gradient: vec![Vector::<D>::zeros(); n],
        }
    }
}

/// Advance `state` by one Störmer–Verlet step of size `dt`, in place
pub fn stormer_verlet_step<const D: usize, H>(
    potential: &H,
    masses: &[f64],
    dt: f64,
    state: &mut State<D>,
    scratch: &mut Scratch<D>,
) where
    H: PotentialGradient<D> + ?Sized,
{
    let half_dt = 0.5 * dt; // half step dt/2

    // Drift: q_half = q_n + (dt/2) * Hp(p_n)
    grad_p(&state.p, masses, &mut scratch.velocity);
    for (q, v) in state.q.iter_mut().zip(&scratch.velocity) {
        *q += v * half_dt;
    }

    // Kick: p_n+1 = p_n - dt * Hq(q_half)
    potential.grad_q(&state.q, masses, &mut scratch.gradient);
    for (p, g) in state.p.iter_mut().zip(&scratch.gradient) {
        *p -= g * dt;
    }

    // Second drift with the new momenta: q_n+1 = q_half + (dt/2) * Hp(p_n+1)
    grad_p(&state.p, masses, &mut scratch.velocity);
    for (q, v) in state.q.iter_mut().zip(&scratch.velocity) {
        *q += v * half_dt;
    }
}

/// Integrate under Newtonian gravity configured by `params`
///
/// Returns `floor(t_max / dt) + 1` states, index 0 being `initial`.
pub fn integrate<const D: usize>(
    initial: &State<D>,
    masses: &[f64],
    params: &Parameters,
) -> Result<Trajectory<D>, SimError> {
    params.validate()?;
    let gravity = NewtonianGravity::new(params.g, params.eps);
    integrate_with(initial, masses, &gravity, params.dt, params.t_max, None)
}

/// Integrate under an arbitrary potential
///
/// When `cancel` is given it is polled between completed steps; a set flag
/// aborts the run with [`SimError::Cancelled`] and discards the partial
/// trajectory.
pub fn integrate_with<const D: usize, H>(
    initial: &State<D>,
    masses: &[f64],
    potential: &H,
    dt: f64,
    t_max: f64,
    cancel: Option<&AtomicBool>,
) -> Result<Trajectory<D>, SimError>
where
    H: PotentialGradient<D> + ?Sized,
{
    validate_timing(dt, t_max)?;
    initial.check_shape(masses)?;
    validate_masses(masses)?;

    let n = initial.len();
    let nsteps = steps(dt, t_max)?;
    let tnum = nsteps.checked_add(1).ok_or(SimError::TooManySteps { dt, t_max })?;
    let mut trajectory = Trajectory::with_capacity(initial, dt, tnum)?;
    debug!(bodies = n, dim = D, dt, t_max, tnum, "starting integration");

    let started = Instant::now();
    let mut state = initial.clone();
    let mut scratch = Scratch::new(n);

    for completed in 0..nsteps {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                debug!(completed, "integration cancelled");
                return Err(SimError::Cancelled { completed });
            }
        }
        stormer_verlet_step(potential, masses, dt, &mut state, &mut scratch);
        trajectory.push(&state);
    }

    if let Some(t) = trajectory.first_non_finite() {
        warn!(index = t, time = trajectory.time(t), "trajectory contains non-finite values");
    }
    debug!(elapsed_ms = started.elapsed().as_secs_f64() * 1000.0, "integration finished");

    Ok(trajectory)
}

impl<const D: usize> System<D> {
    /// Integrate this system's current state with its own `g` and `eps`
    pub fn integrate(&self, dt: f64, t_max: f64) -> Result<Trajectory<D>, SimError> {
        let params = Parameters::new(dt, t_max)
            .with_gravity(self.g)
            .with_softening(self.eps);
        integrate(&self.state(), &self.masses(), &params)
    }
}
