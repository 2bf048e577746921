//! Core state types for the N-body simulation.
//!
//! Defines dimension-generic body/system/state structs over `Vector<D>`:
//! - `Body` / `System` hold masses and the physical constants
//! - `State` is one snapshot of positions `q` and momenta `p`
//! - `Trajectory` is the immutable time series produced by the integrator
//!
//! `D` is 2 or 3 in practice (`NVec2` / `NVec3`).

use nalgebra::SVector;

use crate::error::SimError;

pub type Vector<const D: usize> = SVector<f64, D>;
pub type NVec2 = Vector<2>;
pub type NVec3 = Vector<3>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body<const D: usize> {
    pub q: Vector<D>, // position
    pub p: Vector<D>, // momentum
    pub m: f64, // mass
}

impl<const D: usize> Body<D> {
    pub fn new(q: Vector<D>, p: Vector<D>, m: f64) -> Self {
        Self { q, p, m }
    }

    /// Build a body from its velocity instead of its momentum
    pub fn with_velocity(q: Vector<D>, v: Vector<D>, m: f64) -> Self {
        Self { q, p: v * m, m }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System<const D: usize> {
    pub bodies: Vec<Body<D>>, // ordered collection of bodies
    pub g: f64, // gravitational constant
    pub eps: f64, // minimum separation floor, 0 disables softening
}

impl<const D: usize> System<D> {
    pub fn new(bodies: Vec<Body<D>>, g: f64, eps: f64) -> Self {
        Self { bodies, g, eps }
    }

    /// Reassemble a system from parallel state/mass arrays
    pub fn from_parts(state: &State<D>, masses: &[f64], g: f64, eps: f64) -> Result<Self, SimError> {
        state.check_shape(masses)?;
        let bodies = state
            .q
            .iter()
            .zip(&state.p)
            .zip(masses)
            .map(|((q, p), m)| Body::new(*q, *p, *m))
            .collect();
        Ok(Self { bodies, g, eps })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.m).collect()
    }

    /// Snapshot of the current positions and momenta
    pub fn state(&self) -> State<D> {
        State {
            q: self.bodies.iter().map(|b| b.q).collect(),
            p: self.bodies.iter().map(|b| b.p).collect(),
        }
    }

    /// Check the physical constants and every mass.
    pub fn validate(&self) -> Result<(), SimError> {
        validate_constants(self.g, self.eps)?;
        validate_masses(&self.masses())
    }
}

/// Positions and momenta of all bodies at one instant, indexed like the mass array
#[derive(Debug, Clone, PartialEq)]
pub struct State<const D: usize> {
    pub q: Vec<Vector<D>>,
    pub p: Vec<Vector<D>>,
}

impl<const D: usize> State<D> {
    pub fn new(q: Vec<Vector<D>>, p: Vec<Vector<D>>) -> Self {
        Self { q, p }
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// Same state with every momentum negated (time reversal)
    pub fn reversed(&self) -> Self {
        Self {
            q: self.q.clone(),
            p: self.p.iter().map(|p| -p).collect(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.q.iter().chain(&self.p).all(|v| v.iter().all(|c| c.is_finite()))
    }

    /// Reject empty states and arrays whose body counts disagree.
    pub fn check_shape(&self, masses: &[f64]) -> Result<(), SimError> {
        if self.q.len() != self.p.len() || self.q.len() != masses.len() {
            return Err(SimError::ShapeMismatch {
                positions: self.q.len(),
                momenta: self.p.len(),
                masses: masses.len(),
            });
        }
        if self.q.is_empty() {
            return Err(SimError::NoBodies);
        }
        Ok(())
    }
}

pub(crate) fn validate_masses(masses: &[f64]) -> Result<(), SimError> {
    if masses.is_empty() {
        return Err(SimError::NoBodies);
    }
    for (index, &mass) in masses.iter().enumerate() {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(SimError::NonPositiveMass { index, mass });
        }
    }
    Ok(())
}

pub(crate) fn validate_constants(g: f64, eps: f64) -> Result<(), SimError> {
    if !(g > 0.0 && g.is_finite()) {
        return Err(SimError::NonPositiveGravity(g));
    }
    if !(eps >= 0.0 && eps.is_finite()) {
        return Err(SimError::NegativeSoftening(eps));
    }
    Ok(())
}

/// Time series of states written once by the integrator.
///
/// Positions and momenta are stored contiguously, `bodies` entries per time
/// index, so a run with `tnum` entries owns exactly two allocations.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const D: usize> {
    dt: f64,
    bodies: usize,
    q: Vec<Vector<D>>,
    p: Vec<Vector<D>>,
}

impl<const D: usize> Trajectory<D> {
    /// Start a trajectory at `initial` with room for `tnum` entries
    ///
    /// The whole run is reserved up front, so a horizon too long to store
    /// fails here instead of part way through the integration.
    pub(crate) fn with_capacity(initial: &State<D>, dt: f64, tnum: usize) -> Result<Self, SimError> {
        let bodies = initial.len();
        let too_large = || SimError::TrajectoryTooLarge { tnum, bodies };
        let entries = tnum.checked_mul(bodies).ok_or_else(too_large)?;

        let mut q = Vec::new();
        let mut p = Vec::new();
        q.try_reserve_exact(entries).map_err(|_| too_large())?;
        p.try_reserve_exact(entries).map_err(|_| too_large())?;
        q.extend_from_slice(&initial.q);
        p.extend_from_slice(&initial.p);
        Ok(Self { dt, bodies, q, p })
    }

    pub(crate) fn push(&mut self, state: &State<D>) {
        self.q.extend_from_slice(&state.q);
        self.p.extend_from_slice(&state.p);
    }

    /// Number of time indices (`tnum`)
    pub fn len(&self) -> usize {
        if self.bodies == 0 {
            return 0;
        }
        self.q.len() / self.bodies
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bodies in every state
    pub fn bodies(&self) -> usize {
        self.bodies
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Simulation time of index `t`
    pub fn time(&self, t: usize) -> f64 {
        t as f64 * self.dt
    }

    pub fn positions(&self, t: usize) -> &[Vector<D>] {
        &self.q[t * self.bodies..(t + 1) * self.bodies]
    }

    pub fn momenta(&self, t: usize) -> &[Vector<D>] {
        &self.p[t * self.bodies..(t + 1) * self.bodies]
    }

    pub fn state(&self, t: usize) -> State<D> {
        State {
            q: self.positions(t).to_vec(),
            p: self.momenta(t).to_vec(),
        }
    }

    pub fn last(&self) -> State<D> {
        self.state(self.len() - 1)
    }

    /// Iterate `(positions, momenta)` slices in time order
    pub fn iter(&self) -> impl Iterator<Item = (&[Vector<D>], &[Vector<D>])> + '_ {
        self.q.chunks(self.bodies).zip(self.p.chunks(self.bodies))
    }

    /// First time index holding an infinite or NaN component, if any
    pub fn first_non_finite(&self) -> Option<usize> {
        self.iter().position(|(q, p)| {
            q.iter().chain(p).any(|v| v.iter().any(|c| !c.is_finite()))
        })
    }
}
