//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - integration step size and horizon (`dt`, `t_max`, both required),
//! - gravitational constant `g` (default 1.0),
//! - softening floor `eps` (default 0.0, disabled)

use crate::error::SimError;
use crate::simulation::states::validate_constants;

pub const DEFAULT_G: f64 = 1.0;
pub const DEFAULT_EPS: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub t_max: f64, // horizon
    pub g: f64, // gravitational constant
    pub eps: f64, // softening floor
}

impl Parameters {
    pub fn new(dt: f64, t_max: f64) -> Self {
        Self {
            dt,
            t_max,
            g: DEFAULT_G,
            eps: DEFAULT_EPS,
        }
    }

    pub fn with_gravity(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    pub fn with_softening(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Number of trajectory entries, `floor(t_max / dt) + 1`
    pub fn tnum(&self) -> Result<usize, SimError> {
        validate_timing(self.dt, self.t_max)?;
        let nsteps = steps(self.dt, self.t_max)?;
        nsteps.checked_add(1).ok_or(SimError::TooManySteps {
            dt: self.dt,
            t_max: self.t_max,
        })
    }

    pub fn validate(&self) -> Result<(), SimError> {
        validate_timing(self.dt, self.t_max)?;
        validate_constants(self.g, self.eps)
    }
}

pub(crate) fn validate_timing(dt: f64, t_max: f64) -> Result<(), SimError> {
    if !(dt > 0.0 && dt.is_finite()) {
        return Err(SimError::NonPositiveStep(dt));
    }
    if !(t_max > 0.0 && t_max.is_finite()) {
        return Err(SimError::NonPositiveHorizon(t_max));
    }
    Ok(())
}

/// Number of integration steps for a validated `dt`/`t_max` pair
///
/// Ratios too large for a `usize` are rejected rather than saturated.
pub(crate) fn steps(dt: f64, t_max: f64) -> Result<usize, SimError> {
    let ratio = (t_max / dt).floor();
    // usize::MAX as f64 rounds up, so compare strictly
    if !(ratio < usize::MAX as f64) {
        return Err(SimError::TooManySteps { dt, t_max });
    }
    Ok(ratio as usize)
}
