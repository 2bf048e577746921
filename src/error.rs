//! Error types for configuring and running a simulation
//!
//! Every variant is a configuration error detected before the integration
//! loop starts, except `Cancelled`. Non-finite values produced by a true
//! collision with softening disabled are not errors; see
//! [`Trajectory::first_non_finite`](crate::Trajectory::first_non_finite).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("time step must be positive and finite, got {0}")]
    NonPositiveStep(f64),

    #[error("integration horizon must be positive and finite, got {0}")]
    NonPositiveHorizon(f64),

    #[error("step size {dt} over horizon {t_max} gives more steps than can be counted")]
    TooManySteps { dt: f64, t_max: f64 },

    #[error("cannot allocate a trajectory of {tnum} states with {bodies} bodies")]
    TrajectoryTooLarge { tnum: usize, bodies: usize },

    #[error("system has no bodies")]
    NoBodies,

    #[error("inconsistent body counts: {positions} positions, {momenta} momenta, {masses} masses")]
    ShapeMismatch {
        positions: usize,
        momenta: usize,
        masses: usize,
    },

    #[error("body {index} has non-positive mass {mass}")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("gravitational constant must be positive, got {0}")]
    NonPositiveGravity(f64),

    #[error("softening floor must be non-negative, got {0}")]
    NegativeSoftening(f64),

    #[error("unsupported dimension {0}, expected 2 or 3")]
    UnsupportedDimension(usize),

    #[error("scenario asks for dimension {requested} but is being built as {built}-dimensional")]
    DimensionMismatch { requested: usize, built: usize },

    #[error("preset `{preset}` supplies its own bodies, but {bodies} bodies are also listed")]
    PresetWithBodies { preset: &'static str, bodies: usize },

    #[error("body {index}: `{field}` has {found} components, expected {expected}")]
    ComponentCount {
        index: usize,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("preset `{preset}` is {actual}-dimensional but the scenario asks for {requested}")]
    PresetDimension {
        preset: &'static str,
        actual: usize,
        requested: usize,
    },

    #[error("integration cancelled after {completed} steps")]
    Cancelled { completed: usize },
}
