//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - `dimension`          – 2 or 3 (default 2)
//! - `preset`             – optional named initial condition, exclusive with `bodies`
//! - [`ParametersConfig`] – step size, horizon and physical constants
//! - [`BodyConfig`]       – initial state for each body
//!
//! # YAML format
//! An example 2D scenario YAML matching these types:
//!
//! ```yaml
//! dimension: 2
//!
//! parameters:
//!   dt: 0.001               # fixed step size (required)
//!   t_max: 100.0            # integration horizon (required)
//!   G: 0.1                  # gravitational constant, default 1.0
//!   eps: 0.05               # softening floor, default 0.0 (disabled)
//!
//! bodies:
//!   - name: left
//!     x: [ 0.0, 1.0 ]
//!     p: [ 0.0, -0.0001 ]
//!     m: 0.1
//!   - name: right
//!     x: [ 1.0, 0.0 ]
//!     v: [ 0.0, 0.001 ]     # velocity instead of momentum
//!     m: 0.1
//! ```
//!
//! The engine then maps this configuration into a runtime
//! [`Scenario`](crate::Scenario) via [`build_scenario`](crate::build_scenario).

use serde::Deserialize;

/// Named initial conditions selectable with `preset:`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PresetConfig {
    OuterSolarSystem, // 3D, Sun + outer planets, G in AU/day units
    NearRadialPair, // 2D, two light bodies on a near-collision orbit
}

impl PresetConfig {
    /// Name as written in YAML
    pub fn name(self) -> &'static str {
        match self {
            PresetConfig::OuterSolarSystem => "outer_solar_system",
            PresetConfig::NearRadialPair => "near_radial_pair",
        }
    }
}

/// Step size, horizon and physical constants
/// `G` and `eps` fall back to the preset's values, then to the engine defaults
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub dt: f64, // time step size
    pub t_max: f64, // time end
    #[serde(rename = "G", default)]
    pub g: Option<f64>, // gravitational constant
    #[serde(default)]
    pub eps: Option<f64>, // softening floor
}

/// Configuration for a single body's initial state
/// `p` (momentum) wins over `v` (velocity); a body with neither starts at rest
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // label for exported trajectories
    pub x: Vec<f64>, // initial position
    #[serde(default)]
    pub p: Option<Vec<f64>>, // initial momentum
    #[serde(default)]
    pub v: Option<Vec<f64>>, // initial velocity
    pub m: f64, // mass
}

fn default_dimension() -> usize {
    2
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default = "default_dimension")]
    pub dimension: usize, // 2 or 3
    #[serde(default)]
    pub preset: Option<PresetConfig>, // supplies the bodies; `bodies` must then be empty
    pub parameters: ParametersConfig, // global numerical and physical parameters
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // bodies that define the initial state of the system
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
