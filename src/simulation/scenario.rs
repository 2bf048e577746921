//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces runtime bundles
//! (`Scenario<2>` or `Scenario<3>`, wrapped in `AnyScenario`) containing:
//! - per-body labels for trajectory consumers
//! - system state (`System` with bodies at t = 0, `G` and `eps`)
//! - numerical parameters (`Parameters`)

use tracing::debug;

use crate::configuration::config::{BodyConfig, PresetConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::integrator::integrate;
use crate::simulation::params::{Parameters, DEFAULT_EPS, DEFAULT_G};
use crate::simulation::presets::{near_radial_pair, outer_solar_system};
use crate::simulation::states::{Body, System, Trajectory, Vector};

/// A fully-initialized run: labelled bodies plus parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario<const D: usize> {
    pub labels: Vec<String>,
    pub system: System<D>,
    pub parameters: Parameters,
}

impl<const D: usize> Scenario<D> {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        if cfg.dimension != D {
            return Err(SimError::DimensionMismatch {
                requested: cfg.dimension,
                built: D,
            });
        }

        // Preset (if any) supplies bodies and default constants
        let (bodies, preset_g, preset_eps) = match cfg.preset {
            Some(preset) if !cfg.bodies.is_empty() => {
                return Err(SimError::PresetWithBodies {
                    preset: preset.name(),
                    bodies: cfg.bodies.len(),
                });
            }
            Some(preset) => preset_bodies(preset, D)?,
            None => (cfg.bodies, None, None),
        };

        let mut labels = Vec::with_capacity(bodies.len());
        let mut system_bodies = Vec::with_capacity(bodies.len());
        for (index, bc) in bodies.iter().enumerate() {
            labels.push(bc.name.clone().unwrap_or_else(|| format!("body{index}")));
            system_bodies.push(body_from_config(index, bc)?);
        }

        // Parameters: explicit values, then the preset's, then the defaults
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            t_max: p_cfg.t_max,
            g: p_cfg.g.or(preset_g).unwrap_or(DEFAULT_G),
            eps: p_cfg.eps.or(preset_eps).unwrap_or(DEFAULT_EPS),
        };
        parameters.validate()?;

        let system = System::new(system_bodies, parameters.g, parameters.eps);
        system.validate()?;

        debug!(bodies = system.len(), dim = D, "scenario built");
        Ok(Self {
            labels,
            system,
            parameters,
        })
    }

    pub fn masses(&self) -> Vec<f64> {
        self.system.masses()
    }

    /// Integrate the scenario's initial state over its horizon
    pub fn run(&self) -> Result<Trajectory<D>, SimError> {
        integrate(&self.system.state(), &self.system.masses(), &self.parameters)
    }
}

/// A scenario whose dimension is only known at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum AnyScenario {
    Planar(Scenario<2>),
    Spatial(Scenario<3>),
}

impl AnyScenario {
    pub fn dimension(&self) -> usize {
        match self {
            AnyScenario::Planar(_) => 2,
            AnyScenario::Spatial(_) => 3,
        }
    }
}

/// Dispatch on `cfg.dimension` and build the matching scenario
pub fn build_scenario(cfg: ScenarioConfig) -> Result<AnyScenario, SimError> {
    match cfg.dimension {
        2 => Scenario::<2>::build_scenario(cfg).map(AnyScenario::Planar),
        3 => Scenario::<3>::build_scenario(cfg).map(AnyScenario::Spatial),
        d => Err(SimError::UnsupportedDimension(d)),
    }
}

fn body_from_config<const D: usize>(index: usize, bc: &BodyConfig) -> Result<Body<D>, SimError> {
    let q = vector_from(index, "x", &bc.x)?;
    let p = match (&bc.p, &bc.v) {
        (Some(p), _) => vector_from(index, "p", p)?,
        (None, Some(v)) => vector_from::<D>(index, "v", v)? * bc.m,
        (None, None) => Vector::<D>::zeros(),
    };
    Ok(Body::new(q, p, bc.m))
}

fn vector_from<const D: usize>(index: usize, field: &'static str, xs: &[f64]) -> Result<Vector<D>, SimError> {
    if xs.len() != D {
        return Err(SimError::ComponentCount {
            index,
            field,
            expected: D,
            found: xs.len(),
        });
    }
    Ok(Vector::<D>::from_column_slice(xs))
}

/// Preset bodies in configuration form, plus the preset's `G` and `eps`
fn preset_bodies(
    preset: PresetConfig,
    requested: usize,
) -> Result<(Vec<BodyConfig>, Option<f64>, Option<f64>), SimError> {
    let actual = match preset {
        PresetConfig::OuterSolarSystem => 3,
        PresetConfig::NearRadialPair => 2,
    };
    if actual != requested {
        return Err(SimError::PresetDimension {
            preset: preset.name(),
            actual,
            requested,
        });
    }

    let (labels, bodies, g, eps) = match preset {
        PresetConfig::OuterSolarSystem => {
            let (labels, sys) = outer_solar_system();
            let bodies = sys.bodies.iter().map(|b| (b.q.as_slice().to_vec(), b.p.as_slice().to_vec(), b.m)).collect::<Vec<_>>();
            (labels, bodies, sys.g, sys.eps)
        }
        PresetConfig::NearRadialPair => {
            let sys = near_radial_pair();
            let labels = vec!["left".to_string(), "right".to_string()];
            let bodies = sys.bodies.iter().map(|b| (b.q.as_slice().to_vec(), b.p.as_slice().to_vec(), b.m)).collect::<Vec<_>>();
            (labels, bodies, sys.g, sys.eps)
        }
    };

    let bodies = labels
        .into_iter()
        .zip(bodies)
        .map(|(name, (x, p, m))| BodyConfig {
            name: Some(name),
            x,
            p: Some(p),
            v: None,
            m,
        })
        .collect();
    Ok((bodies, Some(g), Some(eps)))
}
