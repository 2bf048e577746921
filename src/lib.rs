pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;
pub mod error;

pub use error::SimError;

pub use simulation::states::{Body, System, State, Trajectory, Vector, NVec2, NVec3};
pub use simulation::params::Parameters;
pub use simulation::forces::{PotentialGradient, NewtonianGravity, pair_gradient, grad_p, hamiltonian_gradients};
pub use simulation::integrator::{integrate, integrate_with, stormer_verlet_step, Scratch};
pub use simulation::diagnostics::{kinetic_energy, potential_energy, total_energy, total_momentum, EnergyDrift};
pub use simulation::presets::{outer_solar_system, circular_binary, circular_period, near_radial_pair};
pub use simulation::scenario::{Scenario, AnyScenario, build_scenario};

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig, PresetConfig};

pub use output::export::write_csv;

pub use benchmark::benchmark::{bench_gravity, bench_verlet_curve};
