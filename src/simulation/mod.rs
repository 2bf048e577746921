pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod diagnostics;
pub mod presets;
pub mod scenario;
