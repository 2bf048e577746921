//! Named initial conditions
//!
//! Each preset returns a ready-made [`System`] (and labels where the bodies
//! have names) instead of global tables, so the integrator never reads
//! process-wide state.

use std::f64::consts::PI;

use super::states::{Body, NVec2, NVec3, System};

/// Gravitational constant in AU³ / (solar mass · day²)
pub const G_SOLAR: f64 = 2.959_122_082_86e-4;

/// Sun and the outer planets, positions in AU, velocities in AU/day,
/// masses relative to the Sun (whose mass includes the inner planets).
const OUTER_SOLAR_SYSTEM: [(&str, f64, [f64; 3], [f64; 3]); 6] = [
    ("Sun", 1.000_005_976_82, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
    (
        "Jupiter",
        0.000_954_786_104_043,
        [-3.502_365_3, -3.816_984_7, -1.550_796_3],
        [0.005_654_29, -0.004_124_90, -0.001_905_89],
    ),
    (
        "Saturn",
        0.000_285_583_733_151,
        [9.075_531_4, -3.045_835_3, -1.648_370_8],
        [0.001_683_18, 0.004_835_25, 0.001_924_62],
    ),
    (
        "Uranus",
        0.000_043_727_316_454_6,
        [8.310_142_0, -16.290_108_6, -7.252_127_8],
        [0.003_541_78, 0.001_371_02, 0.000_550_29],
    ),
    (
        "Neptune",
        0.000_051_775_913_844_9,
        [11.470_766_6, -25.729_482_9, -10.816_945_6],
        [0.002_889_30, 0.001_145_27, 0.000_396_77],
    ),
    (
        "Pluto",
        1.0 / 1.3e8,
        [-15.538_735_7, -25.222_559_4, -3.190_238_2],
        [0.002_767_25, -0.001_707_02, -0.001_365_04],
    ),
];

/// The outer solar system, unsoftened
pub fn outer_solar_system() -> (Vec<String>, System<3>) {
    let labels = OUTER_SOLAR_SYSTEM.iter().map(|(name, ..)| name.to_string()).collect();
    let bodies = OUTER_SOLAR_SYSTEM
        .iter()
        .map(|(_, m, x, v)| Body::with_velocity(NVec3::from(*x), NVec3::from(*v), *m))
        .collect();
    (labels, System::new(bodies, G_SOLAR, 0.0))
}

/// Two bodies separated by `r` on a circular orbit about their common
/// centre of mass at the origin, moving counter-clockwise in the plane
pub fn circular_binary(m1: f64, m2: f64, r: f64, g: f64) -> System<2> {
    let total = m1 + m2;
    let v_rel = (g * total / r).sqrt();

    let b1 = Body::with_velocity(
        NVec2::new(-r * m2 / total, 0.0),
        NVec2::new(0.0, -v_rel * m2 / total),
        m1,
    );
    let b2 = Body::with_velocity(
        NVec2::new(r * m1 / total, 0.0),
        NVec2::new(0.0, v_rel * m1 / total),
        m2,
    );
    System::new(vec![b1, b2], g, 0.0)
}

/// Kepler period `2π sqrt(r³ / G(m1 + m2))` of a circular orbit
pub fn circular_period(m1: f64, m2: f64, r: f64, g: f64) -> f64 {
    2.0 * PI * (r.powi(3) / (g * (m1 + m2))).sqrt()
}

/// Two light bodies falling almost head-on toward each other
///
/// Near-radial orbit with pericentre of order 1e-4, so it needs a softening
/// floor; the one returned keeps the core well resolved at `dt = 0.001`.
pub fn near_radial_pair() -> System<2> {
    let bodies = vec![
        Body::new(NVec2::new(0.0, 1.0), NVec2::new(0.0, -0.0001), 0.1),
        Body::new(NVec2::new(1.0, 0.0), NVec2::new(0.0, 0.0001), 0.1),
    ];
    System::new(bodies, 0.1, 0.05)
}
