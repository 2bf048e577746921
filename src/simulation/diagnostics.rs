//! Conserved quantities used to check a run
//!
//! Energies use the same softened distance as the force law, so an
//! integration with `eps > 0` is measured against the potential it sees.

use super::forces::softened_distance;
use super::states::{Trajectory, Vector};

/// `Σ ‖p_k‖² / 2 m_k`
pub fn kinetic_energy<const D: usize>(p: &[Vector<D>], m: &[f64]) -> f64 {
    p.iter().zip(m).map(|(p, m)| p.norm_squared() / (2.0 * m)).sum()
}

/// `-Σ_{i<k} G m_i m_k / max(‖q_i - q_k‖, eps)`
pub fn potential_energy<const D: usize>(q: &[Vector<D>], m: &[f64], g: f64, eps: f64) -> f64 {
    let n = q.len();
    let mut u = 0.0;
    for k in 0..n {
        for i in (k + 1)..n {
            let d = softened_distance(&(q[i] - q[k]), eps);
            u -= g * m[i] * m[k] / d;
        }
    }
    u
}

pub fn total_energy<const D: usize>(q: &[Vector<D>], p: &[Vector<D>], m: &[f64], g: f64, eps: f64) -> f64 {
    kinetic_energy(p, m) + potential_energy(q, m, g, eps)
}

/// Sum of all momenta; constant for an isolated system
pub fn total_momentum<const D: usize>(p: &[Vector<D>]) -> Vector<D> {
    p.iter().fold(Vector::<D>::zeros(), |acc, p| acc + p)
}

/// Energy error of a whole trajectory relative to its first state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyDrift {
    pub initial: f64, // energy at index 0
    pub max_abs: f64, // max |E_t - E_0|
    pub max_rel: f64, // max_abs / |E_0|
    pub final_rel: f64, // |E_last - E_0| / |E_0|
}

impl EnergyDrift {
    pub fn measure<const D: usize>(trajectory: &Trajectory<D>, m: &[f64], g: f64, eps: f64) -> Self {
        let mut energies = trajectory.iter().map(|(q, p)| total_energy(q, p, m, g, eps));
        let initial = energies.next().unwrap_or(0.0);

        let mut max_abs: f64 = 0.0;
        let mut last = initial;
        for e in energies {
            max_abs = max_abs.max((e - initial).abs());
            last = e;
        }

        // relative errors fall back to absolute ones for a zero-energy start
        let scale = if initial != 0.0 { initial.abs() } else { 1.0 };
        Self {
            initial,
            max_abs,
            max_rel: max_abs / scale,
            final_rel: (last - initial).abs() / scale,
        }
    }
}
