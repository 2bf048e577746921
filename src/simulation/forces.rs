//! Hamiltonian gradients for the n-body engine
//!
//! For `H(Q, P) = Σ ‖P_k‖² / 2m_k + U(Q)` with Newtonian potential
//! `U = -Σ_{i<k} G m_i m_k / max(‖Q_i - Q_k‖, ε)` this module provides
//! - `Hp = ∂H/∂P`, the velocity of every body ([`grad_p`])
//! - `Hq = ∂H/∂Q = ∇U`, through the [`PotentialGradient`] trait
//!
//! `Hq` points *away* from the attracting bodies; the integrator subtracts it
//! from the momenta.

use crate::error::SimError;
use crate::simulation::states::Vector;

/// Trait for potentials driving the momentum update
/// Implementations overwrite `out[k]` with `∂U/∂q_k` for every body
pub trait PotentialGradient<const D: usize> {
    fn grad_q(&self, q: &[Vector<D>], m: &[f64], out: &mut [Vector<D>]);
}

/// Newtonian gravity with a minimum-separation floor
/// Distances below `eps` are clamped to `eps` before cubing; `eps = 0`
/// disables the clamp and coincident bodies yield non-finite gradients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub eps: f64, // softening floor
}

impl NewtonianGravity {
    pub fn new(g: f64, eps: f64) -> Self {
        Self { g, eps }
    }
}

impl<const D: usize> PotentialGradient<D> for NewtonianGravity {
    fn grad_q(&self, q: &[Vector<D>], m: &[f64], out: &mut [Vector<D>]) {
        // Zero buffer
        for o in out.iter_mut() {
            *o = Vector::<D>::zeros();
        }

        let n = q.len();

        // Loop over each unordered pair (k, i) with k < i
        // One term per pair, added to k and subtracted from i
        for k in 0..n {
            for i in (k + 1)..n {
                let term = pair_gradient(&q[k], &q[i], m[k], m[i], self.g, self.eps);
                out[k] += term;
                out[i] -= term;
            }
        }
    }
}

/// Contribution of body `i` to `Hq[k]`:
/// `-G m_k m_i (q_i - q_k) / max(‖q_i - q_k‖, eps)³`
///
/// Swapping the roles of `k` and `i` negates the result exactly: the
/// displacement flips sign, the norm and the mass product are symmetric.
pub fn pair_gradient<const D: usize>(
    q_k: &Vector<D>,
    q_i: &Vector<D>,
    m_k: f64,
    m_i: f64,
    g: f64,
    eps: f64,
) -> Vector<D> {
    // r points from k to i, k is pulled along +r
    let r = q_i - q_k;
    let d = softened_distance(&r, eps);
    let coef = g * (m_k * m_i) / (d * d * d);
    r * -coef
}

/// `max(‖r‖, eps)`; with `eps = 0` this is the plain Euclidean norm
pub fn softened_distance<const D: usize>(r: &Vector<D>, eps: f64) -> f64 {
    r.norm().max(eps)
}

/// `Hp`: velocity `p[k] / m[k]` of every body
pub fn grad_p<const D: usize>(p: &[Vector<D>], m: &[f64], out: &mut [Vector<D>]) {
    for ((o, p), m) in out.iter_mut().zip(p).zip(m) {
        *o = p / *m;
    }
}

/// Both Hamiltonian gradients `(dH/dq, dH/dp)` for one state
///
/// Allocating convenience around [`NewtonianGravity`] and [`grad_p`] for
/// verification and for callers that drive their own time stepping.
/// `q`, `p` and `m` must describe the same non-empty set of bodies.
pub fn hamiltonian_gradients<const D: usize>(
    q: &[Vector<D>],
    p: &[Vector<D>],
    m: &[f64],
    g: f64,
    eps: f64,
) -> Result<(Vec<Vector<D>>, Vec<Vector<D>>), SimError> {
    if q.len() != p.len() || q.len() != m.len() {
        return Err(SimError::ShapeMismatch {
            positions: q.len(),
            momenta: p.len(),
            masses: m.len(),
        });
    }
    if q.is_empty() {
        return Err(SimError::NoBodies);
    }

    let mut dq = vec![Vector::<D>::zeros(); q.len()];
    let mut dp = vec![Vector::<D>::zeros(); p.len()];
    NewtonianGravity::new(g, eps).grad_q(q, m, &mut dq);
    grad_p(p, m, &mut dp);
    Ok((dq, dp))
}
