use std::time::Instant;

use crate::simulation::forces::{NewtonianGravity, PotentialGradient};
use crate::simulation::integrator::{stormer_verlet_step, Scratch};
use crate::simulation::states::{NVec3, State};

/// Helper to build a deterministic cloud of `n` unit masses, no rand needed
fn make_cloud(n: usize) -> (State<3>, Vec<f64>) {
    let q = (0..n)
        .map(|i| {
            let i_f = i as f64;
            NVec3::new(
                (i_f * 0.37).sin() * 5.0,
                (i_f * 0.13).cos() * 5.0,
                (i_f * 0.07).sin() * 5.0,
            )
        })
        .collect();
    let p = vec![NVec3::zeros(); n];
    (State::new(q, p), vec![1.0; n])
}

/// Time one direct O(N²) gradient evaluation for several system sizes
pub fn bench_gravity() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let gravity = NewtonianGravity::new(0.1, 1e-2);

    for n in ns {
        let (state, masses) = make_cloud(n);
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.grad_q(&state.q, &masses, &mut out);

        let t0 = Instant::now();
        gravity.grad_q(&state.q, &masses, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gradient = {:8.6} s", dt_direct);
    }
}

/// Time Störmer–Verlet steps over a range of N
/// Paste output directly into a spreadsheet to graph
pub fn bench_verlet_curve() {
    println!("N,step_ms");

    let gravity = NewtonianGravity::new(0.1, 1e-2);

    for n in (50..=1000).step_by(50) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 400 { 10 } else { 2 };

        let (mut state, masses) = make_cloud(n);
        let mut scratch = Scratch::new(n);

        let t0 = Instant::now();
        for _ in 0..steps {
            stormer_verlet_step(&gravity, &masses, 1e-3, &mut state, &mut scratch);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
