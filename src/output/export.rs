//! Plain-text export of trajectories for plotting tools
//!
//! One CSV row per body per exported time index:
//! `step,time,body,label,q0,..,p0,..`

use std::io::{self, Write};

use crate::simulation::states::Trajectory;

/// Write every `stride`-th state of `trajectory` (and always the last one)
/// `labels` may be shorter than the body count; missing labels are left empty
pub fn write_csv<W: Write, const D: usize>(
    mut out: W,
    trajectory: &Trajectory<D>,
    labels: &[String],
    stride: usize,
) -> io::Result<()> {
    let stride = stride.max(1);

    // header
    write!(out, "step,time,body,label")?;
    for axis in 0..D {
        write!(out, ",q{axis}")?;
    }
    for axis in 0..D {
        write!(out, ",p{axis}")?;
    }
    writeln!(out)?;

    let last = trajectory.len().saturating_sub(1);
    for t in (0..trajectory.len()).filter(|t| t % stride == 0 || *t == last) {
        let time = trajectory.time(t);
        let q = trajectory.positions(t);
        let p = trajectory.momenta(t);
        for body in 0..trajectory.bodies() {
            let label = labels.get(body).map(String::as_str).unwrap_or("");
            write!(out, "{t},{time},{body},{label}")?;
            for c in q[body].iter().chain(p[body].iter()) {
                write!(out, ",{c}")?;
            }
            writeln!(out)?;
        }
    }
    out.flush()
}
