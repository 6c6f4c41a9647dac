use crate::domain::*;
use crate::report::SweepReporter;
use crate::solver::convergence::*;
use crate::stencil::laplace_5pt;
use crate::util::coord_to_linear;

/// First column visited in row `i` during raw sweep `count`.
/// Consecutive sweeps alternate between the two colours.
#[inline]
pub fn red_black_start(i: usize, count: usize) -> usize {
    1 + (i + count) % 2
}

/// Two raw sweeps, one per colour, make a logical iteration.
pub fn logical_iterations(raw_sweeps: usize) -> usize {
    raw_sweeps / 2 + raw_sweeps % 2
}

/// One raw sweep over a single colour, in place.
/// Every neighbour of an updated cell has the other colour,
/// so the updates within a sweep do not depend on each other.
/// Returns the largest change.
pub fn red_black_sweep(mesh: &mut Mesh, count: usize) -> f64 {
    let size = mesh.size();
    let x = mesh.buffer_mut();
    let mut delta: f64 = 0.0;
    for i in 1..size - 1 {
        for j in (red_black_start(i, count)..size - 1).step_by(2) {
            let c = coord_to_linear(size, i, j);
            let old_x = x[c];
            let new_x = laplace_5pt(x, size, i, j);
            x[c] = new_x;
            delta = delta.max((new_x - old_x).abs());
        }
    }
    delta
}

/// Gauss-Seidel with red-black ordering.
/// Convergence is tested after every raw sweep, the returned count
/// is in logical iterations.
pub fn red_black<R: SweepReporter + ?Sized>(
    mesh: &mut Mesh,
    params: &SolverParameters,
    reporter: &mut R,
) -> usize {
    profiling::scope!("gauss_seidel_red_black");
    let raw_sweeps = relax("red_black", mesh, params, reporter, red_black_sweep);
    logical_iterations(raw_sweeps)
}
