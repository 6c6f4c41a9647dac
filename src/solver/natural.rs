use crate::domain::*;
use crate::report::SweepReporter;
use crate::solver::convergence::*;
use crate::stencil::laplace_5pt;
use crate::util::coord_to_linear;

/// One in place sweep in row-major order. North and west neighbours
/// already hold this sweep's values when a cell is updated.
/// Returns the largest change.
pub fn natural_sweep(mesh: &mut Mesh) -> f64 {
    let size = mesh.size();
    let x = mesh.buffer_mut();
    let mut delta: f64 = 0.0;
    for i in 1..size - 1 {
        for j in 1..size - 1 {
            let c = coord_to_linear(size, i, j);
            let old_x = x[c];
            let new_x = laplace_5pt(x, size, i, j);
            x[c] = new_x;
            delta = delta.max((new_x - old_x).abs());
        }
    }
    delta
}

/// Gauss-Seidel with natural ordering, returns the number of sweeps.
pub fn natural<R: SweepReporter + ?Sized>(
    mesh: &mut Mesh,
    params: &SolverParameters,
    reporter: &mut R,
) -> usize {
    profiling::scope!("gauss_seidel_natural");
    relax("natural", mesh, params, reporter, |x, _| natural_sweep(x))
}
