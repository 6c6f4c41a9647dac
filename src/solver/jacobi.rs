use crate::domain::*;
use crate::report::SweepReporter;
use crate::solver::convergence::*;
use crate::stencil::laplace_5pt;
use crate::util::coord_to_linear;

/// One synchronous sweep, every interior value of `output` is computed
/// from `input` alone. Boundary values of `output` are left untouched.
/// Returns the largest change.
pub fn jacobi_sweep(input: &Mesh, output: &mut Mesh) -> f64 {
    debug_assert_eq!(input.size(), output.size());
    let size = input.size();
    let x = input.buffer();
    let x_new = output.buffer_mut();
    let mut delta: f64 = 0.0;
    for i in 1..size - 1 {
        for j in 1..size - 1 {
            let c = coord_to_linear(size, i, j);
            x_new[c] = laplace_5pt(x, size, i, j);
            delta = delta.max((x_new[c] - x[c]).abs());
        }
    }
    delta
}

/// Jacobi iteration, returns the number of sweeps.
pub fn jacobi<R: SweepReporter + ?Sized>(
    mesh: &mut Mesh,
    params: &SolverParameters,
    reporter: &mut R,
) -> usize {
    profiling::scope!("jacobi");
    // Same boundary as mesh, so swapping commits the whole sweep at once.
    let mut scratch = mesh.clone();
    relax("jacobi", mesh, params, reporter, |x, _| {
        let delta = jacobi_sweep(x, &mut scratch);
        std::mem::swap(x, &mut scratch);
        delta
    })
}
