use crate::domain::*;
use crate::error::*;
use crate::report::SweepReporter;

/// Default convergence tolerance.
pub const EPSILON: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverParameters {
    pub epsilon: f64,
}

impl SolverParameters {
    pub fn new(epsilon: f64) -> Result<Self> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(RelaxError::InvalidEpsilon(epsilon));
        }
        Ok(SolverParameters { epsilon })
    }
}

impl Default for SolverParameters {
    fn default() -> Self {
        SolverParameters { epsilon: EPSILON }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    Sweeping,
    Converged,
}

impl Convergence {
    /// State after a sweep that changed no interior cell by more than `delta`.
    pub fn after(delta: f64, epsilon: f64) -> Self {
        if delta > epsilon {
            Convergence::Sweeping
        } else {
            Convergence::Converged
        }
    }
}

/// Run `sweep` until a sweep's delta drops to `params.epsilon`.
/// At least one sweep always runs.
/// `sweep` receives the number of sweeps already completed
/// and returns its delta.
/// Returns the number of sweeps performed.
pub fn relax<R, F>(
    name: &str,
    mesh: &mut Mesh,
    params: &SolverParameters,
    reporter: &mut R,
    mut sweep: F,
) -> usize
where
    R: SweepReporter + ?Sized,
    F: FnMut(&mut Mesh, usize) -> f64,
{
    #[cfg(debug_assertions)]
    let initial = mesh.clone();
    let mut count = 0;
    let mut state = Convergence::Sweeping;
    while state == Convergence::Sweeping {
        profiling::scope!("sweep");
        let delta = sweep(mesh, count);
        count += 1;
        log::trace!("{name}: sweep {count}, delta={delta}");
        reporter.sweep(count, delta, mesh);
        state = Convergence::after(delta, params.epsilon);
    }
    #[cfg(debug_assertions)]
    debug_assert!(
        mesh.boundary_matches(&initial),
        "{name} modified a boundary cell"
    );
    log::debug!(
        "{name}: converged after {count} sweeps on {0} x {0} mesh",
        mesh.size()
    );
    count
}
