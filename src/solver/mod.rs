//! Iterative relaxation solvers for the discrete Laplace equation.
//! Every solver repeats sweeps over the interior of a mesh until a
//! sweep changes no value by more than the tolerance, and returns
//! how many iterations that took. Boundary values are never written.

pub mod convergence;
pub mod jacobi;
pub mod natural;
pub mod red_black;

pub use convergence::*;
pub use jacobi::*;
pub use natural::*;
pub use red_black::*;

use crate::domain::Mesh;
use crate::report::SweepReporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Method {
    /// Synchronous full mesh update.
    Jacobi,
    /// Gauss-Seidel, row-major in place update.
    Natural,
    /// Gauss-Seidel, checkerboard ordered in place update.
    RedBlack,
}

impl Method {
    pub const ALL: [Method; 3] =
        [Method::Jacobi, Method::Natural, Method::RedBlack];

    /// Run the solver to convergence, returns its iteration count.
    pub fn solve<R: SweepReporter + ?Sized>(
        &self,
        mesh: &mut Mesh,
        params: &SolverParameters,
        reporter: &mut R,
    ) -> usize {
        match self {
            Method::Jacobi => jacobi(mesh, params, reporter),
            Method::Natural => natural(mesh, params, reporter),
            Method::RedBlack => red_black(mesh, params, reporter),
        }
    }

    /// Name used in the final report.
    pub fn description(&self) -> &'static str {
        match self {
            Method::Jacobi => "Jacobi",
            Method::Natural => "Gauss-Seidel natural index",
            Method::RedBlack => "Gauss-Seidel redblack",
        }
    }
}
