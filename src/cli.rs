use crate::build_info;
use crate::domain::Mesh;
use crate::solver::*;
use clap::Parser;

/// Mesh size used when none, or an invalid one, is given.
pub const DEFAULT_SIZE: usize = 8;

/// Compare Jacobi and Gauss-Seidel relaxation on the Laplace equation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Mesh size, the mesh is SIZE x SIZE.
    /// Values below 2 fall back to the default.
    #[arg(default_value_t = DEFAULT_SIZE as i64, allow_negative_numbers = true)]
    pub size: i64,

    /// Convergence tolerance.
    #[arg(short, long, default_value_t = EPSILON)]
    pub epsilon: f64,

    /// Print every sweep and the final meshes.
    #[arg(short, long)]
    pub verbose: bool,

    /// Solvers to run, in order. Defaults to all of them.
    #[arg(short, long, value_enum)]
    pub method: Vec<Method>,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info"),
        )
        .init();

        args
    }

    /// Requested size, or `DEFAULT_SIZE` with a warning if it is unusable.
    pub fn mesh_size(&self) -> usize {
        let size = usize::try_from(self.size).unwrap_or(0);
        match Mesh::validate_size(size) {
            Ok(size) => size,
            Err(e) => {
                log::warn!("{e}, using default {DEFAULT_SIZE}");
                DEFAULT_SIZE
            }
        }
    }

    /// Requested tolerance, or `EPSILON` with a warning if it is unusable.
    pub fn solver_parameters(&self) -> SolverParameters {
        SolverParameters::new(self.epsilon).unwrap_or_else(|e| {
            log::warn!("{e}, using default {EPSILON}");
            SolverParameters::default()
        })
    }

    pub fn methods(&self) -> Vec<Method> {
        if self.method.is_empty() {
            Method::ALL.to_vec()
        } else {
            self.method.clone()
        }
    }
}

/// Serve profiling data for `puffin_viewer`, keep the result alive
/// for as long as data should be served.
#[cfg(feature = "profile-with-puffin")]
pub fn puffin_server() -> Option<puffin_http::Server> {
    let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&server_addr) {
        Ok(server) => {
            log::info!(
                "Run this to view profiling data:  puffin_viewer {server_addr}"
            );
            profiling::puffin::set_scopes_on(true);
            Some(server)
        }
        Err(e) => {
            log::error!("could not start profiling server: {e}");
            None
        }
    }
}
