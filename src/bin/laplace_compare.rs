use laplace_relax::cli::Args;
use laplace_relax::domain::*;
use laplace_relax::error::Result;
use laplace_relax::report::*;

fn main() -> Result<()> {
    let args = Args::cli_setup("laplace_compare");

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = laplace_relax::cli::puffin_server();

    let size = args.mesh_size();
    let params = args.solver_parameters();
    let methods = args.methods();
    log::info!(
        "relaxing {size} x {size} mesh, epsilon={}, methods: {methods:?}",
        params.epsilon
    );

    // Identical starting state for every solver.
    let mut meshes = methods
        .iter()
        .map(|_| Mesh::with_fixed_edges(size))
        .collect::<Result<Vec<_>>>()?;

    let mut counts = Vec::with_capacity(methods.len());
    for (method, mesh) in methods.iter().zip(meshes.iter_mut()) {
        let count = if args.verbose {
            method.solve(mesh, &params, &mut ConsoleReporter::stdout())
        } else {
            method.solve(mesh, &params, &mut Silent)
        };
        profiling::finish_frame!();
        counts.push(count);
    }

    for (n, ((method, mesh), count)) in
        methods.iter().zip(meshes.iter()).zip(counts).enumerate()
    {
        if n > 0 {
            println!("\n");
        }
        println!(
            "{}",
            summary(size, params.epsilon, method.description(), count)
        );
        if args.verbose {
            print!("{mesh}");
        }
    }

    Ok(())
}
