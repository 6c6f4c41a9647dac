use laplace_relax::domain::*;
use laplace_relax::report::*;
use laplace_relax::solver::*;

use float_cmp::assert_approx_eq;
use rand::prelude::*;

fn solve(
    method: Method,
    size: usize,
    params: &SolverParameters,
) -> (Mesh, usize, usize) {
    let mut mesh = Mesh::with_fixed_edges(size).unwrap();
    let mut history = DeltaHistory::new();
    let count = method.solve(&mut mesh, params, &mut history);
    (mesh, count, history.sweeps())
}

#[test]
fn boundary_is_preserved() {
    let params = SolverParameters::default();
    for size in 3..=32 {
        for method in Method::ALL {
            let (mesh, count, _) = solve(method, size, &params);
            assert!(count >= 1, "{method:?} on {size}");
            assert!(EdgeCheck.holds(&mesh), "{method:?} on {size}");
        }
    }
}

#[test]
fn final_delta_is_within_tolerance() {
    let params = SolverParameters::default();
    for size in [3, 4, 7, 8, 15, 32] {
        for method in Method::ALL {
            let mut mesh = Mesh::with_fixed_edges(size).unwrap();
            let mut history = DeltaHistory::new();
            method.solve(&mut mesh, &params, &mut history);
            let last = history.last().unwrap();
            assert!(last <= params.epsilon, "{method:?} on {size}");
            for delta in &history.deltas[..history.sweeps() - 1] {
                assert!(*delta > params.epsilon, "{method:?} on {size}");
            }
        }
    }
}

#[test]
fn solvers_agree() {
    let params = SolverParameters::default();
    for size in 4..=12 {
        let (jacobi, _, _) = solve(Method::Jacobi, size, &params);
        let (natural, _, _) = solve(Method::Natural, size, &params);
        let (red_black, _, _) = solve(Method::RedBlack, size, &params);
        let tolerance = 20.0 * params.epsilon;
        assert!(jacobi.max_abs_diff(&natural) < tolerance, "size {size}");
        assert!(jacobi.max_abs_diff(&red_black) < tolerance, "size {size}");
        assert!(natural.max_abs_diff(&red_black) < tolerance, "size {size}");
    }
}

#[test]
fn mesh_8x8() {
    let params = SolverParameters::default();
    let (jacobi, jacobi_count, jacobi_sweeps) =
        solve(Method::Jacobi, 8, &params);
    let (natural, natural_count, natural_sweeps) =
        solve(Method::Natural, 8, &params);
    let (red_black, red_black_count, red_black_sweeps) =
        solve(Method::RedBlack, 8, &params);

    assert_eq!(jacobi_count, 43);
    assert_eq!(jacobi_sweeps, 43);
    assert_eq!(natural_count, 27);
    assert_eq!(natural_sweeps, 27);
    assert_eq!(red_black_sweeps, 50);
    assert_eq!(red_black_count, 25);

    assert!(natural_sweeps < jacobi_sweeps);
    assert!(red_black_count < jacobi_count);
    assert_eq!(red_black_count, logical_iterations(red_black_sweeps));

    let tolerance = 10.0 * params.epsilon;
    assert!(jacobi.max_abs_diff(&natural) < tolerance);
    assert!(jacobi.max_abs_diff(&red_black) < tolerance);
    assert!(natural.max_abs_diff(&red_black) < tolerance);

    // Symmetric about the anti-diagonal, the hot edges mirror each other.
    for mesh in [&jacobi, &natural, &red_black] {
        assert_approx_eq!(f64, mesh.view(1, 1), 0.044, epsilon = 0.002);
    }
    assert_approx_eq!(
        f64,
        jacobi.view(2, 5),
        jacobi.view(5, 2),
        epsilon = 0.000001
    );
}

#[test]
fn converged_mesh_takes_one_more_sweep() {
    let params = SolverParameters::default();
    for size in [3, 4, 5, 8, 12, 20] {
        for method in Method::ALL {
            let (mut mesh, _, _) = solve(method, size, &params);
            let mut history = DeltaHistory::new();
            let count = method.solve(&mut mesh, &params, &mut history);
            assert_eq!(count, 1, "{method:?} on {size}");
            assert_eq!(history.sweeps(), 1, "{method:?} on {size}");
            assert!(history.deltas[0] <= params.epsilon);
        }
    }
}

#[test]
fn random_interior_converges() {
    let mut rng = StdRng::seed_from_u64(0x1ace);
    let params = SolverParameters::default();
    for size in [4, 6, 9] {
        let (reference, _, _) = solve(Method::Natural, size, &params);
        for method in Method::ALL {
            let mut mesh = Mesh::with_fixed_edges(size).unwrap();
            mesh.set_values(|(i, j)| match EdgeCheck.check(size, i, j) {
                Some(e) => e,
                None => rng.gen::<f64>(),
            });
            let count = method.solve(&mut mesh, &params, &mut Silent);
            assert!(count >= 1);
            assert!(EdgeCheck.holds(&mesh), "{method:?} on {size}");
            assert!(
                mesh.max_abs_diff(&reference) < 20.0 * params.epsilon,
                "{method:?} on {size}"
            );
        }
    }
}

#[test]
fn looser_tolerance_needs_fewer_sweeps() {
    let tight = SolverParameters::default();
    let loose = SolverParameters::new(0.01).unwrap();
    for method in Method::ALL {
        let (_, tight_count, _) = solve(method, 10, &tight);
        let (_, loose_count, _) = solve(method, 10, &loose);
        assert!(loose_count < tight_count, "{method:?}");
    }
}
