//! The mesh the solvers relax, its fixed edge pattern,
//! and the text dump used for verbose reporting.
//! Coordinates are `(i, j)` = (row, column) with `(0, 0)` top left.

mod edge;
mod mesh;
mod mesh_io;

pub use edge::*;
pub use mesh::*;
pub use mesh_io::*;
