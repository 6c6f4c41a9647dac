pub mod indexing;

pub use indexing::*;

/// Row, column pair into a square mesh.
pub type Coord = (usize, usize);
