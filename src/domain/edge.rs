use crate::domain::Mesh;

/// Value held by the hot edges, the last row and the last column.
pub const EDGE_VALUE: f64 = 1.0;

/// The fixed boundary pattern.
/// Every cell starts at zero, then the last row and last column
/// are set to `EDGE_VALUE` excluding the four corners.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeCheck;

impl EdgeCheck {
    /// Fixed value of a boundary cell, `None` for interior cells.
    pub fn check(&self, size: usize, i: usize, j: usize) -> Option<f64> {
        debug_assert!(i < size && j < size);
        let last = size - 1;
        if i > 0 && i < last && j > 0 && j < last {
            return None;
        }
        let on_corner = (i == 0 || i == last) && (j == 0 || j == last);
        if !on_corner && (i == last || j == last) {
            Some(EDGE_VALUE)
        } else {
            Some(0.0)
        }
    }

    /// Overwrite the whole mesh with the initial state.
    pub fn init(&self, mesh: &mut Mesh) {
        let size = mesh.size();
        mesh.buffer_mut().fill(0.0);
        for k in 1..size - 1 {
            mesh.set_coord(size - 1, k, EDGE_VALUE);
            mesh.set_coord(k, size - 1, EDGE_VALUE);
        }
    }

    /// True when every boundary cell holds its fixed value exactly.
    pub fn holds(&self, mesh: &Mesh) -> bool {
        let size = mesh.size();
        mesh.coord_iter().all(|((i, j), v)| match self.check(size, i, j) {
            Some(e) => v == e,
            None => true,
        })
    }
}
