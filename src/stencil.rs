//! The five point Laplace stencil shared by every solver.

/// Neighbour offsets (row, column) in the order they are summed:
/// north, west, south, east.
pub const OFFSETS: [[i32; 2]; 4] = [[-1, 0], [0, -1], [1, 0], [0, 1]];

/// Mean of the four axis neighbours of interior cell `(i, j)`
/// in a row-major `size` x `size` buffer.
#[inline]
pub fn laplace_5pt(buffer: &[f64], size: usize, i: usize, j: usize) -> f64 {
    debug_assert!(i > 0 && j > 0 && i + 1 < size && j + 1 < size);
    let c = i * size + j;
    (buffer[c - size] + buffer[c - 1] + buffer[c + size] + buffer[c + 1])
        / 4.0
}
