use crate::util::Coord;

/// Number of cells in a square mesh of `size` x `size`.
pub fn real_buffer_size(size: usize) -> usize {
    size * size
}

/// Row-major linear index of `(i, j)`.
#[inline]
pub fn coord_to_linear(size: usize, i: usize, j: usize) -> usize {
    debug_assert!(i < size && j < size);
    i * size + j
}

pub fn linear_to_coord(size: usize, linear_index: usize) -> Coord {
    debug_assert!(linear_index < real_buffer_size(size));
    (linear_index / size, linear_index % size)
}

/// Interior cells are those not on the outer ring.
#[inline]
pub fn is_interior(size: usize, i: usize, j: usize) -> bool {
    i > 0 && j > 0 && i + 1 < size && j + 1 < size
}
