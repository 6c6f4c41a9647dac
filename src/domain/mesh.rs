use crate::error::*;
use crate::util::*;

/// Smallest accepted mesh size.
pub const MIN_SIZE: usize = 2;

/// Square mesh of `size` x `size` values, stored row-major.
/// Row `i` and column `j` address the value at `i * size + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    size: usize,
    buffer: Vec<f64>,
}

impl Mesh {
    /// All zero mesh.
    pub fn new(size: usize) -> Result<Self> {
        let size = Self::validate_size(size)?;
        Ok(Mesh {
            size,
            buffer: vec![0.0; real_buffer_size(size)],
        })
    }

    /// Mesh with the fixed edge pattern already applied.
    pub fn with_fixed_edges(size: usize) -> Result<Self> {
        let mut result = Self::new(size)?;
        super::EdgeCheck.init(&mut result);
        Ok(result)
    }

    pub fn validate_size(size: usize) -> Result<usize> {
        if size < MIN_SIZE {
            return Err(RelaxError::TooSmall {
                size,
                minimum: MIN_SIZE,
            });
        }
        Ok(size)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let start = coord_to_linear(self.size, i, 0);
        &self.buffer[start..start + self.size]
    }

    #[track_caller]
    pub fn view(&self, i: usize, j: usize) -> f64 {
        debug_assert!(
            i < self.size && j < self.size,
            "({i}, {j}) outside of {0} x {0} mesh",
            self.size
        );
        self.buffer[coord_to_linear(self.size, i, j)]
    }

    #[track_caller]
    pub fn set_coord(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(
            i < self.size && j < self.size,
            "({i}, {j}) outside of {0} x {0} mesh",
            self.size
        );
        let index = coord_to_linear(self.size, i, j);
        self.buffer[index] = value;
    }

    pub fn is_interior(&self, i: usize, j: usize) -> bool {
        is_interior(self.size, i, j)
    }

    /// Every coordinate paired with its value, row-major.
    pub fn coord_iter(&self) -> impl Iterator<Item = (Coord, f64)> + '_ {
        let size = self.size;
        self.buffer
            .iter()
            .enumerate()
            .map(move |(l, v)| (linear_to_coord(size, l), *v))
    }

    pub fn set_values<F: FnMut(Coord) -> f64>(&mut self, mut f: F) {
        let size = self.size;
        for (l, value_mut) in self.buffer.iter_mut().enumerate() {
            *value_mut = f(linear_to_coord(size, l));
        }
    }

    /// True when both meshes hold identical boundary values.
    pub fn boundary_matches(&self, other: &Mesh) -> bool {
        self.size == other.size
            && self
                .coord_iter()
                .zip(other.buffer.iter())
                .all(|(((i, j), a), b)| self.is_interior(i, j) || a == *b)
    }

    /// Largest absolute difference between two meshes of the same size.
    pub fn max_abs_diff(&self, other: &Mesh) -> f64 {
        debug_assert_eq!(self.size, other.size);
        self.buffer
            .iter()
            .zip(other.buffer.iter())
            .fold(0.0, |acc: f64, (a, b)| acc.max((a - b).abs()))
    }
}
