use crate::domain::Mesh;
use std::io::prelude::*;

/// Write one line per row, each value as `{:8.4} `.
pub fn write_mesh<W: Write>(output: &mut W, mesh: &Mesh) -> std::io::Result<()> {
    for i in 0..mesh.size() {
        for v in mesh.row(i) {
            write!(output, "{v:8.4} ")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

impl std::fmt::Display for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.size() {
            for v in self.row(i) {
                write!(f, "{v:8.4} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
