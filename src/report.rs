//! Per sweep reporting.
//! Solvers hand every completed sweep to a `SweepReporter`,
//! so verbose output is a choice of sink rather than a global switch.

use crate::domain::*;
use std::io::prelude::*;

pub trait SweepReporter {
    /// Called after sweep number `count` (1 based) with its `delta`.
    fn sweep(&mut self, count: usize, delta: f64, mesh: &Mesh);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SweepReporter for Silent {
    fn sweep(&mut self, _count: usize, _delta: f64, _mesh: &Mesh) {}
}

/// Verbose console output, the sweep header followed by a mesh dump.
pub struct ConsoleReporter<W: Write> {
    output: W,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleReporter {
            output: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(output: W) -> Self {
        ConsoleReporter { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn write_sweep(
        &mut self,
        count: usize,
        delta: f64,
        mesh: &Mesh,
    ) -> std::io::Result<()> {
        writeln!(self.output, "Iter {count}: (delta={delta:6.4})")?;
        write_mesh(&mut self.output, mesh)
    }
}

impl<W: Write> SweepReporter for ConsoleReporter<W> {
    fn sweep(&mut self, count: usize, delta: f64, mesh: &Mesh) {
        if let Err(e) = self.write_sweep(count, delta, mesh) {
            log::error!("failed to write sweep {count}: {e}");
        }
    }
}

/// Records every delta, mostly useful for inspecting convergence.
#[derive(Debug, Default, Clone)]
pub struct DeltaHistory {
    pub deltas: Vec<f64>,
}

impl DeltaHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw sweeps seen so far.
    pub fn sweeps(&self) -> usize {
        self.deltas.len()
    }

    pub fn last(&self) -> Option<f64> {
        self.deltas.last().copied()
    }
}

impl SweepReporter for DeltaHistory {
    fn sweep(&mut self, count: usize, delta: f64, _mesh: &Mesh) {
        debug_assert_eq!(count, self.deltas.len() + 1);
        self.deltas.push(delta);
    }
}

/// Final line for one solver run.
pub fn summary(
    size: usize,
    epsilon: f64,
    description: &str,
    iterations: usize,
) -> String {
    format!(
        "Mesh size: {size} x {size}, epsilon={epsilon:6.4}, total {description} iterations: {iterations}"
    )
}
