//! Vapor-liquid phase split calculations.

use ndarray::Array1;
use std::fmt;

mod bubble_dew;
mod tp_flash;
pub use bubble_dew::{bubble_point_pressure, dew_point_pressure, wilson_k};

/// Level of detail in the iteration output.
#[derive(Copy, Clone, Default, PartialOrd, PartialEq, Eq)]
pub enum Verbosity {
    /// Do not print output.
    #[default]
    None,
    /// Print information about the success or failure of the iteration.
    Result,
    /// Print a detailed output for every iteration.
    Iter,
}

/// Options for the flash solver.
///
/// If the values are [None], solver specific default values are used.
#[derive(Copy, Clone, Default)]
pub struct SolverOptions {
    /// Maximum number of outer iterations.
    pub max_iter: Option<usize>,
    /// Tolerance.
    pub tol: Option<f64>,
    /// Iteration output indicated by the [Verbosity] enum.
    pub verbosity: Verbosity,
}

impl SolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    pub fn tol(mut self, tol: f64) -> Self {
        self.tol = Some(tol);
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn unwrap_or(self, max_iter: usize, tol: f64) -> (usize, f64, Verbosity) {
        (
            self.max_iter.unwrap_or(max_iter),
            self.tol.unwrap_or(tol),
            self.verbosity,
        )
    }
}

/// Result of a Tp flash calculation.
#[derive(Debug, Clone)]
pub struct PhaseSplit {
    /// Molar fraction of the feed that ends up in the vapor phase.
    pub vapor_fraction: f64,
    /// Mole fractions of the liquid phase.
    pub liquid: Array1<f64>,
    /// Mole fractions of the vapor phase.
    pub vapor: Array1<f64>,
    /// Whether the K value iteration met its tolerance. If `false` the
    /// fields hold the last iterate of an exhausted iteration budget.
    pub converged: bool,
    /// Number of outer iterations performed.
    pub iterations: usize,
}

impl fmt::Display for PhaseSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vapor fraction: {}", self.vapor_fraction)?;
        writeln!(f, "liquid: {}", self.liquid)?;
        writeln!(f, "vapor:  {}", self.vapor)?;
        write!(
            f,
            "{} after {} iteration(s)",
            if self.converged {
                "converged"
            } else {
                "not converged"
            },
            self.iterations
        )
    }
}
