/// Control parameters for a solve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverConfig {
    /// Stop once a sweep's heat difference drops below this value.
    /// Only consulted when `max_iterations` is zero.
    pub terminate: f64,

    /// Exact number of sweeps to run, zero means run until convergence.
    pub max_iterations: usize,

    /// Wrap neighbor lookups around the grid edges.
    pub cyclic: bool,
}

impl SolverConfig {
    pub fn converge(terminate: f64, cyclic: bool) -> Self {
        SolverConfig {
            terminate,
            max_iterations: 0,
            cyclic,
        }
    }

    pub fn fixed(max_iterations: usize, cyclic: bool) -> Self {
        SolverConfig {
            terminate: 0.0,
            max_iterations,
            cyclic,
        }
    }

    /// Whether the loop should keep going after a sweep with this `delta`.
    /// The boundary is `delta >= terminate`, we stop strictly below it.
    #[inline]
    pub fn keep_going(&self, iterations: usize, delta: f64) -> bool {
        if self.max_iterations > 0 {
            iterations < self.max_iterations
        } else {
            delta >= self.terminate
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// Heat difference fell below `terminate`.
    Converged,
    /// Ran the fixed `max_iterations` budget.
    Exhausted,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolveReport {
    /// Heat difference of the final sweep.
    pub delta: f64,
    pub iterations: usize,
    pub status: SolveStatus,
}
