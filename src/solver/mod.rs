//! Iterative solve: repeated Jacobi sweeps until the heat difference
//! drops below the threshold or the iteration budget runs out.

mod config;
pub mod jacobi;

pub use config::*;
pub use jacobi::{box_apply, sweep};

use crate::domain::*;
use crate::stencil::*;
use std::collections::TryReserveError;

/// Owns the double buffered grid for one run.
pub struct Solver<BC, Rule> {
    bc: BC,
    stencil: Stencil<Rule>,
    sources: SourceSet,
    config: SolverConfig,
    input: Grid<2>,
    output: Grid<2>,
}

impl<BC, Rule> Solver<BC, Rule>
where
    BC: BCCheck<2>,
    Rule: UpdateRule,
{
    /// Sources are pinned into `grid` before the first sweep.
    /// Fails if the second buffer cannot be allocated.
    pub fn new(
        bc: BC,
        stencil: Stencil<Rule>,
        sources: SourceSet,
        config: SolverConfig,
        mut grid: Grid<2>,
    ) -> Result<Self, TryReserveError> {
        debug_assert_eq!(grid.aabb(), sources.aabb());
        sources.pin(&mut grid);
        let mut output = Grid::try_new(*grid.aabb())?;
        output.buffer_mut().copy_from_slice(grid.buffer());
        Ok(Solver {
            bc,
            stencil,
            sources,
            config,
            input: grid,
            output,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Current grid snapshot.
    pub fn grid(&self) -> &Grid<2> {
        &self.input
    }

    pub fn into_grid(self) -> Grid<2> {
        self.input
    }

    /// Run one sweep and return its heat difference.
    pub fn step(&mut self) -> f64 {
        let delta = sweep(
            &self.bc,
            &self.stencil,
            &self.sources,
            &self.input,
            &mut self.output,
        );
        std::mem::swap(&mut self.input, &mut self.output);
        delta
    }

    pub fn run(&mut self) -> SolveReport {
        self.run_with(|_, _, _| {})
    }

    /// Run to completion, calling `observer(iteration, delta, grid)`
    /// after every sweep. Iterations are counted from 1.
    pub fn run_with<F>(&mut self, mut observer: F) -> SolveReport
    where
        F: FnMut(usize, f64, &Grid<2>),
    {
        profiling::scope!("solver::run");
        log::debug!(
            "solving {} grid, {} sources, weights {:?}, {:?}",
            self.input.aabb(),
            self.sources.len(),
            self.stencil.weights(),
            self.config
        );

        let mut iterations = 0;
        let delta = loop {
            let delta = self.step();
            iterations += 1;
            log::trace!("iteration {iterations}: heat difference {delta:e}");
            observer(iterations, delta, &self.input);
            if !self.config.keep_going(iterations, delta) {
                break delta;
            }
        };

        let status = if self.config.max_iterations > 0 {
            SolveStatus::Exhausted
        } else {
            SolveStatus::Converged
        };
        log::info!(
            "{status:?} after {iterations} iterations, heat difference {delta:e}"
        );
        SolveReport {
            delta,
            iterations,
            status,
        }
    }
}

/// Pick the boundary check from `config.cyclic` and run to completion.
/// Returns the final grid with the report.
pub fn solve_with<Rule, F>(
    grid: Grid<2>,
    sources: SourceSet,
    config: SolverConfig,
    stencil: Stencil<Rule>,
    observer: F,
) -> Result<(Grid<2>, SolveReport), TryReserveError>
where
    Rule: UpdateRule,
    F: FnMut(usize, f64, &Grid<2>),
{
    let aabb = *grid.aabb();
    if config.cyclic {
        let bc = PeriodicCheck::new(aabb);
        let mut solver = Solver::new(bc, stencil, sources, config, grid)?;
        let report = solver.run_with(observer);
        Ok((solver.into_grid(), report))
    } else {
        let bc = ConstantCheck::new(0.0, aabb);
        let mut solver = Solver::new(bc, stencil, sources, config, grid)?;
        let report = solver.run_with(observer);
        Ok((solver.into_grid(), report))
    }
}

pub fn solve<Rule: UpdateRule>(
    grid: Grid<2>,
    sources: SourceSet,
    config: SolverConfig,
    stencil: Stencil<Rule>,
) -> Result<(Grid<2>, SolveReport), TryReserveError> {
    solve_with(grid, sources, config, stencil, |_, _, _| {})
}
