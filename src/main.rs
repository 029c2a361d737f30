use anyhow::{Context, Result};
use heat_grid::cli::Args;
use heat_grid::input::{LoadError, Problem};
use heat_grid::output::*;
use heat_grid::solver::solve_with;
use heat_grid::stencil::standard_stencils::heat_eqn;
use std::io::Write;

fn main() -> Result<()> {
    let args = Args::cli_setup("heat_grid");
    let input = args
        .input
        .as_ref()
        .context("an input file is required, see --help")?;

    let problem = Problem::load(input)
        .with_context(|| format!("error while reading {}", input.display()))?;
    let grid = problem.initial_grid()?;
    let sources = problem.source_set()?;
    log::info!(
        "loaded {} grid with {} sources from {}",
        problem.bounds(),
        sources.len(),
        input.display()
    );

    let config = *problem.config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut print_error = None;
    let (grid, report) = solve_with(
        grid,
        sources,
        config,
        heat_eqn(),
        |iteration, delta, grid| {
            if print_error.is_some() || !args.prints_at(iteration, delta, &config)
            {
                return;
            }
            let result = writeln!(out, "iteration {iteration}, heat difference {delta}")
                .and_then(|_| write_grid(grid, &mut out));
            if let Err(e) = result {
                print_error = Some(e);
            }
        },
    )
    .map_err(LoadError::from)?;
    if let Some(e) = print_error {
        return Err(e).context("printing intermediate grid");
    }

    write_grid(&grid, &mut out).context("printing grid")?;
    writeln!(out, "heat difference: {}", report.delta)?;
    out.flush()?;

    if let Some(path) = &args.csv {
        write_csv(&grid, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = &args.image {
        write_image(&grid, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
