use crate::build_info;
use crate::solver::SolverConfig;
use clap::Parser;
use std::path::PathBuf;

/// Steady state heat diffusion over a 2D grid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Problem description file.
    pub input: Option<PathBuf>,

    /// Also write the final grid as CSV.
    #[arg(short, long)]
    pub csv: Option<PathBuf>,

    /// Also write the final grid as a PNG heat map,
    /// WARNING: we do not check image size, so be reasonable.
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Print the grid every N iterations, 0 prints the final grid only.
    #[arg(short, long, default_value = "0")]
    pub print_every: usize,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    /// Parse the command line and set up logging.
    /// Exits early when only build information was requested.
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn"),
        )
        .init();

        args
    }

    /// Whether the observer should print after `iteration`.
    /// The last sweep is skipped since the final grid is printed anyway.
    pub fn prints_at(
        &self,
        iteration: usize,
        delta: f64,
        config: &SolverConfig,
    ) -> bool {
        self.print_every > 0
            && iteration % self.print_every == 0
            && config.keep_going(iteration, delta)
    }
}
