//! u-aco CLI: run the Ant System on a bundled instance.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use u_aco::aco::{AcoRunner, ConsoleReporter, SelectionFallback};
use u_aco::instances::ProblemInstance;

#[derive(Parser)]
#[command(name = "u-aco")]
#[command(about = "Ant Colony Optimization for the symmetric TSP")]
#[command(version)]
struct Cli {
    /// Bundled instance: `five` or `twenty-four`
    #[arg(default_value = "twenty-four")]
    instance: String,

    /// Ants per iteration (overrides the instance default)
    #[arg(short, long)]
    ants: Option<usize>,

    /// Number of iterations (overrides the instance default)
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Trail exponent
    #[arg(long)]
    alpha: Option<f64>,

    /// Distance exponent
    #[arg(long)]
    beta: Option<f64>,

    /// Evaporation rate in [0, 1)
    #[arg(long)]
    evaporation: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Policy when roulette selection cannot resolve a city
    #[arg(long, value_enum, default_value_t = Fallback::Uniform)]
    fallback: Fallback,

    /// Construct tours in parallel
    #[arg(long)]
    parallel: bool,

    /// Print one summary line per iteration instead of every ant
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Fallback {
    Uniform,
    LastUnvisited,
    Fail,
}

impl From<Fallback> for SelectionFallback {
    fn from(f: Fallback) -> Self {
        match f {
            Fallback::Uniform => SelectionFallback::Uniform,
            Fallback::LastUnvisited => SelectionFallback::LastUnvisited,
            Fallback::Fail => SelectionFallback::Fail,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(instance) = ProblemInstance::by_name(&cli.instance) else {
        eprintln!("unknown instance '{}': expected five or twenty-four", cli.instance);
        return ExitCode::FAILURE;
    };

    let mut config = instance
        .config
        .clone()
        .with_selection_fallback(cli.fallback.into())
        .with_parallel(cli.parallel);
    if let Some(n) = cli.ants {
        config = config.with_num_ants(n);
    }
    if let Some(n) = cli.iterations {
        config = config.with_iterations(n);
    }
    if let Some(a) = cli.alpha {
        config = config.with_alpha(a);
    }
    if let Some(b) = cli.beta {
        config = config.with_beta(b);
    }
    if let Some(e) = cli.evaporation {
        config = config.with_evaporation_rate(e);
    }
    if let Some(s) = cli.seed {
        config = config.with_seed(s);
    }

    let mut reporter = ConsoleReporter {
        summary_only: cli.quiet,
    };
    match AcoRunner::run_with_reporter(&instance.distances, &config, &mut reporter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("configuration error: {e}");
            ExitCode::FAILURE
        }
    }
}
