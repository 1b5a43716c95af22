//! XIRR command-line interface
//!
//! Reads `when,amount` rows from a CSV file (or stdin) and prints the
//! annualized rate. Solver defaults come from the environment
//! (XIRR_TOLERANCE, XIRR_MAX_ITERATIONS, XIRR_INITIAL_GUESS) and can be
//! overridden with flags.

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, Read};
use xirr_engine::cashflow::load_transactions_from_reader;
use xirr_engine::{SolverConfig, XirrCalculator, XirrReport};

#[derive(Parser, Debug)]
#[command(name = "xirr", version, about = "Annualized internal rate of return for dated cash flows")]
struct Cli {
    /// CSV file with a `when,amount` header (stdin if omitted)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Starting guess for the annual rate
    #[arg(short = 'g', long = "guess")]
    guess: Option<f64>,

    /// Convergence tolerance on successive guesses
    #[arg(long = "tolerance")]
    tolerance: Option<f64>,

    /// Iteration cap
    #[arg(long = "max-iterations")]
    max_iterations: Option<usize>,

    /// Emit the full report as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(File::open(path).with_context(|| format!("opening {path}"))?),
        None => Box::new(io::stdin()),
    };
    let transactions = load_transactions_from_reader(reader).context("reading transactions")?;

    let mut config = SolverConfig::from_env();
    if let Some(tolerance) = cli.tolerance {
        config = config.with_tolerance(tolerance);
    }
    if let Some(max_iterations) = cli.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }
    if let Some(guess) = cli.guess {
        config = config.with_initial_guess(guess);
    }

    let calculator = XirrCalculator::new(config);
    let outcome = calculator.solve(&transactions, config.initial_guess);
    let report = XirrReport::from_outcome(&outcome, transactions.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        Ok(solution) => {
            println!("XIRR: {}", report.headline());
            println!("  Rate: {:.6}", solution.rate);
            println!("  Flows: {}", solution.flow_count);
            println!("  Iterations: {}", solution.iterations);
            Ok(())
        }
        Err(e) => Err::<(), _>(e).context("XIRR could not be computed"),
    }
}
