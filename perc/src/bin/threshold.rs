#![forbid(unsafe_code)]

use clap::Parser;
use log::LevelFilter;
use perc::PercolationStats;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

////////////////////////////////////////////////////////////////////////////////

/// Estimates the percolation threshold of an N-by-N grid by Monte Carlo
/// simulation.
#[derive(Parser, Debug)]
#[command(about = "Estimate the percolation threshold by Monte Carlo simulation")]
struct Args {
    /// Grid dimension
    size: usize,

    /// Number of independent experiments
    trials: usize,

    /// Report every trial as it percolates
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let stats = PercolationStats::run(args.size, args.trials)?;

    println!("mean           = {:.6}", stats.mean());
    println!("stddev         = {:.6}", stats.stddev());
    println!("confidenceLow  = {:.6}", stats.confidence_low());
    println!("confidenceHigh = {:.6}", stats.confidence_high());

    Ok(())
}
