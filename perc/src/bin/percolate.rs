#![forbid(unsafe_code)]

use std::{fs, path::PathBuf};

use clap::Parser;
use perc::Percolation;

////////////////////////////////////////////////////////////////////////////////

/// Replays a list of sites onto a percolation grid and reports whether the
/// grid percolates.
#[derive(Parser, Debug)]
#[command(about = "Replay sites onto a percolation grid")]
struct Args {
    /// Whitespace-separated input: grid size, then (row, col) pairs to open
    input: PathBuf,

    /// Row of a site to additionally check for fullness
    #[arg(requires = "col")]
    row: Option<usize>,

    /// Column of that site
    col: Option<usize>,

    /// Render the final grid, '.' for open and '#' for blocked
    #[arg(long)]
    print_grid: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let content = fs::read_to_string(&args.input)?;
    let mut numbers = content
        .split_whitespace()
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();

    let size = numbers.next().ok_or("input does not start with a grid size")?;
    let mut grid = Percolation::new(size)?;
    while let Some(row) = numbers.next() {
        let col = numbers.next().ok_or("dangling row without a column")?;
        grid.open(row, col)?;
    }

    println!("{} open sites", grid.open_sites());
    if grid.percolates() {
        println!("percolates");
    } else {
        println!("does not percolate");
    }

    if let (Some(row), Some(col)) = (args.row, args.col) {
        println!("{}", grid.is_full(row, col)?);
    }

    if args.print_grid {
        print!("{}", grid);
    }

    Ok(())
}
