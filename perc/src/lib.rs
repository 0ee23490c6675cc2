#![forbid(unsafe_code)]

////////////////////////////////////////////////////////////////////////////////

mod error;
mod grid;
mod stats;

pub use error::{Error, Result};
pub use grid::Percolation;
pub use stats::{mean, stddev, PercolationStats};
