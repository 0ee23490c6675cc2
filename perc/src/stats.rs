use log::debug;
use rand::{distributions::Uniform, prelude::Distribution};

use crate::{grid::Percolation, Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// Arithmetic mean of a sample.
pub fn mean(sample: &[f64]) -> f64 {
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Sample standard deviation (Bessel-corrected).
/// `NaN` for samples shorter than two values.
pub fn stddev(sample: &[f64]) -> f64 {
    if sample.len() < 2 {
        return f64::NAN;
    }
    let mean = mean(sample);
    let squared_deviations = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    (squared_deviations / (sample.len() - 1) as f64).sqrt()
}

////////////////////////////////////////////////////////////////////////////////

/// Monte Carlo estimate of the percolation threshold of a `size`-by-`size`
/// grid, aggregated over independent trials.
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// z-value of the 95% confidence interval under a normal approximation
    const CONFIDENCE_95: f64 = 1.96;

    /// Runs `trials` experiments, each opening uniformly random sites of a
    /// fresh grid until it percolates, and records the fraction of sites
    /// open at that moment. Drawing an already-open site is allowed and
    /// leaves the grid unchanged.
    pub fn run(size: usize, trials: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument { what: "grid size" });
        }
        if trials == 0 {
            return Err(Error::InvalidArgument { what: "trial count" });
        }

        let coords = Uniform::from(0..size);
        let mut rng = rand::thread_rng();

        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let mut grid = Percolation::new(size)?;
            while !grid.percolates() {
                let row = coords.sample(&mut rng);
                let col = coords.sample(&mut rng);
                grid.open(row, col)?;
            }

            let threshold = grid.open_sites() as f64 / (size * size) as f64;
            debug!("trial {}: percolated at {}", trial, threshold);
            thresholds.push(threshold);
        }

        Ok(Self { thresholds })
    }

    /// Sample mean of the recorded thresholds.
    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// Sample standard deviation of the recorded thresholds.
    /// `NaN` when only one trial was run.
    pub fn stddev(&self) -> f64 {
        stddev(&self.thresholds)
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_low(&self) -> f64 {
        self.mean() - self.margin()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_high(&self) -> f64 {
        self.mean() + self.margin()
    }

    /// Thresholds recorded by each trial, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    fn margin(&self) -> f64 {
        Self::CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }
}
