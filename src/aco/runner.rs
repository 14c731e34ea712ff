//! ACO execution loop.

use std::time::Instant;

use u_numflow::random::create_rng;

use super::config::AcoConfig;
use super::engine::ColonyEngine;
use super::matrix::DistanceMatrix;
use super::pheromone::PheromoneMatrix;
use super::report::{IterationReporter, NullReporter};
use crate::error::AcoError;

/// Totals handed to [`IterationReporter::on_finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Iterations executed.
    pub iterations: usize,
    /// Ant constructions aborted by selection failures, over all iterations.
    pub failed_ants: usize,
    /// Wall-clock duration of the run.
    pub elapsed_ms: u64,
}

/// Result of an ACO run.
///
/// There is no best-tour field: tours are discarded after each update
/// and only their effect on the pheromone matrix survives. Use a
/// reporter to observe individual tours.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Pheromone matrix after the final iteration.
    pub pheromone: PheromoneMatrix,

    /// Total number of iterations executed.
    pub iterations: usize,

    /// Mean tour cost per iteration (`NaN` when every ant failed or
    /// there were no ants).
    pub mean_cost_history: Vec<f64>,

    /// Largest pheromone entry after each iteration.
    ///
    /// Nothing bounds pheromone growth unless
    /// [`AcoConfig::pheromone_bounds`] is set; this is the drift metric.
    pub max_pheromone_history: Vec<f64>,

    /// Ant constructions aborted over the run.
    pub failed_ants: usize,

    /// Wall-clock duration in milliseconds.
    pub elapsed_ms: u64,
}

/// Executes the Ant System.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO on `distances`.
    ///
    /// Configuration errors are returned before any iteration starts.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_reporter(distances, config, &mut NullReporter)
    }

    /// Runs ACO, passing every iteration record to `reporter`.
    pub fn run_with_reporter<P: IterationReporter + ?Sized>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        reporter: &mut P,
    ) -> Result<AcoResult, AcoError> {
        let mut engine = ColonyEngine::new(distances, config.clone())?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let start = Instant::now();
        let mut mean_cost_history = Vec::with_capacity(config.iterations);
        let mut max_pheromone_history = Vec::with_capacity(config.iterations);
        let mut failed_ants = 0usize;

        while let Some(summary) = engine.step(&mut rng, reporter) {
            mean_cost_history.push(summary.mean_cost.unwrap_or(f64::NAN));
            max_pheromone_history.push(summary.pheromone.max);
            failed_ants += summary.failed_ants;
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        let iterations = engine.iteration();
        reporter.on_finish(&RunSummary {
            iterations,
            failed_ants,
            elapsed_ms,
        });

        Ok(AcoResult {
            pheromone: engine.into_pheromone(),
            iterations,
            mean_cost_history,
            max_pheromone_history,
            failed_ants,
            elapsed_ms,
        })
    }
}
