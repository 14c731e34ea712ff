//! Colony iteration engine.
//!
//! Each iteration cycles through three phases:
//!
//! 1. **Constructing**: every ant builds a tour against the same
//!    read-only pheromone snapshot. Ants are independent, so this phase
//!    runs on rayon when [`AcoConfig::parallel`] is set.
//! 2. **Updating**: after all ants finish, evaporate once, then reinforce
//!    with every successful tour (single writer).
//! 3. **Reporting**: the [`IterationRecord`] goes to the reporter.
//!
//! After the configured number of iterations the engine is
//! [`EnginePhase::Finished`].

use rand::Rng;
use rayon::prelude::*;
use u_numflow::random::create_rng;

use super::config::AcoConfig;
use super::construct::{ConstructedTour, TourConstructor};
use super::desirability::DesirabilityModel;
use super::matrix::DistanceMatrix;
use super::pheromone::PheromoneMatrix;
use super::report::IterationReporter;
use super::types::{AntFailure, AntRecord, IterationRecord, PheromoneStats};
use crate::error::AcoError;

/// Where the engine is within the current iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// Ants are building tours.
    Constructing,
    /// The pheromone matrix is being evaporated and reinforced.
    Updating,
    /// The iteration record is with the reporter.
    Reporting,
    /// All configured iterations are done.
    Finished,
}

/// Compact per-iteration numbers, kept by [`AcoRunner`](super::AcoRunner)
/// as history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationSummary {
    /// Iteration number, starting at 1.
    pub iteration: usize,
    /// Lowest cost this iteration.
    pub min_cost: Option<f64>,
    /// Mean cost this iteration.
    pub mean_cost: Option<f64>,
    /// Ants that failed selection this iteration.
    pub failed_ants: usize,
    /// Pheromone summary after the update.
    pub pheromone: PheromoneStats,
}

/// Owns the pheromone matrix and drives iterations over a borrowed
/// distance matrix.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{ColonyEngine, RecordingReporter};
/// use u_aco::instances;
///
/// let instance = instances::five_city();
/// let config = instance.config.clone().with_iterations(3);
/// let mut engine = ColonyEngine::new(&instance.distances, config).unwrap();
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let mut recorder = RecordingReporter::default();
/// while engine.step(&mut rng, &mut recorder).is_some() {}
///
/// assert!(engine.is_finished());
/// assert_eq!(recorder.records.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ColonyEngine<'a> {
    distances: &'a DistanceMatrix,
    config: AcoConfig,
    pheromone: PheromoneMatrix,
    iteration: usize,
    phase: EnginePhase,
}

impl<'a> ColonyEngine<'a> {
    /// Validates `config` against `distances` and initializes the
    /// pheromone matrix to `config.initial_pheromone`.
    pub fn new(distances: &'a DistanceMatrix, config: AcoConfig) -> Result<Self, AcoError> {
        config.validate_for(distances)?;
        let pheromone = PheromoneMatrix::new(distances.size(), config.initial_pheromone);
        Ok(Self {
            distances,
            config,
            pheromone,
            iteration: 0,
            phase: EnginePhase::Constructing,
        })
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }

    /// Current pheromone state.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == EnginePhase::Finished
    }

    /// Runs one full iteration and reports it.
    ///
    /// Returns `None` once the engine is finished.
    pub fn step<R, P>(&mut self, rng: &mut R, reporter: &mut P) -> Option<IterationSummary>
    where
        R: Rng,
        P: IterationReporter + ?Sized,
    {
        if self.is_finished() {
            return None;
        }

        self.phase = EnginePhase::Constructing;
        let (ants, failures) = self.construct(rng);

        self.phase = EnginePhase::Updating;
        self.update(&ants);
        self.iteration += 1;

        self.phase = EnginePhase::Reporting;
        let record = IterationRecord {
            iteration: self.iteration,
            ants,
            failures,
            pheromone: self.pheromone.stats(),
        };
        reporter.on_iteration(&record);

        self.phase = if self.iteration >= self.config.iterations {
            EnginePhase::Finished
        } else {
            EnginePhase::Constructing
        };

        Some(IterationSummary {
            iteration: record.iteration,
            min_cost: record.min_cost(),
            mean_cost: record.mean_cost(),
            failed_ants: record.failures.len(),
            pheromone: record.pheromone,
        })
    }

    /// Construction phase: builds every ant's tour from the current
    /// pheromone snapshot without modifying it.
    ///
    /// One seed per ant is drawn from `rng` up front, so the outcome does
    /// not depend on [`AcoConfig::parallel`]. Each ant then builds its tour
    /// with a fresh generator seeded from that value rather than sharing
    /// `rng`: this reseeds once per ant per iteration, and the master
    /// stream advances by `num_ants` draws per iteration regardless of how
    /// many draws each tour consumes.
    pub fn construct<R: Rng>(&self, rng: &mut R) -> (Vec<AntRecord>, Vec<AntFailure>) {
        let seeds: Vec<u64> = (0..self.config.num_ants).map(|_| rng.random()).collect();

        let model = DesirabilityModel::new(
            &self.pheromone,
            self.distances,
            self.config.alpha,
            self.config.beta,
        );
        let constructor = TourConstructor::new(model, self.config.selection_fallback);
        let build = |seed: u64| constructor.build_tour(&mut create_rng(seed));

        let outcomes: Vec<Result<ConstructedTour, AcoError>> = if self.config.parallel {
            seeds.par_iter().map(|&s| build(s)).collect()
        } else {
            seeds.iter().map(|&s| build(s)).collect()
        };

        let mut ants = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for (ant, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(built) => ants.push(AntRecord {
                    ant,
                    tour: built.tour,
                    cost: built.cost,
                    last_step_weights: built.last_step_weights,
                }),
                Err(error) => failures.push(AntFailure { ant, error }),
            }
        }
        (ants, failures)
    }

    /// Update phase: evaporate once, reinforce with every tour, then
    /// clamp if bounds are configured.
    pub fn update(&mut self, ants: &[AntRecord]) {
        self.pheromone.evaporate(self.config.evaporation_rate);
        for ant in ants {
            self.pheromone.reinforce(&ant.tour, ant.cost);
        }
        if let Some(bounds) = self.config.pheromone_bounds {
            self.pheromone.clamp(bounds);
        }
    }

    /// Consumes the engine, returning the final pheromone matrix.
    pub fn into_pheromone(self) -> PheromoneMatrix {
        self.pheromone
    }
}
