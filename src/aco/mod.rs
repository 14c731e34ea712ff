//! Ant Colony Optimization (Ant System) for the symmetric TSP.
//!
//! A population of ants builds tours each iteration by roulette-wheel
//! selection over `pheromone^alpha * (1/distance)^beta`. After all ants
//! finish, the shared pheromone matrix is evaporated once and reinforced
//! with `1/cost` along every tour, biasing later iterations toward short
//! edges.
//!
//! # Key Types
//!
//! - [`DistanceMatrix`]: validated symmetric input
//! - [`PheromoneMatrix`]: the only state carried between iterations
//! - [`DesirabilityModel`]: edge weighting
//! - [`TourConstructor`]: one ant's probabilistic tour
//! - [`ColonyEngine`]: construct → update → report, per iteration
//! - [`AcoRunner`]: runs a whole configuration and returns [`AcoResult`]
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*
//! - Stützle & Hoos (2000), "MAX-MIN Ant System"

mod config;
mod construct;
mod desirability;
mod engine;
mod matrix;
mod pheromone;
pub mod report;
mod runner;
mod types;

pub use config::AcoConfig;
pub use construct::{ConstructedTour, RandomSource, SelectionFallback, TourConstructor};
pub use desirability::DesirabilityModel;
pub use engine::{ColonyEngine, EnginePhase, IterationSummary};
pub use matrix::DistanceMatrix;
pub use pheromone::{PheromoneBounds, PheromoneMatrix};
pub use report::{ConsoleReporter, IterationReporter, NullReporter, RecordingReporter};
pub use runner::{AcoResult, AcoRunner, RunSummary};
pub use types::{AntFailure, AntRecord, IterationRecord, PheromoneStats, Tour};
