//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.
//!
//! Provides an Ant System implementation built around an explicitly owned
//! pheromone model:
//!
//! - **Pheromone model**: symmetric trail matrix, evaporated once and then
//!   reinforced by every tour each iteration.
//! - **Desirability**: `pheromone^alpha * (1/distance)^beta` edge weights.
//! - **Tour construction**: roulette-wheel selection over unvisited cities
//!   with an explicit fallback policy for unresolved draws.
//! - **Colony engine**: construct → update → report iterations, with
//!   optional rayon-parallel construction.
//! - **Instances**: bundled 5-city and 24-city problems.
//!
//! # Architecture
//!
//! The core performs no I/O. Randomness is an explicit, seedable
//! dependency; per-iteration output goes to an
//! [`IterationReporter`](aco::IterationReporter) supplied by the caller.

pub mod aco;
pub mod error;
pub mod instances;

pub use error::{AcoError, SelectionFailureCause};
