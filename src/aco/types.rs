//! Tours and per-iteration records.

use super::matrix::DistanceMatrix;
use crate::error::AcoError;

/// A closed tour: an ordered permutation of city indices.
///
/// The last city implicitly connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Wraps a city sequence. No validation is performed; see
    /// [`is_permutation`](Self::is_permutation).
    pub fn new(cities: Vec<usize>) -> Self {
        Tour(cities)
    }

    /// The visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    /// Number of cities on the tour.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates consecutive edges, ending with `(last, first)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.0.len();
        (0..n).map(move |k| (self.0[k], self.0[(k + 1) % n]))
    }

    /// Sum of edge distances including the closing edge.
    pub fn cost(&self, distances: &DistanceMatrix) -> f64 {
        self.edges().map(|(a, b)| distances.get(a, b)).sum()
    }

    /// Returns `true` if the tour is a permutation of `0..n`.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.0 {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }

    /// Consumes the tour, returning the city sequence.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

/// One ant's finished construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntRecord {
    /// Ant index within the iteration.
    pub ant: usize,

    /// The constructed tour.
    pub tour: Tour,

    /// Total tour cost including the closing edge.
    pub cost: f64,

    /// Desirability of every city at the final construction step.
    ///
    /// Earlier steps are overwritten while the tour is built; only the
    /// last one is kept.
    pub last_step_weights: Vec<f64>,
}

/// An ant whose construction was aborted this iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct AntFailure {
    /// Ant index within the iteration.
    pub ant: usize,

    /// Why selection failed.
    pub error: AcoError,
}

/// Summary of the pheromone matrix (off-diagonal entries).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneStats {
    /// Smallest entry.
    pub min: f64,
    /// Largest entry. Tracks unbounded growth over long runs.
    pub max: f64,
    /// Mean entry.
    pub mean: f64,
}

/// Everything produced by one iteration, handed to the reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    /// Iteration number, starting at 1.
    pub iteration: usize,

    /// Successful ants, ordered by ant index.
    pub ants: Vec<AntRecord>,

    /// Ants whose construction failed, ordered by ant index.
    pub failures: Vec<AntFailure>,

    /// Pheromone summary after this iteration's update.
    pub pheromone: PheromoneStats,
}

impl IterationRecord {
    /// Lowest tour cost this iteration, if any ant succeeded.
    pub fn min_cost(&self) -> Option<f64> {
        self.ants.iter().map(|a| a.cost).min_by(f64::total_cmp)
    }

    /// Mean tour cost this iteration, if any ant succeeded.
    pub fn mean_cost(&self) -> Option<f64> {
        if self.ants.is_empty() {
            return None;
        }
        Some(self.ants.iter().map(|a| a.cost).sum::<f64>() / self.ants.len() as f64)
    }
}
