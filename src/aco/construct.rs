//! Probabilistic tour construction (one ant).
//!
//! # Algorithm
//!
//! 1. Draw a uniformly random start city
//! 2. For each of the remaining `n - 1` steps:
//!    a. Score every city with the [`DesirabilityModel`] (visited = 0)
//!    b. Draw `r` uniformly in `[0, total)`
//!    c. Scan cities in index order, accumulating weights; pick the first
//!       city with positive weight whose running sum reaches `r`
//!    d. If nothing is picked, apply the [`SelectionFallback`]
//! 3. Close the tour with the edge back to the start city

use rand::Rng;

use super::desirability::DesirabilityModel;
use super::types::Tour;
use crate::error::{AcoError, SelectionFailureCause};

/// Source of the random draws consumed by tour construction.
///
/// Every [`rand::Rng`] is a `RandomSource`. Tests can supply a scripted
/// sequence instead to reproduce a hand-computed selection trace.
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` is always positive.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }

    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// What to do when roulette-wheel selection cannot resolve a city.
///
/// Happens when every remaining weight underflows to zero, or when
/// floating-point rounding leaves the cumulative sum below the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionFallback {
    /// Pick uniformly among the unvisited cities (consumes one draw).
    #[default]
    Uniform,

    /// Pick the highest-index unvisited city (no draw).
    LastUnvisited,

    /// Abort this ant's construction with [`AcoError::SelectionFailure`].
    Fail,
}

/// Output of one construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructedTour {
    /// The tour, a permutation of `0..n`.
    pub tour: Tour,

    /// Total cost including the closing edge.
    pub cost: f64,

    /// Weights computed at the final step only.
    pub last_step_weights: Vec<f64>,
}

/// Builds complete tours for single ants.
///
/// Stateless between calls: the visited set and partial tour live only
/// inside [`build_tour`](Self::build_tour).
#[derive(Debug, Clone, Copy)]
pub struct TourConstructor<'a> {
    model: DesirabilityModel<'a>,
    fallback: SelectionFallback,
}

impl<'a> TourConstructor<'a> {
    /// Creates a constructor scoring edges with `model`.
    pub fn new(model: DesirabilityModel<'a>, fallback: SelectionFallback) -> Self {
        Self { model, fallback }
    }

    /// Constructs one tour.
    ///
    /// Returns [`AcoError::SelectionFailure`] only under
    /// [`SelectionFallback::Fail`].
    pub fn build_tour<S: RandomSource + ?Sized>(
        &self,
        rng: &mut S,
    ) -> Result<ConstructedTour, AcoError> {
        let n = self.model.size();
        let distances = self.model.distances();

        let mut cities = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        let mut weights = vec![0.0; n];
        let mut cost = 0.0;

        let first = rng.next_index(n);
        cities.push(first);
        visited[first] = true;
        let mut current = first;

        for step in 1..n {
            let total = self.model.weights_into(current, &visited, &mut weights);

            let next = if total.is_nan() {
                self.fall_back(&visited, rng, step, SelectionFailureCause::NonFiniteWeight)?
            } else if total.is_infinite() {
                self.select_saturated(&weights, &visited, rng, step)?
            } else if total > 0.0 {
                let r = rng.next_unit() * total;
                match roulette(&weights, r) {
                    Some(j) => j,
                    None => self.fall_back(&visited, rng, step, SelectionFailureCause::Unresolved)?,
                }
            } else {
                self.fall_back(&visited, rng, step, SelectionFailureCause::ZeroTotalWeight)?
            };

            visited[next] = true;
            cities.push(next);
            cost += distances.get(current, next);
            current = next;
        }

        cost += distances.get(current, first);

        Ok(ConstructedTour {
            tour: Tour::new(cities),
            cost,
            last_step_weights: weights,
        })
    }

    /// Selection when the total weight overflowed. Infinite candidates
    /// dominate and are drawn uniformly; otherwise the finite weights are
    /// rescaled by their maximum before the usual scan.
    fn select_saturated<S: RandomSource + ?Sized>(
        &self,
        weights: &[f64],
        visited: &[bool],
        rng: &mut S,
        step: usize,
    ) -> Result<usize, AcoError> {
        let infinite: Vec<usize> = weights
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_infinite())
            .map(|(j, _)| j)
            .collect();
        if !infinite.is_empty() {
            return Ok(infinite[rng.next_index(infinite.len())]);
        }

        let max = weights.iter().copied().fold(0.0, f64::max);
        let scaled: Vec<f64> = weights.iter().map(|w| w / max).collect();
        let total: f64 = scaled.iter().sum();
        match roulette(&scaled, rng.next_unit() * total) {
            Some(j) => Ok(j),
            None => self.fall_back(visited, rng, step, SelectionFailureCause::Unresolved),
        }
    }

    fn fall_back<S: RandomSource + ?Sized>(
        &self,
        visited: &[bool],
        rng: &mut S,
        step: usize,
        cause: SelectionFailureCause,
    ) -> Result<usize, AcoError> {
        let unvisited = || visited.iter().enumerate().filter(|(_, &v)| !v).map(|(j, _)| j);
        let pick = match self.fallback {
            SelectionFallback::Uniform => {
                let remaining = unvisited().count();
                if remaining == 0 {
                    None
                } else {
                    unvisited().nth(rng.next_index(remaining))
                }
            }
            SelectionFallback::LastUnvisited => unvisited().last(),
            SelectionFallback::Fail => None,
        };
        pick.ok_or(AcoError::SelectionFailure { step, cause })
    }
}

/// Cumulative-sum scan: first city with positive weight whose running
/// sum is `>= r`. Zero-weight (visited) cities are never returned.
fn roulette(weights: &[f64], r: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (j, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        if cumulative >= r {
            return Some(j);
        }
    }
    None
}
