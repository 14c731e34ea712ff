//! Edge desirability: pheromone strength combined with inverse distance.

use super::matrix::DistanceMatrix;
use super::pheromone::PheromoneMatrix;

/// Read-only view scoring candidate edges.
///
/// `weight = pheromone[i][j]^alpha * (1 / distance[i][j])^beta`
///
/// Holds shared borrows of both matrices, so one model can be handed to
/// every ant of an iteration (it is `Sync`).
///
/// # Preconditions
///
/// `distance[i][j] > 0` for `i != j`. A zero distance would make the
/// heuristic term infinite; [`DistanceMatrix`] rejects such inputs at
/// construction so this case never reaches the model.
///
/// # Reference
///
/// Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
/// Colony of Cooperating Agents"
#[derive(Debug, Clone, Copy)]
pub struct DesirabilityModel<'a> {
    pheromone: &'a PheromoneMatrix,
    distances: &'a DistanceMatrix,
    alpha: f64,
    beta: f64,
}

impl<'a> DesirabilityModel<'a> {
    /// Creates a model over the given matrices.
    pub fn new(
        pheromone: &'a PheromoneMatrix,
        distances: &'a DistanceMatrix,
        alpha: f64,
        beta: f64,
    ) -> Self {
        debug_assert_eq!(pheromone.size(), distances.size());
        Self {
            pheromone,
            distances,
            alpha,
            beta,
        }
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.distances.size()
    }

    /// The distance matrix being scored.
    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }

    /// Selection weight for moving from `current` to `candidate`.
    ///
    /// Returns 0 if `candidate` is already visited.
    #[inline]
    pub fn weight(&self, current: usize, candidate: usize, visited: &[bool]) -> f64 {
        if visited[candidate] {
            return 0.0;
        }
        let tau = self.pheromone.get(current, candidate);
        let eta = 1.0 / self.distances.get(current, candidate);
        tau.powf(self.alpha) * eta.powf(self.beta)
    }

    /// Fills `out` with the weight of every city and returns their sum.
    pub fn weights_into(&self, current: usize, visited: &[bool], out: &mut [f64]) -> f64 {
        let mut total = 0.0;
        for (j, w) in out.iter_mut().enumerate() {
            *w = self.weight(current, j, visited);
            total += *w;
        }
        total
    }
}
