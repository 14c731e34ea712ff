//! Pheromone trail matrix.

use super::types::{PheromoneStats, Tour};

/// Optional max-min clamp applied after each reinforcement phase.
///
/// Without bounds the matrix is only guaranteed nonnegative; values on
/// frequently reinforced edges grow without limit over long runs.
///
/// Reference: Stützle & Hoos (2000), "MAX-MIN Ant System"
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneBounds {
    /// Lower clamp, `>= 0`.
    pub min: f64,
    /// Upper clamp, `>= min`.
    pub max: f64,
}

/// Symmetric n×n pheromone matrix, row-major.
///
/// The only state that survives between iterations. Each iteration
/// mutates it exactly once: [`evaporate`](Self::evaporate) globally, then
/// [`reinforce`](Self::reinforce) once per constructed tour. Reinforcements
/// are additive and commute with each other.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates an `n`×`n` matrix with every entry set to `initial_value`.
    pub fn new(n: usize, initial_value: f64) -> Self {
        Self {
            data: vec![initial_value; n * n],
            size: n,
        }
    }

    /// Resets every entry to `initial_value`.
    pub fn initialize(&mut self, initial_value: f64) {
        self.data.fill(initial_value);
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Pheromone on edge `(a, b)`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.data[a * self.size + b]
    }

    /// Multiplies every entry by `1 - rate`.
    ///
    /// `rate` is validated by [`AcoConfig`](super::AcoConfig) to lie in `[0, 1)`.
    pub fn evaporate(&mut self, rate: f64) {
        debug_assert!((0.0..1.0).contains(&rate), "rate must be in [0, 1)");
        let keep = 1.0 - rate;
        for v in &mut self.data {
            *v *= keep;
        }
    }

    /// Adds `1 / cost` to both directions of every tour edge, including
    /// the closing edge back to the first city.
    ///
    /// # Panics
    ///
    /// Panics if `cost` is not positive and finite.
    pub fn reinforce(&mut self, tour: &Tour, cost: f64) {
        assert!(
            cost.is_finite() && cost > 0.0,
            "tour cost must be positive, got {cost}"
        );
        let deposit = 1.0 / cost;
        for (a, b) in tour.edges() {
            self.data[a * self.size + b] += deposit;
            self.data[b * self.size + a] += deposit;
        }
    }

    /// Clamps every entry into `bounds`.
    pub fn clamp(&mut self, bounds: PheromoneBounds) {
        for v in &mut self.data {
            *v = v.clamp(bounds.min, bounds.max);
        }
    }

    /// Returns `true` if `pheromone[a][b] == pheromone[b][a]` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Min, max and mean over off-diagonal entries.
    ///
    /// The diagonal is never traversed by a tour, so it only decays and
    /// would hide the interesting minimum.
    pub fn stats(&self) -> PheromoneStats {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;
        for i in 0..self.size {
            for j in 0..self.size {
                if i == j {
                    continue;
                }
                let v = self.get(i, j);
                min = min.min(v);
                max = max.max(v);
                sum += v;
                count += 1;
            }
        }
        if count == 0 {
            return PheromoneStats {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
            };
        }
        PheromoneStats {
            min,
            max,
            mean: sum / count as f64,
        }
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.size.max(1)).map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uniform() {
        let p = PheromoneMatrix::new(4, 1.5);
        assert_eq!(p.size(), 4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(p.get(i, j), 1.5);
            }
        }
    }

    #[test]
    fn test_initialize_resets() {
        let mut p = PheromoneMatrix::new(3, 1.0);
        p.reinforce(&Tour::new(vec![0, 1, 2]), 2.0);
        p.initialize(0.25);
        assert!(p.to_rows().iter().flatten().all(|&v| v == 0.25));
    }

    #[test]
    fn test_evaporate_scales_every_entry() {
        let mut p = PheromoneMatrix::new(3, 1.0);
        p.reinforce(&Tour::new(vec![0, 2, 1]), 4.0);
        let before = p.clone();
        p.evaporate(0.3);
        for i in 0..3 {
            for j in 0..3 {
                assert!((p.get(i, j) - before.get(i, j) * 0.7).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_evaporate_zero_rate_is_identity() {
        let mut p = PheromoneMatrix::new(3, 0.8);
        let before = p.clone();
        p.evaporate(0.0);
        assert_eq!(p, before);
    }

    #[test]
    fn test_reinforce_includes_closing_edge() {
        let mut p = PheromoneMatrix::new(4, 0.0);
        p.reinforce(&Tour::new(vec![2, 0, 3, 1]), 10.0);

        for (a, b) in [(2, 0), (0, 3), (3, 1), (1, 2)] {
            assert!((p.get(a, b) - 0.1).abs() < 1e-12, "edge ({a},{b})");
            assert_eq!(p.get(a, b), p.get(b, a));
        }
        // Not on the tour
        assert_eq!(p.get(0, 1), 0.0);
        assert_eq!(p.get(2, 3), 0.0);
        assert!(p.is_symmetric());
    }

    #[test]
    fn test_reinforcements_commute() {
        let t1 = Tour::new(vec![0, 1, 2, 3]);
        let t2 = Tour::new(vec![0, 2, 1, 3]);

        let mut a = PheromoneMatrix::new(4, 1.0);
        a.reinforce(&t1, 3.0);
        a.reinforce(&t2, 7.0);

        let mut b = PheromoneMatrix::new(4, 1.0);
        b.reinforce(&t2, 7.0);
        b.reinforce(&t1, 3.0);

        for i in 0..4 {
            for j in 0..4 {
                assert!((a.get(i, j) - b.get(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    #[should_panic(expected = "tour cost must be positive")]
    fn test_reinforce_zero_cost_panics() {
        let mut p = PheromoneMatrix::new(2, 1.0);
        p.reinforce(&Tour::new(vec![0, 1]), 0.0);
    }

    #[test]
    fn test_clamp() {
        let mut p = PheromoneMatrix::new(3, 1.0);
        p.reinforce(&Tour::new(vec![0, 1, 2]), 0.1);
        p.evaporate(0.9);
        p.clamp(PheromoneBounds { min: 0.2, max: 0.5 });
        let stats = p.stats();
        assert!(stats.min >= 0.2);
        assert!(stats.max <= 0.5);
    }

    #[test]
    fn test_stats_ignore_diagonal() {
        let mut p = PheromoneMatrix::new(3, 1.0);
        p.evaporate(0.5);
        p.reinforce(&Tour::new(vec![0, 1, 2]), 2.0);
        // every off-diagonal edge lies on the 3-city tour: 0.5 + 0.5
        let stats = p.stats();
        assert!((stats.min - 1.0).abs() < 1e-12);
        assert!((stats.max - 1.0).abs() < 1e-12);
        assert!((stats.mean - 1.0).abs() < 1e-12);
    }
}
