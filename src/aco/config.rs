//! ACO configuration.

use super::construct::SelectionFallback;
use super::matrix::DistanceMatrix;
use super::pheromone::PheromoneBounds;
use crate::error::AcoError;

/// Configuration for the Ant System.
///
/// # Defaults
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 24);
/// assert_eq!(config.iterations, 100);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_aco::aco::{AcoConfig, SelectionFallback};
///
/// let config = AcoConfig::default()
///     .with_num_cities(5)
///     .with_num_ants(10)
///     .with_beta(3.0)
///     .with_selection_fallback(SelectionFallback::LastUnvisited)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants per iteration. Zero is allowed: the iteration only evaporates.
    pub num_ants: usize,

    /// Number of cities. Must equal the distance matrix dimension.
    pub num_cities: usize,

    /// Trail exponent. Higher = follow pheromone more strongly.
    pub alpha: f64,

    /// Heuristic exponent. Higher = greedier preference for short edges.
    pub beta: f64,

    /// Fraction of pheromone removed each iteration, in `[0, 1)`.
    pub evaporation_rate: f64,

    /// Uniform pheromone value at run start. Must be positive.
    pub initial_pheromone: f64,

    /// Number of iterations to run. Must be positive.
    pub iterations: usize,

    /// Policy when roulette-wheel selection cannot resolve a city.
    pub selection_fallback: SelectionFallback,

    /// Optional max-min clamp applied after each update.
    ///
    /// `None` (the default) leaves growth unbounded.
    pub pheromone_bounds: Option<PheromoneBounds>,

    /// Whether to construct tours in parallel using rayon.
    ///
    /// Results are identical to a sequential run with the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 24,
            num_cities: 24,
            alpha: 1.0,
            beta: 5.0,
            evaporation_rate: 0.5,
            initial_pheromone: 1.0,
            iterations: 100,
            selection_fallback: SelectionFallback::default(),
            pheromone_bounds: None,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_num_cities(mut self, n: usize) -> Self {
        self.num_cities = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_initial_pheromone(mut self, value: f64) -> Self {
        self.initial_pheromone = value;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_selection_fallback(mut self, fallback: SelectionFallback) -> Self {
        self.selection_fallback = fallback;
        self
    }

    /// Enables the max-min clamp.
    pub fn with_pheromone_bounds(mut self, min: f64, max: f64) -> Self {
        self.pheromone_bounds = Some(PheromoneBounds { min, max });
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the parameters that do not depend on the distance matrix.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.num_cities < 2 {
            return Err(AcoError::TooFewCities(self.num_cities));
        }
        if !(self.initial_pheromone.is_finite() && self.initial_pheromone > 0.0) {
            return Err(AcoError::NonPositivePheromone(self.initial_pheromone));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(AcoError::EvaporationOutOfRange(self.evaporation_rate));
        }
        if !self.alpha.is_finite() {
            return Err(AcoError::NonFiniteExponent {
                name: "alpha",
                value: self.alpha,
            });
        }
        if !self.beta.is_finite() {
            return Err(AcoError::NonFiniteExponent {
                name: "beta",
                value: self.beta,
            });
        }
        if self.iterations == 0 {
            return Err(AcoError::ZeroIterations);
        }
        if let Some(PheromoneBounds { min, max }) = self.pheromone_bounds {
            if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
                return Err(AcoError::InvalidBounds { min, max });
            }
        }
        Ok(())
    }

    /// Validates the configuration against the problem instance.
    pub fn validate_for(&self, distances: &DistanceMatrix) -> Result<(), AcoError> {
        if self.num_cities != distances.size() {
            return Err(AcoError::DimensionMismatch {
                num_cities: self.num_cities,
                matrix: distances.size(),
            });
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.num_ants, 24);
        assert_eq!(config.num_cities, 24);
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 5.0).abs() < 1e-10);
        assert!((config.evaporation_rate - 0.5).abs() < 1e-10);
        assert!((config.initial_pheromone - 1.0).abs() < 1e-10);
        assert_eq!(config.selection_fallback, SelectionFallback::Uniform);
        assert!(config.pheromone_bounds.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
        assert!(AcoConfig::default().with_num_ants(0).validate().is_ok());
        assert!(AcoConfig::default()
            .with_evaporation_rate(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_evaporation_range() {
        assert_eq!(
            AcoConfig::default().with_evaporation_rate(1.0).validate(),
            Err(AcoError::EvaporationOutOfRange(1.0))
        );
        assert_eq!(
            AcoConfig::default().with_evaporation_rate(-0.1).validate(),
            Err(AcoError::EvaporationOutOfRange(-0.1))
        );
    }

    #[test]
    fn test_validate_bad_pheromone() {
        assert_eq!(
            AcoConfig::default().with_initial_pheromone(0.0).validate(),
            Err(AcoError::NonPositivePheromone(0.0))
        );
        assert!(AcoConfig::default()
            .with_initial_pheromone(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_exponents() {
        assert!(matches!(
            AcoConfig::default().with_alpha(f64::NAN).validate(),
            Err(AcoError::NonFiniteExponent { name: "alpha", .. })
        ));
        assert!(matches!(
            AcoConfig::default().with_beta(f64::INFINITY).validate(),
            Err(AcoError::NonFiniteExponent { name: "beta", .. })
        ));
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert_eq!(
            AcoConfig::default().with_iterations(0).validate(),
            Err(AcoError::ZeroIterations)
        );
    }

    #[test]
    fn test_validate_bounds() {
        assert!(AcoConfig::default()
            .with_pheromone_bounds(0.1, 5.0)
            .validate()
            .is_ok());
        assert_eq!(
            AcoConfig::default()
                .with_pheromone_bounds(2.0, 1.0)
                .validate(),
            Err(AcoError::InvalidBounds { min: 2.0, max: 1.0 })
        );
    }

    #[test]
    fn test_validate_for_dimension_mismatch() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).expect("valid");
        assert_eq!(
            AcoConfig::default().validate_for(&dm),
            Err(AcoError::DimensionMismatch {
                num_cities: 24,
                matrix: 2
            })
        );
        assert!(AcoConfig::default()
            .with_num_cities(2)
            .validate_for(&dm)
            .is_ok());
    }
}
