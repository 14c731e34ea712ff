//! Error types for u-aco.
//!
//! Configuration errors are fatal and detected before a run starts.
//! Selection failures are scoped to a single ant in a single iteration.

use thiserror::Error;

/// Why roulette-wheel selection could not resolve a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionFailureCause {
    /// Every remaining candidate had zero desirability (underflow).
    ZeroTotalWeight,

    /// The cumulative scan ended below the drawn threshold (rounding).
    Unresolved,

    /// A candidate weight is NaN, e.g. an infinite trail times an
    /// underflowed heuristic.
    NonFiniteWeight,
}

impl std::fmt::Display for SelectionFailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionFailureCause::ZeroTotalWeight => write!(f, "total desirability is zero"),
            SelectionFailureCause::Unresolved => {
                write!(f, "cumulative scan did not reach the drawn value")
            }
            SelectionFailureCause::NonFiniteWeight => write!(f, "a desirability weight is NaN"),
        }
    }
}

/// Unified error type for all u-aco operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    // ===== Configuration errors =====
    /// The distance matrix has no rows.
    #[error("distance matrix is empty")]
    EmptyMatrix,

    /// Fewer than two cities: a closed tour would have zero cost.
    #[error("at least 2 cities are required, got {0}")]
    TooFewCities(usize),

    /// A row length differs from the number of rows.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Number of rows.
        expected: usize,
    },

    /// A flat buffer does not hold exactly `size * size` values.
    #[error("flat buffer of {got} values does not hold a {size}x{size} matrix")]
    BufferLength {
        /// Requested dimension.
        size: usize,
        /// Buffer length.
        got: usize,
    },

    /// `num_cities` does not match the matrix dimension.
    #[error("num_cities is {num_cities} but the distance matrix is {matrix}x{matrix}")]
    DimensionMismatch {
        /// Configured city count.
        num_cities: usize,
        /// Matrix dimension.
        matrix: usize,
    },

    /// `distance[i][j] != distance[j][i]`.
    #[error("distance matrix is asymmetric at ({i}, {j}): {forward} vs {backward}")]
    AsymmetricMatrix {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// `distance[i][j]`.
        forward: f64,
        /// `distance[j][i]`.
        backward: f64,
    },

    /// A diagonal entry is not zero.
    #[error("distance[{i}][{i}] must be 0, got {value}")]
    NonZeroDiagonal {
        /// City index.
        i: usize,
        /// Diagonal value.
        value: f64,
    },

    /// An off-diagonal distance is zero, negative, or not finite.
    #[error("distance[{i}][{j}] must be positive and finite, got {value}")]
    InvalidDistance {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// Offending distance.
        value: f64,
    },

    /// Summing the longest edge out of every city overflows, so some tour
    /// cost would be infinite.
    #[error("distance matrix admits tours with infinite cost")]
    UnboundedTourCost,

    /// `initial_pheromone` is not a positive finite number.
    #[error("initial_pheromone must be positive and finite, got {0}")]
    NonPositivePheromone(f64),

    /// `evaporation_rate` is outside `[0, 1)`.
    #[error("evaporation_rate must be in [0, 1), got {0}")]
    EvaporationOutOfRange(f64),

    /// A weighting exponent is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteExponent {
        /// Parameter name (`alpha` or `beta`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// `iterations` is zero.
    #[error("iterations must be positive")]
    ZeroIterations,

    /// Pheromone bounds are not `0 <= min <= max` with finite values.
    #[error("pheromone bounds must satisfy 0 <= min <= max, got [{min}, {max}]")]
    InvalidBounds {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    // ===== Per-ant errors =====
    /// Roulette-wheel selection could not pick a city.
    #[error("selection failed at step {step}: {cause}")]
    SelectionFailure {
        /// Construction step (1-based; step 0 is the start city).
        step: usize,
        /// Failure cause.
        cause: SelectionFailureCause,
    },
}

impl AcoError {
    /// Returns `true` for errors that prevent a run from starting.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, AcoError::SelectionFailure { .. })
    }
}
