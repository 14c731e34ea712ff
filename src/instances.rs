//! Bundled problem instances.
//!
//! Each instance pairs a distance matrix with a ready-to-run
//! configuration, so the toy and the larger problem share one code path.

use crate::aco::{AcoConfig, DistanceMatrix};
use crate::error::AcoError;

/// A distance matrix and the configuration tuned for it.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    /// Short identifier.
    pub name: &'static str,
    /// Validated distances.
    pub distances: DistanceMatrix,
    /// Configuration with `num_cities` matching `distances`.
    pub config: AcoConfig,
}

impl ProblemInstance {
    /// Builds an instance from raw rows, sizing the config to the matrix.
    pub fn new(
        name: &'static str,
        rows: Vec<Vec<f64>>,
        config: AcoConfig,
    ) -> Result<Self, AcoError> {
        let distances = DistanceMatrix::from_rows(rows)?;
        let config = config.with_num_cities(distances.size());
        config.validate()?;
        Ok(Self {
            name,
            distances,
            config,
        })
    }

    /// Looks up a bundled instance by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "five" | "5" => Some(five_city()),
            "twenty-four" | "24" => Some(twenty_four_city()),
            _ => None,
        }
    }
}

const FIVE_CITY: [[f64; 5]; 5] = [
    [0.0, 3.0, 9.0, 2.0, 5.0],
    [3.0, 0.0, 4.0, 8.0, 2.0],
    [9.0, 4.0, 0.0, 8.0, 1.0],
    [2.0, 8.0, 8.0, 0.0, 4.0],
    [5.0, 2.0, 1.0, 4.0, 0.0],
];

#[rustfmt::skip]
const TWENTY_FOUR_CITY: [[f64; 24]; 24] = [
    [0.,3.,9.,2.,5.,7.,4.,8.,6.,3.,5.,9.,2.,4.,6.,3.,5.,7.,9.,8.,4.,6.,3.,2.],
    [3.,0.,4.,8.,2.,6.,5.,3.,7.,2.,4.,8.,6.,7.,9.,5.,2.,3.,6.,7.,9.,3.,5.,8.],
    [9.,4.,0.,8.,1.,5.,7.,6.,3.,9.,8.,4.,5.,7.,3.,2.,8.,9.,7.,6.,2.,4.,8.,9.],
    [2.,8.,8.,0.,4.,9.,5.,3.,7.,2.,6.,5.,8.,9.,7.,3.,2.,5.,8.,9.,6.,7.,4.,5.],
    [5.,2.,1.,4.,0.,6.,3.,5.,9.,2.,8.,7.,6.,5.,3.,7.,9.,2.,4.,8.,6.,3.,5.,2.],
    [7.,6.,5.,9.,6.,0.,8.,4.,2.,5.,7.,3.,9.,6.,4.,8.,2.,7.,5.,9.,3.,2.,6.,8.],
    [4.,5.,7.,5.,3.,8.,0.,6.,9.,5.,3.,4.,7.,6.,2.,9.,8.,5.,4.,3.,7.,9.,2.,6.],
    [8.,3.,6.,3.,5.,4.,6.,0.,5.,7.,3.,6.,2.,9.,8.,4.,5.,7.,3.,9.,6.,8.,2.,4.],
    [6.,7.,3.,7.,9.,2.,9.,5.,0.,6.,7.,8.,4.,5.,6.,9.,3.,2.,8.,7.,6.,4.,9.,5.],
    [3.,2.,9.,2.,2.,5.,5.,7.,6.,0.,8.,9.,7.,3.,2.,6.,4.,8.,9.,3.,2.,6.,5.,7.],
    [5.,4.,8.,6.,8.,7.,3.,3.,7.,8.,0.,9.,5.,6.,3.,4.,7.,5.,2.,8.,9.,3.,4.,5.],
    [9.,8.,4.,5.,7.,3.,4.,6.,8.,9.,9.,0.,7.,6.,5.,3.,8.,9.,5.,4.,3.,6.,7.,5.],
    [2.,6.,5.,8.,6.,9.,7.,2.,4.,7.,5.,7.,0.,9.,6.,3.,4.,8.,2.,6.,7.,5.,3.,9.],
    [4.,7.,7.,9.,5.,6.,6.,9.,5.,3.,6.,6.,9.,0.,8.,7.,4.,3.,6.,8.,5.,4.,2.,7.],
    [6.,9.,3.,7.,3.,4.,2.,8.,6.,2.,3.,5.,6.,8.,0.,4.,5.,3.,7.,9.,4.,3.,8.,9.],
    [3.,5.,2.,3.,7.,8.,9.,4.,9.,6.,4.,3.,3.,7.,4.,0.,5.,7.,9.,8.,6.,5.,3.,2.],
    [5.,2.,8.,2.,9.,2.,8.,5.,3.,4.,7.,8.,4.,4.,5.,5.,0.,2.,7.,9.,5.,8.,3.,9.],
    [7.,3.,9.,5.,2.,7.,5.,7.,2.,8.,5.,9.,8.,3.,3.,7.,2.,0.,6.,9.,5.,7.,9.,8.],
    [9.,6.,7.,8.,4.,5.,4.,3.,8.,9.,2.,5.,2.,6.,7.,9.,7.,6.,0.,8.,9.,4.,3.,5.],
    [8.,7.,6.,9.,8.,9.,3.,9.,7.,3.,8.,4.,6.,8.,9.,8.,9.,9.,8.,0.,7.,9.,5.,6.],
    [4.,9.,2.,6.,6.,3.,7.,6.,6.,2.,9.,3.,7.,5.,4.,6.,5.,5.,9.,7.,0.,8.,7.,6.],
    [6.,3.,4.,7.,3.,2.,9.,8.,4.,6.,3.,6.,5.,4.,3.,5.,8.,7.,4.,9.,8.,0.,9.,5.],
    [3.,5.,8.,4.,5.,6.,2.,2.,9.,5.,4.,7.,3.,2.,8.,3.,3.,9.,3.,5.,7.,9.,0.,8.],
    [2.,8.,9.,5.,2.,8.,6.,4.,5.,7.,5.,5.,9.,7.,9.,2.,9.,8.,5.,6.,6.,5.,8.,0.],
];

fn rows<const N: usize>(grid: &[[f64; N]; N]) -> Vec<Vec<f64>> {
    grid.iter().map(|r| r.to_vec()).collect()
}

/// The 5-city toy instance: 5 ants, 100 iterations, alpha 1, beta 5,
/// evaporation 0.5, initial pheromone 1.
pub fn five_city() -> ProblemInstance {
    let distances = DistanceMatrix::from_rows(rows(&FIVE_CITY))
        .expect("bundled 5-city matrix is valid");
    ProblemInstance {
        name: "five",
        config: AcoConfig::default().with_num_cities(5).with_num_ants(5),
        distances,
    }
}

/// The 24-city instance: 24 ants, 100 iterations, alpha 1, beta 5,
/// evaporation 0.5, initial pheromone 1.
pub fn twenty_four_city() -> ProblemInstance {
    let distances = DistanceMatrix::from_rows(rows(&TWENTY_FOUR_CITY))
        .expect("bundled 24-city matrix is valid");
    ProblemInstance {
        name: "twenty-four",
        config: AcoConfig::default(),
        distances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_city() {
        let inst = five_city();
        assert_eq!(inst.distances.size(), 5);
        assert_eq!(inst.config.num_cities, 5);
        assert!(inst.config.validate_for(&inst.distances).is_ok());
        assert_eq!(inst.distances.get(2, 4), 1.0);
    }

    #[test]
    fn test_twenty_four_city() {
        let inst = twenty_four_city();
        assert_eq!(inst.distances.size(), 24);
        assert_eq!(inst.config.num_ants, 24);
        assert!(inst.config.validate_for(&inst.distances).is_ok());
        assert_eq!(inst.distances.get(0, 23), 2.0);
        assert_eq!(inst.distances.get(23, 0), 2.0);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(ProblemInstance::by_name("5").map(|i| i.name), Some("five"));
        assert_eq!(
            ProblemInstance::by_name("twenty-four").map(|i| i.distances.size()),
            Some(24)
        );
        assert!(ProblemInstance::by_name("seven").is_none());
    }

    #[test]
    fn test_new_sizes_config() {
        let inst = ProblemInstance::new(
            "tri",
            vec![
                vec![0.0, 3.0, 4.0],
                vec![3.0, 0.0, 5.0],
                vec![4.0, 5.0, 0.0],
            ],
            AcoConfig::default(),
        )
        .expect("valid");
        assert_eq!(inst.config.num_cities, 3);
    }
}
