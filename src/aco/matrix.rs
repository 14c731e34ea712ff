//! Dense symmetric distance matrix.

use crate::error::AcoError;

/// A validated, immutable n×n distance matrix stored in row-major order.
///
/// Construction checks every precondition the colony relies on:
/// square shape, zero diagonal, symmetry, and strictly positive finite
/// off-diagonal distances. A zero distance between distinct cities would
/// make the inverse-distance heuristic infinite, so it is rejected here
/// rather than handled during construction.
///
/// # Examples
///
/// ```
/// use u_aco::aco::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 9.0],
///     vec![3.0, 0.0, 4.0],
///     vec![9.0, 4.0, 0.0],
/// ])
/// .expect("valid matrix");
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(2, 1), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from nested rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AcoError> {
        let size = rows.len();
        if size == 0 {
            return Err(AcoError::EmptyMatrix);
        }
        for (row, r) in rows.iter().enumerate() {
            if r.len() != size {
                return Err(AcoError::NonSquareMatrix {
                    row,
                    len: r.len(),
                    expected: size,
                });
            }
        }
        let data = rows.into_iter().flatten().collect();
        Self::from_data(size, data)
    }

    /// Builds a matrix from a flat row-major buffer of `size * size` values.
    ///
    /// Also rejects matrices on which some tour cost would overflow to
    /// infinity ([`AcoError::UnboundedTourCost`]).
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, AcoError> {
        if size == 0 {
            return Err(AcoError::EmptyMatrix);
        }
        if size.checked_mul(size) != Some(data.len()) {
            return Err(AcoError::BufferLength {
                size,
                got: data.len(),
            });
        }
        if size < 2 {
            return Err(AcoError::TooFewCities(size));
        }

        let dm = Self { data, size };
        dm.check()?;
        Ok(dm)
    }

    fn check(&self) -> Result<(), AcoError> {
        for i in 0..self.size {
            let diag = self.get(i, i);
            if diag != 0.0 {
                return Err(AcoError::NonZeroDiagonal { i, value: diag });
            }
            for j in (i + 1)..self.size {
                let forward = self.get(i, j);
                let backward = self.get(j, i);
                if !(forward.is_finite() && forward > 0.0) {
                    return Err(AcoError::InvalidDistance { i, j, value: forward });
                }
                if !(backward.is_finite() && backward > 0.0) {
                    return Err(AcoError::InvalidDistance {
                        i: j,
                        j: i,
                        value: backward,
                    });
                }
                if forward != backward {
                    return Err(AcoError::AsymmetricMatrix {
                        i,
                        j,
                        forward,
                        backward,
                    });
                }
            }
        }

        // Every tour leaves each city exactly once, so this bounds any tour cost.
        let worst: f64 = (0..self.size)
            .map(|i| self.row(i).iter().copied().fold(0.0, f64::max))
            .sum();
        if !worst.is_finite() {
            return Err(AcoError::UnboundedTourCost);
        }
        Ok(())
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `from` as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }
}
