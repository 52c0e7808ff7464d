//! Dense distance matrix.

use crate::error::{AnnealError, Result};

/// A dense n×n distance matrix stored in row-major order.
///
/// Expected to be symmetric with a zero diagonal. Neither property is
/// enforced; [`is_symmetric`](Self::is_symmetric) reports the first one.
///
/// # Examples
///
/// ```
/// use tsp_anneal::tsp::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 2), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked wire form; deserialization goes through [`DistanceMatrix::from_data`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = AnnealError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_data(raw.size, raw.data)
    }
}

impl DistanceMatrix {
    /// Builds a matrix from one vector per row.
    ///
    /// Fails with [`AnnealError::DegenerateInput`] when there are fewer than
    /// two rows or any row length differs from the row count.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        check_size(size)?;
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(AnnealError::DegenerateInput(format!(
                "row {i} has {} entries, expected {size}",
                row.len()
            )));
        }
        let data = rows.iter().flatten().copied().collect();
        Ok(Self { data, size })
    }

    /// Builds a matrix from `size * size` row-major values.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        check_size(size)?;
        if data.len() != size * size {
            return Err(AnnealError::DegenerateInput(format!(
                "expected {} values for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distances from location `from` to every location.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Reports the first negative or non-finite entry in row-major order.
    pub fn check_distances(&self) -> Result<()> {
        match self.data.iter().position(|d| !(d.is_finite() && *d >= 0.0)) {
            Some(idx) => Err(AnnealError::NumericAnomaly {
                from: idx / self.size,
                to: idx % self.size,
                value: self.data[idx],
            }),
            None => Ok(()),
        }
    }
}

fn check_size(size: usize) -> Result<()> {
    if size < 2 {
        return Err(AnnealError::DegenerateInput(format!(
            "a tour needs at least 2 locations, got {size}"
        )));
    }
    Ok(())
}
