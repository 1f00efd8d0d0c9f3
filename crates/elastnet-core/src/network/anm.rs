use super::error::EnergyError;
use crate::core::geometry;
use crate::core::params::AnmParams;
use nalgebra::{DMatrix, Point3};

/// Anisotropic network model: every residue pair strictly inside the cutoff
/// radius carries the same spring constant `gamma`, every other pair none.
///
/// Like [`EdenmModel`](super::edenm::EdenmModel), the native distance and
/// stiffness matrices are derived once at construction and the model is
/// immutable afterwards. Empty and single-residue structures are valid and
/// always evaluate to zero energy.
#[derive(Debug, Clone)]
pub struct AnmModel {
    native_distances: DMatrix<f64>,
    stiffness: DMatrix<f64>,
}

impl AnmModel {
    /// Builds a model with the conventional 15 Å cutoff and unit gamma.
    pub fn new(native_coords: &[Point3<f64>]) -> Self {
        Self::with_params(native_coords, AnmParams::default())
    }

    pub fn with_params(native_coords: &[Point3<f64>], params: AnmParams) -> Self {
        let native_distances = geometry::distance_matrix(native_coords);
        let n = native_coords.len();
        let mut stiffness = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                if native_distances[(i, j)] < params.cutoff {
                    stiffness[(i, j)] = params.gamma;
                    stiffness[(j, i)] = params.gamma;
                }
            }
        }
        Self {
            native_distances,
            stiffness,
        }
    }

    pub fn n_residues(&self) -> usize {
        self.native_distances.nrows()
    }

    pub fn stiffness(&self) -> &DMatrix<f64> {
        &self.stiffness
    }

    pub fn native_distances(&self) -> &DMatrix<f64> {
        &self.native_distances
    }

    /// Total elastic energy of a query conformation: one quarter of the full
    /// symmetric sum of `k(i,j) · (Δd)²`.
    pub fn evaluate_energy(&self, query_coords: &[Point3<f64>]) -> Result<f64, EnergyError> {
        if query_coords.len() != self.n_residues() {
            return Err(EnergyError::ShapeMismatch {
                native: self.n_residues(),
                query: query_coords.len(),
            });
        }
        let query_distances = geometry::distance_matrix(query_coords);
        let diff = &self.native_distances - query_distances;
        let weighted = self.stiffness.zip_map(&diff, |k, d| k * d * d);
        Ok(0.25 * weighted.sum())
    }
}
