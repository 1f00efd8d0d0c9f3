use super::error::EnergyError;
use super::exclusions::ChainBreakExclusions;
use crate::core::geometry;
use crate::core::params::EdenmParams;
use nalgebra::{DMatrix, Point3};

const BACKBONE_FORCE_CONSTANT: f64 = 60.0; // In kcal/(mol·Å²), before the 1/(j-i)² decay
const BACKBONE_SPAN: usize = 3; // Max sequence separation treated as backbone-proximal
const CONTACT_SIGMA: f64 = 6.0; // In Å, length scale of the (σ/d)⁶ contact stiffness
const CONTACT_DISTANCE_FLOOR: f64 = 3.8; // In Å, guards against near-overlapping residues
const CUTOFF_SLOPE: f64 = 2.9;
const CUTOFF_FLOOR: f64 = 8.0; // In Å

/// Interaction radius for the contact stiffness term. Grows with the
/// logarithm of the residue count so that large structures stay mechanically
/// well-connected; structures under ~5700 residues land on the 8 Å floor.
#[inline]
fn interaction_cutoff(n_residues: usize) -> f64 {
    (CUTOFF_SLOPE * (n_residues as f64).ln() - CUTOFF_SLOPE).max(CUTOFF_FLOOR)
}

/// Essential-Dynamics elastic network model.
///
/// Stiffness assignment, per unordered residue pair (i, j):
///
/// 1. Sequence separation ≤ 3 and not excluded by the chain break:
///    `k = 60 / (j - i)²`, regardless of spatial distance.
/// 2. Native distance beyond the cutoff: `k = 0`.
/// 3. Otherwise: `k = (6 / d)⁶` with `d` floored at 3.8 Å.
///
/// The native distance and stiffness matrices are derived once at
/// construction; the model is immutable afterwards and can be shared freely
/// across threads. Empty and single-residue structures are valid and always
/// evaluate to zero energy.
#[derive(Debug, Clone)]
pub struct EdenmModel {
    native_distances: DMatrix<f64>,
    stiffness: DMatrix<f64>,
    exclusions: ChainBreakExclusions,
    cutoff: f64,
    k_scale: f64,
}

impl EdenmModel {
    /// Builds a model from a native conformation and the index of the last
    /// residue before a chain break, using the published default parameters.
    pub fn new(native_coords: &[Point3<f64>], split_chain: usize) -> Self {
        Self::with_params(native_coords, split_chain, EdenmParams::default())
    }

    pub fn with_params(
        native_coords: &[Point3<f64>],
        split_chain: usize,
        params: EdenmParams,
    ) -> Self {
        let native_distances = geometry::distance_matrix(native_coords);
        let exclusions = ChainBreakExclusions::new(split_chain);
        let cutoff = interaction_cutoff(native_coords.len());
        let stiffness = build_stiffness(&native_distances, &exclusions, cutoff);
        Self {
            native_distances,
            stiffness,
            exclusions,
            cutoff,
            k_scale: params.k_scale,
        }
    }

    pub fn n_residues(&self) -> usize {
        self.native_distances.nrows()
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn stiffness(&self) -> &DMatrix<f64> {
        &self.stiffness
    }

    pub fn native_distances(&self) -> &DMatrix<f64> {
        &self.native_distances
    }

    pub fn exclusions(&self) -> &ChainBreakExclusions {
        &self.exclusions
    }

    /// Total elastic energy of a query conformation: one quarter of the full
    /// symmetric sum of `k_scale · k(i,j) · (Δd)²`.
    pub fn evaluate_energy(&self, query_coords: &[Point3<f64>]) -> Result<f64, EnergyError> {
        let pair_energies = self.pair_energies(query_coords)?;
        Ok(0.25 * pair_energies.sum())
    }

    /// Per-pair energy breakdown. Entry (i, j) carries the same 1/4 factor
    /// as the total, so the entries of this matrix sum to
    /// [`evaluate_energy`](Self::evaluate_energy).
    pub fn energy_matrix(&self, query_coords: &[Point3<f64>]) -> Result<DMatrix<f64>, EnergyError> {
        Ok(0.25 * self.pair_energies(query_coords)?)
    }

    fn pair_energies(&self, query_coords: &[Point3<f64>]) -> Result<DMatrix<f64>, EnergyError> {
        if query_coords.len() != self.n_residues() {
            return Err(EnergyError::ShapeMismatch {
                native: self.n_residues(),
                query: query_coords.len(),
            });
        }
        let query_distances = geometry::distance_matrix(query_coords);
        let diff = &self.native_distances - query_distances;
        Ok(self
            .stiffness
            .zip_map(&diff, |k, d| self.k_scale * k * d * d))
    }
}

fn build_stiffness(
    native_distances: &DMatrix<f64>,
    exclusions: &ChainBreakExclusions,
    cutoff: f64,
) -> DMatrix<f64> {
    let n = native_distances.nrows();
    let mut stiffness = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let k = if j - i <= BACKBONE_SPAN && !exclusions.contains(i, j) {
                BACKBONE_FORCE_CONSTANT / ((j - i) as f64).powi(2)
            } else if native_distances[(i, j)] > cutoff {
                0.0
            } else {
                let d = native_distances[(i, j)].max(CONTACT_DISTANCE_FLOOR);
                (CONTACT_SIGMA / d).powi(6)
            };
            stiffness[(i, j)] = k;
            stiffness[(j, i)] = k;
        }
    }
    stiffness
}
