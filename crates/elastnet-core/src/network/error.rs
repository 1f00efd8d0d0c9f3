use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnergyError {
    #[error("Query conformation has {query} residues but the native structure has {native}")]
    ShapeMismatch { native: usize, query: usize },
}
