//! # Network Module
//!
//! The two elastic network model variants and their supporting pieces.
//!
//! Both models follow the same lifecycle: construction takes a native
//! conformation, eagerly derives the native distance matrix and the
//! stiffness matrix, and returns an immutable model value. Energy
//! evaluation takes a query conformation of the same length and returns a
//! harmonic penalty for the deviation of every retained pairwise distance
//! from its native value. The variants differ only in how stiffness is
//! assigned:
//!
//! - [`edenm`] - sequence-aware short-range springs, a density-dependent
//!   cutoff, and chain-break exclusions ([`exclusions`]).
//! - [`anm`] - a uniform spring constant inside a single global cutoff.

pub mod anm;
pub mod edenm;
mod error;
pub mod exclusions;

pub use error::EnergyError;
