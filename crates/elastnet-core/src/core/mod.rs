//! # Core Module
//!
//! Stateless building blocks shared by both elastic network variants.
//!
//! - **Geometry** ([`geometry`]) - The full pairwise Euclidean distance
//!   matrix of a conformation, the single derived quantity both models are
//!   built from and evaluated against.
//! - **Parameters** ([`params`]) - Tunable model parameters with defaults
//!   matching the published model, deserializable from TOML.

pub mod geometry;
pub mod params;
