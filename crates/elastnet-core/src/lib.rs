//! # Elastnet
//!
//! A library for evaluating coarse-grained elastic network model (ENM)
//! energies of biomolecular structures. Given a native (reference)
//! conformation, an ENM treats every retained residue pair as a harmonic
//! spring at its native length; the energy of a query conformation is the
//! stiffness-weighted sum of squared deviations of every pairwise distance
//! from its native value.
//!
//! Two model variants are provided:
//!
//! - **[`network::edenm::EdenmModel`]** — an Essential-Dynamics ENM with
//!   sequence-aware short-range stiffness, a density-dependent interaction
//!   cutoff, and an exclusion zone around a chain break.
//! - **[`network::anm::AnmModel`]** — an Anisotropic Network Model with a
//!   single global cutoff and uniform spring constant.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless geometry utilities (the
//!   pairwise distance matrix) and model parameter structures with TOML
//!   loading.
//! - **[`network`]: The Models.** The two elastic network variants, their
//!   stiffness-matrix construction rules, and evaluation errors. Models are
//!   built eagerly from native coordinates and are immutable thereafter;
//!   energy evaluation is a pure function of a model and a query
//!   conformation.
//!
//! The library computes scalar energies (and, for EDENM, a per-pair energy
//! breakdown) only: no forces, no minimization, no file parsing.

pub mod core;
pub mod network;
