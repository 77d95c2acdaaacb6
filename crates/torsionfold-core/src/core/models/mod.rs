//! # Data Models
//!
//! Stateless data structures describing the inputs and outputs of backbone
//! reconstruction: per-residue angle encodings, the repeating backbone bond
//! geometry, and the reconstructed chain itself.

pub mod bonds;
pub mod chain;
pub mod encoding;
