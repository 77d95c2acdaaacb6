//! # Workflows Module
//!
//! The public, user-facing layer. Workflows tie the `engine` and `core`
//! together into complete procedures: reconstructing a backbone chain from
//! angle encodings (or straight from an upstream predictor), and comparing a
//! reconstructed chain against a reference structure.

pub mod compare;
pub mod reconstruct;
