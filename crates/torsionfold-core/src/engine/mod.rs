//! # Engine Module
//!
//! The logic layer of the library: angle decoding, the sequential backbone
//! extension recurrence, configuration, structured errors, and progress
//! reporting. The recurrence is inherently serial (every atom depends on its
//! three predecessors), so this layer is single-threaded by design.

pub mod config;
pub mod error;
pub mod predictor;
pub mod progress;
pub mod reconstructor;
