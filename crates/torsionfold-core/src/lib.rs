//! # Torsionfold Core Library
//!
//! A library for rebuilding protein backbone structure in Cartesian space from
//! predicted internal coordinates, using the Natural Extension Reference Frame
//! (NeRF) construction.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`AngleEncoding`,
//!   `BondGeometry`, `BackboneChain`), pure closed-form geometry (NeRF placement,
//!   angle measurement, chain deviation), and tabular file I/O.
//!
//! - **[`engine`]: The Logic Core.** This layer drives the reconstruction itself.
//!   It decodes sine/cosine angle encodings into bond and torsion angles and runs
//!   the strictly sequential extension recurrence that places every backbone atom
//!   from its three predecessors, with structured errors and progress reporting.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together into complete procedures:
//!   full-chain reconstruction from angle encodings (or from an upstream angle
//!   predictor) and comparison of reconstructed chains against references.

pub mod core;
pub mod engine;
pub mod workflows;
