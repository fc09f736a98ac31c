//! # Mesh Operations
//!
//! Modelling filters consuming one polygonal mesh and producing another.

pub mod sweep;

pub use sweep::{linear_sweep, rotational_sweep, LinearSweepParams, RotationalSweepParams};
