//! # Polykit Random
//!
//! Deterministic pseudo-random sequences for the polykit filter pipeline.
//!
//! Filters that need jitter or sampling draw from an owned sequence object;
//! there is no process-wide generator state, so independent consumers stay
//! reproducible and independent filter instances can run concurrently.
//!
//! ## Usage
//!
//! ```rust
//! use polykit_random::MinimalStandardSequence;
//!
//! let mut seq = MinimalStandardSequence::new();
//! seq.set_seed(42);
//! seq.next();
//! let jitter = seq.range_value(-0.5, 0.5);
//! assert!((-0.5..=0.5).contains(&jitter));
//! ```

pub mod minimal_standard;

pub use minimal_standard::MinimalStandardSequence;
