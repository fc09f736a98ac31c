//! # Polykit Mesh
//!
//! Polygonal mesh model and modelling filters for the polykit pipeline.
//!
//! ## Architecture
//!
//! ```text
//! PolyMesh (input) → topology (free edges) → ops::sweep (filters) → PolyMesh (output)
//! ```
//!
//! A [`PolyMesh`] holds points plus four independent cell collections
//! (vertices, lines, polygons, triangle strips) and named attribute arrays
//! on both points and cells. Filters are plain functions taking a read-only
//! input mesh and an immutable parameter struct, returning a freshly built
//! output mesh; one parameter value can therefore drive concurrent sweeps
//! of separate meshes without locking.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use polykit_mesh::PolyMesh;
//! use polykit_mesh::ops::sweep::{rotational_sweep, RotationalSweepParams};
//!
//! // A single line segment off the axis sweeps into a cylindrical shell.
//! let mut profile = PolyMesh::new();
//! profile.add_point(DVec3::new(1.0, 0.0, 0.0));
//! profile.add_point(DVec3::new(1.0, 0.0, 1.0));
//! profile.add_line(&[0, 1]);
//!
//! let shell = rotational_sweep(&profile, &RotationalSweepParams::default()).unwrap();
//! assert!(shell.polys().len() > 0);
//! ```

pub mod attributes;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod topology;

pub use attributes::{AttributeArray, AttributeSet};
pub use error::MeshError;
pub use mesh::{CellArray, CellKind, PolyMesh};
