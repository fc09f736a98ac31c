//! # Mesh Errors
//!
//! Error types for mesh filter operations.
//!
//! Bounded numeric parameters are clamped rather than rejected, and
//! degenerate geometry yields a minimal output mesh, so these errors cover
//! only genuine input inconsistencies. A filter that fails publishes no
//! partial output.

use thiserror::Error;

/// Errors that can occur while running a mesh filter.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A cell references a point index outside the mesh's point collection,
    /// or a cell is too short for its kind.
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// An attribute array's tuple count disagrees with the collection it is
    /// attached to.
    #[error("Attribute mismatch: {message}")]
    AttributeMismatch { message: String },
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates an attribute mismatch error.
    pub fn attribute_mismatch(message: impl Into<String>) -> Self {
        Self::AttributeMismatch {
            message: message.into(),
        }
    }
}
