//! # Linear Sweep
//!
//! Displaces a polygonal dataset along a fixed vector to create new
//! polygonal primitives; the translational companion to the rotational
//! sweep. Sweeping a polygon produces a prism, a line produces a ribbon, a
//! vertex produces a line.
//!
//! ## Algorithm
//!
//! 1. The input points form the base ring; one displaced copy forms the top
//! 2. Free edges and polyline segments each generate one quad; vertex
//!    cells generate one line per point
//! 3. With capping on, the original 2D cells close the swept volume at
//!    both ends

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::assembler::SweepAssembler;
use super::{check_input, emit_caps};
use crate::error::MeshError;
use crate::mesh::{CellKind, PolyMesh};
use crate::topology;

/// Parameters for a linear sweep.
///
/// Caller-owned and never mutated by the filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSweepParams {
    /// Direction (and, with a unit scale factor, distance) of the sweep
    pub vector: DVec3,
    /// Multiplier applied to the vector
    pub scale_factor: f64,
    /// Close the swept volume with the generating geometry at both ends
    pub capping: bool,
}

impl Default for LinearSweepParams {
    fn default() -> Self {
        Self {
            vector: DVec3::Z,
            scale_factor: 1.0,
            capping: true,
        }
    }
}

/// Displaces a polygonal dataset along a vector.
///
/// Uses the same topological seeds as the rotational sweep: free edges and
/// polylines generate quad panels between the base and displaced copies of
/// the input points, vertex cells generate lines, and capping re-emits the
/// original 2D cells at both ends. A zero vector or zero scale factor is
/// degenerate but valid; the two rings then coincide.
///
/// # Arguments
///
/// * `input` - The dataset to sweep (read-only)
/// * `params` - Sweep parameters
///
/// # Returns
///
/// A freshly built mesh owned by the caller.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use polykit_mesh::PolyMesh;
/// use polykit_mesh::ops::sweep::{linear_sweep, LinearSweepParams};
///
/// let mut profile = PolyMesh::new();
/// profile.add_point(DVec3::new(0.0, 0.0, 0.0));
/// profile.add_point(DVec3::new(1.0, 0.0, 0.0));
/// profile.add_point(DVec3::new(0.0, 1.0, 0.0));
/// profile.add_poly(&[0, 1, 2]);
///
/// let prism = linear_sweep(&profile, &LinearSweepParams::default()).unwrap();
/// assert_eq!(prism.point_count(), 6);
/// assert_eq!(prism.polys().len(), 3 + 2); // skirt + caps
/// ```
pub fn linear_sweep(input: &PolyMesh, params: &LinearSweepParams) -> Result<PolyMesh, MeshError> {
    if input.point_count() == 0 || input.cell_count() == 0 {
        log::debug!("linear_sweep: no data to sweep, returning empty mesh");
        return Ok(PolyMesh::new());
    }
    check_input(input)?;

    let offset = params.scale_factor * params.vector;
    let num_pts = input.point_count();
    let mut asm = SweepAssembler::new(input, num_pts * 2);

    for (i, &p) in input.points().iter().enumerate() {
        asm.add_point(p, i as u32);
    }
    for (i, &p) in input.points().iter().enumerate() {
        asm.add_point(p + offset, i as u32);
    }

    let top = |p: u32| p + num_pts as u32;

    let edges = topology::free_edges(input);
    for edge in &edges {
        asm.add_poly(
            &[edge.a, edge.b, top(edge.b), top(edge.a)],
            edge.cell_id,
        );
    }

    for (i, line) in input.lines().iter().enumerate() {
        let cell_id = input.cell_id(CellKind::Line, i);
        for seg in line.windows(2) {
            asm.add_poly(&[seg[0], seg[1], top(seg[1]), top(seg[0])], cell_id);
        }
    }

    for (i, vert) in input.verts().iter().enumerate() {
        let cell_id = input.cell_id(CellKind::Vertex, i);
        for &p in vert {
            asm.add_line(&[p, top(p)], cell_id);
        }
    }

    if params.capping {
        emit_caps(&mut asm, input, num_pts as u32);
    }

    log::debug!(
        "linear_sweep: {} free edges, capping {}",
        edges.len(),
        params.capping
    );
    Ok(asm.finish())
}
