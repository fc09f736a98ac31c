//! # Rotational Sweep
//!
//! Revolves a polygonal dataset around the Z axis to create new polygonal
//! primitives. Sweeping a line produces a cylindrical shell; sweeping a
//! circle produces a torus. Adding axial translation models springs and
//! corkscrews; a delta radius widens or narrows the sweep as it advances.
//!
//! ## Algorithm
//!
//! 1. Every input point is copied once per angular step, rotated about Z
//!    with its radius and height interpolated linearly over the sweep
//! 2. Free edges and polyline segments each generate a band of quads
//!    joining consecutive rings; vertex cells generate lines
//! 3. With capping on, the original 2D cells close the swept volume at the
//!    first and last ring
//!
//! A sweep over an exact multiple of 360 degrees with no translation and
//! no radius change closes on itself: the terminal ring re-uses ring 0, and
//! capping is skipped because the cap would be interior to a closed
//! surface.

use config::constants::{DEFAULT_RESOLUTION, FULL_TURN_DEGREES, MIN_RESOLUTION};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::assembler::SweepAssembler;
use super::{check_input, emit_caps};
use crate::error::MeshError;
use crate::mesh::{CellKind, PolyMesh};
use crate::topology;

/// Parameters for a rotational sweep.
///
/// The struct is caller-owned configuration, never mutated by the filter;
/// out-of-range values are clamped where they are used. One value can
/// therefore drive concurrent sweeps of separate meshes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationalSweepParams {
    /// Number of intermediate angular steps (minimum 1, clamped at use)
    pub resolution: u32,
    /// Close the swept volume with the generating geometry at both ends
    pub capping: bool,
    /// Total sweep angle in degrees
    pub angle: f64,
    /// Total translation along the Z axis over the sweep
    pub translation: f64,
    /// Total change in radius over the sweep
    pub delta_radius: f64,
}

impl Default for RotationalSweepParams {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            capping: true,
            angle: FULL_TURN_DEGREES,
            translation: 0.0,
            delta_radius: 0.0,
        }
    }
}

/// Revolves a polygonal dataset around the Z axis.
///
/// The skirt is generated from topological features of the input: free
/// edges (edges used by exactly one polygon or triangle strip) and
/// polylines sweep into quad panels, vertex cells sweep into lines. Point
/// and cell attributes are carried onto every generated point and cell.
///
/// Objects with no free edges (a sphere, say) produce two separate
/// surfaces when capping is on, or no surface at all when it is off. An
/// input with no points or no cells produces an empty mesh.
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
/// use polykit_mesh::ops::sweep::{rotational_sweep, RotationalSweepParams};
///
/// // A vertical segment at radius 1 sweeps into a cylindrical shell.
/// let mut profile = PolyMesh::new();
/// profile.add_point(DVec3::new(1.0, 0.0, 0.0));
/// profile.add_point(DVec3::new(1.0, 0.0, 1.0));
/// profile.add_line(&[0, 1]);
///
/// let params = RotationalSweepParams { resolution: 16, ..Default::default() };
/// let shell = rotational_sweep(&profile, &params).unwrap();
/// assert_eq!(shell.point_count(), 2 * 16);
/// assert_eq!(shell.polys().len(), 16);
/// ```
pub fn rotational_sweep(
    input: &PolyMesh,
    params: &RotationalSweepParams,
) -> Result<PolyMesh, MeshError> {
    let resolution = params.resolution.max(MIN_RESOLUTION) as usize;

    if input.point_count() == 0 || input.cell_count() == 0 {
        log::debug!("rotational_sweep: no data to sweep, returning empty mesh");
        return Ok(PolyMesh::new());
    }
    check_input(input)?;

    // A full revolution that neither translates nor changes radius closes
    // on itself: the terminal ring is the initial ring, and a cap would be
    // interior to the closed surface.
    let closed = params.angle % FULL_TURN_DEGREES == 0.0
        && params.delta_radius == 0.0
        && params.translation == 0.0;
    let capping = params.capping && !closed;
    let rings = if closed { resolution } else { resolution + 1 };

    let num_pts = input.point_count();
    let mut asm = SweepAssembler::new(input, num_pts * rings);

    // Ring 0 is the input verbatim; later rings advance azimuth, radius,
    // and height linearly with the step fraction.
    for (i, &p) in input.points().iter().enumerate() {
        asm.add_point(p, i as u32);
    }
    for ring in 1..rings {
        let t = ring as f64 / resolution as f64;
        let azimuth = (params.angle * t).to_radians();
        let dz = params.translation * t;
        let dr = params.delta_radius * t;
        for (i, &p) in input.points().iter().enumerate() {
            asm.add_point(sweep_point(p, azimuth, dz, dr), i as u32);
        }
    }

    // Output index of input point `p` on ring `ring`; on a closed sweep
    // the terminal ring wraps back onto ring 0.
    let ring_point = |ring: usize, p: u32| ((ring % rings) * num_pts) as u32 + p;

    let edges = topology::free_edges(input);
    for edge in &edges {
        for ring in 0..resolution {
            asm.add_poly(
                &[
                    ring_point(ring, edge.a),
                    ring_point(ring, edge.b),
                    ring_point(ring + 1, edge.b),
                    ring_point(ring + 1, edge.a),
                ],
                edge.cell_id,
            );
        }
    }

    for (i, line) in input.lines().iter().enumerate() {
        let cell_id = input.cell_id(CellKind::Line, i);
        for seg in line.windows(2) {
            for ring in 0..resolution {
                asm.add_poly(
                    &[
                        ring_point(ring, seg[0]),
                        ring_point(ring, seg[1]),
                        ring_point(ring + 1, seg[1]),
                        ring_point(ring + 1, seg[0]),
                    ],
                    cell_id,
                );
            }
        }
    }

    for (i, vert) in input.verts().iter().enumerate() {
        let cell_id = input.cell_id(CellKind::Vertex, i);
        for &p in vert {
            for ring in 0..resolution {
                asm.add_line(&[ring_point(ring, p), ring_point(ring + 1, p)], cell_id);
            }
        }
    }

    if capping {
        emit_caps(&mut asm, input, (resolution * num_pts) as u32);
    }

    log::debug!(
        "rotational_sweep: {} rings, {} free edges, capping {}",
        rings,
        edges.len(),
        capping
    );
    Ok(asm.finish())
}

/// Transforms one point by one sweep step.
///
/// The point is taken to cylindrical form about Z, its azimuth advanced,
/// its radius offset, and its height translated.
fn sweep_point(p: DVec3, azimuth: f64, dz: f64, dr: f64) -> DVec3 {
    let radius = p.x.hypot(p.y);
    // Points on the axis only translate; they have no radius to grow.
    if radius == 0.0 {
        return DVec3::new(0.0, 0.0, p.z + dz);
    }
    let theta = p.y.atan2(p.x) + azimuth;
    let r = radius + dr;
    DVec3::new(r * theta.cos(), r * theta.sin(), p.z + dz)
}
