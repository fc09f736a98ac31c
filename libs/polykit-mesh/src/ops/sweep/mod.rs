//! # Sweep Operations
//!
//! Filters that sweep a polygonal dataset into a new surface:
//! - **rotational_sweep**: Revolve the input around the Z axis, with
//!   optional axial translation (springs, corkscrews) and radius change
//! - **linear_sweep**: Displace the input along a fixed vector
//!
//! ## Algorithm
//!
//! Both filters generate a "skirt" from the same topological seeds: free
//! edges (edges used by exactly one polygon or triangle strip) and
//! polylines generate surface panels, vertex cells generate lines. When
//! capping is on, the original 2D cells are re-emitted at the first and
//! last ring to close the swept volume.

mod assembler;
mod linear;
mod rotational;

#[cfg(test)]
mod tests;

pub use linear::{linear_sweep, LinearSweepParams};
pub use rotational::{rotational_sweep, RotationalSweepParams};

use assembler::SweepAssembler;

use crate::error::MeshError;
use crate::mesh::{CellKind, PolyMesh};

/// Rejects input a sweep cannot index safely.
///
/// The engines index points and attribute tuples directly, so a cell
/// referencing a missing point or an attribute array of the wrong length
/// must fail the whole call before any output is built.
fn check_input(input: &PolyMesh) -> Result<(), MeshError> {
    if !input.validate() {
        return Err(MeshError::invalid_topology(
            "input cell references a point outside the mesh",
        ));
    }
    for array in input.point_data().arrays() {
        if array.len() != input.point_count() {
            return Err(MeshError::attribute_mismatch(format!(
                "point array '{}' has {} tuples for {} points",
                array.name(),
                array.len(),
                input.point_count()
            )));
        }
    }
    for array in input.cell_data().arrays() {
        if array.len() != input.cell_count() {
            return Err(MeshError::attribute_mismatch(format!(
                "cell array '{}' has {} tuples for {} cells",
                array.name(),
                array.len(),
                input.cell_count()
            )));
        }
    }
    Ok(())
}

/// Re-emits the input's 2D cells as end caps.
///
/// The start cap sits on ring 0 with its winding flipped so both caps face
/// outward: polygons reverse their loop, strips get a duplicated lead
/// vertex (the extra degenerate triangle shifts the strip's parity). The
/// end cap re-uses the original index order shifted to the terminal ring.
fn emit_caps(asm: &mut SweepAssembler<'_>, input: &PolyMesh, terminal_base: u32) {
    for (i, poly) in input.polys().iter().enumerate() {
        let cell_id = input.cell_id(CellKind::Polygon, i);
        let flipped: Vec<u32> = poly.iter().rev().copied().collect();
        asm.add_poly(&flipped, cell_id);
    }
    for (i, strip) in input.strips().iter().enumerate() {
        let cell_id = input.cell_id(CellKind::TriangleStrip, i);
        let mut flipped = Vec::with_capacity(strip.len() + 1);
        flipped.push(strip[0]);
        flipped.extend_from_slice(strip);
        asm.add_strip(&flipped, cell_id);
    }

    for (i, poly) in input.polys().iter().enumerate() {
        let cell_id = input.cell_id(CellKind::Polygon, i);
        let shifted: Vec<u32> = poly.iter().map(|&p| p + terminal_base).collect();
        asm.add_poly(&shifted, cell_id);
    }
    for (i, strip) in input.strips().iter().enumerate() {
        let cell_id = input.cell_id(CellKind::TriangleStrip, i);
        let shifted: Vec<u32> = strip.iter().map(|&p| p + terminal_base).collect();
        asm.add_strip(&shifted, cell_id);
    }
}
