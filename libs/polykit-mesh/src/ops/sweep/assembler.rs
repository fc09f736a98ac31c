//! # Output Mesh Assembler
//!
//! Accumulates the points and cells a sweep generates into one output
//! mesh, carrying input attributes onto every copy.
//!
//! Ordering is deterministic: points land ring-major, point-index-minor
//! (the global index of input point `p` on ring `k` is `k * point_count +
//! p`); cells land in engine emission order within each collection. Cell
//! attribute tuples are laid out by the output's global cell numbering
//! (lines, then polygons, then strips; a sweep emits no vertex cells) when
//! the assembler is finished.

use glam::DVec3;

use crate::mesh::PolyMesh;

/// Builds the output mesh of one sweep invocation.
///
/// The whole output is assembled before it is returned; a failed sweep
/// publishes nothing.
pub(super) struct SweepAssembler<'a> {
    input: &'a PolyMesh,
    output: PolyMesh,
    line_sources: Vec<u32>,
    poly_sources: Vec<u32>,
    strip_sources: Vec<u32>,
}

impl<'a> SweepAssembler<'a> {
    /// Creates an assembler expecting roughly `expected_points` points.
    pub(super) fn new(input: &'a PolyMesh, expected_points: usize) -> Self {
        let mut output = PolyMesh::with_point_capacity(expected_points);
        *output.point_data_mut() = input.point_data().empty_like();
        Self {
            input,
            output,
            line_sources: Vec::new(),
            poly_sources: Vec::new(),
            strip_sources: Vec::new(),
        }
    }

    /// Appends a transformed point, copying the source point's attribute
    /// tuple; returns the output point index.
    pub(super) fn add_point(&mut self, position: DVec3, source_point: u32) -> u32 {
        let index = self.output.add_point(position);
        let source = self.input.point_data();
        self.output.point_data_mut().copy_tuple(source, source_point as usize);
        index
    }

    /// Appends a generated polygon owing its attributes to `source_cell`.
    pub(super) fn add_poly(&mut self, cell: &[u32], source_cell: u32) {
        self.output.add_poly(cell);
        self.poly_sources.push(source_cell);
    }

    /// Appends a generated line owing its attributes to `source_cell`.
    pub(super) fn add_line(&mut self, cell: &[u32], source_cell: u32) {
        self.output.add_line(cell);
        self.line_sources.push(source_cell);
    }

    /// Appends a generated strip owing its attributes to `source_cell`.
    pub(super) fn add_strip(&mut self, cell: &[u32], source_cell: u32) {
        self.output.add_strip(cell);
        self.strip_sources.push(source_cell);
    }

    /// Lays out cell attribute data in global cell order and returns the
    /// finished mesh.
    pub(super) fn finish(mut self) -> PolyMesh {
        let mut cell_data = self.input.cell_data().empty_like();
        for &source in self
            .line_sources
            .iter()
            .chain(&self.poly_sources)
            .chain(&self.strip_sources)
        {
            cell_data.copy_tuple(self.input.cell_data(), source as usize);
        }
        *self.output.cell_data_mut() = cell_data;
        self.output
    }
}
