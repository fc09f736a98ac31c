//! # Mesh Topology
//!
//! Free-edge extraction for sweep filters.
//!
//! A free edge is an edge used by exactly one polygon or triangle-strip
//! cell; free edges, polylines, and vertex cells are the seeds from which
//! sweep filters generate surface. The edge usage map is keyed by the
//! canonical (min, max) index pair, built per call, and discarded on
//! return.

use std::collections::HashMap;

use crate::mesh::{CellKind, PolyMesh};

/// A boundary edge of the input mesh, in owning-cell traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeEdge {
    /// First point index, as traversed by the owning cell.
    pub a: u32,
    /// Second point index, as traversed by the owning cell.
    pub b: u32,
    /// Global id of the single cell using this edge; sweep filters copy
    /// cell attributes and derive panel winding from it.
    pub cell_id: u32,
}

/// Canonical unordered key for an edge.
#[inline]
fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Calls `visit` with each edge of a polygon loop, in traversal order.
fn polygon_edges(cell: &[u32], mut visit: impl FnMut(u32, u32)) {
    if cell.len() < 2 {
        return;
    }
    for i in 0..cell.len() {
        visit(cell[i], cell[(i + 1) % cell.len()]);
    }
}

/// Calls `visit` with each triangle edge of a strip, in traversal order.
fn strip_edges(cell: &[u32], mut visit: impl FnMut(u32, u32)) {
    for tri in cell.windows(3) {
        visit(tri[0], tri[1]);
        visit(tri[1], tri[2]);
        visit(tri[2], tri[0]);
    }
}

/// Finds all free edges of the mesh.
///
/// Builds an edge usage counter over every polygon edge and every
/// strip-triangle edge, then collects the edges used exactly once, in cell
/// traversal order. Polylines and vertex cells have no free-edge concept
/// and are not reported here; sweep filters read them directly off the
/// mesh.
///
/// A mesh with no polygons or strips yields an empty result; that is not
/// an error.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use polykit_mesh::PolyMesh;
/// use polykit_mesh::topology::free_edges;
///
/// let mut mesh = PolyMesh::new();
/// mesh.add_point(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_point(DVec3::new(2.0, 0.0, 0.0));
/// mesh.add_point(DVec3::new(1.0, 0.0, 1.0));
/// mesh.add_poly(&[0, 1, 2]);
///
/// // A lone triangle's three edges are all free.
/// assert_eq!(free_edges(&mesh).len(), 3);
/// ```
pub fn free_edges(mesh: &PolyMesh) -> Vec<FreeEdge> {
    let mut usage: HashMap<(u32, u32), u32> = HashMap::new();

    for cell in mesh.polys().iter() {
        polygon_edges(cell, |a, b| {
            *usage.entry(edge_key(a, b)).or_insert(0) += 1;
        });
    }
    for cell in mesh.strips().iter() {
        strip_edges(cell, |a, b| {
            *usage.entry(edge_key(a, b)).or_insert(0) += 1;
        });
    }

    let mut edges = Vec::new();

    for (i, cell) in mesh.polys().iter().enumerate() {
        let cell_id = mesh.cell_id(CellKind::Polygon, i);
        polygon_edges(cell, |a, b| {
            if usage[&edge_key(a, b)] == 1 {
                edges.push(FreeEdge { a, b, cell_id });
            }
        });
    }
    for (i, cell) in mesh.strips().iter().enumerate() {
        let cell_id = mesh.cell_id(CellKind::TriangleStrip, i);
        strip_edges(cell, |a, b| {
            if usage[&edge_key(a, b)] == 1 {
                edges.push(FreeEdge { a, b, cell_id });
            }
        });
    }

    edges
}
