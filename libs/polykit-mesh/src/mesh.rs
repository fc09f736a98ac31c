//! # Mesh Data Structure
//!
//! Polygonal dataset: points plus four independent cell collections
//! (vertices, lines/polylines, polygons, triangle strips) and attribute
//! data on points and cells.
//!
//! All geometry uses f64 precision. Cells reference points by index; the
//! invariant that every referenced index is valid is checked by
//! [`PolyMesh::validate`], not enforced on append.

use glam::DVec3;

use crate::attributes::AttributeSet;

/// A compact collection of index cells.
///
/// Cells are stored as one flat connectivity buffer plus per-cell offsets,
/// so variable-length cells iterate without per-cell allocation.
///
/// # Example
///
/// ```rust
/// use polykit_mesh::CellArray;
///
/// let mut polys = CellArray::new();
/// polys.push(&[0, 1, 2]);
/// polys.push(&[2, 1, 3, 4]);
/// assert_eq!(polys.len(), 2);
/// assert_eq!(polys.cell(1), &[2, 1, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CellArray {
    offsets: Vec<u32>,
    connectivity: Vec<u32>,
}

impl Default for CellArray {
    fn default() -> Self {
        Self::new()
    }
}

impl CellArray {
    /// Creates an empty cell array.
    pub fn new() -> Self {
        Self {
            offsets: vec![0],
            connectivity: Vec::new(),
        }
    }

    /// Creates a cell array with pre-allocated capacity.
    pub fn with_capacity(cell_count: usize, index_count: usize) -> Self {
        let mut offsets = Vec::with_capacity(cell_count + 1);
        offsets.push(0);
        Self {
            offsets,
            connectivity: Vec::with_capacity(index_count),
        }
    }

    /// Returns the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns true if the array holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a cell and returns its index within this array.
    pub fn push(&mut self, cell: &[u32]) -> u32 {
        let index = self.len() as u32;
        self.connectivity.extend_from_slice(cell);
        self.offsets.push(self.connectivity.len() as u32);
        index
    }

    /// Returns the point indices of the cell at the given index.
    #[inline]
    pub fn cell(&self, index: usize) -> &[u32] {
        let start = self.offsets[index] as usize;
        let end = self.offsets[index + 1] as usize;
        &self.connectivity[start..end]
    }

    /// Iterates over cells in append order.
    pub fn iter(&self) -> impl Iterator<Item = &[u32]> {
        (0..self.len()).map(move |i| self.cell(i))
    }
}

/// The four cell kinds of a polygonal dataset.
///
/// Also fixes the global cell numbering order: vertices, then lines, then
/// polygons, then triangle strips. Cell attribute data is indexed by that
/// global id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Vertex,
    Line,
    Polygon,
    TriangleStrip,
}

/// A polygonal mesh: points, four cell collections, and attribute data.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use polykit_mesh::PolyMesh;
///
/// let mut mesh = PolyMesh::new();
/// mesh.add_point(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_point(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_point(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_poly(&[0, 1, 2]);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone)]
pub struct PolyMesh {
    points: Vec<DVec3>,
    verts: CellArray,
    lines: CellArray,
    polys: CellArray,
    strips: CellArray,
    point_data: AttributeSet,
    cell_data: AttributeSet,
}

impl Default for PolyMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl PolyMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            verts: CellArray::new(),
            lines: CellArray::new(),
            polys: CellArray::new(),
            strips: CellArray::new(),
            point_data: AttributeSet::new(),
            cell_data: AttributeSet::new(),
        }
    }

    /// Creates a mesh with pre-allocated point capacity.
    pub fn with_point_capacity(point_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(point_count),
            ..Self::new()
        }
    }

    /// Returns the number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the total number of cells across all four collections.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.verts.len() + self.lines.len() + self.polys.len() + self.strips.len()
    }

    /// Returns true if the mesh has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds a point and returns its index.
    pub fn add_point(&mut self, position: DVec3) -> u32 {
        let index = self.points.len() as u32;
        self.points.push(position);
        index
    }

    /// Returns the point at the given index.
    #[inline]
    pub fn point(&self, index: u32) -> DVec3 {
        self.points[index as usize]
    }

    /// Returns all points.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Adds a vertex cell; returns its index within the vertex collection.
    pub fn add_vert(&mut self, cell: &[u32]) -> u32 {
        self.verts.push(cell)
    }

    /// Adds a line or polyline cell; returns its index within the line
    /// collection.
    pub fn add_line(&mut self, cell: &[u32]) -> u32 {
        self.lines.push(cell)
    }

    /// Adds a polygon cell; returns its index within the polygon collection.
    pub fn add_poly(&mut self, cell: &[u32]) -> u32 {
        self.polys.push(cell)
    }

    /// Adds a triangle strip cell; returns its index within the strip
    /// collection.
    pub fn add_strip(&mut self, cell: &[u32]) -> u32 {
        self.strips.push(cell)
    }

    /// Returns the vertex cells.
    #[inline]
    pub fn verts(&self) -> &CellArray {
        &self.verts
    }

    /// Returns the line cells.
    #[inline]
    pub fn lines(&self) -> &CellArray {
        &self.lines
    }

    /// Returns the polygon cells.
    #[inline]
    pub fn polys(&self) -> &CellArray {
        &self.polys
    }

    /// Returns the triangle strip cells.
    #[inline]
    pub fn strips(&self) -> &CellArray {
        &self.strips
    }

    /// Returns the global cell id of a cell within one of the collections.
    ///
    /// Global ids number cells in the order vertices, lines, polygons,
    /// triangle strips; cell attribute data is indexed by this id.
    pub fn cell_id(&self, kind: CellKind, index: usize) -> u32 {
        let base = match kind {
            CellKind::Vertex => 0,
            CellKind::Line => self.verts.len(),
            CellKind::Polygon => self.verts.len() + self.lines.len(),
            CellKind::TriangleStrip => self.verts.len() + self.lines.len() + self.polys.len(),
        };
        (base + index) as u32
    }

    /// Returns the point attribute data.
    #[inline]
    pub fn point_data(&self) -> &AttributeSet {
        &self.point_data
    }

    /// Returns the point attribute data mutably.
    #[inline]
    pub fn point_data_mut(&mut self) -> &mut AttributeSet {
        &mut self.point_data
    }

    /// Returns the cell attribute data (indexed by global cell id).
    #[inline]
    pub fn cell_data(&self) -> &AttributeSet {
        &self.cell_data
    }

    /// Returns the cell attribute data mutably.
    #[inline]
    pub fn cell_data_mut(&mut self) -> &mut AttributeSet {
        &mut self.cell_data
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.points.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.points[0];
        let mut max = self.points[0];

        for p in &self.points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks that every cell is long enough for its kind (vertices >= 1,
    /// lines >= 2, polygons and strips >= 3 points) and references only
    /// valid point indices.
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let point_count = self.points.len() as u32;
        let check = |cells: &CellArray, min_len: usize| {
            cells
                .iter()
                .all(|cell| cell.len() >= min_len && cell.iter().all(|&p| p < point_count))
        };

        check(&self.verts, 1)
            && check(&self.lines, 2)
            && check(&self.polys, 3)
            && check(&self.strips, 3)
    }
}
