//! Terrain mesh storage.
//!
//! This module provides [`TerrainMesh`], an indexed heightfield triangle
//! mesh over a rectangular [`Domain`]. The mesh stores vertex positions and
//! normals as parallel arrays indexed by [`VertexId`], plus the triangle
//! list and a duplicated wireframe edge list derived from it.
//!
//! A mesh is built once, fully, by the construction pipeline (see
//! [`crate::algo::generate`]); afterwards it is read-only as far as external
//! consumers are concerned. A renderer pulls flat buffer views for upload
//! and never mutates the mesh.

use std::fmt;

use nalgebra::{Point3, Vector3};

use super::index::{EdgeId, FaceId, MeshIndex, VertexId};

/// Axis-aligned rectangular domain in the XY plane.
///
/// The terrain lattice spans `[min_x, max_x] x [min_y, max_y]`; elevation
/// (z) is unconstrained. A domain is degenerate when either extent is zero
/// or negative, which grid construction rejects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl Domain {
    /// Create a new domain rectangle.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Extent along the X axis.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along the Y axis.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether either extent is zero or negative.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }
}

/// An indexed heightfield terrain mesh.
///
/// Vertices form a regular `(div+1) x (div+1)` lattice over the domain
/// rectangle; the vertex at row `i`, column `j` has id `i * (div + 1) + j`.
/// Each grid cell is split into two counter-clockwise triangles along a
/// fixed diagonal. The edge list holds three edges per face, duplicates
/// included, for wireframe line rendering.
///
/// The index type parameter `I` selects the width of raw indices, matching
/// the GPU index buffer format the mesh will be uploaded into.
#[derive(Debug, Clone)]
pub struct TerrainMesh<I: MeshIndex = u32> {
    pub(crate) div: usize,
    pub(crate) domain: Domain,
    pub(crate) positions: Vec<Point3<f64>>,
    pub(crate) normals: Vec<Vector3<f64>>,
    pub(crate) faces: Vec<[VertexId<I>; 3]>,
    pub(crate) edges: Vec<[VertexId<I>; 2]>,
}

impl<I: MeshIndex> TerrainMesh<I> {
    /// Number of vertices in the mesh, `(div + 1)^2`.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh, `2 * div^2`.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of wireframe edges, `3 * num_faces()` (duplicates included).
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Subdivision count along each axis.
    #[inline]
    pub fn div(&self) -> usize {
        self.div
    }

    /// The domain rectangle the lattice spans.
    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Position of a vertex.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn position(&self, v: VertexId<I>) -> &Point3<f64> {
        &self.positions[v.index()]
    }

    /// Normal of a vertex. Zero until normal estimation has run; unit
    /// length afterwards for every vertex with at least one incident face.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn normal(&self, v: VertexId<I>) -> &Vector3<f64> {
        &self.normals[v.index()]
    }

    /// Vertex ids of a triangle, in counter-clockwise order.
    ///
    /// # Panics
    /// Panics if `f` is out of range.
    #[inline]
    pub fn face(&self, f: FaceId<I>) -> [VertexId<I>; 3] {
        self.faces[f.index()]
    }

    /// Endpoints of a wireframe edge.
    ///
    /// # Panics
    /// Panics if `e` is out of range.
    #[inline]
    pub fn edge(&self, e: EdgeId<I>) -> [VertexId<I>; 2] {
        self.edges[e.index()]
    }

    /// All vertex positions, indexed by vertex id.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// All vertex normals, indexed by vertex id.
    #[inline]
    pub fn normals(&self) -> &[Vector3<f64>] {
        &self.normals
    }

    /// All triangles as vertex id triples.
    #[inline]
    pub fn faces(&self) -> &[[VertexId<I>; 3]] {
        &self.faces
    }

    /// All wireframe edges as vertex id pairs.
    #[inline]
    pub fn edges(&self) -> &[[VertexId<I>; 2]] {
        &self.edges
    }

    /// Iterate over all vertex ids.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> {
        (0..self.positions.len()).map(VertexId::new)
    }

    /// Iterate over all face ids.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> {
        (0..self.faces.len()).map(FaceId::new)
    }

    /// Id of the lattice vertex at row `i`, column `j`.
    ///
    /// Encodes the `i * (div + 1) + j` layout so renderer-side code does
    /// not have to re-derive it.
    ///
    /// # Panics
    /// Panics if `i` or `j` exceeds `div`.
    pub fn grid_id(&self, i: usize, j: usize) -> VertexId<I> {
        assert!(
            i <= self.div && j <= self.div,
            "grid coordinate ({}, {}) outside lattice of side {}",
            i,
            j,
            self.div + 1
        );
        VertexId::new(i * (self.div + 1) + j)
    }

    /// Smallest z coordinate over all vertices.
    ///
    /// Used by renderers to normalize color-by-elevation shading and to
    /// scale fog.
    pub fn min_elevation(&self) -> f64 {
        self.positions.iter().fold(f64::INFINITY, |m, p| m.min(p.z))
    }

    /// Largest z coordinate over all vertices.
    pub fn max_elevation(&self) -> f64 {
        self.positions
            .iter()
            .fold(f64::NEG_INFINITY, |m, p| m.max(p.z))
    }

    /// Flat `[x, y, z, x, y, z, ...]` position buffer for GPU upload.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Flat `[nx, ny, nz, ...]` normal buffer for GPU upload.
    pub fn normal_buffer(&self) -> Vec<f32> {
        self.normals
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }

    /// Flat triangle index buffer, three raw indices per face.
    pub fn face_index_buffer(&self) -> Vec<I> {
        self.faces
            .iter()
            .flat_map(|f| f.iter().map(|v| v.raw()))
            .collect()
    }

    /// Flat line index buffer, two raw indices per wireframe edge.
    pub fn edge_index_buffer(&self) -> Vec<I> {
        self.edges
            .iter()
            .flat_map(|e| e.iter().map(|v| v.raw()))
            .collect()
    }
}

/// Debug listing of the mesh buffers: one `v x y z` line per vertex, one
/// `vn x y z` line per normal, one `f a b c` line per triangle (0-based
/// ids). Intended for eyeballing small meshes, not as a file format.
impl<I: MeshIndex> fmt::Display for TerrainMesh<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.positions {
            writeln!(f, "v {} {} {}", p.x, p.y, p.z)?;
        }
        for n in &self.normals {
            writeln!(f, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        for [a, b, c] in &self.faces {
            writeln!(f, "f {} {} {}", a.index(), b.index(), c.index())?;
        }
        Ok(())
    }
}
