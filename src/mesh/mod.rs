//! Core mesh data structures.
//!
//! This module provides the indexed heightfield representation and related
//! types for terrain meshes.
//!
//! # Overview
//!
//! The primary type is [`TerrainMesh`], an indexed triangle mesh whose
//! vertices form a regular lattice over a rectangular [`Domain`]. Positions
//! and normals are stored as parallel arrays indexed by vertex id, with the
//! triangle list and a duplicated wireframe edge list alongside, matching
//! the flat buffer layout renderers upload to the GPU.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`FaceId`] - Identifies a triangle
//! - [`EdgeId`] - Identifies a wireframe edge
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`]
//! trait), so the mesh can match a `u16`, `u32`, or `u64` index buffer
//! format.
//!
//! # Construction
//!
//! A flat grid is built with [`build_grid`]; the full sculpted terrain comes
//! from [`crate::algo::generate`], which runs every construction stage in
//! order:
//!
//! ```
//! use faultline::mesh::{build_grid, Domain, TerrainMesh};
//!
//! let mesh: TerrainMesh = build_grid(8, Domain::new(-1.0, 1.0, -1.0, 1.0)).unwrap();
//! assert_eq!(mesh.num_vertices(), 81);
//! ```

mod grid;
mod index;
mod terrain;

pub use grid::{build_grid, extract_edges};
pub use index::{EdgeId, FaceId, MeshIndex, VertexId};
pub use terrain::{Domain, TerrainMesh};
