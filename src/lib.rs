//! # Faultline
//!
//! A procedural terrain mesh generation library built around the classic
//! fault-formation algorithm.
//!
//! Faultline builds a regular grid mesh over a rectangular domain, sculpts
//! it into plausible landscape relief with randomly oriented fault-plane
//! cuts of geometrically decaying amplitude, and derives area-weighted
//! per-vertex normals from the resulting triangles. The output is pure
//! data - positions, normals, triangle indices, and a wireframe edge list -
//! laid out for upload into GPU vertex and index buffers by whatever
//! renderer sits on top.
//!
//! ## Features
//!
//! - **Indexed heightfield meshes**: parallel position/normal arrays with
//!   type-safe vertex, face, and edge indices
//! - **Flexible indexing**: 16-bit, 32-bit, and 64-bit raw indices to match
//!   the target index buffer format
//! - **Reproducible sculpting**: the caller injects the random source, so a
//!   seeded generator replays the exact same terrain
//! - **Wireframe support**: a duplicated per-triangle edge list for line
//!   rendering, independent of sculpting
//!
//! ## Quick Start
//!
//! ```
//! use faultline::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mesh: TerrainMesh =
//!     generate(50, Domain::new(-1.0, 1.0, -1.0, 1.0), &FaultOptions::default(), &mut rng)
//!         .unwrap();
//!
//! // Query mesh properties
//! assert_eq!(mesh.num_vertices(), 51 * 51);
//! assert_eq!(mesh.num_faces(), 2 * 50 * 50);
//!
//! // Flat buffers, ready for GPU upload
//! let positions = mesh.position_buffer();
//! let triangles = mesh.face_index_buffer();
//! assert_eq!(positions.len(), 3 * mesh.num_vertices());
//! assert_eq!(triangles.len(), 3 * mesh.num_faces());
//! ```
//!
//! ## Building Without Sculpting
//!
//! The flat grid stage is exposed on its own for callers that want the
//! lattice and triangulation without relief:
//!
//! ```
//! use faultline::mesh::{build_grid, Domain, TerrainMesh};
//!
//! let mesh: TerrainMesh = build_grid(8, Domain::new(0.0, 4.0, 0.0, 4.0)).unwrap();
//! assert_eq!(mesh.min_elevation(), 0.0);
//! assert_eq!(mesh.max_elevation(), 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use faultline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::fault::{fault_cut, fault_sculpt, FaultOptions};
    pub use crate::algo::normals::compute_normals;
    pub use crate::algo::{generate, Progress};
    pub use crate::error::{Result, TerrainError};
    pub use crate::mesh::{
        build_grid, extract_edges, Domain, EdgeId, FaceId, MeshIndex, TerrainMesh, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::prelude::*;

    #[test]
    fn test_full_pipeline() {
        let mut rng = StdRng::seed_from_u64(2026);
        let div = 16;
        let mesh: TerrainMesh = generate(
            div,
            Domain::new(-1.0, 1.0, -1.0, 1.0),
            &FaultOptions::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(mesh.num_vertices(), (div + 1) * (div + 1));
        assert_eq!(mesh.num_faces(), 2 * div * div);
        assert_eq!(mesh.num_edges(), 3 * mesh.num_faces());

        // Sculpting produced relief and normals are unit length.
        assert!(mesh.min_elevation() < mesh.max_elevation());
        for v in mesh.vertex_ids() {
            let len = mesh.normal(v).norm();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_pipeline_is_reproducible() {
        let options = FaultOptions::default();
        let domain = Domain::new(-50.0, 50.0, -50.0, 50.0);

        let a: TerrainMesh =
            generate(20, domain, &options, &mut StdRng::seed_from_u64(9)).unwrap();
        let b: TerrainMesh =
            generate(20, domain, &options, &mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.normals(), b.normals());
        assert_eq!(a.face_index_buffer(), b.face_index_buffer());
    }

    #[test]
    fn test_invalid_domains_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let options = FaultOptions::default();

        let flat = generate::<u32, _>(0, Domain::new(-1.0, 1.0, -1.0, 1.0), &options, &mut rng);
        assert!(matches!(flat, Err(TerrainError::InvalidSubdivisions { div: 0 })));

        let thin = generate::<u32, _>(8, Domain::new(1.0, -1.0, -1.0, 1.0), &options, &mut rng);
        assert!(matches!(thin, Err(TerrainError::DegenerateDomain { .. })));
    }

    #[test]
    fn test_u16_indices() {
        let mut rng = StdRng::seed_from_u64(3);
        let mesh: TerrainMesh<u16> = generate(
            8,
            Domain::new(-1.0, 1.0, -1.0, 1.0),
            &FaultOptions::default(),
            &mut rng,
        )
        .unwrap();

        let buffer: Vec<u16> = mesh.face_index_buffer();
        assert_eq!(buffer.len(), 3 * mesh.num_faces());
        assert!(buffer.iter().all(|&i| (i as usize) < mesh.num_vertices()));
    }
}
