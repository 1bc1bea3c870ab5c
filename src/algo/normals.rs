//! Area-weighted vertex normal estimation.
//!
//! Per-vertex normals are formed by summing the unnormalized cross products
//! of each incident triangle's edge vectors and normalizing the result. The
//! magnitude of an unnormalized cross product is proportional to triangle
//! area, so larger triangles contribute more to their corners' normals
//! without any explicit weighting.

use nalgebra::Vector3;
use rayon::prelude::*;

use crate::mesh::{MeshIndex, TerrainMesh};

/// Assign each vertex a unit normal consistent with the current geometry.
///
/// Resets every accumulator to zero, adds each face's unnormalized normal
/// `(b - a) x (c - a)` to the face's three corners, then normalizes every
/// nonzero accumulator. A vertex with no well-formed incident faces keeps
/// the zero vector, which is accepted degenerate output rather than an
/// error.
///
/// This must run after all elevation mutation is complete; estimating
/// normals before sculpting yields normals for the flat pre-sculpt grid.
///
/// # Example
///
/// ```
/// use faultline::algo::normals::compute_normals;
/// use faultline::mesh::{build_grid, Domain, TerrainMesh, VertexId};
///
/// let mut mesh: TerrainMesh = build_grid(2, Domain::new(-1.0, 1.0, -1.0, 1.0)).unwrap();
/// compute_normals(&mut mesh);
/// // A flat grid faces straight up.
/// let n = mesh.normal(VertexId::new(0));
/// assert!((n.z - 1.0).abs() < 1e-12);
/// ```
pub fn compute_normals<I: MeshIndex>(mesh: &mut TerrainMesh<I>) {
    for n in &mut mesh.normals {
        *n = Vector3::zeros();
    }

    // Accumulation scatters into shared corners, so it stays sequential;
    // the per-vertex normalization below is independent and parallelizes.
    for &[a, b, c] in &mesh.faces {
        let pa = mesh.positions[a.index()];
        let pb = mesh.positions[b.index()];
        let pc = mesh.positions[c.index()];

        let face_normal = (pb - pa).cross(&(pc - pa));
        mesh.normals[a.index()] += face_normal;
        mesh.normals[b.index()] += face_normal;
        mesh.normals[c.index()] += face_normal;
    }

    mesh.normals.par_iter_mut().for_each(|n| {
        let len = n.norm();
        if len > 0.0 {
            *n /= len;
        }
    });
}
