//! Regular grid construction for terrain meshes.
//!
//! This module lays out the `(div+1) x (div+1)` vertex lattice over the
//! domain rectangle, triangulates it into an indexed face list, and derives
//! the duplicated wireframe edge list from the faces. The result is a flat
//! mesh (all z = 0, all normals zero) ready for fault sculpting and normal
//! estimation.

use nalgebra::{Point3, Vector3};

use super::index::{MeshIndex, VertexId};
use super::terrain::{Domain, TerrainMesh};
use crate::error::{Result, TerrainError};

/// Build a flat terrain grid over a rectangular domain.
///
/// Vertices are laid out row-major: the vertex at row `i`, column `j`
/// (`0 <= i, j <= div`) has id `i * (div + 1) + j` and position
/// `(min_x + j * dx, min_y + i * dy, 0)` where `dx` and `dy` are the cell
/// extents. Each cell contributes two counter-clockwise triangles sharing
/// the same diagonal in every cell, which gives the mesh a uniform visual
/// grain. Elevations stay at zero and normals at the zero vector until the
/// sculpting and normal estimation stages run.
///
/// # Errors
/// [`TerrainError::InvalidSubdivisions`] if `div < 1`, or
/// [`TerrainError::DegenerateDomain`] if the rectangle has no area.
///
/// # Example
/// ```
/// use faultline::mesh::{build_grid, Domain, TerrainMesh};
///
/// let mesh: TerrainMesh = build_grid(2, Domain::new(-1.0, 1.0, -1.0, 1.0)).unwrap();
/// assert_eq!(mesh.num_vertices(), 9);
/// assert_eq!(mesh.num_faces(), 8);
/// assert_eq!(mesh.num_edges(), 24);
/// ```
pub fn build_grid<I: MeshIndex>(div: usize, domain: Domain) -> Result<TerrainMesh<I>> {
    if div < 1 {
        return Err(TerrainError::InvalidSubdivisions { div });
    }
    if domain.is_degenerate() {
        return Err(TerrainError::DegenerateDomain {
            min_x: domain.min_x,
            max_x: domain.max_x,
            min_y: domain.min_y,
            max_y: domain.max_y,
        });
    }

    let side = div + 1;
    let dx = domain.width() / div as f64;
    let dy = domain.height() / div as f64;

    let mut positions = Vec::with_capacity(side * side);
    let mut faces = Vec::with_capacity(2 * div * div);

    for i in 0..side {
        for j in 0..side {
            positions.push(Point3::new(
                domain.min_x + dx * j as f64,
                domain.min_y + dy * i as f64,
                0.0,
            ));

            // Interior cells only; the last row and column start no cell.
            if i < div && j < div {
                let index = side * i + j;
                faces.push([
                    VertexId::new(index),
                    VertexId::new(index + 1),
                    VertexId::new(index + side),
                ]);
                faces.push([
                    VertexId::new(index + 1),
                    VertexId::new(index + side + 1),
                    VertexId::new(index + side),
                ]);
            }
        }
    }

    let edges = extract_edges(&faces);
    let normals = vec![Vector3::zeros(); positions.len()];

    Ok(TerrainMesh {
        div,
        domain,
        positions,
        normals,
        faces,
        edges,
    })
}

/// Derive the wireframe edge list from a triangle list.
///
/// Emits `(a, b)`, `(b, c)`, `(c, a)` for each face `(a, b, c)`, in face
/// order, without deduplication: edges shared between adjacent triangles
/// appear twice, once per triangle. This is a line-rendering list, not a
/// topological edge set, so the duplication is intentional.
pub fn extract_edges<I: MeshIndex>(faces: &[[VertexId<I>; 3]]) -> Vec<[VertexId<I>; 2]> {
    let mut edges = Vec::with_capacity(3 * faces.len());
    for &[a, b, c] in faces {
        edges.push([a, b]);
        edges.push([b, c]);
        edges.push([c, a]);
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_domain() -> Domain {
        Domain::new(-1.0, 1.0, -1.0, 1.0)
    }

    #[test]
    fn test_counts() {
        for div in [1, 2, 3, 8, 50] {
            let mesh: TerrainMesh = build_grid(div, unit_domain()).unwrap();
            assert_eq!(mesh.num_vertices(), (div + 1) * (div + 1));
            assert_eq!(mesh.num_faces(), 2 * div * div);
            assert_eq!(mesh.num_edges(), 3 * mesh.num_faces());
        }
    }

    #[test]
    fn test_initially_flat() {
        let mesh: TerrainMesh = build_grid(5, unit_domain()).unwrap();
        for v in mesh.vertex_ids() {
            assert_eq!(mesh.position(v).z, 0.0);
            assert_eq!(*mesh.normal(v), Vector3::zeros());
        }
    }

    #[test]
    fn test_lattice_layout() {
        let div = 4;
        let domain = Domain::new(-2.0, 2.0, 1.0, 3.0);
        let mesh: TerrainMesh = build_grid(div, domain).unwrap();

        let dx = domain.width() / div as f64;
        let dy = domain.height() / div as f64;
        for i in 0..=div {
            for j in 0..=div {
                let p = mesh.position(mesh.grid_id(i, j));
                assert!((p.x - (domain.min_x + dx * j as f64)).abs() < 1e-12);
                assert!((p.y - (domain.min_y + dy * i as f64)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_single_cell_triangulation() {
        let mesh: TerrainMesh = build_grid(1, unit_domain()).unwrap();

        // One cell, two triangles sharing the 1 -> 2 diagonal.
        let f0 = mesh.faces()[0].map(|v| v.index());
        let f1 = mesh.faces()[1].map(|v| v.index());
        assert_eq!(f0, [0, 1, 2]);
        assert_eq!(f1, [1, 3, 2]);
    }

    #[test]
    fn test_winding_is_counter_clockwise() {
        let mesh: TerrainMesh = build_grid(3, unit_domain()).unwrap();
        for f in mesh.face_ids() {
            let [a, b, c] = mesh.face(f);
            let pa = mesh.position(a);
            let pb = mesh.position(b);
            let pc = mesh.position(c);
            // Positive signed area in the XY plane means CCW winding.
            let cross = (pb.x - pa.x) * (pc.y - pa.y) - (pb.y - pa.y) * (pc.x - pa.x);
            assert!(cross > 0.0, "face {:?} is not counter-clockwise", f);
        }
    }

    #[test]
    fn test_edge_order_per_face() {
        let mesh: TerrainMesh = build_grid(2, unit_domain()).unwrap();
        for (fi, &[a, b, c]) in mesh.faces().iter().enumerate() {
            assert_eq!(mesh.edges()[3 * fi], [a, b]);
            assert_eq!(mesh.edges()[3 * fi + 1], [b, c]);
            assert_eq!(mesh.edges()[3 * fi + 2], [c, a]);
        }
    }

    #[test]
    fn test_shared_edges_are_duplicated() {
        let mesh: TerrainMesh = build_grid(1, unit_domain()).unwrap();
        // The cell diagonal (1, 2) belongs to both triangles.
        let diagonal_count = mesh
            .edges()
            .iter()
            .filter(|&&[a, b]| {
                let (a, b) = (a.index(), b.index());
                (a, b) == (1, 2) || (a, b) == (2, 1)
            })
            .count();
        assert_eq!(diagonal_count, 2);
    }

    #[test]
    fn test_rejects_zero_subdivisions() {
        let err = build_grid::<u32>(0, unit_domain()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::TerrainError::InvalidSubdivisions { div: 0 }
        ));
    }

    #[test]
    fn test_rejects_degenerate_domain() {
        for domain in [
            Domain::new(1.0, 1.0, -1.0, 1.0),
            Domain::new(1.0, -1.0, -1.0, 1.0),
            Domain::new(-1.0, 1.0, 2.0, 2.0),
        ] {
            let err = build_grid::<u32>(4, domain).unwrap_err();
            assert!(matches!(
                err,
                crate::error::TerrainError::DegenerateDomain { .. }
            ));
        }
    }
}
