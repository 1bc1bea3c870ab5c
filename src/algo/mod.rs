//! Terrain construction algorithms.
//!
//! This module contains the stages that turn a flat grid into a sculpted
//! terrain:
//!
//! - **Fault sculpting**: random fault-plane cuts with geometrically
//!   decaying displacement ([`fault`])
//! - **Normal estimation**: area-weighted per-vertex normals ([`normals`])
//! - **Progress reporting**: callback plumbing for the sculpting loop
//!   ([`progress`])
//!
//! The stages are order-sensitive (normals depend on final elevations), so
//! [`generate`] runs the whole pipeline in one call and is the intended
//! entry point; the individual stages stay public for callers that need a
//! flat grid or want to drive sculpting themselves.

pub mod fault;
pub mod normals;
pub mod progress;

pub use progress::Progress;

use log::debug;
use rand::Rng;

use crate::error::Result;
use crate::mesh::{build_grid, Domain, MeshIndex, TerrainMesh};

use fault::{fault_sculpt, FaultOptions};
use normals::compute_normals;

/// Build a complete sculpted terrain mesh.
///
/// Runs every construction stage in its required order: grid construction
/// (including wireframe edge extraction), fault sculpting, then normal
/// estimation. There is no public partial-construction path that can get
/// the ordering wrong.
///
/// The RNG is the only source of randomness; pass a seeded generator for
/// reproducible terrain.
///
/// # Errors
/// Fails like [`build_grid`] when `div < 1` or the domain rectangle is
/// degenerate. Sculpting and normal estimation cannot fail on a
/// well-formed grid.
///
/// # Example
///
/// ```
/// use faultline::algo::{generate, fault::FaultOptions};
/// use faultline::mesh::{Domain, TerrainMesh};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mesh: TerrainMesh =
///     generate(50, Domain::new(-1.0, 1.0, -1.0, 1.0), &FaultOptions::default(), &mut rng)
///         .unwrap();
/// assert_eq!(mesh.num_vertices(), 51 * 51);
/// assert!(mesh.min_elevation() < mesh.max_elevation());
/// ```
pub fn generate<I: MeshIndex, R: Rng + ?Sized>(
    div: usize,
    domain: Domain,
    options: &FaultOptions,
    rng: &mut R,
) -> Result<TerrainMesh<I>> {
    let mut mesh = build_grid(div, domain)?;
    debug!(
        "built grid: {} vertices, {} faces, {} edges",
        mesh.num_vertices(),
        mesh.num_faces(),
        mesh.num_edges()
    );

    fault_sculpt(&mut mesh, options, rng);
    debug!(
        "sculpted terrain over {} cuts: elevation range [{:.4}, {:.4}]",
        options.cut_count(div),
        mesh.min_elevation(),
        mesh.max_elevation()
    );

    compute_normals(&mut mesh);
    debug!("estimated vertex normals");

    Ok(mesh)
}
