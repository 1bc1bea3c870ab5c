//! Fault-formation terrain sculpting.
//!
//! This module perturbs the elevations of a flat terrain grid with repeated
//! random fault-plane cuts: each cut picks a random vertical plane through
//! the domain, lowers every vertex on one side of it and raises every
//! vertex on the other. The displacement magnitude decays geometrically
//! across cuts, which is what produces self-similar, fractal-looking
//! relief.
//!
//! # Example
//!
//! ```
//! use faultline::algo::fault::{fault_sculpt, FaultOptions};
//! use faultline::mesh::{build_grid, Domain, TerrainMesh};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut mesh: TerrainMesh = build_grid(16, Domain::new(-1.0, 1.0, -1.0, 1.0)).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! fault_sculpt(&mut mesh, &FaultOptions::default(), &mut rng);
//! assert!(mesh.max_elevation() > mesh.min_elevation());
//! ```

use std::f64::consts::TAU;

use nalgebra::{Point2, Point3, Vector2};
use rand::Rng;
use rayon::prelude::*;

use crate::mesh::{MeshIndex, TerrainMesh};

use super::Progress;

/// Options for fault-formation sculpting.
#[derive(Debug, Clone)]
pub struct FaultOptions {
    /// Number of fault cuts to apply. `None` uses `max(2 * div, 50)`.
    pub cuts: Option<usize>,

    /// Displacement magnitude of the first cut.
    pub base_delta: f64,

    /// Roughness exponent `H` controlling displacement decay. `None` draws
    /// one value uniformly from `[0, 1)` at the start of the sculpt.
    ///
    /// The displacement is divided by `2^H` after each cut, so values near
    /// zero decay slowly and give rough terrain, while values near one
    /// halve the displacement every cut and give smooth terrain.
    pub roughness: Option<f64>,

    /// Whether to use parallel execution (default: true).
    pub parallel: bool,
}

impl Default for FaultOptions {
    fn default() -> Self {
        Self {
            cuts: None,
            base_delta: 0.2,
            parallel: true,
            roughness: None,
        }
    }
}

impl FaultOptions {
    /// Create options with a fixed number of cuts.
    pub fn with_cuts(mut self, cuts: usize) -> Self {
        self.cuts = Some(cuts);
        self
    }

    /// Create options with the specified initial displacement.
    pub fn with_base_delta(mut self, delta: f64) -> Self {
        self.base_delta = delta;
        self
    }

    /// Create options with a fixed roughness exponent, clamped to `[0, 1]`.
    pub fn with_roughness(mut self, h: f64) -> Self {
        self.roughness = Some(h.clamp(0.0, 1.0));
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Number of cuts this sculpt will run for a grid with `div`
    /// subdivisions.
    pub fn cut_count(&self, div: usize) -> usize {
        self.cuts.unwrap_or_else(|| (2 * div).max(50))
    }
}

/// Sculpt a terrain mesh with random fault-plane cuts.
///
/// The mesh should be a freshly built flat grid; normals are not touched
/// and must be (re)estimated after sculpting.
///
/// # Algorithm
///
/// 1. Draw the roughness exponent `H` once (unless fixed in the options).
/// 2. For each cut: draw a point uniformly in the domain rectangle and a
///    unit direction uniformly on the XY circle, then apply [`fault_cut`]
///    with the current displacement.
/// 3. Divide the displacement by `2^H` and repeat.
///
/// Elevations are never clamped or renormalized; the final range emerges
/// from the stochastic process alone. Given the same RNG state and options
/// the result is bit-reproducible, and parallel and sequential execution
/// produce identical elevations because each vertex is displaced
/// independently.
pub fn fault_sculpt<I: MeshIndex, R: Rng + ?Sized>(
    mesh: &mut TerrainMesh<I>,
    options: &FaultOptions,
    rng: &mut R,
) {
    fault_sculpt_impl(mesh, options, rng, None);
}

/// Like [`fault_sculpt`], reporting one progress step per cut.
pub fn fault_sculpt_with_progress<I: MeshIndex, R: Rng + ?Sized>(
    mesh: &mut TerrainMesh<I>,
    options: &FaultOptions,
    rng: &mut R,
    progress: &Progress,
) {
    fault_sculpt_impl(mesh, options, rng, Some(progress));
}

fn fault_sculpt_impl<I: MeshIndex, R: Rng + ?Sized>(
    mesh: &mut TerrainMesh<I>,
    options: &FaultOptions,
    rng: &mut R,
    progress: Option<&Progress>,
) {
    let cuts = options.cut_count(mesh.div());
    let h = options
        .roughness
        .unwrap_or_else(|| rng.random::<f64>());
    let decay = 2f64.powf(h);
    let domain = mesh.domain();

    let mut delta = options.base_delta;
    for cut in 0..cuts {
        let px = rng.random::<f64>() * domain.width() + domain.min_x;
        let py = rng.random::<f64>() * domain.height() + domain.min_y;
        let angle = rng.random::<f64>() * TAU;

        cut_in_place(
            &mut mesh.positions,
            Point2::new(px, py),
            Vector2::new(angle.cos(), angle.sin()),
            delta,
            options.parallel,
        );

        delta /= decay;
        if let Some(p) = progress {
            p.report(cut + 1, cuts, "fault cuts");
        }
    }
}

/// Apply a single fault cut to the mesh.
///
/// Every vertex is classified against the vertical plane through `point`
/// with in-plane normal `normal` using the signed distance
/// `d = (v - point) . normal` over the x,y components only. Vertices with
/// `d < 0` are lowered by `delta`; all others, including those exactly on
/// the plane, are raised by `delta`.
pub fn fault_cut<I: MeshIndex>(
    mesh: &mut TerrainMesh<I>,
    point: Point2<f64>,
    normal: Vector2<f64>,
    delta: f64,
) {
    cut_in_place(&mut mesh.positions, point, normal, delta, false);
}

fn cut_in_place(
    positions: &mut [Point3<f64>],
    point: Point2<f64>,
    normal: Vector2<f64>,
    delta: f64,
    parallel: bool,
) {
    let displace = |p: &mut Point3<f64>| {
        let d = (p.xy() - point).dot(&normal);
        if d < 0.0 {
            p.z -= delta;
        } else {
            p.z += delta;
        }
    };

    if parallel {
        positions.par_iter_mut().for_each(displace);
    } else {
        positions.iter_mut().for_each(displace);
    }
}
