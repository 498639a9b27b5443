//! # Blade Loft
//!
//! Lofts a closed blade solid between a root and a tip section.
//!
//! ## Algorithm
//!
//! 1. Corresponding root/tip points are interpolated linearly at each span station
//! 2. Each station is centred on its twist pivot, so the pivots stack on the Z axis
//! 3. The station is rotated by `stagger + twist * t` (t = 0 at root, 1 at tip)
//! 4. Adjacent stations are joined by quads; root and tip are capped
//!
//! The result is a closed shell (every edge shared by two opposite faces)
//! whenever both sections have the same point count and orientation.

use crate::airfoil::{section, AirfoilProfile};
use crate::error::{require_positive, MeshError};
use crate::mesh::Mesh;
use config::constants::{DEFAULT_SPAN_STATIONS, EPSILON};
use glam::{DVec2, DVec3};
use tracing::debug;

/// A single lofted blade.
pub type BladeSolid = Mesh;

/// Parameters for lofting.
#[derive(Debug, Clone)]
pub struct LoftParams {
    /// Span from root (z=0) to tip (z=height)
    pub height: f64,
    /// Additional rotation at the tip in degrees, growing linearly from zero at the root
    pub twist: f64,
    /// Rotation in degrees applied to every station
    pub stagger: f64,
    /// Twist axis as fractions of the local chord (x along chord, y normal to it)
    pub twist_center: DVec2,
    /// Number of span intervals
    pub stations: u32,
}

impl Default for LoftParams {
    fn default() -> Self {
        Self {
            height: 1.0,
            twist: 0.0,
            stagger: 0.0,
            twist_center: DVec2::new(0.5, 0.0),
            stations: DEFAULT_SPAN_STATIONS,
        }
    }
}

/// Lofts a blade between two sections.
///
/// # Errors
///
/// - `ProfileMismatch` if the sections differ in point count or winding
/// - `InvalidParameter` for a non-positive height, zero stations,
///   non-finite angles or a zero-area root section
///
/// # Example
///
/// ```rust
/// use compressor_mesh::airfoil::section;
/// use compressor_mesh::loft::{loft, LoftParams};
///
/// let root = section(0.04, 0.4, 0.12, 20.0, 20).unwrap();
/// let tip = section(0.02, 0.4, 0.12, 10.0, 20).unwrap();
/// let params = LoftParams { height: 15.0, twist: 10.0, ..Default::default() };
/// let blade = loft(&root, &tip, &params).unwrap();
/// assert!(blade.is_closed_manifold());
/// ```
pub fn loft(
    root: &AirfoilProfile,
    tip: &AirfoilProfile,
    params: &LoftParams,
) -> Result<BladeSolid, MeshError> {
    require_positive("height", params.height)?;
    if params.stations == 0 {
        return Err(MeshError::invalid_parameter(
            "stations",
            "a loft needs at least one span interval",
        ));
    }
    if !params.twist.is_finite() || !params.stagger.is_finite() {
        return Err(MeshError::invalid_parameter(
            "twist",
            format!("angles must be finite: twist={}, stagger={}", params.twist, params.stagger),
        ));
    }
    if root.len() != tip.len() {
        return Err(MeshError::profile_mismatch(format!(
            "root has {} points, tip has {}",
            root.len(),
            tip.len()
        )));
    }

    let root_area = root.signed_area();
    let tip_area = tip.signed_area();
    if root_area.abs() < EPSILON {
        return Err(MeshError::invalid_parameter("root", "root section encloses no area"));
    }
    if root_area.signum() != tip_area.signum() {
        return Err(MeshError::profile_mismatch(
            "root and tip sections have opposite winding",
        ));
    }

    let n = root.len();
    let stations = params.stations as usize;
    let ccw = root_area > 0.0;
    let root_pivot = root.pivot(params.twist_center);
    let tip_pivot = tip.pivot(params.twist_center);

    let mut mesh = Mesh::with_capacity(n * (stations + 1), 2 * n * stations + 2 * (n - 2));

    for k in 0..=stations {
        let t = k as f64 / stations as f64;
        let z = t * params.height;
        let pivot = root_pivot.lerp(tip_pivot, t);
        let (sin, cos) = (params.stagger + params.twist * t).to_radians().sin_cos();

        for (r, p) in root.points().iter().zip(tip.points()) {
            let local = r.lerp(*p, t) - pivot;
            mesh.add_vertex(DVec3::new(
                local.x * cos - local.y * sin,
                local.x * sin + local.y * cos,
                z,
            ));
        }
    }

    // Lateral surface
    for k in 0..stations {
        let base = k * n;
        let next = (k + 1) * n;
        for i in 0..n {
            let i_next = (i + 1) % n;
            add_oriented(&mut mesh, ccw, base + i, base + i_next, next + i_next);
            add_oriented(&mut mesh, ccw, base + i, next + i_next, next + i);
        }
    }

    // Root cap faces -Z, tip cap faces +Z
    let top = stations * n;
    for [a, b, c] in cap_triangles(n) {
        add_oriented(&mut mesh, ccw, a, c, b);
        add_oriented(&mut mesh, ccw, top + a, top + b, top + c);
    }

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        height = params.height,
        twist = params.twist,
        "lofted blade"
    );

    Ok(mesh)
}

/// Adds a triangle given counter-clockwise section order, flipping it for
/// clockwise sections.
fn add_oriented(mesh: &mut Mesh, ccw: bool, a: usize, b: usize, c: usize) {
    if ccw {
        mesh.add_triangle(a as u32, b as u32, c as u32);
    } else {
        mesh.add_triangle(a as u32, c as u32, b as u32);
    }
}

/// Zig-zag triangulation of an `n`-point loop between index 0 and its
/// opposite end.
///
/// Triangles list their corners in loop order, so they share the loop's
/// winding. Valid for any section that is monotone between its leading and
/// trailing edge, which every airfoil section is.
fn cap_triangles(n: usize) -> Vec<[usize; 3]> {
    let mut triangles = Vec::with_capacity(n.saturating_sub(2));
    let (mut i, mut j) = (1, n - 1);
    triangles.push([0, i, j]);

    let mut advance_upper = true;
    while j - i > 1 {
        if advance_upper {
            triangles.push([i, i + 1, j]);
            i += 1;
        } else {
            triangles.push([i, j - 1, j]);
            j -= 1;
        }
        advance_upper = !advance_upper;
    }
    triangles
}

/// Everything needed to build one blade from NACA sections.
#[derive(Debug, Clone, PartialEq)]
pub struct BladeDesign {
    /// Root camber as a fraction of chord, negative toward -y
    pub root_camber: f64,
    /// Tip camber as a fraction of chord, negative toward -y
    pub tip_camber: f64,
    /// Position of maximum camber as a fraction of chord
    pub camber_position: f64,
    /// Maximum thickness as a fraction of chord
    pub thickness: f64,
    /// Root chord length
    pub root_chord: f64,
    /// Tip chord length
    pub tip_chord: f64,
    /// Span
    pub height: f64,
    /// Root stagger in degrees
    pub stagger: f64,
    /// Tip rotation relative to the root in degrees
    pub twist: f64,
    /// Twist axis as fractions of chord
    pub twist_center: DVec2,
}

impl BladeDesign {
    /// Generates matching root and tip sections and lofts them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use compressor_mesh::loft::BladeDesign;
    /// use glam::DVec2;
    ///
    /// let design = BladeDesign {
    ///     root_camber: 0.04,
    ///     tip_camber: 0.02,
    ///     camber_position: 0.35,
    ///     thickness: 0.12,
    ///     root_chord: 20.0,
    ///     tip_chord: 10.0,
    ///     height: 15.0,
    ///     stagger: 0.0,
    ///     twist: 10.0,
    ///     twist_center: DVec2::new(0.5, 0.0),
    /// };
    /// let blade = design.build(24, 6).unwrap();
    /// let size = blade.bounding_box().unwrap().size();
    /// assert!((size.z - 15.0).abs() < 1e-9);
    /// ```
    pub fn build(&self, profile_points: u32, stations: u32) -> Result<BladeSolid, MeshError> {
        let root = section(
            self.root_camber,
            self.camber_position,
            self.thickness,
            self.root_chord,
            profile_points,
        )?;
        let tip = section(
            self.tip_camber,
            self.camber_position,
            self.thickness,
            self.tip_chord,
            profile_points,
        )?;
        loft(
            &root,
            &tip,
            &LoftParams {
                height: self.height,
                twist: self.twist,
                stagger: self.stagger,
                twist_center: self.twist_center,
                stations,
            },
        )
    }
}
