//! # Blade Rows
//!
//! Assembles a full rotor or stator: one lofted blade wrapped onto the
//! annulus, replicated around the Z axis and merged with its hub or duct.
//!
//! ## Coordinates
//!
//! ```text
//! rotation axis   +Z, hub/duct base at z=0
//! blade chord     along Z (axial)
//! blade span      radial, root on the hub, tip toward the casing
//! ```
//!
//! A lofted blade is built flat (chord x, tangential y, span z) and then
//! bent onto the annulus so that every tip vertex sits on the tip cylinder.

pub mod rotor;
pub mod stator;

pub use rotor::{build_rotor, RotorParams};
pub use stator::{build_stator, StatorParams};

use crate::bounds::BoundingBox;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::transform::rotation_matrix;
use compressor_meanline::StageVelocityTriangles;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// Which side of the stage a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKind {
    Rotor,
    Stator,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::Rotor => write!(f, "rotor"),
            RowKind::Stator => write!(f, "stator"),
        }
    }
}

/// An assembled blade row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMesh {
    pub kind: RowKind,
    /// Blades, hub or duct and any extra solids as one triangle soup
    pub mesh: Mesh,
    pub blade_count: u32,
    /// Annulus height the row was designed for
    pub blade_height: f64,
    /// Radial length of the lofted blade
    pub blade_span: f64,
    /// Radius of the blade root
    pub root_radius: f64,
    /// Radius of the blade tip
    pub tip_radius: f64,
    /// Bore of the surrounding casing
    pub casing_radius: f64,
    /// Velocity triangles the blade angles were taken from
    pub triangles: StageVelocityTriangles,
}

impl RowMesh {
    /// Axis-aligned extents of the whole row.
    pub fn bounding_box(&self) -> Result<BoundingBox, MeshError> {
        self.mesh.bounding_box()
    }

    /// Radial gap between blade tip and casing.
    pub fn tip_clearance(&self) -> f64 {
        self.casing_radius - self.tip_radius
    }

    /// Number of triangles in the row.
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }
}

/// Bends a flat blade onto the annulus.
///
/// A local vertex (chord `x`, tangential `y`, span `s`) lands at radius
/// `root_radius + s`, angle `-y / r` and height `axial_center + x`. The
/// map keeps the blade's orientation, so outward faces stay outward.
pub(crate) fn wrap_onto_annulus(blade: &Mesh, root_radius: f64, axial_center: f64) -> Mesh {
    blade.map_vertices(|v| {
        let radius = root_radius + v.z;
        let (sin, cos) = (-v.y / radius).sin_cos();
        DVec3::new(radius * cos, radius * sin, axial_center + v.x)
    })
}

/// Copies a blade `count` times at equal spacing around the Z axis.
pub(crate) fn replicate(blade: &Mesh, count: u32) -> Result<Mesh, MeshError> {
    require_blades(count)?;

    let mut row = Mesh::with_capacity(
        blade.vertex_count() * count as usize,
        blade.triangle_count() * count as usize,
    );
    for k in 0..count {
        let angle = TAU * k as f64 / count as f64;
        row.merge(&blade.rotated(&rotation_matrix(DVec3::Z, angle)?));
    }
    Ok(row)
}

/// Rejects blade counts below one.
pub(crate) fn require_blades(count: u32) -> Result<(), MeshError> {
    if count == 0 {
        Err(MeshError::invalid_parameter("blade_count", "must be at least 1: 0"))
    } else {
        Ok(())
    }
}
