//! # Primitives
//!
//! Axis-aligned solids for hubs, ducts and mount cans.

pub mod cylinder;
pub mod duct;

pub use cylinder::cylinder;
pub use duct::duct;

use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Adds a ring of `segments` vertices at height `z`, counter-clockwise from +X.
pub(crate) fn ring(mesh: &mut Mesh, radius: f64, z: f64, segments: u32) -> Vec<u32> {
    (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
        })
        .collect()
}
