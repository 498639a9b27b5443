//! # Duct Primitive
//!
//! Hollow cylinder forming the stator casing.

use super::ring;
use crate::error::{require_positive, MeshError};
use crate::mesh::Mesh;
use config::constants::MIN_RESOLUTION;

/// Creates a hollow cylinder centred on the Z axis.
///
/// The outer diameter is `inner_diameter + 2 * thickness`. The mesh has
/// separate outer and inner walls joined by annular caps at z=0 and
/// z=`height`; inner-wall faces point toward the axis.
///
/// # Example
///
/// ```rust
/// use compressor_mesh::primitives::duct;
///
/// let casing = duct(10.0, 2.0, 20.0, 25).unwrap();
/// let size = casing.bounding_box().unwrap().size();
/// assert!((size.x - 14.0).abs() < 0.5);
/// assert_eq!(size.z, 20.0);
/// ```
pub fn duct(
    inner_diameter: f64,
    thickness: f64,
    height: f64,
    resolution: u32,
) -> Result<Mesh, MeshError> {
    require_positive("inner_diameter", inner_diameter)?;
    require_positive("thickness", thickness)?;
    require_positive("height", height)?;
    if resolution < MIN_RESOLUTION {
        return Err(MeshError::invalid_parameter(
            "resolution",
            format!("must be at least {}: {}", MIN_RESOLUTION, resolution),
        ));
    }

    let inner_radius = inner_diameter / 2.0;
    let outer_radius = inner_radius + thickness;
    let segments = resolution as usize;
    let mut mesh = Mesh::with_capacity(4 * segments, 8 * segments);

    let outer_bottom = ring(&mut mesh, outer_radius, 0.0, resolution);
    let outer_top = ring(&mut mesh, outer_radius, height, resolution);
    let inner_bottom = ring(&mut mesh, inner_radius, 0.0, resolution);
    let inner_top = ring(&mut mesh, inner_radius, height, resolution);

    for j in 0..segments {
        let n = (j + 1) % segments;

        // Outer wall, facing away from the axis
        mesh.add_triangle(outer_bottom[j], outer_bottom[n], outer_top[n]);
        mesh.add_triangle(outer_bottom[j], outer_top[n], outer_top[j]);

        // Inner wall, facing the axis
        mesh.add_triangle(inner_bottom[j], inner_top[n], inner_bottom[n]);
        mesh.add_triangle(inner_bottom[j], inner_top[j], inner_top[n]);

        // Bottom annulus (-Z)
        mesh.add_triangle(outer_bottom[j], inner_bottom[j], inner_bottom[n]);
        mesh.add_triangle(outer_bottom[j], inner_bottom[n], outer_bottom[n]);

        // Top annulus (+Z)
        mesh.add_triangle(outer_top[j], outer_top[n], inner_top[n]);
        mesh.add_triangle(outer_top[j], inner_top[n], inner_top[j]);
    }

    Ok(mesh)
}
