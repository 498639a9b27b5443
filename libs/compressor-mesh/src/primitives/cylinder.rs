//! # Cylinder Primitive
//!
//! Solid right cylinder on the rotation axis, used for hubs, mount cans
//! and support walls.

use super::ring;
use crate::error::{require_positive, MeshError};
use crate::mesh::Mesh;
use config::constants::MIN_RESOLUTION;

/// Creates a solid cylinder centred on the Z axis.
///
/// The base sits at z=0 and the top at z=`height`.
///
/// # Arguments
///
/// * `diameter` - Circumscribed diameter of the faceted section
/// * `height` - Height along Z axis
/// * `resolution` - Number of side facets (at least 3)
///
/// # Example
///
/// ```rust
/// use compressor_mesh::primitives::cylinder;
///
/// let hub = cylinder(10.0, 20.0, 25).unwrap();
/// assert_eq!(hub.vertex_count(), 50);
/// assert!(hub.is_closed_manifold());
/// ```
pub fn cylinder(diameter: f64, height: f64, resolution: u32) -> Result<Mesh, MeshError> {
    require_positive("diameter", diameter)?;
    require_positive("height", height)?;
    if resolution < MIN_RESOLUTION {
        return Err(MeshError::invalid_parameter(
            "resolution",
            format!("must be at least {}: {}", MIN_RESOLUTION, resolution),
        ));
    }

    let radius = diameter / 2.0;
    let segments = resolution as usize;
    let mut mesh = Mesh::with_capacity(2 * segments, 4 * segments - 4);

    let bottom = ring(&mut mesh, radius, 0.0, resolution);
    let top = ring(&mut mesh, radius, height, resolution);

    // Side faces: quads between the two circles
    for j in 0..segments {
        let j_next = (j + 1) % segments;

        let b0 = bottom[j];
        let b1 = bottom[j_next];
        let t0 = top[j];
        let t1 = top[j_next];

        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    // Bottom cap faces -Z, top cap faces +Z
    for j in 1..segments - 1 {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        mesh.add_triangle(top[0], top[j], top[j + 1]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cylinder_basic() {
        let mesh = cylinder(10.0, 10.0, 32).unwrap();
        assert_eq!(mesh.vertex_count(), 64);
        assert_eq!(mesh.triangle_count(), 4 * 32 - 4);
        assert!(mesh.validate());
        assert!(mesh.is_closed_manifold());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_cylinder_bounds() {
        let mesh = cylinder(10.0, 20.0, 25).unwrap();
        let (min_x, max_x, min_y, max_y, min_z, max_z) = mesh.bounding_box().unwrap().extents();
        assert_abs_diff_eq!(max_x - min_x, 10.0, epsilon = 0.5);
        assert_abs_diff_eq!(max_y - min_y, 10.0, epsilon = 0.5);
        assert_eq!(max_z - min_z, 20.0);
        assert_eq!(min_z, 0.0);
    }

    #[test]
    fn test_cylinder_volume_approaches_exact() {
        let mesh = cylinder(2.0, 1.0, 256).unwrap();
        assert_abs_diff_eq!(mesh.signed_volume(), std::f64::consts::PI, epsilon = 1e-3);
    }

    #[test]
    fn test_triangular_prism() {
        let mesh = cylinder(4.0, 1.0, 3).unwrap();
        assert_eq!(mesh.triangle_count(), 8);
        assert!(mesh.is_closed_manifold());
    }

    #[test]
    fn test_cylinder_invalid_height() {
        assert!(matches!(
            cylinder(10.0, 0.0, 32),
            Err(MeshError::InvalidParameter { name: "height", .. })
        ));
    }

    #[test]
    fn test_cylinder_invalid_diameter() {
        assert!(cylinder(-1.0, 5.0, 32).is_err());
    }

    #[test]
    fn test_cylinder_too_few_segments() {
        assert!(matches!(
            cylinder(10.0, 5.0, 2),
            Err(MeshError::InvalidParameter { name: "resolution", .. })
        ));
    }
}
