//! # Bounding Boxes
//!
//! Exact axis-aligned extents over mesh vertices.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: DVec3,
    /// Maximum corner
    pub max: DVec3,
}

impl BoundingBox {
    /// Computes the extents of a point set.
    ///
    /// Fails with `EmptyMesh` when there are no points.
    pub fn from_points(points: &[DVec3]) -> Result<Self, MeshError> {
        let (first, rest) = points.split_first().ok_or(MeshError::EmptyMesh)?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));
        Ok(Self { min, max })
    }

    /// Edge lengths along X, Y and Z.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Centre point of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Extents as `(min_x, max_x, min_y, max_y, min_z, max_z)`.
    pub fn extents(&self) -> (f64, f64, f64, f64, f64, f64) {
        (
            self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z,
        )
    }

}

/// Computes the bounding box of a mesh.
///
/// # Example
///
/// ```rust
/// use compressor_mesh::{bounding_box, primitives::cylinder};
///
/// let hub = cylinder(10.0, 20.0, 25).unwrap();
/// let (min_x, max_x, _, _, min_z, max_z) = bounding_box(&hub).unwrap().extents();
/// assert!(((max_x - min_x) - 10.0).abs() < 0.5);
/// assert_eq!(max_z - min_z, 20.0);
/// ```
pub fn bounding_box(mesh: &Mesh) -> Result<BoundingBox, MeshError> {
    mesh.bounding_box()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_single() {
        let bounds = BoundingBox::from_points(&[DVec3::new(1.0, 2.0, 3.0)]).unwrap();
        assert_eq!(bounds.size(), DVec3::ZERO);
        assert_eq!(bounds.center(), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(matches!(BoundingBox::from_points(&[]), Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn test_extents_order() {
        let bounds =
            BoundingBox::from_points(&[DVec3::new(-1.0, -2.0, -3.0), DVec3::new(4.0, 5.0, 6.0)])
                .unwrap();
        assert_eq!(bounds.extents(), (-1.0, 4.0, -2.0, 5.0, -3.0, 6.0));
    }
}
