//! # Rigid Transforms
//!
//! Axis-angle rotations used to stagger sections and replicate blades.

use crate::error::MeshError;
use config::constants::AXIS_LENGTH_EPSILON;
use glam::{DMat3, DVec2, DVec3};

/// Rotation matrix about an arbitrary axis (Rodrigues' formula).
///
/// The axis is normalized internally. A zero-length axis has no rotation
/// direction and fails with `DegenerateAxis`.
///
/// # Example
///
/// ```rust
/// use compressor_mesh::rotation_matrix;
/// use glam::DVec3;
///
/// let r = rotation_matrix(DVec3::Z, std::f64::consts::FRAC_PI_2).unwrap();
/// let v = r * DVec3::X;
/// assert!((v - DVec3::Y).length() < 1e-12);
/// assert!(rotation_matrix(DVec3::ZERO, 1.0).is_err());
/// ```
pub fn rotation_matrix(axis: DVec3, angle: f64) -> Result<DMat3, MeshError> {
    if !axis.is_finite() || axis.length_squared() < AXIS_LENGTH_EPSILON {
        return Err(MeshError::DegenerateAxis {
            axis: axis.to_array(),
        });
    }
    Ok(DMat3::from_axis_angle(axis.normalize(), angle))
}

/// Rotates a 2D point about a pivot by `angle` radians (counter-clockwise).
#[inline]
pub fn rotate_about(point: DVec2, pivot: DVec2, angle: f64) -> DVec2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - pivot;
    pivot + DVec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}
