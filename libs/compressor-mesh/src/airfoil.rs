//! # Airfoil Sections
//!
//! NACA 4-digit cambered sections sampled on a cosine-spaced chord.
//!
//! ## Point Layout
//!
//! With `n` stations per surface a section has exactly `2n` points:
//!
//! ```text
//! 0            leading edge
//! 1 ..= n      upper surface, ending at the trailing edge (index n)
//! n+1 .. 2n-1  lower surface, back toward the leading edge
//! ```
//!
//! Sections built with the same `n` correspond point-for-point, which is
//! what the loft relies on. The thickness polynomial uses the closed
//! trailing-edge coefficient so both surfaces meet at a single point.

use crate::error::{require_positive, MeshError};
use crate::transform::rotate_about;
use config::constants::{MAX_CAMBER, MAX_THICKNESS, MIN_PROFILE_POINTS};
use glam::DVec2;
use std::f64::consts::PI;

/// Ordered boundary of one blade section, in chord units.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilProfile {
    points: Vec<DVec2>,
    chord: f64,
}

impl AirfoilProfile {
    /// Wraps an arbitrary closed boundary (first point not repeated at the end).
    pub fn from_points(points: Vec<DVec2>, chord: f64) -> Result<Self, MeshError> {
        require_positive("chord", chord)?;
        if points.len() < 3 {
            return Err(MeshError::invalid_parameter(
                "points",
                format!("a section needs at least 3 points: {}", points.len()),
            ));
        }
        Ok(Self { points, chord })
    }

    /// Boundary points in loop order.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Chord length.
    pub fn chord(&self) -> f64 {
        self.chord
    }

    /// Number of boundary points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the section has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area, positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum::<f64>()
            * 0.5
    }

    /// Point at fractional chord coordinates (x along chord, y normal to it).
    pub fn pivot(&self, fraction: DVec2) -> DVec2 {
        fraction * self.chord
    }

    /// Returns a copy rotated by `angle` degrees about `pivot`.
    pub fn rotated(&self, angle: f64, pivot: DVec2) -> Self {
        let radians = angle.to_radians();
        Self {
            points: self
                .points
                .iter()
                .map(|p| rotate_about(*p, pivot, radians))
                .collect(),
            chord: self.chord,
        }
    }
}

/// Builds a NACA 4-digit section.
///
/// # Arguments
///
/// * `camber` - Maximum camber as a fraction of chord, in [-0.095, 0.095];
///   negative camber bends the section toward -y
/// * `camber_position` - Chordwise position of maximum camber, in (0, 1)
/// * `thickness` - Maximum thickness as a fraction of chord, in (0, 0.4]
/// * `chord` - Chord length
/// * `points_per_surface` - Cosine-spaced stations per surface
///
/// # Example
///
/// ```rust
/// use compressor_mesh::airfoil::section;
///
/// let naca2412 = section(0.02, 0.4, 0.12, 20.0, 40).unwrap();
/// assert_eq!(naca2412.len(), 80);
/// assert!((naca2412.points()[40].x - 20.0).abs() < 1e-9);
/// ```
pub fn section(
    camber: f64,
    camber_position: f64,
    thickness: f64,
    chord: f64,
    points_per_surface: u32,
) -> Result<AirfoilProfile, MeshError> {
    require_positive("chord", chord)?;
    if !(camber_position > 0.0 && camber_position < 1.0) {
        return Err(MeshError::invalid_parameter(
            "camber_position",
            format!("must lie in (0, 1): {}", camber_position),
        ));
    }
    if !(-MAX_CAMBER..=MAX_CAMBER).contains(&camber) {
        return Err(MeshError::invalid_parameter(
            "camber",
            format!("must lie in [-{0}, {0}]: {1}", MAX_CAMBER, camber),
        ));
    }
    if !(thickness > 0.0 && thickness <= MAX_THICKNESS) {
        return Err(MeshError::invalid_parameter(
            "thickness",
            format!("must lie in (0, {}]: {}", MAX_THICKNESS, thickness),
        ));
    }
    if points_per_surface < MIN_PROFILE_POINTS {
        return Err(MeshError::invalid_parameter(
            "points_per_surface",
            format!("must be at least {}: {}", MIN_PROFILE_POINTS, points_per_surface),
        ));
    }

    let n = points_per_surface as usize;
    let mut upper = Vec::with_capacity(n + 1);
    let mut lower = Vec::with_capacity(n + 1);

    for i in 0..=n {
        let x = if i == n {
            1.0
        } else {
            0.5 * (1.0 - (PI * i as f64 / n as f64).cos())
        };
        let yt = half_thickness(thickness, x);
        let (yc, slope) = camber_line(camber, camber_position, x);
        let theta = slope.atan();
        let (sin, cos) = theta.sin_cos();

        upper.push(DVec2::new(x - yt * sin, yc + yt * cos) * chord);
        lower.push(DVec2::new(x + yt * sin, yc - yt * cos) * chord);
    }

    // Leading edge, upper surface to the trailing edge, lower surface back
    let mut points = Vec::with_capacity(2 * n);
    points.extend_from_slice(&upper);
    points.extend(lower[1..n].iter().rev());

    Ok(AirfoilProfile { points, chord })
}

/// NACA camber that turns the flow by `deflection` degrees.
///
/// The camber line's leading- and trailing-edge slopes are `2m/p` and
/// `2m/(1-p)`, so the total turning is about `2m / (p(1-p))`. Negative
/// deflections clamp to a symmetric section.
///
/// # Example
///
/// ```rust
/// use compressor_mesh::airfoil::camber_for_deflection;
///
/// let m = camber_for_deflection(10.0, 0.4);
/// assert!(m > 0.0 && m < 0.03);
/// assert_eq!(camber_for_deflection(-5.0, 0.4), 0.0);
/// ```
pub fn camber_for_deflection(deflection: f64, camber_position: f64) -> f64 {
    let m = deflection.to_radians() * camber_position * (1.0 - camber_position) / 2.0;
    m.clamp(0.0, MAX_CAMBER)
}

/// Symmetric half-thickness distribution at chord fraction `x`.
fn half_thickness(thickness: f64, x: f64) -> f64 {
    5.0 * thickness
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
            - 0.1036 * x.powi(4))
}

/// Camber-line ordinate and slope at chord fraction `x`.
fn camber_line(camber: f64, position: f64, x: f64) -> (f64, f64) {
    if camber == 0.0 {
        return (0.0, 0.0);
    }
    if x < position {
        let k = camber / (position * position);
        (k * (2.0 * position * x - x * x), 2.0 * k * (position - x))
    } else {
        let k = camber / ((1.0 - position) * (1.0 - position));
        (
            k * (1.0 - 2.0 * position + 2.0 * position * x - x * x),
            2.0 * k * (position - x),
        )
    }
}
