//! # Velocity Triangles
//!
//! Single-radius mean-line relations for a normal repeating stage
//! (inlet and exit absolute angles equal across the stage).
//!
//! All angles are in degrees, measured from the axial direction.
//! With `U` the blade speed and `cx` the axial velocity:
//!
//! ```text
//! tan β1 = (R + Ψ/2) / Φ        tan α1 = U/cx − tan β1
//! tan β2 = (R − Ψ/2) / Φ        tan α2 = U/cx − tan β2
//! ```

use crate::error::{require_finite, require_positive, SolverError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Tangential blade speed at `radius` for a shaft turning at `rpm`.
///
/// # Example
///
/// ```rust
/// use compressor_meanline::blade_speed;
///
/// let u = blade_speed(60.0, 1.0);
/// assert!((u - 2.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn blade_speed(rpm: f64, radius: f64) -> f64 {
    2.0 * PI * rpm / 60.0 * radius
}

/// Design coefficients for one stage.
///
/// `reference_radius` is the mean-line radius the coefficients were chosen at.
/// It only feeds [`StageCoefficients::solve_reference`]; a spanwise solve
/// places the mean line halfway between the root and tip it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageCoefficients {
    /// Degree of reaction, R ∈ [0, 1].
    pub reaction: f64,
    /// Work coefficient Ψ.
    pub loading: f64,
    /// Flow coefficient Φ.
    pub flow: f64,
    /// Shaft speed in revolutions per minute.
    pub rpm: f64,
    /// Mean-line radius, informational for spanwise solves.
    pub reference_radius: f64,
}

impl StageCoefficients {
    /// Builds validated stage coefficients.
    ///
    /// # Example
    ///
    /// ```rust
    /// use compressor_meanline::StageCoefficients;
    ///
    /// let stage = StageCoefficients::new(0.5, 0.5, 0.6, 10_000.0, 50.0).unwrap();
    /// assert_eq!(stage.rpm, 10_000.0);
    /// assert!(StageCoefficients::new(1.5, 0.5, 0.6, 10_000.0, 50.0).is_err());
    /// ```
    pub fn new(
        reaction: f64,
        loading: f64,
        flow: f64,
        rpm: f64,
        reference_radius: f64,
    ) -> Result<Self, SolverError> {
        let stage = Self {
            reaction,
            loading,
            flow,
            rpm,
            reference_radius,
        };
        stage.validate()?;
        Ok(stage)
    }

    /// Checks the structural domain of every coefficient.
    pub fn validate(&self) -> Result<(), SolverError> {
        require_finite("reaction", self.reaction)?;
        if !(0.0..=1.0).contains(&self.reaction) {
            return Err(SolverError::invalid_parameter(
                "reaction",
                format!("must lie in [0, 1]: {}", self.reaction),
            ));
        }
        require_finite("loading", self.loading)?;
        require_positive("flow", self.flow)?;
        require_positive("rpm", self.rpm)?;
        require_positive("reference_radius", self.reference_radius)
    }

    /// Solves the velocity triangle at the mean-line radius.
    pub fn solve_reference(&self) -> Result<VelocityTriangle, SolverError> {
        solve_triangle(
            self.reaction,
            self.flow,
            self.loading,
            self.rpm,
            self.reference_radius,
        )
    }
}

/// Velocity triangle at one radius. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityTriangle {
    /// Rotor inlet relative flow angle β1.
    pub beta1: f64,
    /// Rotor exit relative flow angle β2.
    pub beta2: f64,
    /// Rotor inlet absolute flow angle α1 (also the stage exit angle).
    pub alpha1: f64,
    /// Rotor exit absolute flow angle α2.
    pub alpha2: f64,
    /// Axial velocity.
    pub cx: f64,
    /// Radius the triangle was solved at.
    pub radius: f64,
    /// Shaft speed in revolutions per minute.
    pub rpm: f64,
    /// Local degree of reaction.
    pub reaction: f64,
    /// Local flow coefficient.
    pub flow: f64,
    /// Local work coefficient.
    pub loading: f64,
}

impl VelocityTriangle {
    /// Tangential blade speed at this radius.
    pub fn blade_speed(&self) -> f64 {
        blade_speed(self.rpm, self.radius)
    }

    /// Rotor blade stagger, the mean of inlet and exit relative angles.
    pub fn rotor_stagger(&self) -> f64 {
        0.5 * (self.beta1 + self.beta2)
    }

    /// Turning of the relative flow through the rotor.
    pub fn rotor_deflection(&self) -> f64 {
        self.beta1 - self.beta2
    }

    /// Stator blade stagger, the mean of inlet and exit absolute angles.
    pub fn stator_stagger(&self) -> f64 {
        0.5 * (self.alpha1 + self.alpha2)
    }

    /// Turning of the absolute flow through the stator (α2 back to α1).
    pub fn stator_deflection(&self) -> f64 {
        self.alpha2 - self.alpha1
    }

    /// Relative velocity ratio w2/w1 across the rotor.
    ///
    /// Values below roughly 0.72 indicate a rotor likely to separate.
    pub fn de_haller_ratio(&self) -> f64 {
        self.beta1.to_radians().cos() / self.beta2.to_radians().cos()
    }
}

/// Solves the velocity triangle at one radius.
///
/// `reaction` may fall outside [0, 1] here: off-mean radii of a free-vortex
/// stage carry local reactions that do. Fails with `InvalidParameter` if
/// `flow`, `rpm` or `radius` is not positive, or any input is not finite.
///
/// # Example
///
/// ```rust
/// use compressor_meanline::{blade_speed, solve_triangle};
///
/// let tri = solve_triangle(0.4, 0.691, 0.482, 30_000.0, 25.0).unwrap();
/// assert!((tri.cx - 0.691 * blade_speed(30_000.0, 25.0)).abs() < 1e-9);
/// assert!(tri.beta1 > tri.beta2);
/// ```
pub fn solve_triangle(
    reaction: f64,
    flow: f64,
    loading: f64,
    rpm: f64,
    radius: f64,
) -> Result<VelocityTriangle, SolverError> {
    require_finite("reaction", reaction)?;
    require_finite("loading", loading)?;
    require_positive("flow", flow)?;
    require_positive("rpm", rpm)?;
    require_positive("radius", radius)?;

    let u = blade_speed(rpm, radius);
    let cx = flow * u;
    let u_over_cx = 1.0 / flow;

    let tan_beta1 = u_over_cx * (reaction + 0.5 * loading);
    let tan_beta2 = u_over_cx * (reaction - 0.5 * loading);
    let tan_alpha1 = u_over_cx - tan_beta1;
    let tan_alpha2 = u_over_cx - tan_beta2;

    Ok(VelocityTriangle {
        beta1: tan_beta1.atan().to_degrees(),
        beta2: tan_beta2.atan().to_degrees(),
        alpha1: tan_alpha1.atan().to_degrees(),
        alpha2: tan_alpha2.atan().to_degrees(),
        cx,
        radius,
        rpm,
        reaction,
        flow,
        loading,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axial_velocity_is_flow_times_blade_speed() {
        let tri = solve_triangle(0.4, 0.691, 0.482, 30_000.0, 25.0).unwrap();
        let u = 2.0 * PI * 30_000.0 / 60.0 * 25.0;
        assert_relative_eq!(tri.cx, 0.691 * u, max_relative = 1e-12);
        assert_eq!(tri.rpm, 30_000.0);
        assert_eq!(tri.radius, 25.0);
    }

    #[test]
    fn test_triangle_closure() {
        let tri = solve_triangle(0.4, 0.691, 0.482, 30_000.0, 25.0).unwrap();
        let u_over_cx = tri.blade_speed() / tri.cx;
        let t = |deg: f64| deg.to_radians().tan();
        assert_relative_eq!(t(tri.alpha1) + t(tri.beta1), u_over_cx, epsilon = 1e-9);
        assert_relative_eq!(t(tri.alpha2) + t(tri.beta2), u_over_cx, epsilon = 1e-9);
    }

    #[test]
    fn test_known_angles() {
        let tri = solve_triangle(0.4, 0.691, 0.482, 30_000.0, 25.0).unwrap();
        assert_relative_eq!(tri.beta1, (0.641_f64 / 0.691).atan().to_degrees(), epsilon = 1e-9);
        assert_relative_eq!(tri.beta2, (0.159_f64 / 0.691).atan().to_degrees(), epsilon = 1e-9);
        assert!(tri.beta1 > 42.0 && tri.beta1 < 43.5);
        assert!(tri.alpha2 > tri.alpha1);
    }

    #[test]
    fn test_work_relation() {
        // Ψ = Φ (tan β1 − tan β2)
        let tri = solve_triangle(0.5, 0.6, 0.45, 12_000.0, 40.0).unwrap();
        let t = |deg: f64| deg.to_radians().tan();
        assert_relative_eq!(tri.flow * (t(tri.beta1) - t(tri.beta2)), 0.45, epsilon = 1e-9);
    }

    #[test]
    fn test_fifty_percent_reaction_is_symmetric() {
        let tri = solve_triangle(0.5, 0.6, 0.4, 10_000.0, 50.0).unwrap();
        assert_relative_eq!(tri.beta1, tri.alpha2, epsilon = 1e-9);
        assert_relative_eq!(tri.beta2, tri.alpha1, epsilon = 1e-9);
    }

    #[test]
    fn test_deflection_helpers() {
        let tri = solve_triangle(0.5, 0.6, 0.4, 10_000.0, 50.0).unwrap();
        assert!(tri.rotor_deflection() > 0.0);
        assert!(tri.stator_deflection() > 0.0);
        assert_relative_eq!(tri.rotor_stagger(), 0.5 * (tri.beta1 + tri.beta2));
        assert!(tri.de_haller_ratio() < 1.0);
    }

    #[test]
    fn test_rejects_non_positive_flow() {
        let err = solve_triangle(0.5, 0.0, 0.4, 10_000.0, 50.0).unwrap_err();
        assert_eq!(err.parameter(), "flow");
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let err = solve_triangle(0.5, 0.6, 0.4, 10_000.0, -1.0).unwrap_err();
        assert_eq!(err.parameter(), "radius");
    }

    #[test]
    fn test_rejects_nan_reaction() {
        assert!(solve_triangle(f64::NAN, 0.6, 0.4, 10_000.0, 50.0).is_err());
    }

    #[test]
    fn test_stage_coefficients_validate_reaction_range() {
        assert!(StageCoefficients::new(0.0, 0.5, 0.6, 10_000.0, 50.0).is_ok());
        assert!(StageCoefficients::new(1.0, 0.5, 0.6, 10_000.0, 50.0).is_ok());
        let err = StageCoefficients::new(-0.1, 0.5, 0.6, 10_000.0, 50.0).unwrap_err();
        assert_eq!(err.parameter(), "reaction");
    }

    #[test]
    fn test_solve_reference_uses_mean_line_radius() {
        let stage = StageCoefficients::new(0.5, 0.5, 0.6, 10_000.0, 47.455).unwrap();
        let tri = stage.solve_reference().unwrap();
        assert_eq!(tri.radius, 47.455);
    }
}
