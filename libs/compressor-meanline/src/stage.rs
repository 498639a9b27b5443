//! # Stage Solving
//!
//! Root, mean and tip triangles of one stage under the free-vortex rule.
//!
//! The supplied coefficients are the design values at the arithmetic mean
//! radius `rm`. At another radius `r` the free-vortex laws give
//!
//! ```text
//! Φ(r) = Φ · rm/r
//! Ψ(r) = Ψ · (rm/r)²
//! 1 − R(r) = (1 − R) · (rm/r)²
//! ```
//!
//! so the axial velocity `Φ(r) · U(r)` is the same at every radius.

use crate::error::{require_finite, require_positive, SolverError};
use crate::triangle::{solve_triangle, StageCoefficients, VelocityTriangle};
use config::constants::{relative_equal, CX_RELATIVE_TOLERANCE};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Triangles at the root, mean and tip radii of one blade row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageVelocityTriangles {
    /// Hub-side radius.
    pub root_radius: f64,
    /// Casing-side radius.
    pub tip_radius: f64,
    /// Triangle at `root_radius`.
    pub root: VelocityTriangle,
    /// Triangle at the arithmetic mean radius.
    pub mean: VelocityTriangle,
    /// Triangle at `tip_radius`.
    pub tip: VelocityTriangle,
}

impl StageVelocityTriangles {
    /// Arithmetic mean of root and tip radius.
    pub fn mean_radius(&self) -> f64 {
        0.5 * (self.root_radius + self.tip_radius)
    }

    /// Axial velocity shared by all three stations.
    pub fn axial_velocity(&self) -> f64 {
        self.mean.cx
    }

    /// True when root and tip axial velocity match the mean value.
    pub fn is_free_vortex_consistent(&self) -> bool {
        relative_equal(self.root.cx, self.mean.cx, CX_RELATIVE_TOLERANCE)
            && relative_equal(self.tip.cx, self.mean.cx, CX_RELATIVE_TOLERANCE)
    }

    /// Root, mean and tip triangles in span order.
    pub fn stations(&self) -> [&VelocityTriangle; 3] {
        [&self.root, &self.mean, &self.tip]
    }
}

/// Solves root, mean and tip triangles for one stage.
///
/// Fails with `InvalidParameter` if `tip_radius <= root_radius`, if
/// `root_radius` is not positive, or if `solve_triangle` rejects the
/// coefficients.
///
/// # Example
///
/// ```rust
/// use compressor_meanline::solve_stage;
///
/// let stage = solve_stage(0.4, 0.691, 0.482, 30_000.0, 15.0, 30.0).unwrap();
/// assert!((stage.root.cx - stage.tip.cx).abs() < 0.01);
/// assert_eq!(stage.mean.radius, 22.5);
/// ```
pub fn solve_stage(
    reaction: f64,
    flow: f64,
    loading: f64,
    rpm: f64,
    root_radius: f64,
    tip_radius: f64,
) -> Result<StageVelocityTriangles, SolverError> {
    require_positive("root_radius", root_radius)?;
    require_finite("tip_radius", tip_radius)?;
    if tip_radius <= root_radius {
        return Err(SolverError::invalid_parameter(
            "tip_radius",
            format!(
                "must exceed root radius: tip={}, root={}",
                tip_radius, root_radius
            ),
        ));
    }

    let mean_radius = 0.5 * (root_radius + tip_radius);
    let at = |radius: f64| {
        let ratio = mean_radius / radius;
        solve_triangle(
            1.0 - (1.0 - reaction) * ratio * ratio,
            flow * ratio,
            loading * ratio * ratio,
            rpm,
            radius,
        )
    };

    let stage = StageVelocityTriangles {
        root_radius,
        tip_radius,
        root: at(root_radius)?,
        mean: at(mean_radius)?,
        tip: at(tip_radius)?,
    };

    debug_assert!(stage.is_free_vortex_consistent());
    debug!(
        root_radius,
        tip_radius,
        cx = stage.axial_velocity(),
        root_reaction = stage.root.reaction,
        "solved stage triangles"
    );

    Ok(stage)
}

impl StageCoefficients {
    /// Solves root, mean and tip triangles between two radii.
    ///
    /// The mean station sits at the midpoint of the two radii, not at
    /// `reference_radius`.
    pub fn solve_stage(
        &self,
        root_radius: f64,
        tip_radius: f64,
    ) -> Result<StageVelocityTriangles, SolverError> {
        self.validate()?;
        solve_stage(
            self.reaction,
            self.flow,
            self.loading,
            self.rpm,
            root_radius,
            tip_radius,
        )
    }
}
