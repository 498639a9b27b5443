//! # Rotor Row
//!
//! Hub cylinder plus a ring of blades whose tips stop `clearance` short of
//! the casing bore (`rotor_diameter / 2`).

use super::{replicate, require_blades, wrap_onto_annulus, RowKind, RowMesh};
use crate::airfoil::camber_for_deflection;
use crate::error::{require_non_negative, require_positive, MeshError};
use crate::loft::BladeDesign;
use crate::primitives::cylinder;
use compressor_meanline::StageCoefficients;
use config::constants::{inscribed_radius, MeshSettings, SUPPORT_WALL_THICKNESS};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mechanical rotor parameters.
///
/// Thickness and twist centre are percentages of the local chord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotorParams {
    /// Casing bore diameter
    pub rotor_diameter: f64,
    pub hub_diameter: f64,
    pub hub_length: f64,
    pub blade_count: u32,
    pub root_chord: f64,
    pub tip_chord: f64,
    /// Maximum thickness, percent of chord
    pub thickness: f64,
    /// Radial gap between blade tip and casing
    pub clearance: f64,
    /// Chordwise twist-axis position, percent of chord
    pub twist_x: f64,
    /// Normal twist-axis offset, percent of chord
    pub twist_y: f64,
}

impl RotorParams {
    /// Checks structural preconditions.
    ///
    /// Fails with `InvalidParameter` for non-positive dimensions, a hub at
    /// least as large as the rotor, zero blades, or a clearance that leaves
    /// no blade.
    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("rotor_diameter", self.rotor_diameter)?;
        require_positive("hub_diameter", self.hub_diameter)?;
        require_positive("hub_length", self.hub_length)?;
        require_positive("root_chord", self.root_chord)?;
        require_positive("tip_chord", self.tip_chord)?;
        require_positive("thickness", self.thickness)?;
        require_non_negative("clearance", self.clearance)?;
        require_blades(self.blade_count)?;

        if self.hub_diameter >= self.rotor_diameter {
            return Err(MeshError::invalid_parameter(
                "hub_diameter",
                format!(
                    "must be smaller than rotor diameter: hub={}, rotor={}",
                    self.hub_diameter, self.rotor_diameter
                ),
            ));
        }
        if self.clearance >= self.blade_height() {
            return Err(MeshError::invalid_parameter(
                "clearance",
                format!(
                    "must be smaller than the blade height {}: {}",
                    self.blade_height(),
                    self.clearance
                ),
            ));
        }
        if !self.twist_x.is_finite() || !self.twist_y.is_finite() {
            return Err(MeshError::invalid_parameter(
                "twist_center",
                format!("must be finite: ({}, {})", self.twist_x, self.twist_y),
            ));
        }
        Ok(())
    }

    /// Annulus height between hub and casing.
    pub fn blade_height(&self) -> f64 {
        (self.rotor_diameter - self.hub_diameter) / 2.0
    }
}

/// Builds a rotor row.
///
/// The stage is solved between hub and casing radius. Root and tip camber
/// come from the local rotor deflection, stagger from the root rotor
/// stagger, and twist from the change in stagger along the span. The
/// optional support wall is a disk of the blade-tip diameter at z=0.
///
/// # Example
///
/// ```rust
/// use compressor_meanline::StageCoefficients;
/// use compressor_mesh::row::{build_rotor, RotorParams};
/// use config::MeshSettings;
///
/// let stage = StageCoefficients::new(0.5, 0.5, 0.6, 10_000.0, 37.5).unwrap();
/// let params = RotorParams {
///     rotor_diameter: 100.0,
///     hub_diameter: 50.0,
///     hub_length: 30.0,
///     blade_count: 12,
///     root_chord: 20.0,
///     tip_chord: 15.0,
///     thickness: 8.0,
///     clearance: 0.5,
///     twist_x: 30.0,
///     twist_y: 0.0,
/// };
/// let settings = MeshSettings::new(32, 16, 4, 0.4).unwrap();
/// let rotor = build_rotor(&stage, &params, false, &settings).unwrap();
/// assert_eq!(rotor.blade_count, 12);
/// assert_eq!(rotor.blade_height, 25.0);
/// ```
pub fn build_rotor(
    stage: &StageCoefficients,
    params: &RotorParams,
    include_support_wall: bool,
    settings: &MeshSettings,
) -> Result<RowMesh, MeshError> {
    params.validate()?;

    let hub_radius = params.hub_diameter / 2.0;
    let casing_radius = params.rotor_diameter / 2.0;
    let triangles = stage.solve_stage(hub_radius, casing_radius)?;

    let root_radius = inscribed_radius(hub_radius, settings.resolution);
    let tip_radius = casing_radius - params.clearance;
    let span = tip_radius - root_radius;

    let root_stagger = triangles.root.rotor_stagger();
    let design = BladeDesign {
        root_camber: camber_for_deflection(
            triangles.root.rotor_deflection(),
            settings.camber_position,
        ),
        tip_camber: camber_for_deflection(
            triangles.tip.rotor_deflection(),
            settings.camber_position,
        ),
        camber_position: settings.camber_position,
        thickness: params.thickness / 100.0,
        root_chord: params.root_chord,
        tip_chord: params.tip_chord,
        height: span,
        stagger: root_stagger,
        twist: triangles.tip.rotor_stagger() - root_stagger,
        twist_center: DVec2::new(params.twist_x, params.twist_y) / 100.0,
    };

    let blade = design.build(settings.profile_points, settings.span_stations)?;
    let blade = wrap_onto_annulus(&blade, root_radius, params.hub_length / 2.0);

    let mut mesh = cylinder(params.hub_diameter, params.hub_length, settings.resolution)?;
    mesh.merge(&replicate(&blade, params.blade_count)?);

    if include_support_wall {
        mesh.merge(&cylinder(
            2.0 * tip_radius,
            SUPPORT_WALL_THICKNESS,
            settings.resolution,
        )?);
    }

    debug!(
        blades = params.blade_count,
        root_radius,
        tip_radius,
        stagger = root_stagger,
        twist = design.twist,
        triangles = mesh.triangle_count(),
        "built rotor row"
    );

    Ok(RowMesh {
        kind: RowKind::Rotor,
        mesh,
        blade_count: params.blade_count,
        blade_height: params.blade_height(),
        blade_span: span,
        root_radius,
        tip_radius,
        casing_radius,
        triangles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RotorParams {
        RotorParams {
            rotor_diameter: 100.0,
            hub_diameter: 50.0,
            hub_length: 30.0,
            blade_count: 12,
            root_chord: 20.0,
            tip_chord: 15.0,
            thickness: 8.0,
            clearance: 0.5,
            twist_x: 30.0,
            twist_y: 0.0,
        }
    }

    #[test]
    fn test_blade_height() {
        assert_eq!(params().blade_height(), 25.0);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn test_validate_hub_not_smaller() {
        let mut p = params();
        p.hub_diameter = 100.0;
        assert!(matches!(
            p.validate(),
            Err(MeshError::InvalidParameter { name: "hub_diameter", .. })
        ));
    }

    #[test]
    fn test_validate_zero_blades() {
        let mut p = params();
        p.blade_count = 0;
        assert!(matches!(
            p.validate(),
            Err(MeshError::InvalidParameter { name: "blade_count", .. })
        ));
    }

    #[test]
    fn test_validate_clearance() {
        let mut p = params();
        p.clearance = 25.0;
        assert!(matches!(
            p.validate(),
            Err(MeshError::InvalidParameter { name: "clearance", .. })
        ));
        p.clearance = -0.1;
        assert!(p.validate().is_err());
        p.clearance = 0.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_non_positive_dimensions() {
        let mut p = params();
        p.hub_length = 0.0;
        assert!(p.validate().is_err());
        let mut p = params();
        p.tip_chord = -1.0;
        assert!(p.validate().is_err());
    }
}
