//! # Stator Row
//!
//! Duct casing, central mount can and a ring of blades spanning from the
//! can to the duct bore.

use super::{replicate, require_blades, wrap_onto_annulus, RowKind, RowMesh};
use crate::airfoil::camber_for_deflection;
use crate::error::{require_non_negative, require_positive, MeshError};
use crate::loft::BladeDesign;
use crate::primitives::{cylinder, duct};
use compressor_meanline::StageCoefficients;
use config::constants::{inscribed_radius, MeshSettings};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mechanical stator parameters.
///
/// Thickness and twist centre are percentages of the local chord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatorParams {
    pub duct_inner_diameter: f64,
    pub duct_length: f64,
    pub duct_thickness: f64,
    pub blade_count: u32,
    pub mount_can_length: f64,
    pub mount_can_diameter: f64,
    /// Axial position of the mount can base
    pub mount_can_location: f64,
    /// Maximum thickness, percent of chord
    pub thickness: f64,
    pub root_chord: f64,
    pub tip_chord: f64,
    /// Chordwise twist-axis position, percent of chord
    pub twist_x: f64,
    /// Normal twist-axis offset, percent of chord
    pub twist_y: f64,
}

impl StatorParams {
    /// Checks structural preconditions.
    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("duct_inner_diameter", self.duct_inner_diameter)?;
        require_positive("duct_length", self.duct_length)?;
        require_positive("duct_thickness", self.duct_thickness)?;
        require_positive("mount_can_length", self.mount_can_length)?;
        require_positive("mount_can_diameter", self.mount_can_diameter)?;
        require_non_negative("mount_can_location", self.mount_can_location)?;
        require_positive("thickness", self.thickness)?;
        require_positive("root_chord", self.root_chord)?;
        require_positive("tip_chord", self.tip_chord)?;
        require_blades(self.blade_count)?;

        if self.mount_can_diameter >= self.duct_inner_diameter {
            return Err(MeshError::invalid_parameter(
                "mount_can_diameter",
                format!(
                    "must be smaller than duct bore: can={}, duct={}",
                    self.mount_can_diameter, self.duct_inner_diameter
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

    /// Annulus height between mount can and duct bore.
    pub fn blade_height(&self) -> f64 {
        (self.duct_inner_diameter - self.mount_can_diameter) / 2.0
    }
}

/// Builds a stator row.
///
/// The stage is solved between mount-can and duct radius. Blades lean
/// opposite to the rotor: stagger, twist and camber take the negated stator
/// angles, so the leading edge meets the rotor exit flow at `-α2` and the
/// trailing edge turns it back to `-α1`. Blades are centred axially on the
/// mount can and reach the duct bore.
///
/// # Example
///
/// ```rust
/// use compressor_meanline::StageCoefficients;
/// use compressor_mesh::row::{build_stator, StatorParams};
/// use config::MeshSettings;
///
/// let stage = StageCoefficients::new(0.5, 0.5, 0.6, 10_000.0, 35.0).unwrap();
/// let params = StatorParams {
///     duct_inner_diameter: 110.0,
///     duct_length: 40.0,
///     duct_thickness: 3.0,
///     blade_count: 18,
///     mount_can_length: 20.0,
///     mount_can_diameter: 30.0,
///     mount_can_location: 15.0,
///     thickness: 8.0,
///     root_chord: 22.0,
///     tip_chord: 18.0,
///     twist_x: 25.0,
///     twist_y: 0.0,
/// };
/// let settings = MeshSettings::new(32, 16, 4, 0.4).unwrap();
/// let stator = build_stator(&stage, &params, &settings).unwrap();
/// assert_eq!(stator.blade_height, 40.0);
/// assert_eq!(stator.tip_clearance(), 0.0);
/// ```
pub fn build_stator(
    stage: &StageCoefficients,
    params: &StatorParams,
    settings: &MeshSettings,
) -> Result<RowMesh, MeshError> {
    params.validate()?;

    let can_radius = params.mount_can_diameter / 2.0;
    let casing_radius = params.duct_inner_diameter / 2.0;
    let triangles = stage.solve_stage(can_radius, casing_radius)?;

    let root_radius = inscribed_radius(can_radius, settings.resolution);
    let tip_radius = casing_radius;
    let span = tip_radius - root_radius;

    let root_stagger = -triangles.root.stator_stagger();
    let design = BladeDesign {
        root_camber: -camber_for_deflection(
            triangles.root.stator_deflection(),
            settings.camber_position,
        ),
        tip_camber: -camber_for_deflection(
            triangles.tip.stator_deflection(),
            settings.camber_position,
        ),
        camber_position: settings.camber_position,
        thickness: params.thickness / 100.0,
        root_chord: params.root_chord,
        tip_chord: params.tip_chord,
        height: span,
        stagger: root_stagger,
        twist: -triangles.tip.stator_stagger() - root_stagger,
        twist_center: DVec2::new(params.twist_x, params.twist_y) / 100.0,
    };

    let axial_center = params.mount_can_location + params.mount_can_length / 2.0;
    let blade = design.build(settings.profile_points, settings.span_stations)?;
    let blade = wrap_onto_annulus(&blade, root_radius, axial_center);

    let mut mesh = duct(
        params.duct_inner_diameter,
        params.duct_thickness,
        params.duct_length,
        settings.resolution,
    )?;
    let can = cylinder(
        params.mount_can_diameter,
        params.mount_can_length,
        settings.resolution,
    )?;
    mesh.merge(&can.translated(DVec3::new(0.0, 0.0, params.mount_can_location)));
    mesh.merge(&replicate(&blade, params.blade_count)?);

    debug!(
        blades = params.blade_count,
        root_radius,
        tip_radius,
        stagger = root_stagger,
        twist = design.twist,
        triangles = mesh.triangle_count(),
        "built stator row"
    );

    Ok(RowMesh {
        kind: RowKind::Stator,
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
