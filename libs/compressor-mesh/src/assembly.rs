//! # Multi-Stage Assembly
//!
//! Lays stages out along the rotation axis and builds every row.
//!
//! ## Layout
//!
//! ```text
//! z = 0        rotor 1   (advance hub_length  * ASSEMBLY_SPACING_FACTOR)
//!              stator 1  (advance duct_length * ASSEMBLY_SPACING_FACTOR)
//!              rotor 2   ...
//! ```
//!
//! Rows are independent pure builds, so they run in parallel. Stored row
//! meshes are never moved; [`PlacedRow::posed`] returns a new mesh with the
//! axial offset (and any rotor angle) applied.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::row::{build_rotor, build_stator, RotorParams, RowKind, RowMesh, StatorParams};
use crate::transform::rotation_matrix;
use compressor_meanline::StageCoefficients;
use config::constants::{MeshSettings, ASSEMBLY_SPACING_FACTOR};
use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Typed parameters for one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDesign {
    pub coefficients: StageCoefficients,
    pub rotor: RotorParams,
    pub stator: StatorParams,
}

/// A built row and where it sits on the axis.
#[derive(Debug, Clone)]
pub struct PlacedRow {
    /// Zero-based stage index
    pub stage: usize,
    pub row: RowMesh,
    /// Axial position of the row's z=0 plane
    pub axial_offset: f64,
}

impl PlacedRow {
    /// Returns the row in assembly coordinates.
    ///
    /// Rotors are first turned by `rotor_angle` radians about the axis;
    /// stators ignore the angle.
    pub fn posed(&self, rotor_angle: f64) -> Result<Mesh, MeshError> {
        let offset = DVec3::new(0.0, 0.0, self.axial_offset);
        match self.row.kind {
            RowKind::Rotor if rotor_angle != 0.0 => Ok(self
                .row
                .mesh
                .rotated(&rotation_matrix(DVec3::Z, rotor_angle)?)
                .translated(offset)),
            _ => Ok(self.row.mesh.translated(offset)),
        }
    }
}

/// All rows of a compressor, in axial order.
#[derive(Debug, Clone)]
pub struct Assembly {
    rows: Vec<PlacedRow>,
    length: f64,
}

impl Assembly {
    /// Rows in axial order: rotor then stator for each stage.
    pub fn rows(&self) -> &[PlacedRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Axial distance covered by the layout, including trailing spacing.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Every row at rest, merged into one mesh.
    pub fn combined(&self) -> Mesh {
        let mut mesh = Mesh::new();
        for placed in &self.rows {
            let offset = DVec3::new(0.0, 0.0, placed.axial_offset);
            mesh.merge(&placed.row.mesh.translated(offset));
        }
        mesh
    }

    /// Every row merged with rotors turned by `rotor_angle` radians.
    pub fn posed(&self, rotor_angle: f64) -> Result<Mesh, MeshError> {
        let mut mesh = Mesh::new();
        for placed in &self.rows {
            mesh.merge(&placed.posed(rotor_angle)?);
        }
        Ok(mesh)
    }
}

/// Builds every stage and lays the rows out along the axis.
///
/// Fails with the first row error; no partial assembly is returned.
///
/// # Example
///
/// ```rust,no_run
/// use compressor_mesh::assembly::{assemble_stages, StageDesign};
/// use config::MeshSettings;
///
/// fn build(stages: &[StageDesign]) {
///     let assembly = assemble_stages(stages, false, &MeshSettings::default()).unwrap();
///     assert_eq!(assembly.len(), 2 * stages.len());
/// }
/// ```
pub fn assemble_stages(
    stages: &[StageDesign],
    include_support_wall: bool,
    settings: &MeshSettings,
) -> Result<Assembly, MeshError> {
    if stages.is_empty() {
        return Err(MeshError::invalid_parameter(
            "stages",
            "an assembly needs at least one stage",
        ));
    }

    let mut jobs = Vec::with_capacity(stages.len() * 2);
    let mut offset = 0.0;
    for (index, stage) in stages.iter().enumerate() {
        jobs.push((index, RowKind::Rotor, offset));
        offset += stage.rotor.hub_length * ASSEMBLY_SPACING_FACTOR;
        jobs.push((index, RowKind::Stator, offset));
        offset += stage.stator.duct_length * ASSEMBLY_SPACING_FACTOR;
    }

    let rows = jobs
        .par_iter()
        .map(|&(index, kind, axial_offset)| {
            let stage = &stages[index];
            let row = match kind {
                RowKind::Rotor => build_rotor(
                    &stage.coefficients,
                    &stage.rotor,
                    include_support_wall,
                    settings,
                )?,
                RowKind::Stator => build_stator(&stage.coefficients, &stage.stator, settings)?,
            };
            debug!(stage = index, %kind, axial_offset, "placed row");
            Ok(PlacedRow {
                stage: index,
                row,
                axial_offset,
            })
        })
        .collect::<Result<Vec<_>, MeshError>>()?;

    info!(stages = stages.len(), rows = rows.len(), length = offset, "assembled stages");

    Ok(Assembly {
        rows,
        length: offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn design(hub_length: f64, duct_length: f64) -> StageDesign {
        StageDesign {
            coefficients: StageCoefficients::new(0.5, 0.5, 0.6, 10_000.0, 37.5).unwrap(),
            rotor: RotorParams {
                rotor_diameter: 100.0,
                hub_diameter: 50.0,
                hub_length,
                blade_count: 6,
                root_chord: 20.0,
                tip_chord: 15.0,
                thickness: 8.0,
                clearance: 0.5,
                twist_x: 30.0,
                twist_y: 0.0,
            },
            stator: StatorParams {
                duct_inner_diameter: 110.0,
                duct_length,
                duct_thickness: 3.0,
                blade_count: 9,
                mount_can_length: 20.0,
                mount_can_diameter: 30.0,
                mount_can_location: 10.0,
                thickness: 8.0,
                root_chord: 22.0,
                tip_chord: 18.0,
                twist_x: 25.0,
                twist_y: 0.0,
            },
        }
    }

    fn settings() -> MeshSettings {
        MeshSettings::new(16, 8, 2, 0.4).unwrap()
    }

    #[test]
    fn test_offsets_follow_spacing_factor() {
        let stages = vec![design(30.0, 40.0), design(20.0, 50.0)];
        let assembly = assemble_stages(&stages, false, &settings()).unwrap();
        let offsets: Vec<f64> = assembly.rows().iter().map(|r| r.axial_offset).collect();
        let expected = [0.0, 36.0, 84.0, 108.0];
        for (got, want) in offsets.iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(assembly.length(), 168.0, epsilon = 1e-9);
    }

    #[test]
    fn test_row_order_and_kinds() {
        let stages = vec![design(30.0, 40.0), design(30.0, 40.0)];
        let assembly = assemble_stages(&stages, false, &settings()).unwrap();
        let kinds: Vec<(usize, RowKind)> =
            assembly.rows().iter().map(|r| (r.stage, r.row.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (0, RowKind::Rotor),
                (0, RowKind::Stator),
                (1, RowKind::Rotor),
                (1, RowKind::Stator),
            ]
        );
    }

    #[test]
    fn test_combined_keeps_all_geometry() {
        let stages = vec![design(30.0, 40.0)];
        let assembly = assemble_stages(&stages, false, &settings()).unwrap();
        let total: usize = assembly.rows().iter().map(|r| r.row.mesh.vertex_count()).sum();
        let combined = assembly.combined();
        assert_eq!(combined.vertex_count(), total);
        let bounds = combined.bounding_box().unwrap();
        assert_abs_diff_eq!(bounds.max.z, 36.0 + 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_posed_leaves_stored_rows_untouched() {
        let stages = vec![design(30.0, 40.0)];
        let assembly = assemble_stages(&stages, false, &settings()).unwrap();
        let before = assembly.rows()[0].row.mesh.clone();
        let turned = assembly.rows()[0].posed(0.3).unwrap();
        assert_eq!(assembly.rows()[0].row.mesh, before);
        assert_ne!(turned, before);
        assert_eq!(turned.vertex_count(), before.vertex_count());
    }

    #[test]
    fn test_posed_does_not_turn_stators() {
        let stages = vec![design(30.0, 40.0)];
        let assembly = assemble_stages(&stages, false, &settings()).unwrap();
        let stator = &assembly.rows()[1];
        assert_eq!(stator.posed(1.0).unwrap(), stator.posed(0.0).unwrap());
    }

    #[test]
    fn test_posed_at_zero_matches_combined() {
        let stages = vec![design(30.0, 40.0)];
        let assembly = assemble_stages(&stages, true, &settings()).unwrap();
        assert_eq!(assembly.posed(0.0).unwrap(), assembly.combined());
    }

    #[test]
    fn test_empty_stage_list() {
        assert!(matches!(
            assemble_stages(&[], false, &settings()),
            Err(MeshError::InvalidParameter { name: "stages", .. })
        ));
    }

    #[test]
    fn test_one_bad_row_fails_everything() {
        let mut bad = design(30.0, 40.0);
        bad.stator.blade_count = 0;
        let stages = vec![design(30.0, 40.0), bad];
        assert!(assemble_stages(&stages, false, &settings()).is_err());
    }
}
