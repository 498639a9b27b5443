use super::*;
use tempfile::tempdir;

fn sample_stage() -> StageRecord {
    StageRecord::from_pairs(
        &[
            (fields::RPM, "30000"),
            (fields::LOADING, "0.482"),
            (fields::FLOW, "0.691"),
            (fields::REACTION, "0.4"),
            (fields::MEAN_LINE_RADIUS, "47.455"),
        ],
        &[
            (fields::HUB_DIAMETER, "30.0"),
            (fields::ROTOR_TWIST_X, "50.0"),
            (fields::ROTOR_THICKNESS, "16"),
            (fields::ROTOR_DIAMETER, "60"),
            (fields::HUB_LENGTH, "17"),
            (fields::BLADE_CLEARANCE, "0"),
            (fields::ROTOR_TWIST_Y, "0.0"),
            (fields::ROTOR_ROOT_CHORD, "20"),
            (fields::ROTOR_BLADES, "24"),
            (fields::ROTOR_TIP_CHORD, "10.88"),
        ],
        &[
            (fields::DUCT_ID, "60"),
            (fields::DUCT_LENGTH, "14.3"),
            (fields::DUCT_THICKNESS, "2"),
            (fields::STATOR_BLADES, "13"),
            (fields::MOUNT_CAN_LENGTH, "14.3"),
            (fields::MOUNT_CAN_DIAMETER, "30"),
            (fields::MOUNT_CAN_LOCATION, "0"),
            (fields::STATOR_THICKNESS, "16"),
            (fields::STATOR_ROOT_CHORD, "15"),
            (fields::STATOR_TIP_CHORD, "9.405"),
            (fields::STATOR_TWIST_X, "50"),
            (fields::STATOR_TWIST_Y, "0"),
        ],
    )
}

// =========================================================================
// Persistence
// =========================================================================

#[test]
fn test_save_and_load_single_stage() {
    let dir = tempdir().unwrap();
    let path = save_stages(dir.path().join("single.json"), &[sample_stage()]).unwrap();
    assert!(path.exists());

    let loaded = load_stages(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].common[fields::RPM], "30000");
    assert_eq!(loaded[0].rotor[fields::HUB_DIAMETER], "30.0");
    assert_eq!(loaded[0].stator[fields::DUCT_ID], "60");
    assert_eq!(loaded[0], sample_stage());
}

#[test]
fn test_save_and_load_keeps_stage_order() {
    let first = StageRecord::from_pairs(
        &[(fields::RPM, "30000")],
        &[(fields::HUB_DIAMETER, "30.0"), (fields::ROTOR_DIAMETER, "60")],
        &[(fields::DUCT_ID, "60"), (fields::DUCT_LENGTH, "14.3")],
    );
    let second = StageRecord::from_pairs(
        &[(fields::RPM, "35000")],
        &[(fields::HUB_DIAMETER, "32.0"), (fields::ROTOR_DIAMETER, "62")],
        &[(fields::DUCT_ID, "62"), (fields::DUCT_LENGTH, "15.0")],
    );

    let dir = tempdir().unwrap();
    let path = save_stages(dir.path().join("multi"), &[first, second]).unwrap();
    let loaded = load_stages(&path).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].common[fields::RPM], "30000");
    assert_eq!(loaded[0].rotor[fields::HUB_DIAMETER], "30.0");
    assert_eq!(loaded[1].common[fields::RPM], "35000");
    assert_eq!(loaded[1].rotor[fields::HUB_DIAMETER], "32.0");
}

#[test]
fn test_json_extension_not_doubled() {
    let dir = tempdir().unwrap();
    let path = save_stages(dir.path().join("stages.json"), &[sample_stage()]).unwrap();
    assert_eq!(path, dir.path().join("stages.json"));
    assert!(!dir.path().join("stages.json.json").exists());

    let path = save_stages(dir.path().join("stages"), &[sample_stage()]).unwrap();
    assert_eq!(path, dir.path().join("stages.json"));
}

#[test]
fn test_sections_may_be_missing_in_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{"stages":[{"common":{"RPM":"1200"}}]}"#).unwrap();
    let loaded = load_stages(&path).unwrap();
    assert_eq!(loaded[0].common[fields::RPM], "1200");
    assert!(loaded[0].rotor.is_empty());
}

// =========================================================================
// Typed conversion
// =========================================================================

#[test]
fn test_sample_stage_converts() {
    let design = sample_stage().stage_design().unwrap();
    assert_eq!(design.coefficients.reaction, 0.4);
    assert_eq!(design.coefficients.reference_radius, 47.455);
    assert_eq!(design.rotor.blade_count, 24);
    assert_eq!(design.rotor.tip_chord, 10.88);
    assert_eq!(design.rotor.clearance, 0.0);
    assert_eq!(design.stator.blade_count, 13);
    assert_eq!(design.stator.mount_can_location, 0.0);
}

#[test]
fn test_missing_field_is_reported() {
    let mut record = sample_stage();
    record.rotor.remove(fields::HUB_LENGTH);
    assert!(matches!(
        record.rotor_params(),
        Err(ParamError::MissingField {
            section: "rotor",
            field: fields::HUB_LENGTH,
        })
    ));
}

#[test]
fn test_blank_field_is_missing() {
    let mut record = sample_stage();
    record.common.insert(fields::RPM.into(), "   ".into());
    assert!(matches!(
        record.stage_coefficients(),
        Err(ParamError::MissingField { field: fields::RPM, .. })
    ));
}

#[test]
fn test_invalid_numbers() {
    let mut record = sample_stage();
    record.stator.insert(fields::DUCT_ID.into(), "wide".into());
    assert!(matches!(
        record.stator_params(),
        Err(ParamError::InvalidNumber { field: fields::DUCT_ID, .. })
    ));

    let mut record = sample_stage();
    record.rotor.insert(fields::ROTOR_BLADES.into(), "12.5".into());
    assert!(matches!(
        record.rotor_params(),
        Err(ParamError::InvalidNumber { expected: "whole number", .. })
    ));
}

#[test]
fn test_out_of_domain_coefficients() {
    let mut record = sample_stage();
    record.common.insert(fields::REACTION.into(), "1.4".into());
    assert!(matches!(
        record.stage_coefficients(),
        Err(ParamError::Coefficients(_))
    ));
}

#[test]
fn test_design_round_trip() {
    let design = sample_stage().stage_design().unwrap();
    let record = StageRecord::from_design(&design);
    assert_eq!(record.stage_design().unwrap(), design);
    assert_eq!(record.rotor[fields::ROTOR_BLADES], "24");
}

#[test]
fn test_defaults_fill_partial_record() {
    let record = StageRecord::from_pairs(&[(fields::RPM, "30000")], &[], &[]);
    assert!(record.stage_design().is_err());
    let merged = merge_with_defaults(&record);
    let design = merged.stage_design().unwrap();
    assert_eq!(design.coefficients.rpm, 30_000.0);
    assert_eq!(design.rotor.hub_diameter, 50.0);
}

#[test]
fn test_sample_stage_warnings() {
    // 13 stator blades on a 24-blade rotor, duct equal to rotor diameter
    let warnings = check_design_rules(&sample_stage());
    assert!(warnings
        .iter()
        .any(|w| matches!(w, DesignWarning::BladeCountRatio { .. })));
    assert!(warnings
        .iter()
        .any(|w| matches!(w, DesignWarning::DuctTooClose { .. })));
}
