//! # Defaults
//!
//! Default values for a new stage (a small educational compressor) and
//! recommended field ranges.

use crate::fields::{self, Section};
use crate::record::StageRecord;

const COMMON_DEFAULTS: &[(&str, &str)] = &[
    (fields::REACTION, "0.5"),
    (fields::LOADING, "0.5"),
    (fields::FLOW, "0.6"),
    (fields::RPM, "10000"),
    (fields::MEAN_LINE_RADIUS, "50.0"),
];

const ROTOR_DEFAULTS: &[(&str, &str)] = &[
    (fields::ROTOR_DIAMETER, "100.0"),
    (fields::HUB_DIAMETER, "50.0"),
    (fields::HUB_LENGTH, "30.0"),
    (fields::ROTOR_BLADES, "12"),
    (fields::ROTOR_ROOT_CHORD, "20.0"),
    (fields::ROTOR_TIP_CHORD, "15.0"),
    (fields::ROTOR_THICKNESS, "2.0"),
    (fields::BLADE_CLEARANCE, "0.5"),
    (fields::ROTOR_TWIST_X, "30.0"),
    (fields::ROTOR_TWIST_Y, "40.0"),
];

const STATOR_DEFAULTS: &[(&str, &str)] = &[
    (fields::DUCT_ID, "110.0"),
    (fields::DUCT_LENGTH, "40.0"),
    (fields::DUCT_THICKNESS, "3.0"),
    (fields::STATOR_BLADES, "18"),
    (fields::MOUNT_CAN_LENGTH, "20.0"),
    (fields::MOUNT_CAN_DIAMETER, "30.0"),
    (fields::MOUNT_CAN_LOCATION, "15.0"),
    (fields::STATOR_THICKNESS, "2.0"),
    (fields::STATOR_ROOT_CHORD, "22.0"),
    (fields::STATOR_TIP_CHORD, "18.0"),
    (fields::STATOR_TWIST_X, "25.0"),
    (fields::STATOR_TWIST_Y, "35.0"),
];

/// Typical operating ranges, inclusive.
const RECOMMENDED_RANGES: &[(&str, f64, f64)] = &[
    (fields::REACTION, 0.4, 0.6),
    (fields::LOADING, 0.3, 0.6),
    (fields::FLOW, 0.5, 0.8),
    (fields::RPM, 1_000.0, 100_000.0),
    (fields::MEAN_LINE_RADIUS, 10.0, 500.0),
    (fields::ROTOR_DIAMETER, 20.0, 1_000.0),
    (fields::HUB_DIAMETER, 10.0, 800.0),
    (fields::HUB_LENGTH, 5.0, 200.0),
    (fields::ROTOR_BLADES, 6.0, 30.0),
    (fields::ROTOR_ROOT_CHORD, 5.0, 150.0),
    (fields::ROTOR_TIP_CHORD, 3.0, 100.0),
    (fields::ROTOR_THICKNESS, 0.5, 20.0),
    (fields::BLADE_CLEARANCE, 0.1, 2.0),
    (fields::ROTOR_TWIST_X, 15.0, 60.0),
    (fields::ROTOR_TWIST_Y, 20.0, 60.0),
    (fields::DUCT_ID, 25.0, 1_100.0),
    (fields::DUCT_LENGTH, 10.0, 300.0),
    (fields::DUCT_THICKNESS, 1.0, 20.0),
    (fields::STATOR_BLADES, 8.0, 40.0),
    (fields::MOUNT_CAN_LENGTH, 5.0, 200.0),
    (fields::MOUNT_CAN_DIAMETER, 5.0, 500.0),
    (fields::MOUNT_CAN_LOCATION, 0.0, 200.0),
    (fields::STATOR_THICKNESS, 0.5, 15.0),
    (fields::STATOR_ROOT_CHORD, 5.0, 150.0),
    (fields::STATOR_TIP_CHORD, 3.0, 120.0),
    (fields::STATOR_TWIST_X, 10.0, 50.0),
    (fields::STATOR_TWIST_Y, 15.0, 50.0),
];

fn defaults_for(section: Section) -> &'static [(&'static str, &'static str)] {
    match section {
        Section::Common => COMMON_DEFAULTS,
        Section::Rotor => ROTOR_DEFAULTS,
        Section::Stator => STATOR_DEFAULTS,
    }
}

/// A complete record holding only default values.
///
/// # Example
///
/// ```rust
/// use compressor_params::{default_stage, fields};
///
/// let stage = default_stage();
/// assert_eq!(stage.common[fields::RPM], "10000");
/// assert!(stage.stage_design().is_ok());
/// ```
pub fn default_stage() -> StageRecord {
    merge_with_defaults(&StageRecord::default())
}

/// Returns a copy of `record` with absent or blank fields filled in.
///
/// The input is never modified; fields outside the default table are kept.
pub fn merge_with_defaults(record: &StageRecord) -> StageRecord {
    let mut merged = record.clone();
    for section in [Section::Common, Section::Rotor, Section::Stator] {
        let map = merged.section_mut(section);
        for (field, value) in defaults_for(section) {
            let blank = map.get(*field).map(|v| v.trim().is_empty()).unwrap_or(true);
            if blank {
                map.insert(field.to_string(), value.to_string());
            }
        }
    }
    merged
}

/// Recommended `(min, max)` for a field, if one is known.
pub fn recommended_range(field: &str) -> Option<(f64, f64)> {
    RECOMMENDED_RANGES
        .iter()
        .find(|(name, _, _)| *name == field)
        .map(|&(_, min, max)| (min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_field() {
        let stage = default_stage();
        for section in [Section::Common, Section::Rotor, Section::Stator] {
            for field in section.fields() {
                assert!(stage.section(section).contains_key(*field), "{field}");
                assert!(recommended_range(field).is_some(), "{field}");
            }
        }
    }

    #[test]
    fn test_merge_keeps_user_values() {
        let mut record = StageRecord::default();
        record.rotor.insert(fields::HUB_DIAMETER.into(), "42".into());
        record.rotor.insert(fields::HUB_LENGTH.into(), "  ".into());
        record.stator.insert("Notes".into(), "prototype".into());

        let merged = merge_with_defaults(&record);
        assert_eq!(merged.rotor[fields::HUB_DIAMETER], "42");
        assert_eq!(merged.rotor[fields::HUB_LENGTH], "30.0");
        assert_eq!(merged.stator["Notes"], "prototype");
    }

    #[test]
    fn test_merge_does_not_touch_input() {
        let record = StageRecord::default();
        let _ = merge_with_defaults(&record);
        assert!(record.common.is_empty());
    }

    #[test]
    fn test_default_values() {
        let stage = default_stage();
        let rotor = stage.rotor_params().unwrap();
        assert_eq!(rotor.blade_count, 12);
        assert_eq!(rotor.rotor_diameter, 100.0);
        let stator = stage.stator_params().unwrap();
        assert_eq!(stator.blade_count, 18);
        assert_eq!(stator.twist_y, 35.0);
        let coefficients = stage.stage_coefficients().unwrap();
        assert_eq!(coefficients.reference_radius, 50.0);
    }

    #[test]
    fn test_unknown_range() {
        assert_eq!(recommended_range("Colour"), None);
        assert_eq!(recommended_range(fields::FLOW), Some((0.5, 0.8)));
    }
}
