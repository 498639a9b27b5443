//! # Design Rules
//!
//! Advisory checks on relationships between fields. Warnings never block a
//! build; a rule whose inputs are missing or unparseable is skipped.

use crate::defaults::recommended_range;
use crate::fields::{self, Section};
use crate::record::{parse_field, StageRecord};
use std::fmt;
use tracing::warn;

/// Hub/rotor diameter ratio range.
pub const HUB_TO_ROTOR_RATIO: (f64, f64) = (0.3, 0.7);
/// Stator/rotor blade count ratio range.
pub const STATOR_TO_ROTOR_BLADE_RATIO: (f64, f64) = (1.3, 1.8);
/// Largest clearance as a fraction of blade height.
pub const MAX_CLEARANCE_TO_HEIGHT: f64 = 0.03;
/// Smallest duct bore as a multiple of rotor diameter.
pub const MIN_DUCT_TO_ROTOR: f64 = 1.05;

/// A design that will build but is unlikely to perform well.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignWarning {
    HubRatio { ratio: f64 },
    BladeCountRatio { ratio: f64 },
    LargeClearance { clearance: f64, ratio: f64 },
    DuctTooClose { duct_id: f64, ratio: f64 },
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignWarning::HubRatio { ratio } => write!(
                f,
                "Hub/Rotor diameter ratio ({:.2}) is outside typical range ({}-{}). May affect performance.",
                ratio, HUB_TO_ROTOR_RATIO.0, HUB_TO_ROTOR_RATIO.1
            ),
            DesignWarning::BladeCountRatio { ratio } => write!(
                f,
                "Stator/Rotor blade count ratio ({:.2}) is outside typical range ({}-{}). Consider adjusting blade counts.",
                ratio, STATOR_TO_ROTOR_BLADE_RATIO.0, STATOR_TO_ROTOR_BLADE_RATIO.1
            ),
            DesignWarning::LargeClearance { clearance, .. } => write!(
                f,
                "Blade clearance ({:.2} mm) is large relative to blade height. Will reduce efficiency significantly.",
                clearance
            ),
            DesignWarning::DuctTooClose { duct_id, .. } => write!(
                f,
                "Duct ID ({:.1} mm) is too close to rotor diameter. Increase duct ID for proper clearance.",
                duct_id
            ),
            DesignWarning::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "{} ({}) is outside the recommended range {}-{}.",
                field, value, min, max
            ),
        }
    }
}

/// Checks the relationships between rotor and stator fields.
///
/// # Example
///
/// ```rust
/// use compressor_params::{check_design_rules, default_stage};
///
/// assert!(check_design_rules(&default_stage()).is_empty());
/// ```
pub fn check_design_rules(record: &StageRecord) -> Vec<DesignWarning> {
    let rotor = &record.rotor;
    let stator = &record.stator;
    let rotor_dia = parse_field(rotor, fields::ROTOR_DIAMETER);
    let hub_dia = parse_field(rotor, fields::HUB_DIAMETER);

    let mut warnings = Vec::new();

    if let (Some(rotor_dia), Some(hub_dia)) = (rotor_dia, hub_dia) {
        if rotor_dia > 0.0 {
            let ratio = hub_dia / rotor_dia;
            if !in_range(ratio, HUB_TO_ROTOR_RATIO) {
                warnings.push(DesignWarning::HubRatio { ratio });
            }
        }

        let height = (rotor_dia - hub_dia) / 2.0;
        if let Some(clearance) = parse_field(rotor, fields::BLADE_CLEARANCE) {
            if height > 0.0 && clearance / height > MAX_CLEARANCE_TO_HEIGHT {
                warnings.push(DesignWarning::LargeClearance {
                    clearance,
                    ratio: clearance / height,
                });
            }
        }
    }

    let rotor_blades = parse_field(rotor, fields::ROTOR_BLADES);
    let stator_blades = parse_field(stator, fields::STATOR_BLADES);
    if let (Some(rotor_blades), Some(stator_blades)) = (rotor_blades, stator_blades) {
        if rotor_blades > 0.0 {
            let ratio = stator_blades / rotor_blades;
            if !in_range(ratio, STATOR_TO_ROTOR_BLADE_RATIO) {
                warnings.push(DesignWarning::BladeCountRatio { ratio });
            }
        }
    }

    if let (Some(rotor_dia), Some(duct_id)) = (rotor_dia, parse_field(stator, fields::DUCT_ID)) {
        if rotor_dia > 0.0 && duct_id > 0.0 && duct_id / rotor_dia < MIN_DUCT_TO_ROTOR {
            warnings.push(DesignWarning::DuctTooClose {
                duct_id,
                ratio: duct_id / rotor_dia,
            });
        }
    }

    warnings
}

/// Checks every known field against its recommended range.
pub fn check_ranges(record: &StageRecord) -> Vec<DesignWarning> {
    [Section::Common, Section::Rotor, Section::Stator]
        .into_iter()
        .flat_map(|section| {
            let map = record.section(section);
            section.fields().iter().filter_map(move |&field| {
                let value = parse_field(map, field)?;
                let (min, max) = recommended_range(field)?;
                (!in_range(value, (min, max))).then_some(DesignWarning::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                })
            })
        })
        .collect()
}

/// Emits each warning as a `warn!` event.
pub fn log_warnings(stage: usize, warnings: &[DesignWarning]) {
    for warning in warnings {
        warn!(stage, "{}", warning);
    }
}

fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
    value >= min && value <= max
}
