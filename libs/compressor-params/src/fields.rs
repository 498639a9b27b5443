//! # Field Names
//!
//! Keys of the string-keyed parameter records, grouped by section.
//! Stage files written by earlier tools use exactly these names.

use std::collections::BTreeMap;

/// Field name to textual value.
pub type FieldMap = BTreeMap<String, String>;

pub const REACTION: &str = "Reaction (R)";
pub const LOADING: &str = "Loading (Psi)";
pub const FLOW: &str = "Flow (Phi)";
pub const RPM: &str = "RPM";
pub const MEAN_LINE_RADIUS: &str = "Mean Line Radius";

pub const ROTOR_DIAMETER: &str = "Rotor Diameter";
pub const HUB_DIAMETER: &str = "Hub Diameter";
pub const HUB_LENGTH: &str = "Hub Length";
pub const ROTOR_BLADES: &str = "Num of Blade (Rotor)";
pub const ROTOR_ROOT_CHORD: &str = "Root Chord (Rotor)";
pub const ROTOR_TIP_CHORD: &str = "Tip Chord (Rotor)";
pub const ROTOR_THICKNESS: &str = "Blade Thickness (Rotor)";
pub const BLADE_CLEARANCE: &str = "Blade Clearance";
pub const ROTOR_TWIST_X: &str = "X Twist (Rotor)";
pub const ROTOR_TWIST_Y: &str = "Y Twist (Rotor)";

pub const DUCT_ID: &str = "Duct ID";
pub const DUCT_LENGTH: &str = "Duct Length";
pub const DUCT_THICKNESS: &str = "Duct Thickness";
pub const STATOR_BLADES: &str = "Num of Blade (Stator)";
pub const MOUNT_CAN_LENGTH: &str = "Mount Can Length";
pub const MOUNT_CAN_DIAMETER: &str = "Mount Can Dia";
pub const MOUNT_CAN_LOCATION: &str = "Mount Can Loc";
pub const STATOR_THICKNESS: &str = "Blade Thickness (Stator)";
pub const STATOR_ROOT_CHORD: &str = "Root Chord (Stator)";
pub const STATOR_TIP_CHORD: &str = "Tip Chord (Stator)";
pub const STATOR_TWIST_X: &str = "X Twist (Stator)";
pub const STATOR_TWIST_Y: &str = "Y Twist (Stator)";

/// Which record section a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Common,
    Rotor,
    Stator,
}

impl Section {
    /// Lower-case name used in messages and stage files.
    pub fn name(self) -> &'static str {
        match self {
            Section::Common => "common",
            Section::Rotor => "rotor",
            Section::Stator => "stator",
        }
    }

    /// Every field of this section, in form order.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Section::Common => &[REACTION, LOADING, FLOW, RPM, MEAN_LINE_RADIUS],
            Section::Rotor => &[
                ROTOR_DIAMETER,
                HUB_DIAMETER,
                HUB_LENGTH,
                ROTOR_BLADES,
                ROTOR_ROOT_CHORD,
                ROTOR_TIP_CHORD,
                ROTOR_THICKNESS,
                BLADE_CLEARANCE,
                ROTOR_TWIST_X,
                ROTOR_TWIST_Y,
            ],
            Section::Stator => &[
                DUCT_ID,
                DUCT_LENGTH,
                DUCT_THICKNESS,
                STATOR_BLADES,
                MOUNT_CAN_LENGTH,
                MOUNT_CAN_DIAMETER,
                MOUNT_CAN_LOCATION,
                STATOR_THICKNESS,
                STATOR_ROOT_CHORD,
                STATOR_TIP_CHORD,
                STATOR_TWIST_X,
                STATOR_TWIST_Y,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_disjoint() {
        let all: Vec<&str> = [Section::Common, Section::Rotor, Section::Stator]
            .iter()
            .flat_map(|s| s.fields().iter().copied())
            .collect();
        let mut unique = all.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), all.len());
        assert_eq!(all.len(), 27);
    }
}
