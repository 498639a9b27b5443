//! # Stage Records
//!
//! One stage as three string-keyed sections, and its conversion to the
//! typed parameters the solver and mesh builders take.

use crate::error::ParamError;
use crate::fields::{self, FieldMap, Section};
use compressor_meanline::StageCoefficients;
use compressor_mesh::{RotorParams, StageDesign, StatorParams};
use serde::{Deserialize, Serialize};

/// Parameters of one stage as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    #[serde(default)]
    pub common: FieldMap,
    #[serde(default)]
    pub rotor: FieldMap,
    #[serde(default)]
    pub stator: FieldMap,
}

impl StageRecord {
    /// Builds a record from `(field, value)` pairs per section.
    pub fn from_pairs(
        common: &[(&str, &str)],
        rotor: &[(&str, &str)],
        stator: &[(&str, &str)],
    ) -> Self {
        let map = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<FieldMap>()
        };
        Self {
            common: map(common),
            rotor: map(rotor),
            stator: map(stator),
        }
    }

    /// The map holding a section's fields.
    pub fn section(&self, section: Section) -> &FieldMap {
        match section {
            Section::Common => &self.common,
            Section::Rotor => &self.rotor,
            Section::Stator => &self.stator,
        }
    }

    pub(crate) fn section_mut(&mut self, section: Section) -> &mut FieldMap {
        match section {
            Section::Common => &mut self.common,
            Section::Rotor => &mut self.rotor,
            Section::Stator => &mut self.stator,
        }
    }

    /// Reads the stage coefficients.
    pub fn stage_coefficients(&self) -> Result<StageCoefficients, ParamError> {
        let f = Reader::new(&self.common, Section::Common);
        Ok(StageCoefficients::new(
            f.number(fields::REACTION)?,
            f.number(fields::LOADING)?,
            f.number(fields::FLOW)?,
            f.number(fields::RPM)?,
            f.number(fields::MEAN_LINE_RADIUS)?,
        )?)
    }

    /// Reads the rotor parameters.
    pub fn rotor_params(&self) -> Result<RotorParams, ParamError> {
        let f = Reader::new(&self.rotor, Section::Rotor);
        Ok(RotorParams {
            rotor_diameter: f.number(fields::ROTOR_DIAMETER)?,
            hub_diameter: f.number(fields::HUB_DIAMETER)?,
            hub_length: f.number(fields::HUB_LENGTH)?,
            blade_count: f.count(fields::ROTOR_BLADES)?,
            root_chord: f.number(fields::ROTOR_ROOT_CHORD)?,
            tip_chord: f.number(fields::ROTOR_TIP_CHORD)?,
            thickness: f.number(fields::ROTOR_THICKNESS)?,
            clearance: f.number(fields::BLADE_CLEARANCE)?,
            twist_x: f.number(fields::ROTOR_TWIST_X)?,
            twist_y: f.number(fields::ROTOR_TWIST_Y)?,
        })
    }

    /// Reads the stator parameters.
    pub fn stator_params(&self) -> Result<StatorParams, ParamError> {
        let f = Reader::new(&self.stator, Section::Stator);
        Ok(StatorParams {
            duct_inner_diameter: f.number(fields::DUCT_ID)?,
            duct_length: f.number(fields::DUCT_LENGTH)?,
            duct_thickness: f.number(fields::DUCT_THICKNESS)?,
            blade_count: f.count(fields::STATOR_BLADES)?,
            mount_can_length: f.number(fields::MOUNT_CAN_LENGTH)?,
            mount_can_diameter: f.number(fields::MOUNT_CAN_DIAMETER)?,
            mount_can_location: f.number(fields::MOUNT_CAN_LOCATION)?,
            thickness: f.number(fields::STATOR_THICKNESS)?,
            root_chord: f.number(fields::STATOR_ROOT_CHORD)?,
            tip_chord: f.number(fields::STATOR_TIP_CHORD)?,
            twist_x: f.number(fields::STATOR_TWIST_X)?,
            twist_y: f.number(fields::STATOR_TWIST_Y)?,
        })
    }

    /// Reads every section into a typed stage.
    pub fn stage_design(&self) -> Result<StageDesign, ParamError> {
        Ok(StageDesign {
            coefficients: self.stage_coefficients()?,
            rotor: self.rotor_params()?,
            stator: self.stator_params()?,
        })
    }

    /// Writes a typed stage back into record form.
    pub fn from_design(design: &StageDesign) -> Self {
        let c = &design.coefficients;
        let r = &design.rotor;
        let s = &design.stator;
        let num = |v: f64| v.to_string();
        let int = |v: u32| v.to_string();

        Self {
            common: collect([
                (fields::REACTION, num(c.reaction)),
                (fields::LOADING, num(c.loading)),
                (fields::FLOW, num(c.flow)),
                (fields::RPM, num(c.rpm)),
                (fields::MEAN_LINE_RADIUS, num(c.reference_radius)),
            ]),
            rotor: collect([
                (fields::ROTOR_DIAMETER, num(r.rotor_diameter)),
                (fields::HUB_DIAMETER, num(r.hub_diameter)),
                (fields::HUB_LENGTH, num(r.hub_length)),
                (fields::ROTOR_BLADES, int(r.blade_count)),
                (fields::ROTOR_ROOT_CHORD, num(r.root_chord)),
                (fields::ROTOR_TIP_CHORD, num(r.tip_chord)),
                (fields::ROTOR_THICKNESS, num(r.thickness)),
                (fields::BLADE_CLEARANCE, num(r.clearance)),
                (fields::ROTOR_TWIST_X, num(r.twist_x)),
                (fields::ROTOR_TWIST_Y, num(r.twist_y)),
            ]),
            stator: collect([
                (fields::DUCT_ID, num(s.duct_inner_diameter)),
                (fields::DUCT_LENGTH, num(s.duct_length)),
                (fields::DUCT_THICKNESS, num(s.duct_thickness)),
                (fields::STATOR_BLADES, int(s.blade_count)),
                (fields::MOUNT_CAN_LENGTH, num(s.mount_can_length)),
                (fields::MOUNT_CAN_DIAMETER, num(s.mount_can_diameter)),
                (fields::MOUNT_CAN_LOCATION, num(s.mount_can_location)),
                (fields::STATOR_THICKNESS, num(s.thickness)),
                (fields::STATOR_ROOT_CHORD, num(s.root_chord)),
                (fields::STATOR_TIP_CHORD, num(s.tip_chord)),
                (fields::STATOR_TWIST_X, num(s.twist_x)),
                (fields::STATOR_TWIST_Y, num(s.twist_y)),
            ]),
        }
    }
}

fn collect<const N: usize>(pairs: [(&str, String); N]) -> FieldMap {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Typed lookups into one section.
struct Reader<'a> {
    map: &'a FieldMap,
    section: Section,
}

impl<'a> Reader<'a> {
    fn new(map: &'a FieldMap, section: Section) -> Self {
        Self { map, section }
    }

    fn raw(&self, field: &'static str) -> Result<&'a str, ParamError> {
        self.map
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .ok_or(ParamError::MissingField {
                section: self.section.name(),
                field,
            })
    }

    fn number(&self, field: &'static str) -> Result<f64, ParamError> {
        let raw = self.raw(field)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParamError::InvalidNumber {
                field,
                value: raw.to_string(),
                expected: "number",
            })
    }

    fn count(&self, field: &'static str) -> Result<u32, ParamError> {
        let raw = self.raw(field)?;
        raw.parse::<u32>().map_err(|_| ParamError::InvalidNumber {
            field,
            value: raw.to_string(),
            expected: "whole number",
        })
    }
}

/// Parses a field leniently, returning `None` when absent or not a number.
pub(crate) fn parse_field(map: &FieldMap, field: &str) -> Option<f64> {
    map.get(field)?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
