//! # Compressor Params
//!
//! Parameter records at the application boundary.
//!
//! Users enter stages as string-keyed fields. This crate fills in defaults,
//! flags questionable designs and converts records into the typed
//! parameters of `compressor-meanline` and `compressor-mesh`. Geometry code
//! never sees a field name.
//!
//! ## Architecture
//!
//! ```text
//! stage file (JSON) ⇄ StageRecord → merge_with_defaults → StageDesign → compressor-mesh
//!                                 ↘ check_design_rules (warnings)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use compressor_params::{fields, merge_with_defaults, StageRecord};
//!
//! let record = StageRecord::from_pairs(&[(fields::RPM, "30000")], &[], &[]);
//! let design = merge_with_defaults(&record).stage_design().unwrap();
//! assert_eq!(design.coefficients.rpm, 30_000.0);
//! ```

pub mod defaults;
pub mod error;
pub mod fields;
pub mod file;
pub mod record;
pub mod rules;

pub use defaults::{default_stage, merge_with_defaults, recommended_range};
pub use error::ParamError;
pub use fields::{FieldMap, Section};
pub use file::{load_stages, save_stages, stage_file_path};
pub use record::StageRecord;
pub use rules::{check_design_rules, check_ranges, log_warnings, DesignWarning};

#[cfg(test)]
mod tests;
