//! Subcommands and the options they share.

pub mod assembly;
pub mod init;
pub mod inspect;
pub mod row;
pub mod solve;

use anyhow::{bail, Context, Result};
use clap::Args;
use compressor_mesh::StlFormat;
use compressor_params::{
    check_design_rules, default_stage, load_stages, log_warnings, merge_with_defaults,
    StageRecord,
};
use config::constants::{
    DEFAULT_CAMBER_POSITION, DEFAULT_PROFILE_POINTS, DEFAULT_RESOLUTION, DEFAULT_SPAN_STATIONS,
};
use config::MeshSettings;
use std::path::PathBuf;
use tracing::info;

/// Where stage parameters come from.
#[derive(Args)]
pub struct StageSource {
    /// Stage file; a single default stage is used when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl StageSource {
    /// Loads every stage with blank fields filled from the defaults.
    pub fn load(&self) -> Result<Vec<StageRecord>> {
        let Some(path) = &self.input else {
            info!("no stage file given, using defaults");
            return Ok(vec![default_stage()]);
        };

        let stages = load_stages(path)
            .with_context(|| format!("failed to read stage file {}", path.display()))?;
        if stages.is_empty() {
            bail!("stage file {} contains no stages", path.display());
        }
        Ok(stages.iter().map(merge_with_defaults).collect())
    }
}

/// Tessellation and output options.
#[derive(Args)]
pub struct MeshArgs {
    /// Side facets of hubs, ducts and mount cans
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: u32,

    /// Chordwise points per airfoil surface
    #[arg(long, default_value_t = DEFAULT_PROFILE_POINTS)]
    pub profile_points: u32,

    /// Span intervals per blade
    #[arg(long, default_value_t = DEFAULT_SPAN_STATIONS)]
    pub span_stations: u32,

    /// Chordwise position of maximum camber
    #[arg(long, default_value_t = DEFAULT_CAMBER_POSITION)]
    pub camber_position: f64,

    /// Write ASCII STL instead of binary
    #[arg(long)]
    pub ascii: bool,
}

impl MeshArgs {
    pub fn settings(&self) -> Result<MeshSettings> {
        MeshSettings::new(
            self.resolution,
            self.profile_points,
            self.span_stations,
            self.camber_position,
        )
        .context("invalid mesh settings")
    }

    pub fn format(&self) -> StlFormat {
        if self.ascii {
            StlFormat::Ascii
        } else {
            StlFormat::Binary
        }
    }
}

/// Picks a stage by its 1-based number.
pub fn select_stage(stages: &[StageRecord], number: usize) -> Result<&StageRecord> {
    if number == 0 || number > stages.len() {
        bail!(
            "stage {} does not exist (file has {} stage{})",
            number,
            stages.len(),
            if stages.len() == 1 { "" } else { "s" }
        );
    }
    Ok(&stages[number - 1])
}

/// Logs design-rule warnings for one stage.
pub fn warn_design(number: usize, record: &StageRecord) {
    log_warnings(number, &check_design_rules(record));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_stage_is_one_based() {
        let stages = vec![default_stage(), StageRecord::default()];
        assert_eq!(select_stage(&stages, 1).unwrap(), &stages[0]);
        assert_eq!(select_stage(&stages, 2).unwrap(), &stages[1]);
        assert!(select_stage(&stages, 0).is_err());
        assert!(select_stage(&stages, 3).is_err());
    }

    #[test]
    fn test_default_source() {
        let source = StageSource { input: None };
        let stages = source.load().unwrap();
        assert_eq!(stages, vec![default_stage()]);
    }

    #[test]
    fn test_mesh_args_validation() {
        let args = MeshArgs {
            resolution: 2,
            profile_points: DEFAULT_PROFILE_POINTS,
            span_stations: DEFAULT_SPAN_STATIONS,
            camber_position: DEFAULT_CAMBER_POSITION,
            ascii: true,
        };
        assert!(args.settings().is_err());
        assert_eq!(args.format(), StlFormat::Ascii);
    }
}
