//! # Stage Files
//!
//! JSON persistence for an ordered list of stage records. The list index is
//! the stage number.
//!
//! ```json
//! {
//!   "stages": [
//!     { "common": { "RPM": "30000" }, "rotor": { ... }, "stator": { ... } }
//!   ]
//! }
//! ```

use crate::error::ParamError;
use crate::record::StageRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
struct StageFile {
    stages: Vec<StageRecord>,
}

/// Writes stages to `path`, appending `.json` unless already present.
///
/// Returns the path actually written.
pub fn save_stages(path: impl AsRef<Path>, stages: &[StageRecord]) -> Result<PathBuf, ParamError> {
    let path = stage_file_path(path);
    let file = StageFile {
        stages: stages.to_vec(),
    };
    let json = serde_json::to_string_pretty(&file)?;
    std::fs::write(&path, json)?;
    info!(path = %path.display(), stages = stages.len(), "saved stage file");
    Ok(path)
}

/// Reads stages from `path` in stored order.
pub fn load_stages(path: impl AsRef<Path>) -> Result<Vec<StageRecord>, ParamError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let file: StageFile = serde_json::from_str(&json)?;
    info!(path = %path.display(), stages = file.stages.len(), "loaded stage file");
    Ok(file.stages)
}

/// The path `save_stages` writes for `path`: `.json` appended unless present.
pub fn stage_file_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let has_extension = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".json");
        PathBuf::from(name)
    }
}
