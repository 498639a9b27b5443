//! Creates a stage file from defaults.

use anyhow::{bail, Context, Result};
use clap::Args;
use compressor_params::{default_stage, save_stages, stage_file_path};
use std::path::PathBuf;

#[derive(Args)]
pub struct InitArgs {
    /// Stage file to create (`.json` is appended if missing)
    pub path: PathBuf,

    /// Number of stages
    #[arg(short, long, default_value_t = 1)]
    pub stages: usize,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: InitArgs) -> Result<()> {
    if args.stages == 0 {
        bail!("a stage file needs at least one stage");
    }
    let path = stage_file_path(&args.path);
    if path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let stages = vec![default_stage(); args.stages];
    let path = save_stages(&path, &stages)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("Wrote {} default stage(s) to {}", args.stages, path.display());
    Ok(())
}
