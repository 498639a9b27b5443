//! Exports every stage laid out along the axis.

use super::{warn_design, MeshArgs, StageSource};
use anyhow::{Context, Result};
use clap::Args;
use compressor_mesh::{assemble_stages, save_stl};
use std::path::PathBuf;

#[derive(Args)]
pub struct AssemblyArgs {
    #[command(flatten)]
    pub source: StageSource,

    /// Output STL file (`.stl` is appended if missing)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Add support walls under rotor blades
    #[arg(long)]
    pub support_wall: bool,

    /// Turn every rotor by this many degrees before export
    #[arg(long, default_value_t = 0.0)]
    pub rotor_angle: f64,

    #[command(flatten)]
    pub mesh: MeshArgs,
}

pub fn execute(args: AssemblyArgs) -> Result<()> {
    let settings = args.mesh.settings()?;
    let records = args.source.load()?;

    let designs = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            warn_design(index + 1, record);
            record
                .stage_design()
                .with_context(|| format!("stage {} has invalid parameters", index + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let assembly = assemble_stages(&designs, args.support_wall, &settings)
        .context("failed to build assembly")?;
    let mesh = assembly.posed(args.rotor_angle.to_radians())?;

    let path = save_stl(&mesh, &args.output, args.mesh.format())
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "{} stage(s), {} rows, length {:.3}, {} triangles -> {}",
        designs.len(),
        assembly.len(),
        assembly.length(),
        mesh.triangle_count(),
        path.display()
    );
    Ok(())
}
