//! Exports a single rotor or stator row.

use super::{select_stage, warn_design, MeshArgs, StageSource};
use anyhow::{Context, Result};
use clap::Args;
use compressor_mesh::{build_rotor, build_stator, save_stl, RowKind};
use std::path::PathBuf;

#[derive(Args)]
pub struct RowArgs {
    #[command(flatten)]
    pub source: StageSource,

    /// Stage number (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub stage: usize,

    /// Output STL file (`.stl` is appended if missing)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Add a support wall under the rotor blades (rotor only)
    #[arg(long)]
    pub support_wall: bool,

    #[command(flatten)]
    pub mesh: MeshArgs,
}

pub fn execute(args: RowArgs, kind: RowKind) -> Result<()> {
    let settings = args.mesh.settings()?;
    let stages = args.source.load()?;
    let record = select_stage(&stages, args.stage)?;
    warn_design(args.stage, record);

    let design = record.stage_design()?;
    let row = match kind {
        RowKind::Rotor => build_rotor(
            &design.coefficients,
            &design.rotor,
            args.support_wall,
            &settings,
        ),
        RowKind::Stator => build_stator(&design.coefficients, &design.stator, &settings),
    }
    .with_context(|| format!("failed to build {} for stage {}", kind, args.stage))?;

    let path = save_stl(&row.mesh, &args.output, args.mesh.format())
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    let size = row.bounding_box()?.size();
    println!(
        "{} stage {}: {} blades, span {:.3}, {} triangles -> {}",
        kind,
        args.stage,
        row.blade_count,
        row.blade_span,
        row.triangle_count(),
        path.display()
    );
    println!("  extents {:.3} x {:.3} x {:.3}", size.x, size.y, size.z);
    Ok(())
}
