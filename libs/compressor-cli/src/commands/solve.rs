//! Prints velocity triangles for one stage.

use super::{select_stage, StageSource};
use anyhow::{Context, Result};
use clap::Args;
use compressor_meanline::{StageVelocityTriangles, VelocityTriangle};

#[derive(Args)]
pub struct SolveArgs {
    #[command(flatten)]
    pub source: StageSource,

    /// Stage number (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub stage: usize,

    /// Root radius; defaults to half the hub diameter
    #[arg(long)]
    pub root_radius: Option<f64>,

    /// Tip radius; defaults to half the rotor diameter
    #[arg(long)]
    pub tip_radius: Option<f64>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let stages = args.source.load()?;
    let record = select_stage(&stages, args.stage)?;

    let coefficients = record.stage_coefficients()?;
    let rotor = record.rotor_params()?;
    let root = args.root_radius.unwrap_or(rotor.hub_diameter / 2.0);
    let tip = args.tip_radius.unwrap_or(rotor.rotor_diameter / 2.0);

    let triangles = coefficients
        .solve_stage(root, tip)
        .with_context(|| format!("failed to solve stage {}", args.stage))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&triangles)?);
    } else {
        let reference = coefficients
            .solve_reference()
            .with_context(|| format!("failed to solve stage {} mean line", args.stage))?;
        print_table(&triangles, &reference);
    }
    Ok(())
}

fn print_table(triangles: &StageVelocityTriangles, reference: &VelocityTriangle) {
    println!(
        "{:<6} {:>9} {:>10} {:>10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "", "radius", "U", "cx", "beta1", "beta2", "alpha1", "alpha2", "R", "w2/w1"
    );
    let rows: [(&str, &VelocityTriangle); 4] = [
        ("root", &triangles.root),
        ("mean", &triangles.mean),
        ("tip", &triangles.tip),
        ("ref", reference),
    ];
    for (name, t) in rows {
        println!(
            "{:<6} {:>9.3} {:>10.3} {:>10.3} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.3} {:>8.3}",
            name,
            t.radius,
            t.blade_speed(),
            t.cx,
            t.beta1,
            t.beta2,
            t.alpha1,
            t.alpha2,
            t.reaction,
            t.de_haller_ratio()
        );
    }
    println!();
    println!(
        "rotor stagger {:.2} -> {:.2} deg, stator stagger {:.2} -> {:.2} deg",
        triangles.root.rotor_stagger(),
        triangles.tip.rotor_stagger(),
        triangles.root.stator_stagger(),
        triangles.tip.stator_stagger()
    );
}
