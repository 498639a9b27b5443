//! Axial compressor command-line interface.
//!
//! Reads stage files, solves velocity triangles and writes blade rows as STL.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Axial compressor blade-row generator
#[derive(Parser)]
#[command(name = "compressor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Axial compressor blade-row geometry", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a stage file filled with default parameters
    Init(commands::init::InitArgs),
    /// List stages and design warnings
    Inspect(commands::inspect::InspectArgs),
    /// Print root, mean and tip velocity triangles
    Solve(commands::solve::SolveArgs),
    /// Export one rotor row as STL
    Rotor(commands::row::RowArgs),
    /// Export one stator row as STL
    Stator(commands::row::RowArgs),
    /// Export every stage laid out along the axis as STL
    Assembly(commands::assembly::AssemblyArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Inspect(args) => commands::inspect::execute(args),
        Commands::Solve(args) => commands::solve::execute(args),
        Commands::Rotor(args) => commands::row::execute(args, compressor_mesh::RowKind::Rotor),
        Commands::Stator(args) => commands::row::execute(args, compressor_mesh::RowKind::Stator),
        Commands::Assembly(args) => commands::assembly::execute(args),
    }
}
