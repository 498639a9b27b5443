//! Prints the stages of a file and any design warnings.

use super::StageSource;
use anyhow::Result;
use clap::Args;
use compressor_params::{check_design_rules, check_ranges, Section, StageRecord};

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: StageSource,

    /// Also compare every field with its recommended range
    #[arg(long)]
    pub ranges: bool,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let stages = args.source.load()?;

    for (index, record) in stages.iter().enumerate() {
        println!("Stage {}", index + 1);
        print_record(record);

        let mut warnings = check_design_rules(record);
        if args.ranges {
            warnings.extend(check_ranges(record));
        }
        for warning in &warnings {
            println!("  warning: {}", warning);
        }
        if let Err(err) = record.stage_design() {
            println!("  error: {}", err);
        }
        println!();
    }

    Ok(())
}

fn print_record(record: &StageRecord) {
    for section in [Section::Common, Section::Rotor, Section::Stator] {
        println!("  [{}]", section.name());
        let map = record.section(section);
        let width = map.keys().map(|k| k.len()).max().unwrap_or(0);
        for (field, value) in map {
            println!("    {:width$}  {}", field, value, width = width);
        }
    }
}
