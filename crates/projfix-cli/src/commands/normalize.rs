//! Normalize command
//!
//! Usage: projfix normalize <PATH> [--name <NAME>] [--config <FILE>] [--dry-run] [--no-migrate] [--json]

use clap::Args;
use std::path::PathBuf;

use projfix_core::{normalize_project, GodotProjectGenerator, NormalizeOptions};

use super::{load_engine_config, print_report, project_name};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Project file to normalize
    pub path: PathBuf,

    /// Project name used when a legacy project is regenerated (default: file stem)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Engine configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report the changes without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Never replace a legacy project with a generated skeleton
    #[arg(long)]
    pub no_migrate: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute normalize command
pub fn execute(args: NormalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_engine_config(args.config.as_deref())?;
    let mut project = projfix_store::try_open(&args.path)?;

    let name = project_name(&args.path, args.name.as_deref());
    let generator = GodotProjectGenerator::new(&config);
    let options = NormalizeOptions {
        migrate: !args.no_migrate,
        ..NormalizeOptions::new(&name)
    };
    let report = normalize_project(&mut project, &config, &generator, &options);

    let write = report.has_unsaved_changes && !args.dry_run;
    if write {
        projfix_store::save(&mut project)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !report.has_unsaved_changes {
        println!("✓ {} is up to date", args.path.display());
        return Ok(());
    }
    print_report(&report, &config.sdk_identifier);
    if write {
        println!("✓ Saved {}", args.path.display());
    } else {
        println!("Dry run: {} was not written", args.path.display());
    }
    Ok(())
}
