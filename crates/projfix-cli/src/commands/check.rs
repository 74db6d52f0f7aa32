//! Check command
//!
//! Usage: projfix check <PATH> [--config <FILE>]

use clap::Args;
use std::path::PathBuf;

use projfix_core::{normalize_project, GodotProjectGenerator, NormalizeOptions};

use super::{load_engine_config, print_report, project_name};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Project file to check
    pub path: PathBuf,

    /// Engine configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Execute check command
///
/// Returns `false` when normalize would change the project. The file is
/// never written.
pub fn execute(args: CheckArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let config = load_engine_config(args.config.as_deref())?;
    let mut project = projfix_store::try_open(&args.path)?;

    let name = project_name(&args.path, None);
    let report = normalize_project(
        &mut project,
        &config,
        &GodotProjectGenerator::new(&config),
        &NormalizeOptions::new(&name),
    );

    if !report.has_unsaved_changes {
        println!("✓ {} is up to date", args.path.display());
        return Ok(true);
    }

    println!("✗ {} needs normalization", args.path.display());
    print_report(&report, &config.sdk_identifier);
    Ok(false)
}
