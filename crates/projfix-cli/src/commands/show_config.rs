//! Show-config command
//!
//! Usage: projfix show-config [--config <FILE>]

use clap::Args;
use std::path::PathBuf;

use super::load_engine_config;

#[derive(Debug, Args)]
pub struct ShowConfigArgs {
    /// Engine configuration file (TOML); built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Execute show-config command
pub fn execute(args: ShowConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_engine_config(args.config.as_deref())?;
    print!("{}", projfix_store::config::to_toml_string(&config)?);
    Ok(())
}
