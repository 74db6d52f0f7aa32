//! projfix CLI
//!
//! Command-line interface for normalizing Godot .NET project files

use clap::{Parser, Subcommand, ValueEnum};
use projfix_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "projfix")]
#[command(about = "projfix - Godot .NET project file normalization", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Human => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Migrate, refresh the SDK and reconcile TargetFramework, then save
    Normalize(commands::normalize::NormalizeArgs),
    /// Report whether normalize would change the project (exit 1 if so)
    Check(commands::check::CheckArgs),
    /// Print the effective engine configuration as TOML
    ShowConfig(commands::show_config::ShowConfigArgs),
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format.profile());

    let result = match cli.command {
        Commands::Normalize(args) => commands::normalize::execute(args).map(|()| true),
        Commands::Check(args) => commands::check::execute(args),
        Commands::ShowConfig(args) => commands::show_config::execute(args).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
