pub mod check;
pub mod normalize;
pub mod show_config;

use std::path::Path;

use projfix_core::{EngineConfig, NormalizeReport};

/// Built-in configuration, or the validated contents of `path`
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(projfix_store::config::load_config(path)?),
        None => Ok(EngineConfig::default()),
    }
}

/// Explicit name, else the project file's stem
pub fn project_name(path: &Path, explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}

/// Human-readable description of what a pipeline run changed
pub fn print_report(report: &NormalizeReport, sdk_identifier: &str) {
    if report.migrated {
        println!("  migrated to an SDK-style project");
    }
    if report.sdk_updated {
        println!("  SDK set to {}", sdk_identifier);
    }
    if report.reconcile.skipped {
        println!("  TargetFramework untouched (GodotSkipProjectUpdate is set)");
    }
    for removed in &report.reconcile.removed {
        match &removed.condition {
            Some(condition) => println!(
                "  removed TargetFramework {} (Condition=\"{}\")",
                removed.value, condition
            ),
            None => println!("  removed TargetFramework {}", removed.value),
        }
    }
    for (platform, framework) in &report.reconcile.added {
        println!("  added TargetFramework {} for {}", framework, platform);
    }
}
