//! Full normalization pipeline
//!
//! Structural upgrade first, then the SDK identifier, then the
//! TargetFramework content fix-up.

use std::time::Instant;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::generator::ProjectGenerator;
use crate::model::ProjectDocument;
use crate::ops::{
    ensure_sdk_is_up_to_date, ensure_target_framework_is_set, migrate_to_project_sdk_style,
    ReconcileOutcome,
};
use crate::{log_op_end, log_op_start};

#[derive(Debug, Clone)]
pub struct NormalizeOptions<'a> {
    /// Name handed to the generator when a legacy project is migrated
    pub project_name: &'a str,
    /// Allow replacing legacy projects with a generated skeleton
    pub migrate: bool,
}

impl<'a> NormalizeOptions<'a> {
    pub fn new(project_name: &'a str) -> Self {
        Self {
            project_name,
            migrate: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    pub migrated: bool,
    pub sdk_updated: bool,
    pub reconcile: ReconcileOutcome,
    /// Dirty flag of the document once the pipeline finished
    pub has_unsaved_changes: bool,
}

/// Run migration, SDK freshness and TargetFramework reconciliation
pub fn normalize_project(
    project: &mut ProjectDocument,
    config: &EngineConfig,
    generator: &dyn ProjectGenerator,
    options: &NormalizeOptions<'_>,
) -> NormalizeReport {
    let start = Instant::now();
    log_op_start!("normalize_project", project_name = options.project_name);

    let migrated =
        options.migrate && migrate_to_project_sdk_style(project, options.project_name, generator);
    let sdk_updated = ensure_sdk_is_up_to_date(project, generator.sdk_identifier());
    let reconcile = ensure_target_framework_is_set(project, config);

    let report = NormalizeReport {
        migrated,
        sdk_updated,
        reconcile,
        has_unsaved_changes: project.has_unsaved_changes(),
    };

    log_op_end!(
        "normalize_project",
        duration_ms = start.elapsed().as_millis() as u64,
        migrated = report.migrated,
        sdk_updated = report.sdk_updated,
        dirty = report.has_unsaved_changes
    );
    report
}
