//! SDK-style migration and SDK identifier freshness

use std::time::Instant;

use tracing::debug;

use crate::generator::ProjectGenerator;
use crate::model::ProjectDocument;
use crate::{log_op_end, log_op_start};

/// Replace a legacy (non-SDK) project with a generated SDK-style skeleton
///
/// Documents that already declare an SDK are left alone. Otherwise the
/// whole document is swapped for `generator.generate(project_name)`; only
/// the file path carries over. Returns true when the document was replaced.
pub fn migrate_to_project_sdk_style(
    project: &mut ProjectDocument,
    project_name: &str,
    generator: &dyn ProjectGenerator,
) -> bool {
    if project.sdk().is_some_and(|sdk| !sdk.is_empty()) {
        return false;
    }

    let start = Instant::now();
    log_op_start!("migrate_to_project_sdk_style", project_name = project_name);

    let path = project.path().map(|p| p.to_path_buf());
    let mut generated = generator.generate(project_name);
    generated.set_path(path);
    generated.mark_dirty();
    *project = generated;

    log_op_end!(
        "migrate_to_project_sdk_style",
        duration_ms = start.elapsed().as_millis() as u64
    );
    true
}

/// Make the root `Sdk` attribute equal `expected`
///
/// A non-empty identifier that matches `expected` ignoring surrounding
/// whitespace and ASCII case is kept as written. Anything else is replaced
/// by `expected` and the document is marked dirty. Returns true when the
/// identifier was rewritten.
pub fn ensure_sdk_is_up_to_date(project: &mut ProjectDocument, expected: &str) -> bool {
    if let Some(current) = project.sdk() {
        if !current.is_empty() && current.trim().eq_ignore_ascii_case(expected) {
            return false;
        }
    }

    debug!(
        current = project.sdk().unwrap_or_default(),
        expected = expected,
        "Updating stale SDK identifier"
    );
    project.set_sdk(expected);
    project.mark_dirty();
    true
}
