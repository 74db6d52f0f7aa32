//! TargetFramework reconciliation
//!
//! Makes sure every configured platform builds against at least its
//! minimum framework. The pass first walks the property groups without
//! touching them and records what to remove, which requirements are
//! already covered and where new properties should go; the plan is applied
//! only afterwards.
//!
//! Adding is permissive and removing is conservative: an unconditional
//! property in an unconditional group counts towards every platform, but
//! a property is only ever deleted when its own condition or its group's
//! condition names the platform it falls short for.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use super::condition::{condition_matches, has_no_condition, platform_condition};
use super::requirements::RequirementTable;
use super::version::is_version_usable;
use crate::config::EngineConfig;
use crate::model::{Element, ProjectDocument, CONDITION_ATTRIBUTE};
use crate::{log_op_end, log_op_start};

/// Property holding the framework moniker
pub const TARGET_FRAMEWORK_PROPERTY: &str = "TargetFramework";
/// Property a user sets to opt out of automatic project updates
pub const SKIP_PROJECT_UPDATE_PROPERTY: &str = "GodotSkipProjectUpdate";

/// A `TargetFramework` property deleted by the pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedProperty {
    /// Index of the owning group among the root's children
    pub group_index: usize,
    pub value: String,
    pub condition: Option<String>,
}

/// What one reconciliation pass did to the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileOutcome {
    /// The document opted out; nothing was changed
    pub skipped: bool,
    pub removed: Vec<RemovedProperty>,
    /// `(platform, framework)` pairs that got a new property
    pub added: Vec<(String, String)>,
    /// A new property group had to be created to hold the additions
    pub created_group: bool,
}

impl ReconcileOutcome {
    pub fn changed(&self) -> bool {
        !self.removed.is_empty() || !self.added.is_empty()
    }
}

/// Decisions collected by the read-only traversal
#[derive(Debug, Default)]
struct ReconcilePlan {
    skip_project_update: bool,
    /// First unconditional group holding a `TargetFramework`
    main_group: Option<usize>,
    /// group index → property indices, ascending and de-duplicated
    removals: BTreeMap<usize, Vec<usize>>,
}

/// True iff `prop` satisfies the requirement: its version is high enough
/// and it applies to the platform through its own condition, through its
/// group's condition, or because neither carries one.
fn is_framework_usable(group: &Element, prop: &Element, platform: &str, framework: &str) -> bool {
    is_version_usable(&prop.text(), framework)
        && (condition_matches(prop, platform)
            || (has_no_condition(prop)
                && (has_no_condition(group) || condition_matches(group, platform))))
}

/// True iff `prop` is scoped to the platform by a condition and its
/// version is too low. Unlike `is_framework_usable` an unconditional
/// property in an unconditional group is never attributed to a platform.
fn should_replace_property(
    group: &Element,
    prop: &Element,
    platform: &str,
    framework: &str,
) -> bool {
    !is_version_usable(&prop.text(), framework)
        && (condition_matches(prop, platform)
            || (has_no_condition(prop) && condition_matches(group, platform)))
}

fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

fn plan_reconciliation(project: &ProjectDocument, table: &mut RequirementTable<'_>) -> ReconcilePlan {
    let mut plan = ReconcilePlan::default();

    for (group_index, group) in project.property_groups() {
        for (prop_index, prop) in group.indexed_child_elements() {
            if prop.name.eq_ignore_ascii_case(SKIP_PROJECT_UPDATE_PROPERTY) {
                plan.skip_project_update = is_truthy(&prop.text());
            }

            if !prop.name.eq_ignore_ascii_case(TARGET_FRAMEWORK_PROPERTY) {
                continue;
            }

            if plan.main_group.is_none() && has_no_condition(group) {
                plan.main_group = Some(group_index);
            }

            for index in 0..table.len() {
                let entry = &table.entries()[index];
                let (platform, framework) = (entry.platform(), entry.framework());

                if should_replace_property(group, prop, platform, framework) {
                    let queued = plan.removals.entry(group_index).or_default();
                    if !queued.contains(&prop_index) {
                        debug!(
                            group_index,
                            value = %prop.text(),
                            platform = %platform,
                            framework = %framework,
                            "Queueing insufficient TargetFramework for removal"
                        );
                        queued.push(prop_index);
                    }
                }
                table.record(
                    index,
                    is_framework_usable(group, prop, platform, framework),
                );
            }
        }
    }

    plan
}

/// Ensure every configured platform has a sufficient `TargetFramework`
///
/// Removes platform-scoped properties whose framework is too old, then adds
/// `<TargetFramework Condition=" '$(GodotTargetPlatform)' == '<platform>' ">`
/// for every platform still not covered. New properties go into the first
/// unconditional group that already holds a `TargetFramework`, or into a
/// new group if there is none.
///
/// When the document sets `GodotSkipProjectUpdate` to a truthy value the
/// document is left untouched, dirty flag included.
pub fn ensure_target_framework_is_set(
    project: &mut ProjectDocument,
    config: &EngineConfig,
) -> ReconcileOutcome {
    let start = Instant::now();
    log_op_start!(
        "ensure_target_framework_is_set",
        group_count = project.property_groups().count()
    );

    let mut table = RequirementTable::new(&config.requirements);
    let plan = plan_reconciliation(project, &mut table);

    if plan.skip_project_update {
        debug!("{} is set, skipping project update", SKIP_PROJECT_UPDATE_PROPERTY);
        log_op_end!(
            "ensure_target_framework_is_set",
            duration_ms = start.elapsed().as_millis() as u64,
            skipped = true
        );
        return ReconcileOutcome {
            skipped: true,
            ..ReconcileOutcome::default()
        };
    }

    let mut outcome = ReconcileOutcome::default();

    for (group_index, prop_indices) in &plan.removals {
        let Some(group) = project.property_group_mut(*group_index) else {
            continue;
        };
        let mut removed = Vec::with_capacity(prop_indices.len());
        // Descending, so earlier indices stay valid
        for prop_index in prop_indices.iter().rev() {
            if let Some(prop) = group.remove_child_element(*prop_index) {
                removed.push(RemovedProperty {
                    group_index: *group_index,
                    value: prop.text(),
                    condition: prop.attribute(CONDITION_ATTRIBUTE).map(str::to_string),
                });
            }
        }
        outcome.removed.extend(removed.into_iter().rev());
    }

    let mut main_group = plan.main_group;
    for requirement in table.unsatisfied() {
        let group_index = match main_group {
            Some(index) => index,
            None => {
                let index = project.add_property_group();
                outcome.created_group = true;
                main_group = Some(index);
                index
            }
        };
        let Some(group) = project.property_group_mut(group_index) else {
            continue;
        };

        let prop = Element::new(TARGET_FRAMEWORK_PROPERTY)
            .with_attribute(CONDITION_ATTRIBUTE, platform_condition(&requirement.platform))
            .with_text(requirement.framework.clone());
        group.push_child_element(prop);

        debug!(
            platform = %requirement.platform,
            framework = %requirement.framework,
            "Added platform TargetFramework"
        );
        outcome
            .added
            .push((requirement.platform.clone(), requirement.framework.clone()));
    }

    if outcome.changed() {
        project.mark_dirty();
    }

    log_op_end!(
        "ensure_target_framework_is_set",
        duration_ms = start.elapsed().as_millis() as u64,
        removed_count = outcome.removed.len(),
        added_count = outcome.added.len()
    );
    outcome
}
