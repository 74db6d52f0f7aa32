pub mod condition;
pub mod reconcile;
pub mod requirements;
pub mod sdk;
pub mod version;

pub use condition::{condition_matches, has_no_condition};
pub use reconcile::{ensure_target_framework_is_set, ReconcileOutcome, RemovedProperty};
pub use requirements::RequirementTable;
pub use sdk::{ensure_sdk_is_up_to_date, migrate_to_project_sdk_style};
pub use version::is_version_usable;
