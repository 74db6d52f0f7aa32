//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Document identifiers
pub const FIELD_PROJECT_PATH: &str = "project_path";
pub const FIELD_PLATFORM: &str = "platform";
pub const FIELD_FRAMEWORK: &str = "framework";

// Collection sizes
pub const FIELD_GROUP_COUNT: &str = "group_count";
pub const FIELD_REMOVED_COUNT: &str = "removed_count";
pub const FIELD_ADDED_COUNT: &str = "added_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
