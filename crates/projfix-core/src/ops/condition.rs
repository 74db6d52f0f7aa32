//! Platform condition matching
//!
//! Only one condition idiom is recognised: an equality test of the
//! `GodotTargetPlatform` property against a single platform name. Any other
//! expression is treated as "not this platform".

use crate::model::Conditioned;

/// MSBuild property the platform condition tests
pub const PLATFORM_PROPERTY: &str = "GodotTargetPlatform";

/// True iff the element carries no condition or an empty one
pub fn has_no_condition(element: &impl Conditioned) -> bool {
    element.condition().map_or(true, str::is_empty)
}

/// True iff the element's condition is the platform idiom for `platform`
///
/// Surrounding whitespace and interior spaces are ignored and the
/// comparison is case-insensitive.
pub fn condition_matches(element: &impl Conditioned, platform: &str) -> bool {
    let Some(condition) = element.condition() else {
        return false;
    };
    let normalized = condition.trim().replace(' ', "");
    normalized.eq_ignore_ascii_case(&canonical_condition(platform))
}

/// `'$(GodotTargetPlatform)'=='<platform>'`
fn canonical_condition(platform: &str) -> String {
    format!("'$({})'=='{}'", PLATFORM_PROPERTY, platform)
}

/// Condition text written onto properties the engine inserts
pub fn platform_condition(platform: &str) -> String {
    format!(" '$({})' == '{}' ", PLATFORM_PROPERTY, platform)
}
