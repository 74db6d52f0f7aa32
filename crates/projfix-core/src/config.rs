//! Engine configuration
//!
//! The requirement table and the SDK identifier the engine targets. The
//! defaults reproduce the built-in Godot .NET values; a TOML file can
//! override any field (see `projfix_store::config`).

use serde::{Deserialize, Serialize};

use crate::errors::{ProjFixError, Result};
use crate::ops::version::parse_moniker_version;

/// SDK identifier written into migrated and stale projects
pub const DEFAULT_SDK_IDENTIFIER: &str = "Godot.NET.Sdk/4.4.0";
/// Framework a freshly generated project targets
pub const DEFAULT_TARGET_FRAMEWORK: &str = "net8.0";

/// Minimum framework required when building for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRequirement {
    pub platform: String,
    pub framework: String,
}

impl PlatformRequirement {
    pub fn new(platform: impl Into<String>, framework: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            framework: framework.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Expected SDK identifier for the freshness check and generator
    pub sdk_identifier: String,
    /// Framework the unconditional `TargetFramework` of a generated project gets
    pub default_framework: String,
    /// Platforms the engine guarantees coverage for, in insertion order
    pub requirements: Vec<PlatformRequirement>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sdk_identifier: DEFAULT_SDK_IDENTIFIER.to_string(),
            default_framework: DEFAULT_TARGET_FRAMEWORK.to_string(),
            requirements: vec![
                PlatformRequirement::new("ios", "net8.0"),
                PlatformRequirement::new("android", "net7.0"),
            ],
        }
    }
}

impl EngineConfig {
    /// Check that the configuration can drive a reconciliation pass
    ///
    /// # Errors
    /// * `InvalidConfig` - empty SDK identifier, empty requirement list,
    ///   empty or duplicated platform, a platform with quotes or
    ///   whitespace anywhere in it, or a framework moniker without a
    ///   parsable version
    pub fn validate(&self) -> Result<()> {
        if self.sdk_identifier.trim().is_empty() {
            return Err(invalid("sdk_identifier must not be empty"));
        }
        if parse_moniker_version(&self.default_framework).is_none() {
            return Err(invalid(&format!(
                "default_framework '{}' has no parsable version",
                self.default_framework
            )));
        }
        if self.requirements.is_empty() {
            return Err(invalid("at least one platform requirement is needed"));
        }

        let mut seen = Vec::with_capacity(self.requirements.len());
        for requirement in &self.requirements {
            let platform = requirement.platform.as_str();
            if platform.is_empty() {
                return Err(invalid("platform names must not be empty"));
            }
            // The name is spliced verbatim into `== '<platform>'` conditions
            if platform.chars().any(|c| c == '\'' || c.is_whitespace()) {
                return Err(invalid(&format!(
                    "platform {:?} cannot contain quotes or whitespace",
                    platform
                )));
            }
            let lowered = platform.to_lowercase();
            if seen.contains(&lowered) {
                return Err(invalid(&format!("duplicate platform '{}'", platform)));
            }
            seen.push(lowered);

            if parse_moniker_version(&requirement.framework).is_none() {
                return Err(invalid(&format!(
                    "framework '{}' for platform '{}' has no parsable version",
                    requirement.framework, platform
                )));
            }
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> ProjFixError {
    ProjFixError::InvalidConfig {
        reason: reason.to_string(),
    }
}
