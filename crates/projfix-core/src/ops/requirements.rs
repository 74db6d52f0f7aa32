//! Per-pass requirement table
//!
//! Built from the configuration at the start of every reconciliation pass,
//! so satisfaction never leaks from one call into the next.

use crate::config::PlatformRequirement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementEntry<'a> {
    pub requirement: &'a PlatformRequirement,
    satisfied: bool,
}

impl<'a> RequirementEntry<'a> {
    pub fn platform(&self) -> &'a str {
        let requirement: &'a PlatformRequirement = self.requirement;
        &requirement.platform
    }

    pub fn framework(&self) -> &'a str {
        let requirement: &'a PlatformRequirement = self.requirement;
        &requirement.framework
    }

    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }
}

/// Ordered (platform, framework) → satisfied table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementTable<'a> {
    entries: Vec<RequirementEntry<'a>>,
}

impl<'a> RequirementTable<'a> {
    /// Every entry starts unsatisfied
    pub fn new(requirements: &'a [PlatformRequirement]) -> Self {
        Self {
            entries: requirements
                .iter()
                .map(|requirement| RequirementEntry {
                    requirement,
                    satisfied: false,
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[RequirementEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// OR `usable` into the entry's flag. A satisfied entry stays satisfied.
    pub fn record(&mut self, index: usize, usable: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.satisfied |= usable;
        }
    }

    /// Entries still waiting for a usable property, in table order
    pub fn unsatisfied(&self) -> impl Iterator<Item = &'a PlatformRequirement> + '_ {
        self.entries
            .iter()
            .filter(|entry| !entry.satisfied)
            .map(|entry| entry.requirement)
    }
}
