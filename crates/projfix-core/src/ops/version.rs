//! Framework moniker version comparison
//!
//! A moniker is a fixed three-character prefix followed by a dotted version
//! (`net8.0`, `net7.0.1`). Only the version part takes part in comparisons.

use std::cmp::Ordering;
use std::fmt;

/// Length of the moniker prefix (`net`)
pub const MONIKER_PREFIX_LEN: usize = 3;

/// A dotted version with two to four components
///
/// Absent trailing components order before present ones, so `8.0` sorts
/// below `8.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameworkVersion {
    major: u32,
    minor: u32,
    build: Option<u32>,
    revision: Option<u32>,
}

impl FrameworkVersion {
    /// Parse `major.minor[.build[.revision]]`. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split('.');
        let major = parse_component(parts.next()?)?;
        let minor = parse_component(parts.next()?)?;
        let build = match parts.next() {
            Some(part) => Some(parse_component(part)?),
            None => None,
        };
        let revision = match parts.next() {
            Some(part) => Some(parse_component(part)?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            major,
            minor,
            build,
            revision,
        })
    }
}

fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // .NET versions are limited to Int32 components
    text.parse::<u32>().ok().filter(|n| *n <= i32::MAX as u32)
}

impl Ord for FrameworkVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.build.cmp(&other.build))
            .then(self.revision.cmp(&other.revision))
    }
}

impl PartialOrd for FrameworkVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
        }
        if let Some(revision) = self.revision {
            write!(f, ".{}", revision)?;
        }
        Ok(())
    }
}

/// Version embedded in a moniker, or `None` when the moniker is too short
/// or its suffix is not a version. The prefix is counted in characters.
pub fn parse_moniker_version(moniker: &str) -> Option<FrameworkVersion> {
    let (start, _) = moniker.char_indices().nth(MONIKER_PREFIX_LEN)?;
    FrameworkVersion::parse(&moniker[start..])
}

/// True iff `theirs` targets a framework at least as new as `ours`
///
/// Fails closed: an unparsable moniker on either side is never usable.
pub fn is_version_usable(theirs: &str, ours: &str) -> bool {
    match (parse_moniker_version(theirs), parse_moniker_version(ours)) {
        (Some(theirs), Some(ours)) => theirs >= ours,
        _ => false,
    }
}
