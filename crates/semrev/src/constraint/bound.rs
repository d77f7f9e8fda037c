//! Bound type for constraint boundaries

use std::cmp::Ordering;
use std::fmt;

use crate::version::Version;

/// Represents a bound (lower or upper) of a version constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    version: Version,
    is_inclusive: bool,
}

impl Bound {
    /// Create a new bound
    pub fn new(version: Version, is_inclusive: bool) -> Self {
        Bound {
            version,
            is_inclusive,
        }
    }

    pub fn inclusive(version: Version) -> Self {
        Self::new(version, true)
    }

    pub fn exclusive(version: Version) -> Self {
        Self::new(version, false)
    }

    /// Get the bounding version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if the bound is inclusive
    pub fn is_inclusive(&self) -> bool {
        self.is_inclusive
    }

    /// Used as a lower bound: does `version` lie at or above it?
    pub fn allows_above(&self, version: &Version) -> bool {
        match version.cmp(&self.version) {
            Ordering::Greater => true,
            Ordering::Equal => self.is_inclusive,
            Ordering::Less => false,
        }
    }

    /// Used as an upper bound: does `version` lie at or below it?
    pub fn allows_below(&self, version: &Version) -> bool {
        match version.cmp(&self.version) {
            Ordering::Less => true,
            Ordering::Equal => self.is_inclusive,
            Ordering::Greater => false,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.version,
            if self.is_inclusive {
                "inclusive"
            } else {
                "exclusive"
            }
        )
    }
}
