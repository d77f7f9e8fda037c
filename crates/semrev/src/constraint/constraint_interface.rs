//! Constraint interface trait

use crate::version::Version;

/// Trait for all constraint types
pub trait ConstraintInterface: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Check if a concrete version satisfies this constraint
    fn check(&self, version: &Version) -> bool;

    /// Get the text this constraint was parsed from
    fn pretty_string(&self) -> String;

    /// Check if this constraint accepts every version
    fn is_match_all(&self) -> bool {
        false
    }
}
