//! Version comparison utilities

use crate::constraint::{Constraint, ConstraintInterface, Operator};
use crate::version::Version;

/// Comparator for comparing parsed versions
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::NotEqual, version2)
    }

    /// Check version1 against `operator version2`, so `~` and `^` work too
    pub fn compare(version1: &Version, operator: Operator, version2: &Version) -> bool {
        Constraint::new(operator, version2.clone()).check(version1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::greater_than(&v("1.25.0"), &v("1.25.0")));
        assert!(!Comparator::greater_than(&v("1.25.0"), &v("1.26.0")));
        assert!(Comparator::greater_than(&v("1.25.0-1"), &v("1.25.0")));
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(!Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::less_than(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::less_than(&v("1.25.0"), &v("1.26.0")));
        assert!(Comparator::less_than(&v("1.25.0-beta"), &v("1.25.0")));
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::equal_to(&v("1.25.0+a"), &v("1.25.0+b")));
        assert!(!Comparator::equal_to(&v("1.25.0-1"), &v("1.25.0")));
    }

    #[test]
    fn test_not_equal_to() {
        assert!(Comparator::not_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::not_equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::not_equal_to(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_compare_with_range_operators() {
        assert!(Comparator::compare(&v("1.4.0"), Operator::Caret, &v("1.2.3")));
        assert!(!Comparator::compare(&v("2.0.0"), Operator::Caret, &v("1.2.3")));
        assert!(Comparator::compare(&v("1.2.9"), Operator::Tilde, &v("1.2.3")));
        assert!(!Comparator::compare(&v("1.3.0"), Operator::Tilde, &v("1.2.3")));
    }
}
