//! Constraints - `||`-separated groups of AND-ed constraints

use std::fmt;
use std::str::FromStr;

use super::{Constraint, ConstraintInterface};
use crate::error::{Error, Result};
use crate::version::Version;
use crate::version_parser::VersionParser;

/// Options fixed at parse time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintOptions {
    /// Treat unwritten trailing parts of a target as `0` instead of wildcards
    pub zero_padding: bool,
}

impl ConstraintOptions {
    pub fn with_zero_padding(mut self, zero_padding: bool) -> Self {
        self.zero_padding = zero_padding;
        self
    }
}

/// A parsed constraint expression such as `>=1.2, <2.0 || ^3`.
///
/// A version satisfies the expression when it satisfies every constraint of
/// at least one group.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    groups: Vec<Vec<Constraint>>,
    options: ConstraintOptions,
    original: String,
}

impl Constraints {
    /// Parse with the default options (no zero-padding)
    pub fn parse(constraints: &str) -> Result<Self> {
        Self::with_options(constraints, ConstraintOptions::default())
    }

    pub fn with_options(constraints: &str, options: ConstraintOptions) -> Result<Self> {
        VersionParser::new().parse_constraints(constraints, options)
    }

    pub(crate) fn from_groups(groups: Vec<Vec<Constraint>>, options: ConstraintOptions, original: String) -> Self {
        Constraints {
            groups,
            options,
            original,
        }
    }

    /// The OR-ed groups, each a list of AND-ed constraints
    pub fn groups(&self) -> &[Vec<Constraint>] {
        &self.groups
    }

    pub fn options(&self) -> ConstraintOptions {
        self.options
    }

    /// Check if a version satisfies the expression
    pub fn check(&self, version: &Version) -> bool {
        self.groups.is_empty() || self.groups.iter().any(|group| group.iter().all(|c| c.check(version)))
    }
}

impl ConstraintInterface for Constraints {
    fn check(&self, version: &Version) -> bool {
        Constraints::check(self, version)
    }

    fn pretty_string(&self) -> String {
        self.original.clone()
    }

    fn is_match_all(&self) -> bool {
        self.groups.is_empty() || self.groups.iter().any(|group| group.iter().all(|c| c.is_match_all()))
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self
            .groups
            .iter()
            .map(|group| group.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", "))
            .collect();
        write!(f, "{}", groups.join(" || "))
    }
}

impl FromStr for Constraints {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Constraints {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Constraints {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Constraints::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_and_group() {
        let c = Constraints::parse(">=1.2.3, <2.0.0").unwrap();
        assert!(c.check(&v("1.2.3")));
        assert!(c.check(&v("1.9.9-1")));
        assert!(!c.check(&v("2.0.0")));
        assert!(!c.check(&v("1.2.2")));
    }

    #[test]
    fn test_or_groups() {
        let c: Constraints = "^1.2 || ~3.4.1 || 5".parse().unwrap();
        assert!(c.check(&v("1.9.0")));
        assert!(c.check(&v("3.4.8")));
        assert!(c.check(&v("5.0.3-2")));
        assert!(!c.check(&v("2.0.0")));
        assert!(!c.check(&v("3.5.0")));
    }

    #[test]
    fn test_empty_expression_matches_everything() {
        for text in ["", "   "] {
            let c = Constraints::parse(text).unwrap();
            assert!(c.is_match_all());
            assert!(c.check(&v("0.0.0-alpha")));
            assert!(c.check(&v("12.3.4-5")));
        }
        assert!(Constraints::default().check(&v("1.0.0")));
        assert!(Constraints::default().groups().is_empty());
    }

    #[test]
    fn test_zero_padding_option() {
        let options = ConstraintOptions::default().with_zero_padding(true);
        let c = Constraints::with_options("1.2", options).unwrap();
        assert!(c.options().zero_padding);
        assert!(c.check(&v("1.2.0")));
        assert!(!c.check(&v("1.2.1")));

        let c = Constraints::parse("1.2").unwrap();
        assert!(!c.options().zero_padding);
        assert!(c.check(&v("1.2.1")));
    }

    #[test]
    fn test_display_and_pretty_string() {
        let c = Constraints::parse(">=1.0   <2 ||  ^3.1").unwrap();
        assert_eq!(c.to_string(), ">=1.0, <2 || ^3.1");
        assert_eq!(c.pretty_string(), ">=1.0   <2 ||  ^3.1");
    }

    #[test]
    fn test_invalid() {
        let err = Constraints::parse(">= bar").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not parse version constraint \">= bar\": Invalid version string \"bar\""
        );
        assert!(Constraints::parse("1.0 ||").is_err());
        assert!(Constraints::parse("<>1.0").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let c: Constraints = serde_json::from_str("\"^1.2 || 2.*\"").unwrap();
        assert!(c.check(&v("2.5.0")));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"^1.2 || 2.*\"");
        assert!(serde_json::from_str::<Constraints>("\">= nope\"").is_err());
    }
}
