//! The version data model and its total order

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::BigUint;

use crate::error::Result;
use crate::part::{Identifier, Part};
use crate::version_parser::VersionParser;

/// A parsed version.
///
/// A version parsed with [`Version::parse`] always has concrete major, minor
/// and patch parts. Versions that come out of a constraint expression may
/// still hold [`Part::Wildcard`] or [`Part::Absent`] placeholders.
///
/// The text after `-` is a *revision* when it is purely numeric and a
/// *pre-release* otherwise. A revision denotes a packaging revision and sorts
/// above the bare version (`1.2.3 < 1.2.3-1`), a pre-release sorts below it
/// (`1.2.3-rc.1 < 1.2.3`). Build metadata is kept for display only.
#[derive(Debug, Clone)]
pub struct Version {
    pub(crate) major: Part,
    pub(crate) minor: Part,
    pub(crate) patch: Part,
    pub(crate) revision: Option<Vec<Part>>,
    pub(crate) pre_release: Option<Vec<Identifier>>,
    pub(crate) build_metadata: Option<String>,
    pub(crate) original: String,
}

impl Version {
    /// Parse a version in strict `MAJOR.MINOR.PATCH[-SUFFIX][+METADATA]` form
    pub fn parse(version: &str) -> Result<Self> {
        VersionParser::new().parse(version)
    }

    /// Build a plain `major.minor.patch` version
    pub fn new(major: impl Into<BigUint>, minor: impl Into<BigUint>, patch: impl Into<BigUint>) -> Self {
        Self::from_numbers(major.into(), minor.into(), patch.into())
    }

    pub(crate) fn from_numbers(major: BigUint, minor: BigUint, patch: BigUint) -> Self {
        let original = format!("{}.{}.{}", major, minor, patch);
        Version {
            major: Part::Value(major),
            minor: Part::Value(minor),
            patch: Part::Value(patch),
            revision: None,
            pre_release: None,
            build_metadata: None,
            original,
        }
    }

    pub fn major(&self) -> &Part {
        &self.major
    }

    pub fn minor(&self) -> &Part {
        &self.minor
    }

    pub fn patch(&self) -> &Part {
        &self.patch
    }

    /// The numeric revision after `-`, if any
    pub fn revision(&self) -> Option<&[Part]> {
        self.revision.as_deref()
    }

    /// The pre-release identifiers after `-`, if any
    pub fn pre_release(&self) -> Option<&[Identifier]> {
        self.pre_release.as_deref()
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    pub fn has_revision(&self) -> bool {
        self.revision.is_some()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// The exact text this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn compare(&self, other: &Version) -> Ordering {
        self.cmp(other)
    }

    pub fn equal(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Equal
    }

    pub fn less_than(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Less
    }

    pub fn less_than_or_equal(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Greater
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    pub fn greater_than_or_equal(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Less
    }

    /// Lowest version covered by this one: placeholders become zero and the
    /// revision is cut at its first wildcard.
    pub(crate) fn floor(&self) -> Version {
        let revision = self.revision.as_ref().and_then(|parts| {
            let concrete: Vec<Part> = parts.iter().take_while(|p| !p.is_wildcard()).cloned().collect();
            if concrete.is_empty() {
                None
            } else {
                Some(concrete)
            }
        });

        let mut floor = Self::from_numbers(self.major.floor(), self.minor.floor(), self.patch.floor());
        floor.revision = revision;
        floor.pre_release = self.pre_release.clone();
        floor.original = floor.canonical_string();
        floor
    }

    fn canonical_string(&self) -> String {
        let mut s = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if let Some(revision) = &self.revision {
            let joined: Vec<String> = revision.iter().map(|p| p.to_string()).collect();
            s.push('-');
            s.push_str(&joined.join("."));
        } else if let Some(pre) = &self.pre_release {
            let joined: Vec<String> = pre.iter().map(|i| i.to_string()).collect();
            s.push('-');
            s.push_str(&joined.join("."));
        }
        s
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.revision.cmp(&other.revision))
            .then_with(|| compare_pre_release(self.pre_release.as_deref(), other.pre_release.as_deref()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.revision.hash(state);
        self.pre_release.hash(state);
    }
}

/// A release without pre-release identifiers is greater than one with them
pub(crate) fn compare_pre_release(a: Option<&[Identifier]>, b: Option<&[Identifier]>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl FromStr for Version {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_compare() {
        assert_eq!(v("1.2.3").compare(&v("1.4.5")), Ordering::Less);
        assert_eq!(v("2.2.3").compare(&v("1.5.1")), Ordering::Greater);
        assert_eq!(v("2.2.3").compare(&v("2.2.2")), Ordering::Greater);
        assert_eq!(v("1.2.3-1").compare(&v("1.2.3-1")), Ordering::Equal);
    }

    #[test]
    fn test_revision_sorts_above_release() {
        assert!(v("1.2.3") < v("1.2.3-1"));
        assert!(v("1.2.3-1") > v("1.2.3"));
        assert!(v("1.0.0-1") < v("1.0.0-2"));
        assert!(v("1.0.0-2") > v("1.0.0-1"));
        assert!(v("1.2.0") < v("1.2.0-1+metadata"));
        assert!(v("1.0.0-2.2") < v("1.0.0-2.11"));
        assert!(v("1.0.0-1") < v("1.0.0-1.1"));
    }

    #[test]
    fn test_pre_release_sorts_below_release() {
        assert!(v("1.0.0-alpha") < v("1.0.0"));
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.beta"));
        assert!(v("1.0.0-alpha.beta") < v("1.0.0-beta"));
        assert!(v("1.0.0-beta.2") < v("1.0.0-beta.11"));
        assert!(v("1.0.0-beta.11") < v("1.0.0-rc.1"));
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
    }

    #[test]
    fn test_build_metadata_is_ignored() {
        assert_eq!(v("1.2.3+foo"), v("1.2.3+bar"));
        assert_eq!(v("1.2.3+foo").compare(&v("1.2.3+bar")), Ordering::Equal);
        assert_eq!(v("1.2.3+foo").build_metadata(), Some("foo"));
    }

    #[test]
    fn test_large_numbers_compare_numerically() {
        assert!(v("1.2.2147483648") > v("1.2.999"));
        assert!(v("2147483648.3.0") > v("214748364.8.0"));
        assert!(v("18446744073709551616.0.0") > v("18446744073709551615.0.0"));
    }

    #[test]
    fn test_derived_helpers() {
        let a = v("1.2.3");
        let b = v("1.2.4");
        assert!(a.less_than(&b));
        assert!(a.less_than_or_equal(&b));
        assert!(b.greater_than(&a));
        assert!(b.greater_than_or_equal(&a));
        assert!(a.equal(&v("1.2.3+build")));
        assert!(a.less_than_or_equal(&v("1.2.3")));
        assert!(a.greater_than_or_equal(&v("1.2.3")));
    }

    #[test]
    fn test_display_keeps_original_text() {
        for s in ["1.2.0-x.Y.0+metadata-width-hypen", "1.0.0-x-y-z.-", "1.2.3+test.01"] {
            assert_eq!(v(s).to_string(), s);
        }
    }

    #[test]
    fn test_accessors() {
        let rev = v("1.2.3-4.5");
        assert_eq!(rev.major(), &Part::from(1u64));
        assert_eq!(rev.revision(), Some(&[Part::from(4u64), Part::from(5u64)][..]));
        assert!(rev.has_revision());
        assert!(!rev.is_pre_release());

        let pre = v("1.2.3-rc.1");
        assert!(pre.is_pre_release());
        assert_eq!(pre.revision(), None);
        assert_eq!(pre.pre_release().map(|p| p.len()), Some(2));
    }

    #[test]
    fn test_new() {
        let version = Version::new(1u32, 2u32, 3u32);
        assert_eq!(version, v("1.2.3"));
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_hash_ignores_metadata() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(v("1.2.3+foo"));
        assert!(set.contains(&v("1.2.3+bar")));
        assert!(!set.contains(&v("1.2.3-1")));
    }

    #[test]
    fn test_from_str() {
        let parsed: Version = "3.0.1".parse().unwrap();
        assert_eq!(parsed, v("3.0.1"));
        assert!("3.0".parse::<Version>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let version = v("1.2.3-4+meta");
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"1.2.3-4+meta\"");
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "1.2.3-4+meta");
        assert!(serde_json::from_str::<Version>("\"1.2\"").is_err());
    }
}
