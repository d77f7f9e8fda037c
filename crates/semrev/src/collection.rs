//! Sortable collection of versions

use std::ops::{Deref, DerefMut};

use crate::error::Result;
use crate::version::Version;

/// An ordered list of versions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection(Vec<Version>);

impl Collection {
    pub fn new(versions: Vec<Version>) -> Self {
        Collection(versions)
    }

    /// Parse every entry; the first invalid one aborts the whole collection
    pub fn parse(versions: &[&str]) -> Result<Self> {
        versions.iter().map(|v| Version::parse(v)).collect()
    }

    /// Sort versions in ascending order
    pub fn sort(&mut self) {
        self.0.sort();
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(&mut self) {
        self.0.sort_by(|a, b| b.cmp(a));
    }

    pub fn into_inner(self) -> Vec<Version> {
        self.0
    }
}

impl Deref for Collection {
    type Target = [Version];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Collection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Version>> for Collection {
    fn from(versions: Vec<Version>) -> Self {
        Collection(versions)
    }
}

impl FromIterator<Version> for Collection {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        Collection(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(collection: &Collection) -> Vec<String> {
        collection.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_sort() {
        let mut versions = Collection::parse(&["1.1.1", "1.0.0", "1.2.0", "2.0.0", "0.7.1"]).unwrap();
        versions.sort();
        assert_eq!(strings(&versions), vec!["0.7.1", "1.0.0", "1.1.1", "1.2.0", "2.0.0"]);
    }

    #[test]
    fn test_rsort() {
        let mut versions = Collection::parse(&["1.0.0-beta", "1.0.0", "1.0.0-1", "0.9.0"]).unwrap();
        versions.rsort();
        assert_eq!(strings(&versions), vec!["1.0.0-1", "1.0.0", "1.0.0-beta", "0.9.0"]);
    }

    #[test]
    fn test_parse_rejects_invalid_entry() {
        let err = Collection::parse(&["1.0.0", "v1.0.0"]).unwrap_err();
        assert!(err.is_invalid_version());
    }

    #[test]
    fn test_iteration() {
        let versions: Collection = ["2.0.0", "1.0.0"].iter().map(|s| Version::parse(s).unwrap()).collect();
        assert_eq!(versions.len(), 2);
        assert_eq!((&versions).into_iter().count(), 2);
        let inner = versions.into_inner();
        assert_eq!(inner[1].to_string(), "1.0.0");
    }
}
