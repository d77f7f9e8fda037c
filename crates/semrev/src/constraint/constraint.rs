//! Single `operator version` constraint

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use super::{Bound, ConstraintInterface, Operator};
use crate::part::Part;
use crate::version::{compare_pre_release, Version};

/// Where a candidate version sits relative to a constraint target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Less,
    Equal,
    Greater,
    /// The target has a wildcard at a point where everything before matched
    Within,
}

impl From<Ordering> for Position {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Position::Less,
            Ordering::Equal => Position::Equal,
            Ordering::Greater => Position::Greater,
        }
    }
}

/// A single version constraint such as `>=1.2`, `~1.2.3-1` or `2.*`.
///
/// The target version may be partial. How unwritten trailing parts behave
/// is decided by the zero-padding policy the constraint was parsed with.
///
/// Pre-releases follow two rules. `=`, `!=`, `>` and `<=` match by prefix,
/// so `=2` admits `2.0.0-alpha`. `<`, `>=`, `~` and `^` compare against the
/// target with placeholders set to zero, where a pre-release sorts below its
/// release: `>=2` rejects `2.0.0-alpha` and `<2` admits it.
#[derive(Debug, Clone)]
pub struct Constraint {
    operator: Operator,
    version: Version,
    original: String,
    zero_padding: bool,
    // derived once at construction
    target: Version,
    floor: Version,
    ceiling: Option<Version>,
}

impl Constraint {
    /// Create a constraint against a version
    pub fn new(operator: Operator, version: Version) -> Self {
        let original = format!("{}{}", operator, version);
        Self::with_original(operator, version, original, false)
    }

    pub(crate) fn with_original(operator: Operator, version: Version, original: String, zero_padding: bool) -> Self {
        let target = Version {
            major: version.major.resolve(zero_padding),
            minor: version.minor.resolve(zero_padding),
            patch: version.patch.resolve(zero_padding),
            ..version.clone()
        };
        let floor = target.floor();
        let ceiling = match operator {
            Operator::Tilde => tilde_ceiling(&version),
            Operator::Caret => caret_ceiling(&version),
            _ => None,
        };

        Constraint {
            operator,
            version,
            original,
            zero_padding,
            target,
            floor,
            ceiling,
        }
    }

    /// The constraint an empty expression or a lone `*` stands for
    pub(crate) fn any(zero_padding: bool) -> Self {
        let version = Version {
            major: Part::Wildcard,
            minor: Part::Absent,
            patch: Part::Absent,
            revision: if zero_padding { None } else { Some(vec![Part::Wildcard]) },
            pre_release: None,
            build_metadata: None,
            original: "*".to_string(),
        };
        Self::with_original(Operator::Implicit, version, String::new(), zero_padding)
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The right-hand side as written, placeholders included
    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn is_zero_padded(&self) -> bool {
        self.zero_padding
    }

    /// Lowest version admitted, when the constraint describes a range with a
    /// lower edge.
    ///
    /// `None` means unbounded below, or that the constraint matches by
    /// wildcard prefix rather than by interval (e.g. `>1.1`, `!=2`).
    pub fn lower_bound(&self) -> Option<Bound> {
        match self.operator {
            Operator::GreaterThanOrEqual | Operator::Tilde | Operator::Caret => Some(Bound::inclusive(self.floor.clone())),
            Operator::Implicit | Operator::Equal if self.is_concrete() => Some(Bound::inclusive(self.floor.clone())),
            Operator::GreaterThan if self.is_concrete() => Some(Bound::exclusive(self.floor.clone())),
            _ => None,
        }
    }

    /// Highest version admitted; see [`Constraint::lower_bound`] for when
    /// this is `None`.
    ///
    /// For `~` and `^` the edge also shuts out pre-releases of the ceiling
    /// itself, which [`Bound::allows_below`] alone would let through.
    pub fn upper_bound(&self) -> Option<Bound> {
        match self.operator {
            Operator::LessThan => Some(Bound::exclusive(self.floor.clone())),
            Operator::Tilde | Operator::Caret => self.ceiling.clone().map(Bound::exclusive),
            Operator::Implicit | Operator::Equal | Operator::LessThanOrEqual if self.is_concrete() => {
                Some(Bound::inclusive(self.floor.clone()))
            }
            _ => None,
        }
    }

    /// No wildcard left in the target once the padding policy is applied
    fn is_concrete(&self) -> bool {
        let parts_concrete = [&self.target.major, &self.target.minor, &self.target.patch]
            .iter()
            .all(|p| p.value().is_some());
        let revision_concrete = self
            .target
            .revision
            .as_ref()
            .map_or(true, |r| r.iter().all(|p| !p.is_wildcard()));
        parts_concrete && revision_concrete
    }

    fn locate(&self, version: &Version) -> Position {
        let target = &self.target;
        let parts = [
            (&version.major, &target.major),
            (&version.minor, &target.minor),
            (&version.patch, &target.patch),
        ];
        for (have, want) in parts {
            if want.is_wildcard() {
                return Position::Within;
            }
            match have.cmp(want) {
                Ordering::Equal => {}
                other => return other.into(),
            }
        }

        match locate_revision(version.revision(), target.revision()) {
            Position::Equal => {}
            other => return other,
        }

        compare_pre_release(version.pre_release(), target.pre_release()).into()
    }

    fn matches_exactly(&self, version: &Version) -> bool {
        matches!(self.locate(version), Position::Equal | Position::Within)
    }

    /// The ceiling is compared on `major.minor.patch` alone, so a pre-release
    /// of the ceiling (`2.0.0-rc.1` for `^1.2`) is already out of range.
    fn within_range(&self, version: &Version) -> bool {
        version >= &self.floor
            && self
                .ceiling
                .as_ref()
                .map_or(true, |ceiling| release_numbers(version) < release_numbers(ceiling))
    }
}

fn release_numbers(version: &Version) -> (&Part, &Part, &Part) {
    (&version.major, &version.minor, &version.patch)
}

/// A wildcard element in the wanted revision matches whatever remains
fn locate_revision(have: Option<&[Part]>, want: Option<&[Part]>) -> Position {
    let Some(want) = want else {
        return if have.is_some() { Position::Greater } else { Position::Equal };
    };
    let have = have.unwrap_or(&[]);

    for (i, w) in want.iter().enumerate() {
        if w.is_wildcard() {
            return Position::Within;
        }
        match have.get(i) {
            None => return Position::Less,
            Some(h) => match h.cmp(w) {
                Ordering::Equal => {}
                other => return other.into(),
            },
        }
    }

    if have.len() > want.len() {
        Position::Greater
    } else {
        Position::Equal
    }
}

/// `~1.2.3` and `~1.2` stop below `1.3.0`, `~1` below `2.0.0`
fn tilde_ceiling(version: &Version) -> Option<Version> {
    let major = version.major.value()?;
    Some(match version.minor.value() {
        Some(_) => Version::from_numbers(major.clone(), version.minor.increment(), BigUint::zero()),
        None => Version::from_numbers(version.major.increment(), BigUint::zero(), BigUint::zero()),
    })
}

/// The ceiling bumps the leftmost non-zero part; unwritten parts count as
/// zero but are never bumped themselves.
fn caret_ceiling(version: &Version) -> Option<Version> {
    let major = version.major.value()?;
    let Some(minor) = version.minor.value().filter(|_| major.is_zero()) else {
        return Some(Version::from_numbers(version.major.increment(), BigUint::zero(), BigUint::zero()));
    };
    if !minor.is_zero() || version.patch.value().is_none() {
        return Some(Version::from_numbers(BigUint::zero(), version.minor.increment(), BigUint::zero()));
    }
    Some(Version::from_numbers(BigUint::zero(), BigUint::zero(), version.patch.increment()))
}

impl ConstraintInterface for Constraint {
    fn check(&self, version: &Version) -> bool {
        match self.operator {
            Operator::Implicit | Operator::Equal => self.matches_exactly(version),
            Operator::NotEqual => !self.matches_exactly(version),
            Operator::LessThan => version < &self.floor,
            Operator::GreaterThanOrEqual => version >= &self.floor,
            Operator::GreaterThan => self.locate(version) == Position::Greater,
            Operator::LessThanOrEqual => self.locate(version) != Position::Greater,
            Operator::Tilde | Operator::Caret => self.within_range(version),
        }
    }

    fn pretty_string(&self) -> String {
        self.original.clone()
    }

    fn is_match_all(&self) -> bool {
        self.operator.is_equality() && self.target.major.is_wildcard()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}
