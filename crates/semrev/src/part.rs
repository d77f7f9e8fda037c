//! Positional version components and pre-release identifiers

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A single positional value of a version.
///
/// The variant order is significant: the derived ordering places `Absent`
/// below any value and `Wildcard` above any value, which keeps `Ord`
/// total for versions that still carry placeholders.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    /// Not written in the source text; meaning depends on the padding policy
    Absent,
    /// A concrete non-negative integer of unbounded width
    Value(BigUint),
    /// `*`, `x` or `X`; matches any value
    Wildcard,
}

impl Part {
    /// Parse a run of ASCII digits
    pub(crate) fn from_digits(digits: &str) -> Option<Self> {
        BigUint::parse_bytes(digits.as_bytes(), 10).map(Part::Value)
    }

    pub fn zero() -> Self {
        Part::Value(BigUint::zero())
    }

    pub fn value(&self) -> Option<&BigUint> {
        match self {
            Part::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Part::Wildcard)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Part::Absent)
    }

    pub fn is_zero(&self) -> bool {
        self.value().map_or(false, Zero::is_zero)
    }

    /// Apply the padding policy: absent parts become zero under zero-padding
    /// and wildcards otherwise.
    pub fn resolve(&self, zero_padding: bool) -> Part {
        match self {
            Part::Absent if zero_padding => Part::zero(),
            Part::Absent => Part::Wildcard,
            other => other.clone(),
        }
    }

    /// The part with every placeholder replaced by zero
    pub(crate) fn floor(&self) -> BigUint {
        self.value().cloned().unwrap_or_default()
    }

    pub(crate) fn increment(&self) -> BigUint {
        self.floor() + BigUint::one()
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Absent => Ok(()),
            Part::Value(v) => write!(f, "{}", v),
            Part::Wildcard => write!(f, "*"),
        }
    }
}

impl From<u64> for Part {
    fn from(v: u64) -> Self {
        Part::Value(BigUint::from(v))
    }
}

impl From<BigUint> for Part {
    fn from(v: BigUint) -> Self {
        Part::Value(v)
    }
}

/// One dot-separated element of a pre-release tag.
///
/// Numeric identifiers always order below alphanumeric ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(BigUint),
    AlphaNumeric(String),
}

impl Identifier {
    pub(crate) fn new(token: &str) -> Self {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Some(n) = BigUint::parse_bytes(token.as_bytes(), 10) {
                return Identifier::Numeric(n);
            }
        }
        Identifier::AlphaNumeric(token.to_string())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}
