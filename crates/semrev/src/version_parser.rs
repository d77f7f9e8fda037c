//! Version and constraint grammar

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::constraint::{Constraint, ConstraintOptions, Constraints, Operator};
use crate::error::{Error, Result};
use crate::part::{Identifier, Part};
use crate::version::Version;

lazy_static! {
    // semver.org grammar; the `-` suffix carries either a revision or a pre-release
    static ref STRICT_VERSION_RE: Regex = Regex::new(concat!(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
        r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )).unwrap();

    // Right-hand side of a constraint: up to three parts, trailing ones optional
    static ref PARTIAL_VERSION_RE: Regex = Regex::new(concat!(
        r"^v?([0-9]+|[xX*])(?:\.([0-9]+|[xX*]))?(?:\.([0-9]+|[xX*]))?",
        r"(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
        r"(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    )).unwrap();

    // OR constraint splitter
    static ref OR_CONSTRAINT_RE: Regex = Regex::new(r"\s*\|\|\s*").unwrap();
}

const OPERATOR_CHARS: &[u8] = b"<>=!~^";

/// Parser for versions and constraint expressions
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid under the strict grammar
    pub fn is_valid(&self, version: &str) -> bool {
        STRICT_VERSION_RE.is_match(version)
    }

    /// Parse a concrete version.
    ///
    /// Exactly three numeric parts are required, without leading zeros or a
    /// `v` prefix.
    pub fn parse(&self, version: &str) -> Result<Version> {
        let caps = STRICT_VERSION_RE.captures(version).ok_or_else(|| {
            log::debug!("Rejected version {:?}", version);
            Error::InvalidVersion(version.to_string())
        })?;

        let numeric = |i: usize| -> Result<Part> {
            caps.get(i)
                .and_then(|m| Part::from_digits(m.as_str()))
                .ok_or_else(|| Error::InvalidVersion(version.to_string()))
        };

        let (revision, pre_release) = split_suffix(caps.get(4).map(|m| m.as_str()));

        Ok(Version {
            major: numeric(1)?,
            minor: numeric(2)?,
            patch: numeric(3)?,
            revision,
            pre_release,
            build_metadata: caps.get(5).map(|m| m.as_str().to_string()),
            original: version.to_string(),
        })
    }

    /// Parse the possibly partial version on the right-hand side of a
    /// constraint.
    ///
    /// Unwritten trailing parts become [`Part::Absent`]. When the patch is
    /// not written out, a missing suffix becomes a wildcard revision, or no
    /// revision at all under zero-padding.
    pub fn parse_partial(&self, version: &str, zero_padding: bool) -> Result<Version> {
        let caps = PARTIAL_VERSION_RE
            .captures(version)
            .ok_or_else(|| Error::InvalidVersion(version.to_string()))?;

        let major = partial_part(&caps, 1, version)?;
        let minor = partial_part(&caps, 2, version)?;
        let patch = partial_part(&caps, 3, version)?;

        let suffix = caps.get(4).map(|m| m.as_str());
        let (revision, pre_release) = match suffix {
            Some(_) => split_suffix(suffix),
            None if zero_padding || patch.value().is_some() => (None, None),
            None => (Some(vec![Part::Wildcard]), None),
        };

        Ok(Version {
            major,
            minor,
            patch,
            revision,
            pre_release,
            build_metadata: caps.get(5).map(|m| m.as_str().to_string()),
            original: version.to_string(),
        })
    }

    /// Parse a constraint expression: `||`-separated groups of terms joined
    /// by `,` or whitespace.
    pub fn parse_constraints(&self, constraints: &str, options: ConstraintOptions) -> Result<Constraints> {
        let trimmed = constraints.trim();

        if trimmed.is_empty() {
            return Ok(Constraints::from_groups(
                vec![vec![Constraint::any(options.zero_padding)]],
                options,
                constraints.to_string(),
            ));
        }

        let mut groups = Vec::new();
        for or_constraint in OR_CONSTRAINT_RE.split(trimmed) {
            if or_constraint.trim().is_empty() {
                log::debug!("Empty constraint group in {:?}", constraints);
                return Err(Error::constraint(constraints, "empty constraint group"));
            }

            let group = self
                .split_and_constraints(or_constraint)?
                .into_iter()
                .map(|term| self.parse_constraint(term, options.zero_padding))
                .collect::<Result<Vec<_>>>()?;
            groups.push(group);
        }

        let parsed = Constraints::from_groups(groups, options, constraints.to_string());
        log::trace!("Parsed constraints {:?} as {}", constraints, parsed);
        Ok(parsed)
    }

    /// Split a group into its terms. A term is an optional operator, optional
    /// whitespace and a version; terms are separated by commas or whitespace.
    fn split_and_constraints<'a>(&self, input: &'a str) -> Result<Vec<&'a str>> {
        let bytes = input.as_bytes();
        let mut parts = Vec::new();
        let mut i = 0;

        loop {
            while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b',') {
                i += 1;
            }
            if i == bytes.len() {
                break;
            }

            let start = i;
            while i < bytes.len() && OPERATOR_CHARS.contains(&bytes[i]) {
                i += 1;
            }
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }

            let version_start = i;
            while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b',' {
                i += 1;
            }
            if version_start == i {
                return Err(Error::constraint(input.trim(), "operator without a version"));
            }

            parts.push(&input[start..i]);
        }

        Ok(parts)
    }

    fn parse_constraint(&self, constraint: &str, zero_padding: bool) -> Result<Constraint> {
        let op_len = constraint
            .bytes()
            .take_while(|b| OPERATOR_CHARS.contains(b))
            .count();
        let (operator, version_str) = constraint.split_at(op_len);

        let operator: Operator = operator
            .parse()
            .map_err(|e: crate::constraint::InvalidOperatorError| Error::constraint(constraint, e.to_string()))?;

        let version = self
            .parse_partial(version_str.trim(), zero_padding)
            .map_err(|e| {
                log::debug!("Invalid version in constraint {:?}: {}", constraint, e);
                Error::constraint(constraint, e.to_string())
            })?;

        Ok(Constraint::with_original(operator, version, constraint.to_string(), zero_padding))
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}

fn partial_part(caps: &Captures, i: usize, version: &str) -> Result<Part> {
    match caps.get(i).map(|m| m.as_str()) {
        None => Ok(Part::Absent),
        Some("*") | Some("x") | Some("X") => Ok(Part::Wildcard),
        Some(digits) => Part::from_digits(digits).ok_or_else(|| Error::InvalidVersion(version.to_string())),
    }
}

/// A purely numeric suffix is a revision, anything else a pre-release
fn split_suffix(suffix: Option<&str>) -> (Option<Vec<Part>>, Option<Vec<Identifier>>) {
    let Some(suffix) = suffix else {
        return (None, None);
    };

    let tokens: Vec<&str> = suffix.split('.').collect();
    let is_revision = tokens
        .iter()
        .all(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()));

    if is_revision {
        let parts = tokens.iter().filter_map(|t| Part::from_digits(t)).collect();
        (Some(parts), None)
    } else {
        let identifiers = tokens.iter().map(|t| Identifier::new(t)).collect();
        (None, Some(identifiers))
    }
}
