//! Version parsing, ordering and constraint matching
//!
//! Versions follow semver.org with one extension: a purely numeric `-`
//! suffix is a package *revision* (`1.2.3-4`) which sorts above the plain
//! release, while any other suffix is a pre-release sorting below it.
//!
//! ```
//! use semrev::{Constraints, Version};
//!
//! let constraints = Constraints::parse(">=1.2, <2 || ^3.1").unwrap();
//! assert!(constraints.check(&Version::parse("1.4.0-2").unwrap()));
//! assert!(!constraints.check(&Version::parse("2.0.0").unwrap()));
//! ```

mod collection;
mod comparator;
pub mod constraint;
mod error;
mod part;
mod version;
mod version_parser;

pub use collection::Collection;
pub use comparator::Comparator;
pub use constraint::{Bound, Constraint, ConstraintInterface, ConstraintOptions, Constraints, InvalidOperatorError, Operator};
pub use error::{Error, Result};
pub use part::{Identifier, Part};
pub use version::Version;
pub use version_parser::VersionParser;
