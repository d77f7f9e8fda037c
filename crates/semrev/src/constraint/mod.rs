//! Constraint types for version matching

mod bound;
#[allow(clippy::module_inception)]
mod constraint;
mod constraint_interface;
mod constraints;
mod operator;

pub use bound::Bound;
pub use constraint::Constraint;
pub use constraint_interface::ConstraintInterface;
pub use constraints::{ConstraintOptions, Constraints};
pub use operator::{InvalidOperatorError, Operator};
