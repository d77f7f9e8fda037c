//! Operator types for version constraints

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Comparison operators for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// No operator written; behaves like `=`
    Implicit,
    /// Equal (= or ==)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<= or =<)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>= or =>)
    GreaterThanOrEqual,
    /// Tilde range (~ or ~>)
    Tilde,
    /// Caret range (^)
    Caret,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator \"{0}\"")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Implicit => "",
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Tilde => "~",
            Operator::Caret => "^",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["", "=", "==", "!=", "<", "<=", "=<", ">", ">=", "=>", "~", "~>", "^"]
    }

    /// Whether the operator is one of the equality family (`=`, `==`, none)
    pub fn is_equality(&self) -> bool {
        matches!(self, Operator::Implicit | Operator::Equal)
    }
}

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Operator::Implicit),
            "=" | "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            "<" => Ok(Operator::LessThan),
            "<=" | "=<" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" | "=>" => Ok(Operator::GreaterThanOrEqual),
            "~" | "~>" => Ok(Operator::Tilde),
            "^" => Ok(Operator::Caret),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
