//! Comparison operators for filter conditions.
//!
//! The [`Op`] enum selects how a condition's expected value is compared with
//! a stored field value. A condition is compiled into a [`Matcher`] once per
//! evaluation so a `LIKE` pattern is only translated a single time.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Comparison operator for a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    /// Exact, case-sensitive string equality.
    #[default]
    #[serde(alias = "exact")]
    Eq,
    /// SQL `LIKE` matching: `%` matches any run of characters, `_` matches a
    /// single character, `\` escapes the next character. Case-insensitive.
    Like,
}

impl Op {
    /// Returns the operator's lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Like => "like",
        }
    }

    /// Compiles `expected` into a matcher for this operator.
    ///
    /// Returns an error if a `LIKE` pattern produces an invalid regex.
    pub fn matcher(self, expected: &str) -> Result<Matcher> {
        match self {
            Op::Eq => Ok(Matcher::Exact(expected.to_string())),
            Op::Like => Ok(Matcher::Pattern(Regex::new(&like_to_regex(expected))?)),
        }
    }
}

/// A compiled condition value.
#[derive(Debug, Clone)]
pub enum Matcher {
    Exact(String),
    Pattern(Regex),
}

impl Matcher {
    /// Tests a stored field value against this matcher.
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Matcher::Exact(expected) => value == expected,
            Matcher::Pattern(regex) => regex.is_match(value),
        }
    }
}

/// Translates a SQL `LIKE` pattern into an anchored, case-insensitive regex.
pub fn like_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push_str("(?is)^");

    let mut buf = [0u8; 4];
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '%' => out.push_str(".*"),
            '_' => out.push('.'),
            '\\' => {
                // A trailing backslash matches itself.
                let literal = chars.next().unwrap_or('\\');
                out.push_str(&regex::escape(literal.encode_utf8(&mut buf)));
            }
            other => out.push_str(&regex::escape(other.encode_utf8(&mut buf))),
        }
    }

    out.push('$');
    out
}
