//! Selector expressions attached to a region's opening tag.
//!
//! ```text
//! id=<int>
//! query=<alias>:<value>&amp;<alias>:<value>...
//! ```
//!
//! The text is split on the first `=` into a kind and a remainder. Query
//! conditions are separated by the HTML-escaped ampersand because content
//! reaches the engine already escaped.

use contactinfo_store::{Condition, Op, RecordId};
use tracing::debug;

/// Separator between query conditions.
pub const QUERY_SEPARATOR: &str = "&amp;";

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Address a record directly.
    ById(RecordId),
    /// Find the single record matching every condition, in chain order.
    ByQuery(Vec<Condition>),
}

impl Selector {
    /// Parses a selector expression.
    ///
    /// Returns `None` when the kind is neither `id` nor `query`, or when an
    /// `id` selector parses to [`RecordId::UNRESOLVED`]. Such regions are
    /// left untouched.
    ///
    /// `op` is the comparison used for every query condition.
    ///
    /// ```
    /// use contactinfo::Selector;
    /// use contactinfo_store::{Condition, Op, RecordId};
    ///
    /// assert_eq!(Selector::parse("id=12", Op::Eq), Some(Selector::ById(RecordId(12))));
    /// assert_eq!(
    ///     Selector::parse("query=lastname:Mustermann&amp;firstname:Max", Op::Eq),
    ///     Some(Selector::ByQuery(vec![
    ///         Condition::new("lastname", "Mustermann"),
    ///         Condition::new("firstname", "Max"),
    ///     ])),
    /// );
    /// assert_eq!(Selector::parse("name=Max", Op::Eq), None);
    /// ```
    pub fn parse(expr: &str, op: Op) -> Option<Self> {
        let (kind, rest) = expr.split_once('=').unwrap_or((expr, ""));

        match kind {
            "id" => {
                let id = RecordId(parse_leading_int(rest));
                if id.is_unresolved() {
                    debug!(%id, "unresolved record id in selector");
                    return None;
                }
                Some(Selector::ById(id))
            }
            "query" => Some(Selector::ByQuery(parse_conditions(rest, op))),
            other => {
                debug!(kind = other, "unrecognized selector kind");
                None
            }
        }
    }
}

/// Splits a query remainder into conditions.
///
/// Each piece is split on its first `:`; a piece without one has an empty
/// expected value.
fn parse_conditions(rest: &str, op: Op) -> Vec<Condition> {
    rest.split(QUERY_SEPARATOR)
        .map(|piece| {
            let (alias, value) = piece.split_once(':').unwrap_or((piece, ""));
            Condition::new(alias, value).with_op(op)
        })
        .collect()
}

/// Parses the leading integer of `text`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. No digits yields `0`; overflow saturates.
pub fn parse_leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = match value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) })
        {
            Some(v) => v,
            None if negative => return i64::MIN,
            None => return i64::MAX,
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_semantics() {
        assert_eq!(parse_leading_int("42"), 42);
        assert_eq!(parse_leading_int("  7 "), 7);
        assert_eq!(parse_leading_int("12abc"), 12);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-3"), -3);
        assert_eq!(parse_leading_int("+3"), 3);
        assert_eq!(parse_leading_int("- 3"), 0);
        assert_eq!(parse_leading_int("99999999999999999999"), i64::MAX);
        assert_eq!(parse_leading_int("-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn id_selector() {
        assert_eq!(Selector::parse("id=5", Op::Eq), Some(Selector::ById(RecordId(5))));
        assert_eq!(Selector::parse("id=x", Op::Eq), Some(Selector::ById(RecordId(0))));
        assert_eq!(Selector::parse("id", Op::Eq), Some(Selector::ById(RecordId(0))));
        assert_eq!(Selector::parse("id=3=4", Op::Eq), Some(Selector::ById(RecordId(3))));
    }

    #[test]
    fn only_minus_one_is_unresolvable() {
        assert_eq!(Selector::parse("id=-1", Op::Eq), None);
        assert_eq!(Selector::parse("id= -1abc", Op::Eq), None);
        assert_eq!(Selector::parse("id=-20", Op::Eq), Some(Selector::ById(RecordId(-20))));
        assert_eq!(Selector::parse("id=-0", Op::Eq), Some(Selector::ById(RecordId(0))));
    }

    #[test]
    fn unknown_kind_is_none() {
        assert_eq!(Selector::parse("", Op::Eq), None);
        assert_eq!(Selector::parse("ID=1", Op::Eq), None);
        assert_eq!(Selector::parse("member=1", Op::Eq), None);
    }

    #[test]
    fn query_conditions_keep_order() {
        let parsed = Selector::parse("query=b:2&amp;a:1", Op::Eq).unwrap();
        assert_eq!(
            parsed,
            Selector::ByQuery(vec![Condition::new("b", "2"), Condition::new("a", "1")])
        );
    }

    #[test]
    fn query_value_keeps_later_colons() {
        let parsed = Selector::parse("query=time:10:30", Op::Eq).unwrap();
        assert_eq!(parsed, Selector::ByQuery(vec![Condition::new("time", "10:30")]));
    }

    #[test]
    fn query_piece_without_colon_has_empty_value() {
        let parsed = Selector::parse("query=lastname", Op::Eq).unwrap();
        assert_eq!(parsed, Selector::ByQuery(vec![Condition::new("lastname", "")]));
    }

    #[test]
    fn raw_ampersand_is_not_a_separator() {
        let parsed = Selector::parse("query=a:1&b:2", Op::Eq).unwrap();
        assert_eq!(parsed, Selector::ByQuery(vec![Condition::new("a", "1&b:2")]));
    }

    #[test]
    fn query_uses_given_op() {
        let parsed = Selector::parse("query=a:M%", Op::Like).unwrap();
        assert_eq!(parsed, Selector::ByQuery(vec![Condition::like("a", "M%")]));
    }
}
