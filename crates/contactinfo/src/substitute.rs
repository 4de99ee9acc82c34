//! Placeholder substitution.
//!
//! The [`Substituter`] rewrites a region's template text with a record's
//! field values. It works field by field, in the record's order:
//!
//! 1. Look for the first `[name;text]`. If present, `text` becomes the
//!    field's description and every `[name;...]` collapses to `[name]`.
//! 2. Replace every literal `[name]` with description + value, wrapped in
//!    the field's styling span when styling is on.
//!
//! Tokens naming no field of the record stay as they are. Matching is exact:
//! field `name` never touches `[nameX]`.
//!
//! Because fields are processed in sequence, text produced for one field is
//! visible to the fields after it.

use crate::record::Record;
use crate::style::Styling;

/// Rewrites region templates with record fields.
#[derive(Debug, Clone, Default)]
pub struct Substituter {
    styling: Styling,
}

impl Substituter {
    pub fn new(styling: Styling) -> Self {
        Substituter { styling }
    }

    pub fn styling(&self) -> &Styling {
        &self.styling
    }

    /// Substitutes every known placeholder of `inner` with `record`'s fields.
    ///
    /// ```
    /// use contactinfo::{Record, Styling, Substituter};
    /// use contactinfo_store::{FieldRow, RecordId};
    ///
    /// let record = Record::new(
    ///     RecordId(1),
    ///     vec![
    ///         FieldRow::new("lastname", "Last name", "Mustermann"),
    ///         FieldRow::new("firstname", "First name", "Max"),
    ///     ],
    /// );
    ///
    /// let plain = Substituter::new(Styling::plain());
    /// assert_eq!(plain.substitute("[lastname;Name: ] [firstname] #[id]", &record), "Name: Mustermann Max #1");
    /// ```
    pub fn substitute(&self, inner: &str, record: &Record) -> String {
        let mut text = self.styling.wrap_region(inner);

        for field in record.fields() {
            let (collapsed, description) = collapse_described(&text, &field.name);
            text = collapsed;

            let token = format!("[{}]", field.name);
            if !text.contains(&token) {
                continue;
            }

            let content = format!("{}{}", description.unwrap_or_default(), field.value);
            text = text.replace(&token, &self.styling.wrap_field(&field.name, &content));
        }

        text
    }
}

/// Collapses every `[name;...]` in `text` to `[name]`.
///
/// Returns the rewritten text and the description captured by the first
/// occurrence, or `None` when there is no described token. The description
/// runs to the first `]` and may span lines.
fn collapse_described(text: &str, name: &str) -> (String, Option<String>) {
    let opener = format!("[{name};");
    let Some(first) = text.find(&opener) else {
        return (text.to_string(), None);
    };

    let mut out = String::with_capacity(text.len());
    let mut description = None;
    let mut rest = text;
    let mut next = Some(first);

    while let Some(start) = next {
        let body_start = start + opener.len();
        let Some(len) = rest[body_start..].find(']') else {
            break;
        };

        out.push_str(&rest[..start]);
        out.push('[');
        out.push_str(name);
        out.push(']');
        if description.is_none() {
            description = Some(rest[body_start..body_start + len].to_string());
        }

        rest = &rest[body_start + len + 1..];
        next = rest.find(&opener);
    }

    out.push_str(rest);
    (out, description)
}
