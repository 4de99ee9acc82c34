//! Diagnostic texts rendered in place of unresolvable regions.

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Placeholder replaced by the record count in [`Messages::not_unique`].
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Built-in message languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

/// Localized diagnostic strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown when a query matches several records; `{count}` is replaced by
    /// their number.
    pub not_unique: String,
    /// Shown when a query matches no record.
    pub no_record: String,
}

impl Messages {
    /// Returns the built-in messages for `language`.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Messages {
                not_unique: "The query is not unique: {count} records found.".to_string(),
                no_record: "No record found for the query.".to_string(),
            },
            Language::De => Messages {
                not_unique: "Die Abfrage ist nicht eindeutig: {count} Datensätze gefunden."
                    .to_string(),
                no_record: "Zu der Abfrage wurde kein Datensatz gefunden.".to_string(),
            },
        }
    }

    /// Renders the diagnostic for a resolution failure.
    pub fn diagnostic(&self, err: &ResolveError) -> String {
        match err {
            ResolveError::NotUnique(count) => self
                .not_unique
                .replace(COUNT_PLACEHOLDER, &count.to_string()),
            ResolveError::NotFound => self.no_record.clone(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Messages::for_language(Language::En)
    }
}
