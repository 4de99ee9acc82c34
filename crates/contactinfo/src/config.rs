//! Engine configuration.
//!
//! All fields have defaults, so an empty file (or `Config::default()`) is a
//! working configuration:
//!
//! ```yaml
//! tag: wickedteamcontactinfo
//! css_prefix: wci_          # also accepted as `prefix_class`
//! use_css_styling: 0        # true/false, 0/1 or "0"/"1"
//! match_mode: exact         # or `like`
//! contexts: [com_content.article, mod_custom.content]
//! language: en              # or `de`
//! messages:                 # optional, overrides the language's texts
//!   no_record: "Nobody found."
//! ```

use std::fs;
use std::path::Path;

use contactinfo_store::Op;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::messages::{Language, Messages};
use crate::region::DEFAULT_TAG;
use crate::selector::parse_leading_int;
use crate::style::{Styling, DEFAULT_CSS_PREFIX};

/// Rendering contexts processed when none are configured.
pub const DEFAULT_CONTEXTS: [&str; 2] = ["com_content.article", "mod_custom.content"];

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Region tag name.
    pub tag: String,
    /// Prefix of the CSS classes emitted when styling is on.
    #[serde(alias = "prefix_class")]
    pub css_prefix: String,
    /// Wrap regions and fields in styling spans.
    #[serde(deserialize_with = "deserialize_flag")]
    pub use_css_styling: bool,
    /// Comparison used by query conditions.
    pub match_mode: Op,
    /// Rendering contexts handled by [`Engine::prepare_content`](crate::Engine::prepare_content).
    pub contexts: Vec<String>,
    /// Language of the built-in diagnostics.
    pub language: Language,
    /// Diagnostic overrides; replaces the language's texts when set.
    pub messages: Option<Messages>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag: DEFAULT_TAG.to_string(),
            css_prefix: DEFAULT_CSS_PREFIX.to_string(),
            use_css_styling: false,
            match_mode: Op::Eq,
            contexts: DEFAULT_CONTEXTS.iter().map(|c| c.to_string()).collect(),
            language: Language::En,
            messages: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_css_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.css_prefix = prefix.into();
        self
    }

    pub fn with_styling(mut self, enabled: bool) -> Self {
        self.use_css_styling = enabled;
        self
    }

    pub fn with_match_mode(mut self, op: Op) -> Self {
        self.match_mode = op;
        self
    }

    pub fn with_contexts<I, S>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contexts = contexts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = Some(messages);
        self
    }

    // ========================================================================
    // Derived settings
    // ========================================================================

    /// Effective diagnostic texts.
    pub fn messages(&self) -> Messages {
        self.messages
            .clone()
            .unwrap_or_else(|| Messages::for_language(self.language))
    }

    /// Styling derived from the prefix and toggle.
    pub fn styling(&self) -> Styling {
        Styling::new(&self.css_prefix, self.use_css_styling)
    }

    /// Returns `true` if `context` is one of the handled rendering contexts.
    pub fn handles_context(&self, context: &str) -> bool {
        self.contexts.iter().any(|c| c == context)
    }

    // ========================================================================
    // Loading
    // ========================================================================

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        // An empty document deserializes as unit; treat it as all defaults.
        if source.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads a config from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            Some("yaml" | "yml") => Self::from_yaml_str(&source),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Accepts `true`/`false`, integers and numeric strings for a boolean option.
/// Non-zero numbers are `true`; strings use leading-integer parsing, except
/// that `"true"` (any case) is also `true`.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
        Flag::Text(s) => s.trim().eq_ignore_ascii_case("true") || parse_leading_int(&s) != 0,
    })
}
