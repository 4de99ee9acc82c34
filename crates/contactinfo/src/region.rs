//! Region extraction.
//!
//! A region is one `{TAG <selector>}<inner>{/TAG}` span of the input. The
//! [`Extractor`] only collects regions; rewriting happens afterwards from the
//! recorded spans, so replacing one region can never change how another is
//! matched.
//!
//! Matching rules:
//!
//! - the selector runs up to the first `}` after the tag name
//! - any whitespace (including newlines) may separate tag name and selector
//! - the inner text may span lines and ends at the first closing tag
//! - the tag name is matched exactly, case included

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

/// Tag name used when none is configured.
pub const DEFAULT_TAG: &str = "wickedteamcontactinfo";

static DEFAULT_EXTRACTOR: Lazy<Extractor> = Lazy::new(|| {
    Extractor::new(DEFAULT_TAG).expect("default tag produces a valid pattern")
});

/// One matched region, borrowed from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<'t> {
    /// Selector expression between the tag name and the first `}`.
    pub selector: &'t str,
    /// Template text between the opening and closing tags.
    pub inner: &'t str,
    /// The complete match, tags included.
    pub full: &'t str,
    /// Byte range of `full` in the scanned text.
    pub span: Range<usize>,
}

/// Finds tagged regions in text.
#[derive(Debug, Clone)]
pub struct Extractor {
    tag: String,
    pattern: Regex,
}

impl Extractor {
    /// Builds an extractor for `tag`. The tag is matched literally.
    pub fn new(tag: &str) -> Result<Self> {
        let tag_pattern = regex::escape(tag);
        let pattern = Regex::new(&format!(
            r"(?s)\{{{tag}\s*(.*?)\}}(.*?)\{{/{tag}\}}",
            tag = tag_pattern
        ))?;

        Ok(Extractor {
            tag: tag.to_string(),
            pattern,
        })
    }

    /// Returns the tag name this extractor matches.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns `true` if `text` contains at least one region.
    pub fn has_region(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Collects every non-overlapping region, in input order.
    pub fn extract<'t>(&self, text: &'t str) -> Vec<Region<'t>> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let full = caps.get(0)?;
                Some(Region {
                    selector: caps.get(1)?.as_str(),
                    inner: caps.get(2)?.as_str(),
                    full: full.as_str(),
                    span: full.range(),
                })
            })
            .collect()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }
}
