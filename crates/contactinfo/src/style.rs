//! Optional CSS styling wrappers.
//!
//! With styling on, the whole region becomes
//! `<span class="{prefix}member_data">...</span>` and every substituted field
//! becomes `<span class="{prefix}field-{name}">...</span>`. With styling off
//! both wrappers are omitted.

/// Default class-name prefix.
pub const DEFAULT_CSS_PREFIX: &str = "wci_";

/// Styling settings for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styling {
    prefix: String,
    enabled: bool,
}

impl Styling {
    pub fn new(prefix: impl Into<String>, enabled: bool) -> Self {
        Styling {
            prefix: prefix.into(),
            enabled,
        }
    }

    /// Styling switched off.
    pub fn plain() -> Self {
        Styling::new(DEFAULT_CSS_PREFIX, false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Class of the region wrapper.
    pub fn member_class(&self) -> String {
        format!("{}member_data", self.prefix)
    }

    /// Class of a field wrapper.
    pub fn field_class(&self, name: &str) -> String {
        format!("{}field-{}", self.prefix, name)
    }

    /// Wraps a whole region's template text.
    pub fn wrap_region(&self, inner: &str) -> String {
        if self.enabled {
            span(&self.member_class(), inner)
        } else {
            inner.to_string()
        }
    }

    /// Wraps one substituted field.
    pub fn wrap_field(&self, name: &str, content: &str) -> String {
        if self.enabled {
            span(&self.field_class(name), content)
        } else {
            content.to_string()
        }
    }
}

impl Default for Styling {
    fn default() -> Self {
        Styling::plain()
    }
}

fn span(class: &str, content: &str) -> String {
    format!("<span class=\"{class}\">{content}</span>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_wrappers_are_identity() {
        let styling = Styling::plain();
        assert_eq!(styling.wrap_region("[a]"), "[a]");
        assert_eq!(styling.wrap_field("a", "x"), "x");
    }

    #[test]
    fn styled_wrappers() {
        let styling = Styling::new("wci_", true);
        assert_eq!(
            styling.wrap_region("x"),
            "<span class=\"wci_member_data\">x</span>"
        );
        assert_eq!(
            styling.wrap_field("lastname", "Mustermann"),
            "<span class=\"wci_field-lastname\">Mustermann</span>"
        );
    }

    #[test]
    fn custom_prefix() {
        let styling = Styling::new("team-", true);
        assert_eq!(styling.field_class("email"), "team-field-email");
        assert_eq!(styling.member_class(), "team-member_data");
    }
}
