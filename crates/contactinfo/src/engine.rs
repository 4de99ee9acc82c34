//! The region rendering pipeline.
//!
//! [`Engine`] ties the pieces together for one content body:
//!
//! 1. [`Extractor`] collects all regions.
//! 2. Each region's selector is parsed and resolved with [`Resolver`].
//! 3. [`Substituter`] renders the resolved record into the region's template.
//! 4. The output is reassembled from the original region spans.
//!
//! Per-region problems never abort a render: unrecognized selectors leave
//! the region untouched and unresolvable queries render a diagnostic. Only a
//! store failure is returned as an error.

use contactinfo_store::FieldStore;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::messages::Messages;
use crate::record::Record;
use crate::region::{Extractor, Region};
use crate::resolve::Resolver;
use crate::selector::Selector;
use crate::substitute::Substituter;

/// Renders tagged regions against a field store.
///
/// # Example
///
/// ```
/// use contactinfo::{Config, Engine};
/// use contactinfo_store::{MemoryStore, RecordId};
///
/// let store = MemoryStore::new()
///     .field(1, "lastname", "Last name")
///     .value(RecordId(1), 1, "Mustermann");
///
/// let engine = Engine::new(&store, Config::default()).unwrap();
/// let out = engine
///     .transform("Contact: {wickedteamcontactinfo id=1}[lastname]{/wickedteamcontactinfo}")
///     .unwrap();
/// assert_eq!(out, "Contact: Mustermann");
/// ```
#[derive(Debug)]
pub struct Engine<S> {
    store: S,
    config: Config,
    extractor: Extractor,
    substituter: Substituter,
    messages: Messages,
}

impl<S: FieldStore> Engine<S> {
    /// Creates an engine.
    ///
    /// Fails only if the configured tag cannot be turned into a pattern.
    pub fn new(store: S, config: Config) -> Result<Self> {
        let extractor = Extractor::new(&config.tag)?;
        let substituter = Substituter::new(config.styling());
        let messages = config.messages();

        Ok(Engine {
            store,
            config,
            extractor,
            substituter,
            messages,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rewrites every region of `text`.
    ///
    /// Text without regions is returned unchanged.
    pub fn transform(&self, text: &str) -> Result<String> {
        let regions = self.extractor.extract(text);
        if regions.is_empty() {
            return Ok(text.to_string());
        }
        debug!(regions = regions.len(), tag = self.extractor.tag(), "rendering regions");

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for region in &regions {
            out.push_str(&text[cursor..region.span.start]);
            out.push_str(&self.render_region(region)?);
            cursor = region.span.end;
        }
        out.push_str(&text[cursor..]);

        Ok(out)
    }

    /// Content-prepare hook: rewrites `text` in place for handled contexts.
    ///
    /// Returns `false` without touching `text` when the context is not
    /// configured or the text holds no region.
    pub fn prepare_content(&self, context: &str, text: &mut String) -> Result<bool> {
        if !self.config.handles_context(context) {
            debug!(context, "skipping unhandled context");
            return Ok(false);
        }
        if !self.extractor.has_region(text) {
            return Ok(false);
        }

        *text = self.transform(text)?;
        Ok(true)
    }

    /// Renders one region to its replacement text.
    pub fn render_region(&self, region: &Region<'_>) -> Result<String> {
        let Some(selector) = Selector::parse(region.selector, self.config.match_mode) else {
            debug!(selector = region.selector, "leaving region untouched");
            return Ok(region.full.to_string());
        };

        match Resolver::new(&self.store).resolve(&selector)? {
            Ok(id) => {
                let record = Record::fetch(&self.store, id)?;
                debug!(%id, fields = record.fields().len(), "substituting region");
                Ok(self.substituter.substitute(region.inner, &record))
            }
            Err(err) => {
                warn!(selector = region.selector, error = %err, "region rendered as diagnostic");
                Ok(self.messages.diagnostic(&err))
            }
        }
    }
}

/// Renders every region of `text` against `store` in one call.
///
/// ```
/// use contactinfo::{transform, Config};
/// use contactinfo_store::MemoryStore;
///
/// let text = "no regions here";
/// assert_eq!(transform(text, &Config::default(), &MemoryStore::new()).unwrap(), text);
/// ```
pub fn transform<S: FieldStore>(text: &str, config: &Config, store: &S) -> Result<String> {
    Engine::new(store, config.clone())?.transform(text)
}
