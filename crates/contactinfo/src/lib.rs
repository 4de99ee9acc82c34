//! # Contactinfo - record-driven placeholders in content text
//!
//! `contactinfo` finds tagged regions in a content body, resolves one record
//! per region from a field store, and replaces the region's bracketed
//! placeholders with that record's field values.
//!
//! ```text
//! {wickedteamcontactinfo id=1}[lastname] [firstname]{/wickedteamcontactinfo}
//! {wickedteamcontactinfo query=lastname:Mustermann&amp;firstname:Max}[email]{/wickedteamcontactinfo}
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Type | Does |
//! |-------|------|------|
//! | Extract | [`Extractor`] | finds `{TAG selector}inner{/TAG}` regions |
//! | Resolve | [`Selector`], [`Resolver`] | picks exactly one record by id or query |
//! | Substitute | [`Substituter`] | rewrites `[field]` / `[field;text]` tokens |
//!
//! [`Engine`] runs all three for a whole body; [`transform`] is the one-shot
//! form.
//!
//! ## Selectors
//!
//! - `id=<int>` addresses a record directly.
//! - `query=<alias>:<value>&amp;...` narrows the candidates condition by
//!   condition; exactly one record must remain.
//!
//! A query matching no record or several records renders a diagnostic (see
//! [`Messages`]) in place of the region. Any other selector kind leaves the
//! region exactly as written.
//!
//! ## Placeholders
//!
//! - `[name]` becomes the field's value.
//! - `[name;text]` becomes `text` followed by the value.
//! - `[id]` is always available and becomes the record's id.
//! - Tokens naming no field stay verbatim.
//!
//! With styling enabled ([`Config::use_css_styling`]) the region is wrapped in
//! `<span class="wci_member_data">` and each field in
//! `<span class="wci_field-NAME">` (prefix configurable).
//!
//! ## Quick Start
//!
//! ```rust
//! use contactinfo::{transform, Config};
//! use contactinfo_store::{MemoryStore, RecordId};
//!
//! let store = MemoryStore::new()
//!     .field(1, "lastname", "Last name")
//!     .field(2, "firstname", "First name")
//!     .value(RecordId(1), 1, "Mustermann")
//!     .value(RecordId(1), 2, "Max");
//!
//! let text = "{wickedteamcontactinfo query=lastname:Mustermann&amp;firstname:Max}\
//!             [lastname;Name: ], [firstname]{/wickedteamcontactinfo}";
//!
//! let out = transform(text, &Config::default(), &store).unwrap();
//! assert_eq!(out, "Name: Mustermann, Max");
//! ```

mod config;
mod engine;
mod error;
mod messages;
mod record;
mod region;
mod resolve;
mod selector;
mod style;
mod substitute;

pub use config::{Config, DEFAULT_CONTEXTS};
pub use engine::{transform, Engine};
pub use error::{Error, ResolveError, Result};
pub use messages::{Language, Messages, COUNT_PLACEHOLDER};
pub use record::{Record, ID_FIELD};
pub use region::{Extractor, Region, DEFAULT_TAG};
pub use resolve::{Resolution, Resolver};
pub use selector::{parse_leading_int, Selector, QUERY_SEPARATOR};
pub use style::{Styling, DEFAULT_CSS_PREFIX};
pub use substitute::Substituter;

// Re-export the store crate so callers need a single dependency.
pub use contactinfo_store as store;
