//! Shared fixtures for contactinfo integration tests.

#![allow(dead_code)]

use std::fmt;

use contactinfo::store::{FieldRow, FieldStore, Filter, MemoryStore, RecordId};

/// Three members; two share a last name, two share a first name.
pub fn members() -> MemoryStore {
    MemoryStore::new()
        .field(1, "lastname", "Last name")
        .field(2, "firstname", "First name")
        .field(3, "email", "E-mail")
        .value(RecordId(1), 1, "Mustermann")
        .value(RecordId(1), 2, "Max")
        .value(RecordId(1), 3, "max@example.com")
        .value(RecordId(2), 1, "Mustermann")
        .value(RecordId(2), 2, "Erika")
        .value(RecordId(3), 1, "Musterfrau")
        .value(RecordId(3), 2, "Max")
}

/// Wraps an inner template in a default-tag region.
pub fn region(selector: &str, inner: &str) -> String {
    format!("{{wickedteamcontactinfo {selector}}}{inner}{{/wickedteamcontactinfo}}")
}

#[derive(Debug)]
pub struct Unavailable;

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "database unavailable")
    }
}

impl std::error::Error for Unavailable {}

/// A store whose every request fails.
pub struct FailingStore;

impl FieldStore for FailingStore {
    type Error = Unavailable;

    fn run_filtered_query(&self, _filter: &Filter) -> Result<Vec<RecordId>, Self::Error> {
        Err(Unavailable)
    }

    fn fetch_fields(&self, _id: RecordId) -> Result<Vec<FieldRow>, Self::Error> {
        Err(Unavailable)
    }
}
