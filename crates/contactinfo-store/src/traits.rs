//! The store capability consumed by the substitution engine.
//!
//! The engine never reaches for a global database handle; every resolution
//! and fetch goes through a [`FieldStore`] passed in by the caller.

use serde::{Deserialize, Serialize};

use crate::condition::Filter;
use crate::id::RecordId;

/// One field of a record: alias name, display title and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRow {
    pub name: String,
    pub title: String,
    pub value: String,
}

impl FieldRow {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        FieldRow {
            name: name.into(),
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Synchronous access to records and their field values.
///
/// Each method is one logical request; implementations decide how to execute
/// it (SQL subqueries, joins, in-memory set intersection, ...).
///
/// # Example
///
/// ```
/// use contactinfo_store::{FieldRow, FieldStore, Filter, RecordId};
///
/// struct Single;
///
/// impl FieldStore for Single {
///     type Error = std::convert::Infallible;
///
///     fn run_filtered_query(&self, _filter: &Filter) -> Result<Vec<RecordId>, Self::Error> {
///         Ok(vec![RecordId(1)])
///     }
///
///     fn fetch_fields(&self, _id: RecordId) -> Result<Vec<FieldRow>, Self::Error> {
///         Ok(vec![FieldRow::new("lastname", "Last name", "Mustermann")])
///     }
/// }
///
/// assert_eq!(Single.resolve_by_id(RecordId(5)), RecordId(5));
/// ```
pub trait FieldStore {
    /// Error raised when the backing store is unavailable or rejects a query.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolves a directly addressed record.
    ///
    /// No lookup happens here: a nonexistent id simply has no fields later.
    fn resolve_by_id(&self, id: RecordId) -> RecordId {
        id
    }

    /// Returns the distinct ids matched by the outermost filter of the chain,
    /// in ascending order.
    fn run_filtered_query(&self, filter: &Filter) -> Result<Vec<RecordId>, Self::Error>;

    /// Returns the stored fields of a record ordered by ascending
    /// field-definition order. An unknown id yields an empty list.
    fn fetch_fields(&self, id: RecordId) -> Result<Vec<FieldRow>, Self::Error>;
}

impl<S: FieldStore + ?Sized> FieldStore for &S {
    type Error = S::Error;

    fn resolve_by_id(&self, id: RecordId) -> RecordId {
        (**self).resolve_by_id(id)
    }

    fn run_filtered_query(&self, filter: &Filter) -> Result<Vec<RecordId>, Self::Error> {
        (**self).run_filtered_query(filter)
    }

    fn fetch_fields(&self, id: RecordId) -> Result<Vec<FieldRow>, Self::Error> {
        (**self).fetch_fields(id)
    }
}
