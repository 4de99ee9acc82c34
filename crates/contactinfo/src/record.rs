use contactinfo_store::{FieldRow, FieldStore, RecordId};

use crate::error::{Error, Result};

/// Name (and title) of the synthetic field carrying the record's own id.
pub const ID_FIELD: &str = "id";

/// A resolved record with its fields in substitution order.
///
/// The stored fields come first, in field-definition order; the synthetic
/// `id` field is always last, so `[id]` works without being stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    fields: Vec<FieldRow>,
}

impl Record {
    /// Builds a record from its stored fields, appending the synthetic `id`.
    pub fn new(id: RecordId, mut fields: Vec<FieldRow>) -> Self {
        fields.push(FieldRow::new(ID_FIELD, ID_FIELD, id.to_string()));
        Record { id, fields }
    }

    /// Fetches a record's fields from `store`.
    pub fn fetch<S: FieldStore>(store: &S, id: RecordId) -> Result<Self> {
        let fields = store.fetch_fields(id).map_err(Error::store)?;
        Ok(Record::new(id, fields))
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// All fields, synthetic `id` last.
    pub fn fields(&self) -> &[FieldRow] {
        &self.fields
    }

    /// Returns the first field named `name`.
    pub fn get(&self, name: &str) -> Option<&FieldRow> {
        self.fields.iter().find(|row| row.name == name)
    }
}
