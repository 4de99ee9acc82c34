//! In-memory field store.
//!
//! [`MemoryStore`] models the two-table layout the engine expects from a
//! content system: field definitions (`id`, alias `name`, `title`) and field
//! values keyed by item id and field id. It can be built in code or loaded
//! from a JSON or YAML data file:
//!
//! ```yaml
//! fields:
//!   - { id: 1, name: lastname, title: Last name }
//!   - { id: 2, name: firstname, title: First name }
//! values:
//!   - { item_id: 1, field_id: 1, value: Mustermann }
//!   - { item_id: 1, field_id: 2, value: Max }
//! ```
//!
//! Value rows whose `field_id` has no definition are ignored, the way a left
//! join against missing definitions drops them from alias lookups.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::condition::Filter;
use crate::error::{Result, StoreError};
use crate::id::RecordId;
use crate::traits::{FieldRow, FieldStore};

/// A field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Definition id; also the ordering key for fetched fields.
    pub id: u64,
    /// Alias name used in placeholders and query conditions.
    pub name: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
}

/// A stored value of one field for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub item_id: RecordId,
    pub field_id: u64,
    pub value: String,
}

/// Field store held entirely in memory.
///
/// # Example
///
/// ```
/// use contactinfo_store::{Condition, FieldStore, Filter, MemoryStore, RecordId};
///
/// let store = MemoryStore::new()
///     .field(1, "lastname", "Last name")
///     .field(2, "firstname", "First name")
///     .value(RecordId(1), 1, "Mustermann")
///     .value(RecordId(1), 2, "Max")
///     .value(RecordId(2), 1, "Mustermann")
///     .value(RecordId(2), 2, "Erika");
///
/// let filter = Filter::chain(vec![
///     Condition::new("lastname", "Mustermann"),
///     Condition::new("firstname", "Max"),
/// ])
/// .unwrap();
///
/// assert_eq!(store.run_filtered_query(&filter).unwrap(), vec![RecordId(1)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    fields: Vec<FieldDef>,
    #[serde(default)]
    values: Vec<FieldValue>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Adds a field definition.
    pub fn field(mut self, id: u64, name: impl Into<String>, title: impl Into<String>) -> Self {
        self.fields.push(FieldDef {
            id,
            name: name.into(),
            title: title.into(),
        });
        self
    }

    /// Adds a value of field `field_id` for item `item_id`.
    pub fn value(mut self, item_id: RecordId, field_id: u64, value: impl Into<String>) -> Self {
        self.values.push(FieldValue {
            item_id,
            field_id,
            value: value.into(),
        });
        self
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Parses a store from JSON.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let store: MemoryStore = serde_json::from_str(source)?;
        store.validated()
    }

    /// Parses a store from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let store: MemoryStore = serde_yaml::from_str(source)?;
        store.validated()
    }

    /// Loads a store from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            Some("yaml" | "yml") => Self::from_yaml_str(&source),
            _ => Err(StoreError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Checks that field alias names are unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for def in &self.fields {
            if !seen.insert(def.name.as_str()) {
                return Err(StoreError::DuplicateField(def.name.clone()));
            }
        }
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the field definitions.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns the stored values.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Returns every item id that owns at least one value, ascending.
    pub fn item_ids(&self) -> Vec<RecordId> {
        let ids: BTreeSet<RecordId> = self.values.iter().map(|v| v.item_id).collect();
        ids.into_iter().collect()
    }

    fn definition(&self, field_id: u64) -> Option<&FieldDef> {
        self.fields.iter().find(|def| def.id == field_id)
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Evaluates a filter chain, innermost condition first.
    fn evaluate(&self, filter: &Filter) -> Result<BTreeSet<RecordId>> {
        let restrict = match filter.inner() {
            Some(inner) => Some(self.evaluate(inner)?),
            None => None,
        };

        let condition = filter.condition();
        let matcher = condition.op.matcher(&condition.value)?;
        let field_ids: HashSet<u64> = self
            .fields
            .iter()
            .filter(|def| def.name == condition.alias)
            .map(|def| def.id)
            .collect();

        let matched: BTreeSet<RecordId> = self
            .values
            .iter()
            .filter(|v| field_ids.contains(&v.field_id))
            .filter(|v| restrict.as_ref().map_or(true, |ids| ids.contains(&v.item_id)))
            .filter(|v| matcher.is_match(&v.value))
            .map(|v| v.item_id)
            .collect();

        debug!(
            alias = %condition.alias,
            op = condition.op.as_str(),
            matched = matched.len(),
            "evaluated filter condition"
        );
        Ok(matched)
    }
}

impl FieldStore for MemoryStore {
    type Error = StoreError;

    fn run_filtered_query(&self, filter: &Filter) -> Result<Vec<RecordId>> {
        Ok(self.evaluate(filter)?.into_iter().collect())
    }

    fn fetch_fields(&self, id: RecordId) -> Result<Vec<FieldRow>> {
        let mut rows: Vec<(u64, FieldRow)> = self
            .values
            .iter()
            .filter(|v| v.item_id == id)
            .filter_map(|v| {
                let def = self.definition(v.field_id)?;
                Some((def.id, FieldRow::new(&def.name, &def.title, &v.value)))
            })
            .collect();

        // Stable sort keeps multiple values of one field in insertion order.
        rows.sort_by_key(|(order, _)| *order);
        Ok(rows.into_iter().map(|(_, row)| row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .field(2, "firstname", "First name")
            .field(1, "lastname", "Last name")
            .value(RecordId(1), 2, "Max")
            .value(RecordId(1), 1, "Mustermann")
            .value(RecordId(2), 1, "Mustermann")
            .value(RecordId(2), 2, "Erika")
            .value(RecordId(3), 9, "orphan")
    }

    #[test]
    fn fetch_orders_by_definition_id() {
        let rows = store().fetch_fields(RecordId(1)).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["lastname", "firstname"]);
        assert_eq!(rows[0].title, "Last name");
    }

    #[test]
    fn fetch_unknown_id_is_empty() {
        assert!(store().fetch_fields(RecordId(99)).unwrap().is_empty());
    }

    #[test]
    fn fetch_skips_values_without_definition() {
        assert!(store().fetch_fields(RecordId(3)).unwrap().is_empty());
    }

    #[test]
    fn single_condition_matches_all_candidates() {
        let filter = Filter::new(Condition::new("lastname", "Mustermann"));
        let ids = store().run_filtered_query(&filter).unwrap();
        assert_eq!(ids, vec![RecordId(1), RecordId(2)]);
    }

    #[test]
    fn chain_narrows_candidates() {
        let filter = Filter::chain(vec![
            Condition::new("lastname", "Mustermann"),
            Condition::new("firstname", "Erika"),
        ])
        .unwrap();
        assert_eq!(store().run_filtered_query(&filter).unwrap(), vec![RecordId(2)]);
    }

    #[test]
    fn unknown_alias_matches_nothing() {
        let filter = Filter::new(Condition::new("nickname", "Maxi"));
        assert!(store().run_filtered_query(&filter).unwrap().is_empty());
    }

    #[test]
    fn duplicate_values_count_once() {
        let store = store().value(RecordId(1), 1, "Mustermann");
        let filter = Filter::chain(vec![
            Condition::new("lastname", "Mustermann"),
            Condition::new("firstname", "Max"),
        ])
        .unwrap();
        assert_eq!(store.run_filtered_query(&filter).unwrap(), vec![RecordId(1)]);
    }

    #[test]
    fn like_condition() {
        let filter = Filter::new(Condition::like("firstname", "e%"));
        assert_eq!(store().run_filtered_query(&filter).unwrap(), vec![RecordId(2)]);
    }

    #[test]
    fn item_ids_are_sorted_and_distinct() {
        assert_eq!(
            store().item_ids(),
            vec![RecordId(1), RecordId(2), RecordId(3)]
        );
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let store = MemoryStore::new()
            .field(1, "lastname", "")
            .field(2, "lastname", "");
        assert!(matches!(
            store.validate(),
            Err(StoreError::DuplicateField(name)) if name == "lastname"
        ));
    }
}
