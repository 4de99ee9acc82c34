//! Contactinfo Store - records, field values and AND-chain filters.
//!
//! This crate holds the data side of `contactinfo`:
//!
//! - [`RecordId`]: identifier of a record owning field values
//! - [`Condition`] and [`Filter`]: structured `alias <op> value` predicates,
//!   nested into a progressively narrowing AND-chain
//! - [`FieldStore`]: the capability the substitution engine queries
//! - [`MemoryStore`]: an in-memory implementation loadable from JSON or YAML
//!
//! # Query Semantics
//!
//! A chain built from conditions `c0, c1, ..., cn` matches:
//!
//! ```text
//! ids(c0)                       for the innermost filter
//! ids(ci) ∩ ids(chain[..i])     for each following condition
//! ```
//!
//! Only the outermost result set is returned. The chain is logically
//! commutative, so a store may evaluate it as a single combined filter.
//!
//! # Quick Start
//!
//! ```rust
//! use contactinfo_store::{Condition, FieldStore, Filter, MemoryStore, RecordId};
//!
//! let store = MemoryStore::from_yaml_str(
//!     r#"
//! fields:
//!   - { id: 1, name: lastname, title: Last name }
//! values:
//!   - { item_id: 4, field_id: 1, value: Mustermann }
//! "#,
//! )
//! .unwrap();
//!
//! let filter = Filter::new(Condition::new("lastname", "Mustermann"));
//! assert_eq!(store.run_filtered_query(&filter).unwrap(), vec![RecordId(4)]);
//! ```

mod condition;
mod error;
mod id;
mod memory;
mod op;
mod traits;

pub use condition::{Condition, Filter};
pub use error::{Result, StoreError};
pub use id::RecordId;
pub use memory::{FieldDef, FieldValue, MemoryStore};
pub use op::{like_to_regex, Matcher, Op};
pub use traits::{FieldRow, FieldStore};
