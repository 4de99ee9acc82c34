//! Record resolution.
//!
//! [`Resolver::resolve`] turns a [`Selector`] into exactly one [`RecordId`].
//! Its return type separates the two failure levels:
//!
//! ```text
//! Err(Error)                      store failure, rendering aborts
//! Ok(Err(ResolveError))           no record / several records, diagnostic text
//! Ok(Ok(RecordId))                resolved
//! ```

use std::collections::BTreeSet;

use contactinfo_store::{FieldStore, Filter, RecordId};
use tracing::debug;

use crate::error::{Error, ResolveError, Result};
use crate::selector::Selector;

/// Outcome of resolving one selector.
pub type Resolution = std::result::Result<RecordId, ResolveError>;

/// Resolves selectors against an injected store.
#[derive(Debug)]
pub struct Resolver<'s, S> {
    store: &'s S,
}

impl<'s, S: FieldStore> Resolver<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Resolver { store }
    }

    /// Resolves a selector to a single record id.
    ///
    /// `ById` never touches the store's data; `ByQuery` folds its conditions
    /// into a nested filter chain and inspects only the final id set.
    pub fn resolve(&self, selector: &Selector) -> Result<Resolution> {
        match selector {
            Selector::ById(id) => Ok(Ok(self.store.resolve_by_id(*id))),
            Selector::ByQuery(conditions) => {
                let Some(filter) = Filter::chain(conditions.iter().cloned()) else {
                    return Ok(Err(ResolveError::NotFound));
                };

                let ids: BTreeSet<RecordId> = self
                    .store
                    .run_filtered_query(&filter)
                    .map_err(Error::store)?
                    .into_iter()
                    .collect();
                debug!(conditions = filter.depth(), matched = ids.len(), "resolved query");

                Ok(match (ids.len(), ids.first()) {
                    (1, Some(id)) => Ok(*id),
                    (0, _) => Err(ResolveError::NotFound),
                    (count, _) => Err(ResolveError::NotUnique(count)),
                })
            }
        }
    }
}
