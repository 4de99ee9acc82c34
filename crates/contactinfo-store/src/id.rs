use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a record (an item owning field values).
///
/// Ids are signed. [`RecordId::UNRESOLVED`] (`-1`) marks a selector that
/// names no record; every other value, negative or not, is used as is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// The id that stands for "no record".
    pub const UNRESOLVED: RecordId = RecordId(-1);

    /// Returns the raw id value.
    pub fn get(self) -> i64 {
        self.0
    }

    pub fn is_unresolved(self) -> bool {
        self == RecordId::UNRESOLVED
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
