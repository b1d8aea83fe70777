//! Type-safe queue entry identifier.
//!
//! [`EntryId`] is a newtype over `i64` assigned monotonically by the
//! [`super::QueueStore`], starting at 1 and resetting on a full clear.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a queue entry.
///
/// Assigned by the store at admission time and immutable thereafter.
/// The sequence starts at 1 and is reset to 1 by the full-clear operation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    /// The first identifier the sequence ever produces.
    pub const FIRST: Self = Self(1);

    /// Creates an `EntryId` from a raw sequence value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw sequence value.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Returns the identifier that follows this one in the sequence.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
