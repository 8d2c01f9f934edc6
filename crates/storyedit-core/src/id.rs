//! Draft-scoped element identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an overlay element (text or sticker) within one draft.
///
/// Texts and stickers share a single namespace. Ids are handed out by the
/// draft in increasing order and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// The first id a fresh draft hands out.
    pub const FIRST: Self = Self(1);

    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
