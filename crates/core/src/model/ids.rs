use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a section, unique within its course.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(u64);

impl SectionId {
    /// Creates a new `SectionId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows every id in `existing`, or `1` when there are none.
    ///
    /// `None` once `u64::MAX` is taken.
    pub(crate) fn next_after(existing: impl Iterator<Item = Self>) -> Option<Self> {
        next_value(existing.map(|id| id.0)).map(Self)
    }
}

/// Identifier of a lecture, unique within its owning section.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LectureId(u64);

impl LectureId {
    /// Creates a new `LectureId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    pub(crate) fn next_after(existing: impl Iterator<Item = Self>) -> Option<Self> {
        next_value(existing.map(|id| id.0)).map(Self)
    }
}

fn next_value(existing: impl Iterator<Item = u64>) -> Option<u64> {
    match existing.max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({})", self.0)
    }
}

impl fmt::Debug for LectureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LectureId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LectureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
