//! View state for the reference list.
//!
//! Both state machines here are pure: each transition takes the old state
//! and an event and mutates only that state, so they are testable without
//! a rendering environment. Nothing is persisted across sessions.

use std::collections::{BTreeMap, BTreeSet};

use crate::entry::{Entry, Kind};

/// The set of kind filters currently restricting the visible entry list.
///
/// An empty set means "show all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: BTreeSet<Kind>,
}

impl FilterState {
    /// Create an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a kind filter: add it if absent, remove it if present.
    pub fn toggle(&mut self, kind: Kind) {
        if !self.active.remove(&kind) {
            self.active.insert(kind);
        }
    }

    /// Reset to "show all".
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Whether no filter is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether a given kind filter is active.
    pub fn is_active(&self, kind: Kind) -> bool {
        self.active.contains(&kind)
    }

    /// The visible entries, recomputed from the full list and the active
    /// set. Returns the full list when no filter is active, otherwise the
    /// order-preserving subsequence whose kind is in the active set.
    pub fn visible<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        if self.active.is_empty() {
            entries.iter().collect()
        } else {
            entries
                .iter()
                .filter(|e| self.active.contains(&e.kind()))
                .collect()
        }
    }
}

/// Per-kind entry counts for the filter bar labels.
pub fn kind_counts(entries: &[Entry]) -> BTreeMap<Kind, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.kind()).or_insert(0) += 1;
    }
    counts
}

/// Expanded/collapsed flags, one per displayed entry, keyed by list index.
///
/// Flags are independent: expanding one entry never collapses another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: BTreeSet<usize>,
}

impl ExpandState {
    /// Create a state with every entry collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for a single entry.
    pub fn toggle(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    /// Whether the entry at `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }
}
