//! Reference entry model and view state for marquee documentation pages.
//!
//! A reference page is an authored YAML document listing program entities
//! (values, types, typeclasses). This crate parses those documents, computes
//! display signatures and detail visibility for each entry, and holds the
//! pure state machines behind the kind filter bar and the expand/collapse
//! affordance. Entries are immutable once parsed; only view state mutates.

pub mod entry;
pub mod page;
pub mod state;

pub use entry::{ClassEntry, Constructor, Entry, Field, Kind, Meta, Method, TypeEntry, ValueEntry};
pub use page::{RefError, ReferencePage};
pub use state::{kind_counts, ExpandState, FilterState};
