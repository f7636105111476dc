//! Static site renderer for marquee.
//!
//! Turns authored reference pages and showcase samples into a static HTML
//! site: signatures run through the tokenizer, span classes map to styles,
//! and every page gets a markdown export backing the copy button.

pub mod assets;
pub mod builder;
pub mod templates;

pub use builder::{BuildError, BuildResult, SiteBuilder, SiteConfig};
