//! Interactive widget state for the marquee landing page.
//!
//! Each widget owns its state exclusively and exposes pure transition
//! functions (old state + event -> new state); the only asynchrony is the
//! auto-advance timer of the rotating showcase, driven by a tokio task
//! that is cancelled when its handle is dropped.

pub mod autoplay;
pub mod carousel;
pub mod export;
pub mod showcase;

pub use autoplay::Autoplay;
pub use carousel::{Carousel, CarouselConfig};
pub use export::page_export;
pub use showcase::{default_tabs, ShowcaseTab, TabState};
