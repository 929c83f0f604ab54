//! Domain services layered over the store: assignment matching, platform
//! summaries, and image handling.

pub mod images;
pub mod matcher;
pub mod summary;

pub use images::{ImageStore, InMemoryImageStore};
pub use summary::{PinSummary, PlatformSummary, RegionRollup};
