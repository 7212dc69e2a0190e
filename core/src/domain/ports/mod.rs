//! Domain ports (traits)
//!
//! Port traits define what the feed pipeline needs from the outside world.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod feed_source;

pub use clock::{Clock, SystemClock};
pub use feed_source::FeedSource;
