//! Domain entities
//!
//! Server-sourced feed records, their display form, and locally composed
//! messages.

pub mod author;
pub mod capability;
pub mod collection;
pub mod feed_item;
pub mod message;

pub use author::{Author, DEFAULT_AUTHOR_IMAGE, DEFAULT_AUTHOR_NAME};
pub use capability::Capability;
pub use collection::Collection;
pub use feed_item::{FeedItem, NormalizedDisplayItem};
pub use message::{ComposedMessage, ADMIN_SENDER};
