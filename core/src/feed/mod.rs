//! Feed module
//!
//! Markdown rendering of feeds and the message board.

pub mod renderer;

pub use renderer::{BoardFilter, FeedRenderer};
