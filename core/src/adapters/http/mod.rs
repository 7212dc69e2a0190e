//! Portal backend adapter
//!
//! Reads collections over HTTP and decodes the document-store JSON shape.

pub mod client;
pub mod wire;


pub use client::HttpFeedSource;
pub use wire::decode_collection;
