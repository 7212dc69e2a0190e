//! Domain layer
//!
//! Contains pure portal concepts with no external dependencies.
//! - `entities`: feed records, composed messages and capabilities
//! - `ports`: Trait definitions for the backend and the clock

pub mod entities;
pub mod ports;
