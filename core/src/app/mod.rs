//! Application layer
//!
//! The feed pipeline: classification, normalization, the per-view load state
//! and the local message board.

pub mod classifier;
pub mod feed_view;
pub mod message_board;
pub mod normalizer;

pub use classifier::{ImportanceClassifier, DEFAULT_IMPORTANT_KEYWORDS};
pub use feed_view::{FeedState, FeedView, LoadOutcome, PendingLoad};
pub use message_board::MessageBoard;
pub use normalizer::{
    age_in_days, truncate, Normalizer, ELLIPSIS, LONG_TEXT_BUDGET, SHORT_LABEL_BUDGET,
};
