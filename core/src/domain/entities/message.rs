//! Locally composed admin messages
//!
//! These never leave the process; they live as long as the board that owns
//! them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Sender label attached to every composed message
pub const ADMIN_SENDER: &str = "Admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedMessage {
    pub id: Uuid,
    pub body: String,
    pub sender: String,
    /// Classified once, when the message is composed
    pub important: bool,
    pub composed_at: DateTime<Utc>,
}

impl ComposedMessage {
    pub fn new(body: impl Into<String>, important: bool, composed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            body: body.into(),
            sender: ADMIN_SENDER.to_string(),
            important,
            composed_at,
        }
    }
}
