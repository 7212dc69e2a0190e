//! Local message board
//!
//! Holds the messages an admin composed during the current session. Nothing
//! here is sent to the backend. Messages are append-only; the important list
//! is an index into the full list, so it is always an ordered subsequence of
//! it.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::ImportanceClassifier;
use crate::domain::entities::ComposedMessage;
use crate::error::DomainError;

#[derive(Debug, Default)]
pub struct MessageBoard {
    classifier: ImportanceClassifier,
    all: Vec<ComposedMessage>,
    /// Positions in `all` of messages flagged important, ascending
    important: Vec<usize>,
}

impl MessageBoard {
    pub fn new(classifier: ImportanceClassifier) -> Self {
        Self {
            classifier,
            all: Vec::new(),
            important: Vec::new(),
        }
    }

    /// Classify and append a new message typed by the admin.
    ///
    /// Blank input is rejected and leaves the board unchanged.
    pub fn compose(
        &mut self,
        body: &str,
        now: DateTime<Utc>,
    ) -> Result<&ComposedMessage, DomainError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(DomainError::Validation(
                "message body cannot be empty".to_string(),
            ));
        }

        let important = self.classifier.is_important(body);
        Ok(self.append(ComposedMessage::new(body, important, now)))
    }

    /// Append an already classified message.
    ///
    /// The message's flag decides whether it is also listed as important; it
    /// is never recomputed.
    pub fn append(&mut self, message: ComposedMessage) -> &ComposedMessage {
        let position = self.all.len();
        if message.important {
            self.important.push(position);
        }
        debug!(id = %message.id, important = message.important, "Message added to board");
        self.all.push(message);
        &self.all[position]
    }

    pub fn list_all(&self) -> &[ComposedMessage] {
        &self.all
    }

    pub fn list_important(&self) -> Vec<&ComposedMessage> {
        self.important.iter().map(|&i| &self.all[i]).collect()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn important_count(&self) -> usize {
        self.important.len()
    }
}
