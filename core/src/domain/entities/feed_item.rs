//! Feed records
//!
//! `FeedItem` is what the backend sends; `NormalizedDisplayItem` is what the
//! renderer shows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Author;

/// A job posting, notice or interview write-up as sourced from the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    /// Opaque document id
    pub id: String,
    /// Populated author reference, absent when the user was deleted
    pub author: Option<Author>,
    /// Main text: job description, notice message or interview write-up
    pub body: String,
    /// Job position or interview role
    pub title: Option<String>,
    pub company: Option<String>,
    /// Salary as the backend spells it ("12 LPA", "₹8,00,000")
    pub salary: Option<String>,
    /// Category or batch year
    pub tag: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Display-ready form of a `FeedItem`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedDisplayItem {
    pub id: String,
    pub author_name: String,
    pub author_image: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub salary: Option<String>,
    pub body: String,
    pub tag: String,
    /// Whole days since creation, `None` when the backend sent no timestamp
    pub age_days: Option<u64>,
    pub important: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl NormalizedDisplayItem {
    /// Human-readable age ("today", "1 day ago", "12 days ago")
    pub fn age_label(&self) -> String {
        match self.age_days {
            None => "date unknown".to_string(),
            Some(0) => "today".to_string(),
            Some(1) => "1 day ago".to_string(),
            Some(days) => format!("{} days ago", days),
        }
    }
}
