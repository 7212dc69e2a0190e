//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates a valid value that tests customize field by field.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::{Author, FeedItem, NormalizedDisplayItem};

/// A fixed "now" so ages are deterministic
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn test_author() -> Author {
    Author {
        id: "user-1".to_string(),
        name: "Placement Cell".to_string(),
        image: Some("placement-cell.png".to_string()),
    }
}

/// A notice-shaped item posted a day before `fixed_now`
pub fn test_feed_item() -> FeedItem {
    FeedItem {
        id: "item-1".to_string(),
        author: Some(test_author()),
        body: "Pre-placement talk in the main auditorium".to_string(),
        title: None,
        company: None,
        salary: None,
        tag: "2025".to_string(),
        created_at: Some(fixed_now() - Duration::days(1)),
    }
}

/// A job posting
pub fn test_job_item(id: &str, position: &str, company: &str) -> FeedItem {
    FeedItem {
        id: id.to_string(),
        author: Some(test_author()),
        body: format!("{} role at {}", position, company),
        title: Some(position.to_string()),
        company: Some(company.to_string()),
        salary: Some("10 LPA".to_string()),
        tag: "2025".to_string(),
        created_at: Some(fixed_now() - Duration::days(2)),
    }
}

pub fn test_display_item() -> NormalizedDisplayItem {
    NormalizedDisplayItem {
        id: "item-1".to_string(),
        author_name: "Placement Cell".to_string(),
        author_image: "placement-cell.png".to_string(),
        title: None,
        company: None,
        salary: None,
        body: "Pre-placement talk in the main auditorium".to_string(),
        tag: "2025".to_string(),
        age_days: Some(1),
        important: false,
        created_at: Some(fixed_now() - Duration::days(1)),
    }
}
