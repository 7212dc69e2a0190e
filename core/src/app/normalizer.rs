//! Item normalizer
//!
//! Derives display-ready fields from a `FeedItem`. Every truncation budget,
//! the age rule and the importance rule live here and nowhere else.

use chrono::{DateTime, Utc};

use super::ImportanceClassifier;
use crate::domain::entities::{
    FeedItem, NormalizedDisplayItem, DEFAULT_AUTHOR_IMAGE, DEFAULT_AUTHOR_NAME,
};

/// Character budget for short labels: position, company, salary
pub const SHORT_LABEL_BUDGET: usize = 25;

/// Character budget for long text: descriptions, notices, write-ups
pub const LONG_TEXT_BUDGET: usize = 100;

/// Marker appended to truncated text
pub const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    classifier: ImportanceClassifier,
}

impl Normalizer {
    pub fn new(classifier: ImportanceClassifier) -> Self {
        Self { classifier }
    }

    /// Normalize one item as seen at `now`
    pub fn normalize(&self, item: &FeedItem, now: DateTime<Utc>) -> NormalizedDisplayItem {
        let (author_name, author_image) = match &item.author {
            Some(author) => (
                author.display_name().to_string(),
                author.display_image().to_string(),
            ),
            None => (
                DEFAULT_AUTHOR_NAME.to_string(),
                DEFAULT_AUTHOR_IMAGE.to_string(),
            ),
        };

        NormalizedDisplayItem {
            id: item.id.clone(),
            author_name,
            author_image,
            title: item.title.as_deref().map(|t| truncate(t, SHORT_LABEL_BUDGET)),
            company: item
                .company
                .as_deref()
                .map(|c| truncate(c, SHORT_LABEL_BUDGET)),
            salary: item
                .salary
                .as_deref()
                .map(|s| truncate(s, SHORT_LABEL_BUDGET)),
            body: truncate(&item.body, LONG_TEXT_BUDGET),
            tag: item.tag.clone(),
            age_days: item.created_at.map(|created| age_in_days(created, now)),
            important: self.classifier.is_important(&item.body),
            created_at: item.created_at,
        }
    }

    /// Normalize a whole list, keeping its order
    pub fn normalize_all(
        &self,
        items: &[FeedItem],
        now: DateTime<Utc>,
    ) -> Vec<NormalizedDisplayItem> {
        items.iter().map(|item| self.normalize(item, now)).collect()
    }
}

/// Cut `text` to `budget` characters, marking the cut with an ellipsis.
///
/// Counts `char`s, so multi-byte characters are never split.
pub fn truncate(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len_utf8());
            out.push_str(&text[..cut]);
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

/// Whole days elapsed between `created_at` and `now`.
///
/// Timestamps in the future (clock skew) count as zero days.
pub fn age_in_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let days = (now - created_at).num_days();
    u64::try_from(days).unwrap_or(0)
}
