//! Importance classification
//!
//! Keyword heuristic: a text is important when it contains any keyword,
//! ignoring case. Substrings count, so "unimportant" matches too.

use regex::{Regex, RegexBuilder};

use crate::error::DomainError;

pub const DEFAULT_IMPORTANT_KEYWORDS: &[&str] = &["important"];

#[derive(Debug, Clone)]
pub struct ImportanceClassifier {
    /// `None` when no keywords were given; nothing is important then
    pattern: Option<Regex>,
    keywords: Vec<String>,
}

impl ImportanceClassifier {
    pub fn new<I, S>(keywords: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        let pattern = if keywords.is_empty() {
            None
        } else {
            let alternation = keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let regex = RegexBuilder::new(&alternation)
                .case_insensitive(true)
                .build()
                .map_err(|e| DomainError::Validation(format!("invalid keyword set: {}", e)))?;
            Some(regex)
        };

        Ok(Self { pattern, keywords })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_important(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .map(|p| p.is_match(text))
            .unwrap_or(false)
    }
}

impl Default for ImportanceClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_IMPORTANT_KEYWORDS.iter().copied()).unwrap_or(Self {
            pattern: None,
            keywords: Vec::new(),
        })
    }
}
