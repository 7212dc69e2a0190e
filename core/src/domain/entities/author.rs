//! Author of a feed record
//!
//! The backend populates the author reference from the users collection.

use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTHOR_NAME: &str = "Anonymous";
pub const DEFAULT_AUTHOR_IMAGE: &str = "default-avatar.png";

/// A populated user reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    /// Avatar image reference (URL or file name)
    pub image: Option<String>,
}

impl Author {
    /// Name to display, falling back to the default label when blank
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            DEFAULT_AUTHOR_NAME
        } else {
            name
        }
    }

    pub fn display_image(&self) -> &str {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .unwrap_or(DEFAULT_AUTHOR_IMAGE)
    }
}
