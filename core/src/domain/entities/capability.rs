//! Viewer capability
//!
//! Decided once when a session starts and passed explicitly to whatever
//! needs it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    #[default]
    Viewer,
    Admin,
}

impl Capability {
    /// Whether admin-only controls (composing messages) are available
    pub fn can_compose(&self) -> bool {
        matches!(self, Capability::Admin)
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Viewer => write!(f, "viewer"),
            Capability::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "viewer" | "student" => Ok(Capability::Viewer),
            "admin" => Ok(Capability::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}
