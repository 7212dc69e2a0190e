//! Remote collections served by the portal backend

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Jobs,
    Notices,
    Interviews,
}

impl Collection {
    /// Endpoint path relative to the backend base URL
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Jobs => "/jobs",
            Collection::Notices => "/messages",
            Collection::Interviews => "/interviews",
        }
    }

    /// Name of the array field holding the items in the response body
    pub fn array_field(&self) -> &'static str {
        match self {
            Collection::Jobs => "Jobs",
            Collection::Notices => "messages",
            Collection::Interviews => "interviews",
        }
    }

    /// Heading used when rendering the collection
    pub fn title(&self) -> &'static str {
        match self {
            Collection::Jobs => "Job Openings",
            Collection::Notices => "Notice Board",
            Collection::Interviews => "Interview Experiences",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collection::Jobs => write!(f, "jobs"),
            Collection::Notices => write!(f, "notices"),
            Collection::Interviews => write!(f, "interviews"),
        }
    }
}
