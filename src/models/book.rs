use serde::{Deserialize, Serialize};
use std::fmt;

pub const NO_DESCRIPTION: &str = "No description available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "Available"),
            AvailabilityStatus::Unavailable => write!(f, "Not Available"),
        }
    }
}

/// One normalized work as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub key: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub subject: String,
    pub image_ref: Option<String>,
    pub status: AvailabilityStatus,
}

impl BookRecord {
    /// Catalog keys repeat across subjects, so the position in the merged
    /// sequence is part of the rendering key.
    pub fn render_key(&self, position: usize) -> String {
        format!("{}-{}", self.key, position)
    }
}
