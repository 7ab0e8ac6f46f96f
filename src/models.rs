//! Task Model
//!
//! Data structure matching the stored collection format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One to-do entry.
///
/// Field names serialize in camelCase so payloads written under the
/// historical storage format keep parsing. Stored `createdAt` text is
/// reconstructed into a proper `DateTime` on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// New incomplete task with a fresh id, stamped now.
    pub fn new(title: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}
