use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Team name filled in when the model omits one.
pub const DEFAULT_TEAM: &str = "Dallas Cowboys";

/// Placeholder for string fields the model left absent or empty.
pub const UNKNOWN: &str = "Unknown";

/// One fully normalized season. Every field is guaranteed present and
/// type-correct; the structurer refuses to emit anything less.
///
/// `season` is the natural key — the persisted table conflicts on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub season: i32,
    pub team: String,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
    pub points_for: i32,
    pub points_against: i32,
    pub division_place: String,
    pub coach: String,
    pub playoffs: String,
    pub source_url: String,
    pub extracted_at: DateTime<Utc>,
}

/// The on-disk shape of the structurer's output file:
/// `{"records": [SeasonRecord, ...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredArtifact {
    pub records: Vec<SeasonRecord>,
}
