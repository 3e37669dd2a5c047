use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row read back from the persisted table.
///
/// Everything but the `season` key is optional: the loader always writes
/// full records, but the table's string columns are nullable and rows may
/// predate this pipeline, so the read side tolerates holes. Consumers apply
/// the 0 / `"Unknown"` defaults when presenting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRow {
    pub season: i32,
    pub team: Option<String>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub ties: Option<i32>,
    pub points_for: Option<i32>,
    pub points_against: Option<i32>,
    pub division_place: Option<String>,
    pub coach: Option<String>,
    pub playoffs: Option<String>,
    pub source_url: Option<String>,
    pub extracted_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
