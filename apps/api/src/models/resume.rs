use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Listing view of a `resume_scans` row. The stored résumé text is write-only
/// and never selected back out.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScanSummaryRow {
    pub id: Uuid,
    /// "ats" | "skills" | "analysis"
    pub kind: String,
    pub score: Option<i32>,
    pub result: Value,
    pub created_at: DateTime<Utc>,
}
