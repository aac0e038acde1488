//! Scan history: append-only record of every completed scan in `resume_scans`.

use serde::Serialize;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ScanSummaryRow;

pub const DEFAULT_HISTORY_LIMIT: i64 = 20;
pub const MAX_HISTORY_LIMIT: i64 = 100;

const LIST_RECENT_SCANS: &str = "SELECT id, kind, score, result, created_at \
     FROM resume_scans ORDER BY created_at DESC LIMIT $1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    Ats,
    Skills,
    Analysis,
}

impl ScanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanKind::Ats => "ats",
            ScanKind::Skills => "skills",
            ScanKind::Analysis => "analysis",
        }
    }
}

pub async fn insert_scan(
    pool: &PgPool,
    kind: ScanKind,
    resume_text: &str,
    score: Option<u32>,
    result: &serde_json::Value,
) -> Result<Uuid, AppError> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO resume_scans (id, kind, resume_text, score, result)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(kind.as_str())
    .bind(resume_text)
    .bind(score.map(|s| s as i32))
    .bind(result)
    .execute(pool)
    .await?;

    info!("Recorded {} scan {id}", kind.as_str());
    Ok(id)
}

/// Records a scan when persistence is configured. Failures are logged, never returned:
/// a scan result is still valid if the history write fails.
pub async fn record_scan<T: Serialize>(
    pool: Option<&PgPool>,
    kind: ScanKind,
    resume_text: &str,
    score: Option<u32>,
    result: &T,
) {
    let Some(pool) = pool else {
        return;
    };

    let value = match serde_json::to_value(result) {
        Ok(v) => v,
        Err(e) => {
            warn!("Failed to serialize {} scan for history: {e}", kind.as_str());
            return;
        }
    };

    if let Err(e) = insert_scan(pool, kind, resume_text, score, &value).await {
        warn!("Failed to record {} scan: {e}", kind.as_str());
    }
}

/// Most recent scans first. `limit` is clamped to `1..=MAX_HISTORY_LIMIT`.
pub async fn list_recent_scans(
    pool: &PgPool,
    limit: Option<i64>,
) -> Result<Vec<ScanSummaryRow>, AppError> {
    let limit = clamp_limit(limit);
    let rows = sqlx::query_as::<_, ScanSummaryRow>(LIST_RECENT_SCANS)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_defaults() {
        assert_eq!(clamp_limit(None), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_clamp_limit_bounds() {
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
        assert_eq!(clamp_limit(Some(5000)), MAX_HISTORY_LIMIT);
        assert_eq!(clamp_limit(Some(42)), 42);
    }

    #[test]
    fn test_scan_kind_labels() {
        assert_eq!(ScanKind::Ats.as_str(), "ats");
        assert_eq!(ScanKind::Skills.as_str(), "skills");
        assert_eq!(ScanKind::Analysis.as_str(), "analysis");
    }

    #[test]
    fn test_listing_never_selects_resume_text() {
        assert!(!LIST_RECENT_SCANS.contains("resume_text"));
        assert!(!LIST_RECENT_SCANS.contains('*'));
    }

    #[test]
    fn test_scan_summary_serializes_without_resume_text() {
        let row = ScanSummaryRow {
            id: Uuid::new_v4(),
            kind: ScanKind::Ats.as_str().to_string(),
            score: Some(80),
            result: serde_json::json!({"score": 80}),
            created_at: chrono::Utc::now(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("resume_text").is_none());
        assert_eq!(value["kind"], "ats");
        assert_eq!(value["score"], 80);
    }

    #[tokio::test]
    async fn test_record_scan_without_pool_is_noop() {
        record_scan(None, ScanKind::Ats, "resume", Some(10), &serde_json::json!({})).await;
    }
}
