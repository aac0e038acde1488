//! ATS keyword matching: scores how much of a job description's vocabulary a résumé covers.
//!
//! Algorithm:
//! 1. Tokenize both texts (lowercase, split on non-word characters).
//! 2. Drop English stopwords and collapse each side into an ordered set.
//! 3. matched = job ∩ résumé, missing = job − résumé (both in job order).
//! 4. score = round(100 × |matched| / |job|)
//!
//! A job description with no keywords left after filtering is rejected with
//! `ScanError::InvalidInput` rather than scored.

use serde::{Deserialize, Serialize};

use crate::scan::tokenizer::StopwordFilter;
use crate::scan::ScanError;

/// Outcome of matching one résumé against one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Keyword matcher. Built once at startup and shared read-only across requests.
#[derive(Debug, Clone, Default)]
pub struct AtsMatcher {
    stopwords: StopwordFilter,
}

impl AtsMatcher {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    pub fn compute_match(&self, job_text: &str, resume_text: &str) -> Result<MatchResult, ScanError> {
        let job_tokens = self.stopwords.token_set(job_text);
        if job_tokens.is_empty() {
            return Err(ScanError::InvalidInput(
                "job description contains no keywords to match against".to_string(),
            ));
        }

        let resume_tokens = self.stopwords.token_set(resume_text);

        let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = job_tokens
            .iter()
            .map(str::to_string)
            .partition(|token| resume_tokens.contains(token));

        let score = percentage(matched_keywords.len(), job_tokens.len());

        Ok(MatchResult {
            score,
            matched_keywords,
            missing_keywords,
        })
    }
}

fn percentage(part: usize, whole: usize) -> u32 {
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
