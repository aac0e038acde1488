use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::scan::ats::AtsMatcher;
use crate::scan::skills::SkillDictionary;
use crate::scan::upload::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Scan history; `None` when DATABASE_URL is unset.
    pub db: Option<PgPool>,
    /// `None` when GEMINI_API_KEY is unset.
    pub llm: Option<LlmClient>,
    pub config: Config,
    pub matcher: Arc<AtsMatcher>,
    pub skills: Arc<SkillDictionary>,
    /// Pluggable résumé text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
