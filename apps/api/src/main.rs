mod analysis;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod scan;
mod state;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scan::ats::AtsMatcher;
use crate::scan::skills::SkillDictionary;
use crate::scan::tokenizer::StopwordFilter;
use crate::scan::upload::PdfTextExtractor;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SmartScan API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (optional scan history)
    let db = match &config.database_url {
        Some(url) => Some(create_pool(url).await?),
        None => {
            warn!("DATABASE_URL not set; scan history disabled");
            None
        }
    };

    // Initialize LLM client (optional résumé analysis)
    let llm = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(llm)
        }
        None => {
            warn!("GEMINI_API_KEY not set; resume analysis disabled");
            None
        }
    };

    // Skill dictionary: built-in unless overridden
    let skills = match &config.skill_dictionary_path {
        Some(path) => SkillDictionary::from_json_file(path)?,
        None => SkillDictionary::default(),
    };
    info!("Skill dictionary loaded ({} skills)", skills.total_skills());

    let stopwords = StopwordFilter::english();
    info!("Stopword filter loaded ({} words)", stopwords.len());

    // Build app state
    let state = AppState {
        db,
        llm,
        config: config.clone(),
        matcher: Arc::new(AtsMatcher::new(stopwords)),
        skills: Arc::new(skills),
        extractor: Arc::new(PdfTextExtractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS restricted to the configured frontend origins.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    info!("CORS allowed origins: {:?}", config.allowed_origins);

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
