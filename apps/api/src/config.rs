use std::path::PathBuf;

use anyhow::{Context, Result};

/// Local frontend dev server, always allowed by CORS.
const DEV_CLIENT_ORIGIN: &str = "http://localhost:5173";

/// Default request body limit for résumé uploads: 5 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; every integration is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables scan history persistence when set.
    pub database_url: Option<String>,
    /// Enables `/analyse-resume` when set.
    pub gemini_api_key: Option<String>,
    /// Overrides the built-in skill dictionary.
    pub skill_dictionary_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
    /// CORS origins: the dev server plus CLIENT_URL when set.
    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            skill_dictionary_path: optional_env("SKILL_DICTIONARY_PATH").map(PathBuf::from),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            allowed_origins: allowed_origins(optional_env("CLIENT_URL")),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn allowed_origins(client_url: Option<String>) -> Vec<String> {
    let mut origins = vec![DEV_CLIENT_ORIGIN.to_string()];
    if let Some(url) = client_url {
        let url = url.trim_end_matches('/').to_string();
        if !origins.contains(&url) {
            origins.push(url);
        }
    }
    origins
}

#[cfg(test)]
impl Config {
    /// Configuration with every optional integration disabled.
    pub fn for_tests() -> Self {
        Config {
            database_url: None,
            gemini_api_key: None,
            skill_dictionary_path: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_origins: allowed_origins(None),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origins_always_include_dev_server() {
        assert_eq!(allowed_origins(None), vec![DEV_CLIENT_ORIGIN]);
    }

    #[test]
    fn test_allowed_origins_add_client_url_without_trailing_slash() {
        assert_eq!(
            allowed_origins(Some("https://smartscan.example.com/".to_string())),
            vec![DEV_CLIENT_ORIGIN, "https://smartscan.example.com"]
        );
    }

    #[test]
    fn test_allowed_origins_deduplicate() {
        assert_eq!(
            allowed_origins(Some(DEV_CLIENT_ORIGIN.to_string())),
            vec![DEV_CLIENT_ORIGIN]
        );
    }
}
