//! Résumé upload handling: multipart form parsing and résumé text extraction.
//!
//! Accepted fields:
//! - `file`: PDF résumé, converted to text through the configured `TextExtractor`
//! - `resumeText`: plain-text résumé, used as-is (takes precedence over `file`)
//! - `jobDescription`: job description text
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so tests can swap the PDF backend.

use async_trait::async_trait;
use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::AppError;

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Converts an uploaded document into plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: Bytes) -> Result<String, AppError>;
}

/// Default extractor backed by `pdf-extract`. Parsing is CPU-bound, so it runs
/// on the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: Bytes) -> Result<String, AppError> {
        // pdf-extract can panic on malformed documents; a panicked task is an unreadable PDF.
        match tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await {
            Ok(result) => result.map_err(|e| AppError::TextExtraction(e.to_string())),
            Err(e) if e.is_panic() => Err(AppError::TextExtraction(
                "PDF parser aborted on malformed input".to_string(),
            )),
            Err(e) => Err(AppError::Internal(anyhow::anyhow!(
                "PDF extraction task failed: {e}"
            ))),
        }
    }
}

/// A PDF file pulled out of the multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    fn is_pdf(&self) -> bool {
        let by_type = self
            .content_type
            .as_deref()
            .map(|t| t.eq_ignore_ascii_case(PDF_CONTENT_TYPE))
            .unwrap_or(false);
        let by_name = self
            .file_name
            .as_deref()
            .map(|n| n.to_lowercase().ends_with(".pdf"))
            .unwrap_or(false);
        by_type || by_name
    }
}

/// Parsed multipart form for every résumé endpoint.
#[derive(Debug, Default)]
pub struct ResumeForm {
    pub file: Option<UploadedFile>,
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

impl ResumeForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ResumeForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await?;
                    form.file = Some(UploadedFile {
                        file_name,
                        content_type,
                        data,
                    });
                }
                "resumeText" => form.resume_text = Some(field.text().await?),
                "jobDescription" => form.job_description = Some(field.text().await?),
                other => debug!("Ignoring unknown multipart field '{other}'"),
            }
        }

        Ok(form)
    }

    /// Job description text, rejecting absent or blank values.
    pub fn require_job_description(&self) -> Result<&str, AppError> {
        self.job_description
            .as_deref()
            .filter(|jd| !jd.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Job Description is required".to_string()))
    }

    /// Résumé text from `resumeText` or, failing that, the uploaded PDF.
    ///
    /// Extracted text may legitimately be empty (e.g. a scanned PDF); only a
    /// missing résumé is an error.
    pub async fn resolve_resume_text(&self, extractor: &dyn TextExtractor) -> Result<String, AppError> {
        if let Some(text) = self.resume_text.as_deref().filter(|t| !t.trim().is_empty()) {
            return Ok(text.to_string());
        }

        let file = self
            .file
            .as_ref()
            .filter(|f| !f.data.is_empty())
            .ok_or_else(|| AppError::Validation("Resume is required".to_string()))?;

        if !file.is_pdf() {
            return Err(AppError::UnsupportedMedia(
                "Resume must be uploaded as a PDF".to_string(),
            ));
        }

        let text = extractor.extract(file.data.clone()).await?;
        info!(
            "Extracted {} characters from {}",
            text.len(),
            file.file_name.as_deref().unwrap_or("uploaded resume")
        );
        Ok(text)
    }
}
