//! Résumé analysis: qualitative strengths/weaknesses report produced by the LLM.
//!
//! All LLM calls go through llm_client. The model's output is sanitized before
//! it reaches the client: blank entries are dropped and learning resources
//! without an http(s) URL are discarded.

pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::prompts::{
    ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM, GENERAL_JOB_SECTION, JOB_SECTION_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, RESOURCE_INSTRUCTION};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggested_skills: Vec<String>,
    pub job_fit_summary: String,
    pub learning_resources: Vec<LearningResource>,
}

impl ResumeAnalysis {
    fn sanitize(mut self) -> Self {
        for list in [
            &mut self.strengths,
            &mut self.weaknesses,
            &mut self.suggested_skills,
        ] {
            list.iter_mut().for_each(|item| *item = item.trim().to_string());
            list.retain(|item| !item.is_empty());
        }
        self.job_fit_summary = self.job_fit_summary.trim().to_string();
        self.learning_resources.retain(|r| {
            !r.title.trim().is_empty()
                && (r.url.starts_with("https://") || r.url.starts_with("http://"))
        });
        self
    }
}

pub fn build_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let job_section = match job_description.map(str::trim).filter(|jd| !jd.is_empty()) {
        Some(jd) => JOB_SECTION_TEMPLATE.replace("{job_description}", jd),
        None => GENERAL_JOB_SECTION.to_string(),
    };
    fill_template(
        ANALYSIS_PROMPT_TEMPLATE,
        &[("{job_section}", job_section.as_str()), ("{resume_text}", resume_text)],
    )
}

/// Substitutes placeholders in a single left-to-right pass. Inserted values are
/// never rescanned, so user text containing a placeholder stays literal.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match vars.iter().find(|(key, _)| tail.starts_with(*key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

pub async fn analyse_resume(
    llm: &LlmClient,
    resume_text: &str,
    job_description: Option<&str>,
) -> Result<ResumeAnalysis, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Resume contains no readable text to analyse".to_string(),
        ));
    }

    let prompt = build_prompt(resume_text, job_description);
    let system = format!("{ANALYSIS_SYSTEM} {RESOURCE_INSTRUCTION} {JSON_ONLY_SYSTEM}");

    let analysis = llm
        .call_json::<ResumeAnalysis>(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?
        .sanitize();

    info!(
        "Resume analysed: {} strengths, {} weaknesses, {} resources",
        analysis.strengths.len(),
        analysis.weaknesses.len(),
        analysis.learning_resources.len()
    );

    Ok(analysis)
}
