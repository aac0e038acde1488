// Prompt constants for résumé analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for résumé analysis.
pub const ANALYSIS_SYSTEM: &str = "You are an experienced technical recruiter and career coach. \
    You review resumes honestly and give concrete, actionable advice.";

/// Analysis prompt template. Replace `{resume_text}` and `{job_section}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume.

Return a JSON object with this EXACT schema (no extra fields):
{
  "strengths": ["Clear impact metrics in recent roles"],
  "weaknesses": ["No mention of testing practices"],
  "suggestedSkills": ["Docker"],
  "jobFitSummary": "Two or three sentences on overall fit.",
  "learningResources": [
    {
      "title": "Docker Getting Started",
      "description": "Official hands-on introduction to containers.",
      "url": "https://docs.docker.com/get-started/"
    }
  ]
}

Give 3-6 items for strengths, weaknesses and suggestedSkills, and 2-5 learning resources.
{job_section}
RESUME:
{resume_text}
"#;

/// Inserted into `{job_section}` when the caller supplied a job description.
pub const JOB_SECTION_TEMPLATE: &str = r#"
Judge fit against this job description and tailor suggestedSkills to it:
JOB DESCRIPTION:
{job_description}
"#;

/// Inserted into `{job_section}` without a job description.
pub const GENERAL_JOB_SECTION: &str = "
No job description was given. Judge general employability for the roles the resume targets.
";
