//! Skill extraction: finds canonical skill names from a fixed, categorized dictionary in résumé text.
//!
//! Matching is case-insensitive and whole-term: `Go` matches the term `go` but
//! not `golang` or `google`. Multi-word skills (`public speaking`) match when
//! their terms appear next to each other.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::scan::ScanError;

/// Closed set of skill categories. Declaration order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Software,
    Communication,
    Backend,
    Frontend,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Languages,
        SkillCategory::Software,
        SkillCategory::Communication,
        SkillCategory::Backend,
        SkillCategory::Frontend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Software => "software",
            SkillCategory::Communication => "communication",
            SkillCategory::Backend => "backend",
            SkillCategory::Frontend => "frontend",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable category → canonical skill names mapping. Every category is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<SkillCategory, Vec<String>>")]
pub struct SkillDictionary {
    #[serde(flatten)]
    categories: BTreeMap<SkillCategory, Vec<String>>,
}

impl TryFrom<BTreeMap<SkillCategory, Vec<String>>> for SkillDictionary {
    type Error = ScanError;

    fn try_from(categories: BTreeMap<SkillCategory, Vec<String>>) -> Result<Self, Self::Error> {
        let missing: Vec<&str> = SkillCategory::ALL
            .iter()
            .filter(|c| !categories.contains_key(*c))
            .map(SkillCategory::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(ScanError::InvalidDictionary(format!(
                "missing categories: {}",
                missing.join(", ")
            )));
        }
        if let Some((category, _)) = categories
            .iter()
            .find(|(_, skills)| skills.iter().any(|s| skill_terms(s).is_empty()))
        {
            return Err(ScanError::InvalidDictionary(format!(
                "category '{category}' contains a blank skill name"
            )));
        }
        Ok(Self { categories })
    }
}

impl Default for SkillDictionary {
    fn default() -> Self {
        let entries: [(SkillCategory, &[&str]); 5] = [
            (
                SkillCategory::Languages,
                &["JavaScript", "TypeScript", "Python", "Java", "C++", "C#", "Go", "Ruby"],
            ),
            (
                SkillCategory::Software,
                &["Git", "Docker", "Jira", "Figma", "Photoshop", "VSCode", "Postman", "Excel"],
            ),
            (
                SkillCategory::Communication,
                &[
                    "communication",
                    "leadership",
                    "teamwork",
                    "public speaking",
                    "collaboration",
                    "adaptability",
                    "problem solving",
                ],
            ),
            (
                SkillCategory::Backend,
                &[
                    "Node.js",
                    "Express",
                    "Django",
                    "Flask",
                    "PostgreSQL",
                    "MongoDB",
                    "REST API",
                    "GraphQL",
                    "SQL",
                ],
            ),
            (
                SkillCategory::Frontend,
                &[
                    "React",
                    "Redux",
                    "HTML",
                    "CSS",
                    "Vue.js",
                    "Angular",
                    "Next.js",
                    "Tailwind",
                    "Bootstrap",
                ],
            ),
        ];

        Self {
            categories: entries
                .into_iter()
                .map(|(category, skills)| {
                    (category, skills.iter().map(|s| s.to_string()).collect::<Vec<_>>())
                })
                .collect(),
        }
    }
}

impl SkillDictionary {
    /// Loads an alternate dictionary from a JSON object keyed by category name.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill dictionary {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse skill dictionary {}", path.display()))
    }

    pub fn skills(&self, category: SkillCategory) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        self.categories.iter().map(|(c, s)| (*c, s.as_slice()))
    }

    pub fn total_skills(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

/// Canonical skills found in a résumé, keyed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedSkills(pub BTreeMap<SkillCategory, Vec<String>>);

impl ExtractedSkills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// Case-normalized terms of a résumé, grouped into clauses so multi-word
/// skills only match inside one clause.
#[derive(Debug, Clone, Default)]
pub struct ResumeTerms {
    clauses: Vec<Vec<String>>,
    unique: HashSet<String>,
}

impl ResumeTerms {
    pub fn from_text(text: &str) -> Self {
        let clauses = clauses(text);
        let unique = clauses.iter().flatten().cloned().collect();
        Self { clauses, unique }
    }

    pub fn contains_skill(&self, skill: &str) -> bool {
        let terms = skill_terms(skill);
        match terms.as_slice() {
            [] => false,
            [single] => self.unique.contains(single),
            phrase => self
                .clauses
                .iter()
                .any(|clause| clause.windows(phrase.len()).any(|window| window == phrase)),
        }
    }
}

/// Scans `resume_text` for every dictionary skill. Always returns every category.
pub fn extract_skills(resume_text: &str, dictionary: &SkillDictionary) -> ExtractedSkills {
    let terms = ResumeTerms::from_text(resume_text);

    ExtractedSkills(
        dictionary
            .iter()
            .map(|(category, skills)| {
                let found = skills
                    .iter()
                    .filter(|skill| terms.contains_skill(skill))
                    .cloned()
                    .collect();
                (category, found)
            })
            .collect(),
    )
}

const LIST_SEPARATORS: &[char] = &[',', ';', '/', '|', '(', ')', '[', ']', '{', '}', '"'];

/// Trailing punctuation that ends a clause (`public. Speaking` is not a phrase).
const CLAUSE_ENDINGS: &[char] = &['.', ':', '!', '?'];

/// Splits text into lowercase terms for skill matching.
///
/// Inner punctuation survives (`node.js`, `c++`, `c#`); edge punctuation other
/// than `+` and `#` is trimmed. Digit-only terms are dropped.
fn skill_terms(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || LIST_SEPARATORS.contains(&c))
        .filter_map(normalize_term)
        .collect()
}

/// Terms of `text` split into clauses at list separators and at words ending a sentence.
fn clauses(text: &str) -> Vec<Vec<String>> {
    let mut clauses = Vec::new();
    for chunk in text.split(LIST_SEPARATORS) {
        let mut current = Vec::new();
        for raw in chunk.split_whitespace() {
            current.extend(normalize_term(raw));
            if raw.ends_with(CLAUSE_ENDINGS) && !current.is_empty() {
                clauses.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            clauses.push(current);
        }
    }
    clauses
}

fn normalize_term(raw: &str) -> Option<String> {
    let term = raw.trim_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'));
    if term.is_empty() || term.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_react_docker_sql_example() {
        let skills = extract_skills("I used React, Docker and SQL daily", &SkillDictionary::default());
        assert_eq!(skills.get(SkillCategory::Frontend), ["React"]);
        assert_eq!(skills.get(SkillCategory::Software), ["Docker"]);
        assert_eq!(skills.get(SkillCategory::Backend), ["SQL"]);
        assert!(skills.get(SkillCategory::Languages).is_empty());
    }

    #[test]
    fn test_output_always_has_all_categories() {
        let skills = extract_skills("", &SkillDictionary::default());
        assert_eq!(skills.0.len(), 5);
        for category in SkillCategory::ALL {
            assert!(skills.0.contains_key(&category));
            assert!(skills.get(category).is_empty());
        }
    }

    #[test]
    fn test_results_are_subsets_in_dictionary_order_and_casing() {
        let dictionary = SkillDictionary::default();
        let text = "redux; TAILWIND; react/next.js. Also ruby, c++ and c# (and Go).";
        let skills = extract_skills(text, &dictionary);

        assert_eq!(skills.get(SkillCategory::Frontend), ["React", "Redux", "Next.js", "Tailwind"]);
        assert_eq!(skills.get(SkillCategory::Languages), ["C++", "C#", "Go", "Ruby"]);
        for (category, found) in &skills.0 {
            for skill in found {
                assert!(dictionary.skills(*category).contains(skill));
            }
        }
    }

    #[test]
    fn test_whole_term_not_substring() {
        let skills = extract_skills(
            "Golang services, JavaScripting, Expressive writing",
            &SkillDictionary::default(),
        );
        assert!(skills.get(SkillCategory::Languages).is_empty());
        assert!(skills.get(SkillCategory::Backend).is_empty());
    }

    #[test]
    fn test_multi_word_skills_match_as_phrases() {
        let dictionary = SkillDictionary::default();
        let skills = extract_skills(
            "Strong Problem Solving and public speaking. Designed a REST API.",
            &dictionary,
        );
        assert_eq!(
            skills.get(SkillCategory::Communication),
            ["public speaking", "problem solving"]
        );
        assert_eq!(skills.get(SkillCategory::Backend), ["REST API"]);

        let scattered = extract_skills("public transport, speaking engagements", &dictionary);
        assert!(scattered.get(SkillCategory::Communication).is_empty());
    }

    #[test]
    fn test_node_js_survives_sentence_punctuation() {
        let skills = extract_skills("Backend in Node.js.", &SkillDictionary::default());
        assert_eq!(skills.get(SkillCategory::Backend), ["Node.js"]);
    }

    #[test]
    fn test_skill_terms_drops_digits_and_trims_edges() {
        assert_eq!(
            skill_terms("(2019) Python3, 2020: 'Rust'!"),
            vec!["python3", "rust"]
        );
    }

    #[test]
    fn test_phrases_do_not_span_sentences_or_lists() {
        let dictionary = SkillDictionary::default();
        for text in [
            "Presented in public. Speaking of results, revenue grew.",
            "Problem: solving it took a week",
            "public, speaking",
        ] {
            let skills = extract_skills(text, &dictionary);
            assert!(skills.get(SkillCategory::Communication).is_empty(), "{text}");
        }
    }

    #[test]
    fn test_clauses_split_on_sentence_endings() {
        assert_eq!(
            clauses("Built APIs in Node.js. Led a team: five people"),
            vec![
                vec!["built", "apis", "in", "node.js"],
                vec!["led", "a", "team"],
                vec!["five", "people"],
            ]
        );
    }

    #[test]
    fn test_resume_terms_match_case_insensitively() {
        let terms = ResumeTerms::from_text("Git git GIT docker");
        assert!(terms.contains_skill("Git"));
        assert!(terms.contains_skill("DOCKER"));
        assert!(!terms.contains_skill("Jira"));
    }

    #[test]
    fn test_dictionary_deserializes_from_json() {
        let json = r#"{
            "languages": ["Rust"],
            "software": ["Cargo"],
            "communication": ["mentoring"],
            "backend": ["Axum"],
            "frontend": ["Leptos"]
        }"#;
        let dictionary: SkillDictionary = serde_json::from_str(json).unwrap();
        assert_eq!(dictionary.skills(SkillCategory::Languages), ["Rust"]);
        assert_eq!(dictionary.total_skills(), 5);

        let skills = extract_skills("Axum + rust services", &dictionary);
        assert_eq!(skills.get(SkillCategory::Backend), ["Axum"]);
        assert_eq!(skills.get(SkillCategory::Languages), ["Rust"]);
    }

    #[test]
    fn test_dictionary_missing_category_is_rejected() {
        let json = r#"{"languages": ["Rust"], "software": []}"#;
        let err = serde_json::from_str::<SkillDictionary>(json).unwrap_err();
        assert!(err.to_string().contains("missing categories"));
    }

    #[test]
    fn test_dictionary_blank_skill_is_rejected() {
        let json = r#"{
            "languages": ["Rust", "  "], "software": [], "communication": [],
            "backend": [], "frontend": []
        }"#;
        let err = serde_json::from_str::<SkillDictionary>(json).unwrap_err();
        assert!(err.to_string().contains("blank skill name"));
    }

    #[test]
    fn test_dictionary_loads_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills.json");
        std::fs::write(
            &path,
            r#"{
                "languages": ["Rust", "Zig"], "software": ["Cargo"], "communication": [],
                "backend": ["Axum"], "frontend": []
            }"#,
        )
        .unwrap();

        let dictionary = SkillDictionary::from_json_file(&path).unwrap();
        assert_eq!(dictionary.skills(SkillCategory::Languages), ["Rust", "Zig"]);
        assert_eq!(dictionary.total_skills(), 4);
    }

    #[test]
    fn test_dictionary_file_errors_name_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = SkillDictionary::from_json_file(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, r#"{"languages": ["Rust"]}"#).unwrap();
        let err = SkillDictionary::from_json_file(&broken).unwrap_err();
        assert!(err.to_string().contains("Failed to parse skill dictionary"));
    }

    #[test]
    fn test_dictionary_unknown_category_is_rejected() {
        let json = r#"{
            "languages": [], "software": [], "communication": [],
            "backend": [], "frontend": [], "devops": ["Terraform"]
        }"#;
        assert!(serde_json::from_str::<SkillDictionary>(json).is_err());
    }

    #[test]
    fn test_extracted_skills_serializes_by_category_name() {
        let skills = extract_skills("Django", &SkillDictionary::default());
        let value = serde_json::to_value(&skills).unwrap();
        assert_eq!(value["backend"][0], "Django");
        assert_eq!(value["languages"], serde_json::json!([]));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(SkillCategory::Communication.to_string(), "communication");
        assert_eq!(
            serde_json::to_string(&SkillCategory::Frontend).unwrap(),
            "\"frontend\""
        );
    }
}
